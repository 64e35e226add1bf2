use clap::Parser;
use mftstatus_core::cli::status::{EXAMPLES, StatusArgs, run_status};
use mftstatus_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "mftstatus",
    version,
    about = "Status of managed file transfers, read from an agent's capture log",
    after_help = EXAMPLES
)]
struct Cli {
    #[command(flatten)]
    status: StatusArgs,
}

fn main() {
    let cli = Cli::parse();

    init_logging(default_log_format());

    if let Err(e) = run_status(cli.status) {
        tracing::debug!(error = ?e, "status command failed");
        eprintln!("mftstatus: {e:#}");
        std::process::exit(1);
    }
}
