use crate::capture::{
    DetailFormat, DetailQuery, ListQuery, OutcomeFilter, Query, QueryOutcome, RenderOptions,
    run_query,
};
use crate::locate::{LocatorInputs, resolve_log_path};
use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

const BANNER: &str = "Managed File Transfer Status Utility";

pub const EXAMPLES: &str = "\
Locating the capture log:
  Pass --lf <capture log file>, or set MFT_CAPTURE_LOG_PATH,
  or set MFT_AGENT_NAME, MFT_COORDINATION_QM (or MFT_AGENT_CONFIG_FILE) and BFG_DATA.
  --lf takes precedence over MFT_CAPTURE_LOG_PATH when both are given.

Examples:
  mftstatus --lf=/var/mqm/mqft/logs/QM1/agents/SRC/logs/capture0.log
  mftstatus --id=414d51204d46544841514d20202020205947c35e2105470f
  mftstatus --id='*' --json
  mftstatus --fl=5";

#[derive(Args, Debug, Clone, Default)]
#[command(group(
    ArgGroup::new("recent")
        .args(["successful", "partially_successful", "failed", "started", "in_progress"])
        .multiple(false)
))]
pub struct StatusArgs {
    /// Capture log file path
    #[arg(long = "lf", value_name = "PATH", env = "MFT_CAPTURE_LOG_PATH")]
    pub log_file: Option<PathBuf>,

    /// Display details of a single transfer; specify * for all transfers
    #[arg(long = "id", value_name = "TRANSFER_ID", conflicts_with = "recent")]
    pub transfer_id: Option<String>,

    /// Display transfer details as JSON documents
    #[arg(long, requires = "transfer_id")]
    pub json: bool,

    /// Display recent <N> successful transfers
    #[arg(long = "sf", value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    pub successful: Option<usize>,

    /// Display recent <N> partially successful transfers
    #[arg(long = "ps", value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    pub partially_successful: Option<usize>,

    /// Display recent <N> failed transfers
    #[arg(long = "fl", value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    pub failed: Option<usize>,

    /// Display recent <N> transfers in 'started' state
    #[arg(long = "st", value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    pub started: Option<usize>,

    /// Display recent <N> 'In Progress' transfers
    #[arg(long = "ip", value_name = "N", num_args = 0..=1, default_missing_value = "0")]
    pub in_progress: Option<usize>,

    /// Never color the status column
    #[arg(long)]
    pub no_color: bool,
}

impl StatusArgs {
    pub fn query(&self) -> Query {
        if let Some(transfer) = &self.transfer_id {
            return Query::Detail(DetailQuery {
                transfer: transfer.clone(),
                format: if self.json {
                    DetailFormat::Json
                } else {
                    DetailFormat::Narrative
                },
            });
        }

        let recent = [
            (OutcomeFilter::Successful, self.successful),
            (OutcomeFilter::PartiallySuccessful, self.partially_successful),
            (OutcomeFilter::Failed, self.failed),
            (OutcomeFilter::Started, self.started),
            (OutcomeFilter::InProgress, self.in_progress),
        ]
        .into_iter()
        .find_map(|(filter, n)| n.map(|n| ListQuery::recent(filter, n)));

        Query::List(recent.unwrap_or_else(ListQuery::all))
    }
}

pub fn run_status(args: StatusArgs) -> Result<()> {
    let inputs = LocatorInputs::from_env(args.log_file.clone());
    let path = match resolve_log_path(&inputs) {
        Ok(path) => path,
        Err(err) => {
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
                eprintln!();
                eprintln!("{EXAMPLES}");
            }
            return Err(err).context("cannot locate the capture log");
        }
    };

    let stdout = io::stdout();
    let options = RenderOptions {
        color: !args.no_color && stdout.is_terminal(),
    };
    let mut out = stdout.lock();

    writeln!(out, "{BANNER}")?;
    writeln!(out, "\nDisplaying transfer details from {}\n", path.display())?;

    let query = args.query();
    let outcome = run_query(&path, &query, options, &mut out)?;

    if let (Query::Detail(detail), QueryOutcome::Detailed { matched: 0, .. }) = (&query, &outcome) {
        writeln!(out, "No transfer records found for {}", detail.transfer)?;
    }

    out.flush()?;
    Ok(())
}
