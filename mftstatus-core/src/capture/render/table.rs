use crate::capture::classify::TransferStatus;
use crate::capture::types::TransferId;
use owo_colors::OwoColorize;

const ID_WIDTH: usize = 48;
const STATUS_WIDTH: usize = 18;

/// Column titles and the separator row under them.
pub fn table_header() -> String {
    format!(
        " {:<ID_WIDTH$}\t{}\n{}\t{}\n",
        "Transfer ID",
        "Status",
        "-".repeat(ID_WIDTH + 1),
        "-".repeat(STATUS_WIDTH)
    )
}

pub fn render_table<'a>(
    rows: impl IntoIterator<Item = (&'a TransferId, &'a TransferStatus)>,
    color: bool,
) -> String {
    let mut out = table_header();

    for (id, status) in rows {
        let status = if color {
            paint(status)
        } else {
            status.label().to_string()
        };
        out.push_str(&format!(" {:<ID_WIDTH$}\t{}\n", id.as_str(), status));
    }

    out
}

fn paint(status: &TransferStatus) -> String {
    let label = status.label();
    match status {
        TransferStatus::Successful => label.green().to_string(),
        TransferStatus::Failed => label.red().to_string(),
        TransferStatus::PartiallySuccessful | TransferStatus::CompletedNoFiles => {
            label.yellow().to_string()
        }
        TransferStatus::Started | TransferStatus::Queued | TransferStatus::InProgress => {
            label.cyan().to_string()
        }
        TransferStatus::Unrecognized(_) => label.to_string(),
    }
}
