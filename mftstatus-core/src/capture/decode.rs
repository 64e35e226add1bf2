//! Transaction payload decoding.
//!
//! The payload is deserialized with `quick-xml`'s serde support into a loose
//! mirror of the product's TransferLog schema. Every element is optional at
//! this layer; missing pieces become empty strings in [`TransferEvent`] so
//! one incomplete publication never stops a scan.

use crate::capture::constants::{TRANSACTION_ELEMENT, UNKNOWN_SIZE};
use crate::capture::types::{
    CompletedDetail, EndpointKind, EventDetail, ItemEndpoint, ProgressDetail, StartedDetail,
    Statistics, TransferAction, TransferEvent, TransferId, TransferItem,
};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("payload is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("payload does not match the transaction schema: {0}")]
    Schema(#[from] quick_xml::de::DeError),

    #[error("expected a <transaction> document, found <{found}>")]
    NotATransaction { found: String },

    #[error("payload contains no elements")]
    Empty,

    #[error("transaction has no ID attribute")]
    MissingTransferId,

    #[error("transaction has no action element")]
    MissingAction,
}

pub fn decode_transaction(payload: &str) -> Result<TransferEvent, DecodeError> {
    ensure_transaction_root(payload)?;

    let xml: TransactionXml = quick_xml::de::from_str(payload)?;

    let id = xml
        .id
        .as_deref()
        .and_then(TransferId::parse)
        .ok_or(DecodeError::MissingTransferId)?;
    let action_xml = xml.action.ok_or(DecodeError::MissingAction)?;
    let action = TransferAction::parse(&action_xml.text);
    let timestamp = action_xml.time;

    let detail = match action {
        TransferAction::Completed => {
            EventDetail::Completed(completed_detail(xml.status, xml.statistics))
        }
        TransferAction::Progress => {
            EventDetail::Progress(progress_detail(xml.transfer_set.unwrap_or_default()))
        }
        TransferAction::Started | TransferAction::Queued => EventDetail::Started(StartedDetail {
            start_time: xml
                .transfer_set
                .map(|set| set.start_time)
                .unwrap_or_else(|| timestamp.clone()),
        }),
        TransferAction::Other(_) => EventDetail::None,
    };

    Ok(TransferEvent {
        id,
        action,
        timestamp,
        source_agent: xml.source_agent.map(|a| a.agent).unwrap_or_default(),
        destination_agent: xml.destination_agent.map(|a| a.agent).unwrap_or_default(),
        detail,
    })
}

/// Checks the document element before handing the payload to serde, which
/// accepts any root name.
fn ensure_transaction_root(payload: &str) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(payload);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name();
                return if name.as_ref() == TRANSACTION_ELEMENT.as_bytes() {
                    Ok(())
                } else {
                    Err(DecodeError::NotATransaction {
                        found: String::from_utf8_lossy(name.as_ref()).into_owned(),
                    })
                };
            }
            Event::Eof => return Err(DecodeError::Empty),
            _ => {}
        }
    }
}

fn completed_detail(
    status: Option<StatusXml>,
    statistics: Option<StatisticsXml>,
) -> CompletedDetail {
    let (result_code, supplement) = status
        .map(|s| (s.result_code, s.supplements.into_iter().next()))
        .unwrap_or_default();
    let statistics = statistics.unwrap_or_default();

    CompletedDetail {
        result_code,
        supplement,
        statistics: Statistics {
            actual_start_time: statistics.actual_start_time.unwrap_or_default(),
            retry_count: statistics.retry_count.unwrap_or_default(),
            num_file_failures: statistics.num_file_failures.unwrap_or_default(),
            num_file_warnings: statistics.num_file_warnings.unwrap_or_default(),
        },
    }
}

fn progress_detail(set: TransferSetXml) -> ProgressDetail {
    ProgressDetail {
        start_time: set.start_time,
        total: set.total,
        bytes_sent: set.bytes_sent,
        items: set.items.into_iter().map(transfer_item).collect(),
    }
}

fn transfer_item(item: ItemXml) -> TransferItem {
    let (result_code, supplement) = item
        .status
        .map(|s| (s.result_code, s.supplements.into_iter().next()))
        .unwrap_or_default();

    TransferItem {
        source: endpoint(item.source),
        destination: endpoint(item.destination),
        result_code,
        supplement,
    }
}

/// A queue endpoint takes precedence over a file endpoint, as in the
/// product's own tooling.
fn endpoint(xml: Option<EndpointXml>) -> ItemEndpoint {
    let Some(xml) = xml else {
        return ItemEndpoint::unknown();
    };

    if let Some(queue) = xml.queue {
        return ItemEndpoint {
            kind: EndpointKind::Queue,
            name: queue.name,
            size: UNKNOWN_SIZE.to_string(),
        };
    }
    if let Some(file) = xml.file {
        return ItemEndpoint {
            kind: EndpointKind::File,
            name: file.name,
            size: file
                .size
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_SIZE.to_string()),
        };
    }
    ItemEndpoint::unknown()
}

//-----------------------------------------------------------------------------
// Schema mirror
//-----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TransactionXml {
    #[serde(rename = "@ID")]
    id: Option<String>,
    action: Option<ActionXml>,
    #[serde(rename = "sourceAgent")]
    source_agent: Option<AgentXml>,
    #[serde(rename = "destinationAgent")]
    destination_agent: Option<AgentXml>,
    status: Option<StatusXml>,
    statistics: Option<StatisticsXml>,
    #[serde(rename = "transferSet")]
    transfer_set: Option<TransferSetXml>,
}

#[derive(Debug, Deserialize)]
struct ActionXml {
    #[serde(rename = "@time", default)]
    time: String,
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct AgentXml {
    #[serde(rename = "@agent", default)]
    agent: String,
}

#[derive(Debug, Deserialize)]
struct StatusXml {
    #[serde(rename = "@resultCode", default)]
    result_code: String,
    #[serde(rename = "supplement", default)]
    supplements: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsXml {
    actual_start_time: Option<String>,
    retry_count: Option<String>,
    num_file_failures: Option<String>,
    num_file_warnings: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TransferSetXml {
    #[serde(rename = "@startTime", default)]
    start_time: String,
    #[serde(rename = "@total", default)]
    total: String,
    #[serde(rename = "@bytesSent", default)]
    bytes_sent: String,
    #[serde(rename = "item", default)]
    items: Vec<ItemXml>,
}

#[derive(Debug, Deserialize)]
struct ItemXml {
    source: Option<EndpointXml>,
    destination: Option<EndpointXml>,
    status: Option<StatusXml>,
}

#[derive(Debug, Deserialize)]
struct EndpointXml {
    queue: Option<QueueXml>,
    file: Option<FileXml>,
}

#[derive(Debug, Deserialize)]
struct QueueXml {
    #[serde(rename = "$text", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct FileXml {
    #[serde(rename = "@size")]
    size: Option<String>,
    #[serde(rename = "$text", default)]
    name: String,
}
