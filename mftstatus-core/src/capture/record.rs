use crate::capture::constants::{FIELD_SEPARATOR, TOPIC_MARKER, TRANSACTION_CLOSE_TAG};

/// A capture log line split into its three fields:
///
/// `<routing> ! <metadata> ! <payload>`
///
/// The payload keeps any further separators it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub routing: &'a str,
    pub metadata: &'a str,
    pub payload: &'a str,
}

/// Why a line is not a transaction candidate.
///
/// Most lines in the capture log are unrelated diagnostics, so none of
/// these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordSkip {
    #[error("line does not carry the transfer log topic")]
    NoTopicMarker,

    #[error("line has no closing transaction tag (truncated record)")]
    Truncated,

    #[error("line has fewer than three separated fields")]
    MissingSeparator,
}

pub fn split_record(line: &str) -> Result<RawRecord<'_>, RecordSkip> {
    if !line.contains(TOPIC_MARKER) {
        return Err(RecordSkip::NoTopicMarker);
    }
    let Some(close) = line.rfind(TRANSACTION_CLOSE_TAG) else {
        return Err(RecordSkip::Truncated);
    };

    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let (Some(routing), Some(metadata), Some(payload)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordSkip::MissingSeparator);
    };

    if !routing.contains(TOPIC_MARKER) {
        return Err(RecordSkip::NoTopicMarker);
    }

    // Anything after the closing tag is not part of the document.
    let payload_start = line.len() - payload.len();
    let payload_end = close + TRANSACTION_CLOSE_TAG.len();
    if payload_end <= payload_start {
        return Err(RecordSkip::Truncated);
    }
    let payload = line[payload_start..payload_end].trim_start();

    Ok(RawRecord {
        routing,
        metadata,
        payload,
    })
}
