use std::fmt;

/// Transfer identifier in canonical (upper-case) form.
///
/// The product writes IDs in lower-case hex while operators usually paste
/// them upper-case, so comparisons are case-insensitive.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct TransferId(String);

impl TransferId {
    /// Returns `None` for IDs that are absent once trimmed.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(TransferId(trimmed.to_ascii_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Matches a literal ID (any case) or the `*` wildcard.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        selector == super::constants::ALL_TRANSFERS || self.0.eq_ignore_ascii_case(selector)
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferAction {
    Queued,
    Started,
    Progress,
    Completed,
    /// Any action text the product may add later; kept verbatim.
    Other(String),
}

impl TransferAction {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("completed") {
            TransferAction::Completed
        } else if text.eq_ignore_ascii_case("progress") {
            TransferAction::Progress
        } else if text.eq_ignore_ascii_case("started") {
            TransferAction::Started
        } else if text.eq_ignore_ascii_case("queued") {
            TransferAction::Queued
        } else {
            TransferAction::Other(text.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransferAction::Queued => "queued",
            TransferAction::Started => "started",
            TransferAction::Progress => "progress",
            TransferAction::Completed => "completed",
            TransferAction::Other(text) => text,
        }
    }
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded `transaction` publication.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEvent {
    pub id: TransferId,
    pub action: TransferAction,
    /// Publish time of the action, verbatim from the log.
    pub timestamp: String,
    pub source_agent: String,
    pub destination_agent: String,
    pub detail: EventDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    Completed(CompletedDetail),
    Progress(ProgressDetail),
    /// Shared by `started` and `queued` publications.
    Started(StartedDetail),
    None,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletedDetail {
    pub result_code: String,
    /// Absent when the status element carries no supplement message.
    pub supplement: Option<String>,
    pub statistics: Statistics,
}

/// Every field is optional in the log; absence leaves it empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub actual_start_time: String,
    pub retry_count: String,
    pub num_file_failures: String,
    pub num_file_warnings: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressDetail {
    pub start_time: String,
    pub total: String,
    pub bytes_sent: String,
    pub items: Vec<TransferItem>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StartedDetail {
    /// `transferSet/@startTime` when present, otherwise the publish time.
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferItem {
    pub source: ItemEndpoint,
    pub destination: ItemEndpoint,
    pub result_code: String,
    pub supplement: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    File,
    Queue,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemEndpoint {
    pub kind: EndpointKind,
    pub name: String,
    /// Byte size as written by the product, `-1` when not applicable.
    pub size: String,
}

impl ItemEndpoint {
    pub fn unknown() -> Self {
        ItemEndpoint {
            kind: EndpointKind::Unknown,
            name: String::new(),
            size: super::constants::UNKNOWN_SIZE.to_string(),
        }
    }
}
