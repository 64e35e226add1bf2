use crate::capture::constants::{
    SUPPLEMENT_FAILED, SUPPLEMENT_FAILED_OTHER, SUPPLEMENT_NO_FILES, SUPPLEMENT_PARTIAL,
    SUPPLEMENT_SUCCESSFUL,
};
use crate::capture::types::{EventDetail, TransferAction, TransferEvent};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransferStatus {
    Started,
    Queued,
    InProgress,
    Successful,
    Failed,
    PartiallySuccessful,
    CompletedNoFiles,
    /// Raw result code of a completion without supplement, or the text of
    /// an action this tool does not know.
    Unrecognized(String),
}

impl TransferStatus {
    pub fn label(&self) -> &str {
        match self {
            TransferStatus::Started => "Started",
            TransferStatus::Queued => "Queued",
            TransferStatus::InProgress => "In Progress",
            TransferStatus::Successful => "Successful",
            TransferStatus::Failed => "Failed",
            TransferStatus::PartiallySuccessful => "Partially successful",
            TransferStatus::CompletedNoFiles => "Completed but no files transferred",
            TransferStatus::Unrecognized(text) => text,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(event: &TransferEvent) -> TransferStatus {
    match (&event.action, &event.detail) {
        (TransferAction::Started, _) => TransferStatus::Started,
        (TransferAction::Queued, _) => TransferStatus::Queued,
        (TransferAction::Progress, _) => TransferStatus::InProgress,
        (TransferAction::Completed, EventDetail::Completed(done)) => {
            classify_completion(&done.result_code, done.supplement.as_deref())
        }
        (TransferAction::Completed, _) => TransferStatus::Unrecognized(String::new()),
        (TransferAction::Other(text), _) => TransferStatus::Unrecognized(text.clone()),
    }
}

/// Known supplement codes in match order.
const SUPPLEMENT_OUTCOMES: [(&str, TransferStatus); 5] = [
    (SUPPLEMENT_SUCCESSFUL, TransferStatus::Successful),
    (SUPPLEMENT_FAILED, TransferStatus::Failed),
    (SUPPLEMENT_PARTIAL, TransferStatus::PartiallySuccessful),
    (SUPPLEMENT_NO_FILES, TransferStatus::CompletedNoFiles),
    (SUPPLEMENT_FAILED_OTHER, TransferStatus::Failed),
];

/// The product reports the outcome of a transfer in a free-text supplement
/// message, so the known message codes are matched as substrings. Any other
/// supplement is treated as a failure.
pub fn classify_completion(result_code: &str, supplement: Option<&str>) -> TransferStatus {
    let Some(supplement) = supplement else {
        return TransferStatus::Unrecognized(result_code.to_string());
    };

    SUPPLEMENT_OUTCOMES
        .iter()
        .find(|(code, _)| supplement.contains(code))
        .map(|(_, status)| status.clone())
        .unwrap_or(TransferStatus::Failed)
}

/// Outcome types a bounded listing can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeFilter {
    Successful,
    PartiallySuccessful,
    /// Includes completions that moved no files.
    Failed,
    /// Includes queued transfers.
    Started,
    InProgress,
}

impl OutcomeFilter {
    pub fn matches(self, status: &TransferStatus) -> bool {
        match self {
            OutcomeFilter::Successful => matches!(status, TransferStatus::Successful),
            OutcomeFilter::PartiallySuccessful => {
                matches!(status, TransferStatus::PartiallySuccessful)
            }
            OutcomeFilter::Failed => {
                matches!(
                    status,
                    TransferStatus::Failed | TransferStatus::CompletedNoFiles
                )
            }
            OutcomeFilter::Started => {
                matches!(status, TransferStatus::Started | TransferStatus::Queued)
            }
            OutcomeFilter::InProgress => matches!(status, TransferStatus::InProgress),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            OutcomeFilter::Successful => "successful",
            OutcomeFilter::PartiallySuccessful => "partially successful",
            OutcomeFilter::Failed => "failed",
            OutcomeFilter::Started => "started",
            OutcomeFilter::InProgress => "in progress",
        }
    }
}
