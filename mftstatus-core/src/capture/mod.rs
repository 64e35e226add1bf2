//! Capture Log Pipeline
//!
//! The transfer agent appends one record to its capture log for every
//! publication on the transfer log topic: queued, started, progress and
//! completed. This module reads that log back and answers three questions:
//!
//! - **List**: what is the latest status of every transfer?
//! - **Recent**: which were the last N transfers with a given outcome?
//! - **Detail**: what did the log say about one transfer (or all of them),
//!   as text or as JSON?
//!
//! Every line flows through the same stages independently. Only the status
//! index keeps state across lines, and it lives for a single query.
//!
//! The overall data processing architecture is:
//!
//! LineSource (forward or backward)
//! split_record
//! decode_transaction
//! TransferEvent
//! classify
//! StatusIndex
//! render_table / render_narrative / render_json
//!

mod classify;
mod constants;
mod decode;
mod index;
mod query;
mod record;
pub mod render;
mod scan;
mod source;
mod timing;
mod types;

#[cfg(test)]
mod tests;

pub use classify::{OutcomeFilter, TransferStatus, classify, classify_completion};
pub use constants::{ALL_TRANSFERS, NO_TRANSFER_LOGS, TOPIC_MARKER};
pub use decode::{DecodeError, decode_transaction};
pub use index::{ConflictPolicy, RecordOutcome, StatusIndex};
pub use query::{
    DetailFormat, DetailQuery, ListQuery, Query, QueryError, QueryOutcome, RenderOptions,
    collect_statuses, list_statuses, run_query,
};
pub use record::{RawRecord, RecordSkip, split_record};
pub use scan::{ScanStats, TransactionStream};
pub use source::{BackwardLines, ForwardLines, LineSource, ScanDirection, open_log};
pub use timing::{elapsed, format_elapsed, parse_timestamp};
pub use types::{
    CompletedDetail, EndpointKind, EventDetail, ItemEndpoint, ProgressDetail, StartedDetail,
    Statistics, TransferAction, TransferEvent, TransferId, TransferItem,
};
