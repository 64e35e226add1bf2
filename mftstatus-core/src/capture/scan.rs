use crate::capture::decode::{DecodeError, decode_transaction};
use crate::capture::record::split_record;
use crate::capture::source::LineSource;
use crate::capture::types::TransferEvent;
use std::io;

/// Counters for one pass over the capture log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: u64,
    /// Lines that looked like transfer publications.
    pub candidates: u64,
    pub decoded: u64,
    /// Candidates dropped because they did not decode.
    pub rejected: u64,
    /// The scan stopped before reaching the end of the log.
    pub stopped_early: bool,
}

/// Turns raw log lines into decoded transfer events.
///
/// Lines that are not transfer publications, and publications that fail to
/// decode, are skipped. Only I/O errors from the underlying source end the
/// stream early.
pub struct TransactionStream<'a> {
    source: &'a mut dyn LineSource,
    stats: ScanStats,
}

impl<'a> TransactionStream<'a> {
    pub fn new(source: &'a mut dyn LineSource) -> Self {
        Self {
            source,
            stats: ScanStats::default(),
        }
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub(crate) fn mark_stopped_early(&mut self) {
        self.stats.stopped_early = true;
    }

    pub fn next_event(&mut self) -> io::Result<Option<TransferEvent>> {
        while let Some(line) = self.source.next_line()? {
            self.stats.lines += 1;

            let record = match split_record(&line) {
                Ok(record) => record,
                Err(skip) => {
                    tracing::debug!(line = self.stats.lines, reason = %skip, "line skipped");
                    continue;
                }
            };
            self.stats.candidates += 1;

            match decode_transaction(record.payload) {
                Ok(event) => {
                    self.stats.decoded += 1;
                    return Ok(Some(event));
                }
                Err(DecodeError::MissingTransferId) => {
                    self.stats.rejected += 1;
                    tracing::debug!(line = self.stats.lines, "transaction without ID dropped");
                }
                Err(e) => {
                    self.stats.rejected += 1;
                    tracing::warn!(
                        line = self.stats.lines,
                        error = %e,
                        "skipping malformed transaction"
                    );
                }
            }
        }
        Ok(None)
    }
}
