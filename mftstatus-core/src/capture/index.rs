use crate::capture::classify::{OutcomeFilter, TransferStatus};
use crate::capture::source::ScanDirection;
use crate::capture::types::TransferId;
use std::collections::HashMap;

/// How a second status for a known transfer is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Later writes replace earlier ones. Used when scanning oldest-first.
    Overwrite,
    /// The first write is kept. Used when scanning newest-first, where the
    /// first record seen for an ID is its chronologically last one.
    FirstWins,
}

impl ConflictPolicy {
    pub fn for_direction(direction: ScanDirection) -> Self {
        match direction {
            ScanDirection::Forward => ConflictPolicy::Overwrite,
            ScanDirection::Backward => ConflictPolicy::FirstWins,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// First status for this transfer.
    Inserted,
    /// An existing status was overwritten.
    Replaced,
    /// The write lost to an earlier one.
    Ignored,
}

/// Most recent status per transfer, for a single query.
///
/// Entries keep the order in which their transfer was first recorded.
#[derive(Debug)]
pub struct StatusIndex {
    policy: ConflictPolicy,
    slots: HashMap<TransferId, usize>,
    entries: Vec<(TransferId, TransferStatus)>,
}

impl StatusIndex {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            policy,
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    pub fn record(&mut self, id: TransferId, status: TransferStatus) -> RecordOutcome {
        if let Some(&slot) = self.slots.get(&id) {
            return match self.policy {
                ConflictPolicy::FirstWins => RecordOutcome::Ignored,
                ConflictPolicy::Overwrite => {
                    self.entries[slot].1 = status;
                    RecordOutcome::Replaced
                }
            };
        }

        self.slots.insert(id.clone(), self.entries.len());
        self.entries.push((id, status));
        RecordOutcome::Inserted
    }

    pub fn get(&self, id: &TransferId) -> Option<&TransferStatus> {
        self.slots.get(id).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TransferId, &TransferStatus)> {
        self.entries.iter().map(|(id, status)| (id, status))
    }

    /// Entries passing `filter`; all of them when there is none.
    pub fn matching(
        &self,
        filter: Option<OutcomeFilter>,
    ) -> impl Iterator<Item = (&TransferId, &TransferStatus)> {
        self.iter()
            .filter(move |(_, status)| filter.is_none_or(|f| f.matches(status)))
    }

    pub fn count_matching(&self, filter: Option<OutcomeFilter>) -> usize {
        self.matching(filter).count()
    }
}
