use crate::capture::classify::{OutcomeFilter, classify};
use crate::capture::constants::NO_TRANSFER_LOGS;
use crate::capture::index::{ConflictPolicy, RecordOutcome, StatusIndex};
use crate::capture::render::{render_json_pretty, render_narrative, render_table};
use crate::capture::scan::{ScanStats, TransactionStream};
use crate::capture::source::{LineSource, ScanDirection, open_log};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Latest status of every transfer, optionally narrowed.
    List(ListQuery),
    /// Every publication of one transfer, or of all of them.
    Detail(DetailQuery),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: Option<OutcomeFilter>,
    /// Stop once this many matching transfers have been found. Zero means
    /// no cap.
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn recent(filter: OutcomeFilter, limit: usize) -> Self {
        Self {
            filter: Some(filter),
            limit: Some(limit),
        }
    }

    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|n| *n > 0)
    }

    /// Bounded queries read newest-first so they can stop early.
    pub fn direction(&self) -> ScanDirection {
        if self.effective_limit().is_some() {
            ScanDirection::Backward
        } else {
            ScanDirection::Forward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailQuery {
    /// A transfer ID in any case, or `*`.
    pub transfer: String,
    pub format: DetailFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailFormat {
    #[default]
    Narrative,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The capture log does not exist yet.
    NoTransferLogs,
    Listed { rows: usize, stats: ScanStats },
    Detailed { matched: usize, stats: ScanStats },
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to open capture log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read capture log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("failed to render transfer as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs one query against the capture log at `path`, writing the result to
/// `out`.
///
/// Output already produced is kept when the log becomes unreadable part way
/// through; the read error is returned afterwards.
pub fn run_query<W: Write>(
    path: &Path,
    query: &Query,
    options: RenderOptions,
    out: &mut W,
) -> Result<QueryOutcome, QueryError> {
    let direction = match query {
        Query::List(list) => list.direction(),
        Query::Detail(_) => ScanDirection::Forward,
    };

    let source = open_log(path, direction).map_err(|source| QueryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(mut source) = source else {
        tracing::info!(path = %path.display(), "capture log not found");
        writeln!(out, "{NO_TRANSFER_LOGS}").map_err(QueryError::Output)?;
        return Ok(QueryOutcome::NoTransferLogs);
    };

    let read_error = |source| QueryError::Read {
        path: path.to_path_buf(),
        source,
    };

    match query {
        Query::List(list) => {
            let (rows, scanned) = write_listing(source.as_mut(), list, options, out)?;
            let stats = scanned.map_err(read_error)?;

            Ok(QueryOutcome::Listed { rows, stats })
        }
        Query::Detail(detail) => {
            let (matched, scanned) = write_details(source.as_mut(), detail, out)?;
            let stats = scanned.map_err(read_error)?;

            log_scan(&stats, matched);
            Ok(QueryOutcome::Detailed { matched, stats })
        }
    }
}

/// Builds the status index for a listing.
///
/// The scan result is returned beside the index so that a read failure
/// still leaves everything gathered so far available for rendering.
pub fn list_statuses(
    source: &mut dyn LineSource,
    list: &ListQuery,
) -> (StatusIndex, ScanStats, io::Result<()>) {
    let policy = ConflictPolicy::for_direction(list.direction());
    let mut index = StatusIndex::new(policy);
    let mut stream = TransactionStream::new(source);

    let scanned = collect_statuses(
        &mut stream,
        &mut index,
        list.filter,
        list.effective_limit(),
    );
    (index, stream.stats(), scanned)
}

/// Feeds every decoded event into `index`.
///
/// With a `limit` and a first-wins index, stops as soon as `limit` distinct
/// transfers matching `filter` have been recorded. An overwriting index
/// cannot know a transfer's final status before the end of the log, so the
/// limit does not stop it.
pub fn collect_statuses(
    stream: &mut TransactionStream<'_>,
    index: &mut StatusIndex,
    filter: Option<OutcomeFilter>,
    limit: Option<usize>,
) -> io::Result<()> {
    let limit = limit
        .filter(|n| *n > 0)
        .filter(|_| index.policy() == ConflictPolicy::FirstWins);
    let mut matched = 0;

    while let Some(event) = stream.next_event()? {
        let status = classify(&event);
        let hit = filter.is_none_or(|f| f.matches(&status));

        if index.record(event.id, status) == RecordOutcome::Inserted && hit {
            matched += 1;
            if limit.is_some_and(|limit| matched >= limit) {
                stream.mark_stopped_early();
                break;
            }
        }
    }
    Ok(())
}

/// Renders the status table for a listing.
///
/// The table is written even when the log becomes unreadable part way
/// through; the read error is handed back beside the row count.
pub(crate) fn write_listing<W: Write>(
    source: &mut dyn LineSource,
    list: &ListQuery,
    options: RenderOptions,
    out: &mut W,
) -> Result<(usize, io::Result<ScanStats>), QueryError> {
    let (index, stats, scanned) = list_statuses(source, list);
    let rows: Vec<_> = index
        .matching(list.filter)
        .take(list.effective_limit().unwrap_or(usize::MAX))
        .collect();
    let row_count = rows.len();

    out.write_all(render_table(rows, options.color).as_bytes())
        .map_err(QueryError::Output)?;

    log_scan(&stats, index.len());
    Ok((row_count, scanned.map(|()| stats)))
}

/// Writes every publication of the selected transfer(s) in log order.
pub(crate) fn write_details<W: Write>(
    source: &mut dyn LineSource,
    detail: &DetailQuery,
    out: &mut W,
) -> Result<(usize, io::Result<ScanStats>), QueryError> {
    let mut stream = TransactionStream::new(source);
    let mut matched = 0;

    loop {
        let event = match stream.next_event() {
            Ok(Some(event)) => event,
            Ok(None) => break,
            Err(e) => return Ok((matched, Err(e))),
        };
        if !event.id.matches(&detail.transfer) {
            continue;
        }
        matched += 1;

        let rendered = match detail.format {
            DetailFormat::Narrative => render_narrative(&event),
            DetailFormat::Json => render_json_pretty(&event)? + "\n",
        };
        out.write_all(rendered.as_bytes())
            .map_err(QueryError::Output)?;
    }

    Ok((matched, Ok(stream.stats())))
}

fn log_scan(stats: &ScanStats, entries: usize) {
    tracing::debug!(
        lines = stats.lines,
        candidates = stats.candidates,
        decoded = stats.decoded,
        rejected = stats.rejected,
        stopped_early = stats.stopped_early,
        entries,
        "capture log scan finished"
    );
}
