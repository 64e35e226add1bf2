use crate::harness::{CapturedEvent, init_test_tracing};
use mftstatus_core::capture::{Query, QueryOutcome, RenderOptions, run_query};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tempfile::TempDir;

pub const SUCCESSFUL: &str = "BFGRP0032I: The file transfer request has successfully completed.";
pub const PARTIAL: &str =
    "BFGRP0033I: The file transfer request has completed with partial success.";
pub const FAILED: &str =
    "BFGRP0034I: The file transfer request has completed with no files being transferred.";
pub const NO_FILES: &str = "BFGRP0036I: The transfer completed but no files were transferred.";

/// One item of a progress publication.
#[derive(Debug, Clone)]
pub enum Item {
    File { path: String, size: u64 },
    Queue { name: String },
}

/// A capture log written to a temporary directory.
///
/// Records are appended in the order they are added, oldest first, just as
/// the agent would write them.
pub struct CaptureLog {
    dir: TempDir,
    lines: Vec<String>,
    minute: u32,
}

impl CaptureLog {
    pub fn new() -> Self {
        // Initialize tracing (this must happen first).
        let events = events();
        init_test_tracing(events.clone());

        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
            lines: Vec::new(),
            minute: 0,
        }
    }

    /// Where the log is (or would be) written.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("capture0.log")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A line that is not a transfer publication.
    pub fn noise(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// A transfer publication with an arbitrary payload.
    pub fn raw(mut self, payload: &str) -> Self {
        self.lines.push(wrap(payload));
        self
    }

    pub fn queued(mut self, id: &str) -> Self {
        let time = self.tick();
        self.lines.push(wrap(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="{time}">queued</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/></transaction>"#
        )));
        self
    }

    pub fn started(mut self, id: &str) -> Self {
        let time = self.tick();
        self.lines.push(wrap(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="{time}">started</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/><transferSet startTime="{time}" total="1"/></transaction>"#
        )));
        self
    }

    pub fn progress(mut self, id: &str, items: &[Item]) -> Self {
        let time = self.tick();
        let count = items.len();
        let items: String = items.iter().map(item_xml).collect();
        self.lines.push(wrap(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="{time}">progress</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/><transferSet index="0" size="{count}" startTime="{time}" total="{count}" bytesSent="2048">{items}</transferSet></transaction>"#
        )));
        self
    }

    pub fn completed(mut self, id: &str, supplement: &str) -> Self {
        let time = self.tick();
        self.lines.push(wrap(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><transaction version="6.00" ID="{id}" agentRole="sourceAgent"><action time="{time}">completed</action><sourceAgent agent="SRC" QMgr="QM1"/><destinationAgent agent="DEST" QMgr="QM1"/><status resultCode="0"><supplement>{supplement}</supplement></status><statistics><actualStartTime>2021-03-04T10:00:00.000Z</actualStartTime><retryCount>0</retryCount><numFileFailures>0</numFileFailures><numFileWarnings>0</numFileWarnings></statistics></transaction>"#
        )));
        self
    }

    /// Writes every record added so far.
    pub fn write(self) -> Self {
        let mut text = self.lines.join("\n");
        text.push('\n');
        fs::write(self.path(), text).expect("failed to write capture log");
        self
    }

    /// Runs `query` against the written log and returns its uncolored output.
    pub fn query(&self, query: &Query) -> (QueryOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_query(&self.path(), query, RenderOptions::default(), &mut out)
            .expect("query failed");
        (outcome, String::from_utf8(out).expect("output is not UTF-8"))
    }

    /// Events recorded by every test in this binary so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }

    fn tick(&mut self) -> String {
        self.minute += 1;
        format!(
            "2021-03-04T{:02}:{:02}:00.000Z",
            10 + self.minute / 60,
            self.minute % 60
        )
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Transfer IDs and statuses of the rows in a rendered table.
pub fn table_rows(out: &str) -> Vec<(String, String)> {
    out.lines()
        .skip(2)
        .filter_map(|row| row.split_once('\t'))
        .map(|(id, status)| (id.trim().to_string(), status.to_string()))
        .collect()
}

fn wrap(payload: &str) -> String {
    format!("SYSTEM.FTE/Log/SRC/TRANSFER!2021-03-04T10:00:00Z!{payload}")
}

fn item_xml(item: &Item) -> String {
    let source = match item {
        Item::File { path, size } => {
            format!(r#"<source disposition="leave" type="file"><file size="{size}">{path}</file></source>"#)
        }
        Item::Queue { name } => {
            format!(r#"<source disposition="leave" type="queue"><queue>{name}</queue></source>"#)
        }
    };
    format!(
        r#"<item mode="binary">{source}<destination exist="overwrite" type="file"><file>/out/item.dat</file></destination><status resultCode="0"/></item>"#
    )
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}
