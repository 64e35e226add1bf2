use crate::capture::constants::BACKWARD_CHUNK_SIZE;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Oldest record first.
    Forward,
    /// Newest record first, reading the file from its end.
    Backward,
}

/// A stream of raw log lines.
///
/// `Ok(None)` marks the end of the stream; it is never an error.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Opens the capture log for a scan in the given direction.
///
/// A missing file yields `Ok(None)`: an agent that has not run a transfer
/// yet has no capture log. Records appended after this call are not seen.
pub fn open_log(path: &Path, direction: ScanDirection) -> io::Result<Option<Box<dyn LineSource>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let len = file.metadata()?.len();

    let source: Box<dyn LineSource> = match direction {
        ScanDirection::Forward => Box::new(ForwardLines::new(BufReader::new(file.take(len)))),
        ScanDirection::Backward => Box::new(BackwardLines::with_len(file, len)),
    };
    Ok(Some(source))
}

//-----------------------------------------------------------------------------
// Forward
//-----------------------------------------------------------------------------

pub struct ForwardLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ForwardLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ForwardLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        Ok(Some(decode_line(&self.buf)))
    }
}

//-----------------------------------------------------------------------------
// Backward
//-----------------------------------------------------------------------------

/// Yields lines newest-first without buffering the whole file.
///
/// Only the unread tail of the current chunk plus one partial line is held
/// in memory at any time.
pub struct BackwardLines<R> {
    reader: R,
    /// Offset of the first byte not yet pulled into `pending`.
    pos: u64,
    /// Bytes between `pos` and the last emitted line, in file order.
    pending: Vec<u8>,
    chunk_size: usize,
    /// The newline terminating the final line is not a line of its own.
    at_file_end: bool,
    done: bool,
}

impl<R: Read + Seek> BackwardLines<R> {
    pub fn new(mut reader: R) -> io::Result<Self> {
        let len = reader.seek(SeekFrom::End(0))?;
        Ok(Self::with_len(reader, len))
    }

    fn with_len(reader: R, len: u64) -> Self {
        Self {
            reader,
            pos: len,
            pending: Vec::new(),
            chunk_size: BACKWARD_CHUNK_SIZE,
            at_file_end: true,
            done: len == 0,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    fn fill(&mut self) -> io::Result<()> {
        let step = (self.chunk_size as u64).min(self.pos);
        self.pos -= step;

        let mut chunk = vec![0; step as usize];
        self.reader.seek(SeekFrom::Start(self.pos))?;
        self.reader.read_exact(&mut chunk)?;

        chunk.extend_from_slice(&self.pending);
        self.pending = chunk;
        Ok(())
    }
}

impl<R: Read + Seek> LineSource for BackwardLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if self.done {
                return Ok(None);
            }

            if let Some(i) = self.pending.iter().rposition(|b| *b == b'\n') {
                let line = self.pending.split_off(i + 1);
                self.pending.truncate(i);

                let trailing = std::mem::replace(&mut self.at_file_end, false);
                if trailing && line.is_empty() {
                    continue;
                }
                return Ok(Some(decode_line(&line)));
            }

            if self.pos == 0 {
                // Whatever is left is the first line of the file.
                self.done = true;
                let line = std::mem::take(&mut self.pending);
                return Ok(Some(decode_line(&line)));
            }

            self.fill()?;
        }
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
