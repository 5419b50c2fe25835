//! Append-only CSV sample log
//!
//! The header row is written only when the file is new or empty. Every
//! sample is flushed and synced to disk before `record` returns, so an
//! interrupted run loses at most the probe that was in flight.

pub mod path;

pub use path::{auto_output_path, resolve_output_path, sanitize_host};

use crate::error::{AppError, Result};
use crate::models::Sample;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Column names of the sample log, in order
pub const LOG_HEADER: [&str; 5] = ["timestamp_iso", "host", "success", "rtt_ms", "raw"];

/// Delimiter that replaces line breaks in stored probe output
pub const LINE_DELIMITER: &str = " | ";

/// Collapse probe output onto one line and bound its length.
///
/// Surrounding whitespace is trimmed, every line break becomes
/// [`LINE_DELIMITER`] and the result is cut to
/// [`RAW_OUTPUT_MAX_CHARS`](crate::defaults::RAW_OUTPUT_MAX_CHARS) characters.
pub fn sanitize_raw(raw: &str) -> String {
    raw.trim()
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', LINE_DELIMITER)
        .chars()
        .take(crate::defaults::RAW_OUTPUT_MAX_CHARS)
        .collect()
}

/// Destination for sample rows that can be forced to stable storage
pub trait LogSink: Write + Send {
    /// Make everything written so far durable
    fn sync(&self) -> io::Result<()>;
}

impl LogSink for File {
    fn sync(&self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Writer that owns the sample log for the duration of a run
pub struct SampleRecorder {
    path: PathBuf,
    writer: csv::Writer<Box<dyn LogSink>>,
    created_header: bool,
    rows_written: u64,
}

impl SampleRecorder {
    /// Open `path` for appending, creating parent directories and the header as needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::record(format!("failed to create directory {}: {}", parent.display(), e))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::record(format!("failed to open {}: {}", path.display(), e)))?;

        let is_empty = file
            .metadata()
            .map_err(|e| AppError::record(format!("failed to inspect {}: {}", path.display(), e)))?
            .len()
            == 0;

        Self::from_writer(path, file, is_empty)
    }

    /// Record into an already open sink; `path` is only used in messages.
    ///
    /// The header row is written first when `write_header` is set.
    pub fn from_writer<W>(path: impl Into<PathBuf>, sink: W, write_header: bool) -> Result<Self>
    where
        W: LogSink + 'static,
    {
        let sink: Box<dyn LogSink> = Box::new(sink);
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);

        let mut recorder = Self {
            path: path.into(),
            writer,
            created_header: false,
            rows_written: 0,
        };

        if write_header {
            recorder.write_row(LOG_HEADER)?;
            recorder.created_header = true;
        }

        Ok(recorder)
    }

    /// Append one sample and make it durable
    pub fn record(&mut self, sample: &Sample) -> Result<()> {
        let timestamp = sample.timestamp_iso();
        let rtt = sample.rtt_field();
        self.write_row([
            timestamp.as_str(),
            sample.host(),
            sample.success_flag(),
            rtt.as_str(),
            sample.raw_output(),
        ])?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether opening this recorder wrote the header row
    pub fn created_header(&self) -> bool {
        self.created_header
    }

    /// Data rows appended by this recorder
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|e| AppError::record(format!("failed to write {}: {}", self.path.display(), e)))?;
        self.writer
            .flush()
            .map_err(|e| AppError::record(format!("failed to flush {}: {}", self.path.display(), e)))?;
        self.writer
            .get_ref()
            .sync()
            .map_err(|e| AppError::record(format!("failed to sync {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

/// Sink that accepts writes until `fail_after` rows have been synced, then
/// fails every write the way a full disk would
#[cfg(test)]
pub(crate) struct FullDisk {
    file: File,
    synced: std::cell::Cell<usize>,
    fail_after: usize,
}

#[cfg(test)]
impl FullDisk {
    pub(crate) fn create(path: &Path, fail_after: usize) -> Self {
        Self {
            file: File::create(path).expect("create sample log"),
            synced: std::cell::Cell::new(0),
            fail_after,
        }
    }
}

#[cfg(test)]
impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.synced.get() >= self.fail_after {
            return Err(io::Error::new(io::ErrorKind::Other, "No space left on device"));
        }
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
impl LogSink for FullDisk {
    fn sync(&self) -> io::Result<()> {
        self.synced.set(self.synced.get() + 1);
        self.file.sync_data()
    }
}
