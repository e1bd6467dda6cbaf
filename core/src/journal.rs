//! journal.rs
//! Append-only log of codec outcomes for batch drivers.
//!
//! The codec itself never logs. An orchestrator that wants a trail opens a
//! `ReportLog` and feeds it each call's result; every line is flushed as it is
//! written so a crash loses at most the call in flight.
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::paths::Operation;
use crate::telemetry::CodecReport;
use crate::types::{FailureKind, Uz2Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One human-readable line per entry.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct JournalLine<'a> {
    ts: String,
    operation: Operation,
    input: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a CodecReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug)]
pub struct ReportLog {
    path: PathBuf,
    format: LogFormat,
    writer: BufWriter<File>,
    lines: u64,
}

impl ReportLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>, format: LogFormat) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = BufWriter::new(open_append(&path)?);
        Ok(Self { path, format, writer, lines: 0 })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines written through this handle (not counting earlier file content).
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn record(&mut self, report: &CodecReport) -> io::Result<()> {
        let input = report.input.as_deref().unwrap_or(Path::new(""));
        let line = match self.format {
            LogFormat::Text => format!(
                "{} OK {} {} -> {} in={} out={} chunks={} {}={}",
                timestamp(),
                report.operation,
                input.display(),
                report.output.as_deref().unwrap_or(Path::new("")).display(),
                report.bytes_in,
                report.bytes_out,
                report.chunks,
                report.raw_digest().alg(),
                report.raw_digest(),
            ),
            LogFormat::Json => json_line(&JournalLine {
                ts: timestamp(),
                operation: report.operation,
                input,
                report: Some(report),
                failure: None,
                message: None,
            })?,
        };
        self.write_line(&line)
    }

    pub fn record_failure(&mut self, op: Operation, input: &Path, err: &Uz2Error) -> io::Result<()> {
        let line = match self.format {
            LogFormat::Text => format!(
                "{} FAIL {} {} [{}] {}",
                timestamp(),
                op,
                input.display(),
                err.kind(),
                err,
            ),
            LogFormat::Json => json_line(&JournalLine {
                ts: timestamp(),
                operation: op,
                input,
                report: None,
                failure: Some(err.kind()),
                message: Some(err.to_string()),
            })?,
        };
        self.write_line(&line)
    }

    pub fn record_outcome(
        &mut self,
        op: Operation,
        input: &Path,
        outcome: &Result<CodecReport, Uz2Error>,
    ) -> io::Result<()> {
        match outcome {
            Ok(report) => self.record(report),
            Err(err) => self.record_failure(op, input, err),
        }
    }

    /// Move the current file aside as `<path>.<UTC timestamp>` and start a new one.
    /// Returns the archived path.
    pub fn rotate(&mut self) -> io::Result<PathBuf> {
        self.writer.flush()?;

        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let mut archived = self.path.clone().into_os_string();
        archived.push(format!(".{}", stamp));
        let archived = PathBuf::from(archived);

        fs::rename(&self.path, &archived)?;
        self.writer = BufWriter::new(open_append(&self.path)?);
        self.lines = 0;
        Ok(archived)
    }

    /// Read a journal back line by line.
    pub fn stream_log(path: impl AsRef<Path>) -> io::Result<impl Iterator<Item = io::Result<String>>> {
        let file = File::open(path)?;
        Ok(BufReader::new(file).lines())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn json_line(entry: &JournalLine<'_>) -> io::Result<String> {
    serde_json::to_string(entry).map_err(io::Error::from)
}
