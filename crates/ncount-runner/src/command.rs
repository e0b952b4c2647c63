//! Runner commands.

use std::path::{Path, PathBuf};

use ncount_core::StatusCode;
use ncount_fse::{read_ncount_status, NormalizedCounts};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::buffers;
use crate::error::{Result, RunnerError};

/// File set for one `read-ncount` invocation.
#[derive(Debug, Clone)]
pub struct ReadNCountFiles {
    pub counter: PathBuf,
    pub max_symbol_value: PathBuf,
    pub table_log: PathBuf,
    pub header: PathBuf,
    pub header_size: PathBuf,
    pub status: PathBuf,
}

/// Decode the header described by `files` and write every output back.
///
/// The counter, max-symbol-value and table-log files are rewritten in place;
/// the status file receives the byte count or error code. A rejected header
/// is reported through the status, not as an `Err`.
pub fn run_read_ncount(files: &ReadNCountFiles) -> Result<StatusCode> {
    let mut max_symbol_value = buffers::read_u32(&files.max_symbol_value, "max symbol value")?;
    let mut table_log = buffers::read_u32(&files.table_log, "table log")?;
    let entries = max_symbol_value as usize + 1;
    let mut counter = buffers::read_counter(&files.counter, entries)?;
    let header = buffers::read_header(&files.header)?;
    let header_size = buffers::read_u64(&files.header_size, "header size")?;

    let header = usize::try_from(header_size)
        .ok()
        .and_then(|size| header.get(..size))
        .ok_or_else(|| {
            RunnerError::format(
                "header size",
                &files.header_size,
                format!(
                    "declares {} bytes but {} holds {}",
                    header_size,
                    files.header.display(),
                    header.len()
                ),
            )
        })?;

    debug!(max_symbol_value, header_size, "decoding NCount header");

    let status = read_ncount_status(&mut counter, &mut max_symbol_value, &mut table_log, header);

    if status.is_error() {
        warn!(status = status.raw(), reason = status.error_name(), "header rejected");
    } else {
        info!(bytes = status.raw(), table_log, max_symbol_value, "header decoded");
    }

    buffers::write_counter(&files.counter, &counter)?;
    buffers::write_u32(&files.max_symbol_value, max_symbol_value)?;
    buffers::write_u32(&files.table_log, table_log)?;
    buffers::write_u64(&files.status, status.raw())?;

    Ok(status)
}

/// How `inspect` renders its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json { pretty: bool },
}

/// Decoded header summary printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub header_size: usize,
    pub max_symbol_value: u32,
    pub table_size: u32,
    #[serde(flatten)]
    pub distribution: NormalizedCounts,
}

impl InspectReport {
    /// Human-readable rendering, one symbol per line.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "table_log: {}\ntable_size: {}\nmax_symbol_value: {}\nheader_size: {}\n",
            self.distribution.table_log(),
            self.table_size,
            self.max_symbol_value,
            self.header_size,
        );
        for (symbol, count) in self.distribution.counts().iter().enumerate() {
            if *count != 0 {
                out.push_str(&format!("{:>5}: {}\n", symbol, count));
            }
        }
        out
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json { pretty } => self.to_json(pretty).map(|json| json + "\n"),
        }
    }
}

/// Decode a header file without touching any other buffer.
pub fn run_inspect(header: &Path, max_symbol_value: u32) -> Result<InspectReport> {
    let bytes = buffers::read_header(header)?;
    let (distribution, header_size) = NormalizedCounts::parse(&bytes, max_symbol_value)?;

    Ok(InspectReport {
        header_size,
        max_symbol_value: distribution.max_symbol_value(),
        table_size: distribution.table_size(),
        distribution,
    })
}
