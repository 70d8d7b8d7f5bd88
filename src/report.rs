// WHY: Output contract shared by console and file: serial + token + " {count:i,j,...}"
// Formatting is pure; emission helpers only move already-rendered lines

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::serial::serial;

/// One line of the concordance report
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Repeating-letter label including the trailing `". "`
    pub serial: String,
    pub token: String,
    /// Always equal to `occurrences.len()`
    pub count: usize,
    /// 1-based sentence indices in encounter order
    pub occurrences: Vec<usize>,
}

impl ReportRow {
    /// Build the row for zero-based `rank` in sorted order
    pub fn new(rank: usize, token: String, occurrences: Vec<usize>) -> Self {
        Self {
            serial: serial(rank),
            token,
            count: occurrences.len(),
            occurrences,
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {{{}:", self.serial, self.token, self.count)?;
        for (i, occurrence) in self.occurrences.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{occurrence}")?;
        }
        f.write_str("}")
    }
}

/// Label already-sorted entries with serials by rank
pub fn rows_from_sorted(entries: Vec<(String, Vec<usize>)>) -> Vec<ReportRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(rank, (token, occurrences))| ReportRow::new(rank, token, occurrences))
        .collect()
}

/// Render rows as report lines without line terminators
pub fn render(rows: &[ReportRow]) -> Vec<String> {
    rows.iter().map(ReportRow::to_string).collect()
}

/// Write report lines to any sink, one newline-terminated line per row
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Print the report to standard output
pub fn print_report(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_lines(&mut handle, lines).context("Failed to write report to stdout")?;
    debug!("Printed {} report lines to stdout", lines.len());
    Ok(())
}

/// Persist the report, creating or truncating the file at `report_path`
pub async fn write_report(report_path: &Path, lines: &[String], buffer_size: usize) -> Result<()> {
    let file = tokio::fs::File::create(report_path)
        .await
        .with_context(|| format!("Failed to create report file {}", report_path.display()))?;
    let mut writer = BufWriter::with_capacity(buffer_size, file);

    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer
        .flush()
        .await
        .with_context(|| format!("Failed to flush report file {}", report_path.display()))?;

    info!("Wrote {} report lines to {}", lines.len(), report_path.display());
    Ok(())
}
