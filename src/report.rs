//! Persisted tree report: pre-flight checks, naming and atomic write.

use std::fs::Metadata;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tempfile::NamedTempFile;

use crate::core::{WalkOptions, walk};
use crate::error::{ReportError, Result};
use crate::fs::FileSystem;
use crate::sink::{LineSink, LineStyle, Sinks, WriterSink};

#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Directory to scan.
    pub target: PathBuf,
    /// Directory the report file is written into.
    pub destination: PathBuf,
    pub options: WalkOptions,
    /// Generation time, embedded in the report file name.
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub report_path: PathBuf,
    pub total_files: u64,
}

pub fn report_file_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format("file_tree_%Y%m%d_%H%M%S.txt").to_string()
}

pub fn header_line(target: &Path) -> String {
    format!("File tree for: {}", target.display())
}

pub fn summary_line(total_files: u64) -> String {
    format!("Total files: {total_files}")
}

pub async fn validate_target(path: &Path) -> Result<()> {
    target_status(path, tokio::fs::metadata(path).await)
}

/// Blocking form of [`validate_target`], for the interactive prompts.
pub fn check_target(path: &Path) -> Result<()> {
    target_status(path, std::fs::metadata(path))
}

fn target_status(path: &Path, metadata: io::Result<Metadata>) -> Result<()> {
    match metadata {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ReportError::TargetNotDirectory(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ReportError::TargetMissing(path.to_path_buf()))
        }
        Err(source) => Err(ReportError::Inaccessible {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub async fn validate_destination(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(ReportError::DestinationInvalid(path.to_path_buf())),
    }
}

/// Scan `request.target` and persist the report into `request.destination`.
///
/// Lines are mirrored to `console` as they are produced. The report body is
/// kept in memory and only written out once the walk has finished, through
/// a temporary file renamed into place, so a failed run leaves no report
/// behind and the in-progress report never shows up in its own tree.
pub async fn generate<F: FileSystem>(
    fs: &F,
    request: &ReportRequest,
    console: Option<&mut dyn LineSink>,
) -> Result<ReportSummary> {
    validate_target(&request.target).await?;
    validate_destination(&request.destination).await?;

    let report_path = request
        .destination
        .join(report_file_name(&request.timestamp));
    tracing::info!(
        target = %request.target.display(),
        report = %report_path.display(),
        sort_key = ?request.options.sort_key,
        "generating report"
    );

    let mut report = WriterSink::new(Vec::new());
    let total_files = {
        let mut sinks = Sinks::new();
        if let Some(console) = console {
            sinks.push(console);
        }
        sinks.push(&mut report);

        emit_report(fs, request, &mut sinks)
            .await
            .map_err(|err| ReportError::io(&report_path, err))?
    };

    persist(&request.destination, &report_path, &report.into_inner())
        .map_err(|err| ReportError::io(&report_path, err))?;

    tracing::info!(report = %report_path.display(), total_files, "report written");
    Ok(ReportSummary {
        report_path,
        total_files,
    })
}

async fn emit_report<F: FileSystem>(
    fs: &F,
    request: &ReportRequest,
    sinks: &mut Sinks<'_>,
) -> io::Result<u64> {
    sinks.emit(LineStyle::Header, &header_line(&request.target))?;
    let total_files = walk(fs, &request.target, "", sinks, &request.options).await?;
    sinks.emit(LineStyle::Summary, "")?;
    sinks.emit(LineStyle::Summary, &summary_line(total_files))?;
    Ok(total_files)
}

fn persist(destination: &Path, report_path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = NamedTempFile::new_in(destination)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(report_path).map_err(|err| err.error)?;
    Ok(())
}
