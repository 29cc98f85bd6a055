//! Dataset output: flatten reviewed triples into records and write them as
//! CSV, JSON, or JSONL files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::format_description;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::CitationReview;
use crate::error::AppError;

/// One flattened dataset row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetRecord {
    pub document_id: String,
    pub source_label: String,
    pub question: String,
    pub answer: String,
    pub citation: String,
    pub citation_valid: bool,
    pub generated_at: String, // RFC3339
}

/// Deterministic document identity: hex SHA-256 of the document text.
pub fn document_id_for(document: &str) -> String {
    hex::encode(Sha256::digest(document.as_bytes()))
}

/// Flatten a document's reviews into writer-ready records.
pub fn dataset_records(
    document: &str,
    source_label: &str,
    generated_at: &str,
    reviews: &[CitationReview],
) -> Vec<DatasetRecord> {
    let document_id = document_id_for(document);
    reviews
        .iter()
        .map(|r| DatasetRecord {
            document_id: document_id.clone(),
            source_label: source_label.to_string(),
            question: r.triple.question.clone(),
            answer: r.triple.answer.clone(),
            citation: r.triple.citation.clone(),
            citation_valid: r.citation_valid,
            generated_at: generated_at.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Csv,
    Json,
    Jsonl,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetWriter {
    output_dir: PathBuf,
}

impl DatasetWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.output_dir.as_path()).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to create output directory")
                .with_details(format!("path={}; err={}", self.output_dir.display(), e))
        })
    }

    /// Output filename: `<stem>_<yyyymmdd_HHMMSS>.<ext>`, with the stamp
    /// derived from the caller-supplied RFC3339 timestamp.
    fn output_path(
        &self,
        stem: &str,
        generated_at: &str,
        format: OutputFormat,
    ) -> Result<PathBuf, AppError> {
        let dt = OffsetDateTime::parse(generated_at, &Rfc3339).map_err(|e| {
            AppError::new("DATASET_TIMESTAMP_INVALID", "generated_at must be RFC3339")
                .with_details(format!("value={generated_at}; err={e}"))
        })?;
        let stamp_fmt =
            format_description::parse("[year][month][day]_[hour][minute][second]").map_err(|e| {
                AppError::new("DATASET_WRITE_FAILED", "Timestamp format config error")
                    .with_details(e.to_string())
            })?;
        let stamp = dt.format(&stamp_fmt).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to format timestamp")
                .with_details(e.to_string())
        })?;
        Ok(self
            .output_dir
            .join(format!("{stem}_{stamp}.{}", format.extension())))
    }

    pub fn write(
        &self,
        records: &[DatasetRecord],
        stem: &str,
        generated_at: &str,
        format: OutputFormat,
    ) -> Result<PathBuf, AppError> {
        if records.is_empty() {
            return Err(AppError::new("DATASET_EMPTY", "No records to write"));
        }
        self.ensure_dir()?;
        let path = self.output_path(stem, generated_at, format)?;
        match format {
            OutputFormat::Csv => self.write_csv(records, &path)?,
            OutputFormat::Json => self.write_json(records, &path)?,
            OutputFormat::Jsonl => self.write_jsonl(records, &path)?,
        }
        Ok(path)
    }

    /// Write every requested format, keyed by extension. A failing format
    /// fails the whole call; partial output files are not cleaned up.
    pub fn write_multiple_formats(
        &self,
        records: &[DatasetRecord],
        stem: &str,
        generated_at: &str,
        formats: &[OutputFormat],
    ) -> Result<BTreeMap<String, PathBuf>, AppError> {
        let mut out = BTreeMap::new();
        for format in formats {
            let path = self.write(records, stem, generated_at, *format)?;
            out.insert(format.extension().to_string(), path);
        }
        Ok(out)
    }

    fn write_csv(&self, records: &[DatasetRecord], path: &Path) -> Result<(), AppError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_path(path)
            .map_err(|e| {
                AppError::new("DATASET_WRITE_FAILED", "Failed to open CSV output")
                    .with_details(format!("path={}; err={}", path.display(), e))
            })?;
        for record in records {
            writer.serialize(record).map_err(|e| {
                AppError::new("DATASET_WRITE_FAILED", "Failed to write CSV record")
                    .with_details(format!("path={}; err={}", path.display(), e))
            })?;
        }
        writer.flush().map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to flush CSV output")
                .with_details(format!("path={}; err={}", path.display(), e))
        })
    }

    fn write_json(&self, records: &[DatasetRecord], path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(records).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to encode JSON records")
                .with_details(e.to_string())
        })?;
        fs::write(path, json.as_bytes()).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to write JSON output")
                .with_details(format!("path={}; err={}", path.display(), e))
        })
    }

    fn write_jsonl(&self, records: &[DatasetRecord], path: &Path) -> Result<(), AppError> {
        let mut out = String::new();
        for record in records {
            let line = serde_json::to_string(record).map_err(|e| {
                AppError::new("DATASET_WRITE_FAILED", "Failed to encode JSONL record")
                    .with_details(e.to_string())
            })?;
            out.push_str(&line);
            out.push('\n');
        }
        fs::write(path, out.as_bytes()).map_err(|e| {
            AppError::new("DATASET_WRITE_FAILED", "Failed to write JSONL output")
                .with_details(format!("path={}; err={}", path.display(), e))
        })
    }
}
