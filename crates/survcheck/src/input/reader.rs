//! Fixed-width reader driven by a parsed dictionary.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dict::{Dictionary, VarType};
use crate::error::{Result, SurvcheckError};

use super::cleaner::{Cleaner, NoopCleaner};
use super::table::{DataTable, Value};

/// Metadata about a loaded data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents (as stored, before decompression).
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Storage format ("fixed-width" or "fixed-width+gzip").
    pub format: String,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of fields per row.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Reader configuration.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

/// Reads fixed-width data files against a [`Dictionary`].
pub struct FixedWidthReader {
    config: ReaderConfig,
    cleaner: Box<dyn Cleaner>,
}

impl FixedWidthReader {
    /// Create a reader with default configuration and a no-op cleaner.
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            config,
            cleaner: Box::new(NoopCleaner),
        }
    }

    /// Install a cleaning hook, applied after every successful read.
    pub fn with_cleaner(mut self, cleaner: impl Cleaner + 'static) -> Self {
        self.cleaner = Box::new(cleaner);
        self
    }

    /// Read a data file (plain or `.gz`) and return the decoded table
    /// with its provenance metadata.
    pub fn read_file(
        &self,
        dict: &Dictionary,
        path: impl AsRef<Path>,
    ) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| SurvcheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| SurvcheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let gzipped = path.extension().is_some_and(|ext| ext == "gz");
        let text = if gzipped {
            let mut decoder = GzDecoder::new(contents.as_slice());
            let mut text = String::new();
            decoder
                .read_to_string(&mut text)
                .map_err(|e| SurvcheckError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            text
        } else {
            String::from_utf8_lossy(&contents).into_owned()
        };

        let mut table = self.decode_str(dict, &text)?;
        self.cleaner.clean(&mut table);

        let format = if gzipped {
            "fixed-width+gzip"
        } else {
            "fixed-width"
        };
        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format.to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Decode fixed-width text directly. The cleaner is not applied here.
    ///
    /// Row numbers in parse errors are 1-based data rows (blank lines
    /// don't count), the same numbering as `SourceMetadata.row_count`
    /// and `max_rows`.
    pub fn decode_str(&self, dict: &Dictionary, text: &str) -> Result<DataTable> {
        let columns: Vec<String> = dict.fields.iter().map(|f| f.name.clone()).collect();
        let mut rows: Vec<Vec<Value>> = Vec::new();

        for line in text.lines() {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }
            if line.trim().is_empty() {
                continue;
            }

            // Slice by character position; dictionary columns are
            // 1-based character offsets, not byte offsets.
            let chars: Vec<char> = line.chars().collect();
            let mut row = Vec::with_capacity(dict.field_count());

            for field in &dict.fields {
                let begin = field.start - 1;
                let end = (begin + field.width).min(chars.len());
                let slice: String = if begin < chars.len() {
                    chars[begin..end].iter().collect()
                } else {
                    String::new()
                };
                row.push(decode_value(&slice, field.var_type, rows.len() + 1, &field.name)?);
            }

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(SurvcheckError::EmptyData(
                "no data rows found".to_string(),
            ));
        }

        Ok(DataTable::new(columns, rows))
    }
}

impl Default for FixedWidthReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one field slice. Blank slices and the Stata missing marker
/// (a lone `.`) become [`Value::Missing`].
fn decode_value(slice: &str, var_type: VarType, row: usize, field: &str) -> Result<Value> {
    let trimmed = slice.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Ok(Value::Missing);
    }

    match var_type {
        VarType::Byte | VarType::Int | VarType::Long => {
            trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| SurvcheckError::Parse {
                    row,
                    field: field.to_string(),
                    message: format!("'{}' is not an integer", trimmed),
                })
        }
        VarType::Float | VarType::Double => {
            trimmed
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| SurvcheckError::Parse {
                    row,
                    field: field.to_string(),
                    message: format!("'{}' is not a number", trimmed),
                })
        }
        VarType::Str(_) => Ok(Value::Str(trimmed.to_string())),
    }
}
