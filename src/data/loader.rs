use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{
    is_known_site, LaunchDataset, LaunchRecord, OutcomeClass, COL_BOOSTER_CATEGORY, COL_CLASS,
    COL_LAUNCH_SITE, COL_PAYLOAD_MASS,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading the launch table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: unknown launch site '{site}'")]
    UnknownSite { row: usize, site: String },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("expected a top-level JSON array of records")]
    NotARecordArray,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the four required columns (extra columns ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names, numeric payload and class columns
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if dataset.is_empty() {
        log::warn!("{} contains no launch records", path.display());
    }
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Field validation shared by every format
// ---------------------------------------------------------------------------

fn check_site(row: usize, site: &str) -> Result<String, LoadError> {
    if is_known_site(site) {
        Ok(site.to_string())
    } else {
        Err(LoadError::UnknownSite {
            row,
            site: site.to_string(),
        })
    }
}

fn check_payload(row: usize, payload: f64) -> Result<f64, LoadError> {
    if payload.is_finite() && payload >= 0.0 {
        Ok(payload)
    } else {
        Err(LoadError::InvalidValue {
            row,
            column: COL_PAYLOAD_MASS,
            value: payload.to_string(),
        })
    }
}

/// `class` may arrive as an integer or as a float holding exactly 0 or 1.
fn check_class(row: usize, class: f64) -> Result<OutcomeClass, LoadError> {
    let as_int = class as i64;
    if as_int as f64 == class {
        if let Some(outcome) = OutcomeClass::from_value(as_int) {
            return Ok(outcome);
        }
    }
    Err(LoadError::InvalidValue {
        row,
        column: COL_CLASS,
        value: class.to_string(),
    })
}

fn parse_number(row: usize, column: &'static str, text: &str) -> Result<f64, LoadError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidValue {
            row,
            column,
            value: text.to_string(),
        })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. Only the four required columns
/// are read; `Flight Number`, `Mission Outcome` etc. are ignored.
fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = column(COL_LAUNCH_SITE)?;
    let payload_idx = column(COL_PAYLOAD_MASS)?;
    let booster_idx = column(COL_BOOSTER_CATEGORY)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let payload = parse_number(row, COL_PAYLOAD_MASS, field(payload_idx))?;
        let class = parse_number(row, COL_CLASS, field(class_idx))?;

        records.push(LaunchRecord {
            launch_site: check_site(row, field(site_idx))?,
            payload_mass_kg: check_payload(row, payload)?,
            booster_version_category: field(booster_idx).to_string(),
            outcome_class: check_class(row, class)?,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset, LoadError> {
    let root: JsonValue = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;
    let rows = root.as_array().ok_or(LoadError::NotARecordArray)?;

    let mut records = Vec::with_capacity(rows.len());

    for (row, value) in rows.iter().enumerate() {
        let obj = value.as_object().ok_or(LoadError::NotARecordArray)?;
        let field = |name: &'static str| obj.get(name).ok_or(LoadError::MissingColumn(name));

        let text = |name: &'static str| -> Result<String, LoadError> {
            match field(name)? {
                JsonValue::String(s) => Ok(s.clone()),
                other => Err(LoadError::InvalidValue {
                    row,
                    column: name,
                    value: other.to_string(),
                }),
            }
        };
        let number = |name: &'static str| -> Result<f64, LoadError> {
            let v = field(name)?;
            v.as_f64().ok_or_else(|| LoadError::InvalidValue {
                row,
                column: name,
                value: v.to_string(),
            })
        };

        records.push(LaunchRecord {
            launch_site: check_site(row, &text(COL_LAUNCH_SITE)?)?,
            payload_mass_kg: check_payload(row, number(COL_PAYLOAD_MASS)?)?,
            booster_version_category: text(COL_BOOSTER_CATEGORY)?,
            outcome_class: check_class(row, number(COL_CLASS)?)?,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// Payload may be any integer or float type, `class` any numeric type
/// holding 0/1; both are cast to Float64 before validation.
fn load_parquet(path: &Path) -> Result<LaunchDataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch in reader {
        let batch = batch?;
        let first_row = records.len();

        let sites = column_as(&batch, COL_LAUNCH_SITE, &DataType::Utf8)?;
        let payloads = column_as(&batch, COL_PAYLOAD_MASS, &DataType::Float64)?;
        let boosters = column_as(&batch, COL_BOOSTER_CATEGORY, &DataType::Utf8)?;
        let classes = column_as(&batch, COL_CLASS, &DataType::Float64)?;

        let sites = sites.as_string::<i32>();
        let payloads = payloads.as_primitive::<Float64Type>();
        let boosters = boosters.as_string::<i32>();
        let classes = classes.as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            let row = first_row + i;
            let null = |column: &'static str| LoadError::InvalidValue {
                row,
                column,
                value: "<null>".to_string(),
            };

            if sites.is_null(i) {
                return Err(null(COL_LAUNCH_SITE));
            }
            if payloads.is_null(i) {
                return Err(null(COL_PAYLOAD_MASS));
            }
            if boosters.is_null(i) {
                return Err(null(COL_BOOSTER_CATEGORY));
            }
            if classes.is_null(i) {
                return Err(null(COL_CLASS));
            }

            records.push(LaunchRecord {
                launch_site: check_site(row, sites.value(i))?,
                payload_mass_kg: check_payload(row, payloads.value(i))?,
                booster_version_category: boosters.value(i).to_string(),
                outcome_class: check_class(row, classes.value(i))?,
            });
        }
    }

    Ok(LaunchDataset::from_records(records))
}

/// Look up a column by name and cast it to the type the loader reads.
fn column_as(
    batch: &RecordBatch,
    name: &'static str,
    to: &DataType,
) -> Result<ArrayRef, LoadError> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    Ok(cast(batch.column(idx), to)?)
}
