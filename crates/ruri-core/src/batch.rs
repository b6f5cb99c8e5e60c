//! Batch resolution of `(input, base)` pairs read line by line.
//!
//! Two line formats are accepted:
//! - `tsv`: `input<TAB>base`; a line without a tab uses the default base.
//! - `jsonl`: `{"input": "...", "base": "..."}`; `base` is optional.
//!
//! Blank lines are skipped. Resolution itself never fails, so the only
//! errors are unreadable input and malformed JSON records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

use crate::resolve::resolve;

/// Line format of a batch source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchFormat {
    #[default]
    Tsv,
    Jsonl,
}

impl FromStr for BatchFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(BatchFormat::Tsv),
            "jsonl" | "ndjson" => Ok(BatchFormat::Jsonl),
            other => Err(format!("unknown batch format '{other}' (expected tsv or jsonl)")),
        }
    }
}

impl fmt::Display for BatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchFormat::Tsv => f.write_str("tsv"),
            BatchFormat::Jsonl => f.write_str("jsonl"),
        }
    }
}

/// One resolved line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    /// 1-based line number in the source.
    pub line: usize,
    pub input: String,
    pub base: String,
    pub resolved: String,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("line {line}: read failed")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid JSON record")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct JsonRequest {
    input: String,
    #[serde(default)]
    base: Option<String>,
}

/// Splits one non-blank line into `(input, base)`.
fn parse_line(
    line: &str,
    format: BatchFormat,
    default_base: &str,
) -> Result<(String, String), serde_json::Error> {
    match format {
        BatchFormat::Tsv => Ok(match line.split_once('\t') {
            Some((input, base)) => (input.to_string(), base.to_string()),
            None => (line.to_string(), default_base.to_string()),
        }),
        BatchFormat::Jsonl => {
            let req: JsonRequest = serde_json::from_str(line)?;
            let base = req.base.unwrap_or_else(|| default_base.to_string());
            Ok((req.input, base))
        }
    }
}

/// Resolves every record in `reader`, stopping at the first bad line.
pub fn resolve_reader<R: BufRead>(
    reader: R,
    format: BatchFormat,
    default_base: &str,
) -> Result<Vec<BatchRecord>, BatchError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| BatchError::Io {
            line: line_no,
            source,
        })?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let (input, base) =
            parse_line(line, format, default_base).map_err(|source| BatchError::Json {
                line: line_no,
                source,
            })?;
        let resolved = resolve(&input, &base);
        tracing::debug!(line = line_no, %input, %base, %resolved, "batch record");
        records.push(BatchRecord {
            line: line_no,
            input,
            base,
            resolved,
        });
    }
    tracing::info!("resolved {} {} records", records.len(), format);
    Ok(records)
}
