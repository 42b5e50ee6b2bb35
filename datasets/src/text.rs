//! Parse delimited text into [`Records`]
//!
//! One record per line, fields separated by a regular expression. Before splitting, runs of
//! four, then three, then two spaces are collapsed into one space, each pass over the whole line.
//! With a single space as the separator most runs of spaces act as one separator, but some
//! (eleven spaces is the shortest) still leave two behind and so produce an empty field.
//!
//! The first line that parses fixes the dimensionality. Lines that do not parse, or have a
//! different number of fields, are skipped and reported; they never abort the load.

use crate::error::{DatasetError, LineError, Result};
use lloyd::{Float, Record, Records};
use ndarray::Array1;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A line that was not turned into a record
#[derive(Debug, Clone)]
pub struct RejectedLine {
    /// 0-based line number in the input
    pub line_number: usize,
    /// The raw content of the line
    pub content: String,
    pub reason: LineError,
}

/// Outcome of loading a text dataset
#[derive(Debug, Clone)]
pub struct LoadReport<F> {
    /// Distinct records in input order
    pub records: Records<F>,
    /// Lines skipped because they could not be parsed
    pub rejected: Vec<RejectedLine>,
    /// Line numbers of lines that repeated the values of an earlier line
    pub duplicates: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct TextLoader {
    separator: Regex,
}

impl Default for TextLoader {
    fn default() -> Self {
        TextLoader {
            separator: Regex::new(" ").expect("a single space is a valid pattern"),
        }
    }
}

impl TextLoader {
    /// Create a loader splitting fields on the regular expression `separator`
    pub fn new(separator: &str) -> Result<Self> {
        Ok(TextLoader {
            separator: Regex::new(separator)?,
        })
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    /// Parse one line into a vector of values.
    ///
    /// `expected` is the dimensionality the line must have, `None` accepts any.
    pub fn parse_line<F: Float>(
        &self,
        line: &str,
        expected: Option<usize>,
    ) -> std::result::Result<Array1<F>, LineError> {
        let line = collapse_spaces(line);
        let mut fields: Vec<&str> = self.separator.split(&line).collect();
        while fields.last().map_or(false, |field| field.is_empty()) {
            fields.pop();
        }

        if fields.is_empty() {
            return Err(LineError::Empty);
        }
        if let Some(expected) = expected {
            if fields.len() != expected {
                return Err(LineError::FieldCount {
                    expected,
                    found: fields.len(),
                });
            }
        }

        fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                field
                    .trim()
                    .parse::<F>()
                    .map_err(|_| LineError::NotANumber {
                        index,
                        field: field.to_string(),
                    })
            })
            .collect()
    }

    /// Parse a whole text. Never fails, skipped lines are listed in the report.
    pub fn load_str<F: Float>(&self, raw: &str) -> LoadReport<F> {
        let mut report = LoadReport {
            records: Records::new(),
            rejected: Vec::new(),
            duplicates: Vec::new(),
        };

        for (line_number, line) in raw.lines().enumerate() {
            let parsed = self
                .parse_line(line, report.records.n_features())
                .and_then(|values| {
                    report
                        .records
                        .insert(Record::new(values, line_number))
                        .map_err(LineError::from)
                });

            match parsed {
                Ok(true) => {}
                Ok(false) => {
                    debug!(line_number, "line repeats an earlier record");
                    report.duplicates.push(line_number);
                }
                Err(reason) => {
                    warn!(line_number, content = line, %reason, "failed to read line");
                    report.rejected.push(RejectedLine {
                        line_number,
                        content: line.to_string(),
                        reason,
                    });
                }
            }
        }

        debug!(
            records = report.records.len(),
            rejected = report.rejected.len(),
            duplicates = report.duplicates.len(),
            "loaded dataset"
        );
        report
    }

    pub fn load_file<F: Float>(&self, path: impl AsRef<Path>) -> Result<LoadReport<F>> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_str(&raw))
    }
}

fn collapse_spaces(line: &str) -> String {
    line.replace("    ", " ")
        .replace("   ", " ")
        .replace("  ", " ")
}
