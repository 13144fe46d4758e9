//! Error types for the digest pipeline.
//!
//! Failures come in two tiers. [`DateParseError`] is per-record: the filter
//! logs it, drops the record and moves on. [`DigestError`] is fatal for the
//! whole run and ends the process with exit status 1.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a record's `date` field could not be turned into a calendar date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// One of the `月` / `日` markers is absent.
    #[error("missing '{0}' marker")]
    MissingMarker(char),

    /// A month or day segment is not an integer.
    #[error("invalid {field} '{value}': {source}")]
    InvalidNumber {
        /// Which segment failed ("month" or "day").
        field: &'static str,
        /// The offending text.
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Month and day parsed but name no real date in the given year.
    #[error("no such date: {year}-{month:02}-{day:02}")]
    OutOfRange {
        /// Year the date was resolved against.
        year: i32,
        /// Parsed month.
        month: u32,
        /// Parsed day.
        day: u32,
    },
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The input path does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the input failed for a reason other than absence.
    #[error("failed to read {source_name}: {source}")]
    Read {
        /// `stdin` or the input path.
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON array of article records.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the rendered document or the filtered array failed.
    #[error("failed to write {target}: {source}")]
    Write {
        /// `stdout` or the output path.
        target: String,
        #[source]
        source: io::Error,
    },
}
