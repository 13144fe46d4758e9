//! Command-line interface definitions for News Digest.
//!
//! This module defines the subcommands and their positional arguments using
//! the `clap` crate. Log verbosity is controlled separately through
//! `RUST_LOG`.

use crate::filter::DEFAULT_RETENTION_DAYS;
use crate::outputs::markdown::DEFAULT_DOCUMENT_TITLE;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the News Digest application.
///
/// # Examples
///
/// ```sh
/// # Keep the last 3 days of articles
/// news_digest filter 3 < articles.json > recent.json
///
/// # Render a digest from a file into another file
/// news_digest summarize recent.json digest.md
///
/// # Render from stdin to stdout
/// news_digest filter < articles.json | news_digest summarize
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Treat this local time as "now" (e.g. 2026-01-18T09:00:00) instead of the system clock
    #[arg(long, global = true)]
    pub now: Option<NaiveDateTime>,
}

/// The two independent stages.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Keep articles published within the last DAYS days (JSON array in, JSON array out)
    Filter {
        /// Retention window in days
        #[arg(default_value_t = DEFAULT_RETENTION_DAYS)]
        days: u32,
    },

    /// Render articles as a Markdown digest
    Summarize {
        /// Input JSON file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Output Markdown file; prints to stdout when omitted
        #[arg(requires = "input")]
        output: Option<PathBuf>,

        /// Document heading
        #[arg(long, default_value = DEFAULT_DOCUMENT_TITLE)]
        title: String,
    },
}
