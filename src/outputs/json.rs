//! JSON output of filtered article lists.
//!
//! The filter re-emits the records it keeps as a pretty-printed JSON array
//! (two-space indent). Non-ASCII text is written as-is, so Japanese titles
//! and dates stay readable in the output.

use crate::error::DigestError;
use crate::models::ArticleRecord;
use std::io::Write;
use tracing::{debug, instrument};

/// Serialize `articles` as a two-space-indented JSON array.
pub fn articles_to_json(articles: &[ArticleRecord]) -> Result<String, DigestError> {
    Ok(serde_json::to_string_pretty(articles)?)
}

/// Write `articles` to `out` as pretty JSON followed by a newline.
///
/// # Arguments
///
/// * `articles` - Records to emit, in order
/// * `out` - Destination stream, normally locked stdout
/// * `target` - Name of the destination used in error messages
#[instrument(level = "debug", skip(articles, out), fields(count = articles.len()))]
pub fn write_articles<W: Write>(
    articles: &[ArticleRecord],
    mut out: W,
    target: &str,
) -> Result<(), DigestError> {
    let json = articles_to_json(articles)?;
    writeln!(out, "{json}")
        .and_then(|()| out.flush())
        .map_err(|source| DigestError::Write {
            target: target.to_string(),
            source,
        })?;
    debug!(bytes = json.len(), "Wrote JSON array");
    Ok(())
}
