//! Markdown rendering of an article list.
//!
//! # Document Layout
//!
//! ```text
//! # GIGAZINE AI記事まとめ
//!
//! 生成日時: 2026年01月18日
//!
//! 取得記事数: 1件
//!
//! ---
//!
//! ## 1. Title
//!
//! - **公開日時**: 01月17日12時00分
//! - **カテゴリ**: AI
//! - **URL**: [http://x/1](http://x/1)
//!
//! ### 要約
//!
//! Summary text
//!
//! ---
//! ```
//!
//! The summary block only appears for records with a non-empty summary.

use crate::error::DigestError;
use crate::models::ArticleRecord;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tracing::{Level, enabled, info, instrument};

/// Heading used when no `--title` is given.
pub const DEFAULT_DOCUMENT_TITLE: &str = "GIGAZINE AI記事まとめ";

/// Convert a list of articles to a Markdown document.
///
/// # Arguments
///
/// * `articles` - Records to enumerate, rendered in the given order
/// * `title` - Document heading
/// * `generated_on` - Date shown on the generation line
pub fn articles_to_markdown(
    articles: &[ArticleRecord],
    title: &str,
    generated_on: NaiveDate,
) -> String {
    let mut md = format!(
        "# {}\n\n生成日時: {}\n\n取得記事数: {}件\n\n---\n\n",
        title,
        generated_on.format("%Y年%m月%d日"),
        articles.len()
    );

    for (i, article) in articles.iter().enumerate() {
        md.push_str(&format!("## {}. {}\n\n", i + 1, article.title()));
        md.push_str(&format!("- **公開日時**: {}\n", article.date()));
        md.push_str(&format!("- **カテゴリ**: {}\n", article.category_or_default()));
        md.push_str(&format!("- **URL**: [{}]({})\n\n", article.url(), article.url()));

        if let Some(summary) = article.non_empty_summary() {
            md.push_str(&format!("### 要約\n\n{}\n\n", summary));
        }

        md.push_str("---\n\n");
    }

    md
}

/// Render `articles` and deliver the document.
///
/// With an `output` path the document overwrites that file and a one-line
/// confirmation goes to stderr; otherwise it is written to `stdout` followed
/// by a newline. The rendered text is returned in both cases.
///
/// # Errors
///
/// Returns [`DigestError::Write`] when the file or `stdout` cannot be written.
#[instrument(level = "info", skip(articles, generated_on, stdout), fields(count = articles.len()))]
pub fn generate_markdown_summary<W: Write>(
    articles: &[ArticleRecord],
    title: &str,
    generated_on: NaiveDate,
    output: Option<&Path>,
    mut stdout: W,
) -> Result<String, DigestError> {
    let md = articles_to_markdown(articles, title, generated_on);

    match output {
        Some(path) => {
            std::fs::write(path, &md).map_err(|source| DigestError::Write {
                target: path.display().to_string(),
                source,
            })?;
            // Must reach stderr even when RUST_LOG filters INFO out.
            if enabled!(Level::INFO) {
                info!(path = %path.display(), "Wrote summary Markdown");
            } else {
                eprintln!("{}", written_notice(path));
            }
        }
        None => {
            writeln!(stdout, "{md}")
                .and_then(|()| stdout.flush())
                .map_err(|source| DigestError::Write {
                    target: "stdout".to_string(),
                    source,
                })?;
        }
    }

    Ok(md)
}

/// One-line confirmation for a written summary file.
pub fn written_notice(path: &Path) -> String {
    format!("Wrote summary to {}", path.display())
}
