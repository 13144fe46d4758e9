//! # News Digest
//!
//! Two small, stateless stages over scraped news-article lists:
//!
//! 1. **Filter**: keep the articles published within a trailing N-day window
//!    ([`filter::filter_articles_by_days`]).
//! 2. **Summarize**: render an article list as a Markdown digest
//!    ([`outputs::markdown::generate_markdown_summary`]).
//!
//! The stages only share the record shape, [`models::ArticleRecord`], and
//! its JSON array encoding. They are usually chained through a pipe:
//!
//! ```sh
//! news_digest filter 7 < articles.json | news_digest summarize
//! ```
//!
//! Publish dates look like `"01月17日12時00分"` and carry no year; see
//! [`dates`] for how they are resolved.

pub mod cli;
pub mod dates;
pub mod error;
pub mod filter;
pub mod input;
pub mod models;
pub mod outputs;
pub mod utils;
