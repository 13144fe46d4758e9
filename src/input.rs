//! Input source resolution and article loading.
//!
//! Both stages read a JSON array of [`ArticleRecord`] either from a file or
//! from standard input. The choice is made once, from the command line, and
//! the whole input is read into memory before anything is parsed.

use crate::error::DigestError;
use crate::models::ArticleRecord;
use crate::utils::looks_truncated;
use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Where the article array comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read everything from standard input.
    Stdin,
    /// Read the named file.
    Path(PathBuf),
}

impl InputSource {
    /// `Path` when a path was given, `Stdin` otherwise.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::Path)
    }

    /// Read the whole source as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, DigestError> {
        match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| DigestError::Read {
                        source_name: self.to_string(),
                        source,
                    })?;
                Ok(buf)
            }
            InputSource::Path(path) => std::fs::read_to_string(path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    DigestError::InputNotFound(path.clone())
                } else {
                    DigestError::Read {
                        source_name: self.to_string(),
                        source,
                    }
                }
            }),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Deserialize a JSON array of article records.
///
/// Schema violations (missing `title`/`url`/`date`, wrong value types, a
/// top-level value that is not an array) are reported as
/// [`DigestError::Json`].
pub fn parse_articles(text: &str) -> Result<Vec<ArticleRecord>, DigestError> {
    serde_json::from_str::<Vec<ArticleRecord>>(text).map_err(|e| {
        if looks_truncated(&e) {
            warn!(error = %e, "Input ended early; it looks truncated");
        }
        DigestError::Json(e)
    })
}

/// Read and parse every article from `source`.
#[instrument(level = "info", skip_all, fields(source = %source))]
pub fn read_articles(source: &InputSource) -> Result<Vec<ArticleRecord>, DigestError> {
    let text = source.read_to_string()?;
    debug!(bytes = text.len(), "Read input");
    let articles = parse_articles(&text)?;
    debug!(count = articles.len(), "Parsed articles");
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("a.json"))),
            InputSource::Path(PathBuf::from("a.json"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "stdin");
        assert_eq!(
            InputSource::Path(PathBuf::from("in/articles.json")).to_string(),
            "in/articles.json"
        );
    }

    #[test]
    fn test_parse_articles() {
        let json = r#"[
            {"title": "A", "url": "http://x/1", "date": "01月17日12時00分"},
            {"title": "B", "url": "http://x/2", "date": "01月16日09時30分", "category": "ソフトウェア", "summary": "要約"}
        ]"#;

        let articles = parse_articles(json).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].category(), Some("ソフトウェア"));
        assert_eq!(articles[1].summary(), Some("要約"));
    }

    #[test]
    fn test_parse_articles_rejects_non_array() {
        let err = parse_articles(r#"{"title": "A"}"#).unwrap_err();
        assert!(matches!(err, DigestError::Json(_)));
    }

    #[test]
    fn test_parse_articles_rejects_missing_field() {
        let err = parse_articles(r#"[{"title": "A", "url": "http://x/1"}]"#).unwrap_err();
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_parse_articles_truncated() {
        let err = parse_articles(r#"[{"title": "A", "url": "#).unwrap_err();
        match err {
            DigestError::Json(e) => assert!(looks_truncated(&e)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_articles_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.json");
        fs::write(
            &path,
            r#"[{"title": "A", "url": "http://x/1", "date": "01月17日12時00分"}]"#,
        )
        .unwrap();

        let articles = read_articles(&InputSource::Path(path)).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title(), "A");
    }

    #[test]
    fn test_read_articles_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_articles(&InputSource::Path(path.clone())).unwrap_err();
        match err {
            DigestError::InputNotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
