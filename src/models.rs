//! Data model for the article records exchanged between the two stages.
//!
//! Both `filter` and `summarize` read and write the same shape: a JSON array
//! of [`ArticleRecord`] objects as produced by the scraping step upstream.
//!
//! The schema is checked once, when the array is deserialized. `title`, `url`
//! and `date` are required strings; `category` and `summary` are optional
//! strings (or `null`). The record keeps the object it was read from and
//! serializes back to exactly that object, so the filter re-emits what it
//! keeps with every key, value and key order intact.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Category label used when a record does not carry one.
pub const DEFAULT_CATEGORY: &str = "AI";

/// Typed view of the keys the stages care about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RecordFields {
    title: String,
    url: String,
    date: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

/// A single scraped news article.
///
/// # Fields
///
/// * `title` - Headline of the article
/// * `url` - Absolute link to the article
/// * `date` - Partial publish timestamp, e.g. `"01月17日12時00分"`
/// * `category` - Optional category label
/// * `summary` - Optional summary text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ArticleRecord {
    fields: RecordFields,
    raw: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for ArticleRecord {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields = RecordFields::deserialize(&Value::Object(raw.clone()))?;
        Ok(Self { fields, raw })
    }
}

impl Serialize for ArticleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl ArticleRecord {
    /// The article headline.
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// The article URL.
    pub fn url(&self) -> &str {
        &self.fields.url
    }

    /// Publish timestamp in `MM月DD日HH時mm分` form. Carries no year.
    pub fn date(&self) -> &str {
        &self.fields.date
    }

    /// Category label, if the source provided one.
    pub fn category(&self) -> Option<&str> {
        self.fields.category.as_deref()
    }

    /// Summary text, if one has been written for this article.
    pub fn summary(&self) -> Option<&str> {
        self.fields.summary.as_deref()
    }

    /// The JSON object this record was read from.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Category to display, falling back to [`DEFAULT_CATEGORY`].
    pub fn category_or_default(&self) -> &str {
        self.category().unwrap_or(DEFAULT_CATEGORY)
    }

    /// The summary, if present and not blank.
    pub fn non_empty_summary(&self) -> Option<&str> {
        self.summary().filter(|summary| !summary.trim().is_empty())
    }
}

#[cfg(test)]
impl ArticleRecord {
    /// Build a record with only the required fields set.
    pub(crate) fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let mut raw = Map::new();
        raw.insert("title".to_string(), Value::String(title.into()));
        raw.insert("url".to_string(), Value::String(url.into()));
        raw.insert("date".to_string(), Value::String(date.into()));
        Self::try_from(raw).unwrap()
    }

    pub(crate) fn with_category(self, category: &str) -> Self {
        self.with_key("category", category)
    }

    pub(crate) fn with_summary(self, summary: &str) -> Self {
        self.with_key("summary", summary)
    }

    fn with_key(mut self, key: &str, value: &str) -> Self {
        self.raw.insert(key.to_string(), Value::String(value.to_string()));
        Self::try_from(self.raw).unwrap()
    }
}
