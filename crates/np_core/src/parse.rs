//! Classification of provider text into typed values.
//!
//! The provider is asked for bare JSON but regularly wraps it in markdown
//! fences or adds prose. Everything here is best effort: the result is either
//! `Valid` or `Malformed` with a reason, never a panic.

use serde_json::Value;

use crate::types::{ArticleSummary, NewsItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Valid(T),
    Malformed(String),
}

impl<T> Parsed<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Parsed::Valid(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Parsed::Valid(value) => Some(value),
            Parsed::Malformed(_) => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.ok().unwrap_or(default)
    }
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, then trims.
pub fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_news_list(raw: &str) -> Parsed<Vec<NewsItem>> {
    let cleaned = strip_fences(raw);
    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => return Parsed::Malformed(format!("news list is not valid JSON: {}", e)),
    };
    let Value::Array(entries) = value else {
        return Parsed::Malformed("news list is not a JSON array".to_string());
    };

    let total = entries.len();
    let items: Vec<NewsItem> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<NewsItem>(entry).ok())
        .filter(|item| !item.title.trim().is_empty())
        .collect();
    if items.len() < total {
        tracing::debug!("Dropped {} unusable news entries out of {}", total - items.len(), total);
    }
    Parsed::Valid(items)
}

pub fn parse_summary(raw: &str) -> Parsed<ArticleSummary> {
    let cleaned = strip_fences(raw);
    let mut summary: ArticleSummary = match serde_json::from_str(&cleaned) {
        Ok(summary) => summary,
        Err(e) => return Parsed::Malformed(format!("summary is not a valid JSON object: {}", e)),
    };

    summary.points.retain(|point| !point.trim().is_empty());
    if summary.why_it_matters.trim().is_empty() {
        return Parsed::Malformed("summary has no whyItMatters".to_string());
    }
    if summary.points.is_empty() {
        return Parsed::Malformed("summary has no points".to_string());
    }
    Parsed::Valid(summary)
}
