use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Quick-search chips shown under the home search bar.
pub const TRENDING_TOPICS: [&str; 5] = ["Afrobeats", "Naira Rate", "Lagos Tech", "Elections", "Startups"];

/// One aggregated headline as returned by the trending-news prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: None,
            category: String::new(),
            time: String::new(),
            source: None,
            url: None,
        }
    }

    /// Link target with the scheme coerced to `https://` when missing.
    pub fn safe_url(&self) -> Option<String> {
        crate::links::safe_url(self.url.as_deref())
    }

    /// Publisher name used when asking for a summary.
    pub fn source_or_default(&self) -> &str {
        match self.source.as_deref().map(str::trim) {
            Some(source) if !source.is_empty() => source,
            _ => "News",
        }
    }
}

/// AI-generated synopsis shown in the Quick Read modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub why_it_matters: String,
}

impl ArticleSummary {
    pub fn fallback() -> Self {
        Self {
            points: vec![
                "Could not generate summary at this time.".to_string(),
                "Please visit the authentic source link below.".to_string(),
            ],
            why_it_matters: "Details unavailable.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub text: String,
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl SearchResult {
    /// Citations that carry a URI, first occurrence wins.
    pub fn sources(&self) -> Vec<&WebSource> {
        let mut seen = std::collections::HashSet::new();
        self.grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter(|web| match web.uri.as_deref() {
                Some(uri) if !uri.is_empty() => seen.insert(uri),
                _ => false,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl WebSource {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            title: Some(title.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Politics,
    Business,
    Technology,
    Sports,
    Entertainment,
    Metro,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Politics,
        Category::Business,
        Category::Technology,
        Category::Sports,
        Category::Entertainment,
        Category::Metro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Politics => "Politics",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Metro => "Metro",
        }
    }

    /// Parses a label, falling back to `All` for anything unknown.
    pub fn parse_or_all(value: Option<&str>) -> Self {
        match value {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::debug!("Unknown category {:?}, using All", value);
                Category::All
            }),
            None => Category::All,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", s)))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
