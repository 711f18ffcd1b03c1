//! The three application intents the UI needs from the AI provider.
//!
//! Only [`Gateway::perform_general_search`] lets a failure escape. News and
//! summaries turn every failure into a benign default so a view can always
//! render something.

use np_core::{parse_news_list, parse_summary, ArticleSummary, Error, NewsItem, Parsed, Result, SearchResult};
use std::fmt;
use std::sync::Arc;

use crate::models::{GenerateRequest, Provider};
use crate::prompts;

#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn Provider>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Gateway {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub async fn perform_general_search(&self, query: &str) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Err(Error::InvalidInput("search query is empty".to_string()));
        }

        let request = GenerateRequest::grounded(query).with_system_instruction(prompts::search_system_instruction());
        let response = self.provider.generate(&request).await.map_err(|e| {
            tracing::error!("Search failed for {:?}: {}", query, e);
            e
        })?;

        let text = response
            .non_empty_text()
            .unwrap_or(prompts::NO_RESULTS_TEXT)
            .to_string();
        tracing::debug!("Search answered with {} citations", response.grounding_chunks.len());
        Ok(SearchResult {
            text,
            grounding_chunks: response.grounding_chunks,
        })
    }

    /// Raw provider text expected to hold a JSON array. Never fails: any
    /// error comes back as `"[]"`.
    pub async fn fetch_trending_news(&self, category: &str) -> String {
        let request = GenerateRequest::grounded(prompts::trending_news_prompt(category));
        match self.provider.generate(&request).await {
            Ok(response) => response
                .non_empty_text()
                .unwrap_or(prompts::EMPTY_NEWS_JSON)
                .to_string(),
            Err(e) => {
                tracing::error!("News fetch failed for {}: {}", category, e);
                prompts::EMPTY_NEWS_JSON.to_string()
            }
        }
    }

    /// Fetches and classifies the trending list; malformed text is an empty list.
    pub async fn load_news(&self, category: &str) -> Vec<NewsItem> {
        let raw = self.fetch_trending_news(category).await;
        match parse_news_list(&raw) {
            Parsed::Valid(items) => items,
            Parsed::Malformed(reason) => {
                tracing::warn!("Failed to parse news for {}: {}", category, reason);
                Vec::new()
            }
        }
    }

    /// Always returns something renderable, falling back to
    /// [`ArticleSummary::fallback`] on any failure.
    pub async fn summarize_article(&self, title: &str, source: &str) -> ArticleSummary {
        let source = match source.trim() {
            "" => "News",
            source => source,
        };
        let request = GenerateRequest::grounded(prompts::article_summary_prompt(title, source));

        let raw = match self.provider.generate(&request).await {
            Ok(response) => response.non_empty_text().unwrap_or("{}").to_string(),
            Err(e) => {
                tracing::error!("Summary failed for {:?}: {}", title, e);
                return ArticleSummary::fallback();
            }
        };

        match parse_summary(&raw) {
            Parsed::Valid(summary) => summary,
            Parsed::Malformed(reason) => {
                tracing::warn!("Unusable summary for {:?}: {}", title, reason);
                ArticleSummary::fallback()
            }
        }
    }
}
