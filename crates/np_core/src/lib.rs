pub mod error;
pub mod logging;
pub mod parse;
pub mod theme;
pub mod types;
pub mod links;

pub use error::Error;
pub use parse::{parse_news_list, parse_summary, strip_fences, Parsed};
pub use theme::Theme;
pub use types::{
    ArticleSummary, Category, GroundingChunk, NewsItem, SearchResult, WebSource, TRENDING_TOPICS,
};
pub use links::{encode_query_component, safe_url, search_path};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::types::*;
    pub use super::{Error, Parsed, Result, Theme};
}
