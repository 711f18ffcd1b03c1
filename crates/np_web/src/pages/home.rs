use np_core::{encode_query_component, search_path, ArticleSummary, Category, NewsItem, Theme, TRENDING_TOPICS};

use crate::components::{card, escape, modal, page, search_bar, CardOptions};
use crate::views::{HomeView, NewsPhase, SummaryPhase};

const PLACEHOLDER_CARDS: usize = 6;

fn category_href(category: Category) -> String {
    format!("/?category={}", encode_query_component(category.label()))
}

/// Link that reopens the briefing for `category` with `item` in the Quick Read modal.
pub fn quick_read_href(category: Category, item: &NewsItem) -> String {
    let mut href = category_href(category);
    let fields = [
        ("read_title", Some(item.title.as_str())),
        ("read_source", item.source.as_deref()),
        ("read_category", Some(item.category.as_str())),
        ("read_time", Some(item.time.as_str())),
        ("read_url", item.url.as_deref()),
    ];
    for (name, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            href.push_str(&format!("&{}={}", name, encode_query_component(value)));
        }
    }
    href
}

fn hero() -> String {
    let chips: String = TRENDING_TOPICS
        .iter()
        .map(|topic| {
            format!(
                "<a class=\"chip\" href=\"{}\">{}</a>",
                escape(&search_path(topic)),
                escape(topic)
            )
        })
        .collect();
    format!(
        "<section class=\"hero\"><h1>Naijpedia</h1>{}<div class=\"chips\"><span class=\"muted\">TRENDING</span>{}</div></section>",
        search_bar("", true),
        chips
    )
}

fn filters(active: Category) -> String {
    let buttons: String = Category::ALL
        .iter()
        .map(|category| {
            let class = if *category == active { "filter active" } else { "filter" };
            format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                class,
                escape(&category_href(*category)),
                category
            )
        })
        .collect();
    format!("<nav class=\"filters\">{}</nav>", buttons)
}

fn news_card(category: Category, item: &NewsItem) -> String {
    let read_href = quick_read_href(category, item);
    let teaser = item
        .summary
        .as_deref()
        .map(|s| format!("<p class=\"muted\">{}</p>", escape(s)))
        .unwrap_or_default();
    let external = item
        .safe_url()
        .map(|url| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"Open article\">&#8599;</a>",
                escape(&url)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<div><span class=\"badge\">{}</span> <span class=\"muted\">{}</span></div>\
         <h3>{}</h3>{}\
         <div class=\"card-actions\"><span class=\"source\">{}</span>\
         <span><a class=\"chip\" href=\"{}\">Quick Read</a> {}</span></div>",
        escape(&item.category),
        escape(&item.time),
        escape(&item.title),
        teaser,
        escape(item.source.as_deref().unwrap_or("Source")),
        escape(&read_href),
        external
    );
    card(
        &body,
        &CardOptions {
            hover: true,
            href: Some(&read_href),
            class: "news-card",
        },
    )
}

fn news_grid(view: &HomeView) -> String {
    match view.news_phase() {
        // only reached behind a Quick Read, where the grid is never fetched
        NewsPhase::Loading => {
            let placeholder = card(
                "<div class=\"skeleton\"></div>",
                &CardOptions {
                    class: "placeholder",
                    ..CardOptions::default()
                },
            );
            format!(
                "<div class=\"grid\" aria-hidden=\"true\">{}</div>",
                placeholder.repeat(PLACEHOLDER_CARDS)
            )
        }
        NewsPhase::Populated => {
            let cards: String = view
                .news()
                .iter()
                .map(|item| news_card(view.category(), item))
                .collect();
            format!("<div class=\"grid\">{}</div>", cards)
        }
        NewsPhase::Empty => format!(
            "<div class=\"empty\"><p>{}</p><a href=\"{}\">Reset Filters</a></div>",
            escape(&view.empty_message()),
            escape(&category_href(Category::All))
        ),
    }
}

fn summary_body(summary: &ArticleSummary) -> String {
    let points: String = summary
        .points
        .iter()
        .map(|point| format!("<li>{}</li>", escape(point)))
        .collect();
    format!(
        "<div class=\"why\"><h4>Why It Matters</h4><p>{}</p></div>\
         <h4 class=\"muted\">KEY DETAILS</h4><ul>{}</ul>",
        escape(&summary.why_it_matters),
        points
    )
}

fn read_modal(view: &HomeView, item: &NewsItem) -> String {
    let content = match (view.summary_phase(), view.summary()) {
        (SummaryPhase::Ready, Some(summary)) => summary_body(summary),
        (SummaryPhase::Loading, _) => "<p class=\"muted\">Analyzing Article...</p>".to_string(),
        _ => "<p class=\"error\">Failed to load summary.</p>".to_string(),
    };
    let close_href = category_href(view.category());
    let full_article = item.safe_url().unwrap_or_else(|| "#".to_string());

    let body = format!(
        "<div><span class=\"badge\">{}</span> <span class=\"source\">{}</span> <span class=\"muted\">{}</span>\
         <h2>{}</h2></div>{}\
         <div class=\"card-actions\">\
         <a class=\"button primary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Read Full Article</a>\
         <a class=\"button\" href=\"{}\">Close</a></div>",
        escape(&item.category),
        escape(item.source.as_deref().unwrap_or("")),
        escape(&item.time),
        escape(&item.title),
        content,
        escape(&full_article),
        escape(&close_href)
    );
    modal(Some("Quick Summary"), &body, &close_href)
}

pub fn render_home(view: &HomeView, theme: Theme) -> String {
    let body = format!(
        "{}<section><h2>Briefings</h2><p class=\"muted\">Fast, verified updates from Nigerian sources</p>{}{}</section>",
        hero(),
        filters(view.category()),
        news_grid(view)
    );
    let modal = view.reading().map(|item| read_modal(view, item));
    page("Naijpedia", theme, &body, modal.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            summary: Some("Teaser".to_string()),
            category: "Sports".to_string(),
            time: "2h ago".to_string(),
            source: Some("Pulse NG".to_string()),
            url: Some("pulse.ng/eagles".to_string()),
        }
    }

    #[test]
    fn test_quick_read_href() {
        let href = quick_read_href(Category::Sports, &item("Eagles & Co"));
        assert_eq!(
            href,
            "/?category=Sports&read_title=Eagles%20%26%20Co&read_source=Pulse%20NG&read_category=Sports&read_time=2h%20ago&read_url=pulse.ng%2Feagles"
        );
    }

    #[test]
    fn test_populated_grid_renders_cards() {
        let mut view = HomeView::new();
        let id = view.select_category(Category::Sports);
        let raw = serde_json::to_string(&vec![item("One"), item("Two")]).unwrap();
        view.complete_news(id, &raw);

        let html = render_home(&view, Theme::Dark);
        assert_eq!(html.matches("class=\"glass-card hoverable news-card\"").count(), 2);
        assert!(html.contains("href=\"https://pulse.ng/eagles\""));
        assert!(html.contains("<a class=\"filter active\" href=\"/?category=Sports\">Sports</a>"));
        assert!(!html.contains("No news found"));
        assert!(!html.contains("modal-open\""));
    }

    #[test]
    fn test_empty_grid_offers_reset() {
        let mut view = HomeView::new();
        let id = view.select_category(Category::Metro);
        view.complete_news(id, "[]");
        let html = render_home(&view, Theme::Light);
        assert!(html.contains("No news found for Metro."));
        assert!(html.contains("<a href=\"/?category=All\">Reset Filters</a>"));
    }

    #[test]
    fn test_modal_states() {
        let mut view = HomeView::new();
        let id = view.open_article(item("Naira hits new low"));
        let html = render_home(&view, Theme::Dark);
        assert!(html.contains("Analyzing Article..."));
        assert!(html.contains("<body class=\"modal-open\">"));
        assert_eq!(html.matches("glass-card placeholder").count(), PLACEHOLDER_CARDS);
        assert!(!html.contains("news-card"));

        view.complete_summary(id, Some(ArticleSummary::fallback()));
        let html = render_home(&view, Theme::Dark);
        assert!(html.contains("Details unavailable."));
        assert!(html.contains("<li>Could not generate summary at this time.</li>"));

        let id = view.open_article(item("Another"));
        view.complete_summary(id, None);
        assert!(render_home(&view, Theme::Dark).contains("Failed to load summary."));
    }

    #[test]
    fn test_trending_chips_link_to_search() {
        let html = render_home(&HomeView::new(), Theme::Dark);
        assert!(html.contains("href=\"/search?q=Lagos%20Tech\""));
    }
}
