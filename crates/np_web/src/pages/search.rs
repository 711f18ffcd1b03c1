use np_core::Theme;

use crate::components::{card, escape, markdown_lite, page, search_bar, CardOptions};
use crate::views::{SearchPhase, SearchView};

fn sources_list(view: &SearchView) -> String {
    let Some(result) = view.result() else {
        return String::new();
    };
    let sources = result.sources();
    if sources.is_empty() {
        return String::new();
    }
    let items: String = sources
        .iter()
        .enumerate()
        .filter_map(|(i, web)| {
            let uri = web.uri.as_deref()?;
            let title = web.title.as_deref().unwrap_or(uri);
            Some(format!(
                "<li>{}. <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                i + 1,
                escape(uri),
                escape(title)
            ))
        })
        .collect();
    format!("<h4 class=\"muted\">SOURCES</h4><ol class=\"sources\">{}</ol>", items)
}

/// The route settles the search before rendering, so a served page is
/// always `Success` or `Failed`; the other phases render for completeness.
pub fn render_search(view: &SearchView, theme: Theme) -> String {
    let content = match view.phase() {
        SearchPhase::Idle => String::new(),
        SearchPhase::Loading => "<p class=\"muted\">Searching...</p>".to_string(),
        SearchPhase::Success => {
            let text = view.result().map(|r| r.text.as_str()).unwrap_or_default();
            card(
                &format!("{}{}", markdown_lite(text), sources_list(view)),
                &CardOptions::default(),
            )
        }
        SearchPhase::Failed => format!(
            "<div class=\"error\"><p>Something went wrong while searching.</p><p class=\"muted\">{}</p></div>",
            escape(view.error().unwrap_or_default())
        ),
    };

    let body = format!(
        "{}<section><h2>Results for &ldquo;{}&rdquo;</h2>{}</section>",
        search_bar(view.query(), false),
        escape(view.query()),
        content
    );
    page(&format!("{} - Naijpedia", view.query()), theme, &body, None)
}
