use super::escape;

/// Modal overlay. The page that embeds it must lock body scrolling; see
/// [`super::page`], which does so only while a modal is present.
pub fn modal(title: Option<&str>, body: &str, close_href: &str) -> String {
    let title = escape(title.unwrap_or("Details"));
    let close_href = escape(close_href);
    format!(
        "<div class=\"modal\" role=\"dialog\" aria-modal=\"true\">\
         <a class=\"modal-backdrop\" href=\"{close_href}\" aria-label=\"Close\"></a>\
         <div class=\"modal-panel glass-card\">\
         <div class=\"modal-header\"><h2>{title}</h2><a class=\"modal-close\" href=\"{close_href}\">&times;</a></div>\
         <div class=\"modal-body\">{body}</div>\
         </div></div>"
    )
}
