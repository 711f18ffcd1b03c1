use chrono::Datelike;
use np_core::Theme;

use super::escape;

const STYLES: &str = r#"
:root { --bg: #f9fafb; --fg: #111827; --muted: #6b7280; --panel: rgba(255,255,255,0.8); --line: rgba(0,0,0,0.06); --accent: #2563eb; }
.dark { --bg: #050505; --fg: #f3f4f6; --muted: #9ca3af; --panel: rgba(28,28,30,0.6); --line: rgba(255,255,255,0.1); --accent: #60a5fa; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
body.modal-open { overflow: hidden; }
a { color: inherit; }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 24px; max-width: 1200px; margin: 0 auto; }
.logo { font-weight: 800; font-size: 1.4rem; letter-spacing: -0.04em; text-decoration: none; }
.logo span { color: var(--accent); }
.theme-toggle button { border: 1px solid var(--line); background: var(--panel); color: var(--fg); border-radius: 999px; padding: 8px 14px; cursor: pointer; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.hero { text-align: center; margin: 48px 0; }
.hero h1 { font-size: 3.5rem; letter-spacing: -0.05em; margin-bottom: 24px; }
.search-bar { display: flex; gap: 8px; max-width: 900px; margin: 0 auto; }
.search-bar.centered { max-width: 640px; }
.search-bar input { flex: 1; padding: 18px 24px; font-size: 1.1rem; border-radius: 24px; border: 1px solid var(--line); background: var(--panel); color: var(--fg); }
.search-bar button { border-radius: 24px; border: 0; padding: 0 20px; background: var(--fg); color: var(--bg); font-weight: 700; }
.chips, .filters { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin: 20px 0; }
.chip, .filter { padding: 8px 16px; border-radius: 999px; border: 1px solid var(--line); text-decoration: none; font-size: 0.8rem; font-weight: 700; }
.filter.active { background: var(--fg); color: var(--bg); }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px; }
.glass-card { position: relative; background: var(--panel); border: 1px solid var(--line); border-radius: 16px; padding: 24px; backdrop-filter: blur(20px); }
.glass-card.hoverable:hover { transform: scale(1.02); transition: transform 0.3s; }
.card-link { position: absolute; inset: 0; z-index: 0; }
.card-actions { position: relative; z-index: 1; display: flex; justify-content: space-between; align-items: center; margin-top: 16px; }
.badge { font-size: 0.65rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; border: 1px solid var(--line); padding: 4px 8px; border-radius: 4px; }
.muted { color: var(--muted); font-size: 0.8rem; }
.source { color: var(--accent); font-weight: 700; font-size: 0.75rem; text-transform: uppercase; }
.skeleton { height: 140px; border-radius: 8px; background: var(--line); }
.empty { text-align: center; padding: 80px 0; color: var(--muted); }
.error { color: #f87171; text-align: center; }
.modal { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 16px; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0,0,0,0.5); }
.modal-panel { position: relative; width: 100%; max-width: 680px; max-height: 85vh; overflow-y: auto; }
.modal-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid var(--line); }
.modal-close { text-decoration: none; font-size: 1.5rem; }
.why { padding: 20px; border-radius: 12px; border: 1px solid var(--line); }
.button { display: inline-block; padding: 14px 20px; border-radius: 12px; font-weight: 700; text-decoration: none; border: 1px solid var(--line); }
.button.primary { background: var(--fg); color: var(--bg); }
.sources li { margin: 6px 0; }
footer { border-top: 1px solid var(--line); padding: 32px 24px; text-align: center; color: var(--muted); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.08em; }
"#;

pub fn logo() -> String {
    "<a class=\"logo\" href=\"/\">Naij<span>pedia</span></a>".to_string()
}

/// Site header with the theme toggle; the toggle posts back and flips the cookie.
pub fn header(theme: Theme) -> String {
    let label = match theme {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };
    format!(
        "<header class=\"site-header\">{}\
         <form class=\"theme-toggle\" action=\"/theme\" method=\"post\"><button type=\"submit\">{}</button></form>\
         </header>",
        logo(),
        label
    )
}

fn footer() -> String {
    format!(
        "<footer>&copy; {} Naijpedia Inc.</footer>",
        chrono::Utc::now().year()
    )
}

/// Full HTML document. `modal` is rendered on top of `body`, and the
/// scroll lock class is only present while a modal is.
pub fn page(title: &str, theme: Theme, body: &str, modal: Option<&str>) -> String {
    let body_class = if modal.is_some() { " class=\"modal-open\"" } else { "" };
    format!(
        "<!DOCTYPE html><html lang=\"en\" class=\"{theme}\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLES}</style></head>\
         <body{body_class}>{header}<main>{body}</main>{footer}{modal}</body></html>",
        theme = theme.as_str(),
        title = escape(title),
        header = header(theme),
        footer = footer(),
        modal = modal.unwrap_or(""),
    )
}
