use regex::Regex;
use std::sync::OnceLock;

use super::escape;

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex"))
}

fn bullet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[*-]\s").expect("static regex"))
}

/// `**text**` becomes `<strong>text</strong>`; nothing else is touched.
pub fn emphasize(text: &str) -> String {
    bold_pattern().replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Blank-line separated blocks become paragraphs, or bullet lists when the
/// block starts with `* ` or `- `. Not a markdown parser: no nesting, links
/// or headings.
pub fn markdown_lite(content: &str) -> String {
    let mut html = String::from("<div class=\"prose\">");
    for block in content.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if block.starts_with("* ") || block.starts_with("- ") {
            html.push_str("<ul>");
            for line in block.lines() {
                let item = bullet_pattern().replace(line.trim(), "");
                html.push_str(&format!("<li>{}</li>", emphasize(&escape(&item))));
            }
            html.push_str("</ul>");
        } else {
            html.push_str(&format!("<p>{}</p>", emphasize(&escape(block))));
        }
    }
    html.push_str("</div>");
    html
}
