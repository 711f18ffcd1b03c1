//! HTML building blocks. Each returns a string; all interpolated text goes
//! through [`escape`].

mod card;
mod layout;
mod markdown;
mod modal;
mod search_bar;

pub use card::{card, CardOptions};
pub use layout::{header, logo, page};
pub use markdown::{emphasize, markdown_lite};
pub use modal::modal;
pub use search_bar::search_bar;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
