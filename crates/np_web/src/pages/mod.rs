//! Whole screens composed from views and components.

mod home;
mod search;

pub use home::{quick_read_href, render_home};
pub use search::render_search;
