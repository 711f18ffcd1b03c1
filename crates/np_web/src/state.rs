use axum::http::{header, HeaderMap};
use np_core::Theme;
use np_inference::Gateway;

pub const THEME_COOKIE: &str = "theme";

pub struct AppState {
    pub gateway: Gateway,
    /// Host preference read once at startup.
    pub default_theme: Theme,
}

impl AppState {
    pub fn new(gateway: Gateway, default_theme: Theme) -> Self {
        Self {
            gateway,
            default_theme,
        }
    }

    /// Theme cookie if the visitor set one, otherwise the startup default.
    pub fn theme_for(&self, headers: &HeaderMap) -> Theme {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(self.default_theme)
    }
}
