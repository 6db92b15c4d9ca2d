//! Listing configuration, overridable from the page query string

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_COMPACT_BREAKPOINT_PX: u32 = 768;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Endpoint returning the full product array
    pub api_url: String,
    /// Viewports narrower than this use the compact layout
    pub compact_breakpoint_px: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            compact_breakpoint_px: DEFAULT_COMPACT_BREAKPOINT_PX,
        }
    }
}

impl CatalogConfig {
    /// Parse `?api_url=...&compact_breakpoint_px=...`; falls back to defaults
    pub fn from_query(query: &str) -> Self {
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid listing query '{}': {}", query, e);
            Self::default()
        })
    }

    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
