//! Page-level configuration.
//!
//! Every DOM selector, storage key and timing constant the enhancement layer
//! relies on lives here. A page can override any field by embedding a JSON
//! data island:
//!
//! ```html
//! <script type="application/json" id="site-config">{"scroll_offset_px": 80}</script>
//! ```
//!
//! Missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_STORAGE_KEY: &str = "site-theme";
pub const DEFAULT_GLOBAL_NAME: &str = "siteEnhance";
pub const CONFIG_ISLAND_ID: &str = "site-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Name of the object exported on `window`.
    pub global_name: String,
    pub theme_toggle_id: String,
    pub theme_icon_selector: String,
    pub nav_link_selector: String,
    pub section_selector: String,
    pub terminal_selector: String,
    /// Added to `scrollY` before testing section bounds.
    pub scroll_offset_px: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: i32,
    pub reveal_class: String,
    pub active_class: String,
    pub easter_egg_restore_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_exit_ms: u32,
    /// Source repository advertised in the console greeting; the clone hint
    /// is omitted when unset.
    pub repository_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            global_name: DEFAULT_GLOBAL_NAME.to_owned(),
            theme_toggle_id: "theme-toggle".to_owned(),
            theme_icon_selector: ".theme-icon".to_owned(),
            nav_link_selector: ".nav-link".to_owned(),
            section_selector: ".section".to_owned(),
            terminal_selector: ".terminal-body".to_owned(),
            scroll_offset_px: 100.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50,
            reveal_class: "fade-in".to_owned(),
            active_class: "active".to_owned(),
            easter_egg_restore_ms: 3_000,
            toast_duration_ms: 2_000,
            toast_exit_ms: 300,
            repository_url: None,
        }
    }
}

impl SiteConfig {
    /// Parse a config override. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the `#site-config` data island, falling back to defaults.
    ///
    /// A malformed island is logged and ignored.
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ISLAND_ID))
                .and_then(|el| el.text_content())
            else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring #{CONFIG_ISLAND_ID}: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
