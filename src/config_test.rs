use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_contract() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.global_name, DEFAULT_GLOBAL_NAME);
    assert_eq!(cfg.theme_toggle_id, "theme-toggle");
    assert_eq!(cfg.theme_icon_selector, ".theme-icon");
    assert_eq!(cfg.nav_link_selector, ".nav-link");
    assert_eq!(cfg.section_selector, ".section");
    assert_eq!(cfg.terminal_selector, ".terminal-body");
}

#[test]
fn default_timings() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.scroll_offset_px, 100.0);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_bottom_margin_px, 50);
    assert_eq!(cfg.easter_egg_restore_ms, 3_000);
    assert_eq!(cfg.toast_duration_ms, 2_000);
    assert_eq!(cfg.toast_exit_ms, 300);
    assert_eq!(cfg.repository_url, None);
}

#[test]
fn from_json_reads_repository_url() {
    let cfg = SiteConfig::from_json(r#"{"repository_url": "https://github.com/someone/site"}"#).unwrap();
    assert_eq!(cfg.repository_url.as_deref(), Some("https://github.com/someone/site"));
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_blank_is_default() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_overrides_only_named_fields() {
    let cfg = SiteConfig::from_json(r#"{"scroll_offset_px": 80, "storage_key": "my-theme"}"#).unwrap();
    assert_eq!(cfg.scroll_offset_px, 80.0);
    assert_eq!(cfg.storage_key, "my-theme");
    assert_eq!(cfg.toast_duration_ms, 2_000);
    assert_eq!(cfg.section_selector, ".section");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = SiteConfig::from_json("{\"scroll_offset_px\": ").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn from_json_rejects_wrong_field_type() {
    assert!(SiteConfig::from_json(r#"{"toast_exit_ms": "slow"}"#).is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_page_without_browser_is_default() {
    assert_eq!(SiteConfig::from_page(), SiteConfig::default());
}
