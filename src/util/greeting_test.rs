use super::*;

// =============================================================
// Greeting
// =============================================================

#[test]
fn greeting_with_repository_has_three_styled_lines() {
    let lines = greeting_lines(Some("https://github.com/someone/site"));
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|(text, css)| text.starts_with("%c") && !css.is_empty()));
    assert_eq!(lines[2].0, "%c $ git clone https://github.com/someone/site");
}

#[test]
fn greeting_without_repository_omits_clone_line() {
    let lines = greeting_lines(None);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|(text, _)| !text.contains("git clone") && !text.contains('<')));
}

#[test]
fn greeting_blank_repository_counts_as_unset() {
    assert_eq!(greeting_lines(Some("  ")).len(), 2);
}

#[test]
fn greeting_banner_style_is_semicolon_joined() {
    let lines = greeting_lines(None);
    let (_, css) = &lines[0];
    assert!(css.starts_with("font-size: 16px;font-family: monospace"));
    assert!(css.ends_with("border: 2px solid #00ff00"));
}

// =============================================================
// Load timing
// =============================================================

#[test]
fn load_duration_is_end_minus_start() {
    assert_eq!(load_duration_ms(1_000.0, 1_450.0), Some(450));
    assert_eq!(load_duration_ms(1_000.0, 1_450.6), Some(451));
}

#[test]
fn load_duration_none_before_load_finishes() {
    assert_eq!(load_duration_ms(1_000.0, 0.0), None);
}

#[test]
fn load_duration_rejects_backwards_clock() {
    assert_eq!(load_duration_ms(2_000.0, 1_000.0), None);
    assert_eq!(load_duration_ms(f64::NAN, 1_000.0), None);
}

#[test]
fn timing_event_serializes_for_gtag() {
    let json = serde_json::to_value(TimingEvent::page_load(321)).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "load", "value": 321, "event_category": "Performance" }));
}
