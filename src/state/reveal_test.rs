use super::*;

#[test]
fn default_options() {
    let opts = RevealOptions::default();
    assert_eq!(opts.threshold, 0.1);
    assert_eq!(opts.root_margin(), "0px 0px -50px 0px");
}

#[test]
fn options_follow_config() {
    let cfg = SiteConfig { reveal_threshold: 0.25, reveal_bottom_margin_px: 80, ..SiteConfig::default() };
    let opts = RevealOptions::from_config(&cfg);
    assert_eq!(opts.threshold, 0.25);
    assert_eq!(opts.root_margin(), "0px 0px -80px 0px");
}

#[test]
fn default_config_matches_default_options() {
    assert_eq!(RevealOptions::from_config(&SiteConfig::default()), RevealOptions::default());
}

#[test]
fn non_intersecting_report_does_nothing() {
    let mut t = RevealTracker::default();
    assert!(!t.observe(0, false));
    assert!(!t.is_revealed(0));
}

#[test]
fn first_intersection_reveals_once() {
    let mut t = RevealTracker::default();
    assert!(t.observe(2, true));
    assert!(t.is_revealed(2));
    assert!(!t.observe(2, true));
    assert!(!t.observe(2, false));
    assert!(t.is_revealed(2));
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn elements_reveal_independently() {
    let mut t = RevealTracker::default();
    assert!(t.observe(0, true));
    assert!(t.observe(1, true));
    assert_eq!(t.revealed_count(), 2);
}
