//! Developer console greeting and page-load timing report.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use serde::Serialize;

#[cfg(feature = "hydrate")]
use crate::error::SiteError;

pub const ANALYTICS_EVENT: &str = "timing_complete";
pub const ANALYTICS_CATEGORY: &str = "Performance";

const BANNER_STYLE: &[&str] = &[
    "font-size: 16px",
    "font-family: monospace",
    "color: #00ff00",
    "background-color: #000",
    "padding: 10px",
    "border: 2px solid #00ff00",
];

/// `(text, css)` pairs printed with `%c` formatting.
///
/// The clone hint is only included when a repository is configured.
pub fn greeting_lines(repository_url: Option<&str>) -> Vec<(String, String)> {
    let mut lines = vec![
        ("%c Hello, fellow developer! \u{1F44B}".to_owned(), BANNER_STYLE.join(";")),
        (
            "%c Curious how this works? The source is on GitHub.".to_owned(),
            "font-family: monospace; color: #3399ff;".to_owned(),
        ),
    ];
    if let Some(url) = repository_url.map(str::trim).filter(|url| !url.is_empty()) {
        lines.push((format!("%c $ git clone {url}"), "font-family: monospace; color: #666;".to_owned()));
    }
    lines
}

/// `loadEventEnd - navigationStart`, or `None` while the load event has not
/// finished or the clock values are unusable.
pub fn load_duration_ms(navigation_start: f64, load_event_end: f64) -> Option<u64> {
    if !navigation_start.is_finite() || !load_event_end.is_finite() || load_event_end <= 0.0 {
        return None;
    }
    let elapsed = load_event_end - navigation_start;
    if elapsed < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = elapsed.round() as u64;
    Some(ms)
}

/// Parameters passed as the third argument to `gtag('event', ...)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimingEvent {
    pub name: &'static str,
    pub value: u64,
    pub event_category: &'static str,
}

impl TimingEvent {
    pub fn page_load(ms: u64) -> Self {
        Self { name: "load", value: ms, event_category: ANALYTICS_CATEGORY }
    }
}

/// Print the styled greeting.
#[cfg(feature = "hydrate")]
pub fn console_greeting(repository_url: Option<&str>) {
    for (text, css) in greeting_lines(repository_url) {
        web_sys::console::log_2(&text.into(), &css.into());
    }
}

#[cfg(feature = "hydrate")]
fn report_load_timing() -> Result<(), SiteError> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = crate::util::dom::window()?;
    let timing = window.performance().ok_or(SiteError::MissingGlobal("performance"))?.timing();
    let Some(ms) = load_duration_ms(timing.navigation_start(), timing.load_event_end()) else {
        log::debug!("load timing not available yet");
        return Ok(());
    };
    log::info!("\u{26A1} Page loaded in {ms}ms");

    let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))?;
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    let params = js_sys::JSON::parse(&serde_json::to_string(&TimingEvent::page_load(ms))?)?;
    gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(ANALYTICS_EVENT), &params)?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn schedule_report() {
    gloo_timers::callback::Timeout::new(0, || {
        if let Err(e) = report_load_timing() {
            log::warn!("load timing: {e}");
        }
    })
    .forget();
}

/// Report page-load duration once the `load` event has settled.
///
/// If the page already finished loading the report is scheduled directly.
#[cfg(feature = "hydrate")]
pub fn install_load_timing() -> Result<(), SiteError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::DocumentReadyState;

    let window = crate::util::dom::window()?;
    if crate::util::dom::document()?.ready_state() == DocumentReadyState::Complete {
        schedule_report();
        return Ok(());
    }
    // `loadEventEnd` is only filled in after the load handlers return.
    let on_load = Closure::<dyn FnMut()>::new(schedule_report);
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}
