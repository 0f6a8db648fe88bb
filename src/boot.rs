//! WASM entry point: logging, DOM-ready gating, wiring, global export.
//!
//! Each component is wired independently. A failure (usually a missing
//! element) is logged and the remaining components still install.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::DocumentReadyState;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::Theme;
use crate::state::toast::{Toast, duration_from_js};
use crate::util::theme_dom::{self, SharedTheme};
use crate::util::js_arg::JsArg;
use crate::util::{dom, easter_egg, fade_in, greeting, notify, scroll_nav};

fn report<T>(component: &str, result: Result<T, SiteError>) {
    if let Err(e) = result {
        log::error!("{component}: {e}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    let config = Rc::new(SiteConfig::from_page());
    report("bootstrap", run_when_ready(config));
}

/// Defer `init` to `DOMContentLoaded` while the document is still parsing.
fn run_when_ready(config: Rc<SiteConfig>) -> Result<(), SiteError> {
    let doc = dom::document()?;
    if doc.ready_state() != DocumentReadyState::Loading {
        init(&config);
        return Ok(());
    }
    let on_ready = Closure::once(move || init(&config));
    doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn init(config: &Rc<SiteConfig>) {
    let theme = theme_dom::initialize(config);
    report("theme toggle", theme_dom::install_toggle(&theme, config));
    report("system theme", theme_dom::install_system_listener(&theme, config));
    report("scroll nav", scroll_nav::install(config));
    report("fade-in", fade_in::install(config));
    report("easter egg", easter_egg::install(config));
    greeting::console_greeting(config.repository_url.as_deref());
    report("load timing", greeting::install_load_timing());
    report("global export", export_global(&theme, config));
    log::debug!("site enhancements ready");
}

/// Expose `setTheme`, `toggleTheme`, `copyToClipboard` and
/// `showNotification` on `window[config.global_name]`.
fn export_global(theme: &SharedTheme, config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let api = Object::new();

    let set_theme = {
        let theme = Rc::clone(theme);
        let config = Rc::clone(config);
        Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            let arg = JsArg::from(&raw);
            let Some(name) = arg.as_str() else {
                log::warn!("setTheme: expected \"light\" or \"dark\", got {}", arg.to_text());
                return;
            };
            match name.parse::<Theme>() {
                Ok(next) => report("setTheme", theme_dom::set_theme(&theme, next, &config)),
                Err(e) => log::warn!("setTheme: {e}"),
            }
        })
    };
    Reflect::set(&api, &"setTheme".into(), set_theme.as_ref())?;
    set_theme.forget();

    let toggle_theme = {
        let theme = Rc::clone(theme);
        let config = Rc::clone(config);
        Closure::<dyn FnMut()>::new(move || report("toggleTheme", theme_dom::toggle(&theme, &config)))
    };
    Reflect::set(&api, &"toggleTheme".into(), toggle_theme.as_ref())?;
    toggle_theme.forget();

    let copy = {
        let config = Rc::clone(config);
        Closure::<dyn FnMut(JsValue)>::new(move |text: JsValue| {
            notify::copy_to_clipboard(JsArg::from(&text).to_text(), Rc::clone(&config));
        })
    };
    Reflect::set(&api, &"copyToClipboard".into(), copy.as_ref())?;
    copy.forget();

    let show = {
        let config = Rc::clone(config);
        Closure::<dyn FnMut(JsValue, JsValue)>::new(move |message: JsValue, duration: JsValue| {
            let message = JsArg::from(&message).to_text();
            let toast = Toast::configured(&config, message, duration_from_js(duration.as_f64()));
            report("showNotification", notify::show_notification(&toast));
        })
    };
    Reflect::set(&api, &"showNotification".into(), show.as_ref())?;
    show.forget();

    Reflect::set(&dom::window()?, &config.global_name.as_str().into(), &api)?;
    Ok(())
}
