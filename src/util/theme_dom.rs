//! Paints the theme onto the document and wires its two event sources.
//!
//! The `data-theme` attribute lives on `<html>`; the toggle's icon child
//! shows the glyph for the theme you would switch to.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryListEvent;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::{Theme, ThemeController};
use crate::util::dom;
use crate::util::storage::LocalStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub type SharedTheme = Rc<RefCell<ThemeController<LocalStore>>>;

/// Load the stored preference and paint it.
pub fn initialize(config: &SiteConfig) -> SharedTheme {
    let controller = ThemeController::initialize(LocalStore::new(&config.storage_key));
    let theme = controller.current();
    if let Err(e) = paint(theme, config) {
        log::error!("theme init: {e}");
    }
    log::debug!("theme initialized: {theme}");
    Rc::new(RefCell::new(controller))
}

/// Set the document marker and the toggle icon.
pub fn paint(theme: Theme, config: &SiteConfig) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let root = doc.document_element().ok_or_else(|| SiteError::missing("html"))?;
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;

    let toggle = dom::by_id(&doc, &config.theme_toggle_id)?;
    let icon = dom::query(&toggle, &config.theme_icon_selector)?;
    icon.set_text_content(Some(theme.icon()));
    Ok(())
}

/// Current `data-theme` value, if it names a known theme.
pub fn read_marker() -> Option<Theme> {
    dom::document()
        .ok()?
        .document_element()?
        .get_attribute(THEME_ATTRIBUTE)?
        .parse()
        .ok()
}

/// Explicit choice from page code (`setTheme`).
pub fn set_theme(shared: &SharedTheme, theme: Theme, config: &SiteConfig) -> Result<(), SiteError> {
    let applied = shared.borrow_mut().apply(theme);
    paint(applied, config)
}

/// Flip the theme shown on the document and persist the result.
pub fn toggle(shared: &SharedTheme, config: &SiteConfig) -> Result<Theme, SiteError> {
    let marker = read_marker();
    let next = shared.borrow_mut().toggle_from(marker);
    paint(next, config)?;
    Ok(next)
}

/// Attach the toggle click handler.
pub fn install_toggle(shared: &SharedTheme, config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let button = dom::by_id(&doc, &config.theme_toggle_id)?;

    let shared = Rc::clone(shared);
    let config_cb = Rc::clone(config);
    let on_click = Closure::<dyn FnMut()>::new(move || match toggle(&shared, &config_cb) {
        Ok(theme) => log::debug!("theme toggled to {theme}"),
        Err(e) => log::error!("theme toggle: {e}"),
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Follow OS color-scheme changes until the user makes a choice.
pub fn install_system_listener(shared: &SharedTheme, config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let query = dom::window()?
        .match_media(DARK_QUERY)?
        .ok_or(SiteError::MissingGlobal("matchMedia"))?;

    let shared = Rc::clone(shared);
    let config_cb = Rc::clone(config);
    let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        let Some(theme) = shared.borrow_mut().system_changed(event.matches()) else {
            log::debug!("ignoring system theme change: preference stored");
            return;
        };
        if let Err(e) = paint(theme, &config_cb) {
            log::error!("system theme change: {e}");
        }
    });
    query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}
