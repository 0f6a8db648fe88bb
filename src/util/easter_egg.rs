//! Konami-code listener and the terminal takeover it triggers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::konami::{EASTER_EGG_HTML, KonamiTracker};
use crate::util::dom;

/// Swap the terminal contents for the easter-egg message and restore them
/// after `restore_ms`.
///
/// Retriggering before the restore fires captures the message itself as the
/// "original", so the terminal ends on the message. Timers are not cancelled.
pub fn activate(selector: &str, restore_ms: u32) -> Result<(), SiteError> {
    let terminal = dom::query_doc(&dom::document()?, selector)?;
    let original = terminal.inner_html();
    terminal.set_inner_html(EASTER_EGG_HTML);
    log::info!("easter egg activated");

    Timeout::new(restore_ms, move || terminal.set_inner_html(&original)).forget();
    Ok(())
}

/// Feed every `keydown` on the document into a `KonamiTracker`.
pub fn install(config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let tracker = RefCell::new(KonamiTracker::default());
    let config = Rc::clone(config);

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if !tracker.borrow_mut().press(&event.key()) {
            return;
        }
        if let Err(e) = activate(&config.terminal_selector, config.easter_egg_restore_ms) {
            log::error!("easter egg: {e}");
        }
    });
    doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}
