//! Frame-throttled scroll listener that marks the active nav link.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::nav::{FrameGate, SectionBounds, active_link_indices, active_section, probe_position};
use crate::util::dom;

/// Measure every section in document order.
fn measure_sections(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

/// Recompute the active link from the current scroll offset.
///
/// `sections` and `links` are looked up once at install; only their layout
/// is re-read here. Leaves the links untouched when no section contains the
/// probe position.
pub fn update_active_nav(
    sections: &[HtmlElement],
    links: &[Element],
    config: &SiteConfig,
) -> Result<Option<String>, SiteError> {
    let bounds = measure_sections(sections);
    let position = probe_position(dom::window()?.scroll_y()?, config.scroll_offset_px);
    let Some(active_id) = active_section(&bounds, position) else {
        return Ok(None);
    };

    let hrefs = links.iter().map(|link| link.get_attribute("href")).collect::<Vec<_>>();
    let active = active_link_indices(hrefs.iter().map(Option::as_deref), active_id);
    for (i, link) in links.iter().enumerate() {
        let classes = link.class_list();
        if active.contains(&i) {
            classes.add_1(&config.active_class)?;
        } else {
            classes.remove_1(&config.active_class)?;
        }
    }
    Ok(Some(active_id.to_owned()))
}

/// Listen for `scroll` and update at most once per animation frame.
pub fn install(config: &Rc<SiteConfig>) -> Result<(), SiteError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let sections = dom::query_all_html(&doc, &config.section_selector)?;
    let links = dom::query_all(&doc, &config.nav_link_selector)?;
    log::debug!("scroll nav tracking {} sections, {} links", sections.len(), links.len());
    let gate = Rc::new(Cell::new(FrameGate::default()));
    let last_active = Rc::new(RefCell::new(None::<String>));

    let on_frame = {
        let gate = Rc::clone(&gate);
        let config = Rc::clone(config);
        Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            let mut g = gate.get();
            g.fire();
            gate.set(g);
            match update_active_nav(&sections, &links, &config) {
                Ok(Some(id)) => {
                    let mut last = last_active.borrow_mut();
                    if last.as_deref() != Some(id.as_str()) {
                        log::debug!("active section: {id}");
                        *last = Some(id);
                    }
                }
                Ok(None) => {}
                Err(e) => log::error!("nav update: {e}"),
            }
        })
    };

    let on_scroll = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let mut g = gate.get();
            if !g.request() {
                return;
            }
            if let Err(e) = window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
                g.cancel();
            }
            gate.set(g);
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}
