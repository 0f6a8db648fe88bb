//! One-shot fade-in via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::reveal::{RevealOptions, RevealTracker};
use crate::util::dom;

/// Observe every section; each gets the reveal class on first intersection
/// and is then dropped from the observer.
pub fn install(config: &SiteConfig) -> Result<usize, SiteError> {
    let doc = dom::document()?;
    let targets: Rc<Vec<Element>> = Rc::new(dom::query_all(&doc, &config.section_selector)?);
    let options = RevealOptions::from_config(config);
    let tracker = Rc::new(RefCell::new(RevealTracker::default()));

    let reveal_class = config.reveal_class.clone();
    let observed = Rc::clone(&targets);
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    continue;
                }
                if let Err(e) = target.class_list().add_1(&reveal_class) {
                    log::error!("fade-in: {e:?}");
                }
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();

    for el in targets.iter() {
        observer.observe(el);
    }
    log::debug!("fade-in observing {} elements", targets.len());
    Ok(targets.len())
}
