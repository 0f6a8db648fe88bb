//! Element lookup helpers that turn absent nodes into `SiteError`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingGlobal("document"))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, SiteError> {
    doc.get_element_by_id(id).ok_or_else(|| SiteError::missing(&format!("#{id}")))
}

pub fn query(parent: &Element, selector: &str) -> Result<Element, SiteError> {
    parent.query_selector(selector)?.ok_or_else(|| SiteError::missing(selector))
}

pub fn query_doc(doc: &Document, selector: &str) -> Result<Element, SiteError> {
    doc.query_selector(selector)?.ok_or_else(|| SiteError::missing(selector))
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like `query_all`, narrowed to `HtmlElement` for layout metrics.
pub fn query_all_html(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    Ok(query_all(doc, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}
