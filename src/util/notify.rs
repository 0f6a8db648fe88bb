//! Toast notifications and clipboard copy.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlElement};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::toast::{COPIED_MESSAGE, TOAST_EXIT_ANIMATION, TOAST_STYLE, Toast};
use crate::util::dom;

/// Append a toast to `<body>`, start its exit animation after
/// `duration_ms`, and remove it `exit_ms` later.
pub fn show_notification(toast: &Toast) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let body = doc.body().ok_or_else(|| SiteError::missing("body"))?;
    let el = doc
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::Js("created div is not an HtmlElement".to_owned()))?;
    el.set_text_content(Some(&toast.message));
    el.style().set_css_text(TOAST_STYLE);
    body.append_child(&el)?;

    let exit_ms = toast.exit_ms;
    Timeout::new(toast.duration_ms, move || {
        if let Err(e) = el.style().set_property("animation", TOAST_EXIT_ANIMATION) {
            log::warn!("toast exit animation: {e:?}");
        }
        Timeout::new(exit_ms, move || el.remove()).forget();
    })
    .forget();
    Ok(())
}

async fn write_clipboard(text: &str) -> Result<(), SiteError> {
    // Depending on the binding version the getter is optional; normalize.
    let clipboard: Option<Clipboard> = dom::window()?.navigator().clipboard().into();
    let clipboard = clipboard.ok_or(SiteError::MissingGlobal("navigator.clipboard"))?;
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Copy `text` and confirm with a toast. Failures only reach the console.
pub fn copy_to_clipboard(text: String, config: Rc<SiteConfig>) {
    wasm_bindgen_futures::spawn_local(async move {
        match write_clipboard(&text).await {
            Ok(()) => {
                if let Err(e) = show_notification(&Toast::configured(&config, COPIED_MESSAGE, None)) {
                    log::error!("copy toast: {e}");
                }
            }
            Err(e) => log::error!("Failed to copy: {e}"),
        }
    });
}
