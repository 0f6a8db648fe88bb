//! Browser wiring for each page enhancement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that needs `web-sys` lives here, behind the `hydrate` feature.
//! `storage`, `greeting` and `js_arg` also build without it so their host-side pieces
//! stay testable.

pub mod greeting;
pub mod js_arg;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod easter_egg;
#[cfg(feature = "hydrate")]
pub mod fade_in;
#[cfg(feature = "hydrate")]
pub mod notify;
#[cfg(feature = "hydrate")]
pub mod scroll_nav;
#[cfg(feature = "hydrate")]
pub mod theme_dom;
