//! # site-enhance
//!
//! Client-side enhancements for a static personal site, compiled to WASM:
//! light/dark theme with a persisted preference, active nav highlighting on
//! scroll, one-shot section fade-in, a Konami-code easter egg, toast
//! notifications with clipboard copy, and a console greeting.
//!
//! Decision logic lives in `state` and is plain Rust. Browser wiring lives in
//! `util` and `boot` behind the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod boot;
pub mod config;
pub mod error;
pub mod state;
pub mod util;
