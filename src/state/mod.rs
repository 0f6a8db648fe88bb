//! Pure state for each page enhancement.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM. The browser wiring in `util` owns these
//! values behind `Rc<RefCell<_>>` and translates events into method calls.

pub mod konami;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod toast;
