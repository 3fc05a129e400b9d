//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The site has exactly one piece of UI state: which content panel is shown.
//! It lives in `page` and is provided to components as an `RwSignal`.

pub mod page;
