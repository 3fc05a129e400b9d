//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site mounts a single route; `site` lays out the navigation bar and the
//! content area and delegates rendering to `components`.

pub mod site;
