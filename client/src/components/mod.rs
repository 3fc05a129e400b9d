//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and content panels. Only `nav_bar` and
//! `page_view` touch the shared `ViewSelector`; the rest are layout wrappers.

pub mod button;
pub mod card;
pub mod nav_bar;
pub mod page_view;

/// Base class followed by caller-supplied extras, if any.
pub(crate) fn join_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}
