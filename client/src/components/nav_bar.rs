//! Sticky top navigation: brand block, one entry per page, and "Book Now".
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes the shared `ViewSelector` when an entry is clicked and reads it to
//! mark exactly one entry active.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use super::button::Button;
use crate::content::{BOOKING_URL, BRAND_NAME, BRAND_SHORT};
use crate::state::page::{Page, ViewSelector};

#[component]
pub fn NavBar() -> impl IntoView {
    let selector = expect_context::<RwSignal<ViewSelector>>();

    let entries = Page::ALL
        .into_iter()
        .map(|page| {
            let class = move || nav_entry_class(selector.with(|s| s.is_active(page)));
            let on_click = move |_| select_page(selector, page);
            view! {
                <button class=class on:click=on_click>
                    {page.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <div class="nav__brand">
                <span class="nav__brand-short">{BRAND_SHORT}</span>
                <span class="nav__brand-name">{BRAND_NAME}</span>
            </div>

            <div class="nav__actions">
                <div class="nav__entries">{entries}</div>
                <a href=BOOKING_URL target="_blank" rel="noreferrer">
                    <Button class="btn--primary btn--sm">"Book Now"</Button>
                </a>
            </div>
        </nav>
    }
}

/// Replace the current page and log the transition.
pub(crate) fn select_page(selector: RwSignal<ViewSelector>, page: Page) {
    #[cfg(feature = "hydrate")]
    log::debug!("page selected: {page}");
    selector.update(|s| s.select(page));
}

pub(crate) fn nav_entry_class(active: bool) -> &'static str {
    if active { "nav__entry nav__entry--active" } else { "nav__entry" }
}
