//! Renders the content block of the currently selected page.

#[cfg(test)]
#[path = "page_view_test.rs"]
mod page_view_test;

use leptos::prelude::*;

use super::button::{Button, emphasis_class};
use super::card::{Card, CardContent};
use super::nav_bar::select_page;
use crate::content::{CallToAction, PageContent};
use crate::state::page::{Page, ViewSelector};

/// Content area bound to the shared `ViewSelector`.
#[component]
pub fn PageView() -> impl IntoView {
    let selector = expect_context::<RwSignal<ViewSelector>>();
    let on_select = Callback::new(move |page: Page| select_page(selector, page));

    view! {
        <main class="content">
            {move || view! { <PageBody selection=selector.get() on_select=on_select/> }}
        </main>
    }
}

/// Static markup for the page `selection` points at. Call-to-action buttons
/// with a target page report it through `on_select`.
#[component]
pub fn PageBody(selection: ViewSelector, on_select: Callback<Page>) -> impl IntoView {
    let page = selection.current();
    let content = selection.render();

    view! {
        <section class=section_class(page)>
            <h2 class="section__heading">{content.heading}</h2>
            {content.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            {service_cards(content)}
            {content.email.map(|email| view! {
                <p class="section__detail">
                    <span class="section__label">"Email:"</span>
                    " "{email}" (example)"
                </p>
            })}
            {content.notes.iter().map(|n| view! { <p class="section__detail">{*n}</p> }).collect_view()}
            {actions(content.actions, on_select)}
        </section>
    }
}

fn service_cards(content: &'static PageContent) -> Option<impl IntoView> {
    if content.services.is_empty() {
        return None;
    }
    let cards = content
        .services
        .iter()
        .map(|service| {
            view! {
                <Card class="card--raised">
                    <CardContent>
                        <h3 class="card__title">{service.title}</h3>
                        <p class="card__text">{service.text}</p>
                    </CardContent>
                </Card>
            }
        })
        .collect_view();
    Some(view! { <div class="services-grid">{cards}</div> })
}

fn actions(actions: &'static [CallToAction], on_select: Callback<Page>) -> Option<impl IntoView> {
    if actions.is_empty() {
        return None;
    }
    let buttons = actions
        .iter()
        .map(|action| {
            let on_click = action.target.map(|target| Callback::new(move |()| on_select.run(target)));
            view! {
                <Button class=emphasis_class(action.emphasis) on_click=on_click>
                    {action.label}
                </Button>
            }
        })
        .collect_view();
    Some(view! { <div class="section__actions">{buttons}</div> })
}

pub(crate) fn section_class(page: Page) -> String {
    match page {
        Page::Home => "section section--hero fade-in".to_owned(),
        other => format!("section section--{}", other.key()),
    }
}
