//! Rounded call-to-action button.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use super::join_class;
use crate::content::Emphasis;

const BASE_CLASS: &str = "btn";

/// Button with the base class plus any extra classes.
#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |_| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    view! {
        <button class=button_class(&class) on:click=on_click>
            {children()}
        </button>
    }
}

pub(crate) fn button_class(extra: &str) -> String {
    join_class(BASE_CLASS, extra)
}

pub(crate) fn emphasis_class(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Primary => "btn--primary",
        Emphasis::Secondary => "btn--secondary",
    }
}
