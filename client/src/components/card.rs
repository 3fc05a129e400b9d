//! Bordered card container and its padded body.

use leptos::prelude::*;

use super::join_class;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_class("card", &class)>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_class("card__content", &class)>{children()}</div> }
}
