//! The one-page site: navigation bar over the selected content panel.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::page_view::PageView;

#[component]
pub fn SitePage() -> impl IntoView {
    view! {
        <div class="site">
            <NavBar/>
            <PageView/>
        </div>
    }
}
