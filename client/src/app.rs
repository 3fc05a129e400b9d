//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::BRAND_NAME;
use crate::pages::site::SitePage;
use crate::state::page::ViewSelector;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the view selector context and mounts the single site route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let selector = RwSignal::new(ViewSelector::default());
    provide_context(selector);

    view! {
        <Stylesheet id="leptos" href="/pkg/psl-site.css"/>
        <Title text=BRAND_NAME/>
        <Meta
            name="description"
            content="Evidence-based strength coaching for athletes and general-population clients."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SitePage/>
            </Routes>
        </Router>
    }
}
