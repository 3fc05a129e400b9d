use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn nav_entry_class_marks_only_active_entry() {
    let selector = ViewSelector::default();
    for page in Page::ALL {
        let class = nav_entry_class(selector.is_active(page));
        assert_eq!(class.contains("--active"), page == Page::Home, "{page}");
    }
}

#[test]
fn nav_entry_class_always_has_base_class() {
    assert!(nav_entry_class(true).starts_with("nav__entry "));
    assert_eq!(nav_entry_class(false), "nav__entry");
}

#[test]
fn select_page_updates_signal() {
    Owner::new().with(|| {
        let selector = RwSignal::new(ViewSelector::default());
        select_page(selector, Page::Testimonials);
        assert_eq!(selector.get_untracked().current(), Page::Testimonials);
        select_page(selector, Page::Home);
        assert_eq!(selector.get_untracked().current(), Page::Home);
    });
}

#[cfg(feature = "ssr")]
mod html {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render(current: Page) -> String {
        Owner::new().with(|| {
            let mut state = ViewSelector::default();
            state.select(current);
            provide_context(RwSignal::new(state));
            view! { <NavBar/> }.to_html()
        })
    }

    #[test]
    fn brand_block_is_rendered() {
        let html = render(Page::Home);
        assert!(html.contains(">PSL</span>"));
        assert!(html.contains(">Precision Strength Lab</span>"));
    }

    #[test]
    fn one_entry_per_page_with_exactly_one_active() {
        for current in Page::ALL {
            let html = render(current);
            assert_eq!(html.matches("class=\"nav__entry").count(), Page::ALL.len());
            assert_eq!(html.matches("nav__entry--active").count(), 1);
            let start = html.find("nav__entry--active").unwrap();
            let end = start + html[start..].find("</button>").unwrap();
            assert!(html[start..end].contains(current.label()), "{current} not marked active in {html}");
        }
    }

    #[test]
    fn book_now_opens_scheduler_in_new_context() {
        let html = render(Page::Contact);
        assert!(html.contains(&format!("href=\"{BOOKING_URL}\"")), "missing booking link in {html}");
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noreferrer\""));
        assert!(html.contains("Book Now"));
    }
}
