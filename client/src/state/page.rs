//! Page identifiers and the view selector that tracks the current one.
//!
//! DESIGN
//! ======
//! `Page` is a closed set, so selection never fails and rendering is an
//! exhaustive lookup in `content`. String keys only appear at the `FromStr`
//! edge, the one place an unknown value can show up.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use crate::content::{PageContent, content_for};

/// Identifies one of the site's content panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Testimonials,
    Contact,
    Blog,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Testimonials,
        Page::Contact,
        Page::Blog,
    ];

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Testimonials => "testimonials",
            Page::Contact => "contact",
            Page::Blog => "blog",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Testimonials => "Testimonials",
            Page::Contact => "Contact",
            Page::Blog => "Blog",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string key names no page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}

/// Holds the currently displayed page.
///
/// Starts on [`Page::Home`]. Any page may follow any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewSelector {
    current: Page,
}

impl ViewSelector {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    /// Content block for the current page.
    pub fn render(&self) -> &'static PageContent {
        content_for(self.current)
    }
}
