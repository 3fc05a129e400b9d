//! Static copy for every content panel.
//!
//! Each `Page` maps to exactly one `PageContent`. The mapping is an
//! exhaustive `match`, so adding a page without copy fails to compile.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::page::Page;

pub const BRAND_SHORT: &str = "PSL";
pub const BRAND_NAME: &str = "Precision Strength Lab";

/// Third-party scheduling page behind the "Book Now" button.
pub const BOOKING_URL: &str = "https://calendly.com/precisionstrengthlab/assessment";
pub const CONTACT_EMAIL: &str = "lucy@precisionstrengthlab.com";

/// One panel of copy.
#[derive(Debug, PartialEq, Eq)]
pub struct PageContent {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub services: &'static [Service],
    pub email: Option<&'static str>,
    pub notes: &'static [&'static str],
    pub actions: &'static [CallToAction],
}

/// A coaching offer rendered as a card.
#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub text: &'static str,
}

/// An in-page button. `target` is the page it selects, if any.
#[derive(Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Option<Page>,
    pub emphasis: Emphasis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Secondary,
}

impl PageContent {
    /// All visible text in render order.
    pub fn text(&self) -> Vec<&'static str> {
        let mut out = vec![self.heading];
        out.extend_from_slice(self.paragraphs);
        for service in self.services {
            out.push(service.title);
            out.push(service.text);
        }
        if let Some(email) = self.email {
            out.push(email);
        }
        out.extend_from_slice(self.notes);
        out.extend(self.actions.iter().map(|a| a.label));
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text().iter().any(|t| t.contains(needle))
    }
}

/// Content block for `page`.
pub fn content_for(page: Page) -> &'static PageContent {
    match page {
        Page::Home => &HOME,
        Page::About => &ABOUT,
        Page::Services => &SERVICES,
        Page::Testimonials => &TESTIMONIALS,
        Page::Contact => &CONTACT,
        Page::Blog => &BLOG,
    }
}

static HOME: PageContent = PageContent {
    heading: "Precision Training. Evidence-Based Performance.",
    paragraphs: &["Scientific, data-backed strength programming for athletes and \
        general-pop clients who want measurable progress in strength, \
        performance, and confidence."],
    services: &[],
    email: None,
    notes: &[],
    actions: &[
        CallToAction {
            label: "Book Your Assessment",
            target: Some(Page::Contact),
            emphasis: Emphasis::Primary,
        },
        CallToAction {
            label: "View Services",
            target: Some(Page::Services),
            emphasis: Emphasis::Secondary,
        },
    ],
};

static ABOUT: PageContent = PageContent {
    heading: "About PSL",
    paragraphs: &[
        "Precision Strength Lab applies CSCS-level methodology, biomechanics, and \
         data-driven programming to create individualized training solutions. \
         Every program is built around structured progressions, evidence-based \
         exercise selection, and performance tracking to ensure consistent, \
         measurable improvement.",
        "Lucy works with competitive athletes and motivated general-population \
         clients, focusing on strength, power, movement quality, and long-term \
         health. The goal is simple: train with purpose, track the data, and \
         build the strongest version of you.",
    ],
    services: &[],
    email: None,
    notes: &[],
    actions: &[],
};

static SERVICES: PageContent = PageContent {
    heading: "Coaching Services",
    paragraphs: &[],
    services: &[
        Service {
            title: "Athlete Performance Programming",
            text: "Data-driven, periodized training focused on strength, power, speed, and durability for sport.",
        },
        Service {
            title: "General Population Strength Coaching",
            text: "Science-based training to improve strength, posture, mobility, and long-term health.",
        },
        Service {
            title: "Online Coaching & Program Design",
            text: "Remote training with progress tracking, technique feedback, and structured planning.",
        },
        Service {
            title: "Nutritional Guidance",
            text: "Evidence-based nutrition strategies to support training, recovery, and body composition goals.",
        },
    ],
    email: None,
    notes: &[],
    actions: &[],
};

static TESTIMONIALS: PageContent = PageContent {
    heading: "Testimonials",
    paragraphs: &[
        "\u{201c}Client testimonials will go here. Example: \u{2018}I\u{2019}ve never felt this strong \
         or confident in the gym. Lucy\u{2019}s programming is clear, structured, and \
         actually explains the why behind every block.\u{2019}\u{201d}",
        "\u{201c}Another example: \u{2018}As a field sport athlete, PSL helped me build \
         strength and power without feeling beat up all the time.\u{2019}\u{201d}",
    ],
    services: &[],
    email: None,
    notes: &[],
    actions: &[],
};

static CONTACT: PageContent = PageContent {
    heading: "Contact",
    paragraphs: &["Ready to get started or have questions about coaching? Reach out below \
        or request an initial assessment."],
    services: &[],
    email: Some(CONTACT_EMAIL),
    notes: &["You can also add a scheduling link here (Calendly, Google Calendar, etc.)."],
    actions: &[CallToAction {
        label: "Request an Assessment",
        target: None,
        emphasis: Emphasis::Primary,
    }],
};

static BLOG: PageContent = PageContent {
    heading: "Blog",
    paragraphs: &["Future space for articles on strength training, programming, nutrition, \
        and performance."],
    services: &[],
    email: None,
    notes: &[],
    actions: &[],
};
