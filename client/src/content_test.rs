use super::*;

// =============================================================
// content_for
// =============================================================

#[test]
fn every_page_has_a_distinct_heading() {
    let headings: Vec<_> = Page::ALL.iter().map(|p| content_for(*p).heading).collect();
    for (i, a) in headings.iter().enumerate() {
        for (j, b) in headings.iter().enumerate() {
            if i != j {
                assert_ne!(a, b, "{:?} and {:?} share a heading", Page::ALL[i], Page::ALL[j]);
            }
        }
    }
}

#[test]
fn home_heading_and_calls_to_action() {
    let home = content_for(Page::Home);
    assert_eq!(home.heading, "Precision Training. Evidence-Based Performance.");
    let targets: Vec<_> = home.actions.iter().map(|a| (a.label, a.target)).collect();
    assert_eq!(
        targets,
        vec![
            ("Book Your Assessment", Some(Page::Contact)),
            ("View Services", Some(Page::Services)),
        ]
    );
    assert_eq!(home.actions[0].emphasis, Emphasis::Primary);
    assert_eq!(home.actions[1].emphasis, Emphasis::Secondary);
}

#[test]
fn services_lists_exactly_four_offers_in_order() {
    let titles: Vec<_> = content_for(Page::Services).services.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec![
            "Athlete Performance Programming",
            "General Population Strength Coaching",
            "Online Coaching & Program Design",
            "Nutritional Guidance",
        ]
    );
}

#[test]
fn only_services_has_cards() {
    for page in Page::ALL {
        let has_cards = !content_for(page).services.is_empty();
        assert_eq!(has_cards, page == Page::Services, "{page}");
    }
}

#[test]
fn contact_has_email_and_untargeted_assessment_button() {
    let contact = content_for(Page::Contact);
    assert_eq!(contact.email, Some(CONTACT_EMAIL));
    assert_eq!(contact.actions.len(), 1);
    assert_eq!(contact.actions[0].label, "Request an Assessment");
    assert_eq!(contact.actions[0].target, None);
}

#[test]
fn about_has_two_paragraphs() {
    let about = content_for(Page::About);
    assert_eq!(about.heading, "About PSL");
    assert_eq!(about.paragraphs.len(), 2);
    assert!(about.paragraphs[0].starts_with("Precision Strength Lab applies"));
}

#[test]
fn testimonials_and_blog_are_placeholders() {
    assert_eq!(content_for(Page::Testimonials).paragraphs.len(), 2);
    assert!(content_for(Page::Blog).contains_text("Future space for articles"));
}

#[test]
fn multiline_copy_has_single_spaces() {
    for page in Page::ALL {
        for text in content_for(page).text() {
            assert!(!text.contains("  "), "double space in {page}: {text}");
            assert!(!text.contains('\n'), "newline in {page}: {text}");
        }
    }
}

// =============================================================
// PageContent::text
// =============================================================

#[test]
fn text_starts_with_heading() {
    for page in Page::ALL {
        let content = content_for(page);
        assert_eq!(content.text()[0], content.heading);
    }
}

#[test]
fn text_includes_service_titles_and_action_labels() {
    let services = content_for(Page::Services);
    assert!(services.contains_text("Nutritional Guidance"));
    assert!(content_for(Page::Home).contains_text("View Services"));
    assert!(content_for(Page::Contact).contains_text(CONTACT_EMAIL));
}

#[test]
fn booking_url_is_https() {
    assert!(BOOKING_URL.starts_with("https://"));
}
