//! Page interactions driven through the public API with a simulated clock.

use teahub_core::nav::NAV_LINKS;
use teahub_core::prelude::*;

const SITE_TOML: &str = r#"
[brand]
name = "TeaHub"

[timing]
carousel_interval_ms = 5000
carousel_resume_ms = 10000

[scroll]
navbar_threshold = 50.0
contact_threshold = 400.0
"#;

fn site() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_TOML).expect("site config parses")
}

#[test]
fn test_partial_config_keeps_page_timings() {
    let config = site();
    assert_eq!(config.brand.name, "TeaHub");
    assert_eq!(config.timing.carousel_interval_ms, 5000);
    assert_eq!(config.timing.carousel_resume_ms, 10000);
    assert_eq!(config.scroll.navbar_threshold, 50.0);
    assert_eq!(config.scroll.contact_threshold, 400.0);
    // Sections left out fall back to the defaults.
    assert_eq!(config.visibility, SiteConfig::default().visibility);
    assert_eq!(config.contact, SiteConfig::default().contact);
}

#[test]
fn test_carousel_session() {
    let config = site();
    let interval = u64::from(config.timing.carousel_interval_ms);
    let mut carousel = Carousel::new(5, config.timing.carousel_resume_ms);
    let mut now = 0u64;

    // Let it rotate once fully.
    for _ in 0..5 {
        now += interval;
        assert!(carousel.tick());
    }
    assert_eq!(carousel.index(), 0);

    // User goes back, then jumps via a dot shortly after.
    carousel.previous(now);
    assert_eq!(carousel.index(), 4);
    now += 3000;
    carousel.go_to(2, now);
    let deadline = now + 10_000;
    assert_eq!(carousel.resume_at(), Some(deadline));

    // Ticks are ignored until the later deadline.
    now += interval;
    assert!(!carousel.tick());
    assert!(!carousel.resume_if_due(deadline - 1));
    assert!(carousel.resume_if_due(deadline));
    assert!(carousel.tick());
    assert_eq!(carousel.index(), 3);
}

#[test]
fn test_scrolling_down_the_page() {
    let config = site();
    let navbar = ScrollThreshold(config.scroll.navbar_threshold);
    let mut prompt = ContactPrompt::new(config.scroll.contact_threshold);
    let (document, viewport) = (3000.0, 1000.0);

    let mut last = -1.0;
    let mut actions = Vec::new();
    for y in (0..=2000).step_by(100) {
        let y = f64::from(y);
        let progress = scroll_progress(y, document, viewport);
        assert!(progress >= last);
        last = progress;
        actions.push(prompt.on_scroll(y));
        assert_eq!(navbar.is_past(y), y > 50.0);
    }

    assert_eq!(last, 100.0);
    let scheduled = actions
        .iter()
        .filter(|a| **a == PromptAction::ScheduleTooltip)
        .count();
    assert_eq!(scheduled, 1);
    assert!(prompt.is_button_visible());
}

#[test]
fn test_sections_reveal_once() {
    let mut about = VisibilityLatch::new();
    let observations = [false, false, true, false, true];
    let latched: Vec<bool> = observations.iter().map(|&seen| about.observe(seen)).collect();
    assert_eq!(latched, [false, false, true, false, false]);
    assert!(about.is_visible());
}

#[test]
fn test_newsletter_and_menu() {
    let config = site();
    let mut form = NewsletterForm::new();
    form.set_email("");
    assert_eq!(form.submit(), SubmitOutcome::Ignored);

    form.set_email("chai@example.com");
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    let toast = form.complete(&config.brand.name);
    assert_eq!(toast.title, "Welcome to TeaHub!");

    let mut menu = MobileMenu::default();
    menu.toggle();
    let contact = NAV_LINKS.iter().find(|l| l.name == "Contact").unwrap();
    assert_eq!(contact.anchor_id(), Some("contact"));
    menu.close();
    assert!(!menu.is_open());
}
