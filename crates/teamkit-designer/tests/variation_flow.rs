//! Variation proposals: palette sourcing, application, reshuffle, and
//! the stale-template fallback.

mod common;

use teamkit_designer::{ColorTarget, DesignSession, Variation};

fn session() -> DesignSession {
    DesignSession::new(common::catalog(), "basketball", "standard").unwrap()
}

#[test]
fn proposals_draw_from_recent_colors() {
    let mut session = session();
    // Leave only two known colors in the palette.
    for color in ["#ffffff", "#16161a", "#d7263d"] {
        session.remove_recent_color(color);
    }
    session.apply_color("#111111", ColorTarget::Base).unwrap();
    session.apply_color("#222222", ColorTarget::Base).unwrap();

    for variation in session.variation_round() {
        for color in variation.zones.values() {
            assert!(color == "#111111" || color == "#222222");
        }
        assert!(variation.template.is_some());
    }
}

#[test]
fn proposals_do_not_touch_the_live_design() {
    let session = session();
    let before = session.state().clone();
    let _ = session.variation_round();
    assert_eq!(session.state(), &before);
}

#[test]
fn applying_a_proposal_merges_template_and_colors() {
    let mut session = session();
    let variation = Variation {
        template: Some("chevron".to_string()),
        zones: [
            ("body".to_string(), "#1b3a6b".to_string()),
            ("sides".to_string(), "#d7263d".to_string()),
        ]
        .into_iter()
        .collect(),
    };
    session.apply_variation(&variation);

    assert_eq!(session.state().template, "chevron");
    assert_eq!(session.state().zones["body"].color, "#1b3a6b");
    // The sides zone is not produced by chevron, but the recolor is kept
    // as a tolerated stale entry.
    assert_eq!(session.state().zones["sides"].color, "#d7263d");
}

#[test]
fn stale_template_keeps_current_but_applies_colors() {
    let mut session = session();
    let variation = Variation {
        template: Some("retired-template".to_string()),
        zones: [("trim".to_string(), "#f2b705".to_string())].into_iter().collect(),
    };
    session.apply_variation(&variation);

    assert_eq!(session.state().template, "classic");
    assert_eq!(session.state().zones["trim"].color, "#f2b705");
}

#[test]
fn reshuffle_forces_a_fresh_round() {
    let mut session = session();
    let first = session.variation_round();
    assert_eq!(first, session.variation_round());
    session.reshuffle_variations();
    assert_ne!(first, session.variation_round());
}
