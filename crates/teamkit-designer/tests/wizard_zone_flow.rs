//! Wizard stepping through zones on the Colors step, shorts truncation,
//! and the active-zone fallback when templates change.

mod common;

use teamkit_core::GarmentType;
use teamkit_designer::{ColorTarget, DesignSession, WizardStep};

fn session() -> DesignSession {
    DesignSession::new(common::catalog(), "basketball", "standard").unwrap()
}

fn advance_to_colors(session: &mut DesignSession) {
    session.next_step();
    session.next_step();
    assert_eq!(session.wizard().step(), WizardStep::Colors);
}

#[test]
fn colors_step_exhausts_zones_before_advancing() {
    let mut session = session();
    session.set_template("blank").unwrap(); // zones: body, trim
    advance_to_colors(&mut session);
    assert_eq!(session.active_zone(), "body");

    assert_eq!(session.next_step(), WizardStep::Colors);
    assert_eq!(session.active_zone(), "trim");

    assert_eq!(session.next_step(), WizardStep::Identity);
}

#[test]
fn shorts_terminate_on_colors() {
    let mut session = session();
    session.set_template("blank").unwrap();
    session.set_garment(GarmentType::Shorts);
    advance_to_colors(&mut session);

    assert_eq!(session.next_step(), WizardStep::Colors); // body -> trim
    // Step 4 is unreachable for shorts.
    assert_eq!(session.next_step(), WizardStep::Colors);
    assert_eq!(session.next_step(), WizardStep::Colors);
}

#[test]
fn full_template_walk_visits_every_zone() {
    let mut session = session(); // classic: body, sides, shoulders, trim
    advance_to_colors(&mut session);

    let mut visited = vec![session.active_zone().to_string()];
    while session.next_step() == WizardStep::Colors {
        visited.push(session.active_zone().to_string());
    }
    assert_eq!(visited, ["body", "sides", "shoulders", "trim"]);
    assert_eq!(session.wizard().step(), WizardStep::Identity);
}

#[test]
fn template_change_falls_back_when_active_zone_vanishes() {
    let mut session = session();
    advance_to_colors(&mut session);
    session.next_step(); // body -> sides
    assert_eq!(session.active_zone(), "sides");

    // The chevron template has no "sides" zone.
    session.set_template("chevron").unwrap();
    assert_eq!(session.active_zone(), "body");
}

#[test]
fn stale_zone_style_entries_are_tolerated() {
    let mut session = session();
    advance_to_colors(&mut session);
    session.next_step(); // -> sides
    session.apply_color("#1b3a6b", ColorTarget::Base).unwrap();

    session.set_template("blank").unwrap();
    // The sides entry stays in the map even though no zone produces it.
    assert!(session.state().zones.contains_key("sides"));
    // And coming back to a template with that zone revives the styling.
    session.set_template("classic").unwrap();
    assert_eq!(session.state().zones["sides"].color, "#1b3a6b");
}

#[test]
fn back_never_underflows() {
    let mut session = session();
    assert_eq!(session.back_step(), WizardStep::Setup);
    session.next_step();
    assert_eq!(session.back_step(), WizardStep::Setup);
}
