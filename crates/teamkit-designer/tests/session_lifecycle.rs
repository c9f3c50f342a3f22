//! Session construction, the commit boundary, the post-commit reset, and
//! re-editing a committed snapshot.

mod common;

use teamkit_core::{ids, CatalogError, DesignError, ViewSide};
use teamkit_designer::{ColorTarget, DesignSession, TextField, WizardStep};

fn session() -> DesignSession {
    DesignSession::new(common::catalog(), "basketball", "standard").unwrap()
}

#[test]
fn construction_validates_sport_and_cut() {
    assert!(matches!(
        DesignSession::new(common::catalog(), "hockey", "standard"),
        Err(DesignError::Catalog(CatalogError::UnknownSport { .. }))
    ));
    assert!(matches!(
        DesignSession::new(common::catalog(), "basketball", "raglan"),
        Err(DesignError::Catalog(CatalogError::UnknownCut { .. }))
    ));
}

#[test]
fn new_session_starts_on_the_first_template() {
    let session = session();
    assert_eq!(session.state().template, "classic");
    assert_eq!(session.wizard().step(), WizardStep::Setup);
}

#[test]
fn commit_snapshots_and_reset_keeps_sport_and_cut() {
    let mut session = session();
    session.apply_color("#1b3a6b", ColorTarget::Base).unwrap();
    session.update_text(ids::FRONT_NAME, TextField::Text("HAWKS".to_string()));
    session.add_logo("blob:sponsor", ViewSide::Front);

    let item = session.commit_new(14, 3499);
    assert_eq!(item.quantity, 14);
    assert_eq!(item.design.zones["body"].color, "#1b3a6b");

    session.reset_after_commit().unwrap();
    assert_eq!(session.state().sport, "basketball");
    assert_eq!(session.state().cut, "standard");
    assert_eq!(session.state().zones["body"].color, "#ffffff");
    assert!(session.state().logos.is_empty());
    assert_eq!(session.wizard().step(), WizardStep::Setup);

    // The committed snapshot is untouched by the reset.
    assert_eq!(item.design.zones["body"].color, "#1b3a6b");
    assert_eq!(
        item.design.text_element(ids::FRONT_NAME).unwrap().text,
        "HAWKS"
    );
}

#[test]
fn commit_update_reuses_the_item_id() {
    let mut session = session();
    let original = session.commit_new(1, 2999);

    session.update_text(ids::FRONT_NAME, TextField::Text("REVISED".to_string()));
    let updated = session.commit_update(&original.id, 2, 2999);
    assert_eq!(updated.id, original.id);
    assert_eq!(
        updated.design.text_element(ids::FRONT_NAME).unwrap().text,
        "REVISED"
    );
}

#[test]
fn snapshot_round_trips_into_a_new_session() {
    let mut session = session();
    session.set_template("chevron").unwrap();
    session.apply_color("#0a7d4f", ColorTarget::Base).unwrap();
    let item = session.commit_new(1, 2999);

    let reloaded = DesignSession::from_snapshot(common::catalog(), item.design.clone()).unwrap();
    assert_eq!(reloaded.state(), &item.design);
    assert_eq!(reloaded.state().template, "chevron");
}

#[test]
fn snapshot_with_retired_template_falls_back() {
    let session = session();
    let mut design = session.commit_new(1, 2999).design;
    design.template = "retired".to_string();

    let reloaded = DesignSession::from_snapshot(common::catalog(), design).unwrap();
    assert_eq!(reloaded.state().template, "classic");
}

#[test]
fn serialized_snapshot_is_plain_nested_data() {
    let session = session();
    let json = serde_json::to_value(session.state()).unwrap();
    assert_eq!(json["garment"], "jersey");
    assert_eq!(json["zones"]["body"]["pattern"], "none");
    assert_eq!(json["zones"]["body"]["pattern_mode"], "ghost");
    let text = json["text_elements"].as_array().unwrap();
    assert_eq!(text.len(), 4);
    assert_eq!(text[0]["view"], "front");
}
