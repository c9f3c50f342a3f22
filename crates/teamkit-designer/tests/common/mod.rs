//! Shared catalog fixture for the designer integration tests.

use std::collections::HashMap;
use teamkit_core::{
    Cut, GarmentPaths, SidePaths, SportCatalog, SportDefinition, Template, TemplateLayer,
};

fn paths(front: &str, back: &str) -> GarmentPaths {
    GarmentPaths {
        jersey: SidePaths {
            front: Some(front.to_string()),
            back: Some(back.to_string()),
        },
        shorts: SidePaths {
            front: Some(format!("{front}-shorts")),
            // Shorts back deliberately unauthored to exercise the
            // missing-path tolerance.
            back: None,
        },
    }
}

fn layer(id: &str, label: &str) -> TemplateLayer {
    TemplateLayer {
        id: id.to_string(),
        label: label.to_string(),
        paths: paths(&format!("path-{id}-front"), &format!("path-{id}-back")),
    }
}

/// A catalog with one sport, one cut, and three templates:
/// `classic` (sides + shoulders), `chevron` (one layer), `blank` (none).
pub fn catalog() -> SportCatalog {
    let mut cuts = HashMap::new();
    cuts.insert(
        "standard".to_string(),
        Cut {
            slug: "standard".to_string(),
            label: "Standard".to_string(),
            shape: paths("cut-front", "cut-back"),
            trim: paths("trim-front", "trim-back"),
        },
    );

    let templates = vec![
        Template {
            id: "classic".to_string(),
            label: "Classic".to_string(),
            layers: vec![layer("sides", "Side Panels"), layer("shoulders", "Shoulders")],
        },
        Template {
            id: "chevron".to_string(),
            label: "Chevron".to_string(),
            layers: vec![layer("chevron", "Chevron")],
        },
        Template {
            id: "blank".to_string(),
            label: "Blank".to_string(),
            layers: Vec::new(),
        },
    ];

    let mut catalog = SportCatalog::new();
    catalog.insert(SportDefinition {
        id: "basketball".to_string(),
        label: "Basketball".to_string(),
        cuts,
        templates,
    });
    catalog
}
