//! Zone resolution.
//!
//! A zone is a named colorable region of the garment. Two zones always
//! exist (`body` and `trim`); the rest come from the active template's
//! layers. The resolved order is load-bearing: it is both the display
//! order and the traversal order the wizard's Colors step walks.

use serde::{Deserialize, Serialize};
use teamkit_core::Template;

/// The always-present main body zone.
pub const BODY_ZONE: &str = "body";

/// The always-present trim zone.
pub const TRIM_ZONE: &str = "trim";

/// One entry of the resolved zone list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub id: String,
    pub label: String,
}

impl ZoneEntry {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Resolves the ordered zone list for a template:
/// body, then the template's layers in authoring order, then trim.
///
/// Templates with zero layers are fine; the list is then just body and
/// trim. Duplicated layer ids collapse to their first occurrence so the
/// wizard traversal never visits a zone twice.
pub fn resolve_zones(template: &Template) -> Vec<ZoneEntry> {
    let mut zones = Vec::with_capacity(template.layers.len() + 2);
    zones.push(ZoneEntry::new(BODY_ZONE, "Main Body"));
    for layer in &template.layers {
        if zones.iter().any(|z: &ZoneEntry| z.id == layer.id) {
            continue;
        }
        zones.push(ZoneEntry::new(&layer.id, &layer.label));
    }
    zones.push(ZoneEntry::new(TRIM_ZONE, "Trim"));
    zones
}

/// Returns `active` when it is present in the resolved list, otherwise the
/// list's first entry. This is the local recovery for a selected zone that
/// the newly activated template no longer produces.
pub fn fallback_zone(zones: &[ZoneEntry], active: &str) -> String {
    if zones.iter().any(|z| z.id == active) {
        active.to_string()
    } else {
        // resolve_zones never returns an empty list.
        zones[0].id.clone()
    }
}

/// The id of the zone after `active` in traversal order, if any.
pub fn next_zone(zones: &[ZoneEntry], active: &str) -> Option<String> {
    let index = zones.iter().position(|z| z.id == active)?;
    zones.get(index + 1).map(|z| z.id.clone())
}

/// Whether `active` is the final entry of the traversal order.
pub fn is_last_zone(zones: &[ZoneEntry], active: &str) -> bool {
    zones.last().map(|z| z.id.as_str()) == Some(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamkit_core::{GarmentPaths, Template, TemplateLayer};

    fn template_with_layers(ids: &[(&str, &str)]) -> Template {
        Template {
            id: "tpl".to_string(),
            label: "Template".to_string(),
            layers: ids
                .iter()
                .map(|(id, label)| TemplateLayer {
                    id: id.to_string(),
                    label: label.to_string(),
                    paths: GarmentPaths::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn layers_are_bracketed_by_body_and_trim() {
        let template = template_with_layers(&[("chevron", "Chevron")]);
        let zones = resolve_zones(&template);
        let ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, ["body", "chevron", "trim"]);
        assert_eq!(zones[0].label, "Main Body");
        assert_eq!(zones[2].label, "Trim");
    }

    #[test]
    fn zero_layer_template_still_resolves() {
        let template = template_with_layers(&[]);
        let zones = resolve_zones(&template);
        let ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, ["body", "trim"]);
    }

    #[test]
    fn duplicate_layer_ids_collapse() {
        let template = template_with_layers(&[("sides", "Sides"), ("sides", "Sides Again")]);
        let zones = resolve_zones(&template);
        let ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, ["body", "sides", "trim"]);
    }

    #[test]
    fn missing_active_zone_falls_back_to_first() {
        let zones = resolve_zones(&template_with_layers(&[]));
        assert_eq!(fallback_zone(&zones, "chevron"), "body");
        assert_eq!(fallback_zone(&zones, "trim"), "trim");
    }

    #[test]
    fn traversal_order_walks_to_trim() {
        let zones = resolve_zones(&template_with_layers(&[("sides", "Sides")]));
        assert_eq!(next_zone(&zones, "body").as_deref(), Some("sides"));
        assert_eq!(next_zone(&zones, "sides").as_deref(), Some("trim"));
        assert_eq!(next_zone(&zones, "trim"), None);
        assert!(is_last_zone(&zones, "trim"));
        assert!(!is_last_zone(&zones, "body"));
    }
}
