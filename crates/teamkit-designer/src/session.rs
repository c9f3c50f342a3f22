//! Design session manager for UI integration.
//!
//! [`DesignSession`] owns the live design state together with everything
//! that orbits it - the group index, the recent-colors list, the undo
//! slot, the wizard, the variation generator, and the current canvas
//! selection - and routes every edit so linked and derived data stay
//! consistent. The UI talks to this type; the modules underneath stay
//! free of UI concerns.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use teamkit_core::{
    color, ids, CatalogError, GarmentType, Point, Result, SportCatalog, Template, ViewSide,
};

use crate::cart::CartItem;
use crate::compose::{self, DrawOp};
use crate::logos;
use crate::model::{DesignState, LogoPlacement, TextElement, TextField, ZoneStyle, ZoneStylePatch};
use crate::palette::RecentColors;
use crate::text_groups::{default_group_table, GroupIndex, GroupTable};
use crate::undo::UndoSlot;
use crate::variations::{Variation, VariationGenerator, DEFAULT_COUNT};
use crate::wizard::{WizardNavigator, WizardStep};
use crate::zones::{self, ZoneEntry};

/// Which zone-style color an applied color targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    Base,
    Pattern,
}

/// What a canvas click landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SelectionTarget {
    Zone { id: String },
    Text { id: String },
    Logo { id: String },
}

/// The session facade owning the live design and its derived state.
#[derive(Debug, Clone)]
pub struct DesignSession {
    catalog: SportCatalog,
    state: DesignState,
    groups: GroupIndex,
    palette: RecentColors,
    undo: UndoSlot,
    wizard: WizardNavigator,
    variations: VariationGenerator,
    selected: Option<SelectionTarget>,
}

impl DesignSession {
    /// Starts a fresh session on a sport and cut, with the sport's first
    /// template and the default design.
    pub fn new(catalog: SportCatalog, sport: &str, cut: &str) -> Result<Self> {
        let definition = catalog.sport(sport)?;
        if definition.cut(cut).is_none() {
            return Err(CatalogError::UnknownCut {
                sport: sport.to_string(),
                slug: cut.to_string(),
            }
            .into());
        }
        let template = definition.first_template()?.id.clone();
        let state = DesignState::with_defaults(sport, cut, &template);
        Ok(Self {
            catalog,
            state,
            groups: GroupIndex::build(default_group_table()),
            palette: RecentColors::default(),
            undo: UndoSlot::new(),
            wizard: WizardNavigator::new(),
            variations: VariationGenerator::default(),
            selected: None,
        })
    }

    /// Starts a session from a previously committed snapshot (re-editing a
    /// cart item). The sport must still exist; a template the sport no
    /// longer carries falls back to the sport's first template.
    pub fn from_snapshot(catalog: SportCatalog, mut state: DesignState) -> Result<Self> {
        let definition = catalog.sport(&state.sport)?;
        if definition.template(&state.template).is_none() {
            let fallback = definition.first_template()?.id.clone();
            tracing::warn!(
                template = %state.template,
                fallback = %fallback,
                "Snapshot template missing from catalog; falling back"
            );
            state.template = fallback;
        }
        let mut session = Self {
            catalog,
            state,
            groups: GroupIndex::build(default_group_table()),
            palette: RecentColors::default(),
            undo: UndoSlot::new(),
            wizard: WizardNavigator::new(),
            variations: VariationGenerator::default(),
            selected: None,
        };
        let list = session.zone_list();
        session.wizard.revalidate_zone(&list);
        Ok(session)
    }

    /// The live design state.
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    pub fn wizard(&self) -> &WizardNavigator {
        &self.wizard
    }

    pub fn selection(&self) -> Option<&SelectionTarget> {
        self.selected.as_ref()
    }

    /// The active template, falling back to the sport's first template
    /// when the selected id has gone stale.
    fn active_template(&self) -> Option<&Template> {
        let sport = self.catalog.get(&self.state.sport)?;
        sport
            .template(&self.state.template)
            .or_else(|| sport.templates.first())
    }

    /// The ordered zone list for the active template. Never empty: even
    /// without a resolvable template the body and trim zones exist.
    pub fn zone_list(&self) -> Vec<ZoneEntry> {
        match self.active_template() {
            Some(template) => zones::resolve_zones(template),
            None => vec![
                ZoneEntry::new(zones::BODY_ZONE, "Main Body"),
                ZoneEntry::new(zones::TRIM_ZONE, "Trim"),
            ],
        }
    }

    /// The zone currently being edited on the Colors step.
    pub fn active_zone(&self) -> &str {
        self.wizard.active_zone()
    }

    // ---- setup -----------------------------------------------------------

    /// Switches the active template. The active zone is re-validated
    /// against the new template's zone list.
    pub fn set_template(&mut self, template_id: &str) -> Result<()> {
        let definition = self.catalog.sport(&self.state.sport)?;
        if definition.template(template_id).is_none() {
            return Err(CatalogError::UnknownTemplate {
                sport: self.state.sport.clone(),
                id: template_id.to_string(),
            }
            .into());
        }
        self.state.template = template_id.to_string();
        let list = self.zone_list();
        self.wizard.revalidate_zone(&list);
        Ok(())
    }

    /// Switches garment type. Shorts cannot reach the Identity step, so
    /// the wizard is clamped when needed.
    pub fn set_garment(&mut self, garment: GarmentType) {
        self.state.garment = garment;
        self.wizard.clamp_step(garment);
    }

    /// Switches the body cut within the current sport.
    pub fn set_cut(&mut self, slug: &str) -> Result<()> {
        let definition = self.catalog.sport(&self.state.sport)?;
        if definition.cut(slug).is_none() {
            return Err(CatalogError::UnknownCut {
                sport: self.state.sport.clone(),
                slug: slug.to_string(),
            }
            .into());
        }
        self.state.cut = slug.to_string();
        Ok(())
    }

    /// Switches sport. A template the new sport does not carry falls back
    /// to its first template; the cut slug is kept as-is (composition
    /// tolerates a missing cut, and the UI prompts for one).
    pub fn set_sport(&mut self, sport_id: &str) -> Result<()> {
        let definition = self.catalog.sport(sport_id)?;
        if definition.template(&self.state.template).is_none() {
            self.state.template = definition.first_template()?.id.clone();
        }
        if definition.cut(&self.state.cut).is_none() {
            tracing::debug!(cut = %self.state.cut, sport = %sport_id, "Cut not offered by new sport");
        }
        self.state.sport = sport_id.to_string();
        let list = self.zone_list();
        self.wizard.revalidate_zone(&list);
        Ok(())
    }

    // ---- zones & colors --------------------------------------------------

    /// Merges a style patch into a zone, starting from the neutral default
    /// when the zone has no entry yet.
    pub fn update_zone(&mut self, zone_id: &str, patch: &ZoneStylePatch) {
        let style = self
            .state
            .zones
            .entry(zone_id.to_string())
            .or_insert_with(ZoneStyle::default);
        patch.apply_to(style);
    }

    /// Applies a color to the active zone and records it in the
    /// recent-colors list.
    pub fn apply_color(&mut self, hex: &str, target: ColorTarget) -> Result<()> {
        let normalized = color::normalize(hex)?;
        self.palette.record(&normalized);
        let patch = match target {
            ColorTarget::Base => ZoneStylePatch::color(normalized),
            ColorTarget::Pattern => ZoneStylePatch::pattern_color(normalized),
        };
        let zone = self.wizard.active_zone().to_string();
        self.update_zone(&zone, &patch);
        Ok(())
    }

    /// The recent colors, most recent first.
    pub fn recent_colors(&self) -> &[String] {
        self.palette.colors()
    }

    /// Manually adds a swatch to the recent colors.
    pub fn add_recent_color(&mut self, hex: &str) -> Result<()> {
        let normalized = color::normalize(hex)?;
        self.palette.add(&normalized);
        Ok(())
    }

    /// Manually removes a swatch from the recent colors.
    pub fn remove_recent_color(&mut self, hex: &str) {
        self.palette.remove(hex);
    }

    // ---- text ------------------------------------------------------------

    /// Installs a new group table and rebuilds the membership index.
    pub fn set_group_table(&mut self, table: GroupTable) {
        self.groups = GroupIndex::build(table);
    }

    /// Edits one field of a text element. Typographic fields propagate to
    /// every member of the element's linked group; everything else stays
    /// on the targeted element. Editing an id that no longer exists is a
    /// no-op.
    pub fn update_text(&mut self, id: &str, field: TextField) {
        if self.state.text_element(id).is_none() {
            tracing::debug!(id, "Text edit on vanished element ignored");
            return;
        }
        if field.is_group_shared() {
            for target in self.groups.propagation_targets(id) {
                if let Some(element) = self.state.text_element_mut(&target) {
                    field.apply_to(element);
                }
            }
        } else if let Some(element) = self.state.text_element_mut(id) {
            field.apply_to(element);
        }
    }

    /// Appends a free-form text element on the given view and returns its
    /// generated id.
    pub fn add_text_element(&mut self, text: &str, view: ViewSide) -> String {
        let id = ids::new_text_id();
        self.state.text_elements.push(TextElement {
            id: id.clone(),
            text: text.to_string(),
            font: "Industry".to_string(),
            color: color::INK.to_string(),
            outline: color::WHITE.to_string(),
            outline_width: 0.0,
            position: Point::new(200.0, 250.0),
            size: 30.0,
            rotation: 0.0,
            view,
            locked: false,
            dynamic: false,
        });
        id
    }

    /// Deletes a free-form text element and arms the timed undo slot with
    /// it. Reserved (locked) elements are never removed. A second delete
    /// while an undo is pending replaces the pending capture.
    pub fn delete_text_element(&mut self, id: &str, now: Instant) {
        let Some(index) = self.state.text_elements.iter().position(|e| e.id == id) else {
            return;
        };
        if self.state.text_elements[index].locked {
            tracing::warn!(id, "Refusing to delete a reserved text element");
            return;
        }
        let element = self.state.text_elements.remove(index);
        self.undo.arm(element, index, now);
        if matches!(&self.selected, Some(SelectionTarget::Text { id: sel }) if sel == id) {
            self.selected = None;
        }
    }

    /// Restores the most recently deleted text element at its original
    /// index. No-op when nothing is pending or the window has passed.
    /// Returns whether anything was restored.
    pub fn undo_delete(&mut self, now: Instant) -> bool {
        match self.undo.take(now) {
            Some(deleted) => {
                let index = deleted.index.min(self.state.text_elements.len());
                self.state.text_elements.insert(index, deleted.element);
                true
            }
            None => false,
        }
    }

    /// Host timer tick: drops an expired undo capture.
    pub fn expire_undo(&mut self, now: Instant) -> bool {
        self.undo.expire_if_due(now)
    }

    // ---- logos -----------------------------------------------------------

    /// Appends a logo placement once its upload has decoded. Racing
    /// uploads are safe: each completion appends independently.
    pub fn add_logo(&mut self, url: &str, view: ViewSide) -> String {
        let id = ids::new_logo_id();
        self.state.logos.push(LogoPlacement {
            id: id.clone(),
            url: url.to_string(),
            position: Point::new(200.0, 250.0),
            size: 80.0,
            rotation: 0.0,
            view,
            mirrored_from: None,
        });
        id
    }

    /// Creates or removes the mirror of a logo.
    pub fn toggle_mirror(&mut self, id: &str) -> Option<String> {
        logos::toggle_mirror(&mut self.state.logos, id)
    }

    /// Moves a logo; its mirror follows by reflection.
    pub fn update_logo_position(&mut self, id: &str, position: Point) {
        logos::set_position(&mut self.state.logos, id, position);
    }

    /// Resizes a logo; its mirror copies the size.
    pub fn update_logo_size(&mut self, id: &str, size: f64) {
        logos::set_size(&mut self.state.logos, id, size);
    }

    /// Rotates a logo; its mirror takes the negated rotation.
    pub fn update_logo_rotation(&mut self, id: &str, rotation: f64) {
        logos::set_rotation(&mut self.state.logos, id, rotation);
    }

    /// Removes a logo and any logo mirroring it.
    pub fn remove_logo(&mut self, id: &str) {
        logos::remove_logo(&mut self.state.logos, id);
        if matches!(&self.selected, Some(SelectionTarget::Logo { id: sel }) if sel == id) {
            self.selected = None;
        }
    }

    // ---- interaction events from the rendering surface -------------------

    /// Routes a selection event from the rendering surface. Logo ids are
    /// recognized by their reserved prefix; remaining ids are tried as
    /// text elements, then as zones. Selecting also drives the wizard
    /// side-channel transitions.
    pub fn select(&mut self, id: &str) -> Option<SelectionTarget> {
        let target = if ids::is_logo(id) && self.state.logo(id).is_some() {
            self.wizard.jump_to_identity(id, self.state.garment);
            SelectionTarget::Logo { id: id.to_string() }
        } else if self.state.text_element(id).is_some() {
            self.wizard.jump_to_identity(id, self.state.garment);
            SelectionTarget::Text { id: id.to_string() }
        } else {
            let list = self.zone_list();
            if !list.iter().any(|z| z.id == id) {
                tracing::debug!(id, "Selection event for unknown id ignored");
                return None;
            }
            self.wizard.jump_to_zone(&list, id);
            SelectionTarget::Zone { id: id.to_string() }
        };
        self.selected = Some(target.clone());
        Some(target)
    }

    /// Routes a drag event from the rendering surface to the right
    /// propagation logic. Unknown ids are ignored.
    pub fn position_change(&mut self, id: &str, position: Point) {
        if ids::is_logo(id) {
            self.update_logo_position(id, position);
        } else {
            self.update_text(id, TextField::Position(position));
        }
    }

    // ---- wizard ----------------------------------------------------------

    /// Advances the wizard (walking zones while on the Colors step).
    pub fn next_step(&mut self) -> WizardStep {
        let list = self.zone_list();
        self.wizard.next(&list, self.state.garment)
    }

    /// Steps the wizard back.
    pub fn back_step(&mut self) -> WizardStep {
        self.wizard.back()
    }

    /// Activates a zone on the Colors step.
    pub fn set_active_zone(&mut self, id: &str) {
        let list = self.zone_list();
        self.wizard.set_active_zone(&list, id);
    }

    // ---- variations ------------------------------------------------------

    /// Generates the current round of variation proposals.
    pub fn variations(&self, count: usize) -> Vec<Variation> {
        let Some(sport) = self.catalog.get(&self.state.sport) else {
            return Vec::new();
        };
        self.variations.generate(sport, self.palette.colors(), count)
    }

    /// The default-sized round of proposals.
    pub fn variation_round(&self) -> Vec<Variation> {
        self.variations(DEFAULT_COUNT)
    }

    /// Forces the next round to differ.
    pub fn reshuffle_variations(&mut self) {
        self.variations.reshuffle();
    }

    /// Applies an accepted proposal: the template swap (skipped when the
    /// proposed id has gone stale) and the zone recolors.
    pub fn apply_variation(&mut self, variation: &Variation) {
        if let Some(template_id) = &variation.template {
            let known = self
                .catalog
                .get(&self.state.sport)
                .map(|s| s.template(template_id).is_some())
                .unwrap_or(false);
            if known {
                self.state.template = template_id.clone();
                let list = self.zone_list();
                self.wizard.revalidate_zone(&list);
            } else {
                tracing::debug!(
                    template = %template_id,
                    "Variation references a stale template; keeping current"
                );
            }
        }
        for (zone, hex) in &variation.zones {
            self.update_zone(zone, &ZoneStylePatch::color(hex.clone()));
        }
    }

    // ---- composition -----------------------------------------------------

    /// The ordered draw list for one view side, using the default ghost
    /// tint.
    pub fn compose(&self, side: ViewSide) -> Vec<DrawOp> {
        self.compose_with(side, &|base| color::ghost_tint(base))
    }

    /// The ordered draw list with a caller-supplied ghost tint resolver.
    pub fn compose_with(&self, side: ViewSide, ghost: &dyn Fn(&str) -> String) -> Vec<DrawOp> {
        match self.catalog.get(&self.state.sport) {
            Some(sport) => compose::compose_with(&self.state, sport, side, ghost),
            None => {
                tracing::warn!(sport = %self.state.sport, "Sport missing from catalog; empty draw list");
                Vec::new()
            }
        }
    }

    // ---- commit ----------------------------------------------------------

    /// Commits the live design as a new cart item.
    pub fn commit_new(&self, quantity: u32, price_cents: u64) -> CartItem {
        CartItem::new(&self.state, quantity, price_cents)
    }

    /// Commits the live design as an update of an existing cart item.
    pub fn commit_update(&self, item_id: &str, quantity: u32, price_cents: u64) -> CartItem {
        CartItem::updated(item_id, &self.state, quantity, price_cents)
    }

    /// Discards the live design after an "add and continue designing"
    /// commit: sport and cut stay, everything else returns to defaults
    /// and the wizard restarts.
    pub fn reset_after_commit(&mut self) -> Result<()> {
        let template = self
            .catalog
            .sport(&self.state.sport)?
            .first_template()?
            .id
            .clone();
        self.state = DesignState::with_defaults(&self.state.sport, &self.state.cut, &template);
        self.undo = UndoSlot::new();
        self.wizard = WizardNavigator::new();
        self.selected = None;
        Ok(())
    }
}
