//! The authoring wizard.
//!
//! Four linear steps: Setup, Design, Colors, Identity. The Colors step
//! iterates over the resolved zone list before the step counter advances,
//! and the Identity step is skipped entirely for shorts (which carry no
//! name/number identity). Selecting a zone, text element, or logo directly
//! on the canvas is a side-channel transition into the matching step.

use crate::zones::{self, ZoneEntry};
use serde::{Deserialize, Serialize};
use teamkit_core::{ids, GarmentType};

/// A wizard step, numbered 1-4 for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Setup,
    Design,
    Colors,
    Identity,
}

impl WizardStep {
    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Setup => 1,
            WizardStep::Design => 2,
            WizardStep::Colors => 3,
            WizardStep::Identity => 4,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Setup => Some(WizardStep::Design),
            WizardStep::Design => Some(WizardStep::Colors),
            WizardStep::Colors => Some(WizardStep::Identity),
            WizardStep::Identity => None,
        }
    }

    fn prev(&self) -> Option<Self> {
        match self {
            WizardStep::Setup => None,
            WizardStep::Design => Some(WizardStep::Setup),
            WizardStep::Colors => Some(WizardStep::Design),
            WizardStep::Identity => Some(WizardStep::Colors),
        }
    }

    /// Highest reachable step for a garment type. Shorts have no identity
    /// step; their terminal step is Colors.
    pub fn max_for(garment: GarmentType) -> Self {
        match garment {
            GarmentType::Jersey => WizardStep::Identity,
            GarmentType::Shorts => WizardStep::Colors,
        }
    }
}

/// Sub-tab of the Identity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityTab {
    Team,
    Player,
}

/// The wizard state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardNavigator {
    step: WizardStep,
    active_zone: String,
    identity_tab: IdentityTab,
}

impl Default for WizardNavigator {
    fn default() -> Self {
        Self {
            step: WizardStep::Setup,
            active_zone: zones::BODY_ZONE.to_string(),
            identity_tab: IdentityTab::Team,
        }
    }
}

impl WizardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The zone the Colors step is currently editing.
    pub fn active_zone(&self) -> &str {
        &self.active_zone
    }

    pub fn identity_tab(&self) -> IdentityTab {
        self.identity_tab
    }

    /// Sets the active zone, falling back to the first resolved zone when
    /// the id is not in the list.
    pub fn set_active_zone(&mut self, zone_list: &[ZoneEntry], id: &str) {
        self.active_zone = zones::fallback_zone(zone_list, id);
    }

    /// Re-validates the active zone after a template change.
    pub fn revalidate_zone(&mut self, zone_list: &[ZoneEntry]) {
        let current = self.active_zone.clone();
        self.active_zone = zones::fallback_zone(zone_list, &current);
    }

    /// Clamps the step when the garment type change shrinks the reachable
    /// range (jersey to shorts while on Identity).
    pub fn clamp_step(&mut self, garment: GarmentType) {
        let max = WizardStep::max_for(garment);
        if self.step > max {
            self.step = max;
        }
    }

    /// Advances the wizard.
    ///
    /// On the Colors step this is an intra-step transition while zones
    /// remain: the active zone moves to the next entry and the step stays.
    /// Only once the last zone is reached does the step counter advance.
    /// At the garment's last reachable step this is a no-op - the terminal
    /// action there is committing to the cart, which is not a wizard state.
    pub fn next(&mut self, zone_list: &[ZoneEntry], garment: GarmentType) -> WizardStep {
        if self.step == WizardStep::Colors && !zones::is_last_zone(zone_list, &self.active_zone) {
            if let Some(next) = zones::next_zone(zone_list, &self.active_zone) {
                self.active_zone = next;
            } else {
                // Active zone fell out of the list; recover before moving on.
                self.revalidate_zone(zone_list);
            }
            return self.step;
        }
        let max = WizardStep::max_for(garment);
        if let Some(next) = self.step.next() {
            if next <= max {
                self.step = next;
            }
        }
        self.step
    }

    /// Steps back. A plain step decrement - there is no intra-zone reverse
    /// granularity on Colors.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Canvas side-channel: clicking a zone jumps to Colors and activates
    /// it.
    pub fn jump_to_zone(&mut self, zone_list: &[ZoneEntry], id: &str) {
        self.step = WizardStep::Colors;
        self.set_active_zone(zone_list, id);
    }

    /// Canvas side-channel: clicking a text element or logo jumps to
    /// Identity, picking the player sub-tab for the reserved player
    /// elements and the team sub-tab for everything else (logos included).
    /// Identity is unreachable for shorts, so the jump lands on the
    /// garment's last reachable step instead.
    pub fn jump_to_identity(&mut self, element_id: &str, garment: GarmentType) {
        self.step = WizardStep::Identity.min(WizardStep::max_for(garment));
        self.identity_tab = if ids::is_player_text(element_id) {
            IdentityTab::Player
        } else {
            IdentityTab::Team
        };
    }
}
