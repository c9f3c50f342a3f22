//! Randomized design variations.
//!
//! A variation is a recolor/re-template proposal the user may accept or
//! discard; nothing touches the live design until one is applied. Colors
//! are drawn from the recent-colors list (falling back to the built-in
//! swatch catalog when it is empty) and the template is drawn from the
//! active sport's list.
//!
//! The generator is deterministic: it owns an explicit seed and a call to
//! [`reshuffle`](VariationGenerator::reshuffle) advances it, so "show me
//! different ones" is just a seed bump and tests can assert exact output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use teamkit_core::{color, SportDefinition};

use crate::zones::{BODY_ZONE, TRIM_ZONE};

/// Zone ids a proposal coin-flips between the two drawn colors.
const FLIP_ZONES: [&str; 2] = ["sides", "shoulders"];

/// Number of proposals generated per round.
pub const DEFAULT_COUNT: usize = 6;

/// A recolor/re-template proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Proposed template, `None` when the sport has no templates to draw
    /// from.
    pub template: Option<String>,
    /// Proposed zone base colors, merged into the live design on apply.
    pub zones: HashMap<String, String>,
}

/// Seeded proposal generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationGenerator {
    seed: u64,
}

impl Default for VariationGenerator {
    fn default() -> Self {
        Self { seed: 0x7e4a_11 }
    }
}

impl VariationGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances the seed so the next [`generate`](Self::generate) call
    /// produces a fresh round.
    pub fn reshuffle(&mut self) {
        self.seed = self.seed.wrapping_add(1);
    }

    /// Generates `count` proposals from the sport's templates and the
    /// given color pool. An empty pool falls back to the swatch catalog.
    pub fn generate(
        &self,
        sport: &SportDefinition,
        recent: &[String],
        count: usize,
    ) -> Vec<Variation> {
        let swatches: Vec<String> = color::SWATCHES.iter().map(|s| s.to_string()).collect();
        let pool: &[String] = if recent.is_empty() { &swatches } else { recent };
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..count)
            .map(|_| {
                let base = pool[rng.gen_range(0..pool.len())].clone();
                let trim = pool[rng.gen_range(0..pool.len())].clone();
                let template = if sport.templates.is_empty() {
                    None
                } else {
                    Some(sport.templates[rng.gen_range(0..sport.templates.len())].id.clone())
                };

                let mut zones = HashMap::new();
                zones.insert(BODY_ZONE.to_string(), base.clone());
                zones.insert(TRIM_ZONE.to_string(), trim.clone());
                for zone in FLIP_ZONES {
                    let pick = if rng.gen_bool(0.5) { &base } else { &trim };
                    zones.insert(zone.to_string(), pick.clone());
                }

                Variation { template, zones }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as Map;
    use teamkit_core::Template;

    fn sport(template_ids: &[&str]) -> SportDefinition {
        SportDefinition {
            id: "basketball".to_string(),
            label: "Basketball".to_string(),
            cuts: Map::new(),
            templates: template_ids
                .iter()
                .map(|id| Template {
                    id: id.to_string(),
                    label: id.to_string(),
                    layers: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let sport = sport(&["classic", "bold"]);
        let pool = vec!["#111111".to_string(), "#222222".to_string()];
        let gen = VariationGenerator::new(42);
        assert_eq!(gen.generate(&sport, &pool, 6), gen.generate(&sport, &pool, 6));
    }

    #[test]
    fn reshuffle_changes_the_round() {
        let sport = sport(&["classic", "bold"]);
        let pool = vec!["#111111".to_string(), "#222222".to_string()];
        let mut gen = VariationGenerator::new(42);
        let first = gen.generate(&sport, &pool, 6);
        gen.reshuffle();
        assert_ne!(first, gen.generate(&sport, &pool, 6));
    }

    #[test]
    fn empty_pool_falls_back_to_swatches() {
        let sport = sport(&["classic"]);
        let round = VariationGenerator::new(7).generate(&sport, &[], 3);
        assert_eq!(round.len(), 3);
        for variation in &round {
            let body = &variation.zones[BODY_ZONE];
            assert!(color::SWATCHES.contains(&body.as_str()));
        }
    }

    #[test]
    fn flip_zones_use_one_of_the_drawn_colors() {
        let sport = sport(&["classic"]);
        let pool = vec!["#aaaaaa".to_string(), "#bbbbbb".to_string()];
        for variation in VariationGenerator::new(9).generate(&sport, &pool, 6) {
            let base = &variation.zones[BODY_ZONE];
            let trim = &variation.zones[TRIM_ZONE];
            for zone in FLIP_ZONES {
                let picked = &variation.zones[zone];
                assert!(picked == base || picked == trim);
            }
        }
    }

    #[test]
    fn sport_without_templates_proposes_none() {
        let sport = sport(&[]);
        let round = VariationGenerator::new(1).generate(&sport, &[], 2);
        assert!(round.iter().all(|v| v.template.is_none()));
    }
}
