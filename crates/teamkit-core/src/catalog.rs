//! The read-only template catalog model.
//!
//! A catalog maps sport identifiers to [`SportDefinition`] records, each
//! carrying the body cuts and design templates available for that sport.
//! The catalog is supplied already resolved by a loader collaborator; the
//! engine only reads it. Path data is carried as opaque strings the vector
//! rendering surface understands - the engine never interprets geometry
//! beyond picking the right path for a garment type and view side.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Garment type a design targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Jersey,
    Shorts,
}

impl GarmentType {
    /// Get garment type as string
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Jersey => "jersey",
            GarmentType::Shorts => "shorts",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "jersey" => Some(GarmentType::Jersey),
            "shorts" => Some(GarmentType::Shorts),
            _ => None,
        }
    }
}

/// One of the two fixed viewpoints the configurator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSide {
    Front,
    Back,
}

impl ViewSide {
    /// Get view side as string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewSide::Front => "front",
            ViewSide::Back => "back",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "front" => Some(ViewSide::Front),
            "back" => Some(ViewSide::Back),
            _ => None,
        }
    }

    /// The opposite viewpoint.
    pub fn opposite(&self) -> Self {
        match self {
            ViewSide::Front => ViewSide::Back,
            ViewSide::Back => ViewSide::Front,
        }
    }
}

/// Vector path data per view side. A missing side means that shape simply
/// is not drawn for that view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidePaths {
    pub front: Option<String>,
    pub back: Option<String>,
}

impl SidePaths {
    /// Path data for the requested side, if authored.
    pub fn side(&self, side: ViewSide) -> Option<&str> {
        match side {
            ViewSide::Front => self.front.as_deref(),
            ViewSide::Back => self.back.as_deref(),
        }
    }
}

/// Vector path data per garment type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarmentPaths {
    pub jersey: SidePaths,
    pub shorts: SidePaths,
}

impl GarmentPaths {
    /// Paths for the requested garment type.
    pub fn garment(&self, garment: GarmentType) -> &SidePaths {
        match garment {
            GarmentType::Jersey => &self.jersey,
            GarmentType::Shorts => &self.shorts,
        }
    }
}

/// A body cut: the outer garment silhouette and its trim, per garment type
/// and side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cut {
    pub slug: String,
    pub label: String,
    pub shape: GarmentPaths,
    pub trim: GarmentPaths,
}

/// A template-authored region with its own geometry per garment type and
/// side. Layers map one-to-one onto the non-reserved colorable zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLayer {
    pub id: String,
    pub label: String,
    pub paths: GarmentPaths,
}

/// A design template: an ordered list of layers. Templates with zero layers
/// are valid (the garment then only has its body and trim zones).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub label: String,
    pub layers: Vec<TemplateLayer>,
}

/// Everything the configurator knows about one sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportDefinition {
    pub id: String,
    pub label: String,
    pub cuts: HashMap<String, Cut>,
    pub templates: Vec<Template>,
}

impl SportDefinition {
    /// Looks up a template by id.
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Looks up a cut by slug.
    pub fn cut(&self, slug: &str) -> Option<&Cut> {
        self.cuts.get(slug)
    }

    /// The first template in authoring order, used as the default and as
    /// the fallback when a selected template disappears.
    pub fn first_template(&self) -> Result<&Template, CatalogError> {
        self.templates.first().ok_or_else(|| CatalogError::NoTemplates {
            id: self.id.clone(),
        })
    }
}

/// The full catalog, keyed by sport identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SportCatalog {
    sports: HashMap<String, SportDefinition>,
}

impl SportCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sport definition, replacing any existing one with the same id.
    pub fn insert(&mut self, sport: SportDefinition) {
        self.sports.insert(sport.id.clone(), sport);
    }

    /// Looks up a sport, returning a catalog error when absent.
    pub fn sport(&self, id: &str) -> Result<&SportDefinition, CatalogError> {
        self.sports
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSport { id: id.to_string() })
    }

    /// Looks up a sport without an error path.
    pub fn get(&self, id: &str) -> Option<&SportDefinition> {
        self.sports.get(id)
    }

    /// Sport identifiers present in the catalog.
    pub fn sport_ids(&self) -> impl Iterator<Item = &str> {
        self.sports.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.sports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}
