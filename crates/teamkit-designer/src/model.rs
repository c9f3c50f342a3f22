//! The design-state model.
//!
//! [`DesignState`] is the canonical mutable model of the garment being
//! built. Everything the configurator shows or exports derives from this
//! single structure; collaborators receive it as plain nested data
//! (all types here are serde-serializable).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use teamkit_core::{color, ids, GarmentType, Point, ViewSide};

/// Pattern applied over a zone's base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    None,
    Stripes,
    Dots,
    Mesh,
    Camo,
    Geometric,
}

impl PatternKind {
    /// Get pattern kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::None => "none",
            PatternKind::Stripes => "stripes",
            PatternKind::Dots => "dots",
            PatternKind::Mesh => "mesh",
            PatternKind::Camo => "camo",
            PatternKind::Geometric => "geometric",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(PatternKind::None),
            "stripes" => Some(PatternKind::Stripes),
            "dots" => Some(PatternKind::Dots),
            "mesh" => Some(PatternKind::Mesh),
            "camo" => Some(PatternKind::Camo),
            "geometric" => Some(PatternKind::Geometric),
            _ => None,
        }
    }
}

/// How a pattern's color is resolved.
///
/// `Ghost` renders the pattern in a derived neutral tint of the zone color;
/// `Custom` uses the zone's `pattern_color`. The pattern color is only
/// meaningful when a pattern is set and the mode is `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    Ghost,
    Custom,
}

/// Styling of one colorable zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStyle {
    pub color: String,
    pub pattern: PatternKind,
    pub pattern_color: String,
    pub pattern_mode: PatternMode,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            color: color::WHITE.to_string(),
            pattern: PatternKind::None,
            pattern_color: "#000000".to_string(),
            pattern_mode: PatternMode::Ghost,
        }
    }
}

/// A partial zone-style edit. Unset fields leave the zone untouched;
/// applying a patch to a zone with no prior entry starts from the neutral
/// default style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneStylePatch {
    pub color: Option<String>,
    pub pattern: Option<PatternKind>,
    pub pattern_color: Option<String>,
    pub pattern_mode: Option<PatternMode>,
}

impl ZoneStylePatch {
    /// A patch that only sets the base color.
    pub fn color(hex: impl Into<String>) -> Self {
        Self {
            color: Some(hex.into()),
            ..Self::default()
        }
    }

    /// A patch that only sets the pattern color.
    pub fn pattern_color(hex: impl Into<String>) -> Self {
        Self {
            pattern_color: Some(hex.into()),
            ..Self::default()
        }
    }

    /// A patch that only sets the pattern kind.
    pub fn pattern(kind: PatternKind) -> Self {
        Self {
            pattern: Some(kind),
            ..Self::default()
        }
    }

    /// Merges the set fields into an existing style.
    pub fn apply_to(&self, style: &mut ZoneStyle) {
        if let Some(color) = &self.color {
            style.color = color.clone();
        }
        if let Some(pattern) = self.pattern {
            style.pattern = pattern;
        }
        if let Some(pattern_color) = &self.pattern_color {
            style.pattern_color = pattern_color.clone();
        }
        if let Some(mode) = self.pattern_mode {
            style.pattern_mode = mode;
        }
    }
}

/// Smallest outline width step the UI exposes.
const OUTLINE_STEP: f64 = 0.5;

/// A text element placed on the garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: String,
    pub text: String,
    pub font: String,
    pub color: String,
    pub outline: String,
    pub outline_width: f64,
    pub position: Point,
    pub size: f64,
    pub rotation: f64,
    pub view: ViewSide,
    /// Reserved elements are locked and cannot be deleted.
    pub locked: bool,
    /// Marks an element as varying per recipient (a roster number) rather
    /// than static team branding.
    pub dynamic: bool,
}

/// A single field edit on a text element.
///
/// The variant decides propagation: typographic fields (`Font`, `Color`,
/// `Outline`, `OutlineWidth`) spread to every member of the element's
/// linked group, everything else stays on the targeted element.
#[derive(Debug, Clone, PartialEq)]
pub enum TextField {
    Text(String),
    Font(String),
    Color(String),
    Outline(String),
    OutlineWidth(f64),
    Size(f64),
    Position(Point),
    Rotation(f64),
    Dynamic(bool),
}

impl TextField {
    /// Whether this field is kept identical across a linked group.
    pub fn is_group_shared(&self) -> bool {
        matches!(
            self,
            TextField::Font(_)
                | TextField::Color(_)
                | TextField::Outline(_)
                | TextField::OutlineWidth(_)
        )
    }

    /// Writes the field into an element, clamping to the UI's ranges.
    pub fn apply_to(&self, element: &mut TextElement) {
        match self {
            TextField::Text(text) => element.text = text.clone(),
            TextField::Font(font) => element.font = font.clone(),
            TextField::Color(color) => element.color = color.clone(),
            TextField::Outline(outline) => element.outline = outline.clone(),
            TextField::OutlineWidth(width) => {
                let clamped = width.clamp(0.0, 10.0);
                element.outline_width = (clamped / OUTLINE_STEP).round() * OUTLINE_STEP;
            }
            TextField::Size(size) => element.size = size.clamp(10.0, 200.0),
            TextField::Position(position) => element.position = *position,
            TextField::Rotation(rotation) => element.rotation = rotation.rem_euclid(360.0),
            TextField::Dynamic(dynamic) => element.dynamic = *dynamic,
        }
    }
}

/// A logo placed on the garment. `url` is an opaque image reference the
/// rendering surface resolves; the engine never loads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoPlacement {
    pub id: String,
    pub url: String,
    pub position: Point,
    pub size: f64,
    pub rotation: f64,
    pub view: ViewSide,
    /// When set, this placement is a live mirror of the named logo and is
    /// re-derived from it on every edit to the source.
    pub mirrored_from: Option<String>,
}

/// The canonical mutable model of the garment being built.
///
/// `zones` always contains at least `body` and `trim`; additional keys
/// equal the active template's layer ids. Entries for zones the current
/// template no longer produces are tolerated, not deleted - they simply
/// stop rendering until a template exposes that zone again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignState {
    pub sport: String,
    pub cut: String,
    pub garment: GarmentType,
    pub template: String,
    pub zones: HashMap<String, ZoneStyle>,
    pub text_elements: Vec<TextElement>,
    pub logos: Vec<LogoPlacement>,
}

impl DesignState {
    /// Creates the default design for a sport, cut, and template: the four
    /// reserved text elements, empty logos, neutral body and trim styles.
    pub fn with_defaults(sport: &str, cut: &str, template: &str) -> Self {
        let mut zones = HashMap::new();
        zones.insert(crate::zones::BODY_ZONE.to_string(), ZoneStyle::default());
        zones.insert(crate::zones::TRIM_ZONE.to_string(), ZoneStyle::default());

        Self {
            sport: sport.to_string(),
            cut: cut.to_string(),
            garment: GarmentType::Jersey,
            template: template.to_string(),
            zones,
            text_elements: default_text_elements(),
            logos: Vec::new(),
        }
    }

    /// Looks up a text element by id.
    pub fn text_element(&self, id: &str) -> Option<&TextElement> {
        self.text_elements.iter().find(|e| e.id == id)
    }

    /// Looks up a text element mutably.
    pub fn text_element_mut(&mut self, id: &str) -> Option<&mut TextElement> {
        self.text_elements.iter_mut().find(|e| e.id == id)
    }

    /// Looks up a logo placement by id.
    pub fn logo(&self, id: &str) -> Option<&LogoPlacement> {
        self.logos.iter().find(|l| l.id == id)
    }

    /// Looks up a logo placement mutably.
    pub fn logo_mut(&mut self, id: &str) -> Option<&mut LogoPlacement> {
        self.logos.iter_mut().find(|l| l.id == id)
    }
}

fn reserved_element(
    id: &str,
    text: &str,
    position: Point,
    size: f64,
    view: ViewSide,
    dynamic: bool,
) -> TextElement {
    TextElement {
        id: id.to_string(),
        text: text.to_string(),
        font: "Industry".to_string(),
        color: color::INK.to_string(),
        outline: color::WHITE.to_string(),
        outline_width: 0.0,
        position,
        size,
        rotation: 0.0,
        view,
        locked: true,
        dynamic,
    }
}

/// The four reserved text elements every design starts with.
pub fn default_text_elements() -> Vec<TextElement> {
    vec![
        reserved_element(
            ids::FRONT_NAME,
            "TEAM",
            Point::new(200.0, 140.0),
            34.0,
            ViewSide::Front,
            false,
        ),
        reserved_element(
            ids::FRONT_NUMBER,
            "0",
            Point::new(200.0, 270.0),
            120.0,
            ViewSide::Front,
            true,
        ),
        reserved_element(
            ids::BACK_NAME,
            "PLAYER",
            Point::new(200.0, 90.0),
            30.0,
            ViewSide::Back,
            true,
        ),
        reserved_element(
            ids::BACK_NUMBER,
            "0",
            Point::new(200.0, 280.0),
            140.0,
            ViewSide::Back,
            true,
        ),
    ]
}
