//! Composition adapter.
//!
//! Converts a design state plus a view side into the ordered draw list the
//! external vector-rendering surface consumes. The order is the contract:
//! base garment shape, each template layer's zone fill (with a pattern
//! overlay when styled), trim, then the view's text elements, then the
//! view's logos.
//!
//! Ghost-mode pattern tinting is resolved through a caller-supplied
//! function; the engine does not own the tint rule. `compose` uses the
//! default from `teamkit_core::color`.

use crate::model::{DesignState, PatternKind, PatternMode, ZoneStyle};
use crate::zones::{BODY_ZONE, TRIM_ZONE};
use serde::{Deserialize, Serialize};
use teamkit_core::{color, Point, SportDefinition, ViewSide};

/// One drawable primitive, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOp {
    /// The garment silhouette from the cut, filled with the body color.
    Shape { path: String, color: String },
    /// A template layer filled with its zone's base color.
    ZoneFill {
        zone: String,
        path: String,
        color: String,
    },
    /// A pattern drawn over the preceding fill.
    PatternOverlay {
        zone: String,
        path: String,
        pattern: PatternKind,
        color: String,
    },
    /// The cut's trim, filled with the trim zone color.
    Trim { path: String, color: String },
    /// A text element on this view.
    Text {
        id: String,
        text: String,
        font: String,
        color: String,
        outline: String,
        outline_width: f64,
        position: Point,
        size: f64,
        rotation: f64,
    },
    /// A logo placement on this view.
    Logo {
        id: String,
        url: String,
        position: Point,
        size: f64,
        rotation: f64,
    },
}

/// Resolved pattern color for a style, or `None` when the zone draws no
/// pattern. Ghost mode routes through the supplied tint function.
fn pattern_color(style: &ZoneStyle, ghost: &dyn Fn(&str) -> String) -> Option<String> {
    if style.pattern == PatternKind::None {
        return None;
    }
    Some(match style.pattern_mode {
        PatternMode::Custom => style.pattern_color.clone(),
        PatternMode::Ghost => ghost(&style.color),
    })
}

/// Composes the draw list with the engine's default ghost tint.
pub fn compose(state: &DesignState, sport: &SportDefinition, side: ViewSide) -> Vec<DrawOp> {
    compose_with(state, sport, side, &|base| color::ghost_tint(base))
}

/// Composes the draw list, resolving ghost pattern tints through `ghost`.
///
/// Tolerant by construction: a missing cut, a template the sport no longer
/// carries, or an unauthored path for this garment/side simply contributes
/// nothing to the list.
pub fn compose_with(
    state: &DesignState,
    sport: &SportDefinition,
    side: ViewSide,
    ghost: &dyn Fn(&str) -> String,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let style_of = |zone: &str| state.zones.get(zone).cloned().unwrap_or_default();

    let cut = sport.cut(&state.cut);
    if cut.is_none() {
        tracing::warn!(cut = %state.cut, sport = %sport.id, "Cut missing from catalog; composing without silhouette");
    }

    // Base silhouette, body-colored, body pattern on top.
    let body = style_of(BODY_ZONE);
    if let Some(path) = cut.and_then(|c| c.shape.garment(state.garment).side(side)) {
        ops.push(DrawOp::Shape {
            path: path.to_string(),
            color: body.color.clone(),
        });
        if let Some(pattern) = pattern_color(&body, ghost) {
            ops.push(DrawOp::PatternOverlay {
                zone: BODY_ZONE.to_string(),
                path: path.to_string(),
                pattern: body.pattern,
                color: pattern,
            });
        }
    }

    // Template layers in authoring order.
    if let Some(template) = sport.template(&state.template) {
        for layer in &template.layers {
            let Some(path) = layer.paths.garment(state.garment).side(side) else {
                continue;
            };
            let style = style_of(&layer.id);
            ops.push(DrawOp::ZoneFill {
                zone: layer.id.clone(),
                path: path.to_string(),
                color: style.color.clone(),
            });
            if let Some(pattern) = pattern_color(&style, ghost) {
                ops.push(DrawOp::PatternOverlay {
                    zone: layer.id.clone(),
                    path: path.to_string(),
                    pattern: style.pattern,
                    color: pattern,
                });
            }
        }
    }

    // Trim over the fills.
    let trim = style_of(TRIM_ZONE);
    if let Some(path) = cut.and_then(|c| c.trim.garment(state.garment).side(side)) {
        ops.push(DrawOp::Trim {
            path: path.to_string(),
            color: trim.color.clone(),
        });
        if let Some(pattern) = pattern_color(&trim, ghost) {
            ops.push(DrawOp::PatternOverlay {
                zone: TRIM_ZONE.to_string(),
                path: path.to_string(),
                pattern: trim.pattern,
                color: pattern,
            });
        }
    }

    // This view's text, in element order.
    for element in state.text_elements.iter().filter(|e| e.view == side) {
        ops.push(DrawOp::Text {
            id: element.id.clone(),
            text: element.text.clone(),
            font: element.font.clone(),
            color: element.color.clone(),
            outline: element.outline.clone(),
            outline_width: element.outline_width,
            position: element.position,
            size: element.size,
            rotation: element.rotation,
        });
    }

    // This view's logos, topmost.
    for logo in state.logos.iter().filter(|l| l.view == side) {
        ops.push(DrawOp::Logo {
            id: logo.id.clone(),
            url: logo.url.clone(),
            position: logo.position,
            size: logo.size,
            rotation: logo.rotation,
        });
    }

    ops
}
