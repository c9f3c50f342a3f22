//! Logo placements and mirrored pairs.
//!
//! A mirror is a live placement derived from a source logo by reflecting
//! it about the vertical midline of the design space: the position's x is
//! reflected, y is copied, rotation is negated, size is copied. The
//! relation is 1:1 and acyclic, carried as a parent pointer
//! (`mirrored_from`) on the mirror. Every edit to the source re-derives
//! the mirror, and deleting a logo deletes its mirror with it.

use crate::model::LogoPlacement;
use teamkit_core::{ids, Point};

/// The logo that mirrors `source_id`, if one exists. The relation is 1:1,
/// so the first match is the only match.
pub fn mirror_of<'a>(logos: &'a [LogoPlacement], source_id: &str) -> Option<&'a LogoPlacement> {
    logos
        .iter()
        .find(|l| l.mirrored_from.as_deref() == Some(source_id))
}

fn mirror_index(logos: &[LogoPlacement], source_id: &str) -> Option<usize> {
    logos
        .iter()
        .position(|l| l.mirrored_from.as_deref() == Some(source_id))
}

/// Derives a fresh mirror placement from a source logo.
pub fn reflect(source: &LogoPlacement) -> LogoPlacement {
    LogoPlacement {
        id: ids::new_logo_id(),
        url: source.url.clone(),
        position: source.position.reflect_x(),
        size: source.size,
        rotation: -source.rotation,
        view: source.view,
        mirrored_from: Some(source.id.clone()),
    }
}

/// Re-derives the mirror of `source_id` from the source's current fields.
/// No-op when the source has no mirror or no longer exists. Idempotent, so
/// repeated identical updates during a slider drag are safe.
pub fn sync_mirror(logos: &mut [LogoPlacement], source_id: &str) {
    let Some(source) = logos.iter().find(|l| l.id == source_id).cloned() else {
        return;
    };
    if let Some(index) = mirror_index(logos, source_id) {
        let mirror = &mut logos[index];
        mirror.position = source.position.reflect_x();
        mirror.size = source.size;
        mirror.rotation = -source.rotation;
    }
}

/// Creates a mirror for `id`, or deletes the existing one. Returns the id
/// of the created mirror, `None` when one was removed or when `id` names
/// no logo.
pub fn toggle_mirror(logos: &mut Vec<LogoPlacement>, id: &str) -> Option<String> {
    if let Some(index) = mirror_index(logos, id) {
        logos.remove(index);
        return None;
    }
    let source = logos.iter().find(|l| l.id == id)?.clone();
    let mirror = reflect(&source);
    let mirror_id = mirror.id.clone();
    logos.push(mirror);
    Some(mirror_id)
}

/// Removes a logo and any logo mirroring it.
pub fn remove_logo(logos: &mut Vec<LogoPlacement>, id: &str) {
    logos.retain(|l| l.id != id && l.mirrored_from.as_deref() != Some(id));
}

/// Moves a source logo and re-derives its mirror's position.
pub fn set_position(logos: &mut [LogoPlacement], id: &str, position: Point) {
    if let Some(logo) = logos.iter_mut().find(|l| l.id == id) {
        logo.position = position;
        sync_mirror(logos, id);
    }
}

/// Resizes a source logo and copies the size onto its mirror.
pub fn set_size(logos: &mut [LogoPlacement], id: &str, size: f64) {
    if let Some(logo) = logos.iter_mut().find(|l| l.id == id) {
        logo.size = size.max(1.0);
        sync_mirror(logos, id);
    }
}

/// Rotates a source logo; the mirror gets the negated rotation.
pub fn set_rotation(logos: &mut [LogoPlacement], id: &str, rotation: f64) {
    if let Some(logo) = logos.iter_mut().find(|l| l.id == id) {
        logo.rotation = rotation;
        sync_mirror(logos, id);
    }
}
