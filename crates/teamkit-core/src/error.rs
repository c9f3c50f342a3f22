//! Error handling for TeamKit
//!
//! Provides error types for the two places the engine can actually fail:
//! - Catalog errors (lookups against the read-only sport/template catalog)
//! - Design errors (invalid input crossing the engine boundary)
//!
//! Everything else in the engine is specified to recover locally (fall back
//! to the first zone, no-op on a vanished id, and so on) and never surfaces
//! an error. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Catalog error type
///
/// Represents failed lookups against the read-only template catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no sport with this identifier
    #[error("Unknown sport: {id}")]
    UnknownSport {
        /// The sport identifier that was looked up.
        id: String,
    },

    /// The sport exists but has no cut with this slug
    #[error("Unknown cut '{slug}' for sport '{sport}'")]
    UnknownCut {
        /// The sport identifier.
        sport: String,
        /// The cut slug that was looked up.
        slug: String,
    },

    /// The sport exists but has no template with this identifier
    #[error("Unknown template '{id}' for sport '{sport}'")]
    UnknownTemplate {
        /// The sport identifier.
        sport: String,
        /// The template identifier that was looked up.
        id: String,
    },

    /// The sport defines no templates at all
    #[error("Sport '{id}' has no templates")]
    NoTemplates {
        /// The sport identifier.
        id: String,
    },
}

/// Design error type
///
/// Represents invalid input handed to the engine from outside.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// A catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A color value could not be parsed as a hex color
    #[error("Invalid color value: {value}")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },
}

/// Result type alias using [`DesignError`]
pub type Result<T> = std::result::Result<T, DesignError>;
