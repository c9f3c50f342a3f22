//! # TeamKit Core
//!
//! Core types and utilities for TeamKit.
//! Provides the fundamental abstractions the design engine is built on:
//! the read-only template catalog model, the design-space geometry,
//! color handling, element identifiers, and error types.

pub mod catalog;
pub mod color;
pub mod error;
pub mod geometry;
pub mod ids;

pub use catalog::{
    Cut, GarmentPaths, GarmentType, SidePaths, SportCatalog, SportDefinition, Template,
    TemplateLayer, ViewSide,
};

pub use error::{CatalogError, DesignError, Result};

pub use geometry::{Point, DESIGN_HEIGHT, DESIGN_WIDTH};
