//! # TeamKit Designer
//!
//! The design composition engine behind the TeamKit configurator. It owns
//! the mutable design-state model for a garment (jersey or shorts) and the
//! algorithms that keep it consistent under edits, ending in the ordered
//! draw list an external vector-rendering surface paints.
//!
//! ## Core Components
//!
//! ### Design State
//! - **Model**: zones, text elements, logo placements on one design
//! - **Session**: the UI-facing facade that routes every edit
//!
//! ### Consistency Engines
//! - **Zones**: resolving the colorable regions of the active template
//! - **Text Groups**: linked typographic fields across paired elements
//! - **Logos**: mirrored-pair synchronization by horizontal reflection
//!
//! ### Stateful Behaviors
//! - **Palette**: bounded, deduplicated recent-colors history
//! - **Undo**: single-slot timed recovery for deleted text elements
//! - **Variations**: seeded randomized recolor/re-template proposals
//! - **Wizard**: the four-step authoring flow with zone iteration
//!
//! ### Boundaries
//! - **Compose**: the ordered draw-list contract for the rendering surface
//! - **Cart**: deep design snapshots for the storefront's cart
//!
//! ## Architecture
//!
//! ```text
//! DesignSession (UI facade)
//!   ├── DesignState (canonical model)
//!   │     ├── zones / text elements / logos
//!   │     └── compose -> ordered DrawOp list
//!   ├── GroupIndex (linked text fields)
//!   ├── RecentColors (palette history)
//!   ├── UndoSlot (timed delete recovery)
//!   ├── WizardNavigator (authoring steps)
//!   └── VariationGenerator (seeded proposals)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teamkit_designer::DesignSession;
//!
//! let mut session = DesignSession::new(catalog, "basketball", "standard")?;
//! session.apply_color("#1b3a6b", ColorTarget::Base)?;
//! let draw_list = session.compose(ViewSide::Front);
//! ```

pub mod cart;
pub mod compose;
pub mod logos;
pub mod model;
pub mod palette;
pub mod session;
pub mod text_groups;
pub mod undo;
pub mod variations;
pub mod wizard;
pub mod zones;

pub use cart::CartItem;
pub use compose::{compose, compose_with, DrawOp};
pub use model::{
    DesignState, LogoPlacement, PatternKind, PatternMode, TextElement, TextField, ZoneStyle,
    ZoneStylePatch,
};
pub use palette::RecentColors;
pub use session::{ColorTarget, DesignSession, SelectionTarget};
pub use text_groups::{default_group_table, GroupIndex, GroupTable};
pub use undo::{DeletedText, UndoSlot, UNDO_WINDOW};
pub use variations::{Variation, VariationGenerator};
pub use wizard::{IdentityTab, WizardNavigator, WizardStep};
pub use zones::{resolve_zones, ZoneEntry, BODY_ZONE, TRIM_ZONE};
