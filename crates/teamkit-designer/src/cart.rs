//! The cart commit boundary.
//!
//! Committing deep-copies the live design into a [`CartItem`] snapshot.
//! The engine never edits a committed snapshot; re-editing a cart entry
//! loads its snapshot back into the live session and commits again under
//! the same item id.

use crate::model::DesignState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamkit_core::ids;

/// A committed design, ready for the external cart/checkout collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub design: DesignState,
    pub quantity: u32,
    /// Unit price in minor currency units, quoted by the storefront.
    pub price_cents: u64,
    pub timestamp: DateTime<Utc>,
}

impl CartItem {
    /// Snapshots the design under a freshly generated item id.
    pub fn new(design: &DesignState, quantity: u32, price_cents: u64) -> Self {
        Self {
            id: ids::new_cart_id(),
            design: design.clone(),
            quantity,
            price_cents,
            timestamp: Utc::now(),
        }
    }

    /// Snapshots the design as an update of an existing item, reusing its
    /// id. The timestamp reflects the update.
    pub fn updated(id: &str, design: &DesignState, quantity: u32, price_cents: u64) -> Self {
        Self {
            id: id.to_string(),
            design: design.clone(),
            quantity,
            price_cents,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextField;

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut state = DesignState::with_defaults("basketball", "standard", "classic");
        let item = CartItem::new(&state, 12, 3499);

        if let Some(element) = state.text_element_mut(teamkit_core::ids::FRONT_NAME) {
            TextField::Text("CHANGED".to_string()).apply_to(element);
        }

        let snapshot = item.design.text_element(teamkit_core::ids::FRONT_NAME).unwrap();
        assert_eq!(snapshot.text, "TEAM");
        assert!(item.id.starts_with("cart-"));
    }

    #[test]
    fn update_reuses_the_item_id() {
        let state = DesignState::with_defaults("basketball", "standard", "classic");
        let item = CartItem::updated("cart-existing", &state, 1, 2999);
        assert_eq!(item.id, "cart-existing");
    }
}
