//! Element identifiers.
//!
//! Four text elements are reserved and always present on a design: the
//! front team name, front number, back player name, and back number.
//! Reserved elements are locked (never deletable). Free-form text elements
//! and logo placements get generated ids; logo ids carry a reserved prefix
//! so interaction events coming back from the rendering surface can be
//! classified without a registry lookup.

use uuid::Uuid;

/// Front team name element.
pub const FRONT_NAME: &str = "text-front-name";

/// Front number element.
pub const FRONT_NUMBER: &str = "text-front-number";

/// Back player name element.
pub const BACK_NAME: &str = "text-back-name";

/// Back number element.
pub const BACK_NUMBER: &str = "text-back-number";

/// All reserved text element ids, in display order.
pub const RESERVED_TEXT_IDS: [&str; 4] = [FRONT_NAME, FRONT_NUMBER, BACK_NAME, BACK_NUMBER];

/// The reserved ids that identify a player rather than the team: the two
/// number elements, which vary per recipient on a roster order.
pub const PLAYER_TEXT_IDS: [&str; 2] = [FRONT_NUMBER, BACK_NUMBER];

/// Prefix distinguishing logo placement ids from every other id class.
pub const LOGO_PREFIX: &str = "logo-";

/// Returns true for the four reserved text element ids.
pub fn is_reserved_text(id: &str) -> bool {
    RESERVED_TEXT_IDS.contains(&id)
}

/// Returns true for the reserved ids that belong to the player identity
/// sub-tab rather than the team sub-tab.
pub fn is_player_text(id: &str) -> bool {
    PLAYER_TEXT_IDS.contains(&id)
}

/// Returns true for logo placement ids.
pub fn is_logo(id: &str) -> bool {
    id.starts_with(LOGO_PREFIX)
}

/// Generates an id for a free-form text element.
pub fn new_text_id() -> String {
    format!("text-{}", Uuid::new_v4())
}

/// Generates an id for a logo placement.
pub fn new_logo_id() -> String {
    format!("{}{}", LOGO_PREFIX, Uuid::new_v4())
}

/// Generates an id for a committed cart item.
pub fn new_cart_id() -> String {
    format!("cart-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_ids_are_classified() {
        assert!(is_reserved_text(FRONT_NAME));
        assert!(is_reserved_text(BACK_NUMBER));
        assert!(!is_reserved_text("text-free-form"));
        assert!(is_player_text(FRONT_NUMBER));
        assert!(!is_player_text(FRONT_NAME));
    }

    #[test]
    fn generated_logo_ids_carry_the_prefix() {
        let id = new_logo_id();
        assert!(is_logo(&id));
        assert!(!is_logo(&new_text_id()));
    }
}
