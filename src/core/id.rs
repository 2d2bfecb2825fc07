//! Combatant identification.
//!
//! A duel always has exactly two combatants, stored in a fixed two-slot
//! arena owned by the battle queue. `CharacterId` is the index into that
//! arena, and the `enemy` relation is simply the opposite slot. Because the
//! ids are positional, they stay valid across deep copies of the queue:
//! `CharacterId::P1` names "the first combatant" in the original and in
//! every clone.

use serde::{Deserialize, Serialize};

/// Index of a combatant in the two-slot battle arena.
///
/// ```
/// use duelcore::core::CharacterId;
///
/// assert_eq!(CharacterId::P1.opponent(), CharacterId::P2);
/// assert_eq!(CharacterId::P2.opponent(), CharacterId::P1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(u8);

impl CharacterId {
    /// The first combatant.
    pub const P1: CharacterId = CharacterId(0);

    /// The second combatant.
    pub const P2: CharacterId = CharacterId(1);

    /// Get the raw slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the id of the other combatant.
    #[must_use]
    pub const fn opponent(self) -> CharacterId {
        CharacterId(1 - self.0)
    }

    /// Both ids in slot order.
    #[must_use]
    pub const fn both() -> [CharacterId; 2] {
        [CharacterId::P1, CharacterId::P2]
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}
