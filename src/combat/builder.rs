//! Duel setup.

use crate::core::CharacterId;
use crate::queue::{BattleQueue, RestrictedBattleQueue, TurnQueue};

use super::character::{Archetype, Character};

/// Builder for a two-combatant duel.
///
/// Produces a queue with both combatants in the arena and one opening
/// ticket each, player 1 in front.
#[derive(Clone, Debug)]
pub struct DuelBuilder {
    p1: (String, Archetype),
    p2: (String, Archetype),
}

impl DuelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            p1: ("p1".to_string(), Archetype::Rogue),
            p2: ("p2".to_string(), Archetype::Rogue),
        }
    }

    #[must_use]
    pub fn player1(mut self, name: impl Into<String>, archetype: Archetype) -> Self {
        self.p1 = (name.into(), archetype);
        self
    }

    #[must_use]
    pub fn player2(mut self, name: impl Into<String>, archetype: Archetype) -> Self {
        self.p2 = (name.into(), archetype);
        self
    }

    fn characters(self) -> (Character, Character) {
        let (n1, a1) = self.p1;
        let (n2, a2) = self.p2;
        (
            Character::new(CharacterId::P1, n1, a1),
            Character::new(CharacterId::P2, n2, a2),
        )
    }

    /// Build an unrestricted duel.
    #[must_use]
    pub fn build(self) -> BattleQueue {
        let (p1, p2) = self.characters();
        let mut queue = BattleQueue::new(p1, p2);
        queue.add(CharacterId::P1);
        queue.add(CharacterId::P2);
        queue
    }

    /// Build a duel on a [`RestrictedBattleQueue`].
    #[must_use]
    pub fn build_restricted(self) -> RestrictedBattleQueue {
        let (p1, p2) = self.characters();
        let mut queue = RestrictedBattleQueue::new(p1, p2);
        queue.add(CharacterId::P1);
        queue.add(CharacterId::P2);
        queue
    }
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_seeds_opening_tickets() {
        let mut queue = DuelBuilder::new()
            .player1("r", Archetype::Rogue)
            .player2("m", Archetype::Mage)
            .build();

        assert_eq!(queue.peek(), CharacterId::P1);
        assert_eq!(
            queue.ticket_order(),
            vec![CharacterId::P1, CharacterId::P2]
        );
        assert_eq!(queue.character(CharacterId::P2).archetype(), Archetype::Mage);
    }

    #[test]
    fn test_build_restricted_opening_tickets_are_eligible() {
        let queue = DuelBuilder::new()
            .player1("a", Archetype::Vampire)
            .player2("b", Archetype::Sorcerer)
            .build_restricted();

        assert_eq!(queue.eligibility(), vec![true, true]);
    }
}
