//! The unrestricted battle queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::combat::Character;
use crate::core::{CharacterId, EngineError};

use super::TurnQueue;

/// A first-in-first-out turn queue over a two-combatant arena.
///
/// Tickets are purged lazily: a combatant who can no longer afford any
/// action keeps their tickets in the list until an inspection (`peek`,
/// `is_empty`, `remove`) walks the front and drops them. `Vector` keeps
/// deep copies cheap for the search playstyles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleQueue {
    characters: [Character; 2],
    tickets: Vector<CharacterId>,
    /// First combatant ever enqueued; `peek` falls back to them when the
    /// queue has drained.
    opener: Option<CharacterId>,
}

impl BattleQueue {
    /// Create a queue over the given combatants with no tickets.
    ///
    /// `p1` must occupy slot [`CharacterId::P1`] and `p2` slot
    /// [`CharacterId::P2`].
    #[must_use]
    pub fn new(p1: Character, p2: Character) -> Self {
        debug_assert_eq!(p1.id(), CharacterId::P1);
        debug_assert_eq!(p2.id(), CharacterId::P2);
        Self {
            characters: [p1, p2],
            tickets: Vector::new(),
            opener: None,
        }
    }

    /// Drop front tickets whose holder can no longer act.
    pub(crate) fn clean(&mut self) {
        while let Some(&front) = self.tickets.front() {
            if self.characters[front.index()].can_act() {
                break;
            }
            self.tickets.pop_front();
        }
    }

    pub(crate) fn front_ticket(&self) -> Option<CharacterId> {
        self.tickets.front().copied()
    }

    /// A copy with the same combatants and opener but no tickets. Used by
    /// [`RestrictedBattleQueue`](super::RestrictedBattleQueue) to replay
    /// tickets through its admission rules when cloning.
    pub(crate) fn fork_empty(&self) -> Self {
        Self {
            characters: self.characters.clone(),
            tickets: Vector::new(),
            opener: self.opener,
        }
    }
}

impl TurnQueue for BattleQueue {
    fn add(&mut self, id: CharacterId) {
        if self.opener.is_none() {
            self.opener = Some(id);
        }
        self.tickets.push_back(id);
    }

    fn remove(&mut self) -> Result<CharacterId, EngineError> {
        self.clean();
        self.tickets.pop_front().ok_or(EngineError::EmptyQueue)
    }

    fn peek(&mut self) -> CharacterId {
        self.clean();
        self.tickets
            .front()
            .copied()
            .or(self.opener)
            .unwrap_or(CharacterId::P1)
    }

    fn is_empty(&mut self) -> bool {
        self.clean();
        self.tickets.is_empty()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }

    fn ticket_order(&self) -> Vec<CharacterId> {
        self.tickets.iter().copied().collect()
    }

    fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }

    fn pair_mut(&mut self, id: CharacterId) -> (&mut Character, &mut Character) {
        let [p1, p2] = &mut self.characters;
        if id.index() == 0 {
            (p1, p2)
        } else {
            (p2, p1)
        }
    }
}

impl std::fmt::Display for BattleQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .tickets
            .iter()
            .map(|id| self.character(*id).to_string())
            .collect();
        write!(f, "{}", entries.join(" -> "))
    }
}
