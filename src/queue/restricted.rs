//! The restricted battle queue: tickets carry add-eligibility.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::combat::Character;
use crate::core::{CharacterId, EngineError};

use super::{BattleQueue, TurnQueue};

/// A [`BattleQueue`] where each ticket carries a bit saying whether its
/// holder may enqueue further tickets while it is at the front.
///
/// Admission rules, applied in order when `add(id)` is called:
///
/// 1. If no ticket of `id` is currently in the queue, the ticket is
///    accepted eligible. This covers each combatant's initial entry and
///    re-entry after all their tickets were consumed.
/// 2. Otherwise the front ticket is treated as the one adding. If the
///    front ticket is ineligible, the add is silently dropped.
/// 3. Front eligible and belongs to `id`: the new ticket is eligible
///    unless `id` already holds two eligible tickets.
/// 4. Front eligible but belongs to the other combatant: the new ticket
///    is accepted ineligible.
///
/// Cloning replays the ticket list through these rules, so eligibility in
/// the copy is recomputed rather than copied.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RestrictedBattleQueue {
    base: BattleQueue,
    /// Eligibility column, index-aligned with the base ticket list.
    eligibility: Vector<bool>,
}

impl RestrictedBattleQueue {
    /// Create a restricted queue over the given combatants with no tickets.
    #[must_use]
    pub fn new(p1: Character, p2: Character) -> Self {
        Self {
            base: BattleQueue::new(p1, p2),
            eligibility: Vector::new(),
        }
    }

    /// The eligibility column in queue order, aligned with
    /// [`ticket_order`](TurnQueue::ticket_order).
    #[must_use]
    pub fn eligibility(&self) -> Vec<bool> {
        self.eligibility.iter().copied().collect()
    }

    /// Eligible tickets currently held by `id`.
    fn eligible_count(&self, id: CharacterId) -> usize {
        self.base
            .ticket_order()
            .iter()
            .zip(self.eligibility.iter())
            .filter(|(&t, &e)| t == id && e)
            .count()
    }

    /// Purge stale front tickets and realign the eligibility column.
    ///
    /// The base purge only pops from the front, so realignment drops
    /// eligibility entries from the front until the lengths match again.
    fn align(&mut self) {
        self.base.clean();
        while self.eligibility.len() > self.base.len() {
            self.eligibility.pop_front();
        }
    }
}

impl TurnQueue for RestrictedBattleQueue {
    fn add(&mut self, id: CharacterId) {
        let already_present = self.base.ticket_order().contains(&id);
        if !already_present {
            self.base.add(id);
            self.eligibility.push_back(true);
            return;
        }

        let front_eligible = self.eligibility.front().copied().unwrap_or(false);
        if !front_eligible {
            return;
        }
        let adder_is_self = self.base.front_ticket() == Some(id);
        let eligible = adder_is_self && self.eligible_count(id) < 2;
        self.base.add(id);
        self.eligibility.push_back(eligible);
    }

    fn remove(&mut self) -> Result<CharacterId, EngineError> {
        self.align();
        let id = self.base.remove()?;
        if self.eligibility.pop_front().is_none() {
            return Err(EngineError::InvariantViolation(
                "eligibility column shorter than ticket list".to_string(),
            ));
        }
        Ok(id)
    }

    fn peek(&mut self) -> CharacterId {
        self.align();
        self.base.peek()
    }

    fn is_empty(&mut self) -> bool {
        self.align();
        self.base.is_empty()
    }

    fn len(&self) -> usize {
        self.base.len()
    }

    fn ticket_order(&self) -> Vec<CharacterId> {
        self.base.ticket_order()
    }

    fn character(&self, id: CharacterId) -> &Character {
        self.base.character(id)
    }

    fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        self.base.character_mut(id)
    }

    fn pair_mut(&mut self, id: CharacterId) -> (&mut Character, &mut Character) {
        self.base.pair_mut(id)
    }
}

impl Clone for RestrictedBattleQueue {
    /// Deep copy that replays every ticket through the admission rules.
    ///
    /// Replay never drops a ticket: the first ticket is always eligible,
    /// so rule 2 cannot fire during replay. Eligibility bits may differ
    /// from the source when the source's front has advanced.
    fn clone(&self) -> Self {
        let mut copy = Self {
            base: self.base.fork_empty(),
            eligibility: Vector::new(),
        };
        for id in self.base.ticket_order() {
            copy.add(id);
        }
        copy
    }
}

impl std::fmt::Display for RestrictedBattleQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)
    }
}
