//! Turn queues.
//!
//! A queue owns both combatants in a fixed two-slot arena and a list of
//! turn tickets (arena indices). Whoever holds the front ticket acts next.
//! Skills enqueue additional tickets as side effects, so one combatant can
//! hold several consecutive turns.
//!
//! Tickets for combatants who can no longer afford any action are purged
//! lazily from the front on every inspection, which is why `peek` and
//! `is_empty` take `&mut self`.

mod battle;
mod restricted;

pub use battle::BattleQueue;
pub use restricted::RestrictedBattleQueue;

use crate::combat::Character;
use crate::core::{CharacterId, EngineError};

/// A turn queue usable by the scorer and the minimax playstyles.
///
/// `Clone` is required because search simulates turns on deep copies; the
/// arena makes cloning cheap and keeps `CharacterId`s valid across copies.
pub trait TurnQueue: Clone {
    /// Enqueue a turn ticket for `id`.
    ///
    /// Implementations may refuse the ticket (see
    /// [`RestrictedBattleQueue`]); refusal is silent.
    fn add(&mut self, id: CharacterId);

    /// Pop the front live ticket.
    fn remove(&mut self) -> Result<CharacterId, EngineError>;

    /// Who acts next.
    ///
    /// On a queue with no live tickets this falls back to the first
    /// combatant ever enqueued (or P1 if none was), so the game loop can
    /// always name a "next" player for display purposes.
    fn peek(&mut self) -> CharacterId;

    /// Whether any live ticket remains.
    fn is_empty(&mut self) -> bool;

    /// Number of tickets, stale ones included.
    fn len(&self) -> usize;

    /// The raw ticket list in queue order, stale tickets included.
    fn ticket_order(&self) -> Vec<CharacterId>;

    fn character(&self, id: CharacterId) -> &Character;

    fn character_mut(&mut self, id: CharacterId) -> &mut Character;

    /// Mutable access to a combatant and their enemy at once.
    fn pair_mut(&mut self, id: CharacterId) -> (&mut Character, &mut Character);

    /// The duel is over once the queue has drained or either combatant is
    /// out of HP.
    fn is_over(&mut self) -> bool {
        self.is_empty()
            || CharacterId::both()
                .iter()
                .any(|&id| self.character(id).hp() == 0)
    }

    /// The surviving combatant of a finished duel.
    ///
    /// Returns `None` while the duel is running, when the queue drained
    /// with both sides alive, and when both are at 0 HP.
    fn winner(&mut self) -> Option<CharacterId> {
        if !self.is_over() {
            return None;
        }
        let p1_dead = self.character(CharacterId::P1).hp() == 0;
        let p2_dead = self.character(CharacterId::P2).hp() == 0;
        match (p1_dead, p2_dead) {
            (true, false) => Some(CharacterId::P2),
            (false, true) => Some(CharacterId::P1),
            _ => None,
        }
    }
}
