//! Action selection policies.

mod iterative;
mod recursive;
mod score;

pub use iterative::IterativeMinimax;
pub use recursive::RecursiveMinimax;
pub use score::{score_for, score_state};

use crate::combat::Action;
use crate::core::{EngineError, GameRng};
use crate::queue::TurnQueue;

/// A policy that picks the next action for whoever fronts the queue.
///
/// Takes the queue by shared reference; implementations that need to
/// simulate turns do so on clones. `&mut self` leaves room for internal
/// state such as an RNG.
pub trait Playstyle<Q: TurnQueue> {
    /// Pick an action for the queue's next actor.
    ///
    /// Returns `None` when the duel is over or the actor has no
    /// affordable action.
    fn select_action(&mut self, queue: &Q) -> Result<Option<Action>, EngineError>;
}

/// Picks uniformly among the affordable actions.
#[derive(Clone, Debug)]
pub struct RandomPlaystyle {
    rng: GameRng,
}

impl RandomPlaystyle {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<Q: TurnQueue> Playstyle<Q> for RandomPlaystyle {
    fn select_action(&mut self, queue: &Q) -> Result<Option<Action>, EngineError> {
        let mut state = queue.clone();
        if state.is_over() {
            return Ok(None);
        }
        let actor = state.peek();
        let actions = state.character(actor).available_actions();
        Ok(self.rng.choose(&actions).copied())
    }
}
