//! Guaranteed-score evaluation of duel states.
//!
//! The score of a state is taken from a fixed perspective: the combatant
//! who acts next in the state being evaluated. At every ply below, the
//! branch value is the maximum over the then-current actor's actions,
//! still scored from that same perspective. Extra turns granted by skills
//! mean consecutive plies often belong to the same combatant, so the
//! maximizing step doubles as "the opponent spends their turn however the
//! perspective player would score best for themselves" at enemy plies.
//! Both minimax playstyles are defined in terms of this evaluation.

use crate::combat::apply_action;
use crate::core::{CharacterId, EngineError};
use crate::queue::TurnQueue;

/// Score a finished duel from `perspective`.
///
/// The winner's remaining HP, negated when the winner is the other
/// combatant; ties score 0.
pub(crate) fn terminal_score<Q: TurnQueue>(perspective: CharacterId, queue: &mut Q) -> i64 {
    match queue.winner() {
        Some(winner) if winner == perspective => queue.character(winner).hp(),
        Some(winner) => -queue.character(winner).hp(),
        None => 0,
    }
}

/// Score `queue` from the perspective of its next actor.
pub fn score_state<Q: TurnQueue>(queue: &Q) -> Result<i64, EngineError> {
    let mut copy = queue.clone();
    let perspective = copy.peek();
    score_for(perspective, &mut copy)
}

/// The highest score `perspective` can be guaranteed from this state.
pub fn score_for<Q: TurnQueue>(
    perspective: CharacterId,
    queue: &mut Q,
) -> Result<i64, EngineError> {
    if queue.is_over() {
        return Ok(terminal_score(perspective, queue));
    }

    let actor = queue.peek();
    let actions = queue.character(actor).available_actions();
    if actions.is_empty() {
        // peek purges actors without actions, so a live front always has
        // at least one.
        return Err(EngineError::InvariantViolation(
            "non-terminal state with no available actions".to_string(),
        ));
    }

    let mut best = i64::MIN;
    for action in actions {
        let mut branch = queue.clone();
        apply_action(&mut branch, action)?;
        best = best.max(score_for(perspective, &mut branch)?);
    }
    Ok(best)
}
