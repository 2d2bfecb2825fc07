//! Depth-first minimax via recursion.

use log::debug;

use crate::combat::{apply_action, Action};
use crate::core::EngineError;
use crate::queue::TurnQueue;

use super::score::score_for;
use super::Playstyle;

/// Exhaustive minimax by direct recursion over [`score_for`].
///
/// Picks the action whose resulting state scores highest for the current
/// actor; ties go to the first action in enumeration order (Attack before
/// Special).
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveMinimax;

impl<Q: TurnQueue> Playstyle<Q> for RecursiveMinimax {
    fn select_action(&mut self, queue: &Q) -> Result<Option<Action>, EngineError> {
        let mut root = queue.clone();
        if root.is_over() {
            return Ok(None);
        }
        let actor = root.peek();
        let actions = root.character(actor).available_actions();

        let mut best: Option<(Action, i64)> = None;
        for action in actions {
            let mut branch = root.clone();
            apply_action(&mut branch, action)?;
            let score = score_for(actor, &mut branch)?;
            debug!("{actor} considering {action}: score {score}");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((action, score));
            }
        }
        Ok(best.map(|(action, _)| action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Archetype, DuelBuilder};
    use crate::core::CharacterId;
    use crate::queue::BattleQueue;

    fn rogue_vs_mage() -> BattleQueue {
        DuelBuilder::new()
            .player1("r", Archetype::Rogue)
            .player2("m", Archetype::Mage)
            .build()
    }

    #[test]
    fn test_rogue_takes_the_kill() {
        let mut queue = rogue_vs_mage();
        queue.character_mut(CharacterId::P2).set_hp(3);

        let mut style = RecursiveMinimax;
        assert_eq!(style.select_action(&queue).unwrap(), Some(Action::Attack));
    }

    #[test]
    fn test_wounded_rogue_still_attacks() {
        let mut queue = rogue_vs_mage();
        queue.character_mut(CharacterId::P2).set_hp(3);
        queue.character_mut(CharacterId::P1).set_hp(40);

        let mut style = RecursiveMinimax;
        assert_eq!(style.select_action(&queue).unwrap(), Some(Action::Attack));
    }

    #[test]
    fn test_cornered_mage_prefers_special() {
        let mut queue = rogue_vs_mage();
        queue.character_mut(CharacterId::P2).set_hp(3);
        queue.character_mut(CharacterId::P1).set_hp(40);
        queue.remove().unwrap();
        queue.add(CharacterId::P1);

        // The mage cannot survive either way, but the special leaves the
        // rogue at 10 HP instead of 30.
        let mut style = RecursiveMinimax;
        assert_eq!(style.select_action(&queue).unwrap(), Some(Action::Special));
    }

    #[test]
    fn test_none_when_over() {
        let mut queue = rogue_vs_mage();
        queue.character_mut(CharacterId::P1).set_hp(0);

        let mut style = RecursiveMinimax;
        assert_eq!(style.select_action(&queue).unwrap(), None);
    }

    #[test]
    fn test_none_when_no_actions_remain() {
        let mut queue = rogue_vs_mage();
        queue.character_mut(CharacterId::P1).set_sp(0);
        queue.character_mut(CharacterId::P2).set_sp(0);

        // Both stale tickets purge away and the queue drains.
        let mut style = RecursiveMinimax;
        assert_eq!(style.select_action(&queue).unwrap(), None);
    }
}
