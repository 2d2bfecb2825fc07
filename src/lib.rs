//! # duelcore
//!
//! A deterministic engine for two-combatant, turn-based duels, optimized
//! for exhaustive game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Arena-Owned Combatants**: a queue owns both combatants in a fixed
//!    two-slot arena; [`CharacterId`] is the slot index and stays valid
//!    across deep copies, so search never remaps identities.
//!
//! 2. **Tickets, Not Rounds**: turn order is a list of tickets. Skills
//!    enqueue extra tickets as side effects, and tickets of combatants who
//!    can no longer act are purged lazily on inspection.
//!
//! 3. **Cheap Deep Copies**: states clone in O(1) via `im` persistent
//!    ticket lists, which is what makes the exhaustive playstyles viable.
//!
//! 4. **Search as a Policy**: [`RecursiveMinimax`] and [`IterativeMinimax`]
//!    are interchangeable [`Playstyle`]s that agree with the
//!    [`score_state`] evaluation by construction.
//!
//! ## Modules
//!
//! - `core`: combatant ids, errors, RNG
//! - `combat`: archetypes, characters, skills, the shared turn transition
//! - `queue`: the `TurnQueue` trait, `BattleQueue`, `RestrictedBattleQueue`
//! - `decision`: skill decision trees and their conditions
//! - `playstyle`: random baseline and the two minimax searches
//!
//! ## Example
//!
//! ```
//! use duelcore::{
//!     Action, Archetype, CharacterId, DuelBuilder, Playstyle, RecursiveMinimax, TurnQueue,
//! };
//!
//! let mut queue = DuelBuilder::new()
//!     .player1("r", Archetype::Rogue)
//!     .player2("m", Archetype::Mage)
//!     .build();
//! queue.character_mut(CharacterId::P2).set_hp(3);
//!
//! let mut style = RecursiveMinimax;
//! let action = style.select_action(&queue).unwrap();
//! assert_eq!(action, Some(Action::Attack));
//! ```

pub mod combat;
pub mod core;
pub mod decision;
pub mod playstyle;
pub mod queue;

// Re-export commonly used types
pub use crate::core::{CharacterId, EngineError, GameRng};

pub use crate::combat::{apply_action, perform, Action, Archetype, Character, DuelBuilder, Skill};

pub use crate::queue::{BattleQueue, RestrictedBattleQueue, TurnQueue};

pub use crate::decision::{default_tree, Condition, NodeId, SkillDecisionTree};

pub use crate::playstyle::{
    score_for, score_state, IterativeMinimax, Playstyle, RandomPlaystyle, RecursiveMinimax,
};
