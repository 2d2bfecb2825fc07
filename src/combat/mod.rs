//! Combatants, skills, and the shared turn transition.

mod builder;
mod character;
mod skill;

pub use builder::DuelBuilder;
pub use character::{Archetype, Character};
pub use skill::{apply_action, perform, Action, Skill};
