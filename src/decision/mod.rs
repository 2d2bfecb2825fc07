//! Skill decision trees.
//!
//! A decision tree picks a skill from the current caster/target stats.
//! The Sorcerer's attack delegates to one of these, so the same archetype
//! can be tuned per character by swapping the tree.

mod condition;
mod tree;

pub use condition::Condition;
pub use tree::{default_tree, NodeId, SkillDecisionTree};
