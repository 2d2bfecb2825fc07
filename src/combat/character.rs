//! Combatants: archetypes and per-character state.
//!
//! All stat values are `i64`. HP and SP both start at 100 and are floored
//! at 0; a Vampire's drain can push HP above the starting value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CharacterId;
use crate::decision::{default_tree, SkillDecisionTree};

use super::skill::{Action, Skill};

/// The four combatant archetypes.
///
/// Each archetype fixes a defense value and the pair of skills behind the
/// Attack and Special actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Rogue,
    Mage,
    Vampire,
    Sorcerer,
}

impl Archetype {
    /// Flat damage reduction applied to every hit this archetype takes.
    #[must_use]
    pub const fn defense(self) -> i64 {
        match self {
            Archetype::Rogue => 10,
            Archetype::Mage => 8,
            Archetype::Vampire => 3,
            Archetype::Sorcerer => 6,
        }
    }

    /// The skill resolved by the Attack action.
    #[must_use]
    pub fn attack_skill(self) -> Skill {
        match self {
            Archetype::Rogue => Skill::rogue_attack(),
            Archetype::Mage => Skill::mage_attack(),
            Archetype::Vampire => Skill::VampireAttack,
            Archetype::Sorcerer => Skill::SorcererAttack,
        }
    }

    /// The skill resolved by the Special action.
    #[must_use]
    pub fn special_skill(self) -> Skill {
        match self {
            Archetype::Rogue => Skill::RogueSpecial,
            Archetype::Mage => Skill::MageSpecial,
            Archetype::Vampire => Skill::VampireSpecial,
            Archetype::Sorcerer => Skill::SorcererSpecial,
        }
    }

    /// The skill behind a given action.
    #[must_use]
    pub fn skill_for(self, action: Action) -> Skill {
        match action {
            Action::Attack => self.attack_skill(),
            Action::Special => self.special_skill(),
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::Rogue => "Rogue",
            Archetype::Mage => "Mage",
            Archetype::Vampire => "Vampire",
            Archetype::Sorcerer => "Sorcerer",
        };
        write!(f, "{name}")
    }
}

/// One combatant in a duel.
///
/// Characters live in the two-slot arena owned by the battle queue; the
/// enemy relation is the opposite arena slot, never an owning reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    archetype: Archetype,
    hp: i64,
    sp: i64,
    /// Only consulted by the Sorcerer's attack. Replaceable per character.
    decision_tree: Option<SkillDecisionTree>,
}

impl Character {
    /// Starting HP and SP for every archetype.
    pub const STARTING_HP: i64 = 100;
    pub const STARTING_SP: i64 = 100;

    /// Create a combatant at full HP/SP.
    ///
    /// Sorcerers come equipped with [`default_tree`]; other archetypes
    /// carry no decision tree.
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>, archetype: Archetype) -> Self {
        let decision_tree = match archetype {
            Archetype::Sorcerer => Some(default_tree()),
            _ => None,
        };
        Self {
            id,
            name: name.into(),
            archetype,
            hp: Self::STARTING_HP,
            sp: Self::STARTING_SP,
            decision_tree,
        }
    }

    /// This combatant's arena slot.
    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// The opposing combatant's arena slot.
    #[must_use]
    pub fn enemy(&self) -> CharacterId {
        self.id.opponent()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    #[must_use]
    pub fn sp(&self) -> i64 {
        self.sp
    }

    #[must_use]
    pub fn defense(&self) -> i64 {
        self.archetype.defense()
    }

    /// Set HP directly. Floored at 0.
    pub fn set_hp(&mut self, hp: i64) {
        self.hp = hp.max(0);
    }

    /// Set SP directly. Floored at 0.
    pub fn set_sp(&mut self, sp: i64) {
        self.sp = sp.max(0);
    }

    /// Pay the SP cost of a skill.
    pub fn reduce_sp(&mut self, cost: i64) {
        self.sp = (self.sp - cost).max(0);
    }

    /// Take a hit: damage is reduced by defense, HP is floored at 0.
    pub fn apply_damage(&mut self, damage: i64) {
        self.hp = (self.hp - (damage - self.defense()).max(0)).max(0);
    }

    /// Actions this combatant can currently afford, in enumeration order
    /// (Attack before Special).
    #[must_use]
    pub fn available_actions(&self) -> SmallVec<[Action; 2]> {
        let mut actions = SmallVec::new();
        if self.sp >= self.archetype.attack_skill().sp_cost() {
            actions.push(Action::Attack);
        }
        if self.sp >= self.archetype.special_skill().sp_cost() {
            actions.push(Action::Special);
        }
        actions
    }

    /// Whether any action is currently affordable.
    #[must_use]
    pub fn can_act(&self) -> bool {
        !self.available_actions().is_empty()
    }

    /// The decision tree consulted by the Sorcerer's attack, if any.
    #[must_use]
    pub fn decision_tree(&self) -> Option<&SkillDecisionTree> {
        self.decision_tree.as_ref()
    }

    /// Replace the decision tree consulted by the Sorcerer's attack.
    pub fn set_decision_tree(&mut self, tree: SkillDecisionTree) {
        self.decision_tree = Some(tree);
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}/{}",
            self.name, self.archetype, self.hp, self.sp
        )
    }
}
