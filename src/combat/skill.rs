//! Skills and turn resolution.
//!
//! Skills are a closed variant set dispatched through a single
//! [`Skill::resolve`]. Resolution mutates the two combatants through the
//! queue's arena and may enqueue new turn tickets as a side effect; which
//! tickets each skill grants is part of its identity.
//!
//! [`apply_action`] is the one shared transition primitive: the scorer and
//! both minimax playstyles simulate a turn by cloning a queue and calling
//! it, so all three agree on the stale-ticket consumption rule.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CharacterId, EngineError};
use crate::decision::default_tree;
use crate::queue::TurnQueue;

/// An action a combatant can be asked to take on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Attack,
    Special,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Attack => write!(f, "Attack"),
            Action::Special => write!(f, "Special"),
        }
    }
}

/// A concrete skill.
///
/// `NormalAttack` covers the plain damage-and-requeue attacks (the Mage's
/// and Rogue's attack differ only in cost and damage); every other skill
/// has bespoke resolution rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Deal damage, requeue the caster.
    NormalAttack { cost: i64, damage: i64 },
    /// Deal heavy damage, requeue the target then the caster.
    MageSpecial,
    /// Deal damage, requeue the caster twice.
    RogueSpecial,
    /// Deal damage and heal the caster by the HP actually removed.
    VampireAttack,
    /// Drain like the attack, requeue caster twice and the target once.
    VampireSpecial,
    /// Delegate to the caster's decision tree; net SP cost is fixed.
    SorcererAttack,
    /// Deduplicate the queue (first occurrence order), requeue the caster,
    /// then deal damage.
    SorcererSpecial,
}

impl Skill {
    /// The Mage's plain attack.
    #[must_use]
    pub fn mage_attack() -> Self {
        Skill::NormalAttack { cost: 5, damage: 20 }
    }

    /// The Rogue's plain attack.
    #[must_use]
    pub fn rogue_attack() -> Self {
        Skill::NormalAttack { cost: 3, damage: 15 }
    }

    /// SP cost of using this skill.
    #[must_use]
    pub fn sp_cost(&self) -> i64 {
        match self {
            Skill::NormalAttack { cost, .. } => *cost,
            Skill::MageSpecial => 30,
            Skill::RogueSpecial => 10,
            Skill::VampireAttack => 15,
            Skill::VampireSpecial => 20,
            Skill::SorcererAttack => 15,
            Skill::SorcererSpecial => 20,
        }
    }

    /// Raw damage before the target's defense.
    #[must_use]
    pub fn damage(&self) -> i64 {
        match self {
            Skill::NormalAttack { damage, .. } => *damage,
            Skill::MageSpecial => 40,
            Skill::RogueSpecial => 20,
            Skill::VampireAttack => 20,
            Skill::VampireSpecial => 30,
            Skill::SorcererAttack => 0,
            Skill::SorcererSpecial => 25,
        }
    }

    /// Resolve this skill with `caster` acting against their enemy.
    pub fn resolve<Q: TurnQueue>(
        &self,
        queue: &mut Q,
        caster: CharacterId,
    ) -> Result<(), EngineError> {
        let target = caster.opponent();
        trace!("{caster} resolves {self:?}");

        match self {
            Skill::NormalAttack { cost, damage } => {
                deal_damage(queue, caster, *cost, *damage);
                queue.add(caster);
            }

            Skill::MageSpecial => {
                deal_damage(queue, caster, self.sp_cost(), self.damage());
                queue.add(target);
                queue.add(caster);
            }

            Skill::RogueSpecial => {
                deal_damage(queue, caster, self.sp_cost(), self.damage());
                queue.add(caster);
                queue.add(caster);
            }

            Skill::VampireAttack => {
                drain_damage(queue, caster, self.sp_cost(), self.damage());
                queue.add(caster);
            }

            Skill::VampireSpecial => {
                drain_damage(queue, caster, self.sp_cost(), self.damage());
                queue.add(caster);
                queue.add(caster);
                queue.add(target);
            }

            Skill::SorcererAttack => {
                let tree = match queue.character(caster).decision_tree() {
                    Some(tree) => tree.clone(),
                    None => default_tree(),
                };
                let picked = tree.pick_skill(queue.character(caster), queue.character(target));
                if let Some(skill) = picked {
                    skill.resolve(queue, caster)?;
                    // The delegated skill charged its own cost; re-adjust so
                    // the net cost is this skill's fixed 15 SP.
                    let sp = queue.character(caster).sp();
                    queue
                        .character_mut(caster)
                        .set_sp(sp + skill.sp_cost() - self.sp_cost());
                }
            }

            Skill::SorcererSpecial => {
                let mut order: SmallVec<[CharacterId; 2]> = SmallVec::new();
                while !queue.is_empty() {
                    let id = queue.remove()?;
                    if !order.contains(&id) {
                        order.push(id);
                    }
                }
                for id in order {
                    queue.add(id);
                }
                queue.add(caster);
                deal_damage(queue, caster, self.sp_cost(), self.damage());
            }
        }

        Ok(())
    }
}

/// Charge the caster's SP and hit the target.
fn deal_damage<Q: TurnQueue>(queue: &mut Q, caster: CharacterId, cost: i64, damage: i64) {
    let (attacker, defender) = queue.pair_mut(caster);
    attacker.reduce_sp(cost);
    defender.apply_damage(damage);
}

/// Like [`deal_damage`], but heal the caster by the HP actually removed.
fn drain_damage<Q: TurnQueue>(queue: &mut Q, caster: CharacterId, cost: i64, damage: i64) {
    let (attacker, defender) = queue.pair_mut(caster);
    let before = defender.hp();
    attacker.reduce_sp(cost);
    defender.apply_damage(damage);
    let drained = before - defender.hp();
    let hp = attacker.hp();
    attacker.set_hp(hp + drained);
}

/// Resolve the skill behind `action` for `actor`.
pub fn perform<Q: TurnQueue>(
    queue: &mut Q,
    actor: CharacterId,
    action: Action,
) -> Result<(), EngineError> {
    let skill = queue.character(actor).archetype().skill_for(action);
    skill.resolve(queue, actor)
}

/// Apply `action` to the front actor of `queue` and retire the spent ticket.
///
/// Lazy purging only removes actors with zero remaining actions, so when
/// the actor can still act the now-stale front ticket has to be consumed
/// explicitly; otherwise the next queue inspection retires it.
pub fn apply_action<Q: TurnQueue>(queue: &mut Q, action: Action) -> Result<(), EngineError> {
    let actor = queue.peek();
    perform(queue, actor, action)?;
    if queue.character(actor).can_act() {
        queue.remove()?;
    }
    Ok(())
}
