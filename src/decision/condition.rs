//! Stat conditions gating descent through a decision tree.

use serde::{Deserialize, Serialize};

use crate::combat::Character;

/// A predicate over the caster's and target's current stats.
///
/// Closed variant set: trees are data, so conditions have to be
/// serializable values rather than closures.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Caster's HP is strictly above the threshold.
    CasterHpOver(i64),
    /// Caster's SP is strictly above the threshold.
    CasterSpOver(i64),
    /// Target's HP is strictly below the threshold.
    TargetHpUnder(i64),
    /// Target's SP is strictly above the threshold.
    TargetSpOver(i64),
    /// Always true.
    Always,
    /// Always false. Conventional marker for leaf nodes.
    Never,
    /// Negation.
    Not(Box<Condition>),
    /// True when every inner condition holds. Empty is true.
    All(Vec<Condition>),
    /// True when at least one inner condition holds. Empty is false.
    Any(Vec<Condition>),
}

impl Condition {
    /// Evaluate this condition against the two combatants.
    #[must_use]
    pub fn evaluate(&self, caster: &Character, target: &Character) -> bool {
        match self {
            Condition::CasterHpOver(threshold) => caster.hp() > *threshold,
            Condition::CasterSpOver(threshold) => caster.sp() > *threshold,
            Condition::TargetHpUnder(threshold) => target.hp() < *threshold,
            Condition::TargetSpOver(threshold) => target.sp() > *threshold,
            Condition::Always => true,
            Condition::Never => false,
            Condition::Not(inner) => !inner.evaluate(caster, target),
            Condition::All(inner) => inner.iter().all(|c| c.evaluate(caster, target)),
            Condition::Any(inner) => inner.iter().any(|c| c.evaluate(caster, target)),
        }
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::CasterHpOver(t) => write!(f, "caster HP > {t}"),
            Condition::CasterSpOver(t) => write!(f, "caster SP > {t}"),
            Condition::TargetHpUnder(t) => write!(f, "target HP < {t}"),
            Condition::TargetSpOver(t) => write!(f, "target SP > {t}"),
            Condition::Always => write!(f, "always"),
            Condition::Never => write!(f, "never"),
            Condition::Not(inner) => write!(f, "not ({inner})"),
            Condition::All(inner) => {
                let parts: Vec<String> = inner.iter().map(|c| c.to_string()).collect();
                write!(f, "all of [{}]", parts.join(", "))
            }
            Condition::Any(inner) => {
                let parts: Vec<String> = inner.iter().map(|c| c.to_string()).collect();
                write!(f, "any of [{}]", parts.join(", "))
            }
        }
    }
}
