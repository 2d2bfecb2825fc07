//! Arena-backed skill decision trees.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::combat::{Character, Skill};

use super::Condition;

/// Index of a node within its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct TreeNode {
    skill: Skill,
    condition: Condition,
    priority: u32,
    children: SmallVec<[NodeId; 3]>,
}

/// A priority-ordered decision tree over skills.
///
/// Selection descends from the root: a node whose condition holds hands
/// the decision to its children; a node whose condition fails, and every
/// leaf, offers its own skill as a candidate. Among the candidates the
/// lowest priority number wins (priorities are assumed unique; on a tie
/// the first candidate in left-to-right order is kept).
///
/// Nodes live in a flat arena indexed by [`NodeId`], so the tree is plain
/// data: cheap to clone alongside its owning character and serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDecisionTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl SkillDecisionTree {
    /// Create a tree consisting of a single root node.
    #[must_use]
    pub fn new(skill: Skill, condition: Condition, priority: u32) -> Self {
        Self {
            nodes: vec![TreeNode {
                skill,
                condition,
                priority,
                children: SmallVec::new(),
            }],
            root: NodeId(0),
        }
    }

    /// The root node's id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new child under `parent`, in left-to-right order.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        skill: Skill,
        condition: Condition,
        priority: u32,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode {
            skill,
            condition,
            priority,
            children: SmallVec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Priorities in preorder. Mostly useful for asserting tree shape.
    #[must_use]
    pub fn priorities_preorder(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_preorder(self.root, &mut out);
        out
    }

    fn walk_preorder(&self, id: NodeId, out: &mut Vec<u32>) {
        let node = &self.nodes[id.0 as usize];
        out.push(node.priority);
        for &child in &node.children {
            self.walk_preorder(child, out);
        }
    }

    /// Pick the skill for `caster` acting against `target`.
    #[must_use]
    pub fn pick_skill(&self, caster: &Character, target: &Character) -> Option<Skill> {
        let mut candidates = Vec::new();
        self.collect_candidates(self.root, caster, target, &mut candidates);

        let mut best: Option<&TreeNode> = None;
        for id in candidates {
            let node = &self.nodes[id.0 as usize];
            if best.map_or(true, |b| node.priority < b.priority) {
                best = Some(node);
            }
        }
        best.map(|node| node.skill.clone())
    }

    /// Candidate priorities for the given matchup, in left-to-right order.
    #[must_use]
    pub fn candidate_priorities(&self, caster: &Character, target: &Character) -> Vec<u32> {
        let mut candidates = Vec::new();
        self.collect_candidates(self.root, caster, target, &mut candidates);
        candidates
            .into_iter()
            .map(|id| self.nodes[id.0 as usize].priority)
            .collect()
    }

    fn collect_candidates(
        &self,
        id: NodeId,
        caster: &Character,
        target: &Character,
        out: &mut Vec<NodeId>,
    ) {
        let node = &self.nodes[id.0 as usize];
        // Leaves always offer themselves, whatever their condition says.
        if node.children.is_empty() || !node.condition.evaluate(caster, target) {
            out.push(id);
            return;
        }
        for &child in &node.children {
            self.collect_candidates(child, caster, target, out);
        }
    }
}

/// The stock tree every Sorcerer starts with.
///
/// Preorder priorities: `[5, 3, 4, 6, 2, 8, 1, 7]`.
#[must_use]
pub fn default_tree() -> SkillDecisionTree {
    let mut tree = SkillDecisionTree::new(Skill::mage_attack(), Condition::CasterHpOver(50), 5);
    let root = tree.root();

    let n3 = tree.add_child(root, Skill::mage_attack(), Condition::CasterSpOver(20), 3);
    let n4 = tree.add_child(n3, Skill::RogueSpecial, Condition::TargetHpUnder(30), 4);
    tree.add_child(n4, Skill::rogue_attack(), Condition::Never, 6);

    let n2 = tree.add_child(root, Skill::MageSpecial, Condition::TargetSpOver(40), 2);
    tree.add_child(n2, Skill::rogue_attack(), Condition::Never, 8);

    let n1 = tree.add_child(root, Skill::rogue_attack(), Condition::CasterHpOver(90), 1);
    tree.add_child(n1, Skill::RogueSpecial, Condition::Never, 7);

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Archetype;
    use crate::core::CharacterId;

    fn pair() -> (Character, Character) {
        (
            Character::new(CharacterId::P1, "caster", Archetype::Vampire),
            Character::new(CharacterId::P2, "target", Archetype::Vampire),
        )
    }

    #[test]
    fn test_default_tree_shape() {
        let tree = default_tree();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.priorities_preorder(), vec![5, 3, 4, 6, 2, 8, 1, 7]);
    }

    #[test]
    fn test_candidates_full_stats() {
        // All conditions on the spine hold, so only the leaves remain.
        let (caster, target) = pair();
        let tree = default_tree();
        assert_eq!(tree.candidate_priorities(&caster, &target), vec![4, 8, 7]);
    }

    #[test]
    fn test_candidates_low_sp_low_target_hp() {
        let (mut caster, mut target) = pair();
        caster.set_sp(30);
        target.set_hp(20);

        let tree = default_tree();
        assert_eq!(tree.candidate_priorities(&caster, &target), vec![6, 8, 7]);
        assert_eq!(
            tree.pick_skill(&caster, &target),
            Some(Skill::rogue_attack())
        );
    }

    #[test]
    fn test_failed_root_condition_stops_descent() {
        let (mut caster, target) = pair();
        caster.set_hp(50);

        let tree = default_tree();
        assert_eq!(tree.candidate_priorities(&caster, &target), vec![5]);
        assert_eq!(
            tree.pick_skill(&caster, &target),
            Some(Skill::mage_attack())
        );
    }

    #[test]
    fn test_leaf_with_true_condition_is_its_own_candidate() {
        let (caster, target) = pair();
        let tree = SkillDecisionTree::new(Skill::MageSpecial, Condition::CasterHpOver(0), 1);

        assert_eq!(tree.pick_skill(&caster, &target), Some(Skill::MageSpecial));
    }

    #[test]
    fn test_lowest_priority_wins() {
        let (caster, target) = pair();
        let mut tree = SkillDecisionTree::new(Skill::mage_attack(), Condition::CasterHpOver(0), 9);
        let root = tree.root();
        tree.add_child(root, Skill::RogueSpecial, Condition::Never, 4);
        tree.add_child(root, Skill::MageSpecial, Condition::Never, 2);
        tree.add_child(root, Skill::rogue_attack(), Condition::Never, 3);

        assert_eq!(tree.pick_skill(&caster, &target), Some(Skill::MageSpecial));
    }

    #[test]
    fn test_serialization_round_trip() {
        let tree = default_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: SkillDecisionTree = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
