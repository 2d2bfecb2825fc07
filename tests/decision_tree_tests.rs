//! Skill decision tree integration tests.

use duelcore::{
    perform, Action, Archetype, Character, CharacterId, Condition, DuelBuilder, Skill,
    SkillDecisionTree, TurnQueue,
};

fn matchup() -> (Character, Character) {
    (
        Character::new(CharacterId::P1, "caster", Archetype::Vampire),
        Character::new(CharacterId::P2, "target", Archetype::Vampire),
    )
}

// =============================================================================
// Default Tree Selection
// =============================================================================

#[test]
fn test_default_tree_preorder() {
    let tree = duelcore::default_tree();
    assert_eq!(tree.priorities_preorder(), vec![5, 3, 4, 6, 2, 8, 1, 7]);
}

#[test]
fn test_low_sp_weak_target_picks_rogue_attack() {
    let (mut caster, mut target) = matchup();
    caster.set_sp(30);
    target.set_hp(20);

    let tree = duelcore::default_tree();
    assert_eq!(tree.candidate_priorities(&caster, &target), vec![6, 8, 7]);
    assert_eq!(
        tree.pick_skill(&caster, &target),
        Some(Skill::rogue_attack())
    );
}

#[test]
fn test_healthy_matchup_picks_rogue_special() {
    let (caster, target) = matchup();

    let tree = duelcore::default_tree();
    assert_eq!(tree.candidate_priorities(&caster, &target), vec![4, 8, 7]);
    assert_eq!(tree.pick_skill(&caster, &target), Some(Skill::RogueSpecial));
}

#[test]
fn test_wounded_caster_stops_at_the_root() {
    let (mut caster, target) = matchup();
    caster.set_hp(45);

    let tree = duelcore::default_tree();
    assert_eq!(
        tree.pick_skill(&caster, &target),
        Some(Skill::mage_attack())
    );
}

#[test]
fn test_quiet_target_unlocks_mage_special() {
    let (caster, mut target) = matchup();
    target.set_sp(40); // not strictly over 40

    let tree = duelcore::default_tree();
    // Node 2's condition fails, so it offers itself instead of its leaf.
    assert_eq!(tree.candidate_priorities(&caster, &target), vec![4, 2, 7]);
    assert_eq!(tree.pick_skill(&caster, &target), Some(Skill::MageSpecial));
}

// =============================================================================
// Sorcerer Integration
// =============================================================================

#[test]
fn test_sorcerer_attack_consults_the_default_tree() {
    let mut queue = DuelBuilder::new()
        .player1("s", Archetype::Sorcerer)
        .player2("r", Archetype::Rogue)
        .build();

    perform(&mut queue, CharacterId::P1, Action::Attack).unwrap();

    // Healthy matchup: the tree delegates to RogueSpecial (20 damage,
    // 10 rogue defense) at a fixed net cost of 15 SP.
    assert_eq!(queue.character(CharacterId::P2).hp(), 90);
    assert_eq!(queue.character(CharacterId::P1).sp(), 85);
}

#[test]
fn test_sorcerer_uses_a_custom_tree_when_given_one() {
    let mut queue = DuelBuilder::new()
        .player1("s", Archetype::Sorcerer)
        .player2("r", Archetype::Rogue)
        .build();

    let tree = SkillDecisionTree::new(Skill::MageSpecial, Condition::Never, 1);
    queue.character_mut(CharacterId::P1).set_decision_tree(tree);

    perform(&mut queue, CharacterId::P1, Action::Attack).unwrap();

    // MageSpecial: 40 damage against 10 defense.
    assert_eq!(queue.character(CharacterId::P2).hp(), 70);
    assert_eq!(queue.character(CharacterId::P1).sp(), 85);
}

#[test]
fn test_delegated_skill_side_effects_reach_the_queue() {
    let mut queue = DuelBuilder::new()
        .player1("s", Archetype::Sorcerer)
        .player2("r", Archetype::Rogue)
        .build();

    // RogueSpecial requeues the caster twice on the sorcerer's behalf.
    perform(&mut queue, CharacterId::P1, Action::Attack).unwrap();

    assert_eq!(
        queue.ticket_order(),
        vec![
            CharacterId::P1,
            CharacterId::P2,
            CharacterId::P1,
            CharacterId::P1
        ]
    );
}

#[test]
fn test_combinator_conditions_gate_descent() {
    let (caster, mut target) = matchup();
    target.set_sp(30);

    // Descend only when the target is low on both pools.
    let mut tree = SkillDecisionTree::new(
        Skill::mage_attack(),
        Condition::All(vec![
            Condition::TargetHpUnder(120),
            Condition::TargetSpOver(40).negate(),
        ]),
        2,
    );
    let root = tree.root();
    tree.add_child(root, Skill::RogueSpecial, Condition::Never, 1);

    assert_eq!(tree.pick_skill(&caster, &target), Some(Skill::RogueSpecial));

    target.set_sp(80);
    assert_eq!(
        tree.pick_skill(&caster, &target),
        Some(Skill::mage_attack())
    );
}

#[test]
fn test_sp_floor_still_charges_net_cost() {
    let mut queue = DuelBuilder::new()
        .player1("s", Archetype::Sorcerer)
        .player2("r", Archetype::Rogue)
        .build();

    let tree = SkillDecisionTree::new(Skill::MageSpecial, Condition::Never, 1);
    queue.character_mut(CharacterId::P1).set_decision_tree(tree);
    queue.character_mut(CharacterId::P1).set_sp(16);

    perform(&mut queue, CharacterId::P1, Action::Attack).unwrap();

    // MageSpecial's 30 SP cost floors at 0, then the refund brings the
    // balance to the delegated cost minus the fixed 15.
    assert_eq!(queue.character(CharacterId::P1).sp(), 15);
}
