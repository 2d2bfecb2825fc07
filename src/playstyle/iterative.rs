//! Minimax via an explicit stack over an arena of game states.
//!
//! Functionally identical to [`RecursiveMinimax`](super::RecursiveMinimax)
//! but immune to stack depth: nodes are revisited post-order, so a parent
//! is scored only after all of its children carry a score.

use log::debug;
use smallvec::SmallVec;

use crate::combat::{apply_action, Action};
use crate::core::{CharacterId, EngineError};
use crate::queue::TurnQueue;

use super::score::terminal_score;
use super::Playstyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(u32);

struct SearchNode<Q> {
    queue: Q,
    /// Fixed scoring perspective inherited from the root. Arena-indexed
    /// ids stay valid across clones, so no per-node remapping is needed.
    perspective: CharacterId,
    /// Action that produced this state; `None` at the root.
    action: Option<Action>,
    score: Option<i64>,
    /// `None` until expanded. An expanded terminal keeps `Some` with an
    /// empty list, distinguishing "not yet visited" from "leaf".
    children: Option<SmallVec<[NodeId; 2]>>,
}

struct SearchTree<Q> {
    nodes: Vec<SearchNode<Q>>,
}

impl<Q: TurnQueue> SearchTree<Q> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: SearchNode<Q>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> &SearchNode<Q> {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<Q> {
        &mut self.nodes[id.0 as usize]
    }
}

/// Exhaustive minimax driven by an explicit work stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeMinimax;

impl<Q: TurnQueue> Playstyle<Q> for IterativeMinimax {
    fn select_action(&mut self, queue: &Q) -> Result<Option<Action>, EngineError> {
        let mut root_state = queue.clone();
        if root_state.is_over() {
            return Ok(None);
        }
        let perspective = root_state.peek();

        let mut tree = SearchTree::new();
        let root = tree.push(SearchNode {
            queue: root_state,
            perspective,
            action: None,
            score: None,
            children: None,
        });

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if tree.node(id).score.is_some() {
                continue;
            }

            let terminal = tree.node_mut(id).queue.is_over();
            if terminal {
                let node = tree.node_mut(id);
                let score = terminal_score(node.perspective, &mut node.queue);
                node.score = Some(score);
                continue;
            }

            match &tree.node(id).children {
                None => {
                    // First visit: expand, then revisit after the children.
                    let actions = {
                        let node = tree.node_mut(id);
                        let actor = node.queue.peek();
                        node.queue.character(actor).available_actions()
                    };
                    if actions.is_empty() {
                        return Err(EngineError::InvariantViolation(
                            "non-terminal state with no available actions".to_string(),
                        ));
                    }
                    stack.push(id);
                    let mut children: SmallVec<[NodeId; 2]> = SmallVec::new();
                    for action in actions {
                        let mut state = tree.node(id).queue.clone();
                        apply_action(&mut state, action)?;
                        let child = tree.push(SearchNode {
                            queue: state,
                            perspective,
                            action: Some(action),
                            score: None,
                            children: None,
                        });
                        children.push(child);
                        stack.push(child);
                    }
                    tree.node_mut(id).children = Some(children);
                }
                Some(children) => {
                    // Second visit: all children are scored.
                    let mut best = None;
                    for &child in children.iter() {
                        match tree.node(child).score {
                            Some(score) => {
                                best = Some(best.map_or(score, |b: i64| b.max(score)));
                            }
                            None => {
                                return Err(EngineError::InvariantViolation(
                                    "child state scored out of order".to_string(),
                                ));
                            }
                        }
                    }
                    tree.node_mut(id).score = best;
                }
            }
        }

        let root_score = tree.node(root).score;
        debug!("{perspective} guaranteed score: {root_score:?}");
        if let Some(children) = &tree.node(root).children {
            for &child in children.iter() {
                if tree.node(child).score == root_score {
                    return Ok(tree.node(child).action);
                }
            }
        }
        Ok(None)
    }
}
