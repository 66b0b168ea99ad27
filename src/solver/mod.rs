//! Depth-first search for a line of jumps that leaves a single peg.
//!
//! The search walks a [`GameTree`] one step at a time, descending into the
//! first unexplored jump of each node and backing out of nodes whose jumps
//! are all exhausted. The first single-peg node reached in that order is the
//! answer, so the result is fully determined by the opening slot.
mod tree;

pub use tree::{Branch, Child, Children, GameNode, GameTree, NodeId, Step};

use crate::action::Move;
use crate::board::parse_slot;

use anyhow::Result;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_STATES: u32 = 10_000_000;

pub fn solve(first_slot: i64, config: SolverConfig) -> Result<SolveResult> {
    let mut solver = Solver::new(config);
    solver.solve(first_slot)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on nodes materialised, root included.
    pub max_states: u32,
    /// Skip boards whose occupancy was already searched without success.
    pub prune_dead_states: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
            prune_dead_states: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Moves from the opening removal to the last jump.
    Solved(Vec<Move>),
    /// Every line from the opening was searched; none leaves a single peg.
    Exhausted,
    /// `max_states` was hit before the search finished.
    LimitReached,
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub outcome: Outcome,
    pub states: u32,
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn moves(&self) -> Option<&[Move]> {
        match &self.outcome {
            Outcome::Solved(moves) => Some(moves.as_slice()),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

/// A struct representing the solver for the peg solitaire triangle.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    dead_states: FxHashSet<u16>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            dead_states: FxHashSet::default(),
        }
    }

    pub fn solve(&mut self, first_slot: i64) -> Result<SolveResult> {
        let first_slot = parse_slot(first_slot)?;
        let timer = Instant::now();
        self.dead_states.clear();

        let mut tree = GameTree::new(first_slot)?;
        let mut current = tree.root();
        let mut states: u32 = 1;

        let outcome = loop {
            if tree.node(current).board().is_solved() {
                break Outcome::Solved(tree.history(current));
            }
            if states >= self.config.max_states {
                break Outcome::LimitReached;
            }

            let occupancy = tree.node(current).board().occupancy();
            match tree.next_node(current)? {
                Step::Descend(child) => {
                    states += 1;
                    if self.is_dead(tree.node(child)) {
                        tree.release(child);
                    } else {
                        current = child;
                    }
                }
                Step::Backtrack(parent) => {
                    if self.config.prune_dead_states {
                        self.dead_states.insert(occupancy);
                    }
                    current = parent;
                }
                Step::Exhausted => break Outcome::Exhausted,
            }
        };

        Ok(SolveResult {
            outcome,
            states,
            elapsed: timer.elapsed(),
        })
    }

    fn is_dead(&self, node: &GameNode) -> bool {
        self.config.prune_dead_states && self.dead_states.contains(&node.board().occupancy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::replay_moves;
    use crate::error::PegError;

    #[test]
    fn test_solve() {
        let result = solve(4, SolverConfig::default()).unwrap();
        let moves = result.moves().unwrap();
        assert_eq!(moves.len(), 14);
        assert_eq!(moves[0], Move::RemoveFirst(4));
        assert_eq!(moves.iter().filter(|m| m.is_jump()).count(), 13);
        assert!(result.states >= 14);

        let board = replay_moves(moves).unwrap();
        assert_eq!(board.peg_count(), 1);
        assert_eq!(board.count_occupied(), 1);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let first = solve(0, SolverConfig::default()).unwrap();
        let second = solve(0, SolverConfig::default()).unwrap();
        assert!(first.is_solved());
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.states, second.states);
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = Solver::new(SolverConfig {
            prune_dead_states: true,
            ..Default::default()
        });
        let first = solver.solve(12).unwrap();
        let second = solver.solve(12).unwrap();
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.states, second.states);
    }

    #[test]
    fn test_invalid_first_slot() {
        for slot in [-1, 15, 100] {
            let err = solve(slot, SolverConfig::default()).unwrap_err();
            assert_eq!(
                err.downcast_ref::<PegError>(),
                Some(&PegError::InvalidSlot(slot))
            );
        }
    }

    #[test]
    fn test_limit_reached() {
        let config = SolverConfig {
            max_states: 5,
            prune_dead_states: false,
        };
        let result = solve(4, config).unwrap();
        assert_eq!(result.outcome, Outcome::LimitReached);
        assert_eq!(result.states, 5);
        assert_eq!(result.moves(), None);
    }
}
