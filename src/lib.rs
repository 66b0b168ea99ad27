//! This crate solves the 15-hole triangular peg solitaire with a depth-first search.
//!
pub mod action;
pub mod board;
pub mod error;
pub mod solver;

pub use crate::error::PegError;
pub use crate::solver::{Outcome, SolveResult, Solver, SolverConfig, solve};
