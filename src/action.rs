use crate::board::Board;
use crate::error::PegError;

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    RemoveFirst(u8),
    Jump(u8, u8, u8), // (from, over, to)
}

impl Move {
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(..))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::RemoveFirst(slot) => write!(f, "R{slot}"),
            Move::Jump(from, over, to) => write!(f, "{from}-{over}-{to}"),
        }
    }
}

pub fn format_moves(moves: &[Move]) -> String {
    let list: Vec<String> = moves.iter().map(|mov| mov.to_string()).collect();

    let mut output = String::new();
    let max_width = list.iter().map(|s| s.len()).max().unwrap_or_default() + 1;
    for chunk in list.chunks(8) {
        for cmd in chunk {
            output.push_str(&format!("{cmd:<width$}", width = max_width));
        }
        output.push('\n');
    }

    output
}

pub fn apply_move(board: &mut Board, mov: &Move) -> Result<(), PegError> {
    match *mov {
        Move::RemoveFirst(slot) => board.remove_first(slot),
        Move::Jump(from, over, to) => board.apply_jump(from, over, to),
    }
}

/// Plays `moves` in order onto a full board.
pub fn replay_moves(moves: &[Move]) -> Result<Board, PegError> {
    let mut board = Board::full();
    for mov in moves {
        apply_move(&mut board, mov)?;
    }
    Ok(board)
}

pub fn describe_move(board: &Board, mov: &Move) -> String {
    let pegs = board.peg_count().saturating_sub(1);
    match *mov {
        Move::RemoveFirst(slot) => format!("Remove the peg at {slot} ({pegs} pegs left)"),
        Move::Jump(from, over, to) => {
            format!("Jump {from} over {over} to {to} ({pegs} pegs left)")
        }
    }
}
