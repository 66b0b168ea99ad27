use crate::error::PegError;

use smallvec::SmallVec;

pub const TOTAL_SLOTS: usize = 15;
pub const TOTAL_ROWS: usize = 5;

const PEG: char = '●';
const HOLE: char = '○';

/// Legal `(over, to)` pairs out of a single slot.
pub type Jumps = SmallVec<[(u8, u8); 4]>;

/// Every slot with at least one legal jump, in ascending slot order.
pub type AllJumps = SmallVec<[(u8, Jumps); TOTAL_SLOTS]>;

/// `(over, to)` pairs reachable from each slot, numbered row by row:
///
/// ```text
///         0
///       1   2
///     3   4   5
///   6   7   8   9
/// 10  11  12  13  14
/// ```
///
/// Declaration order is the search order.
pub const TOPOLOGY: [&[(u8, u8)]; TOTAL_SLOTS] = [
    &[(1, 3), (2, 5)],
    &[(3, 6), (4, 8)],
    &[(4, 7), (5, 9)],
    &[(4, 5), (1, 0), (6, 10), (7, 12)],
    &[(7, 11), (8, 13)],
    &[(2, 0), (4, 3), (8, 12), (9, 14)],
    &[(3, 1), (7, 8)],
    &[(4, 2), (8, 9)],
    &[(4, 1), (7, 6)],
    &[(5, 2), (8, 7)],
    &[(6, 3), (11, 12)],
    &[(7, 4), (12, 13)],
    &[(11, 10), (7, 3), (8, 5), (13, 14)],
    &[(12, 11), (8, 4)],
    &[(13, 12), (9, 5)],
];

/// Validates a slot index handed in from outside the crate.
pub fn parse_slot(value: i64) -> Result<u8, PegError> {
    if (0..TOTAL_SLOTS as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PegError::InvalidSlot(value))
    }
}

fn check_slot(slot: u8) -> Result<usize, PegError> {
    parse_slot(slot as i64).map(|v| v as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    index: u8,
    adjacency: &'static [(u8, u8)],
    occupied: bool,
}

impl Slot {
    fn new(index: u8) -> Self {
        Self {
            index,
            adjacency: TOPOLOGY[index as usize],
            occupied: true,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn adjacency(&self) -> &'static [(u8, u8)] {
        self.adjacency
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Slot; TOTAL_SLOTS],
    peg_count: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::full()
    }
}

impl Board {
    /// A board with every slot holding a peg.
    pub fn full() -> Self {
        Self {
            slots: std::array::from_fn(|i| Slot::new(i as u8)),
            peg_count: TOTAL_SLOTS as u8,
        }
    }

    /// A full board with `initially_removed` taken out, in order.
    pub fn new(initially_removed: &[u8]) -> Result<Self, PegError> {
        let mut board = Self::full();
        for &slot in initially_removed {
            let idx = check_slot(slot)?;
            if !board.slots[idx].occupied {
                return Err(PegError::InvalidSlot(slot as i64));
            }
            board.slots[idx].occupied = false;
            board.peg_count -= 1;
        }
        Ok(board)
    }

    pub fn peg_count(&self) -> u8 {
        self.peg_count
    }

    pub fn is_solved(&self) -> bool {
        self.peg_count == 1
    }

    pub fn slot(&self, slot: u8) -> Option<&Slot> {
        self.slots.get(slot as usize)
    }

    pub fn slots(&self) -> &[Slot; TOTAL_SLOTS] {
        &self.slots
    }

    pub fn is_occupied(&self, slot: u8) -> bool {
        self.slot(slot).is_some_and(|s| s.occupied)
    }

    /// Counts pegs by scanning; always equal to `peg_count`.
    pub fn count_occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.occupied).count()
    }

    /// Bit `i` is set when slot `i` holds a peg.
    pub fn occupancy(&self) -> u16 {
        self.slots
            .iter()
            .filter(|s| s.occupied)
            .fold(0, |mask, s| mask | (1 << s.index))
    }

    pub fn remove_first(&mut self, slot: u8) -> Result<(), PegError> {
        let idx = check_slot(slot)?;
        if self.peg_count as usize != TOTAL_SLOTS {
            return Err(PegError::illegal(slot, "pegs were already removed"));
        }
        self.slots[idx].occupied = false;
        self.peg_count -= 1;
        Ok(())
    }

    pub fn apply_jump(&mut self, from: u8, over: u8, to: u8) -> Result<(), PegError> {
        let (from_idx, over_idx, to_idx) = (check_slot(from)?, check_slot(over)?, check_slot(to)?);
        let reason = if !self.slots[from_idx].adjacency.contains(&(over, to)) {
            Some("not a jump on the triangle")
        } else if !self.slots[from_idx].occupied {
            Some("no peg to move")
        } else if !self.slots[over_idx].occupied {
            Some("no peg to jump over")
        } else if self.slots[to_idx].occupied {
            Some("landing slot is occupied")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(PegError::illegal(from, reason));
        }
        self.slots[from_idx].occupied = false;
        self.slots[over_idx].occupied = false;
        self.slots[to_idx].occupied = true;
        self.peg_count -= 1;
        Ok(())
    }

    pub fn legal_jumps_from(&self, slot: u8) -> Result<Jumps, PegError> {
        let idx = check_slot(slot)?;
        let from = &self.slots[idx];
        if !from.occupied {
            return Err(PegError::illegal(slot, "no peg to move"));
        }
        Ok(from
            .adjacency
            .iter()
            .copied()
            .filter(|&(over, to)| self.is_occupied(over) && !self.is_occupied(to))
            .collect())
    }

    pub fn all_legal_jumps(&self) -> AllJumps {
        self.slots
            .iter()
            .filter(|s| s.occupied)
            .filter_map(|s| {
                let jumps = self.legal_jumps_from(s.index).ok()?;
                (!jumps.is_empty()).then_some((s.index, jumps))
            })
            .collect()
    }

    pub fn removed_slots(&self) -> SmallVec<[u8; TOTAL_SLOTS]> {
        self.slots
            .iter()
            .filter(|s| !s.occupied)
            .map(|s| s.index)
            .collect()
    }

    pub fn pretty_print(&self) -> String {
        let mut output = String::new();
        let mut idx = 0;
        for row in 0..TOTAL_ROWS {
            output.push_str(&" ".repeat(TOTAL_ROWS - row - 1));
            let cells: Vec<String> = self.slots[idx..=idx + row]
                .iter()
                .map(|s| String::from(if s.occupied { PEG } else { HOLE }))
                .collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
            idx += row + 1;
        }
        output
    }
}
