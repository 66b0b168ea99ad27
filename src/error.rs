use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegError {
    /// A slot index outside `0..TOTAL_SLOTS`, or one removed twice.
    InvalidSlot(i64),
    /// A removal, jump or jump query whose occupancy preconditions do not hold.
    IllegalMove { slot: u8, reason: &'static str },
}

impl PegError {
    pub(crate) fn illegal(slot: u8, reason: &'static str) -> Self {
        PegError::IllegalMove { slot, reason }
    }

    pub fn is_illegal_move(&self) -> bool {
        matches!(self, PegError::IllegalMove { .. })
    }
}

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegError::InvalidSlot(slot) => write!(f, "Invalid slot {slot}; expected 0 to 14"),
            PegError::IllegalMove { slot, reason } => {
                write!(f, "Illegal move at slot {slot}: {reason}")
            }
        }
    }
}

impl std::error::Error for PegError {}
