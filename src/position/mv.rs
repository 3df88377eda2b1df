use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::square::{Direction, Square};
use crate::position::stack::Role;
use crate::position::MAX_BOARD_SIZE;

/// The ordered drop counts of a stack move: how many pieces are dropped on
/// each square traveled, starting with the square next to the origin. Every
/// entry is positive, and the sum of the entries is the pickup count.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropCounts {
    drops: ArrayVec<u8, MAX_BOARD_SIZE>,
}

impl DropCounts {
    pub fn new() -> Self {
        DropCounts {
            drops: ArrayVec::new(),
        }
    }

    pub fn push(&mut self, drop: u8) {
        self.drops.push(drop);
    }

    /// The number of pieces picked up from the origin square.
    pub fn pickup(&self) -> u8 {
        self.drops.iter().sum()
    }

    /// The number of squares traveled.
    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn last(&self) -> Option<u8> {
        self.drops.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.drops.iter().copied()
    }
}

impl FromIterator<u8> for DropCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        DropCounts {
            drops: iter.into_iter().collect(),
        }
    }
}

/// A move for a position.
///
/// `Place` puts a new stone of the given role on an empty square.
/// `Move` picks up the top of a stack and drops it square by square along a
/// direction, `DropCounts` giving how many pieces each square receives.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move<const S: usize> {
    Place(Role, Square<S>),
    Move(Square<S>, Direction, DropCounts),
}

impl<const S: usize> Move<S> {
    pub fn origin_square(&self) -> Square<S> {
        match self {
            Move::Place(_, square) => *square,
            Move::Move(square, _, _) => *square,
        }
    }
}
