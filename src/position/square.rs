use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::Direction::*;

/// One of the four cardinal directions on the board.
///
/// `Up` increases the rank, towards the top edge of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn parse(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Up),
            '-' => Some(Down),
            '<' => Some(Left),
            '>' => Some(Right),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Up => '+',
            Down => '-',
            Left => '<',
            Right => '>',
        }
    }
}

/// A location on the board. Can be used to index a `Position`.
///
/// File 0 is the `a` file on the left edge, rank 0 is rank `1`
/// on the bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square<const S: usize> {
    inner: u8,
}

impl<const S: usize> Square<S> {
    pub const fn from_u8(inner: u8) -> Self {
        assert!((inner as usize) < S * S);
        Square { inner }
    }

    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        assert!(file < S as u8 && rank < S as u8);
        Square {
            inner: rank * S as u8 + file,
        }
    }

    pub const fn into_inner(self) -> u8 {
        self.inner
    }

    pub const fn file(self) -> u8 {
        self.inner % S as u8
    }

    pub const fn rank(self) -> u8 {
        self.inner / S as u8
    }

    pub fn go_direction(self, direction: Direction) -> Option<Self> {
        match direction {
            Up => {
                if self.rank() + 1 < S as u8 {
                    Some(Square::from_file_rank(self.file(), self.rank() + 1))
                } else {
                    None
                }
            }
            Down => {
                if self.rank() > 0 {
                    Some(Square::from_file_rank(self.file(), self.rank() - 1))
                } else {
                    None
                }
            }
            Left => {
                if self.file() > 0 {
                    Some(Square::from_file_rank(self.file() - 1, self.rank()))
                } else {
                    None
                }
            }
            Right => {
                if self.file() + 1 < S as u8 {
                    Some(Square::from_file_rank(self.file() + 1, self.rank()))
                } else {
                    None
                }
            }
        }
    }

    pub fn neighbors(self) -> impl Iterator<Item = Square<S>> {
        Direction::ALL
            .iter()
            .filter_map(move |direction| self.go_direction(*direction))
    }

    pub fn parse_square(input: &str) -> Result<Self, pgn_traits::Error> {
        let mut chars = input.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file_ch), Some(rank_ch), None) => Self::parse_file_rank(file_ch, rank_ch),
            _ => Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse square \"{}\"",
                input
            ))),
        }
    }

    pub fn parse_file_rank(file_ch: char, rank_ch: char) -> Result<Self, pgn_traits::Error> {
        let file = (file_ch as u32).wrapping_sub('a' as u32);
        let rank = rank_ch.to_digit(10).map(|digit| digit.wrapping_sub(1));
        match (file, rank) {
            (file, Some(rank)) if file < S as u32 && rank < S as u32 => {
                Ok(Square::from_file_rank(file as u8, rank as u8))
            }
            _ => Err(pgn_traits::Error::new_parse_error(format!(
                "Couldn't parse square \"{}{}\" on {}s board",
                file_ch, rank_ch, S
            ))),
        }
    }
}

impl<const S: usize> fmt::Display for Square<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

/// Iterate over all squares of the board, bottom rank first.
pub fn squares_iterator<const S: usize>() -> impl Iterator<Item = Square<S>> {
    (0..(S * S) as u8).map(Square::from_u8)
}
