use std::ops;

use board_game_traits::Color;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use self::Piece::*;
use self::Role::*;

/// One of the 3 piece roles in Tak. The same as piece, but without different variants for each color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    Flat,
    Standing,
    Cap,
}

/// One of the 6 game pieces in Tak. Each piece has one variant for each color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    WhiteFlat,
    BlackFlat,
    WhiteStanding,
    BlackStanding,
    WhiteCap,
    BlackCap,
}

impl Piece {
    pub fn from_role_color(role: Role, color: Color) -> Self {
        match (role, color) {
            (Flat, Color::White) => WhiteFlat,
            (Standing, Color::White) => WhiteStanding,
            (Cap, Color::White) => WhiteCap,
            (Flat, Color::Black) => BlackFlat,
            (Standing, Color::Black) => BlackStanding,
            (Cap, Color::Black) => BlackCap,
        }
    }

    pub fn role(self) -> Role {
        match self {
            WhiteFlat | BlackFlat => Flat,
            WhiteStanding | BlackStanding => Standing,
            WhiteCap | BlackCap => Cap,
        }
    }

    pub fn color(self) -> Color {
        match self {
            WhiteFlat | WhiteStanding | WhiteCap => Color::White,
            BlackFlat | BlackStanding | BlackCap => Color::Black,
        }
    }

    /// Whether the piece claims its square for road connections when on top.
    /// Only flat stones do; standing stones block, and capstones are
    /// deliberately excluded as well.
    pub fn is_road_piece(self) -> bool {
        self.role() == Flat
    }

    /// The flat piece of the same color. Applied when a capstone lands on a
    /// standing stone.
    pub fn flattened(self) -> Self {
        match self {
            WhiteFlat | WhiteStanding | WhiteCap => WhiteFlat,
            BlackFlat | BlackStanding | BlackCap => BlackFlat,
        }
    }
}

impl ops::Not for Piece {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            WhiteFlat => BlackFlat,
            BlackFlat => WhiteFlat,
            WhiteStanding => BlackStanding,
            BlackStanding => WhiteStanding,
            WhiteCap => BlackCap,
            BlackCap => WhiteCap,
        }
    }
}

/// The contents of a square on the board: zero or more pieces, bottom first.
///
/// Only the top piece decides who controls the square. Pieces below the top
/// are always flat, since a stone gets covered only by a slide, which
/// requires a flat top (or flattens a standing top in the same step).
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stack {
    pieces: SmallVec<[Piece; 8]>,
}

impl Stack {
    pub fn top_stone(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    pub fn get(&self, i: u8) -> Option<Piece> {
        self.pieces.get(i as usize).copied()
    }

    /// Push a new piece to the top of the stack.
    pub fn push(&mut self, piece: Piece) {
        debug_assert!(self
            .top_stone()
            .map(|top| top.role() == Flat)
            .unwrap_or(true));
        self.pieces.push(piece);
    }

    /// Remove the top `n` pieces, returning them bottom-first.
    pub fn take_top(&mut self, n: u8) -> SmallVec<[Piece; 8]> {
        debug_assert!(n as usize <= self.pieces.len());
        let split = self.pieces.len() - n as usize;
        self.pieces.drain(split..).collect()
    }

    /// The top `n` pieces in bottom-first order, without removing them.
    pub fn top_n(&self, n: u8) -> impl Iterator<Item = Piece> + '_ {
        debug_assert!(n as usize <= self.pieces.len());
        self.pieces[self.pieces.len() - n as usize..].iter().copied()
    }

    /// Swap out the top piece, used when a capstone flattens a standing stone.
    pub fn replace_top(&mut self, piece: Piece) -> Option<Piece> {
        let old = self.pieces.pop();
        self.pieces.push(piece);
        old
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Piece> + '_ {
        self.pieces.iter().copied()
    }

    pub fn len(&self) -> u8 {
        self.pieces.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
