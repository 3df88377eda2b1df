//! Road connectivity queries.
//!
//! `RoadGraph` keeps a per-square ownership projection: the color whose flat
//! stone tops the square, or `None` for empty squares and squares topped by
//! standing stones or capstones. Four sentinel rail nodes frame the board,
//! with asymmetric adjacency to prevent "backwash": `Left` and `Top` have
//! directed edges *into* every owned square on their edge, while `Right` and
//! `Bottom` have no outgoing edges and are only reachable *from* owned
//! squares on theirs. Without the asymmetry, two corners and a third edge
//! could falsely connect, say, `Left` to `Right`.
//!
//! The projection is a derived view of the board, updated by `Position` in
//! the same operation that changes a square's top stone.

use std::collections::VecDeque;
use std::fmt;

use board_game_traits::Color;

use crate::position::square::{squares_iterator, Square};

/// The four sentinel rail nodes framing the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Rail {
    Top,
    Bottom,
    Left,
    Right,
}

impl Rail {
    /// Whether the square lies on this rail's board edge, i.e. whether there
    /// is an edge between the rail and the square when the square is owned.
    fn touches<const S: usize>(self, square: Square<S>) -> bool {
        match self {
            Rail::Top => square.rank() == S as u8 - 1,
            Rail::Bottom => square.rank() == 0,
            Rail::Left => square.file() == 0,
            Rail::Right => square.file() == S as u8 - 1,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoadGraph<const S: usize> {
    // owners[rank][file]
    owners: [[Option<Color>; S]; S],
}

impl<const S: usize> Default for RoadGraph<S> {
    fn default() -> Self {
        RoadGraph {
            owners: [[None; S]; S],
        }
    }
}

impl<const S: usize> RoadGraph<S> {
    pub fn owner(&self, square: Square<S>) -> Option<Color> {
        self.owners[square.rank() as usize][square.file() as usize]
    }

    /// O(1) projection write. Called by `Position` whenever a square's top
    /// stone changes.
    pub(crate) fn update_square(&mut self, square: Square<S>, owner: Option<Color>) {
        self.owners[square.rank() as usize][square.file() as usize] = owner;
    }

    /// Whether `player` has a road connecting the left and right board edges.
    pub fn is_left_to_right(&self, player: Color) -> bool {
        self.is_connected(Rail::Left, Rail::Right, player)
    }

    /// Whether `player` has a road connecting the top and bottom board edges.
    pub fn is_top_to_bottom(&self, player: Color) -> bool {
        self.is_connected(Rail::Top, Rail::Bottom, player)
    }

    /// Breadth-first reachability from `start` to `end`, restricted to
    /// squares owned by `player`. The search enters the board only through
    /// `start`'s edge and leaves it only into `end`, which is what makes the
    /// sentinel adjacency directed.
    fn is_connected(&self, start: Rail, end: Rail, player: Color) -> bool {
        let mut visited = [[false; S]; S];
        let mut queue: VecDeque<Square<S>> = squares_iterator::<S>()
            .filter(|square| start.touches(*square) && self.owner(*square) == Some(player))
            .collect();

        while let Some(square) = queue.pop_front() {
            if visited[square.rank() as usize][square.file() as usize] {
                continue;
            }
            visited[square.rank() as usize][square.file() as usize] = true;

            if end.touches(square) {
                return true;
            }

            for neighbor in square.neighbors() {
                if self.owner(neighbor) == Some(player)
                    && !visited[neighbor.rank() as usize][neighbor.file() as usize]
                {
                    queue.push_back(neighbor);
                }
            }
        }

        false
    }
}

impl<const S: usize> fmt::Display for RoadGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..S).rev() {
            for file in 0..S {
                match self.owners[rank][file] {
                    Some(Color::White) => write!(f, "W")?,
                    Some(Color::Black) => write!(f, "B")?,
                    None => write!(f, "_")?,
                }
                if file + 1 < S {
                    write!(f, " ")?;
                }
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
