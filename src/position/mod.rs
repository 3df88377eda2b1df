//! The Tak board and rules, along with all required data types.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::{array, error};

use board_game_traits::GameResult::{BlackWin, Draw, WhiteWin};
use board_game_traits::{Color, GameResult, Position as PositionTrait};

pub mod mv;
pub mod square;
pub mod stack;

pub use mv::{DropCounts, Move};
pub use square::{squares_iterator, Direction, Square};
pub use stack::{Piece, Role, Stack};

use crate::road::RoadGraph;

pub const MAX_BOARD_SIZE: usize = 8;

pub const fn starting_stones<const S: usize>() -> u8 {
    match S {
        3 => 10,
        4 => 16,
        5 => 21,
        6 => 30,
        7 => 40,
        8 => 50,
        _ => 0,
    }
}

pub const fn starting_capstones<const S: usize>() -> u8 {
    match S {
        3 => 0,
        4 => 0,
        5 => 1,
        6 => 1,
        7 => 2,
        8 => 2,
        _ => 0,
    }
}

/// The reason a move was rejected. Every variant is a local, recoverable
/// condition; rejection leaves the position untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleViolation {
    /// The move's path runs off the board.
    OutOfBounds,
    /// The game has already ended.
    GameOver,
    /// A side's first ply must place a flat stone.
    OpeningRuleViolation,
    /// Placement on a non-empty square.
    OccupiedSquare,
    /// No stones of the placed kind remaining.
    InsufficientInventory,
    /// Stack move from a square the mover does not control.
    NotOwner,
    /// Pickup exceeds the stack height or the board size.
    InsufficientStack,
    /// An intermediate landing square is not flat-topped.
    BlockedPath,
    /// The final landing square is not flat-topped, and the rules for a
    /// capstone flattening a standing stone are not met.
    InvalidCapstoneFlatten,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleViolation::OutOfBounds => write!(f, "Move runs off the board."),
            RuleViolation::GameOver => write!(f, "Game is over."),
            RuleViolation::OpeningRuleViolation => {
                write!(f, "First moves must place a flat stone.")
            }
            RuleViolation::OccupiedSquare => {
                write!(f, "Cannot place stone, square already occupied.")
            }
            RuleViolation::InsufficientInventory => {
                write!(f, "Cannot place stone, no stones of that kind left.")
            }
            RuleViolation::NotOwner => {
                write!(f, "Cannot move stack, player does not control the stack.")
            }
            RuleViolation::InsufficientStack => {
                write!(f, "Cannot move stack, not enough stones to pick up.")
            }
            RuleViolation::BlockedPath => {
                write!(f, "Cannot move stack, a stone in the path is not flat.")
            }
            RuleViolation::InvalidCapstoneFlatten => write!(
                f,
                "Cannot move stack, only a lone capstone may flatten a standing stone."
            ),
        }
    }
}

impl error::Error for RuleViolation {}

/// A generic board of squares, used for the grid of stacks and scratch data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct AbstractBoard<T, const S: usize> {
    raw: [[T; S]; S],
}

impl<T, const S: usize> AbstractBoard<T, S> {
    pub fn new_from_fn<F>(mut f: F) -> Self
    where
        F: FnMut() -> T,
    {
        AbstractBoard {
            raw: array::from_fn(|_| array::from_fn(|_| f())),
        }
    }
}

impl<T, const S: usize> Index<Square<S>> for AbstractBoard<T, S> {
    type Output = T;

    fn index(&self, square: Square<S>) -> &Self::Output {
        &self.raw[square.rank() as usize][square.file() as usize]
    }
}

impl<T, const S: usize> AbstractBoard<T, S> {
    fn get_mut(&mut self, square: Square<S>) -> &mut T {
        &mut self.raw[square.rank() as usize][square.file() as usize]
    }
}

/// A whole game of Tak: the grid of stacks, both players' inventories, the
/// side to move and the game's result once decided.
///
/// Moves are applied with `do_move` (no legality check, used by search) or
/// `do_move_checked` (full validation first). The road ownership projection
/// is updated here, inside the operations that change a square's top stone,
/// so it can never diverge from the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position<const S: usize> {
    cells: AbstractBoard<Stack, S>,
    to_move: Color,
    white_stones_left: u8,
    black_stones_left: u8,
    white_caps_left: u8,
    black_caps_left: u8,
    half_moves_played: u16,
    result: Option<GameResult>,
    road: RoadGraph<S>,
}

impl<const S: usize> Default for Position<S> {
    fn default() -> Self {
        Position {
            cells: AbstractBoard::new_from_fn(Stack::default),
            to_move: Color::White,
            white_stones_left: starting_stones::<S>(),
            black_stones_left: starting_stones::<S>(),
            white_caps_left: starting_capstones::<S>(),
            black_caps_left: starting_capstones::<S>(),
            half_moves_played: 0,
            result: None,
            road: RoadGraph::default(),
        }
    }
}

impl<const S: usize> Index<Square<S>> for Position<S> {
    type Output = Stack;

    fn index(&self, square: Square<S>) -> &Self::Output {
        &self.cells[square]
    }
}

impl<const S: usize> Position<S> {
    pub fn half_moves_played(&self) -> u16 {
        self.half_moves_played
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn road_graph(&self) -> &RoadGraph<S> {
        &self.road
    }

    pub fn stones_left(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_stones_left,
            Color::Black => self.black_stones_left,
        }
    }

    pub fn caps_left(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_caps_left,
            Color::Black => self.black_caps_left,
        }
    }

    /// The owner of the next stone to be placed. During each side's first
    /// ply, placements put down a stone owned by the opponent.
    pub fn color_to_place(&self) -> Color {
        if self.half_moves_played < 2 {
            !self.to_move
        } else {
            self.to_move
        }
    }

    /// Validates the move against the current position without mutating
    /// anything, reporting the first violated rule.
    pub fn validate_move(&self, mv: &Move<S>) -> Result<(), RuleViolation> {
        if self.result.is_some() {
            return Err(RuleViolation::GameOver);
        }
        if self.half_moves_played < 2 && !matches!(mv, Move::Place(Role::Flat, _)) {
            return Err(RuleViolation::OpeningRuleViolation);
        }
        match mv {
            Move::Place(role, square) => self.validate_placement(*role, *square),
            Move::Move(square, direction, drops) => {
                self.validate_stack_move(*square, *direction, drops)
            }
        }
    }

    pub fn is_legal(&self, mv: &Move<S>) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Validates the move, then applies it. On rejection the position is
    /// left untouched.
    pub fn do_move_checked(&mut self, mv: Move<S>) -> Result<Self, RuleViolation> {
        self.validate_move(&mv)?;
        Ok(self.do_move(mv))
    }

    fn validate_placement(&self, role: Role, square: Square<S>) -> Result<(), RuleViolation> {
        if !self[square].is_empty() {
            return Err(RuleViolation::OccupiedSquare);
        }
        let owner = self.color_to_place();
        let available = match role {
            Role::Cap => self.caps_left(owner),
            Role::Flat | Role::Standing => self.stones_left(owner),
        };
        if available == 0 {
            return Err(RuleViolation::InsufficientInventory);
        }
        Ok(())
    }

    fn validate_stack_move(
        &self,
        square: Square<S>,
        direction: Direction,
        drops: &DropCounts,
    ) -> Result<(), RuleViolation> {
        let top = self[square].top_stone().ok_or(RuleViolation::NotOwner)?;
        if top.color() != self.to_move {
            return Err(RuleViolation::NotOwner);
        }

        let pickup = drops.pickup();
        if drops.is_empty()
            || drops.iter().any(|drop| drop == 0)
            || pickup > self[square].len()
            || pickup as usize > S
        {
            return Err(RuleViolation::InsufficientStack);
        }

        let steps = drops.len();
        let mut landing = square;
        for (i, _) in drops.iter().enumerate() {
            landing = landing
                .go_direction(direction)
                .ok_or(RuleViolation::OutOfBounds)?;
            match self[landing].top_stone().map(Piece::role) {
                None | Some(Role::Flat) => (),
                Some(_) if i + 1 < steps => return Err(RuleViolation::BlockedPath),
                Some(Role::Standing) => {
                    // A lone capstone may finish on a standing stone
                    if top.role() != Role::Cap || drops.last() != Some(1) {
                        return Err(RuleViolation::InvalidCapstoneFlatten);
                    }
                }
                Some(_) => return Err(RuleViolation::InvalidCapstoneFlatten),
            }
        }
        Ok(())
    }

    /// Refresh the road projection for a square whose top stone may have
    /// changed. This is the only write path into the projection.
    fn update_road(&mut self, square: Square<S>) {
        let owner = self[square]
            .top_stone()
            .filter(|piece| piece.is_road_piece())
            .map(Piece::color);
        self.road.update_square(square, owner);
    }

    /// The result after the given color just moved: their road first, then
    /// the opponent's (a move completing both roads at once goes to the
    /// mover), then stone exhaustion or a full board resolved by flat count.
    fn check_termination(&self, mover: Color) -> Option<GameResult> {
        for color in [mover, !mover] {
            if self.road.is_top_to_bottom(color) || self.road.is_left_to_right(color) {
                return Some(match color {
                    Color::White => WhiteWin,
                    Color::Black => BlackWin,
                });
            }
        }

        let next = !mover;
        let board_full = squares_iterator::<S>().all(|square| !self[square].is_empty());
        if (self.stones_left(next) == 0 && self.caps_left(next) == 0) || board_full {
            return Some(self.flat_count_result());
        }

        None
    }

    /// Majority of flat-topped squares. Standing stones and capstones count
    /// for neither side.
    fn flat_count_result(&self) -> GameResult {
        let mut white_flats = 0;
        let mut black_flats = 0;
        for square in squares_iterator::<S>() {
            match self[square].top_stone() {
                Some(piece) if piece.role() == Role::Flat => match piece.color() {
                    Color::White => white_flats += 1,
                    Color::Black => black_flats += 1,
                },
                _ => (),
            }
        }
        match white_flats.cmp(&black_flats) {
            Ordering::Greater => WhiteWin,
            Ordering::Less => BlackWin,
            Ordering::Equal => Draw,
        }
    }

    fn count_all_pieces(&self) -> u8 {
        squares_iterator::<S>()
            .map(|square| self[square].len())
            .sum()
    }
}

impl<const S: usize> PositionTrait for Position<S> {
    type Move = Move<S>;
    type ReverseMove = Self;

    fn start_position() -> Self {
        Self::default()
    }

    fn side_to_move(&self) -> Color {
        self.to_move
    }

    fn generate_moves(&self, moves: &mut Vec<Self::Move>) {
        self.generate_moves_with_table(moves, crate::move_gen::shared_table());
    }

    /// Applies the move with no legality check, then evaluates termination
    /// and either flips the side to move or records the result.
    fn do_move(&mut self, mv: Self::Move) -> Self::ReverseMove {
        let reverse_move = self.clone();
        debug_assert!(self.result.is_none(), "Tried to move in a finished game");

        match mv {
            Move::Place(role, to) => {
                debug_assert!(self[to].is_empty());
                let owner = self.color_to_place();
                let piece = Piece::from_role_color(role, owner);
                self.cells.get_mut(to).push(piece);
                match (owner, role) {
                    (Color::White, Role::Flat) => self.white_stones_left -= 1,
                    (Color::White, Role::Standing) => self.white_stones_left -= 1,
                    (Color::White, Role::Cap) => self.white_caps_left -= 1,
                    (Color::Black, Role::Flat) => self.black_stones_left -= 1,
                    (Color::Black, Role::Standing) => self.black_stones_left -= 1,
                    (Color::Black, Role::Cap) => self.black_caps_left -= 1,
                }
                self.update_road(to);
            }
            Move::Move(square, direction, drops) => {
                let carried = self.cells.get_mut(square).take_top(drops.pickup());
                self.update_road(square);

                let mut landing = square;
                let mut taken = 0;
                for drop in drops.iter() {
                    landing = landing.go_direction(direction).unwrap();

                    if let Some(top) = self[landing].top_stone() {
                        if top.role() == Role::Standing {
                            debug_assert_eq!(carried.last().map(|piece| piece.role()), Some(Role::Cap));
                            self.cells.get_mut(landing).replace_top(top.flattened());
                        }
                    }

                    for piece in &carried[taken..taken + drop as usize] {
                        self.cells.get_mut(landing).push(*piece);
                    }
                    taken += drop as usize;
                    self.update_road(landing);
                }
            }
        }

        debug_assert_eq!(
            2 * (starting_stones::<S>() + starting_capstones::<S>())
                - self.white_stones_left
                - self.black_stones_left
                - self.white_caps_left
                - self.black_caps_left,
            self.count_all_pieces(),
            "Wrong number of stones on board:\n{:?}",
            self
        );

        self.half_moves_played += 1;
        self.result = self.check_termination(self.to_move);
        if self.result.is_none() {
            self.to_move = !self.to_move;
        }

        reverse_move
    }

    fn reverse_move(&mut self, reverse_move: Self::ReverseMove) {
        *self = reverse_move;
    }

    fn game_result(&self) -> Option<GameResult> {
        self.result
    }
}

impl<const S: usize> fmt::Display for Position<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..S as u8).rev() {
            for print_row in 0..3 {
                for file in 0..S as u8 {
                    let square = Square::from_file_rank(file, rank);
                    for print_column in 0..3 {
                        match self[square].get(print_column * 3 + print_row) {
                            None => write!(f, "[.]")?,
                            Some(Piece::WhiteFlat) => write!(f, "[w]")?,
                            Some(Piece::WhiteStanding) => write!(f, "[W]")?,
                            Some(Piece::WhiteCap) => write!(f, "[C]")?,
                            Some(Piece::BlackFlat) => write!(f, "[b]")?,
                            Some(Piece::BlackStanding) => write!(f, "[B]")?,
                            Some(Piece::BlackCap) => write!(f, "[c]")?,
                        }
                    }
                    write!(f, " ")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(
            f,
            "Stones left: {}/{}.",
            self.white_stones_left, self.black_stones_left
        )?;
        writeln!(
            f,
            "Capstones left: {}/{}.",
            self.white_caps_left, self.black_caps_left
        )?;
        match self.result {
            None => writeln!(f, "{} to move.", self.to_move)?,
            Some(result) => writeln!(f, "Game over: {:?}.", result)?,
        }
        Ok(())
    }
}
