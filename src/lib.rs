//! A library of the rules of Tak, with a minimax engine on top.
//!
//! The core type is `position::Position`, which implements the
//! `board_game_traits::Position` trait and is generic over board sizes 3
//! through 8. Moves can be validated one at a time with
//! `Position::validate_move`, or generated in bulk through `move_gen`.
//! Road detection lives in `road`, text notation in `ptn`, and the
//! alpha-beta search with its evaluations in `minmax` and `eval`.

pub mod eval;
pub mod minmax;
pub mod move_gen;
pub mod position;
pub mod ptn;
pub mod road;

mod tests;
