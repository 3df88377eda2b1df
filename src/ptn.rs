//! Reading and writing moves in portable text notation.
//!
//! Placements are written as the square with an optional role prefix:
//! `a1` places a flat stone, `Sa1` a standing stone, `Ca1` a capstone.
//! Stack moves are written as the pickup count, the origin square, a
//! direction (`+` up, `-` down, `<` left, `>` right) and one digit per
//! square traveled giving that square's drop count: `3c2>21`.

use std::fmt;
use std::fmt::Write;

use pgn_traits::Error;

use crate::position::{Direction, DropCounts, Move, Role, Square};

pub fn parse_move<const S: usize>(input: &str) -> Result<Move<S>, Error> {
    let chars: Vec<char> = input.chars().collect();
    match chars.as_slice() {
        [file, rank] => Ok(Move::Place(
            Role::Flat,
            Square::parse_file_rank(*file, *rank)?,
        )),
        [role_ch, file, rank] if matches!(role_ch, 'F' | 'S' | 'C') => {
            let role = match role_ch {
                'F' => Role::Flat,
                'S' => Role::Standing,
                _ => Role::Cap,
            };
            Ok(Move::Place(role, Square::parse_file_rank(*file, *rank)?))
        }
        [pickup_ch, file, rank, direction_ch, drop_chs @ ..]
            if pickup_ch.is_ascii_digit() && !drop_chs.is_empty() =>
        {
            let square = Square::parse_file_rank(*file, *rank)?;
            let direction = Direction::parse(*direction_ch).ok_or_else(|| {
                Error::new_parse_error(format!(
                    "Illegal direction '{}' in move \"{}\"",
                    direction_ch, input
                ))
            })?;
            let pickup = pickup_ch.to_digit(10).unwrap() as u8;
            if pickup == 0 || pickup as usize > S {
                return Err(Error::new_parse_error(format!(
                    "Illegal pickup count {} in move \"{}\" on {}s board",
                    pickup, input, S
                )));
            }
            if drop_chs.len() >= S {
                return Err(Error::new_parse_error(format!(
                    "Too many drop counts in move \"{}\" on {}s board",
                    input, S
                )));
            }
            let mut drops = DropCounts::new();
            for drop_ch in drop_chs {
                match drop_ch.to_digit(10) {
                    Some(drop) if drop > 0 => drops.push(drop as u8),
                    _ => {
                        return Err(Error::new_parse_error(format!(
                            "Illegal drop count '{}' in move \"{}\"",
                            drop_ch, input
                        )))
                    }
                }
            }
            if drops.pickup() != pickup {
                return Err(Error::new_parse_error(format!(
                    "Drop counts don't sum to the pickup count in move \"{}\"",
                    input
                )));
            }
            Ok(Move::Move(square, direction, drops))
        }
        _ => Err(Error::new_parse_error(format!(
            "Couldn't parse move \"{}\"",
            input
        ))),
    }
}

pub fn move_to_string<const S: usize>(mv: &Move<S>) -> String {
    let mut string = String::new();
    match mv {
        Move::Place(Role::Flat, square) => write!(string, "{}", square).unwrap(),
        Move::Place(Role::Standing, square) => write!(string, "S{}", square).unwrap(),
        Move::Place(Role::Cap, square) => write!(string, "C{}", square).unwrap(),
        Move::Move(square, direction, drops) => {
            write!(string, "{}{}{}", drops.pickup(), square, direction.to_char()).unwrap();
            for drop in drops.iter() {
                write!(string, "{}", drop).unwrap();
            }
        }
    }
    string
}

impl<const S: usize> fmt::Display for Move<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", move_to_string(self))
    }
}
