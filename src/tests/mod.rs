#[cfg(test)]
mod minmax_tests;
#[cfg(test)]
mod ptn_tests;
#[cfg(test)]
mod road_tests;

#[cfg(test)]
use board_game_traits::Position as PositionTrait;

#[cfg(test)]
use crate::position::Position;
#[cfg(test)]
use crate::ptn;

#[cfg(test)]
fn do_moves_and_check_validity<const S: usize>(position: &mut Position<S>, move_strings: &[&str]) {
    let mut moves = vec![];
    for move_string in move_strings {
        let mv = ptn::parse_move(move_string).unwrap();
        position.generate_moves(&mut moves);
        assert!(
            moves.contains(&mv),
            "Move {} was not among legal moves: {:?}\n{}",
            move_string,
            moves,
            position
        );
        assert_eq!(position.validate_move(&mv), Ok(()));
        position.do_move(mv);
        moves.clear();
    }
}
