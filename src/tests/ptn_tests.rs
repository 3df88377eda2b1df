use crate::position::{Direction, DropCounts, Move, Role, Square};
use crate::ptn;

#[test]
fn parse_placement_test() {
    assert_eq!(
        ptn::parse_move::<5>("a1").unwrap(),
        Move::Place(Role::Flat, Square::parse_square("a1").unwrap())
    );
    assert_eq!(
        ptn::parse_move::<5>("Fc3").unwrap(),
        Move::Place(Role::Flat, Square::parse_square("c3").unwrap())
    );
    assert_eq!(
        ptn::parse_move::<5>("Sc3").unwrap(),
        Move::Place(Role::Standing, Square::parse_square("c3").unwrap())
    );
    assert_eq!(
        ptn::parse_move::<5>("Ce5").unwrap(),
        Move::Place(Role::Cap, Square::parse_square("e5").unwrap())
    );
}

#[test]
fn parse_stack_move_test() {
    let mv = ptn::parse_move::<5>("3c2>21").unwrap();
    let drops: DropCounts = [2, 1].into_iter().collect();
    assert_eq!(
        mv,
        Move::Move(Square::parse_square("c2").unwrap(), Direction::Right, drops)
    );

    assert_eq!(
        ptn::parse_move::<5>("1a1+1").unwrap(),
        Move::Move(
            Square::parse_square("a1").unwrap(),
            Direction::Up,
            [1].into_iter().collect()
        )
    );
    assert_eq!(
        ptn::parse_move::<5>("5e5<1112").unwrap(),
        Move::Move(
            Square::parse_square("e5").unwrap(),
            Direction::Left,
            [1, 1, 1, 2].into_iter().collect()
        )
    );
}

#[test]
fn format_move_test() {
    for move_string in ["a1", "Sc3", "Ce5", "3c2>21", "1a1+1", "5e5<1112", "2b4-11"] {
        let mv = ptn::parse_move::<5>(move_string).unwrap();
        assert_eq!(mv.to_string(), move_string);
        assert_eq!(ptn::move_to_string(&mv), move_string);
    }
}

// Flat placements are written without their role letter
#[test]
fn flat_prefix_is_not_written_test() {
    let mv = ptn::parse_move::<5>("Fa1").unwrap();
    assert_eq!(mv.to_string(), "a1");
}

#[test]
fn parse_errors_test() {
    for move_string in [
        "", "a", "a0", "a6", "f1", "x1", "Xa1", "Sa6", "1a1*1", "1a1>", "3c2>2", "2c2>111",
        "0a1>0", "2a1>02", "6a1>6", "1a1>11111",
    ] {
        assert!(
            ptn::parse_move::<5>(move_string).is_err(),
            "\"{}\" parsed as a move",
            move_string
        );
    }
}
