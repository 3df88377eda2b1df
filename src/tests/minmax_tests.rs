use std::time::Duration;

use board_game_traits::GameResult::*;
use board_game_traits::{Color, Position as PositionTrait};

use crate::eval::{FlatCountEval, TrivialEval};
use crate::minmax::{self, Eval};
use crate::move_gen;
use crate::position::Position;
use crate::ptn;
use crate::tests::do_moves_and_check_validity;

/// Exhaustive minimax without pruning, for checking the search against.
fn plain_minimax<const S: usize, E: Eval<S>>(position: &Position<S>, depth: u16, eval: &E) -> f32 {
    if let Some(result) = position.game_result() {
        return match result {
            WhiteWin => f32::INFINITY,
            BlackWin => f32::NEG_INFINITY,
            Draw => 0.0,
        };
    }
    if depth == 0 {
        return eval.eval(position);
    }
    let values = position.legal_moves().into_iter().map(|mv| {
        let mut child = position.clone();
        child.do_move(mv);
        plain_minimax(&child, depth - 1, eval)
    });
    match position.side_to_move() {
        Color::White => values.fold(f32::NEG_INFINITY, f32::max),
        Color::Black => values.fold(f32::INFINITY, f32::min),
    }
}

#[test]
fn white_finds_win_in_one_test() {
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(
        &mut position,
        &["b1", "a1", "a2", "b2", "a3", "b3", "a4", "b4"],
    );

    let (mv, value) = minmax::best_move(&position, 1, None, &TrivialEval).unwrap();
    assert_eq!(mv, ptn::parse_move("a5").unwrap());
    assert_eq!(value, f32::INFINITY);

    position.do_move(mv);
    assert_eq!(position.game_result(), Some(WhiteWin));
}

#[test]
fn black_finds_win_in_one_test() {
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(
        &mut position,
        &["b1", "a1", "a2", "b2", "a3", "b3", "a4", "b4", "e1"],
    );

    let (mv, value) = minmax::best_move(&position, 1, None, &TrivialEval).unwrap();
    assert_eq!(mv, ptn::parse_move("b5").unwrap());
    assert_eq!(value, f32::NEG_INFINITY);

    position.do_move(mv);
    assert_eq!(position.game_result(), Some(BlackWin));
}

#[test]
fn white_blocks_black_road_test() {
    // Black threatens b5, and White has no road threat of their own, so any
    // decent depth 2 line must deal with b5
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(
        &mut position,
        &["b1", "a1", "e2", "b2", "e3", "b3", "d2", "b4"],
    );

    let (mv, value) = minmax::best_move(&position, 2, None, &FlatCountEval::default()).unwrap();
    assert!(value > f32::NEG_INFINITY, "Engine gave up: {} {}", mv, value);
    position.do_move(mv.clone());
    let (_, reply_value) = minmax::best_move(&position, 1, None, &FlatCountEval::default()).unwrap();
    assert!(
        reply_value > f32::NEG_INFINITY,
        "Black still wins after {}",
        mv
    );
}

#[test]
fn search_matches_plain_minimax_test() {
    let mut position = <Position<3>>::start_position();
    do_moves_and_check_validity(&mut position, &["a1", "c3", "b2", "c1"]);

    let eval = FlatCountEval::default();
    let ranked = minmax::search(&position, 2, None, &eval, move_gen::shared_table());
    assert!(!ranked.is_empty());

    for (mv, value) in &ranked {
        let mut child = position.clone();
        child.do_move(mv.clone());
        assert_eq!(
            *value,
            plain_minimax(&child, 1, &eval),
            "Wrong value for root move {}",
            mv
        );
    }

    let root_value = plain_minimax(&position, 2, &eval);
    assert_eq!(ranked[0].1, root_value);
}

#[test]
fn ranking_is_sorted_test() {
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(&mut position, &["a1", "e5", "c3", "c4"]);

    let ranked = minmax::search(
        &position,
        1,
        None,
        &FlatCountEval::default(),
        move_gen::shared_table(),
    );
    assert_eq!(position.side_to_move(), Color::White);
    for window in ranked.windows(2) {
        assert!(window[0].1 >= window[1].1);
    }
}

#[test]
fn expired_budget_still_returns_a_move_test() {
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(&mut position, &["a1", "e5"]);

    let ranked = minmax::search(
        &position,
        3,
        Some(Duration::ZERO),
        &FlatCountEval::default(),
        move_gen::shared_table(),
    );
    assert!(!ranked.is_empty());
}

#[test]
fn no_move_in_finished_game_test() {
    let mut position = <Position<5>>::start_position();
    do_moves_and_check_validity(
        &mut position,
        &["b1", "a1", "a2", "b2", "a3", "b3", "a4", "b4", "a5"],
    );
    assert!(minmax::best_move(&position, 1, None, &TrivialEval).is_none());
}
