//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The root never prunes: every root move is searched with a full window, so
//! the returned values are exact for the chosen depth and the ranking of all
//! root moves is meaningful, not just the best entry. Pruning only happens
//! below the root, where it cannot change any root value.
//!
//! An optional time budget is enforced cooperatively between sibling nodes.
//! When the deadline passes, partially searched interior nodes fall back to
//! their static evaluation, and no further root moves are started.

use std::time::{Duration, Instant};

use board_game_traits::{Color, GameResult, Position as PositionTrait};

use crate::move_gen::{self, CompositionTable};
use crate::position::{Move, Position};

/// A static evaluation of a position, positive when White is better.
/// Terminal positions are never evaluated; search scores them directly.
pub trait Eval<const S: usize> {
    fn eval(&self, position: &Position<S>) -> f32;
}

fn result_value(result: GameResult) -> f32 {
    match result {
        GameResult::WhiteWin => f32::INFINITY,
        GameResult::BlackWin => f32::NEG_INFINITY,
        GameResult::Draw => 0.0,
    }
}

fn out_of_time(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

/// Searches to `depth` plies and returns the best move with its value, or
/// `None` for a finished game.
pub fn best_move<const S: usize, E: Eval<S>>(
    position: &Position<S>,
    depth: u16,
    budget: Option<Duration>,
    eval: &E,
) -> Option<(Move<S>, f32)> {
    if position.is_game_over() {
        return None;
    }
    search(position, depth, budget, eval, move_gen::shared_table())
        .into_iter()
        .next()
}

/// The value of the position at `depth` plies, from White's perspective.
pub fn best_value<const S: usize, E: Eval<S>>(
    position: &Position<S>,
    depth: u16,
    budget: Option<Duration>,
    eval: &E,
) -> Option<f32> {
    best_move(position, depth, budget, eval).map(|(_, value)| value)
}

/// Searches every root move to `depth` plies and returns them ranked best
/// first for the side to move. Ties keep move generation order.
///
/// The first root move is always searched in full, so the result is
/// non-empty even on an expired budget.
pub fn search<const S: usize, E: Eval<S>>(
    position: &Position<S>,
    depth: u16,
    budget: Option<Duration>,
    eval: &E,
    table: &CompositionTable,
) -> Vec<(Move<S>, f32)> {
    debug_assert!(!position.is_game_over(), "Tried to search a finished game");

    let start_time = Instant::now();
    let deadline = budget.map(|budget| start_time + budget);
    let mut moves = vec![];
    position.generate_moves_with_table(&mut moves, table);

    let mut nodes = 0;
    let mut ranked: Vec<(Move<S>, f32)> = Vec::with_capacity(moves.len());
    for mv in moves {
        if !ranked.is_empty() && out_of_time(deadline) {
            break;
        }
        let mut child = position.clone();
        child.do_move(mv.clone());
        let value = eval_node(
            &child,
            depth.saturating_sub(1),
            f32::NEG_INFINITY,
            f32::INFINITY,
            eval,
            table,
            deadline,
            &mut nodes,
        );
        ranked.push((mv, value));
    }

    match position.side_to_move() {
        Color::White => ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a)),
        Color::Black => ranked.sort_by(|(_, a), (_, b)| a.total_cmp(b)),
    }

    log::debug!(
        "Searched {} nodes to depth {} in {:.1}s",
        nodes,
        depth,
        start_time.elapsed().as_secs_f32()
    );
    ranked
}

#[allow(clippy::too_many_arguments)]
fn eval_node<const S: usize, E: Eval<S>>(
    position: &Position<S>,
    depth: u16,
    mut alpha: f32,
    mut beta: f32,
    eval: &E,
    table: &CompositionTable,
    deadline: Option<Instant>,
    nodes: &mut u64,
) -> f32 {
    *nodes += 1;

    if let Some(result) = position.game_result() {
        return result_value(result);
    }
    if depth == 0 {
        return eval.eval(position);
    }

    let mut moves = vec![];
    position.generate_moves_with_table(&mut moves, table);
    debug_assert!(!moves.is_empty());

    let maximizing = position.side_to_move() == Color::White;
    let mut best: Option<f32> = None;
    for mv in moves {
        if out_of_time(deadline) {
            break;
        }
        let mut child = position.clone();
        child.do_move(mv);
        let value = eval_node(&child, depth - 1, alpha, beta, eval, table, deadline, nodes);
        if maximizing {
            best = Some(best.map_or(value, |best| best.max(value)));
            alpha = alpha.max(value);
        } else {
            best = Some(best.map_or(value, |best| best.min(value)));
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }

    // Out of time before the first child: score the node statically
    best.unwrap_or_else(|| eval.eval(position))
}
