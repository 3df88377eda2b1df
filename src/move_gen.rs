//! Move generation for a position.
//!
//! Stack moves are built from integer compositions: a pickup of `n` pieces
//! spread over `m` squares is a composition of `n` into exactly `m` positive
//! parts. The compositions for each `(n, m)` pair are computed once and
//! cached in a `CompositionTable`, shared between all positions by default.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use board_game_traits::Position as PositionTrait;

use crate::position::{
    squares_iterator, Direction, DropCounts, Move, Piece, Position, Role, Square,
};

/// The process-wide composition cache used by `PositionTrait::generate_moves`.
pub fn shared_table() -> &'static CompositionTable {
    static SHARED_TABLE: OnceLock<CompositionTable> = OnceLock::new();
    SHARED_TABLE.get_or_init(CompositionTable::new)
}

/// Memoized compositions of a pickup count into exactly `steps` positive
/// parts, in lexicographic order. There are C(total - 1, steps - 1) of them.
#[derive(Default, Debug)]
pub struct CompositionTable {
    cache: Mutex<HashMap<(u8, u8), Arc<Vec<DropCounts>>>>,
}

impl CompositionTable {
    pub fn new() -> Self {
        CompositionTable {
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn compositions(&self, total: u8, steps: u8) -> Arc<Vec<DropCounts>> {
        if let Some(hit) = self.cache.lock().unwrap().get(&(total, steps)) {
            return hit.clone();
        }
        let computed = Arc::new(Self::compute(total, steps));
        self.cache
            .lock()
            .unwrap()
            .insert((total, steps), computed.clone());
        computed
    }

    fn compute(total: u8, steps: u8) -> Vec<DropCounts> {
        if steps == 0 {
            // The empty composition, for a total of zero only
            return if total == 0 {
                vec![DropCounts::new()]
            } else {
                vec![]
            };
        }
        let mut result = vec![];
        for first in 1..=total.saturating_sub(steps - 1) {
            for tail in Self::compute(total - first, steps - 1) {
                let mut drops = DropCounts::new();
                drops.push(first);
                for drop in tail.iter() {
                    drops.push(drop);
                }
                result.push(drops);
            }
        }
        result
    }
}

impl<const S: usize> Position<S> {
    /// All legal moves, as a fresh vector.
    pub fn legal_moves(&self) -> Vec<Move<S>> {
        let mut moves = vec![];
        self.generate_moves(&mut moves);
        moves
    }

    /// Generates all legal moves into `moves`, reusing `table` for drop
    /// count compositions. Must not be called on a finished game.
    pub fn generate_moves_with_table(&self, moves: &mut Vec<Move<S>>, table: &CompositionTable) {
        debug_assert!(
            !self.is_game_over(),
            "Tried to generate moves for a finished game"
        );

        // Each side's first ply places an opponent-owned flat stone
        if self.half_moves_played() < 2 {
            for square in squares_iterator::<S>() {
                if self[square].is_empty() {
                    moves.push(Move::Place(Role::Flat, square));
                }
            }
            return;
        }

        let placer = self.color_to_place();
        for square in squares_iterator::<S>() {
            match self[square].top_stone() {
                None => {
                    if self.stones_left(placer) > 0 {
                        moves.push(Move::Place(Role::Flat, square));
                        moves.push(Move::Place(Role::Standing, square));
                    }
                    if self.caps_left(placer) > 0 {
                        moves.push(Move::Place(Role::Cap, square));
                    }
                }
                Some(top) if top.color() == self.side_to_move() => {
                    self.generate_stack_moves(moves, table, square, top);
                }
                Some(_) => (),
            }
        }
    }

    fn generate_stack_moves(
        &self,
        moves: &mut Vec<Move<S>>,
        table: &CompositionTable,
        origin: Square<S>,
        top: Piece,
    ) {
        let max_pickup = self[origin].len().min(S as u8);

        for direction in Direction::ALL {
            // How far the stack can travel: consecutive empty or flat-topped
            // squares. A standing stone just beyond that opens the capstone
            // flattening moves.
            let mut travel = 0;
            let mut standing_blocker = false;
            let mut square = origin;
            while let Some(next) = square.go_direction(direction) {
                match self[next].top_stone().map(Piece::role) {
                    None | Some(Role::Flat) => {
                        travel += 1;
                        square = next;
                    }
                    Some(Role::Standing) => {
                        standing_blocker = true;
                        break;
                    }
                    Some(Role::Cap) => break,
                }
            }

            for pickup in 1..=max_pickup {
                for steps in 1..=travel.min(pickup) {
                    for drops in table.compositions(pickup, steps).iter() {
                        moves.push(Move::Move(origin, direction, drops.clone()));
                    }
                }

                if standing_blocker && top.role() == Role::Cap {
                    // The capstone alone crosses the whole flat run and drops
                    // onto the standing stone, so the first `travel` squares
                    // split up the other pickup - 1 pieces.
                    for prefix in table.compositions(pickup - 1, travel).iter() {
                        let mut drops: DropCounts = prefix.iter().collect();
                        drops.push(1);
                        moves.push(Move::Move(origin, direction, drops));
                    }
                }
            }
        }
    }
}
