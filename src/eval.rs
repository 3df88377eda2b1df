//! Static position evaluations for the minimax search.

use board_game_traits::Color;

use crate::minmax::Eval;
use crate::position::{squares_iterator, Position, Square};

/// Scores every position as equal. Search with this evaluation still finds
/// forced wins, since terminal positions are scored by the search itself.
#[derive(Clone, Copy, Default, Debug)]
pub struct TrivialEval;

impl<const S: usize> Eval<S> for TrivialEval {
    fn eval(&self, _position: &Position<S>) -> f32 {
        0.0
    }
}

/// A material and board control heuristic. Stacks score their pieces
/// top-down with geometric decay, so controlling a tall stack is worth more
/// than the top stone alone but buried pieces matter less and less. Each
/// side also gets credit for its longest straight line of flat-topped
/// squares, a rough proxy for road progress.
#[derive(Clone, Copy, Debug)]
pub struct FlatCountEval {
    pub decay: f32,
}

impl Default for FlatCountEval {
    fn default() -> Self {
        FlatCountEval { decay: 0.45 }
    }
}

impl<const S: usize> Eval<S> for FlatCountEval {
    fn eval(&self, position: &Position<S>) -> f32 {
        let mut score = 0.0;
        for square in squares_iterator::<S>() {
            let mut weight = 1.0;
            for piece in position[square].iter().rev() {
                match piece.color() {
                    Color::White => score += weight,
                    Color::Black => score -= weight,
                }
                weight *= self.decay;
            }
        }
        score += longest_line(position, Color::White) as f32;
        score -= longest_line(position, Color::Black) as f32;
        score
    }
}

/// The longest run of squares flat-topped by `color` along any rank or file.
fn longest_line<const S: usize>(position: &Position<S>, color: Color) -> u8 {
    let road = position.road_graph();
    let mut longest = 0;
    for i in 0..S as u8 {
        let mut rank_run = 0;
        let mut file_run = 0;
        for j in 0..S as u8 {
            rank_run = if road.owner(Square::from_file_rank(j, i)) == Some(color) {
                rank_run + 1
            } else {
                0
            };
            file_run = if road.owner(Square::from_file_rank(i, j)) == Some(color) {
                file_run + 1
            } else {
                0
            };
            longest = longest.max(rank_run).max(file_run);
        }
    }
    longest
}
