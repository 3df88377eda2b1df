use board_game_traits::Color;

use crate::position::Square;
use crate::road::RoadGraph;

fn graph_with_owned<const S: usize>(white: &[&str], black: &[&str]) -> RoadGraph<S> {
    let mut graph = RoadGraph::default();
    for square_string in white {
        let square = Square::parse_square(square_string).unwrap();
        graph.update_square(square, Some(Color::White));
    }
    for square_string in black {
        let square = Square::parse_square(square_string).unwrap();
        graph.update_square(square, Some(Color::Black));
    }
    graph
}

#[test]
fn empty_graph_test() {
    let graph = <RoadGraph<5>>::default();
    for color in [Color::White, Color::Black] {
        assert!(!graph.is_left_to_right(color));
        assert!(!graph.is_top_to_bottom(color));
    }
}

#[test]
fn file_road_test() {
    let graph: RoadGraph<5> = graph_with_owned(&["a1", "a2", "a3", "a4", "a5"], &[]);
    assert!(graph.is_top_to_bottom(Color::White));
    assert!(!graph.is_left_to_right(Color::White));
    assert!(!graph.is_top_to_bottom(Color::Black));
}

#[test]
fn rank_road_test() {
    let graph: RoadGraph<5> = graph_with_owned(&[], &["a3", "b3", "c3", "d3", "e3"]);
    assert!(graph.is_left_to_right(Color::Black));
    assert!(!graph.is_top_to_bottom(Color::Black));
}

#[test]
fn broken_line_is_no_road_test() {
    let graph: RoadGraph<5> = graph_with_owned(&["a1", "a2", "a4", "a5"], &[]);
    assert!(!graph.is_top_to_bottom(Color::White));

    // An opposing stone in the gap doesn't help either
    let graph: RoadGraph<5> = graph_with_owned(&["a1", "a2", "a4", "a5"], &["a3"]);
    assert!(!graph.is_top_to_bottom(Color::White));
}

#[test]
fn winding_road_test() {
    let graph: RoadGraph<5> = graph_with_owned(
        &["a1", "b1", "b2", "c2", "c3", "d3", "d4", "e4"],
        &["a2", "b3", "c4", "d5"],
    );
    assert!(graph.is_left_to_right(Color::White));
    assert!(!graph.is_top_to_bottom(Color::White));
    assert!(!graph.is_left_to_right(Color::Black));
}

// Touching the left and bottom edges doesn't connect left to right, even
// though both corners border the same rails on one side.
#[test]
fn l_shape_is_no_road_test() {
    let graph: RoadGraph<5> = graph_with_owned(&["a3", "b3", "c3", "c2", "c1"], &[]);
    assert!(!graph.is_left_to_right(Color::White));
    assert!(!graph.is_top_to_bottom(Color::White));
}

#[test]
fn diagonal_is_no_road_test() {
    let graph: RoadGraph<3> = graph_with_owned(&["a1", "b2", "c3"], &[]);
    assert!(!graph.is_left_to_right(Color::White));
    assert!(!graph.is_top_to_bottom(Color::White));
}
