use crate::board::{Board, Edge};

/// Enumerates every edge not yet drawn on the board
///
/// Moves come in a fixed order: all horizontal edges row-major, then all
/// vertical edges row-major. The order is observable through the robot's
/// tie-breaking, so it must not change. The iterator never mutates the
/// board and is recomputed fresh on every call.
pub fn legal_moves<'a>(board: &'a Board) -> impl Iterator<Item = Edge> + 'a {
    let dots = board.dots();
    let horizontals =
        (0..dots).flat_map(move |row| (0..dots - 1).map(move |col| Edge::horizontal(row, col)));
    let verticals =
        (0..dots - 1).flat_map(move |row| (0..dots).map(move |col| Edge::vertical(row, col)));
    horizontals
        .chain(verticals)
        .filter(move |&edge| !board.has_edge(edge))
}
