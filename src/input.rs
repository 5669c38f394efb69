//! Pointer-to-edge translation for pixel-based front ends

use crate::board::Edge;

/// Resolves a pointer position to the edge it lands on, if any
///
/// The board is assumed drawn in a square `window`-sized surface with
/// `dots` dots per side, the first dot centred at a quarter of the dot
/// spacing from the origin. Positions are quantised to a half-spacing
/// grid: even rows hold dots and horizontal edges, odd rows hold vertical
/// edges and box interiors. Parity combinations that land on a dot or a
/// box interior are not edge clicks, and positions outside the dot grid
/// resolve to no edge at all.
pub fn edge_at(x: f64, y: f64, window: f64, dots: usize) -> Option<Edge> {
    let spacing = window / dots as f64;
    let col = ((x - spacing / 4.0) / (spacing / 2.0)).floor();
    let row = ((y - spacing / 4.0) / (spacing / 2.0)).floor();
    if col < 0.0 || row < 0.0 {
        return None;
    }
    let (col, row) = (col as usize, row as usize);

    match (row % 2, col % 2) {
        (0, 1) => {
            let (row, col) = (row / 2, (col - 1) / 2);
            if row < dots && col < dots - 1 {
                Some(Edge::horizontal(row, col))
            } else {
                None
            }
        }
        (1, 0) => {
            let (row, col) = ((row - 1) / 2, col / 2);
            if row < dots - 1 && col < dots {
                Some(Edge::vertical(row, col))
            } else {
                None
            }
        }
        _ => None,
    }
}
