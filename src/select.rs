//! Best-vector selection over a difference map.

use crate::search::DifferenceMap;
use std::fmt;

/// Displacement of the best match relative to the reference block origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovementVector {
    /// Horizontal displacement in pixels; positive is rightwards.
    pub dx: i64,
    /// Vertical displacement in pixels; positive is downwards.
    pub dy: i64,
}

impl MovementVector {
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for MovementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}

/// Map cell holding the lowest score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestCell {
    pub row: usize,
    pub col: usize,
    pub score: f64,
}

/// Finds the lowest-scoring cell.
///
/// Scans rows outer, columns inner, starting from `(0, 0)`, and only moves on
/// a strictly smaller score. Ties therefore resolve to the first cell in
/// row-major order. NaN scores never win.
pub fn find_best_cell(map: &DifferenceMap) -> BestCell {
    let mut best = BestCell {
        row: 0,
        col: 0,
        score: map.score(0, 0).unwrap_or(f64::NAN),
    };
    for row in 0..map.height() {
        let Some(scores) = map.row(row) else {
            break;
        };
        for (col, &score) in scores.iter().enumerate() {
            if score < best.score || (best.score.is_nan() && !score.is_nan()) {
                best = BestCell { row, col, score };
            }
        }
    }
    best
}

/// Converts the best cell into a displacement from the map centre.
pub fn select_best_vector(map: &DifferenceMap) -> MovementVector {
    vector_for_cell(map, &find_best_cell(map))
}

pub(crate) fn vector_for_cell(map: &DifferenceMap, best: &BestCell) -> MovementVector {
    MovementVector {
        dx: best.col as i64 - map.center_x() as i64,
        dy: best.row as i64 - map.center_y() as i64,
    }
}
