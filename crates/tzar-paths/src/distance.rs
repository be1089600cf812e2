use tzar_core::Point;

/// Chebyshev (L∞) distance: diagonal and straight steps cost the same.
///
/// Used both as the step cost between adjacent tiles and as the heuristic.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
