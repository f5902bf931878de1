//! Geometric math utilities.

// ============================================================================
// Distance calculations
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Total length of the polyline through `points`.
pub fn calc_polyline_length(points: &[crate::basics::PointD]) -> f64 {
    points
        .windows(2)
        .map(|w| calc_distance(w[0].x, w[0].y, w[1].x, w[1].y))
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PointD;

    #[test]
    fn test_calc_distance() {
        assert!((calc_distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-10);
        assert_eq!(calc_distance(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn test_calc_sq_distance() {
        assert_eq!(calc_sq_distance(0.0, 0.0, 3.0, 4.0), 25.0);
    }

    #[test]
    fn test_calc_polyline_length() {
        let pts = [
            PointD::new(0.0, 0.0),
            PointD::new(3.0, 4.0),
            PointD::new(3.0, 10.0),
        ];
        assert!((calc_polyline_length(&pts) - 11.0).abs() < 1e-10);
        assert_eq!(calc_polyline_length(&pts[..1]), 0.0);
        assert_eq!(calc_polyline_length(&[]), 0.0);
    }
}
