//! Hermite (Catmull-Rom) interpolation of point sequences into cubic Bezier
//! segments.
//!
//! Every interior point gets the Catmull-Rom tangent
//! `0.5 * (next - current) + 0.5 * (current - previous)`; the two path
//! endpoints get one-sided half differences, which makes the curve open.
//! Each Hermite segment is then expressed as a cubic Bezier whose inner
//! control points sit a third of the tangent away from the segment ends.

use crate::basics::PointD;

// ============================================================================
// BezierSegment / CurvePath
// ============================================================================

/// One cubic Bezier segment. Its start point is the end point of the
/// previous segment, or the path's start anchor for the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub control1: PointD,
    pub control2: PointD,
    pub end: PointD,
}

impl BezierSegment {
    pub fn new(control1: PointD, control2: PointD, end: PointD) -> Self {
        Self {
            control1,
            control2,
            end,
        }
    }
}

/// An open curve: a move-to anchor followed by cubic segments.
///
/// `start` is `None` exactly when there are no segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePath {
    start: Option<PointD>,
    segments: Vec<BezierSegment>,
}

impl CurvePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<PointD> {
        self.start
    }

    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the last segment.
    pub fn end(&self) -> Option<PointD> {
        self.segments.last().map(|s| s.end)
    }

    fn clear(&mut self) {
        self.start = None;
        self.segments.clear();
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// Interpolate `points` with a smooth open curve passing through each of
/// them, in order.
///
/// Produces `points.len() - 1` segments. Fewer than two points produce an
/// empty curve; degenerate input (repeated or coincident points) is not
/// special-cased and simply yields zero-length tangents.
pub fn interpolate(points: &[PointD]) -> CurvePath {
    if points.len() < 2 {
        return CurvePath::new();
    }
    let n = points.len() - 1;
    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        segments.push(segment_unchecked(points, i));
    }
    CurvePath {
        start: Some(points[0]),
        segments,
    }
}

/// Compute segment `i` (from `points[i]` to `points[i + 1]`) alone.
///
/// Returns `None` when `points[i + 1]` does not exist; the curve is open, so
/// there is no segment from the last point back to the first.
pub fn segment(points: &[PointD], i: usize) -> Option<BezierSegment> {
    if i >= points.len().saturating_sub(1) {
        return None;
    }
    Some(segment_unchecked(points, i))
}

// Callers guarantee `i + 1 < points.len()`.
fn segment_unchecked(points: &[PointD], i: usize) -> BezierSegment {
    let count = points.len();

    // Neighbour indices wrap around, but the endpoint branches below never
    // read a wrapped neighbour.
    let next = (i + 1) % count;
    let prev = if i == 0 { count - 1 } else { i - 1 };

    let current = points[i];
    let (mx, my) = if i > 0 {
        central_tangent(points[prev], current, points[next])
    } else {
        (
            (points[next].x - current.x) * 0.5,
            (points[next].y - current.y) * 0.5,
        )
    };
    let control1 = PointD::new(current.x + mx / 3.0, current.y + my / 3.0);

    let current = points[next];
    let prev = i;
    let next = (next + 1) % count;

    let (mx, my) = if i < count - 2 {
        central_tangent(points[prev], current, points[next])
    } else {
        (
            (current.x - points[prev].x) * 0.5,
            (current.y - points[prev].y) * 0.5,
        )
    };
    let control2 = PointD::new(current.x - mx / 3.0, current.y - my / 3.0);

    BezierSegment::new(control1, control2, current)
}

#[inline]
fn central_tangent(previous: PointD, current: PointD, next: PointD) -> (f64, f64) {
    (
        (next.x - current.x) * 0.5 + (current.x - previous.x) * 0.5,
        (next.y - current.y) * 0.5 + (current.y - previous.y) * 0.5,
    )
}

// ============================================================================
// HermiteInterpolator — incremental
// ============================================================================

/// Incremental interpolator for a growing point sequence.
///
/// Appending a point only changes the tangent at the previous last point,
/// so `push` recomputes the old last segment and adds one new segment.
/// The resulting curve is bit-identical to `interpolate(self.points())`.
#[derive(Debug, Clone, Default)]
pub struct HermiteInterpolator {
    points: Vec<PointD>,
    curve: CurvePath,
}

impl HermiteInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and update the curve.
    pub fn push(&mut self, p: PointD) {
        self.points.push(p);
        let count = self.points.len();
        if count < 2 {
            return;
        }
        if count == 2 {
            self.curve.start = Some(self.points[0]);
        } else {
            let last = count - 3;
            self.curve.segments[last] = segment_unchecked(&self.points, last);
        }
        self.curve.segments.push(segment_unchecked(&self.points, count - 2));
    }

    /// Drop all points and the curve.
    pub fn clear(&mut self) {
        self.points.clear();
        self.curve.clear();
    }

    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    pub fn curve(&self) -> &CurvePath {
        &self.curve
    }
}

impl Extend<PointD> for HermiteInterpolator {
    fn extend<I: IntoIterator<Item = PointD>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{catrom_to_bezier, hermite_to_bezier};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    fn wavy(n: usize) -> Vec<PointD> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                p(t * 7.25 - 3.0, (t * 0.9).sin() * 40.0 + t * 0.125)
            })
            .collect()
    }

    #[test]
    fn test_empty_and_single_point() {
        let c = interpolate(&[]);
        assert!(c.is_empty());
        assert_eq!(c.start(), None);

        let c = interpolate(&[p(5.0, 5.0)]);
        assert!(c.is_empty());
        assert_eq!(c.start(), None);
        assert_eq!(c.end(), None);
    }

    #[test]
    fn test_segment_count_and_end_points() {
        for n in 2..12 {
            let pts = wavy(n);
            let c = interpolate(&pts);
            assert_eq!(c.len(), n - 1);
            assert_eq!(c.start(), Some(pts[0]));
            for (i, s) in c.segments().iter().enumerate() {
                assert_eq!(s.end, pts[i + 1]);
            }
            assert_eq!(c.end(), Some(pts[n - 1]));
        }
    }

    #[test]
    fn test_two_points_is_straight() {
        let c = interpolate(&[p(0.0, 0.0), p(9.0, 3.0)]);
        assert_eq!(c.len(), 1);
        let s = c.segments()[0];
        assert_relative_eq!(s.control1.x, 1.5);
        assert_relative_eq!(s.control1.y, 0.5);
        assert_relative_eq!(s.control2.x, 7.5);
        assert_relative_eq!(s.control2.y, 2.5);
        assert_eq!(s.end, p(9.0, 3.0));
    }

    #[test]
    fn test_right_angle_scenario() {
        let c = interpolate(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);
        assert_eq!(c.len(), 2);
        let s0 = c.segments()[0];
        let s1 = c.segments()[1];

        assert_eq!(s0.end, p(10.0, 0.0));
        assert_eq!(s1.end, p(10.0, 10.0));

        // One-sided forward tangent at the start: m1 = (5, 0).
        assert_eq!(s0.control1, p(5.0 / 3.0, 0.0));
        // Central tangent at (10, 0): m2 = (5, 5).
        assert_eq!(s0.control2, p(10.0 - 5.0 / 3.0, -5.0 / 3.0));
        assert_eq!(s1.control1, p(10.0 + 5.0 / 3.0, 5.0 / 3.0));
        // One-sided backward tangent at the end: m2 = (0, 5).
        assert_eq!(s1.control2, p(10.0, 10.0 - 5.0 / 3.0));
    }

    #[test]
    fn test_endpoint_tangents_three_points() {
        let (a, b, cc) = (p(-2.0, 1.0), p(4.0, 7.5), p(11.0, -3.0));
        let c = interpolate(&[a, b, cc]);
        let first = c.segments()[0];
        let last = c.segments()[1];
        assert_relative_eq!(first.control1.x, a.x + 0.5 * (b.x - a.x) / 3.0);
        assert_relative_eq!(first.control1.y, a.y + 0.5 * (b.y - a.y) / 3.0);
        assert_relative_eq!(last.control2.x, cc.x - 0.5 * (cc.x - b.x) / 3.0);
        assert_relative_eq!(last.control2.y, cc.y - 0.5 * (cc.y - b.y) / 3.0);
    }

    #[test]
    fn test_interior_tangent_four_points() {
        let pts = [p(0.0, 0.0), p(3.0, 4.0), p(8.0, 4.0), p(10.0, -1.0)];
        let (a, b, cc) = (pts[0], pts[1], pts[2]);
        let s1 = interpolate(&pts).segments()[1];
        let mx = 0.5 * (cc.x - b.x) + 0.5 * (b.x - a.x);
        let my = 0.5 * (cc.y - b.y) + 0.5 * (b.y - a.y);
        assert_relative_eq!(s1.control1.x, b.x + mx / 3.0);
        assert_relative_eq!(s1.control1.y, b.y + my / 3.0);
    }

    #[test]
    fn test_endpoints_ignore_wraparound() {
        // Moving the last point must not change the first segment's start
        // tangent, and moving the first must not change the last's end tangent.
        let mut pts = wavy(6);
        let before = interpolate(&pts);
        pts[5] = p(1000.0, -1000.0);
        let after = interpolate(&pts);
        assert_eq!(before.segments()[0].control1, after.segments()[0].control1);

        let mut pts = wavy(6);
        let before = interpolate(&pts);
        pts[0] = p(-500.0, 500.0);
        let after = interpolate(&pts);
        assert_eq!(before.segments()[4].control2, after.segments()[4].control2);
    }

    #[test]
    fn test_interior_segments_match_catmull_rom() {
        let pts = wavy(7);
        let c = interpolate(&pts);
        for i in 1..pts.len() - 2 {
            let cp = catrom_to_bezier(
                pts[i - 1].x,
                pts[i - 1].y,
                pts[i].x,
                pts[i].y,
                pts[i + 1].x,
                pts[i + 1].y,
                pts[i + 2].x,
                pts[i + 2].y,
            );
            let s = c.segments()[i];
            let (_, bz) = cp.to_segment();
            assert_relative_eq!(s.control1.x, bz.control1.x, epsilon = 1e-9);
            assert_relative_eq!(s.control1.y, bz.control1.y, epsilon = 1e-9);
            assert_relative_eq!(s.control2.x, bz.control2.x, epsilon = 1e-9);
            assert_relative_eq!(s.control2.y, bz.control2.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_segment_matches_hermite_form() {
        let pts = [p(0.0, 0.0), p(6.0, 3.0), p(9.0, 9.0)];
        let s = interpolate(&pts).segments()[0];
        // Tangents: half forward difference at the start, central at pts[1].
        let cp = hermite_to_bezier(0.0, 0.0, 6.0, 3.0, 3.0, 1.5, 4.5, 4.5);
        let (start, bz) = cp.to_segment();
        assert_eq!(start, pts[0]);
        assert_relative_eq!(s.control1.x, bz.control1.x, epsilon = 1e-12);
        assert_relative_eq!(s.control1.y, bz.control1.y, epsilon = 1e-12);
        assert_relative_eq!(s.control2.x, bz.control2.x, epsilon = 1e-12);
        assert_relative_eq!(s.control2.y, bz.control2.y, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_points() {
        let pts = [p(5.0, 5.0); 4];
        let c = interpolate(&pts);
        assert_eq!(c.len(), 3);
        for s in c.segments() {
            assert_eq!(s.control1, p(5.0, 5.0));
            assert_eq!(s.control2, p(5.0, 5.0));
            assert_eq!(s.end, p(5.0, 5.0));
        }

        let c = interpolate(&[p(0.0, 0.0), p(0.0, 0.0), p(4.0, 0.0)]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.segments()[0].control1, p(0.0, 0.0));
    }

    #[test]
    fn test_deterministic() {
        let pts = wavy(20);
        let a = interpolate(&pts);
        let b = interpolate(&pts);
        assert_eq!(a, b);
        let bits = |s: &BezierSegment| {
            [s.control1, s.control2, s.end].map(|p| (p.x.to_bits(), p.y.to_bits()))
        };
        for (sa, sb) in a.segments().iter().zip(b.segments()) {
            assert_eq!(bits(sa), bits(sb));
        }
    }

    #[test]
    fn test_segment_matches_interpolate() {
        let pts = wavy(5);
        let c = interpolate(&pts);
        for i in 0..pts.len() - 1 {
            assert_eq!(segment(&pts, i), Some(c.segments()[i]));
        }
    }

    #[test]
    fn test_segment_out_of_range() {
        let pts = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
        // No closing segment from the last point back to the first.
        assert_eq!(segment(&pts, 2), None);
        assert_eq!(segment(&pts, 7), None);
        assert_eq!(segment(&pts, usize::MAX), None);
        assert_eq!(segment(&[], 0), None);
        assert_eq!(segment(&pts[..1], 0), None);
    }

    #[test]
    fn test_input_not_mutated() {
        let pts = wavy(5);
        let copy = pts.clone();
        let _ = interpolate(&pts);
        assert_eq!(pts, copy);
    }

    #[test]
    fn test_incremental_matches_full() {
        let pts = wavy(25);
        let mut hi = HermiteInterpolator::new();
        for (k, &pt) in pts.iter().enumerate() {
            hi.push(pt);
            let full = interpolate(&pts[..=k]);
            assert_eq!(hi.curve(), &full, "mismatch after {} points", k + 1);
        }
        assert_eq!(hi.points(), &pts[..]);
    }

    #[test]
    fn test_incremental_clear_and_extend() {
        let mut hi = HermiteInterpolator::new();
        hi.extend(wavy(4));
        assert_eq!(hi.curve().len(), 3);

        hi.clear();
        assert!(hi.points().is_empty());
        assert!(hi.curve().is_empty());
        assert_eq!(hi.curve().start(), None);

        hi.push(p(1.0, 1.0));
        assert!(hi.curve().is_empty());
        hi.push(p(2.0, 1.0));
        assert_eq!(hi.curve(), &interpolate(&[p(1.0, 1.0), p(2.0, 1.0)]));
    }
}
