//! Cubic Bezier flattening and segment conversion helpers.
//!
//! `Curve4Div` flattens a cubic Bezier into line segments by recursive de
//! Casteljau subdivision, stopping once the control polygon is flat enough
//! for the configured approximation scale.
//!
//! Also provides `catrom_to_bezier` and `hermite_to_bezier`, which express a
//! Catmull-Rom or Hermite segment as Bezier control points.

use crate::basics::{PointD, VertexSource, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PI};
use crate::hermite::BezierSegment;
use crate::math::calc_sq_distance;

// ============================================================================
// Constants
// ============================================================================

const CURVE_COLLINEARITY_EPSILON: f64 = 1e-30;
const CURVE_ANGLE_TOLERANCE_EPSILON: f64 = 0.01;
const CURVE_RECURSION_LIMIT: u32 = 32;

// ============================================================================
// Curve4Points
// ============================================================================

/// Eight control-point coordinates for a cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve4Points {
    pub cp: [f64; 8],
}

impl Curve4Points {
    #[allow(clippy::too_many_arguments)]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
        Self {
            cp: [x1, y1, x2, y2, x3, y3, x4, y4],
        }
    }

    /// The segment from `cp[0..2]` expressed as a `BezierSegment`.
    pub fn to_segment(&self) -> (PointD, BezierSegment) {
        let c = &self.cp;
        (
            PointD::new(c[0], c[1]),
            BezierSegment::new(
                PointD::new(c[2], c[3]),
                PointD::new(c[4], c[5]),
                PointD::new(c[6], c[7]),
            ),
        )
    }
}

// ============================================================================
// Curve conversion functions
// ============================================================================

/// Convert the Catmull-Rom segment between points 2 and 3 of four
/// consecutive points into cubic Bezier control points.
#[allow(clippy::too_many_arguments)]
pub fn catrom_to_bezier(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Curve4Points {
    Curve4Points::new(
        x2,
        y2,
        (-x1 + 6.0 * x2 + x3) / 6.0,
        (-y1 + 6.0 * y2 + y3) / 6.0,
        (x2 + 6.0 * x3 - x4) / 6.0,
        (y2 + 6.0 * y3 - y4) / 6.0,
        x3,
        y3,
    )
}

/// Convert a Hermite segment into cubic Bezier control points.
///
/// `(x1, y1)` and `(x2, y2)` are the end points, `(x3, y3)` and `(x4, y4)`
/// the tangents at them.
#[allow(clippy::too_many_arguments)]
pub fn hermite_to_bezier(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Curve4Points {
    Curve4Points::new(
        x1,
        y1,
        (3.0 * x1 + x3) / 3.0,
        (3.0 * y1 + y3) / 3.0,
        (3.0 * x2 - x4) / 3.0,
        (3.0 * y2 - y4) / 3.0,
        x2,
        y2,
    )
}

// ============================================================================
// Curve4Div — recursive subdivision cubic Bezier
// ============================================================================

/// Recursive subdivision cubic Bezier flattener.
///
/// After `init`, iterate it as a `VertexSource`: the first vertex is a
/// `move_to` at the curve start, the rest are `line_to` and the last one is
/// exactly the curve end.
pub struct Curve4Div {
    approximation_scale: f64,
    distance_tolerance_square: f64,
    angle_tolerance: f64,
    cusp_limit: f64,
    count: usize,
    points: Vec<PointD>,
}

impl Curve4Div {
    pub fn new() -> Self {
        Self {
            approximation_scale: 1.0,
            distance_tolerance_square: 0.0,
            angle_tolerance: 0.0,
            cusp_limit: 0.0,
            count: 0,
            points: Vec::new(),
        }
    }

    pub fn new_with_segment(start: PointD, seg: &BezierSegment) -> Self {
        let mut c = Self::new();
        c.init(start, seg.control1, seg.control2, seg.end);
        c
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.count = 0;
    }

    pub fn init(&mut self, p1: PointD, p2: PointD, p3: PointD, p4: PointD) {
        self.points.clear();
        self.distance_tolerance_square = 0.5 / self.approximation_scale;
        self.distance_tolerance_square *= self.distance_tolerance_square;
        self.points.push(p1);
        self.recursive_bezier(p1, p2, p3, p4, 0);
        self.points.push(p4);
        self.count = 0;
    }

    /// Scale factor between path units and device pixels. Larger values
    /// give finer flattening.
    pub fn set_approximation_scale(&mut self, s: f64) {
        self.approximation_scale = s;
    }

    pub fn approximation_scale(&self) -> f64 {
        self.approximation_scale
    }

    /// Maximum turn (radians) tolerated between flattened edges; 0 disables
    /// the angle check.
    pub fn set_angle_tolerance(&mut self, a: f64) {
        self.angle_tolerance = a;
    }

    pub fn angle_tolerance(&self) -> f64 {
        self.angle_tolerance
    }

    pub fn set_cusp_limit(&mut self, v: f64) {
        self.cusp_limit = if v == 0.0 { 0.0 } else { PI - v };
    }

    pub fn cusp_limit(&self) -> f64 {
        if self.cusp_limit == 0.0 {
            0.0
        } else {
            PI - self.cusp_limit
        }
    }

    /// Flattened points, start and end included.
    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    fn turn(a: PointD, b: PointD, c: PointD) -> f64 {
        let mut da = ((c.y - b.y).atan2(c.x - b.x) - (b.y - a.y).atan2(b.x - a.x)).abs();
        if da >= PI {
            da = 2.0 * PI - da;
        }
        da
    }

    fn recursive_bezier(&mut self, p1: PointD, p2: PointD, p3: PointD, p4: PointD, level: u32) {
        if level > CURVE_RECURSION_LIMIT {
            return;
        }

        let mid = |a: PointD, b: PointD| PointD::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        let p12 = mid(p1, p2);
        let p23 = mid(p2, p3);
        let p34 = mid(p3, p4);
        let p123 = mid(p12, p23);
        let p234 = mid(p23, p34);
        let p1234 = mid(p123, p234);

        // Try to approximate the whole curve by the chord p1-p4.
        let dx = p4.x - p1.x;
        let dy = p4.y - p1.y;

        let mut d2 = ((p2.x - p4.x) * dy - (p2.y - p4.y) * dx).abs();
        let mut d3 = ((p3.x - p4.x) * dy - (p3.y - p4.y) * dx).abs();

        let flat2 = d2 <= CURVE_COLLINEARITY_EPSILON;
        let flat3 = d3 <= CURVE_COLLINEARITY_EPSILON;

        match (flat2, flat3) {
            (true, true) => {
                // All collinear, or p1 == p4.
                let k = dx * dx + dy * dy;
                if k == 0.0 {
                    d2 = calc_sq_distance(p1.x, p1.y, p2.x, p2.y);
                    d3 = calc_sq_distance(p4.x, p4.y, p3.x, p3.y);
                } else {
                    let k = 1.0 / k;
                    d2 = k * ((p2.x - p1.x) * dx + (p2.y - p1.y) * dy);
                    d3 = k * ((p3.x - p1.x) * dx + (p3.y - p1.y) * dy);
                    if d2 > 0.0 && d2 < 1.0 && d3 > 0.0 && d3 < 1.0 {
                        // 1---2---3---4
                        return;
                    }
                    d2 = Self::projected_sq_distance(p1, p4, p2, d2, dx, dy);
                    d3 = Self::projected_sq_distance(p1, p4, p3, d3, dx, dy);
                }
                if d2 > d3 {
                    if d2 < self.distance_tolerance_square {
                        self.points.push(p2);
                        return;
                    }
                } else if d3 < self.distance_tolerance_square {
                    self.points.push(p3);
                    return;
                }
            }

            (true, false) => {
                // p1, p2, p4 collinear; p3 is significant.
                if d3 * d3 <= self.distance_tolerance_square * (dx * dx + dy * dy) {
                    if self.angle_tolerance < CURVE_ANGLE_TOLERANCE_EPSILON {
                        self.points.push(p23);
                        return;
                    }

                    let da1 = Self::turn(p2, p3, p4);
                    if da1 < self.angle_tolerance {
                        self.points.push(p2);
                        self.points.push(p3);
                        return;
                    }

                    if self.cusp_limit != 0.0 && da1 > self.cusp_limit {
                        self.points.push(p3);
                        return;
                    }
                }
            }

            (false, true) => {
                // p1, p3, p4 collinear; p2 is significant.
                if d2 * d2 <= self.distance_tolerance_square * (dx * dx + dy * dy) {
                    if self.angle_tolerance < CURVE_ANGLE_TOLERANCE_EPSILON {
                        self.points.push(p23);
                        return;
                    }

                    let da1 = Self::turn(p1, p2, p3);
                    if da1 < self.angle_tolerance {
                        self.points.push(p2);
                        self.points.push(p3);
                        return;
                    }

                    if self.cusp_limit != 0.0 && da1 > self.cusp_limit {
                        self.points.push(p2);
                        return;
                    }
                }
            }

            (false, false) => {
                if (d2 + d3) * (d2 + d3) <= self.distance_tolerance_square * (dx * dx + dy * dy) {
                    if self.angle_tolerance < CURVE_ANGLE_TOLERANCE_EPSILON {
                        self.points.push(p23);
                        return;
                    }

                    let da1 = Self::turn(p1, p2, p3);
                    let da2 = Self::turn(p2, p3, p4);

                    if da1 + da2 < self.angle_tolerance {
                        self.points.push(p23);
                        return;
                    }

                    if self.cusp_limit != 0.0 {
                        if da1 > self.cusp_limit {
                            self.points.push(p2);
                            return;
                        }
                        if da2 > self.cusp_limit {
                            self.points.push(p3);
                            return;
                        }
                    }
                }
            }
        }

        self.recursive_bezier(p1, p12, p123, p1234, level + 1);
        self.recursive_bezier(p1234, p234, p34, p4, level + 1);
    }

    /// Squared distance from control point `p` to the chord `a`-`b`, given
    /// its projection parameter `u` along the chord.
    fn projected_sq_distance(a: PointD, b: PointD, p: PointD, u: f64, dx: f64, dy: f64) -> f64 {
        if u <= 0.0 {
            calc_sq_distance(p.x, p.y, a.x, a.y)
        } else if u >= 1.0 {
            calc_sq_distance(p.x, p.y, b.x, b.y)
        } else {
            calc_sq_distance(p.x, p.y, a.x + u * dx, a.y + u * dy)
        }
    }
}

impl Default for Curve4Div {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSource for Curve4Div {
    fn rewind(&mut self, _path_id: u32) {
        self.count = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.count >= self.points.len() {
            return PATH_CMD_STOP;
        }
        let p = self.points[self.count];
        *x = p.x;
        *y = p.y;
        self.count += 1;
        if self.count == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
