//! Curve flattening converter.
//!
//! Replaces `PATH_CMD_CURVE4` triples of a vertex source with sequences of
//! `line_to` vertices, so consumers that only understand straight edges can
//! render interpolated strokes.

use crate::basics::{is_stop, is_vertex, PointD, VertexSource, PATH_CMD_CURVE4, PATH_CMD_LINE_TO};
use crate::curves::Curve4Div;

// ============================================================================
// ConvCurve
// ============================================================================

/// Curve flattening converter.
///
/// Wraps a `VertexSource` and flattens each cubic segment, starting from the
/// previously emitted vertex, with a `Curve4Div`. Other commands pass
/// through unchanged.
pub struct ConvCurve<VS: VertexSource> {
    source: VS,
    last_x: f64,
    last_y: f64,
    curve4: Curve4Div,
}

impl<VS: VertexSource> ConvCurve<VS> {
    pub fn new(source: VS) -> Self {
        Self {
            source,
            last_x: 0.0,
            last_y: 0.0,
            curve4: Curve4Div::new(),
        }
    }

    pub fn source(&self) -> &VS {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut VS {
        &mut self.source
    }

    pub fn set_approximation_scale(&mut self, s: f64) {
        self.curve4.set_approximation_scale(s);
    }

    pub fn approximation_scale(&self) -> f64 {
        self.curve4.approximation_scale()
    }

    pub fn set_angle_tolerance(&mut self, v: f64) {
        self.curve4.set_angle_tolerance(v);
    }

    pub fn angle_tolerance(&self) -> f64 {
        self.curve4.angle_tolerance()
    }

    pub fn set_cusp_limit(&mut self, v: f64) {
        self.curve4.set_cusp_limit(v);
    }

    pub fn cusp_limit(&self) -> f64 {
        self.curve4.cusp_limit()
    }

    /// Rewind to `path_id` and collect every emitted vertex position.
    pub fn collect_points(&mut self, path_id: u32) -> Vec<PointD> {
        let mut out = Vec::new();
        self.rewind(path_id);
        let (mut x, mut y) = (0.0, 0.0);
        loop {
            let cmd = self.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_vertex(cmd) {
                out.push(PointD::new(x, y));
            }
        }
        out
    }
}

impl<VS: VertexSource> VertexSource for ConvCurve<VS> {
    fn rewind(&mut self, path_id: u32) {
        self.source.rewind(path_id);
        self.last_x = 0.0;
        self.last_y = 0.0;
        self.curve4.reset();
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if !is_stop(self.curve4.vertex(x, y)) {
            self.last_x = *x;
            self.last_y = *y;
            return PATH_CMD_LINE_TO;
        }

        let mut cmd = self.source.vertex(x, y);

        if cmd == PATH_CMD_CURVE4 {
            // x, y hold the first control point.
            let (mut ct2_x, mut ct2_y) = (0.0, 0.0);
            let (mut end_x, mut end_y) = (0.0, 0.0);
            self.source.vertex(&mut ct2_x, &mut ct2_y);
            self.source.vertex(&mut end_x, &mut end_y);

            self.curve4.init(
                PointD::new(self.last_x, self.last_y),
                PointD::new(*x, *y),
                PointD::new(ct2_x, ct2_y),
                PointD::new(end_x, end_y),
            );

            // Skip the move_to at the curve start; it repeats the last vertex.
            self.curve4.vertex(x, y);
            self.curve4.vertex(x, y);
            cmd = PATH_CMD_LINE_TO;
        }

        self.last_x = *x;
        self.last_y = *y;
        cmd
    }
}

// ============================================================================
// Tests
// ============================================================================
