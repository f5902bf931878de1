//! Path storage — the vertex container that interpolated strokes are
//! written into.
//!
//! Stores vertices with path commands in a `Vec<VertexD>`. A cubic segment
//! occupies three consecutive `PATH_CMD_CURVE4` vertices: first control
//! point, second control point, end point.

use crate::basics::{
    PointD, VertexD, VertexSource, PATH_CMD_CURVE4, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP,
};
use crate::hermite::{interpolate, BezierSegment, CurvePath};

/// Vertex container for open stroke paths.
///
/// Holds an ordered sequence of vertices, each with an (x, y) coordinate and
/// a path command. `rewind(path_id)` starts iteration at vertex index
/// `path_id`; a stroke always starts at 0. Implements `VertexSource` so
/// renderers and converters can consume it.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<VertexD>,
    iterator: usize,
}

impl PathStorage {
    /// Create an empty path storage.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
        }
    }

    /// Remove all vertices (keeps allocated memory).
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.iterator = 0;
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add a cubic Bezier curve with two explicit control points.
    #[allow(clippy::too_many_arguments)]
    pub fn curve4(
        &mut self,
        x_ctrl1: f64,
        y_ctrl1: f64,
        x_ctrl2: f64,
        y_ctrl2: f64,
        x_to: f64,
        y_to: f64,
    ) {
        self.vertices.push(VertexD::new(x_ctrl1, y_ctrl1, PATH_CMD_CURVE4));
        self.vertices.push(VertexD::new(x_ctrl2, y_ctrl2, PATH_CMD_CURVE4));
        self.vertices.push(VertexD::new(x_to, y_to, PATH_CMD_CURVE4));
    }

    /// Add a cubic segment starting at the current last vertex.
    pub fn curve4_segment(&mut self, seg: &BezierSegment) {
        self.curve4(
            seg.control1.x,
            seg.control1.y,
            seg.control2.x,
            seg.control2.y,
            seg.end.x,
            seg.end.y,
        );
    }

    /// Append an interpolated curve: a `move_to` at its start followed by
    /// one `curve4` per segment. An empty curve adds nothing.
    pub fn add_curve_path(&mut self, curve: &CurvePath) {
        let Some(start) = curve.start() else {
            return;
        };
        self.vertices.reserve(1 + 3 * curve.len());
        self.move_to(start.x, start.y);
        for seg in curve.segments() {
            self.curve4_segment(seg);
        }
    }

    /// Append the smooth curve through `points` (see `hermite::interpolate`).
    ///
    /// Appends; callers that recompute a growing stroke call `remove_all`
    /// first.
    pub fn interpolate_hermite(&mut self, points: &[PointD]) {
        self.add_curve_path(&interpolate(points));
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Total number of vertices stored.
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VertexD] {
        &self.vertices
    }

    /// Get the last vertex's (x, y) and command. Returns `PATH_CMD_STOP` if empty.
    pub fn last_vertex_xy(&self, x: &mut f64, y: &mut f64) -> u32 {
        match self.vertices.last() {
            Some(v) => {
                *x = v.x;
                *y = v.y;
                v.cmd
            }
            None => {
                *x = 0.0;
                *y = 0.0;
                PATH_CMD_STOP
            }
        }
    }

    /// Get the last command (or `PATH_CMD_STOP` if empty).
    pub fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    /// Get the X coordinate of the last vertex (or 0.0 if empty).
    pub fn last_x(&self) -> f64 {
        self.vertices.last().map_or(0.0, |v| v.x)
    }

    /// Get the Y coordinate of the last vertex (or 0.0 if empty).
    pub fn last_y(&self) -> f64 {
        self.vertices.last().map_or(0.0, |v| v.y)
    }

    /// Get a vertex by index. Returns the command.
    pub fn vertex_idx(&self, idx: usize, x: &mut f64, y: &mut f64) -> u32 {
        let v = &self.vertices[idx];
        *x = v.x;
        *y = v.y;
        v.cmd
    }

    /// Get a command by index.
    pub fn command(&self, idx: usize) -> u32 {
        self.vertices[idx].cmd
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.iterator >= self.vertices.len() {
            return PATH_CMD_STOP;
        }
        let v = &self.vertices[self.iterator];
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}

impl From<&CurvePath> for PathStorage {
    fn from(curve: &CurvePath) -> Self {
        let mut ps = PathStorage::new();
        ps.add_curve_path(curve);
        ps
    }
}

// ============================================================================
// Tests
// ============================================================================
