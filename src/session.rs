//! Freehand drawing session.
//!
//! Owns the point sequence of the stroke in progress, keeps its
//! interpolated curve current after every point, and mirrors the curve
//! into a `PathStorage` that renderers consume as a `VertexSource`.

use crate::basics::{PointD, RectD};
use crate::bounding_rect::bounding_rect_single;
use crate::config::{SessionConfig, StrokeStyle};
use crate::conv_curve::ConvCurve;
use crate::error::{Error, Result};
use crate::hermite::{CurvePath, HermiteInterpolator};
use crate::math::calc_polyline_length;
use crate::path_storage::PathStorage;

// ============================================================================
// DrawingSession
// ============================================================================

/// A single-stroke drawing session.
///
/// `begin_stroke` starts a stroke, `add_point` grows it, `end_stroke`
/// clears it. Between points the curve always equals
/// `interpolate(self.points())` and `path()` holds its `move_to` anchor
/// followed by one `curve4` per segment.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    config: SessionConfig,
    interpolator: HermiteInterpolator,
    path: PathStorage,
    drawing: bool,
}

impl DrawingSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            interpolator: HermiteInterpolator::new(),
            path: PathStorage::new(),
            drawing: false,
        })
    }

    /// Start a new stroke, discarding any previous one.
    pub fn begin_stroke(&mut self) {
        self.interpolator.clear();
        self.path.remove_all();
        self.drawing = true;
        log::debug!("stroke started");
    }

    /// Append a point in drawing-layer pixels and recompute the path.
    pub fn add_point(&mut self, p: PointD) -> Result<()> {
        if !self.drawing {
            log::warn!("point ({}, {}) rejected: no stroke in progress", p.x, p.y);
            return Err(Error::NoActiveStroke);
        }
        if !p.is_finite() {
            log::warn!("non-finite point ({}, {}) rejected", p.x, p.y);
            return Err(Error::NonFinitePoint { x: p.x, y: p.y });
        }

        self.interpolator.push(p);
        self.path.remove_all();
        self.path.add_curve_path(self.interpolator.curve());
        log::trace!(
            "stroke recomputed: {} points, {} segments",
            self.interpolator.points().len(),
            self.interpolator.curve().len()
        );
        Ok(())
    }

    /// Append a point given in drawing-surface local coordinates, where the
    /// surface spans `[-0.5, 0.5]` on both axes.
    pub fn add_surface_point(&mut self, local: PointD) -> Result<()> {
        self.add_point(self.surface_to_layer(local))
    }

    /// Map surface-local coordinates to drawing-layer pixels.
    pub fn surface_to_layer(&self, local: PointD) -> PointD {
        let size = f64::from(self.config.layer_size);
        (local + PointD::new(0.5, 0.5)) * size
    }

    /// Finish the stroke and clear it. Returns how many points it held;
    /// 0 if no stroke was in progress.
    pub fn end_stroke(&mut self) -> usize {
        if !self.drawing {
            return 0;
        }
        let count = self.interpolator.points().len();
        log::debug!(
            "stroke ended: {} points, polyline length {:.1}",
            count,
            calc_polyline_length(self.interpolator.points())
        );
        self.interpolator.clear();
        self.path.remove_all();
        self.drawing = false;
        count
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn points(&self) -> &[PointD] {
        self.interpolator.points()
    }

    pub fn curve(&self) -> &CurvePath {
        self.interpolator.curve()
    }

    pub fn path(&self) -> &PathStorage {
        &self.path
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.config.stroke
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current path flattened to a polyline.
    pub fn flattened(&self) -> Vec<PointD> {
        let mut path = self.path.clone();
        let mut cc = ConvCurve::new(&mut path);
        cc.set_approximation_scale(self.config.approximation_scale);
        cc.collect_points(0)
    }

    /// Region touched by the stroked path: the flattened bounds grown by
    /// `StrokeStyle::outset`, which accounts for the cap and join style.
    /// `None` while the path is empty.
    pub fn dirty_bounds(&self) -> Option<RectD> {
        let mut path = self.path.clone();
        let mut cc = ConvCurve::new(&mut path);
        cc.set_approximation_scale(self.config.approximation_scale);
        bounding_rect_single(&mut cc, 0).map(|r| r.expand(self.config.stroke.outset()))
    }
}

// ============================================================================
// Tests
// ============================================================================
