//! # hermite-path
//!
//! Smooth freehand strokes from sparse touch points.
//!
//! An ordered sequence of 2D points is fitted with a piecewise-cubic curve
//! that passes through every point. Tangents are estimated Catmull-Rom
//! style at interior points and one-sided at the two ends, and each piece
//! is emitted as a cubic Bézier segment.
//!
//! ## Architecture
//!
//! The crate follows a vertex-pipeline layout:
//!
//! 1. **Interpolator** — `hermite::interpolate` turns points into a
//!    `CurvePath`; `HermiteInterpolator` keeps one up to date as points
//!    arrive
//! 2. **Vertex Source** — `PathStorage` holds the `move_to` anchor and the
//!    `curve4` commands of a curve
//! 3. **Conversion** — `ConvCurve` flattens curves into line segments with
//!    `Curve4Div`
//! 4. **Session** — `DrawingSession` owns the stroke in progress, its path,
//!    style and dirty bounds
//!
//! ```
//! use hermite_path::{interpolate, PointD};
//!
//! let curve = interpolate(&[
//!     PointD::new(0.0, 0.0),
//!     PointD::new(10.0, 0.0),
//!     PointD::new(10.0, 10.0),
//! ]);
//! assert_eq!(curve.len(), 2);
//! assert_eq!(curve.end(), Some(PointD::new(10.0, 10.0)));
//! ```

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;

// Geometry
pub mod bounding_rect;
pub mod curves;
pub mod hermite;
pub mod path_storage;

// Converters
pub mod conv_curve;

// Drawing
pub mod config;
pub mod session;

pub use basics::{PointD, RectD, VertexSource};
pub use config::{LineCap, LineJoin, SessionConfig, StrokeStyle};
pub use error::{Error, Result};
pub use hermite::{interpolate, BezierSegment, CurvePath, HermiteInterpolator};
pub use path_storage::PathStorage;
pub use session::DrawingSession;
