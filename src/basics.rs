//! Foundation types, constants, and path command utilities.
//!
//! Points, rectangles, vertices, the path command vocabulary and the
//! `VertexSource` trait that every path producer and consumer in this crate
//! speaks.

use core::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Inclusive containment test.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

impl Rect<f64> {
    /// Grow the rectangle by `d` on every side.
    pub fn expand(&self, d: f64) -> Self {
        Self::new(self.x1 - d, self.y1 - d, self.x2 + d, self.y2 + d)
    }
}

pub type RectD = Rect<f64>;

// ============================================================================
// Path commands
// ============================================================================

// Open paths only: no end_poly or close commands.
pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
/// Cubic curve; emitted as three consecutive vertices (control1, control2,
/// end).
pub const PATH_CMD_CURVE4: u32 = 4;

// ============================================================================
// Path command query functions
// ============================================================================

/// True for commands that carry a coordinate.
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..=PATH_CMD_CURVE4).contains(&c)
}

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_curve4(c: u32) -> bool {
    c == PATH_CMD_CURVE4
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl PointBase<f64> {
    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Copy + Add<Output = T>> Add for PointBase<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for PointBase<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for PointBase<T> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for PointBase<T> {
    type Output = Self;
    fn div(self, k: T) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

pub type PointD = PointBase<f64>;

// ============================================================================
// Vertex
// ============================================================================

/// A vertex with coordinates and a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBase<T: Copy> {
    pub x: T,
    pub y: T,
    pub cmd: u32,
}

impl<T: Copy> VertexBase<T> {
    pub fn new(x: T, y: T, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

pub type VertexD = VertexBase<f64>;

// ============================================================================
// VertexSource trait
// ============================================================================

/// The fundamental vertex source interface. Paths, curve flatteners and
/// converters implement this trait to produce a stream of vertices.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    /// `path_id` selects which sub-path to iterate (0 for the first/only path).
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

/// Blanket implementation so `&mut T` can be used as a VertexSource.
/// This allows pipeline stages to borrow their source instead of owning it.
impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_valid_and_hit_test() {
        let r = RectD::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.is_valid());
        assert!(r.hit_test(15.0, 25.0));
        assert!(r.hit_test(10.0, 20.0));
        assert!(r.hit_test(30.0, 40.0));
        assert!(!r.hit_test(5.0, 25.0));
        assert!(!r.hit_test(15.0, 45.0));

        assert!(!RectD::new(30.0, 40.0, 10.0, 20.0).is_valid());
    }

    #[test]
    fn test_rect_expand() {
        let r = RectD::new(10.0, 20.0, 30.0, 40.0).expand(5.0);
        assert_eq!(r, RectD::new(5.0, 15.0, 35.0, 45.0));
        assert_eq!(RectD::new(1.0, 1.0, 1.0, 1.0).expand(0.0), RectD::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_path_command_classification() {
        assert!(is_stop(PATH_CMD_STOP));
        assert!(!is_stop(PATH_CMD_MOVE_TO));

        assert!(is_move_to(PATH_CMD_MOVE_TO));
        assert!(!is_move_to(PATH_CMD_CURVE4));

        assert!(is_vertex(PATH_CMD_MOVE_TO));
        assert!(is_vertex(PATH_CMD_LINE_TO));
        assert!(is_vertex(PATH_CMD_CURVE4));
        assert!(!is_vertex(PATH_CMD_STOP));
        assert!(!is_vertex(5));

        assert!(is_curve4(PATH_CMD_CURVE4));
        assert!(!is_curve4(PATH_CMD_LINE_TO));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = PointD::new(1.5, 2.5);
        let b = PointD::new(0.5, -1.0);
        assert_eq!(a + b, PointD::new(2.0, 1.5));
        assert_eq!(a - b, PointD::new(1.0, 3.5));
        assert_eq!(a * 2.0, PointD::new(3.0, 5.0));
        assert_eq!(b / 0.5, PointD::new(1.0, -2.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(PointD::new(1.0, -3.0).is_finite());
        assert!(!PointD::new(f64::NAN, 0.0).is_finite());
        assert!(!PointD::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_vertex_source_through_mut_ref() {
        struct One(bool);
        impl VertexSource for One {
            fn rewind(&mut self, _: u32) {
                self.0 = false;
            }
            fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
                if self.0 {
                    return PATH_CMD_STOP;
                }
                self.0 = true;
                *x = 3.0;
                *y = 4.0;
                PATH_CMD_MOVE_TO
            }
        }

        fn first<VS: VertexSource>(mut vs: VS) -> (u32, f64, f64) {
            let (mut x, mut y) = (0.0, 0.0);
            vs.rewind(0);
            let cmd = vs.vertex(&mut x, &mut y);
            (cmd, x, y)
        }

        let mut src = One(true);
        assert_eq!(first(&mut src), (PATH_CMD_MOVE_TO, 3.0, 4.0));
        let (mut x, mut y) = (0.0, 0.0);
        assert!(is_stop(src.vertex(&mut x, &mut y)));
        let v = VertexD::new(3.0, 4.0, PATH_CMD_MOVE_TO);
        assert_eq!(v.cmd, PATH_CMD_MOVE_TO);
    }
}
