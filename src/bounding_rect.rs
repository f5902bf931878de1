//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source.

use crate::basics::{is_stop, is_vertex, RectD, VertexSource};

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices, and
/// returns the axis-aligned bounding box. Returns `None` if no vertices
/// are found.
///
/// Control points of curve commands count as vertices; flatten the source
/// with `ConvCurve` first for the tight bounds of the drawn curve.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<RectD> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut rect: Option<RectD> = None;

    vs.rewind(path_id);
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if !is_vertex(cmd) {
            continue;
        }
        rect = Some(match rect {
            None => RectD::new(x, y, x, y),
            Some(r) => RectD::new(r.x1.min(x), r.y1.min(y), r.x2.max(x), r.y2.max(y)),
        });
    }

    rect.filter(|r| r.is_valid())
}
