//! Mapping primitive hits back to the original trace data.
use glam::DVec2;

use crate::{Color, options::HoverInfo, options::TraceId};

/// A hit reported by a render primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index into the primitive's compacted position buffer.
    pub point_id: usize,
    /// Linearized coordinate of the hit point.
    pub data_coord: DVec2,
}

/// Everything a hover label or click handler needs about a picked point.
#[derive(Debug, Clone, PartialEq)]
pub struct PickInfo {
    pub trace: TraceId,
    /// Index of the point in the trace's input arrays.
    pub point_index: usize,
    /// Linearized coordinate of the hit, as reported by the primitive.
    pub data_coord: DVec2,
    /// The point's original `(x, y)` input values.
    pub trace_coord: DVec2,
    /// Text label for the point, if any.
    pub text: Option<String>,
    /// Display color for the point.
    pub color: Option<Color>,
    pub name: String,
    pub hover_info: HoverInfo,
}

/// Find the position nearest to `target` within `radius`.
///
/// `positions` is a flat `[x0, y0, x1, y1, ...]` buffer. Ties keep the lower id.
pub fn nearest_point(positions: &[f32], target: DVec2, radius: f64) -> Option<PickHit> {
    let mut best: Option<(usize, f64)> = None;
    let r2 = radius * radius;

    for (idx, pair) in positions.chunks_exact(2).enumerate() {
        let p = DVec2::new(pair[0] as f64, pair[1] as f64);
        let d2 = p.distance_squared(target);
        if d2 > r2 {
            continue;
        }
        match best {
            Some((_, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((idx, d2)),
        }
    }

    let (point_id, _) = best?;
    let pair = &positions[2 * point_id..2 * point_id + 2];
    Some(PickHit {
        point_id,
        data_coord: DVec2::new(pair[0] as f64, pair[1] as f64),
    })
}
