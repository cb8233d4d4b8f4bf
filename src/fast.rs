//! Conversion for linear axes and uniform marker styling.
use std::sync::Arc;

use glam::DVec2;

use crate::{
    bounds::Bounds,
    buffers::{ErrorBuffer, FancyScatterBuffer, ScatterBuffer},
    builders::{line_buffer, scatter_buffer},
    convert::Converted,
    options::TraceOptions,
    path::{ConversionPath, TraceFlags},
    render::ActiveMarkerRenderer,
};

/// Single pass over the raw coordinate pairs.
///
/// Callers only take this path when both coordinate arrays are present.
pub(crate) fn convert(options: &TraceOptions, flags: &TraceFlags) -> Converted {
    let x = options.x.as_deref().unwrap_or_default();
    let y = options.y.as_deref().unwrap_or_default();
    let len = x.len().min(y.len());

    let mut id_to_index = Vec::with_capacity(len);
    let mut positions = Vec::with_capacity(2 * len);
    let mut bounds = Bounds::EMPTY;

    for (i, (&xx, &yy)) in x.iter().zip(y).enumerate() {
        if !xx.is_finite() || !yy.is_finite() {
            continue;
        }
        id_to_index.push(i);
        positions.push(xx as f32);
        positions.push(yy as f32);
        bounds.expand(DVec2::new(xx, yy));
    }

    let positions: Arc<[f32]> = positions.into();
    let line = line_buffer(options, flags, &positions);

    let (scatter, active_marker) = if flags.has_markers {
        (scatter_buffer(options, &positions), ActiveMarkerRenderer::Fast)
    } else {
        (ScatterBuffer::default(), ActiveMarkerRenderer::None)
    };

    Converted {
        path: ConversionPath::Fast,
        id_to_index,
        bounds,
        line,
        error_x: ErrorBuffer::default(),
        error_y: ErrorBuffer::default(),
        scatter,
        fancy_scatter: FancyScatterBuffer::default(),
        active_marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Mode;

    #[test]
    fn non_finite_pairs_are_dropped() {
        let options = TraceOptions::new()
            .with_x(vec![1.0, 2.0, f64::NAN, 4.0])
            .with_y(vec![1.0, f64::NAN, 3.0, 4.0])
            .with_mode(Mode::LINES);
        let out = convert(&options, &TraceFlags::from_options(&options));
        assert_eq!(out.id_to_index, vec![0, 3]);
        assert_eq!(&*out.line.positions, &[1.0, 1.0, 4.0, 4.0]);
        assert_eq!(out.bounds.to_array(), [1.0, 1.0, 4.0, 4.0]);
        assert_eq!(out.active_marker, ActiveMarkerRenderer::None);
        assert!(out.scatter.positions.is_empty());
    }

    #[test]
    fn infinities_are_dropped_too() {
        let options = TraceOptions::new()
            .with_x(vec![f64::INFINITY, 2.0])
            .with_y(vec![0.0, f64::NEG_INFINITY]);
        let out = convert(&options, &TraceFlags::from_options(&options));
        assert!(out.id_to_index.is_empty());
        assert!(out.bounds.is_empty());
    }

    #[test]
    fn markers_go_to_the_uniform_renderer() {
        let options = TraceOptions::new()
            .with_points(&[[0.0, 0.0], [1.0, 2.0]])
            .with_mode(Mode::MARKERS);
        let out = convert(&options, &TraceFlags::from_options(&options));
        assert_eq!(out.active_marker, ActiveMarkerRenderer::Fast);
        assert_eq!(out.scatter.positions.len(), 4);
        assert!(out.fancy_scatter.is_empty());
        assert!(out.line.positions.is_empty());
        assert!(out.error_x.positions.is_empty() && out.error_y.positions.is_empty());
    }
}
