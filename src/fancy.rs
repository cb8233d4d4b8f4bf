//! Conversion with axis transforms, error bars and per-point marker styling.
use std::sync::Arc;

use crate::{
    axis::{Axes, ExpandOptions},
    bounds::Bounds,
    buffers::{FancyScatterBuffer, ScatterBuffer},
    builders::{ResolvedMarkers, error_buffer, line_buffer},
    convert::Converted,
    error_bars::calc_bounds,
    options::TraceOptions,
    path::{ConversionPath, TraceFlags},
    render::ActiveMarkerRenderer,
};

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

pub(crate) fn convert(options: &TraceOptions, axes: &mut Axes, flags: &TraceFlags) -> Converted {
    let len = options.len();
    let x = axes
        .x
        .make_calcdata(options.x.as_deref(), options.x0, options.dx, len);
    let y = axes
        .y
        .make_calcdata(options.y.as_deref(), options.y0, options.dy, len);
    let errors = calc_bounds(&x, &y, &options.error_x, &options.error_y);

    let mut id_to_index = Vec::with_capacity(len);
    let mut positions = Vec::with_capacity(2 * len);
    let mut errors_x = Vec::with_capacity(4 * len);
    let mut errors_y = Vec::with_capacity(4 * len);
    let mut bounds = Bounds::EMPTY;

    for (i, e) in errors.iter().enumerate() {
        let xx = axes.x.data_to_linear(x[i]);
        let yy = axes.y.data_to_linear(y[i]);
        if !xx.is_finite() || !yy.is_finite() {
            continue;
        }
        id_to_index.push(i);
        positions.push(xx as f32);
        positions.push(yy as f32);

        let ex0 = finite_or_zero(xx - axes.x.data_to_linear(e.x_low));
        let ex1 = finite_or_zero(axes.x.data_to_linear(e.x_high) - xx);
        let ey0 = finite_or_zero(yy - axes.y.data_to_linear(e.y_low));
        let ey1 = finite_or_zero(axes.y.data_to_linear(e.y_high) - yy);
        errors_x.extend_from_slice(&[ex0 as f32, ex1 as f32, 0.0, 0.0]);
        errors_y.extend_from_slice(&[0.0, 0.0, ey0 as f32, ey1 as f32]);

        bounds.expand_range((xx - ex0, xx + ex1), (yy - ey0, yy + ey1));
    }

    let positions: Arc<[f32]> = positions.into();
    let line = line_buffer(options, flags, &positions);
    let error_x = error_buffer(&options.error_x, flags.has_error_x, &positions, errors_x);
    let error_y = error_buffer(&options.error_y, flags.has_error_y, &positions, errors_y);

    let (fancy_scatter, active_marker) = if flags.has_markers {
        let markers = ResolvedMarkers::resolve(&options.marker, options.opacity, len);
        let fancy_scatter = markers.gather(&id_to_index, &positions);

        let expand = ExpandOptions {
            padded: true,
            ppad: Some(markers.sizes.as_slice()),
        };
        axes.x.expand(&x, expand);
        axes.y.expand(&y, expand);

        (fancy_scatter, ActiveMarkerRenderer::Fancy)
    } else {
        (FancyScatterBuffer::default(), ActiveMarkerRenderer::None)
    };

    Converted {
        path: ConversionPath::Fancy,
        id_to_index,
        bounds,
        line,
        error_x,
        error_y,
        scatter: ScatterBuffer::default(),
        fancy_scatter,
        active_marker,
    }
}
