//! Builders turning trace options plus converted positions into buffer states.
use std::sync::Arc;

use crate::{
    bubble::BubbleSizing,
    buffers::{ErrorBuffer, FancyScatterBuffer, LineBuffer, ScatterBuffer},
    color::{paint_rgba, to_rgba},
    error_bars::ErrorBarOptions,
    options::{MarkerOptions, TraceOptions},
    path::TraceFlags,
    symbol::{DEFAULT_GLYPH, glyph_for},
};

/// Build the line state sharing `positions`, or an empty one when lines are off.
pub(crate) fn line_buffer(
    options: &TraceOptions,
    flags: &TraceFlags,
    positions: &Arc<[f32]>,
) -> LineBuffer {
    if !flags.has_lines {
        return LineBuffer::default();
    }

    let line = &options.line;
    let mut color = to_rgba(line.color, 1.0);
    if flags.has_markers {
        color[3] *= options.marker.uniform_opacity();
    }

    let width = 2.0 * line.width;
    let dash_unit = (0.5 * width).round();
    let dashes = line.dash.template().iter().map(|d| d * dash_unit).collect();

    let fill_color = to_rgba(options.resolved_fill_color(), 1.0);

    LineBuffer {
        positions: Arc::clone(positions),
        color,
        width,
        fill: options.fill.flags(),
        fill_color: [fill_color; 4],
        dashes,
    }
}

/// Build one error-bar state, or an empty one when `enabled` is false.
pub(crate) fn error_buffer(
    options: &ErrorBarOptions,
    enabled: bool,
    positions: &Arc<[f32]>,
    errors: Vec<f32>,
) -> ErrorBuffer {
    if !enabled {
        return ErrorBuffer::default();
    }
    ErrorBuffer {
        positions: Arc::clone(positions),
        errors: errors.into(),
        cap_size: options.width,
        line_width: options.thickness / 2.0,
        color: to_rgba(options.color, 1.0),
    }
}

/// Uniform marker state for the fast path.
pub(crate) fn scatter_buffer(options: &TraceOptions, positions: &Arc<[f32]>) -> ScatterBuffer {
    let marker = &options.marker;
    let opacity = options.opacity * marker.uniform_opacity();
    let size = marker.size.first().copied().unwrap_or(0.0);

    ScatterBuffer {
        positions: Arc::clone(positions),
        size: marker_size(marker.sizing.as_ref(), size) as f32,
        color: to_rgba(marker.color.uniform(), opacity),
        border_size: marker.line.width.first().copied().unwrap_or(0.0),
        border_color: to_rgba(marker.line.color.uniform(), opacity),
    }
}

fn marker_size(sizing: Option<&BubbleSizing>, v: f64) -> f64 {
    match sizing {
        Some(sizing) => sizing.size(v),
        None => v,
    }
}

/// Per-point marker attributes resolved once per original point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedMarkers {
    /// Sizes before the render scale factor; also the autorange padding.
    pub(crate) sizes: Vec<f64>,
    pub(crate) colors: Vec<f32>,
    pub(crate) glyphs: Vec<char>,
    pub(crate) border_widths: Vec<f32>,
    pub(crate) border_colors: Vec<f32>,
}

impl ResolvedMarkers {
    pub(crate) fn resolve(marker: &MarkerOptions, trace_opacity: f32, count: usize) -> Self {
        let sizing = marker.sizing.as_ref();
        Self {
            sizes: marker.size.resolve_with(count, 0.0, |&v| marker_size(sizing, v)),
            colors: paint_rgba(&marker.color, &marker.opacity, trace_opacity, count),
            glyphs: marker.symbol.resolve_with(count, DEFAULT_GLYPH, |s| glyph_for(s)),
            border_widths: marker.line.width.resolve(count, 0.0),
            border_colors: paint_rgba(&marker.line.color, &marker.opacity, trace_opacity, count),
        }
    }

    /// Gather the kept points into a compact per-point marker state.
    ///
    /// Sizes are scaled by 4 and border widths by 0.5 for the glyph renderer.
    pub(crate) fn gather(
        &self,
        id_to_index: &[usize],
        positions: &Arc<[f32]>,
    ) -> FancyScatterBuffer {
        let n = id_to_index.len();
        let mut out = FancyScatterBuffer {
            positions: Arc::clone(positions),
            sizes: Vec::with_capacity(n),
            colors: Vec::with_capacity(4 * n),
            glyphs: Vec::with_capacity(n),
            border_widths: Vec::with_capacity(n),
            border_colors: Vec::with_capacity(4 * n),
        };
        for &index in id_to_index {
            out.sizes.push(4.0 * self.sizes[index] as f32);
            out.glyphs.push(self.glyphs[index]);
            out.border_widths.push(0.5 * self.border_widths[index]);
            out.colors.extend_from_slice(&self.colors[4 * index..4 * index + 4]);
            out.border_colors
                .extend_from_slice(&self.border_colors[4 * index..4 * index + 4]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Color,
        error_bars::ErrorKind,
        line_style::{FillMode, LineDash, LineOptions},
        options::Mode,
    };

    fn positions() -> Arc<[f32]> {
        Arc::from(vec![0.0_f32, 1.0, 2.0, 3.0])
    }

    #[test]
    fn line_width_doubles_and_dashes_scale() {
        let options = TraceOptions::new()
            .with_mode(Mode::LINES)
            .with_line(LineOptions::default().with_width(3.0).with_dash(LineDash::Dash))
            .with_fill(FillMode::ToZeroY, Some(Color::WHITE));
        let flags = TraceFlags::from_options(&options);
        let p = positions();
        let line = line_buffer(&options, &flags, &p);
        assert_eq!(line.width, 6.0);
        assert_eq!(line.dashes, vec![12.0, 3.0]);
        assert_eq!(line.fill, [false, true, false, false]);
        assert_eq!(line.fill_color, [[1.0, 1.0, 1.0, 1.0]; 4]);
        assert!(Arc::ptr_eq(&line.positions, &p));
    }

    #[test]
    fn line_alpha_follows_marker_opacity_when_markers_are_on() {
        let options = TraceOptions::new()
            .with_line(LineOptions::default().with_color(Color::from_rgba(0.0, 0.0, 0.0, 0.8)))
            .with_marker(MarkerOptions::default().with_opacity(0.5));
        let line = line_buffer(&options, &TraceFlags::from_options(&options), &positions());
        assert!((line.color[3] - 0.4).abs() < 1e-6);

        let no_markers = options.clone().with_mode(Mode::LINES);
        let line = line_buffer(&no_markers, &TraceFlags::from_options(&no_markers), &positions());
        assert!((line.color[3] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn disabled_line_is_empty() {
        let options = TraceOptions::new().with_mode(Mode::MARKERS);
        let line = line_buffer(&options, &TraceFlags::from_options(&options), &positions());
        assert!(line.positions.is_empty());
    }

    #[test]
    fn error_line_width_is_half_the_thickness() {
        let opts = ErrorBarOptions::new(ErrorKind::Constant(1.0))
            .with_thickness(4.0)
            .with_width(7.0)
            .with_color(Color::from_rgba(1.0, 0.0, 0.0, 0.5));
        let buffer = error_buffer(&opts, true, &positions(), vec![0.0; 8]);
        assert_eq!(buffer.line_width, 2.0);
        assert_eq!(buffer.cap_size, 7.0);
        assert_eq!(buffer.color, [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(buffer.errors.len(), 8);

        assert!(error_buffer(&opts, false, &positions(), vec![]).positions.is_empty());
    }

    #[test]
    fn uniform_markers_compose_trace_and_marker_opacity() {
        let options = TraceOptions::new().with_opacity(0.5).with_marker(
            MarkerOptions::default()
                .with_color(Color::from_rgb(1.0, 0.0, 0.0))
                .with_opacity(0.5)
                .with_size(9.0)
                .with_border(Color::from_rgb(0.0, 1.0, 0.0), 2.0),
        );
        let scatter = scatter_buffer(&options, &positions());
        assert_eq!(scatter.color, [1.0, 0.0, 0.0, 0.25]);
        assert_eq!(scatter.border_color, [0.0, 1.0, 0.0, 0.25]);
        assert_eq!(scatter.size, 9.0);
        assert_eq!(scatter.border_size, 2.0);
    }

    #[test]
    fn gather_scales_sizes_and_border_widths() {
        let marker = MarkerOptions::default()
            .with_size(vec![5.0, 10.0])
            .with_symbol(vec!["square", "bogus"])
            .with_border(Color::BLACK, vec![2.0, 4.0, 6.0]);
        let resolved = ResolvedMarkers::resolve(&marker, 1.0, 3);
        assert_eq!(resolved.sizes, vec![5.0, 10.0, 5.0]);

        let kept: Arc<[f32]> = Arc::from(vec![0.0_f32, 0.0, 1.0, 1.0]);
        let fancy = resolved.gather(&[0, 2], &kept);
        assert_eq!(fancy.sizes, vec![20.0, 20.0]);
        assert_eq!(fancy.glyphs, vec!['■', '■']);
        assert_eq!(fancy.border_widths, vec![1.0, 3.0]);
        assert_eq!(fancy.colors.len(), 8);
        assert_eq!(fancy.border_colors.len(), 8);
    }
}
