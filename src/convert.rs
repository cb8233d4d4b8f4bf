use crate::{
    axis::Axes,
    bounds::Bounds,
    buffers::{ErrorBuffer, FancyScatterBuffer, LineBuffer, ScatterBuffer},
    fancy, fast,
    options::TraceOptions,
    path::{self, ConversionPath, TraceFlags},
    render::ActiveMarkerRenderer,
};

/// Everything one update produces for a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub path: ConversionPath,
    /// Original index of each kept point.
    pub id_to_index: Vec<usize>,
    pub bounds: Bounds,
    pub line: LineBuffer,
    pub error_x: ErrorBuffer,
    pub error_y: ErrorBuffer,
    pub scatter: ScatterBuffer,
    pub fancy_scatter: FancyScatterBuffer,
    pub active_marker: ActiveMarkerRenderer,
}

/// Convert `options` through whichever path fits it.
///
/// The fancy path also feeds marker padding into the axes' autorange.
pub fn convert(options: &TraceOptions, axes: &mut Axes, flags: &TraceFlags) -> Converted {
    let path = path::select(options, axes, flags);
    log::debug!("{}: {:?} conversion of {} points", options.id, path, options.len());

    let converted = match path {
        ConversionPath::Fast => fast::convert(options, flags),
        ConversionPath::Fancy => fancy::convert(options, axes, flags),
    };

    log::trace!(
        "{}: kept {} points, line {} floats, markers {:?}",
        options.id,
        converted.id_to_index.len(),
        converted.line.positions.len(),
        converted.active_marker
    );
    converted
}
