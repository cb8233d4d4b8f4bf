use crate::{
    axis::Axes,
    options::{TraceOptions, Visibility},
    style::StyleValue,
    symbol::DEFAULT_SYMBOL,
};

/// Which elements of a trace are drawn on this update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceFlags {
    pub has_lines: bool,
    pub has_error_x: bool,
    pub has_error_y: bool,
    pub has_markers: bool,
}

impl TraceFlags {
    /// Derive the flags from the mode and error bar visibility.
    ///
    /// Anything but a visible trace draws nothing.
    pub fn from_options(options: &TraceOptions) -> Self {
        if options.visible != Visibility::Visible {
            return Self::default();
        }
        Self {
            has_lines: options.mode.lines,
            has_error_x: options.error_x.visible,
            has_error_y: options.error_y.visible,
            has_markers: options.mode.markers,
        }
    }
}

/// The two conversion strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    /// Linear axes and uniform marker styling.
    Fast,
    /// Everything else: axis transforms, error bars and per-point styling.
    Fancy,
}

/// Pick the conversion path for `options` drawn against `axes`.
pub fn select(options: &TraceOptions, axes: &Axes, flags: &TraceFlags) -> ConversionPath {
    if is_fancy(options, axes, flags) {
        ConversionPath::Fancy
    } else {
        ConversionPath::Fast
    }
}

fn is_fancy(options: &TraceOptions, axes: &Axes, flags: &TraceFlags) -> bool {
    if !axes.x.scale.is_linear() || !axes.y.scale.is_linear() {
        return true;
    }
    if options.x.is_none() || options.y.is_none() {
        return true;
    }

    let marker = &options.marker;
    let symbol_is_default = matches!(&marker.symbol, StyleValue::Scalar(s) if s == DEFAULT_SYMBOL);
    if !symbol_is_default
        || marker.size.is_per_point()
        || marker.line.width.is_per_point()
        || marker.opacity.is_per_point()
        || marker.color.is_per_point()
        || marker.line.color.is_per_point()
    {
        return true;
    }

    flags.has_error_x || flags.has_error_y
}
