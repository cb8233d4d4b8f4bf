use crate::Color;
use crate::colorscale::DEFAULT_LINE_COLOR;

/// How an error bar's extent is derived from the data.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A percentage of the data value.
    Percent(f64),
    /// A fixed offset.
    Constant(f64),
    /// The square root of the data value.
    Sqrt,
    /// Explicit per-point offsets.
    Data(Vec<f64>),
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::Percent(10.0)
    }
}

impl ErrorKind {
    fn offset(&self, value: f64, index: usize) -> f64 {
        match self {
            Self::Percent(p) => (value * p / 100.0).abs(),
            Self::Constant(c) => c.abs(),
            Self::Sqrt => value.abs().sqrt(),
            Self::Data(array) => array.get(index).copied().unwrap_or(f64::NAN),
        }
    }
}

/// Error bar settings for one axis of a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarOptions {
    pub visible: bool,
    /// Extent above (or right of) the point.
    pub kind: ErrorKind,
    /// Extent below (or left of) the point; ignored when `symmetric`.
    pub minus: Option<ErrorKind>,
    pub symmetric: bool,
    pub color: Color,
    /// Cap width in pixels.
    pub width: f32,
    /// Stroke thickness in pixels.
    pub thickness: f32,
}

impl Default for ErrorBarOptions {
    fn default() -> Self {
        Self {
            visible: false,
            kind: ErrorKind::default(),
            minus: None,
            symmetric: true,
            color: DEFAULT_LINE_COLOR,
            width: 4.0,
            thickness: 2.0,
        }
    }
}

impl ErrorBarOptions {
    /// Visible symmetric error bars of the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            visible: true,
            kind,
            ..Self::default()
        }
    }

    /// Use a different extent below the point.
    pub fn with_minus(mut self, minus: ErrorKind) -> Self {
        self.minus = Some(minus);
        self.symmetric = false;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// `(low, high)` bounds around `value` at `index`; NaN when hidden.
    pub fn bounds(&self, value: f64, index: usize) -> (f64, f64) {
        if !self.visible {
            return (f64::NAN, f64::NAN);
        }
        let plus = self.kind.offset(value, index);
        let minus = match (&self.minus, self.symmetric) {
            (Some(minus), false) => minus.offset(value, index),
            _ => plus,
        };
        (value - minus, value + plus)
    }
}

/// Error bounds of one original data point, in data units.
///
/// Hidden error bars leave their axis' bounds NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBounds {
    pub x_low: f64,
    pub x_high: f64,
    pub y_low: f64,
    pub y_high: f64,
}

/// Compute the error bounds of every point, aligned with the input indices.
pub fn calc_bounds(
    x: &[f64],
    y: &[f64],
    error_x: &ErrorBarOptions,
    error_y: &ErrorBarOptions,
) -> Vec<ErrorBounds> {
    x.iter()
        .zip(y)
        .enumerate()
        .map(|(i, (&xv, &yv))| {
            let (x_low, x_high) = error_x.bounds(xv, i);
            let (y_low, y_high) = error_y.bounds(yv, i);
            ErrorBounds {
                x_low,
                x_high,
                y_low,
                y_high,
            }
        })
        .collect()
}
