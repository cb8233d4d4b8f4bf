use core::fmt;

use crate::{
    Color,
    bubble::BubbleSizing,
    color::Paint,
    error_bars::ErrorBarOptions,
    line_style::{FillMode, LineOptions},
    style::StyleValue,
    symbol::DEFAULT_SYMBOL,
};

/// Unique identifier for a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(pub(crate) u64);

impl TraceId {
    /// Create a new unique trace ID (0, 1, 2, ...).
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trace({})", self.0)
    }
}

/// Whether a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    /// Listed in the legend but not drawn.
    LegendOnly,
}

/// Which trace elements are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub lines: bool,
    pub markers: bool,
}

impl Default for Mode {
    fn default() -> Self {
        Self::LINES_MARKERS
    }
}

impl Mode {
    pub const LINES: Self = Self {
        lines: true,
        markers: false,
    };
    pub const MARKERS: Self = Self {
        lines: false,
        markers: true,
    };
    pub const LINES_MARKERS: Self = Self {
        lines: true,
        markers: true,
    };

    /// Parse a `+`-separated flag list such as `"lines+markers"`.
    ///
    /// Unknown flags (e.g. `"text"`) are ignored; `"none"` draws nothing.
    pub fn parse(flags: &str) -> Self {
        let mut mode = Self {
            lines: false,
            markers: false,
        };
        for flag in flags.split('+').map(str::trim) {
            match flag {
                "lines" => mode.lines = true,
                "markers" => mode.markers = true,
                _ => {}
            }
        }
        mode
    }
}

/// Which fields a hover label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverInfo {
    #[default]
    All,
    None,
    /// No hover label and no hover events.
    Skip,
    Fields {
        x: bool,
        y: bool,
        text: bool,
        name: bool,
    },
}

impl HoverInfo {
    /// Parse `"all"`, `"none"`, `"skip"` or a flag list such as `"x+y+text"`.
    pub fn parse(flags: &str) -> Self {
        match flags.trim() {
            "all" => Self::All,
            "none" => Self::None,
            "skip" => Self::Skip,
            list => {
                let mut fields = (false, false, false, false);
                for flag in list.split('+').map(str::trim) {
                    match flag {
                        "x" => fields.0 = true,
                        "y" => fields.1 = true,
                        "text" => fields.2 = true,
                        "name" => fields.3 = true,
                        _ => {}
                    }
                }
                Self::Fields {
                    x: fields.0,
                    y: fields.1,
                    text: fields.2,
                    name: fields.3,
                }
            }
        }
    }
}

/// Stroke drawn around each marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLine {
    pub color: Paint,
    pub width: StyleValue<f32>,
}

impl Default for MarkerLine {
    fn default() -> Self {
        Self {
            color: Paint::default(),
            width: StyleValue::Scalar(0.0),
        }
    }
}

/// Marker styling options for a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub color: Paint,
    /// Marker size in pixels, or a size metric when `sizing` is set.
    pub size: StyleValue<f64>,
    /// Symbol names such as `"circle"` or `"square-open"`.
    pub symbol: StyleValue<String>,
    pub opacity: StyleValue<f32>,
    pub line: MarkerLine,
    /// Maps `size` values to rendered sizes. Sizes pass through when `None`.
    pub sizing: Option<BubbleSizing>,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            color: Paint::from(Color::from_rgb(0.3, 0.3, 0.9)),
            size: StyleValue::Scalar(6.0),
            symbol: StyleValue::Scalar(DEFAULT_SYMBOL.to_owned()),
            opacity: StyleValue::Scalar(1.0),
            line: MarkerLine::default(),
            sizing: None,
        }
    }
}

impl MarkerOptions {
    pub fn with_color(mut self, color: impl Into<Paint>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<StyleValue<f64>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<StyleValue<String>>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_opacity(mut self, opacity: impl Into<StyleValue<f32>>) -> Self {
        self.opacity = opacity.into();
        self
    }

    /// Set the border color and width.
    pub fn with_border(
        mut self,
        color: impl Into<Paint>,
        width: impl Into<StyleValue<f32>>,
    ) -> Self {
        self.line = MarkerLine {
            color: color.into(),
            width: width.into(),
        };
        self
    }

    pub fn with_sizing(mut self, sizing: BubbleSizing) -> Self {
        self.sizing = Some(sizing);
        self
    }

    /// Marker opacity where a single value is needed.
    pub(crate) fn uniform_opacity(&self) -> f32 {
        self.opacity.first().copied().unwrap_or(1.0)
    }
}

/// Full description of one 2D point/line/error series.
///
/// # Example
///
/// ```
/// use scatter_gl::{Mode, TraceOptions};
///
/// let trace = TraceOptions::new()
///     .with_x(vec![1.0, 2.0, 3.0])
///     .with_y(vec![2.0, 4.0, 8.0])
///     .with_mode(Mode::LINES)
///     .with_name("doubling");
/// assert_eq!(trace.name, "doubling");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TraceOptions {
    pub id: TraceId,
    pub visible: Visibility,
    pub mode: Mode,
    /// X values; generated from `x0`/`dx` when absent.
    pub x: Option<Vec<f64>>,
    /// Y values; generated from `y0`/`dy` when absent.
    pub y: Option<Vec<f64>>,
    pub x0: f64,
    pub dx: f64,
    pub y0: f64,
    pub dy: f64,
    pub text: StyleValue<String>,
    pub name: String,
    pub hover_info: HoverInfo,
    /// Opacity of the whole trace.
    pub opacity: f32,
    pub line: LineOptions,
    pub fill: FillMode,
    /// Fill color; the line color at half alpha when `None`.
    pub fill_color: Option<Color>,
    pub marker: MarkerOptions,
    pub error_x: ErrorBarOptions,
    pub error_y: ErrorBarOptions,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceOptions {
    /// Create an empty, visible lines+markers trace with a fresh id.
    pub fn new() -> Self {
        Self {
            id: TraceId::new(),
            visible: Visibility::Visible,
            mode: Mode::default(),
            x: None,
            y: None,
            x0: 0.0,
            dx: 1.0,
            y0: 0.0,
            dy: 1.0,
            text: StyleValue::Scalar(String::new()),
            name: String::new(),
            hover_info: HoverInfo::All,
            opacity: 1.0,
            line: LineOptions::default(),
            fill: FillMode::None,
            fill_color: None,
            marker: MarkerOptions::default(),
            error_x: ErrorBarOptions::default(),
            error_y: ErrorBarOptions::default(),
        }
    }

    pub fn with_x(mut self, x: Vec<f64>) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    /// Set both coordinate arrays from `[x, y]` pairs.
    pub fn with_points(self, points: &[[f64; 2]]) -> Self {
        let (x, y) = points.iter().map(|p| (p[0], p[1])).unzip();
        self.with_x(x).with_y(y)
    }

    pub fn with_visible(mut self, visible: Visibility) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_text(mut self, text: impl Into<StyleValue<String>>) -> Self {
        self.text = text.into();
        self
    }

    /// Set a name for the trace.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_hover_info(mut self, hover_info: HoverInfo) -> Self {
        self.hover_info = hover_info;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_line(mut self, line: LineOptions) -> Self {
        self.line = line;
        self
    }

    /// Set the fill mode and, optionally, its color.
    pub fn with_fill(mut self, fill: FillMode, color: Option<Color>) -> Self {
        self.fill = fill;
        self.fill_color = color;
        self
    }

    pub fn with_marker(mut self, marker: MarkerOptions) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_error_x(mut self, error_x: ErrorBarOptions) -> Self {
        self.error_x = error_x;
        self
    }

    pub fn with_error_y(mut self, error_y: ErrorBarOptions) -> Self {
        self.error_y = error_y;
        self
    }

    /// Number of points described by the coordinate arrays.
    pub fn len(&self) -> usize {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => x.len().min(y.len()),
            (Some(v), None) | (None, Some(v)) => v.len(),
            (None, None) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill color, defaulting to the line color at half alpha.
    pub(crate) fn resolved_fill_color(&self) -> Color {
        self.fill_color.unwrap_or(Color {
            a: self.line.color.a * 0.5,
            ..self.line.color
        })
    }
}
