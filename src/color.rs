//! Color parsing and the RGBA packing pipeline.
//!
//! Render primitives consume colors as flat `f32` RGBA quadruples. Everything
//! here produces either one quadruple or `4 * count` floats.
use crate::{
    Color,
    colorscale::{ColorMapping, Colorscale, DEFAULT_LINE_COLOR},
    style::StyleValue,
};

/// A packed RGBA color as consumed by the render primitives.
pub type Rgba = [f32; 4];

/// Parse a CSS-like color string.
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` and a handful of names.
pub fn parse_color(input: &str) -> Option<Color> {
    let s = input.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = s.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
        let parts = parse_components(body)?;
        let [r, g, b, a] = parts.as_slice() else {
            return None;
        };
        return Some(rgb_from_components(*r, *g, *b, *a));
    }
    if let Some(body) = s.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
        let parts = parse_components(body)?;
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        return Some(rgb_from_components(*r, *g, *b, 1.0));
    }
    named_color(&s)
}

/// Parse a color string, resolving anything unparseable to opaque black.
pub fn color_or_black(input: &str) -> Color {
    parse_color(input).unwrap_or(Color::BLACK)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 | 4 => {
            let r = nibble(0)? * 17;
            let g = nibble(1)? * 17;
            let b = nibble(2)? * 17;
            let a = if hex.len() == 4 { nibble(3)? * 17 } else { 255 };
            Some(Color::from_rgba8(r, g, b, a as f32 / 255.0))
        }
        6 | 8 => {
            let r = byte(0)?;
            let g = byte(2)?;
            let b = byte(4)?;
            let a = if hex.len() == 8 { byte(6)? } else { 255 };
            Some(Color::from_rgba8(r, g, b, a as f32 / 255.0))
        }
        _ => None,
    }
}

fn parse_components(body: &str) -> Option<Vec<f32>> {
    body.split(',')
        .map(|part| part.trim().parse::<f32>().ok())
        .collect()
}

fn rgb_from_components(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::from_rgba(
        (r / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (b / 255.0).clamp(0.0, 1.0),
        a.clamp(0.0, 1.0),
    )
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "yellow" => (255, 255, 0),
        "purple" => (128, 0, 128),
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::from_rgb8(r, g, b))
}

/// Pack `color` with its alpha multiplied by `opacity`.
pub fn to_rgba(color: Color, opacity: f32) -> Rgba {
    [color.r, color.g, color.b, color.a * opacity]
}

/// Where a trace element takes its color from.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Explicit colors, shared or per point.
    Solid(StyleValue<Color>),
    /// Numeric values mapped through a colorscale.
    Mapped {
        values: StyleValue<f64>,
        mapping: ColorMapping,
    },
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(StyleValue::Scalar(DEFAULT_LINE_COLOR))
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(StyleValue::Scalar(color))
    }
}

impl From<Vec<Color>> for Paint {
    fn from(colors: Vec<Color>) -> Self {
        Self::Solid(StyleValue::PerPoint(colors))
    }
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Self::Solid(StyleValue::Scalar(color_or_black(color)))
    }
}

impl Paint {
    /// Map `values` through `colorscale`, with the range taken from the data.
    pub fn mapped(values: impl Into<StyleValue<f64>>, colorscale: Colorscale) -> Self {
        Self::Mapped {
            values: values.into(),
            mapping: ColorMapping::new(colorscale),
        }
    }

    /// Whether the paint resolves to a different color per point.
    pub fn is_per_point(&self) -> bool {
        match self {
            Self::Solid(colors) => colors.is_per_point(),
            Self::Mapped { values, .. } => values.is_per_point(),
        }
    }

    /// Resolve to concrete colors, keeping the scalar/per-point shape.
    pub fn resolve(&self) -> StyleValue<Color> {
        match self {
            Self::Solid(colors) => colors.clone(),
            Self::Mapped { values, mapping } => {
                let range = match values {
                    StyleValue::Scalar(v) => mapping.range([v]),
                    StyleValue::PerPoint(vs) => mapping.range(vs),
                };
                values.map(|&v| mapping.map(v, range))
            }
        }
    }

    /// The single color used when a uniform color is needed.
    pub fn uniform(&self) -> Color {
        self.resolve().first().copied().unwrap_or(DEFAULT_LINE_COLOR)
    }
}

/// Solid-color resolution: `count` RGBA quadruples from colors and opacities.
pub fn solid_rgba(colors: &StyleValue<Color>, opacity: &StyleValue<f32>, count: usize) -> Vec<f32> {
    let colors = colors.resolve(count, DEFAULT_LINE_COLOR);
    let opacities = opacity.resolve(count, 1.0);
    pack(&colors, &opacities, 1.0)
}

/// Colorscale-aware resolution: `count` RGBA quadruples from a [`Paint`].
///
/// Alpha is multiplied by the per-point element opacity and by `trace_opacity`.
pub fn paint_rgba(
    paint: &Paint,
    element_opacity: &StyleValue<f32>,
    trace_opacity: f32,
    count: usize,
) -> Vec<f32> {
    let colors = paint.resolve().resolve(count, DEFAULT_LINE_COLOR);
    let opacities = element_opacity.resolve(count, 1.0);
    pack(&colors, &opacities, trace_opacity)
}

fn pack(colors: &[Color], opacities: &[f32], trace_opacity: f32) -> Vec<f32> {
    colors
        .iter()
        .zip(opacities)
        .flat_map(|(&c, &o)| to_rgba(c, o * trace_opacity))
        .collect()
}
