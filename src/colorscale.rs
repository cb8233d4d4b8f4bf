use crate::Color;

/// Color used for values a colorscale cannot place (NaN, infinities).
pub(crate) const DEFAULT_LINE_COLOR: Color = Color {
    r: 68.0 / 255.0,
    g: 68.0 / 255.0,
    b: 68.0 / 255.0,
    a: 1.0,
};

/// A gradient mapping normalized values in `[0, 1]` to colors.
///
/// Stops are kept sorted by position; sampling interpolates linearly in RGBA
/// between neighbouring stops and clamps outside the first and last stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorscale {
    stops: Vec<(f64, Color)>,
}

impl Colorscale {
    /// Create a colorscale from `(position, color)` stops.
    ///
    /// Non-finite positions are dropped. An empty scale samples as the default line color.
    pub fn new(stops: impl IntoIterator<Item = (f64, Color)>) -> Self {
        let mut stops: Vec<_> = stops.into_iter().filter(|(p, _)| p.is_finite()).collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Black to white.
    pub fn greys() -> Self {
        Self::new([(0.0, Color::from_rgb8(0, 0, 0)), (1.0, Color::from_rgb8(255, 255, 255))])
    }

    /// Blue to red.
    pub fn bluered() -> Self {
        Self::new([(0.0, Color::from_rgb8(0, 0, 255)), (1.0, Color::from_rgb8(255, 0, 0))])
    }

    /// Red to blue through grey, reversed so low values are blue.
    pub fn rdbu() -> Self {
        Self::new([
            (0.0, Color::from_rgb8(5, 10, 172)),
            (0.35, Color::from_rgb8(106, 137, 247)),
            (0.5, Color::from_rgb8(190, 190, 190)),
            (0.6, Color::from_rgb8(220, 170, 132)),
            (0.7, Color::from_rgb8(230, 145, 90)),
            (1.0, Color::from_rgb8(178, 10, 28)),
        ])
    }

    /// Perceptually uniform purple-green-yellow.
    pub fn viridis() -> Self {
        Self::new([
            (0.0, Color::from_rgb8(0x44, 0x01, 0x54)),
            (0.25, Color::from_rgb8(0x3b, 0x52, 0x8b)),
            (0.5, Color::from_rgb8(0x21, 0x91, 0x8c)),
            (0.75, Color::from_rgb8(0x5e, 0xc9, 0x62)),
            (1.0, Color::from_rgb8(0xfd, 0xe7, 0x25)),
        ])
    }

    /// Look up a preset by name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "greys" => Some(Self::greys()),
            "bluered" => Some(Self::bluered()),
            "rdbu" => Some(Self::rdbu()),
            "viridis" => Some(Self::viridis()),
            _ => None,
        }
    }

    /// Sample the scale at normalized position `t`.
    pub fn sample(&self, t: f64) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return DEFAULT_LINE_COLOR;
        };
        if !t.is_finite() {
            return DEFAULT_LINE_COLOR;
        }
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        let upper = self.stops.partition_point(|(p, _)| *p <= t);
        let (p0, c0) = self.stops[upper - 1];
        let (p1, c1) = self.stops[upper];
        let span = p1 - p0;
        if span <= 0.0 {
            return c1;
        }
        let f = ((t - p0) / span) as f32;
        Color::from_rgba(
            c0.r + (c1.r - c0.r) * f,
            c0.g + (c1.g - c0.g) * f,
            c0.b + (c1.b - c0.b) * f,
            c0.a + (c1.a - c0.a) * f,
        )
    }
}

/// Maps raw per-point values onto a [`Colorscale`] over `[cmin, cmax]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapping {
    /// The gradient.
    pub colorscale: Colorscale,
    /// Value mapped to the start of the scale. Taken from the data when `None`.
    pub cmin: Option<f64>,
    /// Value mapped to the end of the scale. Taken from the data when `None`.
    pub cmax: Option<f64>,
}

impl ColorMapping {
    pub fn new(colorscale: Colorscale) -> Self {
        Self {
            colorscale,
            cmin: None,
            cmax: None,
        }
    }

    /// Fix the value range instead of deriving it from the data.
    pub fn with_range(mut self, cmin: f64, cmax: f64) -> Self {
        self.cmin = Some(cmin);
        self.cmax = Some(cmax);
        self
    }

    /// Resolve the effective `(cmin, cmax)` for `values`.
    pub(crate) fn range<'a>(&self, values: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
        if let (Some(lo), Some(hi)) = (self.cmin, self.cmax) {
            return (lo, hi);
        }
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let lo = self.cmin.unwrap_or(lo);
        let hi = self.cmax.unwrap_or(hi);
        if lo.is_finite() && hi.is_finite() {
            (lo, hi)
        } else {
            (0.0, 1.0)
        }
    }

    /// Color for `value` given the resolved range.
    pub(crate) fn map(&self, value: f64, (lo, hi): (f64, f64)) -> Color {
        if !value.is_finite() {
            return DEFAULT_LINE_COLOR;
        }
        let span = hi - lo;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            (value - lo) / span
        };
        self.colorscale.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_clamps_and_interpolates() {
        let scale = Colorscale::greys();
        assert_eq!(scale.sample(-1.0), Color::from_rgb8(0, 0, 0));
        assert_eq!(scale.sample(2.0), Color::from_rgb8(255, 255, 255));
        let mid = scale.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn range_defaults_to_finite_data_extent() {
        let mapping = ColorMapping::new(Colorscale::bluered());
        let values = [3.0, f64::NAN, -1.0, 7.0];
        assert_eq!(mapping.range(&values), (-1.0, 7.0));
        let fixed = mapping.with_range(0.0, 10.0);
        assert_eq!(fixed.range(&values), (0.0, 10.0));
    }

    #[test]
    fn mapping_ends_hit_the_scale_ends() {
        let mapping = ColorMapping::new(Colorscale::bluered());
        let range = (0.0, 4.0);
        assert_eq!(mapping.map(0.0, range), Color::from_rgb8(0, 0, 255));
        assert_eq!(mapping.map(4.0, range), Color::from_rgb8(255, 0, 0));
        assert_eq!(mapping.map(f64::NAN, range), DEFAULT_LINE_COLOR);
    }

    #[test]
    fn presets_are_found_by_name() {
        assert_eq!(Colorscale::named("Viridis"), Some(Colorscale::viridis()));
        assert_eq!(Colorscale::named("nope"), None);
    }
}
