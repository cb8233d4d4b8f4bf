use crate::Color;

/// Named dash patterns for trace lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    /// Solid continuous line.
    #[default]
    Solid,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
}

impl LineDash {
    /// Parse a dash name. Unknown names draw solid.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dot" => Self::Dot,
            "dash" => Self::Dash,
            "longdash" => Self::LongDash,
            "dashdot" => Self::DashDot,
            "longdashdot" => Self::LongDashDot,
            _ => Self::Solid,
        }
    }

    /// Dash template in units of the line's half width.
    pub fn template(self) -> &'static [f32] {
        match self {
            Self::Solid => &[1.0],
            Self::Dot => &[1.0, 1.0],
            Self::Dash => &[4.0, 1.0],
            Self::LongDash => &[8.0, 1.0],
            Self::DashDot => &[4.0, 1.0, 1.0, 1.0],
            Self::LongDashDot => &[8.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Area fill between the trace line and an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    None,
    /// Fill down to `y = 0`.
    ToZeroY,
    /// Fill across to `x = 0`.
    ToZeroX,
    /// Fill to the previous trace's y values. Not drawn by the line primitive.
    ToNextY,
    /// Fill to the previous trace's x values. Not drawn by the line primitive.
    ToNextX,
    /// Close the trace into a polygon. Not drawn by the line primitive.
    ToSelf,
}

impl FillMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "tozeroy" => Self::ToZeroY,
            "tozerox" => Self::ToZeroX,
            "tonexty" => Self::ToNextY,
            "tonextx" => Self::ToNextX,
            "toself" => Self::ToSelf,
            _ => Self::None,
        }
    }

    /// The line primitive's four half-plane fill flags.
    pub fn flags(self) -> [bool; 4] {
        match self {
            Self::ToZeroY => [false, true, false, false],
            Self::ToZeroX => [true, false, false, false],
            _ => [false; 4],
        }
    }
}

/// Line styling options for a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    pub color: Color,
    /// Requested width in pixels.
    pub width: f32,
    pub dash: LineDash,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: Color::from_rgb(0.3, 0.3, 0.9),
            width: 2.0,
            dash: LineDash::Solid,
        }
    }
}

impl LineOptions {
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_flags_follow_the_mode() {
        assert_eq!(FillMode::from_name("tozeroy").flags(), [false, true, false, false]);
        assert_eq!(FillMode::from_name("tozerox").flags(), [true, false, false, false]);
        assert_eq!(FillMode::from_name("toself").flags(), [false; 4]);
        assert_eq!(FillMode::from_name("bogus"), FillMode::None);
    }

    #[test]
    fn unknown_dash_is_solid() {
        assert_eq!(LineDash::from_name("dashdot").template(), &[4.0, 1.0, 1.0, 1.0]);
        assert_eq!(LineDash::from_name("wavy"), LineDash::Solid);
    }
}
