/// Axis scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear axis: linearized value is the raw data value.
    #[default]
    Linear,

    /// Base-10 logarithmic axis: linearized value is `log10(raw)`.
    ///
    /// Only positive values are representable on this axis.
    Log,

    /// Date axis holding epoch milliseconds. Linearizes like [`AxisScale::Linear`].
    Date,
}

impl AxisScale {
    /// Parse an axis type name (`"linear"`, `"log"`, `"date"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" | "-" => Some(Self::Linear),
            "log" => Some(Self::Log),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    pub fn is_linear(self) -> bool {
        self == Self::Linear
    }

    /// Transform a data value into linear (plot-space) units.
    ///
    /// Values the axis cannot represent map to NaN.
    pub fn data_to_linear(self, value: f64) -> f64 {
        match self {
            Self::Linear | Self::Date => value,
            Self::Log => {
                if value > 0.0 {
                    value.log10()
                } else {
                    f64::NAN
                }
            }
        }
    }

    /// Transform a linear (plot-space) value back into data units.
    pub fn linear_to_data(self, value: f64) -> f64 {
        match self {
            Self::Linear | Self::Date => value,
            Self::Log => 10f64.powf(value),
        }
    }
}
