/// Whether a bubble's size metric scales its diameter or its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    #[default]
    Diameter,
    Area,
}

/// Maps raw per-point size metrics to rendered marker sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleSizing {
    pub mode: SizeMode,
    /// Scale divisor applied to the metric.
    pub size_ref: f64,
    /// Smallest size a positive metric renders at.
    pub size_min: f64,
}

impl Default for BubbleSizing {
    fn default() -> Self {
        Self {
            mode: SizeMode::Diameter,
            size_ref: 1.0,
            size_min: 0.0,
        }
    }
}

impl BubbleSizing {
    pub fn area(size_ref: f64) -> Self {
        Self {
            mode: SizeMode::Area,
            size_ref,
            ..Self::default()
        }
    }

    pub fn with_size_min(mut self, size_min: f64) -> Self {
        self.size_min = size_min;
        self
    }

    /// Rendered size for metric `v`. Non-positive or non-finite results render as 0.
    pub fn size(&self, v: f64) -> f64 {
        let size_ref = if self.size_ref != 0.0 { self.size_ref } else { 1.0 };
        let scaled = v / 2.0 / size_ref;
        let base = match self.mode {
            SizeMode::Diameter => scaled,
            SizeMode::Area => scaled.sqrt(),
        };
        if base.is_finite() && base > 0.0 {
            base.max(self.size_min)
        } else {
            0.0
        }
    }
}
