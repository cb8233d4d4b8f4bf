use glam::DVec2;

/// Axis-aligned data-space bounding box of a trace.
///
/// Starts out inverted (`min = +inf`, `max = -inf`) so the first expansion
/// sets both corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// The inverted sentinel every accumulation starts from.
    pub const EMPTY: Self = Self {
        min: DVec2::splat(f64::INFINITY),
        max: DVec2::splat(f64::NEG_INFINITY),
    };

    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Whether nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand by a point with `[low, high]` extents on each axis.
    ///
    /// Non-finite extents are ignored.
    pub(crate) fn expand_range(&mut self, x: (f64, f64), y: (f64, f64)) {
        for v in [x.0, x.1] {
            if v.is_finite() {
                self.min.x = self.min.x.min(v);
                self.max.x = self.max.x.max(v);
            }
        }
        for v in [y.0, y.1] {
            if v.is_finite() {
                self.min.y = self.min.y.min(v);
                self.max.y = self.max.y.max(v);
            }
        }
    }

    /// Smallest box enclosing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// `[x_min, y_min, x_max, y_max]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }
}
