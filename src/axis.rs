use crate::axis_scale::AxisScale;

/// One candidate end of an axis range: a linearized value plus pixel padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    /// Linearized data value.
    pub value: f64,
    /// Padding in pixels to keep clear beyond `value`.
    pub pad: f64,
}

/// Options for [`Autorange::expand`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions<'a> {
    /// Request the usual fractional range padding on top of the pixel padding.
    pub padded: bool,
    /// Per-point pixel padding, indexed like the expanded values.
    pub ppad: Option<&'a [f64]>,
}

/// Accumulates the data each trace contributes to an axis range.
///
/// Only non-dominated entries are kept: a low-end entry is dropped once another
/// reaches at least as low with at least as much padding (mirrored for the high
/// end). The kept set does not depend on the order traces contribute in, so
/// expansion is commutative and associative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autorange {
    min: Vec<Extreme>,
    max: Vec<Extreme>,
    padded: bool,
}

impl Autorange {
    /// Forget every contribution.
    pub fn reset(&mut self) {
        self.min.clear();
        self.max.clear();
        self.padded = false;
    }

    /// Merge already-linearized `values` into the range.
    pub fn expand(&mut self, values: impl IntoIterator<Item = f64>, opts: ExpandOptions<'_>) {
        self.padded |= opts.padded;
        for (i, value) in values.into_iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            let pad = opts
                .ppad
                .and_then(|p| p.get(i).copied())
                .filter(|p| p.is_finite() && *p > 0.0)
                .unwrap_or(0.0);
            let entry = Extreme { value, pad };
            insert(&mut self.min, entry, |a, b| a.value <= b.value && a.pad >= b.pad);
            insert(&mut self.max, entry, |a, b| a.value >= b.value && a.pad >= b.pad);
        }
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &Autorange) {
        self.padded |= other.padded;
        for &e in &other.min {
            insert(&mut self.min, e, |a, b| a.value <= b.value && a.pad >= b.pad);
        }
        for &e in &other.max {
            insert(&mut self.max, e, |a, b| a.value >= b.value && a.pad >= b.pad);
        }
    }

    pub fn min_entries(&self) -> &[Extreme] {
        &self.min
    }

    pub fn max_entries(&self) -> &[Extreme] {
        &self.max
    }

    pub fn is_padded(&self) -> bool {
        self.padded
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// Unpadded `(low, high)` extent of everything contributed so far.
    pub fn data_range(&self) -> Option<(f64, f64)> {
        let lo = self.min.iter().map(|e| e.value).reduce(f64::min)?;
        let hi = self.max.iter().map(|e| e.value).reduce(f64::max)?;
        Some((lo, hi))
    }

    /// Whether some kept entry reaches at least as far as `(value, pad)` at both ends.
    pub fn encloses(&self, value: f64, pad: f64) -> bool {
        let low = self.min.iter().any(|e| e.value <= value && e.pad >= pad);
        let high = self.max.iter().any(|e| e.value >= value && e.pad >= pad);
        low && high
    }
}

fn insert(list: &mut Vec<Extreme>, entry: Extreme, dominates: impl Fn(&Extreme, &Extreme) -> bool) {
    if list.iter().any(|e| dominates(e, &entry)) {
        return;
    }
    list.retain(|e| !dominates(&entry, e));
    list.push(entry);
}

/// One axis of the owning scene: its scale and its shared autorange state.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    pub scale: AxisScale,
    pub autorange: Autorange,
}

impl Axis {
    pub fn new(scale: AxisScale) -> Self {
        Self {
            scale,
            autorange: Autorange::default(),
        }
    }

    /// Transform a data value into linear units.
    pub fn data_to_linear(&self, value: f64) -> f64 {
        self.scale.data_to_linear(value)
    }

    /// Calc data for the first `len` points of one coordinate: the given
    /// values, or `start + i * step` when the coordinate array is absent.
    pub fn make_calcdata(
        &self,
        values: Option<&[f64]>,
        start: f64,
        step: f64,
        len: usize,
    ) -> Vec<f64> {
        match values {
            Some(values) => values[..len.min(values.len())].to_vec(),
            None => (0..len).map(|i| start + step * i as f64).collect(),
        }
    }

    /// Expand the autorange with raw data `values`, linearized through this axis.
    pub fn expand(&mut self, values: &[f64], opts: ExpandOptions<'_>) {
        let scale = self.scale;
        self.autorange
            .expand(values.iter().map(|&v| scale.data_to_linear(v)), opts);
    }
}

/// The x and y axes a trace is drawn against.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

impl Axes {
    pub fn new(x: AxisScale, y: AxisScale) -> Self {
        Self {
            x: Axis::new(x),
            y: Axis::new(y),
        }
    }

    pub fn linear() -> Self {
        Self::default()
    }

    /// Reset both autorange accumulators.
    pub fn reset_autorange(&mut self) {
        self.x.autorange.reset();
        self.y.autorange.reset();
    }

    /// Same scales, empty autorange.
    pub(crate) fn detached(&self) -> Axes {
        Axes::new(self.x.scale, self.y.scale)
    }

    /// Merge another set of autorange contributions into these axes.
    pub fn merge_autorange(&mut self, other: &Axes) {
        self.x.autorange.merge(&other.x.autorange);
        self.y.autorange.merge(&other.y.autorange);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(entries: &[Extreme]) -> Vec<(f64, f64)> {
        let mut out: Vec<_> = entries.iter().map(|e| (e.value, e.pad)).collect();
        out.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        out
    }

    #[test]
    fn dominated_entries_are_dropped() {
        let mut range = Autorange::default();
        range.expand(
            [1.0, 2.0, 0.5],
            ExpandOptions {
                padded: true,
                ppad: Some(&[3.0, 10.0, 1.0]),
            },
        );
        // (2.0, 10) beats (1.0, 3) at the high end only; (0.5, 1) survives at the low end.
        assert_eq!(sorted(range.min_entries()), vec![(0.5, 1.0), (1.0, 3.0), (2.0, 10.0)]);
        assert_eq!(sorted(range.max_entries()), vec![(2.0, 10.0)]);
        assert!(range.is_padded());
        assert_eq!(range.data_range(), Some((0.5, 2.0)));
    }

    #[test]
    fn expansion_is_order_independent() {
        let a_vals = [1.0, 5.0, -2.0];
        let a_pad = [2.0, 1.0, 0.0];
        let b_vals = [3.0, -1.0];
        let b_pad = [8.0, 4.0];

        let mut ab = Autorange::default();
        ab.expand(
            a_vals,
            ExpandOptions {
                padded: false,
                ppad: Some(&a_pad),
            },
        );
        ab.expand(
            b_vals,
            ExpandOptions {
                padded: true,
                ppad: Some(&b_pad),
            },
        );

        let mut ba = Autorange::default();
        ba.expand(
            b_vals,
            ExpandOptions {
                padded: true,
                ppad: Some(&b_pad),
            },
        );
        ba.expand(
            a_vals,
            ExpandOptions {
                padded: false,
                ppad: Some(&a_pad),
            },
        );

        assert_eq!(sorted(ab.min_entries()), sorted(ba.min_entries()));
        assert_eq!(sorted(ab.max_entries()), sorted(ba.max_entries()));
        assert_eq!(ab.is_padded(), ba.is_padded());
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let mut axis = Axis::new(AxisScale::Log);
        axis.expand(&[-1.0, 0.0, 100.0, f64::NAN], ExpandOptions::default());
        let (lo, hi) = axis.autorange.data_range().unwrap();
        assert!((lo - 2.0).abs() < 1e-12 && (hi - 2.0).abs() < 1e-12);
        assert_eq!(axis.autorange.min_entries().len(), 1);
    }

    #[test]
    fn calcdata_is_generated_for_missing_coordinates() {
        let axis = Axis::default();
        assert_eq!(axis.make_calcdata(None, 10.0, 0.5, 3), vec![10.0, 10.5, 11.0]);
        assert_eq!(axis.make_calcdata(Some(&[4.0, 2.0]), 0.0, 1.0, 9), vec![4.0, 2.0]);
    }

    #[test]
    fn calcdata_stops_at_the_series_length() {
        let axis = Axis::default();
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(axis.make_calcdata(Some(&values), 0.0, 1.0, 2), vec![1.0, 2.0]);
    }
}
