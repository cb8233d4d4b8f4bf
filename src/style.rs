use crate::Color;

/// A style field that is either shared by every point or given per point.
///
/// Per-point arrays may be shorter than the number of points. Indices past the
/// end of the array reuse the **first** element, never the last one and never
/// a cyclic wrap.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<T> {
    /// One value for every point.
    Scalar(T),
    /// One value per point.
    PerPoint(Vec<T>),
}

impl<T> StyleValue<T> {
    /// Whether the value is given per point.
    pub fn is_per_point(&self) -> bool {
        matches!(self, Self::PerPoint(_))
    }

    /// Value for point `index`, applying the first-element fallback.
    ///
    /// Returns `None` only for an empty per-point array.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::PerPoint(values) => values.get(index).or_else(|| values.first()),
        }
    }

    /// The value used where a single value is needed (the scalar, or the first entry).
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Map every contained value, keeping the variant.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> StyleValue<U> {
        match self {
            Self::Scalar(v) => StyleValue::Scalar(f(v)),
            Self::PerPoint(values) => StyleValue::PerPoint(values.iter().map(f).collect()),
        }
    }
}

impl<T: Clone> StyleValue<T> {
    /// Resolve into exactly `count` values.
    ///
    /// `fallback` fills the output when a per-point array is empty.
    pub fn resolve(&self, count: usize, fallback: T) -> Vec<T> {
        self.resolve_with(count, fallback, T::clone)
    }
}

impl<T> StyleValue<T> {
    /// Resolve into exactly `count` values, converting each through `convert`.
    ///
    /// Out-of-range indices convert element 0 again; `fallback` is used as-is
    /// when there is nothing to convert.
    pub fn resolve_with<U: Clone>(
        &self,
        count: usize,
        fallback: U,
        mut convert: impl FnMut(&T) -> U,
    ) -> Vec<U> {
        match self {
            Self::Scalar(v) => vec![convert(v); count],
            Self::PerPoint(values) => {
                let Some(first) = values.first() else {
                    return vec![fallback; count];
                };
                (0..count)
                    .map(|i| convert(values.get(i).unwrap_or(first)))
                    .collect()
            }
        }
    }
}

impl<T: Default> Default for StyleValue<T> {
    fn default() -> Self {
        Self::Scalar(T::default())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for StyleValue<$ty> {
            fn from(value: $ty) -> Self {
                Self::Scalar(value)
            }
        })*
    };
}

scalar_from!(f32, f64, String, Color);

impl<T> From<Vec<T>> for StyleValue<T> {
    fn from(values: Vec<T>) -> Self {
        Self::PerPoint(values)
    }
}

impl From<&str> for StyleValue<String> {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<Vec<&str>> for StyleValue<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::PerPoint(values.into_iter().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_arrays_fall_back_to_the_first_element() {
        let sizes = StyleValue::PerPoint(vec![5.0, 10.0]);
        assert_eq!(sizes.resolve(3, 0.0), vec![5.0, 10.0, 5.0]);
        assert_eq!(sizes.resolve(5, 0.0), vec![5.0, 10.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn scalars_are_replicated() {
        let width = StyleValue::Scalar(2.0_f32);
        assert_eq!(width.resolve(3, 0.0), vec![2.0; 3]);
        assert!(!width.is_per_point());
    }

    #[test]
    fn empty_arrays_use_the_fallback() {
        let empty: StyleValue<f64> = StyleValue::PerPoint(Vec::new());
        assert_eq!(empty.resolve(2, 7.0), vec![7.0, 7.0]);
        assert_eq!(empty.get(0), None);
    }

    #[test]
    fn conversion_is_applied_to_the_fallback_element() {
        let names: StyleValue<String> = vec!["a", "bb"].into();
        let lens = names.resolve_with(3, 0, |s| s.len());
        assert_eq!(lens, vec![1, 2, 1]);
        assert_eq!(names.get(9).map(String::as_str), Some("a"));
    }
}
