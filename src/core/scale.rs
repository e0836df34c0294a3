/// Candidate axis maxima, ascending. The last entry is the hard ceiling.
pub const AXIS_MAX_BUCKETS: [f64; 8] = [10.0, 25.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0];

/// Largest axis maximum ever selected; larger values are drawn at the edge.
pub const AXIS_MAX_CEILING: f64 = 500.0;

/// Maps non-finite input to `0`.
#[must_use]
pub fn coerce_finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Picks the smallest bucket that holds `max(values ∪ {0})`.
///
/// Anything above 400 lands on the 500 ceiling, however large.
#[must_use]
pub fn choose_scale(values: &[f64]) -> f64 {
    let raw_max = values
        .iter()
        .copied()
        .map(coerce_finite)
        .fold(0.0_f64, f64::max);
    AXIS_MAX_BUCKETS
        .iter()
        .copied()
        .find(|bucket| raw_max <= *bucket)
        .unwrap_or(AXIS_MAX_CEILING)
}

/// Axis maximum chosen for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    axis_max: f64,
}

impl ChartScale {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            axis_max: choose_scale(values),
        }
    }

    #[must_use]
    pub fn axis_max(self) -> f64 {
        self.axis_max
    }

    /// Position of `value` along an axis in `[0, 1]`; the axis starts at zero.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (coerce_finite(value) / self.axis_max).clamp(0.0, 1.0)
    }
}
