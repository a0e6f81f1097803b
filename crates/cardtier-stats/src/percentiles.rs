/// Precomputed nearest-rank percentile values for a dataset.
///
/// Lookups are by percentile point (0.0-100.0). An empty dataset yields a
/// `Percentiles` with no entries, so every [`Percentiles::get`] returns `None`.
///
/// # Examples
///
/// ```
/// use cardtier_stats::percentiles::Percentiles;
///
/// let scores = [4.0, -1.0, 2.5, 7.0, 0.0, 3.0, 1.0, 5.5, 6.0, 2.0];
/// let percentiles = Percentiles::new(&scores, &[25.0, 50.0, 90.0]);
///
/// assert_eq!(percentiles.get(25.0), Some(1.0));
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(90.0), Some(7.0));
/// assert_eq!(percentiles.get(75.0), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Percentiles {
    /// (percentile, value) pairs in the order the points were requested.
    values: Vec<(f32, f32)>,
}

impl Percentiles {
    /// Computes percentiles from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32], percentile_points: &[f32]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .filter_map(|&p| compute_percentile(sorted_values, p).map(|v| (p, v)))
            .collect();
        Self { values }
    }

    /// Sorts a copy of `values` and computes percentiles from it.
    #[must_use]
    pub fn new(values: &[f32], percentile_points: &[f32]) -> Self {
        Self::from_sorted(&sort_ascending(values), percentile_points)
    }

    /// Returns the value at `percentile`, or `None` if it was not computed.
    #[must_use]
    pub fn get(&self, percentile: f32) -> Option<f32> {
        self.values
            .iter()
            .find(|(p, _)| (*p - percentile).abs() < f32::EPSILON)
            .map(|(_, value)| *value)
    }

    /// Returns `true` when no percentile could be computed (empty dataset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.values.iter().copied()
    }
}

/// Returns a copy of `values` sorted ascending with [`f32::total_cmp`].
#[must_use]
pub fn sort_ascending(values: &[f32]) -> Vec<f32> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    sorted
}

/// Computes a single nearest-rank percentile from sorted data.
///
/// For `n` values the `k`-th percentile is the element at index
/// `floor(n * k / 100)`, clamped to the last element. Because the index is
/// truncated rather than interpolated, runs of equal values make neighbouring
/// percentiles collapse onto the same value.
///
/// Returns `None` for an empty slice; callers pick their own default.
///
/// # Examples
///
/// ```
/// use cardtier_stats::percentiles::compute_percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&sorted, 50.0), Some(3.0));
/// assert_eq!(compute_percentile(&sorted, 90.0), Some(4.0));
/// assert_eq!(compute_percentile(&[], 90.0), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f32], percentile: f32) -> Option<f32> {
    let last = sorted_values.len().checked_sub(1)?;
    let idx = ((sorted_values.len() as f32 * percentile) / 100.0) as usize;
    Some(sorted_values[idx.min(last)])
}
