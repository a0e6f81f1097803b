use crate::percentiles::sort_ascending;

/// Summary of a score distribution.
///
/// Variance is the population variance (divided by `count`, not `count - 1`):
/// a catalog snapshot is the whole population, not a sample of it.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    /// Upper median (`sorted[n / 2]`), matching the nearest-rank P50.
    pub median: f32,
    pub variance: f32,
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes statistics over unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cardtier_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([2.0, -1.0, 5.0, 2.0]).unwrap();
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.min, -1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.median, 2.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        Self::from_sorted(&sort_ascending(&values))
    }

    /// Computes statistics over values already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f32;
        let mean = sorted_values.iter().sum::<f32>() / n;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            median: sorted_values[count / 2],
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_stats() {
        assert_eq!(DescriptiveStats::new(std::iter::empty()), None);
    }

    #[test]
    fn test_population_variance() {
        let stats = DescriptiveStats::new([1.0, 3.0]).unwrap();
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.variance, 1.0);
        assert_eq!(stats.std_dev, 1.0);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_constant_values() {
        let stats = DescriptiveStats::new([0.5; 6]).unwrap();
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.std_dev, 0.0);
    }
}
