//! Statistics over card score distributions.
//!
//! - [`percentiles`]: nearest-rank percentiles, the basis of tier cut points
//! - [`descriptive`]: min/max/mean/median/variance summaries
//!
//! ```
//! use cardtier_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
//!
//! let scores = [1.75, -0.5, 3.25, 6.0, 2.0];
//! let stats = DescriptiveStats::new(scores).unwrap();
//! assert_eq!(stats.max, 6.0);
//!
//! let percentiles = Percentiles::new(&scores, &[50.0]);
//! assert_eq!(percentiles.get(50.0), Some(2.0));
//! ```

pub mod descriptive;
pub mod percentiles;
