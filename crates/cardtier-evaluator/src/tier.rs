//! Catalog-relative tier labels.
//!
//! Tiers are assigned from four nearest-rank percentile cut points over all
//! scores in one catalog snapshot:
//!
//! | Tier | Score                  | Approximate share |
//! |------|------------------------|-------------------|
//! | S    | `score >= p90`         | top 10%           |
//! | A    | `p75 <= score < p90`   | next 15%          |
//! | B    | `p50 <= score < p75`   | next 25%          |
//! | C    | `p25 <= score < p50`   | next 25%          |
//! | D    | `score < p25`          | bottom 25%        |
//!
//! A score equal to a cut point gets the higher tier. Because cut points are
//! picked by index rather than interpolated, runs of equal scores can make the
//! actual bucket sizes differ noticeably from the nominal shares.

use std::{cmp::Ordering, fmt};

use cardtier_stats::percentiles::{compute_percentile, sort_ascending};
use serde::{Deserialize, Serialize};

/// Ordinal tier label; `S > A > B > C > D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// All tiers, best first.
    pub const ALL: [Self; 5] = [Self::S, Self::A, Self::B, Self::C, Self::D];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Position in [`Tier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Ord for Tier {
    fn cmp(&self, other: &Self) -> Ordering {
        // declaration order is best first
        other.index().cmp(&self.index())
    }
}

impl PartialOrd for Tier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The four score thresholds separating the five tiers.
///
/// For any non-empty score set, `p90 >= p75 >= p50 >= p25`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierCutPoints {
    pub p90: f32,
    pub p75: f32,
    pub p50: f32,
    pub p25: f32,
}

impl TierCutPoints {
    /// Computes cut points from the scores of a whole catalog.
    ///
    /// An empty score set yields all-zero cut points.
    #[must_use]
    pub fn from_scores(scores: &[f32]) -> Self {
        let sorted = sort_ascending(scores);
        let cut = |percentile| compute_percentile(&sorted, percentile).unwrap_or(0.0);
        Self {
            p90: cut(90.0),
            p75: cut(75.0),
            p50: cut(50.0),
            p25: cut(25.0),
        }
    }

    #[must_use]
    pub fn classify(&self, score: f32) -> Tier {
        if score >= self.p90 {
            Tier::S
        } else if score >= self.p75 {
            Tier::A
        } else if score >= self.p50 {
            Tier::B
        } else if score >= self.p25 {
            Tier::C
        } else {
            Tier::D
        }
    }

    /// Lowest score that still reaches `tier`; `None` for [`Tier::D`].
    #[must_use]
    pub fn threshold(&self, tier: Tier) -> Option<f32> {
        match tier {
            Tier::S => Some(self.p90),
            Tier::A => Some(self.p75),
            Tier::B => Some(self.p50),
            Tier::C => Some(self.p25),
            Tier::D => None,
        }
    }
}
