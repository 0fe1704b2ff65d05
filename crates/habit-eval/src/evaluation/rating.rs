//! Step functions turning ratios, counts and amounts into ratings.

use super::domain::Rating;
use serde::{Deserialize, Serialize};

/// Lower bounds (inclusive) for ratings 5, 4, 3 and 2; anything below is 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingThresholds {
    pub excellent: f64,
    pub very_good: f64,
    pub good: f64,
    pub fair: f64,
}

impl RatingThresholds {
    pub const fn new(excellent: f64, very_good: f64, good: f64, fair: f64) -> Self {
        Self {
            excellent,
            very_good,
            good,
            fair,
        }
    }

    /// Default completion-ratio table shared by most indicators.
    pub const fn standard() -> Self {
        Self::new(0.90, 0.75, 0.50, 0.25)
    }

    pub const fn exercise() -> Self {
        Self::new(0.90, 0.70, 0.50, 0.30)
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.excellent, self.very_good, self.good, self.fair]
    }

    pub fn rate(&self, value: f64) -> Rating {
        if value >= self.excellent {
            Rating::Excellent
        } else if value >= self.very_good {
            Rating::VeryGood
        } else if value >= self.good {
            Rating::Good
        } else if value >= self.fair {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bands applied to the worship average daily score (0.0..=4.0).
pub(crate) const WORSHIP_DAILY_SCORE_BANDS: RatingThresholds =
    RatingThresholds::new(3.5, 2.5, 1.5, 0.5);

pub fn ratio_to_rating(ratio: f64, thresholds: &RatingThresholds) -> Rating {
    thresholds.rate(ratio)
}

/// `completed / total`, or zero when nothing was reported.
pub(crate) fn completion_ratio(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    }
}

/// A single breakpoint of a [`CountScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Above(u64),
    AtLeast(u64),
}

impl Step {
    const fn admits(self, value: u64) -> bool {
        match self {
            Step::Above(bound) => value > bound,
            Step::AtLeast(bound) => value >= bound,
        }
    }
}

/// Descending staircase over a raw count; breakpoints for ratings 5, 4, 3, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountScale {
    steps: [Step; 4],
}

impl CountScale {
    pub const fn new(steps: [Step; 4]) -> Self {
        Self { steps }
    }

    pub fn rate(&self, value: u64) -> Rating {
        const BANDS: [Rating; 4] = [
            Rating::Excellent,
            Rating::VeryGood,
            Rating::Good,
            Rating::Fair,
        ];

        self.steps
            .iter()
            .zip(BANDS)
            .find(|(step, _)| step.admits(value))
            .map(|(_, rating)| rating)
            .unwrap_or(Rating::Poor)
    }
}

/// Days-in-month habits: personal prayer, dhikr, dhuha, rawatib and sleep.
pub const MONTHLY_HABIT_SCALE: CountScale = CountScale::new([
    Step::Above(24),
    Step::AtLeast(15),
    Step::AtLeast(9),
    Step::AtLeast(4),
]);

pub const FAJR_PRAYER_SCALE: CountScale = CountScale::new([
    Step::Above(15),
    Step::AtLeast(10),
    Step::AtLeast(5),
    Step::AtLeast(3),
]);

pub const FIVE_DAILY_PRAYER_SCALE: CountScale = CountScale::new([
    Step::AtLeast(28),
    Step::AtLeast(25),
    Step::AtLeast(20),
    Step::AtLeast(15),
]);

pub const STUDY_CATEGORY_SCALE: CountScale = CountScale::new([
    Step::AtLeast(24),
    Step::AtLeast(12),
    Step::AtLeast(8),
    Step::AtLeast(4),
]);

/// Literal strict comparisons; a count of exactly 5 lands on rating 4.
pub const COMMUNITY_SCALE: CountScale = CountScale::new([
    Step::Above(5),
    Step::Above(4),
    Step::Above(3),
    Step::Above(2),
]);

/// Rupiah totals of charity over the period.
pub const CHARITY_AMOUNT_SCALE: CountScale = CountScale::new([
    Step::Above(75_000),
    Step::Above(60_000),
    Step::Above(50_000),
    Step::Above(45_000),
]);

pub fn amount_to_score(amount: u64) -> Rating {
    CHARITY_AMOUNT_SCALE.rate(amount)
}
