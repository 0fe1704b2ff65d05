mod community;
mod diet;
mod exercise;
mod sleep;
mod study;
mod wake_up;
mod worship;

pub use community::{evaluate_community, CommunityMetric};
pub use diet::{evaluate_diet, DietMetric};
pub use exercise::{evaluate_exercise, ExerciseMetric, MIN_EXERCISE_MINUTES};
pub use sleep::{evaluate_sleep, SleepMetric, SLEEP_CUTOFF_MINUTES};
pub use study::{evaluate_study, StudyCategory, StudyComponent, StudyMetric};
pub use wake_up::{evaluate_wake_up, WakeUpMetric};
pub use worship::{
    evaluate_worship, worship_daily_score, WorshipComponent, WorshipMetric, WorshipPractice,
    MAX_DAILY_SCORE,
};

use super::domain::{HabitEntry, Indicator, Rating};

/// Headline shared by every indicator result.
pub trait IndicatorResult {
    const INDICATOR: Indicator;

    fn rating(&self) -> Rating;
    fn note(&self) -> &str;
    fn total_days(&self) -> usize;
}

/// Sub-records of one indicator, skipping entries that did not report it.
pub(crate) fn reported<'a, T, F>(entries: &'a [HabitEntry], select: F) -> Vec<&'a T>
where
    F: Fn(&'a HabitEntry) -> Option<&'a T>,
{
    entries.iter().filter_map(select).collect()
}

macro_rules! indicator_result {
    ($metric:ty, $indicator:expr) => {
        impl $crate::evaluation::indicators::IndicatorResult for $metric {
            const INDICATOR: $crate::evaluation::domain::Indicator = $indicator;

            fn rating(&self) -> $crate::evaluation::domain::Rating {
                self.rating
            }

            fn note(&self) -> &str {
                &self.note
            }

            fn total_days(&self) -> usize {
                self.total_days
            }
        }
    };
}

pub(crate) use indicator_result;
