//! Monthly habit evaluation: seven indicator evaluators, the bundle that
//! collects them and the labeled summaries built from a bundle.
//!
//! Everything in this module is pure. Callers hand in entries already scoped
//! to one student and one period; nothing is cached between calls.

mod config;
pub mod domain;
pub mod indicators;
pub mod rating;
mod summary;

#[cfg(test)]
mod tests;

pub use config::EvaluationConfig;
pub use domain::{
    CommunityLog, DailyHabits, DietLog, ExerciseLog, HabitEntry, Indicator, Rating, SleepLog,
    StudentId, StudyLog, WakeUpLog, WorshipLog,
};
pub use indicators::{
    CommunityMetric, DietMetric, ExerciseMetric, IndicatorResult, SleepMetric, StudyCategory,
    StudyComponent, StudyMetric, WakeUpMetric, WorshipComponent, WorshipMetric, WorshipPractice,
};
pub use rating::{amount_to_score, ratio_to_rating, CountScale, RatingThresholds, Step};
pub use summary::{to_indicator_summaries, IndicatorSummary};

use serde::Serialize;

/// Stateless evaluator applying the configured ratio tables to an entry set.
#[derive(Debug, Clone, Default)]
pub struct HabitEvaluator {
    config: EvaluationConfig,
}

impl HabitEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn evaluate(&self, entries: &[HabitEntry]) -> IndicatorBundle {
        IndicatorBundle {
            wake_up: indicators::evaluate_wake_up(entries),
            worship: indicators::evaluate_worship(entries),
            exercise: indicators::evaluate_exercise(entries, &self.config.exercise_thresholds),
            diet: indicators::evaluate_diet(entries, &self.config.completion_thresholds),
            study: indicators::evaluate_study(entries, &self.config.completion_thresholds),
            community: indicators::evaluate_community(entries),
            sleep: indicators::evaluate_sleep(entries),
        }
    }
}

/// Evaluates with the default threshold tables.
pub fn evaluate_indicators(entries: &[HabitEntry]) -> IndicatorBundle {
    HabitEvaluator::default().evaluate(entries)
}

/// The seven indicator results for one student and one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBundle {
    pub wake_up: WakeUpMetric,
    pub worship: WorshipMetric,
    pub exercise: ExerciseMetric,
    pub diet: DietMetric,
    pub study: StudyMetric,
    pub community: CommunityMetric,
    pub sleep: SleepMetric,
}

impl IndicatorBundle {
    pub fn headline(&self, indicator: Indicator) -> (Rating, &str) {
        fn pick<M: IndicatorResult>(metric: &M) -> (Rating, &str) {
            (metric.rating(), metric.note())
        }

        match indicator {
            Indicator::WakeUp => pick(&self.wake_up),
            Indicator::Worship => pick(&self.worship),
            Indicator::Exercise => pick(&self.exercise),
            Indicator::Diet => pick(&self.diet),
            Indicator::Study => pick(&self.study),
            Indicator::Community => pick(&self.community),
            Indicator::Sleep => pick(&self.sleep),
        }
    }

    pub fn summaries(&self) -> Vec<IndicatorSummary> {
        to_indicator_summaries(self)
    }
}
