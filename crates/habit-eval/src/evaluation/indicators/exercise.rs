use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating};
use crate::evaluation::rating::{completion_ratio, ratio_to_rating, RatingThresholds};
use crate::normalize::parse_minutes_lenient;
use serde::Serialize;

pub const MIN_EXERCISE_MINUTES: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub consistent_days: usize,
    pub ratio: f64,
}

indicator_result!(ExerciseMetric, Indicator::Exercise);

pub fn evaluate_exercise(entries: &[HabitEntry], thresholds: &RatingThresholds) -> ExerciseMetric {
    let logs = reported(entries, |entry| entry.habits.exercise.as_ref());
    let total_days = logs.len();

    let consistent_days = logs
        .iter()
        .filter(|log| {
            parse_minutes_lenient(&log.duration_minutes)
                .map(|duration| duration >= MIN_EXERCISE_MINUTES)
                .unwrap_or(false)
        })
        .count();
    let ratio = completion_ratio(consistent_days, total_days);

    let (rating, note) = if total_days == 0 {
        (Rating::Poor, Indicator::Exercise.no_data_note())
    } else {
        let rating = ratio_to_rating(ratio, thresholds);
        let note = format!(
            "{}: {} berolahraga minimal {:.0} menit ({} dari {} hari)",
            rating.label(),
            rating.frequency(),
            MIN_EXERCISE_MINUTES,
            consistent_days,
            total_days
        );
        (rating, note)
    };

    ExerciseMetric {
        rating,
        note,
        total_days,
        consistent_days,
        ratio,
    }
}
