use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating};
use crate::evaluation::rating::MONTHLY_HABIT_SCALE;
use crate::normalize::{minutes, parse_time_to_minutes};
use serde::Serialize;

/// Latest bedtime (inclusive) that counts as sleeping early.
pub const SLEEP_CUTOFF_MINUTES: u32 = minutes(22, 0);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub consistent_days: usize,
}

indicator_result!(SleepMetric, Indicator::Sleep);

pub fn evaluate_sleep(entries: &[HabitEntry]) -> SleepMetric {
    let logs = reported(entries, |entry| entry.habits.sleep.as_ref());
    let total_days = logs.len();
    let consistent_days = logs
        .iter()
        .filter(|log| {
            log.recited_prayer
                && parse_time_to_minutes(&log.time)
                    .map(|time| time <= SLEEP_CUTOFF_MINUTES)
                    .unwrap_or(false)
        })
        .count();

    if total_days == 0 {
        return SleepMetric {
            rating: Rating::Poor,
            note: Indicator::Sleep.no_data_note(),
            total_days,
            consistent_days,
        };
    }

    let rating = MONTHLY_HABIT_SCALE.rate(consistent_days as u64);
    let note = if rating == Rating::Poor {
        format!(
            "Kurang baik: baru {consistent_days} hari tidur paling lambat pukul 22.00 dan berdoa"
        )
    } else {
        format!(
            "{}: tidur paling lambat pukul 22.00 dan berdoa pada {} hari",
            rating.label(),
            consistent_days
        )
    };

    SleepMetric {
        rating,
        note,
        total_days,
        consistent_days,
    }
}
