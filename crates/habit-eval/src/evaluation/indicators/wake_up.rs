use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating};
use crate::normalize::{minutes, parse_time_to_minutes};
use serde::Serialize;

const HALF_PAST_FOUR: u32 = minutes(4, 30);
const FIVE_O_CLOCK: u32 = minutes(5, 0);
const HALF_PAST_FIVE: u32 = minutes(5, 30);

/// Wake-up counters. The four buckets overlap: one early morning with a
/// prayer counts toward both `before_half_four_with_prayer` and
/// `before_five_with_prayer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WakeUpMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub before_half_four_with_prayer: usize,
    pub before_five_with_prayer: usize,
    pub at_five_with_prayer: usize,
    pub before_half_five_without_prayer: usize,
}

indicator_result!(WakeUpMetric, Indicator::WakeUp);

pub fn evaluate_wake_up(entries: &[HabitEntry]) -> WakeUpMetric {
    let logs = reported(entries, |entry| entry.habits.wake_up.as_ref());

    let mut metric = WakeUpMetric {
        rating: Rating::Poor,
        note: Indicator::WakeUp.no_data_note(),
        total_days: logs.len(),
        before_half_four_with_prayer: 0,
        before_five_with_prayer: 0,
        at_five_with_prayer: 0,
        before_half_five_without_prayer: 0,
    };

    for log in &logs {
        let Some(time) = parse_time_to_minutes(&log.time) else {
            continue;
        };
        let prayed = log.recited_prayer;

        if time < HALF_PAST_FOUR && prayed {
            metric.before_half_four_with_prayer += 1;
        }
        if time < FIVE_O_CLOCK && prayed {
            metric.before_five_with_prayer += 1;
        }
        if time == FIVE_O_CLOCK && prayed {
            metric.at_five_with_prayer += 1;
        }
        if time < HALF_PAST_FIVE && !prayed {
            metric.before_half_five_without_prayer += 1;
        }
    }

    if metric.total_days == 0 {
        return metric;
    }

    let early = metric.before_half_four_with_prayer;
    let before_five = metric.before_five_with_prayer;
    let at_five = metric.at_five_with_prayer;
    let without_prayer = metric.before_half_five_without_prayer;

    let (rating, note) = if early > 24 {
        (
            Rating::Excellent,
            format!("Istimewa: bangun sebelum pukul 04.30 dan berdoa pada {early} hari"),
        )
    } else if (15..=24).contains(&before_five) {
        (
            Rating::VeryGood,
            format!("Sangat baik: bangun sebelum pukul 05.00 dan berdoa pada {before_five} hari"),
        )
    } else if (9..=14).contains(&at_five) {
        (
            Rating::Good,
            format!("Baik: bangun pukul 05.00 dan berdoa pada {at_five} hari"),
        )
    } else if (4..=8).contains(&at_five) {
        (
            Rating::Fair,
            format!("Cukup: bangun pukul 05.00 dan berdoa pada {at_five} hari"),
        )
    } else if without_prayer >= 4 {
        (
            Rating::Poor,
            format!("Kurang baik: bangun sebelum pukul 05.30 tanpa berdoa pada {without_prayer} hari"),
        )
    } else {
        (
            Rating::Poor,
            "Kurang baik: kebiasaan bangun pagi dan berdoa belum terbentuk".to_string(),
        )
    };

    metric.rating = rating;
    metric.note = note;
    metric
}
