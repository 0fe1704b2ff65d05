use super::{indicator_result, reported};
use crate::evaluation::domain::{DietLog, HabitEntry, Indicator, Rating};
use crate::evaluation::rating::{completion_ratio, ratio_to_rating, RatingThresholds};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub healthy_days: usize,
    pub ratio: f64,
}

indicator_result!(DietMetric, Indicator::Diet);

fn is_healthy(log: &DietLog) -> bool {
    !log.main_food.trim().is_empty()
        || !log.side_dish.trim().is_empty()
        || log.took_supplement
        || log.ate_veg_fruit
}

pub fn evaluate_diet(entries: &[HabitEntry], thresholds: &RatingThresholds) -> DietMetric {
    let logs = reported(entries, |entry| entry.habits.diet.as_ref());
    let total_days = logs.len();
    let healthy_days = logs.iter().filter(|log| is_healthy(log)).count();
    let ratio = completion_ratio(healthy_days, total_days);

    if total_days == 0 {
        return DietMetric {
            rating: Rating::Poor,
            note: Indicator::Diet.no_data_note(),
            total_days,
            healthy_days,
            ratio,
        };
    }

    let rating = ratio_to_rating(ratio, thresholds);
    DietMetric {
        rating,
        note: format!(
            "{}: {} makan makanan sehat dan bergizi ({} dari {} hari)",
            rating.label(),
            rating.frequency(),
            healthy_days,
            total_days
        ),
        total_days,
        healthy_days,
        ratio,
    }
}
