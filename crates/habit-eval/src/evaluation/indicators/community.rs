use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating};
use crate::evaluation::rating::COMMUNITY_SCALE;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub participated_days: usize,
}

indicator_result!(CommunityMetric, Indicator::Community);

/// Rates the raw count of witnessed activities, not a ratio.
pub fn evaluate_community(entries: &[HabitEntry]) -> CommunityMetric {
    let logs = reported(entries, |entry| entry.habits.community.as_ref());
    let total_days = logs.len();
    let participated_days = logs.iter().filter(|log| log.witnessed).count();

    if total_days == 0 {
        return CommunityMetric {
            rating: Rating::Poor,
            note: Indicator::Community.no_data_note(),
            total_days,
            participated_days,
        };
    }

    let rating = COMMUNITY_SCALE.rate(participated_days as u64);
    CommunityMetric {
        rating,
        note: format!(
            "{}: {} ikut kegiatan bermasyarakat ({} kegiatan disaksikan orang tua/pengurus)",
            rating.label(),
            rating.frequency(),
            participated_days
        ),
        total_days,
        participated_days,
    }
}
