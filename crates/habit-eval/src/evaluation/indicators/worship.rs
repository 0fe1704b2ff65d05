use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating, WorshipLog};
use crate::evaluation::rating::{
    amount_to_score, CountScale, FAJR_PRAYER_SCALE, FIVE_DAILY_PRAYER_SCALE, MONTHLY_HABIT_SCALE,
    WORSHIP_DAILY_SCORE_BANDS,
};
use crate::normalize::parse_amount;
use serde::Serialize;

/// Upper bound of [`worship_daily_score`].
pub const MAX_DAILY_SCORE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorshipPractice {
    PersonalPrayer,
    FajrPrayer,
    FiveDailyPrayers,
    Dhikr,
    Dhuha,
    Rawatib,
    Charity,
}

impl WorshipPractice {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::PersonalPrayer,
            Self::FajrPrayer,
            Self::FiveDailyPrayers,
            Self::Dhikr,
            Self::Dhuha,
            Self::Rawatib,
            Self::Charity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalPrayer => "Berdoa",
            Self::FajrPrayer => "Sholat Subuh",
            Self::FiveDailyPrayers => "Sholat Lima Waktu Berjamaah",
            Self::Dhikr => "Zikir",
            Self::Dhuha => "Sholat Dhuha",
            Self::Rawatib => "Sholat Rawatib",
            Self::Charity => "Infak/Sedekah",
        }
    }

    /// Whether the practice was ticked on this day; `None` for charity,
    /// which is recorded as an amount.
    fn observed(self, log: &WorshipLog) -> Option<bool> {
        match self {
            Self::PersonalPrayer => Some(log.personal_prayer),
            Self::FajrPrayer => Some(log.fajr_prayer),
            Self::FiveDailyPrayers => Some(log.five_daily_prayers),
            Self::Dhikr => Some(log.dhikr),
            Self::Dhuha => Some(log.dhuha),
            Self::Rawatib => Some(log.rawatib),
            Self::Charity => None,
        }
    }

    fn scale(self) -> Option<CountScale> {
        match self {
            Self::FajrPrayer => Some(FAJR_PRAYER_SCALE),
            Self::FiveDailyPrayers => Some(FIVE_DAILY_PRAYER_SCALE),
            Self::PersonalPrayer | Self::Dhikr | Self::Dhuha | Self::Rawatib => {
                Some(MONTHLY_HABIT_SCALE)
            }
            Self::Charity => None,
        }
    }
}

const VOLUNTARY: [WorshipPractice; 3] = [
    WorshipPractice::Dhikr,
    WorshipPractice::Dhuha,
    WorshipPractice::Rawatib,
];

/// Period tally of one practice. `value` is a day count, or the rupiah total
/// for charity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorshipComponent {
    pub practice: WorshipPractice,
    pub label: &'static str,
    pub value: u64,
    pub score: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorshipMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub average_daily_score: f64,
    pub charity_total: u64,
    pub components: Vec<WorshipComponent>,
}

indicator_result!(WorshipMetric, Indicator::Worship);

/// Score of a single day, between 0.0 and [`MAX_DAILY_SCORE`].
pub fn worship_daily_score(log: &WorshipLog) -> f64 {
    let mut score = 0.0;

    if log.fajr_prayer && log.five_daily_prayers {
        score += 1.0;
    }

    let voluntary = VOLUNTARY
        .iter()
        .filter(|practice| practice.observed(log) == Some(true))
        .count();
    score += voluntary as f64 / VOLUNTARY.len() as f64;

    if log.personal_prayer {
        score += 1.0;
    }

    if !log.charity_amount.trim().is_empty() {
        score += 1.0;
    }

    score
}

pub fn evaluate_worship(entries: &[HabitEntry]) -> WorshipMetric {
    let logs = reported(entries, |entry| entry.habits.worship.as_ref());
    let total_days = logs.len();

    let charity_total: u64 = logs
        .iter()
        .map(|log| parse_amount(&log.charity_amount))
        .fold(0, u64::saturating_add);

    let components = WorshipPractice::ordered()
        .into_iter()
        .map(|practice| {
            let (value, score) = match practice.scale() {
                Some(scale) => {
                    let count = logs
                        .iter()
                        .filter(|log| practice.observed(log) == Some(true))
                        .count() as u64;
                    (count, scale.rate(count))
                }
                None => (charity_total, amount_to_score(charity_total)),
            };
            WorshipComponent {
                practice,
                label: practice.label(),
                value,
                score,
            }
        })
        .collect();

    if total_days == 0 {
        return WorshipMetric {
            rating: Rating::Poor,
            note: Indicator::Worship.no_data_note(),
            total_days,
            average_daily_score: 0.0,
            charity_total,
            components,
        };
    }

    let average_daily_score =
        logs.iter().map(|log| worship_daily_score(log)).sum::<f64>() / total_days as f64;
    let rating = WORSHIP_DAILY_SCORE_BANDS.rate(average_daily_score);
    let note = format!(
        "{}: rata-rata skor ibadah harian {:.2} dari {:.0} ({} hari tercatat)",
        rating.label(),
        average_daily_score,
        MAX_DAILY_SCORE,
        total_days
    );

    WorshipMetric {
        rating,
        note,
        total_days,
        average_daily_score,
        charity_total,
        components,
    }
}
