use super::{indicator_result, reported};
use crate::evaluation::domain::{HabitEntry, Indicator, Rating};
use crate::evaluation::rating::{
    completion_ratio, ratio_to_rating, RatingThresholds, STUDY_CATEGORY_SCALE,
};
use serde::Serialize;

/// Fixed study vocabulary; free text outside it lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyCategory {
    ReadingScripture,
    ReadingBook,
    ReadingTextbook,
    Homework,
    Other,
}

impl StudyCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ReadingScripture,
            Self::ReadingBook,
            Self::ReadingTextbook,
            Self::Homework,
            Self::Other,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ReadingScripture => "membaca_kitab_suci",
            Self::ReadingBook => "membaca_buku",
            Self::ReadingTextbook => "membaca_buku_pelajaran",
            Self::Homework => "mengerjakan_tugas",
            Self::Other => "lainnya",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReadingScripture => "Membaca Kitab Suci",
            Self::ReadingBook => "Membaca Buku Bacaan",
            Self::ReadingTextbook => "Membaca Buku Pelajaran",
            Self::Homework => "Mengerjakan Tugas/PR",
            Self::Other => "Lainnya",
        }
    }

    /// Matches a stored key or its label, ignoring case and separators.
    /// Blank input is `None`.
    pub fn classify(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|ch| match ch {
                ' ' | '-' | '/' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        if normalized.is_empty() {
            return None;
        }

        let known = Self::ordered()
            .into_iter()
            .filter(|category| *category != Self::Other)
            .find(|category| {
                normalized == category.key()
                    || normalized == category.label().to_ascii_lowercase().replace([' ', '/'], "_")
            });
        Some(known.unwrap_or(Self::Other))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyComponent {
    pub category: StudyCategory,
    pub label: &'static str,
    pub count: u64,
    pub score: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyMetric {
    pub rating: Rating,
    pub note: String,
    pub total_days: usize,
    pub completed_days: usize,
    pub ratio: f64,
    pub components: Vec<StudyComponent>,
}

indicator_result!(StudyMetric, Indicator::Study);

pub fn evaluate_study(entries: &[HabitEntry], thresholds: &RatingThresholds) -> StudyMetric {
    let logs = reported(entries, |entry| entry.habits.study.as_ref());
    let total_days = logs.len();
    let completed: Vec<_> = logs.iter().filter(|log| log.did_study).collect();
    let completed_days = completed.len();
    let ratio = completion_ratio(completed_days, total_days);

    let mut tallies = [0_u64; 5];
    for log in &completed {
        if let Some(category) = StudyCategory::classify(&log.category) {
            tallies[category as usize] += 1;
        }
    }

    let components = StudyCategory::ordered()
        .into_iter()
        .zip(tallies)
        .filter(|(category, count)| *category != StudyCategory::Other || *count > 0)
        .map(|(category, count)| StudyComponent {
            category,
            label: category.label(),
            count,
            score: STUDY_CATEGORY_SCALE.rate(count),
        })
        .collect();

    let (rating, note) = if total_days == 0 {
        (Rating::Poor, Indicator::Study.no_data_note())
    } else {
        let rating = ratio_to_rating(ratio, thresholds);
        let note = format!(
            "{}: {} belajar di rumah ({} dari {} hari)",
            rating.label(),
            rating.frequency(),
            completed_days,
            total_days
        );
        (rating, note)
    };

    StudyMetric {
        rating,
        note,
        total_days,
        completed_days,
        ratio,
        components,
    }
}
