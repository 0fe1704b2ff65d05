//! Monthly grouping of raw entries and selection of the period to report.

mod collation;
mod directory;

pub use collation::compare_names;
pub use directory::{StudentDirectory, StudentProfile};

use crate::evaluation::{HabitEntry, HabitEvaluator, IndicatorBundle, IndicatorSummary, StudentId};
use crate::normalize::{MonthKey, MonthPeriod};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Which month to report per student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelection {
    /// Each student's most recent month with data.
    Latest,
    Month(MonthKey),
}

impl From<Option<MonthKey>> for PeriodSelection {
    fn from(value: Option<MonthKey>) -> Self {
        value.map_or(Self::Latest, Self::Month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailablePeriod {
    #[serde(flatten)]
    pub period: MonthPeriod,
    pub entry_count: usize,
    /// Requested explicitly but absent from the data.
    pub inferred: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentEvaluation {
    pub student_id: StudentId,
    pub student_name: String,
    pub period: MonthPeriod,
    pub entry_count: usize,
    pub indicators: Vec<IndicatorSummary>,
    pub bundle: IndicatorBundle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_period: Option<MonthKey>,
    pub available_periods: Vec<AvailablePeriod>,
    pub results: Vec<StudentEvaluation>,
}

/// Groups `entries` by student and month, evaluates the selected group of
/// every student and orders the results by display name.
pub fn evaluate_periods(
    evaluator: &HabitEvaluator,
    entries: &[HabitEntry],
    directory: &StudentDirectory,
    selection: PeriodSelection,
) -> PeriodReport {
    let mut groups: BTreeMap<(StudentId, MonthKey), Vec<HabitEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry((entry.student_id.clone(), MonthKey::from_date(entry.date)))
            .or_default()
            .push(entry.clone());
    }

    let available_periods = available_periods(&groups, selection);

    let selected: Vec<(&(StudentId, MonthKey), &Vec<HabitEntry>)> = match selection {
        PeriodSelection::Month(month) => groups
            .iter()
            .filter(|((_, key), _)| *key == month)
            .collect(),
        PeriodSelection::Latest => {
            // Keys are sorted by (student, month), so the last group seen per
            // student is its latest month.
            let mut latest: BTreeMap<&StudentId, (&(StudentId, MonthKey), &Vec<HabitEntry>)> =
                BTreeMap::new();
            for (key, group) in &groups {
                latest.insert(&key.0, (key, group));
            }
            latest.into_values().collect()
        }
    };

    let mut results: Vec<StudentEvaluation> = selected
        .into_iter()
        .map(|((student_id, month), group)| {
            debug!(
                student = %student_id,
                period = %month,
                entries = group.len(),
                "evaluating habit period"
            );
            let bundle = evaluator.evaluate(group);
            StudentEvaluation {
                student_id: student_id.clone(),
                student_name: directory.display_name(student_id).to_string(),
                period: (*month).into(),
                entry_count: group.len(),
                indicators: bundle.summaries(),
                bundle,
            }
        })
        .collect();

    results.sort_by(|left, right| {
        compare_names(&left.student_name, &right.student_name)
            .then_with(|| left.student_id.cmp(&right.student_id))
    });

    PeriodReport {
        requested_period: match selection {
            PeriodSelection::Month(month) => Some(month),
            PeriodSelection::Latest => None,
        },
        available_periods,
        results,
    }
}

/// Every month seen in the data, newest first. A requested month without
/// data is listed as inferred.
fn available_periods(
    groups: &BTreeMap<(StudentId, MonthKey), Vec<HabitEntry>>,
    selection: PeriodSelection,
) -> Vec<AvailablePeriod> {
    let mut counts: BTreeMap<MonthKey, usize> = BTreeMap::new();
    for ((_, month), group) in groups {
        *counts.entry(*month).or_default() += group.len();
    }

    let mut months: BTreeSet<MonthKey> = counts.keys().copied().collect();
    if let PeriodSelection::Month(requested) = selection {
        months.insert(requested);
    }

    months
        .into_iter()
        .rev()
        .map(|month| {
            let entry_count = counts.get(&month).copied().unwrap_or(0);
            AvailablePeriod {
                period: month.into(),
                entry_count,
                inferred: entry_count == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ExerciseLog, Rating};
    use chrono::NaiveDate;

    fn entry(student: &str, date: (i32, u32, u32), minutes: &str) -> HabitEntry {
        let mut entry = HabitEntry::new(
            StudentId::new(student),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        );
        entry.habits.exercise = Some(ExerciseLog {
            duration_minutes: minutes.to_string(),
        });
        entry
    }

    fn directory() -> StudentDirectory {
        let mut directory = StudentDirectory::new();
        directory.insert(StudentId::new("x"), "Zahra");
        directory.insert(StudentId::new("y"), "Ádam");
        directory
    }

    fn month(raw: &str) -> MonthKey {
        MonthKey::parse(raw).expect("valid month")
    }

    #[test]
    fn latest_month_is_selected_per_student() {
        let entries = vec![
            entry("x", (2024, 1, 5), "10"),
            entry("x", (2024, 3, 2), "45"),
            entry("x", (2024, 3, 3), "45"),
            entry("y", (2024, 1, 9), "40"),
        ];

        let report = evaluate_periods(
            &HabitEvaluator::default(),
            &entries,
            &directory(),
            PeriodSelection::Latest,
        );

        assert_eq!(report.results.len(), 2);
        let zahra = report
            .results
            .iter()
            .find(|result| result.student_id.as_str() == "x")
            .expect("student x evaluated");
        assert_eq!(zahra.period.key, month("2024-03"));
        assert_eq!(zahra.entry_count, 2);
        assert_eq!(zahra.bundle.exercise.rating, Rating::Excellent);
        assert!(report.requested_period.is_none());
    }

    #[test]
    fn results_are_sorted_by_collated_name() {
        let entries = vec![entry("x", (2024, 1, 5), "10"), entry("y", (2024, 1, 9), "40")];

        let report = evaluate_periods(
            &HabitEvaluator::default(),
            &entries,
            &directory(),
            PeriodSelection::Latest,
        );

        let names: Vec<&str> = report
            .results
            .iter()
            .map(|result| result.student_name.as_str())
            .collect();
        assert_eq!(names, ["Ádam", "Zahra"]);
    }

    #[test]
    fn requested_month_filters_groups() {
        let entries = vec![
            entry("x", (2024, 1, 5), "10"),
            entry("x", (2024, 3, 2), "45"),
            entry("y", (2024, 1, 9), "40"),
        ];

        let report = evaluate_periods(
            &HabitEvaluator::default(),
            &entries,
            &directory(),
            PeriodSelection::Month(month("2024-01")),
        );

        assert_eq!(report.results.len(), 2);
        assert!(report
            .results
            .iter()
            .all(|result| result.period.key == month("2024-01")));
        assert_eq!(report.requested_period, Some(month("2024-01")));
    }

    #[test]
    fn requested_month_without_data_is_empty_but_listed() {
        let entries = vec![entry("x", (2024, 1, 5), "10"), entry("x", (2024, 3, 2), "45")];

        let report = evaluate_periods(
            &HabitEvaluator::default(),
            &entries,
            &directory(),
            PeriodSelection::Month(month("2024-02")),
        );

        assert!(report.results.is_empty());
        let listed: Vec<(String, bool)> = report
            .available_periods
            .iter()
            .map(|period| (period.period.key.to_string(), period.inferred))
            .collect();
        assert_eq!(
            listed,
            [
                ("2024-03".to_string(), false),
                ("2024-02".to_string(), true),
                ("2024-01".to_string(), false),
            ]
        );
    }

    #[test]
    fn no_entries_yield_an_empty_report() {
        let report = evaluate_periods(
            &HabitEvaluator::default(),
            &[],
            &StudentDirectory::new(),
            PeriodSelection::Latest,
        );

        assert!(report.results.is_empty());
        assert!(report.available_periods.is_empty());
    }
}
