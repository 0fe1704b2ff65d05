use habit_eval::evaluation::{HabitEvaluator, Indicator, Rating, StudyCategory};
use habit_eval::habit_log::HabitLogImporter;
use habit_eval::normalize::MonthKey;
use habit_eval::periods::{evaluate_periods, PeriodReport, PeriodSelection};

fn sample_report(selection: PeriodSelection) -> (PeriodReport, usize) {
    let data = include_bytes!("../sample_habit_log.csv");
    let log = HabitLogImporter::from_reader(&data[..]).expect("sample export imports");
    let report = evaluate_periods(
        &HabitEvaluator::default(),
        &log.entries,
        &log.directory,
        selection,
    );
    (report, log.skipped_rows)
}

fn month(year: i32, month: u32) -> MonthKey {
    MonthKey::new(year, month).expect("valid month")
}

#[test]
fn latest_period_report_covers_every_student_in_name_order() {
    let (report, skipped) = sample_report(PeriodSelection::Latest);

    assert_eq!(skipped, 1);
    let listed: Vec<(&str, MonthKey, usize)> = report
        .results
        .iter()
        .map(|result| {
            (
                result.student_name.as_str(),
                result.period.key,
                result.entry_count,
            )
        })
        .collect();
    assert_eq!(
        listed,
        [
            ("Ayu Lestari", month(2024, 3), 31),
            ("Dewi Anggraini", month(2024, 2), 12),
            ("Élan Putra", month(2024, 3), 10),
        ]
    );

    let periods: Vec<(MonthKey, usize)> = report
        .available_periods
        .iter()
        .map(|period| (period.period.key, period.entry_count))
        .collect();
    assert_eq!(periods, [(month(2024, 3), 41), (month(2024, 2), 17)]);
}

#[test]
fn exemplary_month_is_rated_excellent_across_the_board() {
    let (report, _) = sample_report(PeriodSelection::Latest);
    let ayu = &report.results[0];

    let ids: Vec<Indicator> = ayu.indicators.iter().map(|summary| summary.id).collect();
    assert_eq!(ids, Indicator::ordered());
    assert!(ayu
        .indicators
        .iter()
        .all(|summary| summary.rating == Rating::Excellent && summary.rating_label == "Istimewa"));

    assert_eq!(ayu.bundle.worship.charity_total, 62_000);
    assert_eq!(ayu.bundle.community.participated_days, 6);
    let study_counts: Vec<(StudyCategory, u64)> = ayu
        .bundle
        .study
        .components
        .iter()
        .map(|component| (component.category, component.count))
        .collect();
    assert_eq!(
        study_counts,
        [
            (StudyCategory::ReadingScripture, 0),
            (StudyCategory::ReadingBook, 16),
            (StudyCategory::ReadingTextbook, 0),
            (StudyCategory::Homework, 15),
        ]
    );
}

#[test]
fn struggling_month_explains_each_low_rating() {
    let (report, _) = sample_report(PeriodSelection::Latest);
    let elan = &report.results[2];

    assert_eq!(elan.bundle.wake_up.rating, Rating::Poor);
    assert!(elan.bundle.wake_up.note.contains("tanpa berdoa pada 10 hari"));
    assert_eq!(elan.bundle.sleep.total_days, 10);
    assert_eq!(elan.bundle.sleep.consistent_days, 0);
    assert_eq!(elan.bundle.exercise.rating, Rating::Poor);
    assert!(elan.bundle.worship.note.starts_with("Belum ada data"));
}

#[test]
fn requested_month_limits_results_to_that_month() {
    let (report, _) = sample_report(PeriodSelection::Month(month(2024, 2)));

    let names: Vec<&str> = report
        .results
        .iter()
        .map(|result| result.student_name.as_str())
        .collect();
    assert_eq!(names, ["Ayu Lestari", "Dewi Anggraini"]);

    let dewi = &report.results[1];
    assert_eq!(dewi.bundle.exercise.consistent_days, 12);
    assert_eq!(dewi.bundle.exercise.rating, Rating::Excellent);
    let other = dewi
        .bundle
        .study
        .components
        .last()
        .expect("study components present");
    assert_eq!(other.category, StudyCategory::Other);
    assert_eq!(other.count, 12);
}

#[test]
fn report_serializes_periods_as_month_strings() {
    let (report, _) = sample_report(PeriodSelection::Month(month(2024, 4)));

    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["requested_period"], "2024-04");
    assert_eq!(value["available_periods"][0]["key"], "2024-04");
    assert_eq!(value["available_periods"][0]["inferred"], true);
    assert_eq!(value["results"].as_array().map(Vec::len), Some(0));
}
