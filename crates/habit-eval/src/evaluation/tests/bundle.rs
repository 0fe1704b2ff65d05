use super::common::*;
use crate::evaluation::domain::{Indicator, Rating};
use crate::evaluation::rating::RatingThresholds;
use crate::evaluation::{
    evaluate_indicators, to_indicator_summaries, EvaluationConfig, HabitEvaluator,
    IndicatorResult, WakeUpMetric,
};

#[test]
fn summaries_always_have_seven_items_in_canonical_order() {
    for entries in [Vec::new(), days(1, full_day), days(31, full_day)] {
        let summaries = to_indicator_summaries(&evaluate_indicators(&entries));

        let ids: Vec<Indicator> = summaries.iter().map(|summary| summary.id).collect();
        assert_eq!(ids, Indicator::ordered());
        assert!(summaries
            .iter()
            .all(|summary| (1..=5).contains(&summary.rating.value())));
    }
}

#[test]
fn empty_input_is_all_no_data() {
    let bundle = evaluate_indicators(&[]);

    for summary in bundle.summaries() {
        assert_eq!(summary.rating, Rating::Poor);
        assert!(summary.note.starts_with("Belum ada data"));
    }
}

#[test]
fn exemplary_month_rates_every_indicator_highly() {
    let entries = days(28, full_day);

    let bundle = evaluate_indicators(&entries);

    assert_eq!(bundle.wake_up.rating, Rating::Excellent);
    assert_eq!(bundle.worship.rating, Rating::Excellent);
    assert_eq!(bundle.exercise.rating, Rating::Excellent);
    assert_eq!(bundle.diet.rating, Rating::Excellent);
    assert_eq!(bundle.study.rating, Rating::Excellent);
    assert_eq!(bundle.community.rating, Rating::Excellent);
    assert_eq!(bundle.sleep.rating, Rating::Excellent);
    assert_eq!(bundle.worship.total_days, 28);
}

#[test]
fn indicators_filter_independently() {
    let mut entries = days(10, exercise("60"));
    entries.extend(days(5, sleep("21:00", true)));

    let bundle = evaluate_indicators(&entries);

    assert_eq!(bundle.exercise.total_days, 10);
    assert_eq!(bundle.sleep.total_days, 5);
    assert_eq!(bundle.wake_up.total_days, 0);
    assert_eq!(bundle.diet.total_days, 0);
}

#[test]
fn evaluator_applies_configured_thresholds() {
    let mut entries = days(6, exercise("30"));
    entries.extend(days(4, exercise("0")));
    let strict = EvaluationConfig {
        exercise_thresholds: RatingThresholds::new(0.95, 0.9, 0.8, 0.7),
        ..EvaluationConfig::default()
    };

    let relaxed = HabitEvaluator::default().evaluate(&entries);
    let tightened = HabitEvaluator::new(strict).evaluate(&entries);

    assert_eq!(relaxed.exercise.rating, Rating::Good);
    assert_eq!(tightened.exercise.rating, Rating::Poor);
}

#[test]
fn summaries_carry_each_metric_under_its_own_indicator() {
    let bundle = evaluate_indicators(&days(10, exercise("60")));

    for summary in bundle.summaries() {
        let (rating, note) = bundle.headline(summary.id);
        assert_eq!(summary.rating, rating);
        assert_eq!(summary.note, note);
        assert_eq!(summary.label, summary.id.label());
    }
    let exercise = &bundle.summaries()[2];
    assert_eq!(exercise.id, Indicator::Exercise);
    assert_eq!(exercise.rating, Rating::Excellent);
}

#[test]
fn headline_matches_metric_fields() {
    let bundle = evaluate_indicators(&days(12, full_day));

    let (rating, note) = bundle.headline(WakeUpMetric::INDICATOR);

    assert_eq!(rating, bundle.wake_up.rating());
    assert_eq!(note, bundle.wake_up.note());
}

#[test]
fn evaluation_does_not_mutate_entries() {
    let entries = days(15, full_day);
    let snapshot = entries.clone();

    let _ = evaluate_indicators(&entries);

    assert_eq!(entries, snapshot);
}
