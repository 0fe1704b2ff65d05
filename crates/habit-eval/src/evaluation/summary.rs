use super::domain::{Indicator, Rating};
use super::indicators::IndicatorResult;
use super::IndicatorBundle;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub id: Indicator,
    pub label: &'static str,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub note: String,
}

/// Labeled summaries in canonical indicator order; always seven items.
pub fn to_indicator_summaries(bundle: &IndicatorBundle) -> Vec<IndicatorSummary> {
    vec![
        summarize(&bundle.wake_up),
        summarize(&bundle.worship),
        summarize(&bundle.exercise),
        summarize(&bundle.diet),
        summarize(&bundle.study),
        summarize(&bundle.community),
        summarize(&bundle.sleep),
    ]
}

fn summarize<M: IndicatorResult>(metric: &M) -> IndicatorSummary {
    let rating = metric.rating();
    IndicatorSummary {
        id: M::INDICATOR,
        label: M::INDICATOR.label(),
        rating,
        rating_label: rating.label(),
        note: metric.note().to_string(),
    }
}
