use super::rating::RatingThresholds;
use serde::{Deserialize, Serialize};

/// Ratio tables used by the completion-based indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub completion_thresholds: RatingThresholds,
    pub exercise_thresholds: RatingThresholds,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            completion_thresholds: RatingThresholds::standard(),
            exercise_thresholds: RatingThresholds::exercise(),
        }
    }
}
