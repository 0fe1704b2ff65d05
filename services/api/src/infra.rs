use habit_eval::normalize::MonthKey;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_month(raw: &str) -> Result<MonthKey, String> {
    MonthKey::parse(raw.trim()).map_err(|err| err.to_string())
}
