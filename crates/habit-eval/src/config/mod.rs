use crate::evaluation::{EvaluationConfig, RatingThresholds};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            completion_thresholds: thresholds_from_env(
                "APP_RATIO_THRESHOLDS",
                defaults.completion_thresholds,
            )?,
            exercise_thresholds: thresholds_from_env(
                "APP_EXERCISE_THRESHOLDS",
                defaults.exercise_thresholds,
            )?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            evaluation,
        })
    }
}

fn thresholds_from_env(
    variable: &'static str,
    fallback: RatingThresholds,
) -> Result<RatingThresholds, ConfigError> {
    match env::var(variable) {
        Ok(raw) if !raw.trim().is_empty() => parse_thresholds(&raw)
            .ok_or(ConfigError::InvalidThresholds { variable, value: raw }),
        _ => Ok(fallback),
    }
}

/// Four comma-separated fractions in `(0, 1]`, strictly descending.
pub fn parse_thresholds(raw: &str) -> Option<RatingThresholds> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;
    let [excellent, very_good, good, fair] = <[f64; 4]>::try_from(values).ok()?;

    let in_range = [excellent, very_good, good, fair]
        .iter()
        .all(|value| *value > 0.0 && *value <= 1.0);
    let descending = excellent > very_good && very_good > good && good > fair;

    (in_range && descending).then(|| RatingThresholds::new(excellent, very_good, good, fair))
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThresholds { variable: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThresholds { variable, value } => write!(
                f,
                "{variable} must list four descending fractions in (0, 1], got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidThresholds { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_RATIO_THRESHOLDS");
        env::remove_var("APP_EXERCISE_THRESHOLDS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.evaluation, EvaluationConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn threshold_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_EXERCISE_THRESHOLDS", "0.95, 0.8, 0.6, 0.4");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.evaluation.exercise_thresholds,
            RatingThresholds::new(0.95, 0.8, 0.6, 0.4)
        );
        assert_eq!(
            config.evaluation.completion_thresholds,
            RatingThresholds::standard()
        );
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_RATIO_THRESHOLDS", "0.5,0.75,0.9,0.25");
        let error = AppConfig::load().expect_err("ascending table rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidThresholds {
                variable: "APP_RATIO_THRESHOLDS",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn parse_thresholds_requires_four_fractions() {
        assert!(parse_thresholds("0.9,0.75,0.5").is_none());
        assert!(parse_thresholds("0.9,0.75,0.5,0.25,0.1").is_none());
        assert!(parse_thresholds("1.5,0.75,0.5,0.25").is_none());
        assert!(parse_thresholds("0.9,0.75,0.5,0").is_none());
        assert!(parse_thresholds("0.9,abc,0.5,0.25").is_none());
        assert_eq!(
            parse_thresholds("0.9,0.75,0.5,0.25"),
            Some(RatingThresholds::standard())
        );
    }
}
