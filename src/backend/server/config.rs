/**
 * Server Configuration
 *
 * This module loads the process configuration from environment variables.
 * A `.env` file is read by `main` (via `dotenv`) before this runs, so local
 * development can keep secrets out of the shell.
 *
 * # Variables
 *
 * - `DATABASE_URL` - sqlx SQLite URL (default `sqlite://unity-aid.db?mode=rwc`)
 * - `JWT_SECRET` - token signing secret (required)
 * - `EXPIRES_IN` - token lifetime, see [`parse_duration`] (default `1d`)
 * - `PORT` - listening port (default `5000`)
 * - `CORS_ORIGIN` - comma-separated allowed origins (default `http://localhost:5173`)
 * - `BCRYPT_COST` - password hashing work factor (default `10`)
 *
 * # Error Handling
 *
 * Unlike optional services, none of these can be skipped: a missing secret or
 * an unparsable value stops startup with a [`ConfigError`].
 */

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://unity-aid.db?mode=rwc";
pub const DEFAULT_EXPIRES_IN: &str = "1d";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database connection string
    pub database_url: String,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Validity window of issued tokens
    pub token_ttl: Duration,
    /// TCP port to listen on
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub cors_origins: Vec<String>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            tracing::info!("DATABASE_URL not set, using default: {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expires_in = get("EXPIRES_IN").unwrap_or_else(|| DEFAULT_EXPIRES_IN.to_string());
        let token_ttl = parse_duration(&expires_in).map_err(|reason| ConfigError::Invalid {
            key: "EXPIRES_IN",
            value: expires_in.clone(),
            reason,
        })?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = get("CORS_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                    key: "BCRYPT_COST",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value: raw,
                        reason: format!(
                            "must be between {} and {}",
                            MIN_BCRYPT_COST, MAX_BCRYPT_COST
                        ),
                    });
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl,
            port,
            cors_origins,
            bcrypt_cost,
        })
    }
}

/// Parse a token lifetime.
///
/// Accepts the same shapes as the `ms`-style strings commonly found in
/// existing `.env` files: a number, optionally fractional, followed by an
/// optional unit with or without a space (`90`, `30s`, `1.5h`, `7 days`,
/// `2 hours`, `1y`). Units are case-insensitive. A bare number is seconds.
/// The result is truncated to whole seconds and must be at least one second.
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);

    if number.is_empty() {
        return Err("expected a number optionally followed by a unit".to_string());
    }
    let amount: f64 = number.parse().map_err(|e| format!("{e}"))?;

    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 0.001,
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600.0,
        "d" | "day" | "days" => 86_400.0,
        "w" | "week" | "weeks" => 604_800.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600.0,
        other => return Err(format!("unknown unit {other:?}")),
    };

    let secs = (amount * multiplier).trunc();
    if !secs.is_finite() || secs >= u64::MAX as f64 {
        return Err("duration overflows".to_string());
    }
    if secs < 1.0 {
        return Err("duration must be at least one second".to_string());
    }
    Ok(Duration::from_secs(secs as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173".to_string()]);
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn test_missing_secret() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));

        let err = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "k"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("EXPIRES_IN", "2h"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "http://a.test, http://b.test,"),
            ("BCRYPT_COST", "4"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.token_ttl, Duration::from_secs(7200));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "k"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "k"),
            ("EXPIRES_IN", "1 fortnight"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "EXPIRES_IN", .. }));

        let err = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "k"), ("BCRYPT_COST", "2")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BCRYPT_COST", .. }));
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("3600"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("15m"), Ok(Duration::from_secs(900)));
        assert_eq!(parse_duration("1d"), Ok(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("2w"), Ok(Duration::from_secs(1_209_600)));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("500ms").is_err());
        assert!(parse_duration("10 fortnights").is_err());
        assert!(parse_duration("1.2.3h").is_err());
    }

    #[test]
    fn test_parse_duration_long_forms() {
        assert_eq!(parse_duration("7 days"), Ok(Duration::from_secs(604_800)));
        assert_eq!(parse_duration("2 hours"), Ok(Duration::from_secs(7_200)));
        assert_eq!(parse_duration("1.5h"), Ok(Duration::from_secs(5_400)));
        assert_eq!(parse_duration("10 Minutes"), Ok(Duration::from_secs(600)));
        assert_eq!(parse_duration("1y"), Ok(Duration::from_secs(31_557_600)));
        assert_eq!(parse_duration("2500ms"), Ok(Duration::from_secs(2)));
    }

    #[test]
    fn test_long_form_expiry_from_lookup() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "k"),
            ("EXPIRES_IN", "7 days"),
        ]))
        .unwrap();
        assert_eq!(config.token_ttl, Duration::from_secs(604_800));
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        for cost in [MIN_BCRYPT_COST, MAX_BCRYPT_COST] {
            let value = cost.to_string();
            let config = ServerConfig::from_lookup(lookup(&[
                ("JWT_SECRET", "k"),
                ("BCRYPT_COST", value.as_str()),
            ]))
            .unwrap();
            assert_eq!(config.bcrypt_cost, cost);
        }

        for cost in [MIN_BCRYPT_COST - 1, MAX_BCRYPT_COST + 1] {
            let value = cost.to_string();
            let err = ServerConfig::from_lookup(lookup(&[
                ("JWT_SECRET", "k"),
                ("BCRYPT_COST", value.as_str()),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "BCRYPT_COST", .. }));
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env() {
        std::env::set_var("JWT_SECRET", "from-env");
        std::env::set_var("PORT", "5050");
        let config = ServerConfig::from_env().unwrap();
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("PORT");

        assert_eq!(config.jwt_secret, "from-env");
        assert_eq!(config.port, 5050);
    }
}
