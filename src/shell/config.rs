use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RECENT_EVENTS_LIMIT: usize = 10;
pub const DEFAULT_TOP_DATES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub recent_events_limit: usize,
    pub top_dates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            recent_events_limit: DEFAULT_RECENT_EVENTS_LIMIT,
            top_dates: DEFAULT_TOP_DATES,
        }
    }
}

impl Config {
    /// Reads `MEETUP_HOST`, `MEETUP_PORT`, `MEETUP_RECENT_EVENTS_LIMIT` and
    /// `MEETUP_TOP_DATES`, falling back to the defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("MEETUP_HOST").unwrap_or(defaults.host),
            port: parse_or("MEETUP_PORT", &lookup, defaults.port)?,
            recent_events_limit: parse_or(
                "MEETUP_RECENT_EVENTS_LIMIT",
                &lookup,
                defaults.recent_events_limit,
            )?,
            top_dates: parse_or("MEETUP_TOP_DATES", &lookup, defaults.top_dates)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[rstest]
    fn it_should_read_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MEETUP_HOST", "127.0.0.1"),
            ("MEETUP_PORT", "9000"),
            ("MEETUP_RECENT_EVENTS_LIMIT", "25"),
            ("MEETUP_TOP_DATES", "5"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.recent_events_limit, 25);
        assert_eq!(config.top_dates, 5);
    }

    #[rstest]
    #[case("MEETUP_PORT", "eighty")]
    #[case("MEETUP_PORT", "70000")]
    #[case("MEETUP_TOP_DATES", "-1")]
    fn it_should_reject_unparseable_values(#[case] key: &'static str, #[case] value: &str) {
        let result = Config::from_lookup(lookup_from(&[(key, value)]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key,
                value: value.to_string()
            })
        );
    }
}
