use anyhow::{bail, Context, Result};

pub const DEFAULT_PEOPLE_API_URL: &str = "https://forinterview.onrender.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub use_mock_data: bool,
    pub people_api_url: String,
    pub people_api_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            use_mock_data: match lookup("USE_MOCK_DATA") {
                Some(raw) => parse_flag(&raw).context("USE_MOCK_DATA must be a boolean")?,
                None => true,
            },
            people_api_url: lookup("PEOPLE_API_URL")
                .unwrap_or_else(|| DEFAULT_PEOPLE_API_URL.to_string()),
            people_api_timeout_secs: lookup("PEOPLE_API_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("PEOPLE_API_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.use_mock_data);
        assert_eq!(config.people_api_url, DEFAULT_PEOPLE_API_URL);
        assert_eq!(config.people_api_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("USE_MOCK_DATA", "No"),
            ("PEOPLE_API_URL", "http://localhost:4000"),
            ("PEOPLE_API_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.use_mock_data);
        assert_eq!(config.people_api_url, "http://localhost:4000");
        assert_eq!(config.people_api_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_flag_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("USE_MOCK_DATA", "maybe")])).is_err());
    }
}
