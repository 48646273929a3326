use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_STANDINGS_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub standings_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            standings_cache_ttl: parse_ttl(std::env::var("STANDINGS_CACHE_TTL_SECS").ok().as_deref())?,
        })
    }
}

fn parse_ttl(value: Option<&str>) -> Result<Duration> {
    let secs = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v
            .parse()
            .context("STANDINGS_CACHE_TTL_SECS must be a number of seconds")?,
        None => DEFAULT_STANDINGS_CACHE_TTL_SECS,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_defaults_to_a_minute() {
        assert_eq!(parse_ttl(None).unwrap(), Duration::from_secs(60));
        assert_eq!(parse_ttl(Some("  ")).unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn test_ttl_parses_seconds() {
        assert_eq!(parse_ttl(Some("5")).unwrap(), Duration::from_secs(5));
        assert!(parse_ttl(Some("soon")).is_err());
    }
}
