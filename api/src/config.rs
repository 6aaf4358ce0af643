use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Rate limit for the sign-in route, requests per second per peer IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    /// Disabled in tests, where requests carry no peer address
    pub rate_limit_enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_or("PORT", 8080)?,
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 2)?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 5)?,
            rate_limit_enabled: parse_or("RATE_LIMIT_ENABLED", true)?,
        })
    }

    /// Configuration for in-process tests: no database, no rate limiting
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: String::new(),
            port: 0,
            rate_limit_per_second: 2,
            rate_limit_burst: 5,
            rate_limit_enabled: false,
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
