use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_STORAGE_PATH: &str = ".backoffice/storage.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub storage_path: PathBuf,
    pub page_size: u32,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let raw_url = get_env("BACKOFFICE_API_URL")?;
        let api_base_url = Url::parse(&raw_url)
            .map_err(|e| Error::Config(format!("Invalid value for BACKOFFICE_API_URL: {}", e)))?;

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(get_env_parse_or(
                "BACKOFFICE_HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            storage_path: env::var("BACKOFFICE_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
            page_size: get_env_parse_or("BACKOFFICE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?.max(1),
            log_json: env::var("BACKOFFICE_LOG_JSON").is_ok_and(|v| v == "1" || v == "true"),
        })
    }

    /// Config pointing at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            api_base_url: base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            log_json: false,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_config_uses_defaults() {
        let config = Config::with_base_url(Url::parse("http://localhost:5000/api/").unwrap());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.storage_path, PathBuf::from(".backoffice/storage.json"));
    }

    #[test]
    fn parse_or_falls_back_when_unset() {
        let value: u64 = get_env_parse_or("BACKOFFICE_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
