use crate::error::{Error, Result};
use std::str::FromStr;

/// Startup settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_label: Option<String>,
    pub app_version_code: i32,
    pub app_long_version_code: Option<i64>,
    pub platform_name: String,
    pub platform_release: String,
    pub platform_sdk_int: u32,
    pub target_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_label: None,
            app_version_code: 0,
            app_long_version_code: None,
            platform_name: std::env::consts::OS.to_string(),
            platform_release: "unknown".to_string(),
            platform_sdk_int: 0,
            target_url: "http://127.0.0.1:8080/".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            app_label: lookup("APP_LABEL").filter(|s| !s.trim().is_empty()),
            app_version_code: parse_var(&lookup, "APP_VERSION_CODE")?
                .unwrap_or(defaults.app_version_code),
            app_long_version_code: parse_var(&lookup, "APP_LONG_VERSION_CODE")?,
            platform_name: lookup("PLATFORM_NAME").unwrap_or(defaults.platform_name),
            platform_release: lookup("PLATFORM_RELEASE").unwrap_or(defaults.platform_release),
            platform_sdk_int: parse_var(&lookup, "PLATFORM_SDK_INT")?
                .unwrap_or(defaults.platform_sdk_int),
            target_url: lookup("TARGET_URL").unwrap_or(defaults.target_url),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(None),
    }
}
