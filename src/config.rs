//! App configuration
//!
//! Read once at startup from compile-time environment (`BASE_URL`,
//! `LOG_LEVEL`), falling back to the defaults in [`crate::consts`].

use std::str::FromStr;

use crate::consts::{DEFAULT_BASE_URL, DELETED_STUDENTS_KEY, STUDENTS_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path the app is served under; stripped before route matching.
    pub base_url: String,
    pub log_level: log::Level,
    /// Storage key for the active list
    pub students_key: String,
    /// Storage key for the soft-deleted list
    pub deleted_students_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: log::Level::Info,
            students_key: STUDENTS_KEY.to_string(),
            deleted_students_key: DELETED_STUDENTS_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration baked in at build time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BASE_URL"), option_env!("LOG_LEVEL"))
    }

    /// Build from optional raw values; blank or unparsable values keep the
    /// default.
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.to_string();
        }
        if let Some(raw) = log_level {
            match log::Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Ignoring unknown LOG_LEVEL '{}'", raw),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_keys() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "/");
        assert_eq!(config.students_key, "students");
        assert_eq!(config.deleted_students_key, "deletedStudents");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_from_values_overrides() {
        let config = AppConfig::from_values(Some("/records/"), Some("debug"));
        assert_eq!(config.base_url, "/records/");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_from_values_ignores_blank_and_bad_level() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
