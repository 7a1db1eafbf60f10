use std::collections::HashMap;
use std::env;
use std::time::Duration;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Defaults applied to a fresh RepoState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Logical clock value before the first operation runs
    /// Defaults to 2025-06-07T01:49:00Z
    pub start_time: DateTime<Utc>,

    /// Name used for commits that don't carry their own author
    /// Defaults to "John Doe"
    pub author_name: String,

    /// Email used for commits that don't carry their own author
    /// Defaults to "jd@example.com"
    pub author_email: String,

    /// Branch recorded as default until an Initialize operation names one
    /// Defaults to "main"
    pub default_branch: String,

    /// Seconds the clock moves after each operation without an explicit override
    /// Defaults to 5
    pub advance_secs: u64,

    /// Whether to enable debug logging
    /// Defaults to false
    pub debug: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            start_time: Utc
                .with_ymd_and_hms(2025, 6, 7, 1, 49, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            author_name: "John Doe".to_string(),
            author_email: "jd@example.com".to_string(),
            default_branch: "main".to_string(),
            advance_secs: 5,
            debug: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new SimulatorConfig by reading `REPO_SIM_*` environment variables
    pub fn from_env() -> Self {
        Self::from_env_vars(env::vars())
    }

    /// Build a config from an explicit set of variables; unset, empty or invalid values keep the default
    pub fn from_env_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with("REPO_SIM_"))
            .collect();
        let lookup = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| {
                    if v.is_empty() {
                        warn!("{} is empty, keeping default", key);
                    }
                    !v.is_empty()
                })
        };

        let mut config = Self::default();

        if let Some(start) = lookup("REPO_SIM_START_TIME") {
            match DateTime::parse_from_rfc3339(&start) {
                Ok(parsed) => {
                    config.start_time = parsed.with_timezone(&Utc);
                    info!("Start time configured from REPO_SIM_START_TIME: {}", config.start_time);
                }
                Err(e) => warn!("Invalid REPO_SIM_START_TIME '{}': {}, using default", start, e),
            }
        }

        if let Some(name) = lookup("REPO_SIM_AUTHOR_NAME") {
            info!("Author name configured from REPO_SIM_AUTHOR_NAME: {}", name);
            config.author_name = name;
        }

        if let Some(email) = lookup("REPO_SIM_AUTHOR_EMAIL") {
            info!("Author email configured from REPO_SIM_AUTHOR_EMAIL: {}", email);
            config.author_email = email;
        }

        if let Some(branch) = lookup("REPO_SIM_DEFAULT_BRANCH") {
            info!("Default branch configured from REPO_SIM_DEFAULT_BRANCH: {}", branch);
            config.default_branch = branch;
        }

        if let Some(secs) = lookup("REPO_SIM_ADVANCE_SECS") {
            match secs.parse::<u64>() {
                Ok(parsed) => config.advance_secs = parsed,
                Err(e) => warn!("Invalid REPO_SIM_ADVANCE_SECS '{}': {}, using default", secs, e),
            }
        }

        if let Some(debug) = lookup("REPO_SIM_DEBUG") {
            config.debug = matches!(debug.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }

    pub fn default_advance(&self) -> Duration {
        Duration::from_secs(self.advance_secs)
    }
}
