use crate::parser::DEFAULT_MAX_DEPTH;

pub const DEFAULT_PROMPT: &str = ">>  ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// REPL settings, overridable through `RPRATT_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub max_depth: usize,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(prompt) = lookup("RPRATT_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(value) = lookup("RPRATT_MAX_DEPTH") {
            let parsed: Result<usize, _> = value.trim().parse();
            config.max_depth = match parsed {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: "RPRATT_MAX_DEPTH",
                        value,
                        reason: "must be greater than zero",
                    })
                }
                Ok(depth) => depth,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: "RPRATT_MAX_DEPTH",
                        value,
                        reason: "not a number",
                    })
                }
            };
        }

        if let Some(filter) = lookup("RPRATT_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
