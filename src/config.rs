//! Configuration surface: TOML policy files and `CORS_*` environment
//! variables.
//!
//! ```toml
//! [[policy]]
//! path = "/api/**"
//! allowed_origins = ["http://localhost:8080", "http://localhost:3000"]
//! allow_credentials = true
//! max_age_seconds = 3600
//! ```
//!
//! Without a file, a single policy is assembled from the environment:
//! `CORS_ALLOWED_ORIGINS`, `CORS_ALLOWED_METHODS`, `CORS_ALLOWED_HEADERS`,
//! `CORS_EXPOSED_HEADERS`, `CORS_ALLOW_CREDENTIALS`, `CORS_MAX_AGE` and
//! `CORS_PATH_PATTERN`. List values are comma-separated.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;
use crate::policy::CorsPolicy;
use crate::util::split_list;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "CORS_MAX_AGE";
pub const ENV_PATH_PATTERN: &str = "CORS_PATH_PATTERN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CORS configuration from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CORS configuration")]
    Parse(#[from] toml::de::Error),
    #[error("environment variable {key} has invalid value `{value}`")]
    InvalidEnv { key: &'static str, value: String },
    #[error("invalid CORS policy")]
    Validation(#[from] ValidationError),
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(default, rename = "policy")]
    pub policies: Vec<PolicyConfig>,
}

/// One `[[policy]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub path: String,
    /// `["*"]` is the any-origin sentinel.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: Option<u64>,
    pub preflight_status: u16,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let defaults = CorsOptions::default();
        Self {
            path: defaults.path_pattern,
            allowed_origins: Vec::new(),
            allowed_methods: defaults.methods.values().to_vec(),
            allowed_headers: defaults.allowed_headers.values().to_vec(),
            exposed_headers: Vec::new(),
            allow_credentials: defaults.credentials,
            max_age_seconds: defaults.max_age,
            preflight_status: defaults.options_success_status,
        }
    }
}

impl PolicyConfig {
    pub fn to_options(&self) -> CorsOptions {
        let origins = match self.allowed_origins.as_slice() {
            [only] if only.trim() == WILDCARD => AllowedOrigins::any(),
            values => AllowedOrigins::list(values.iter().cloned()),
        };

        CorsOptions {
            origins,
            methods: AllowedMethods::list(self.allowed_methods.iter().cloned()),
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().cloned()),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().cloned()),
            credentials: self.allow_credentials,
            max_age: self.max_age_seconds,
            path_pattern: self.path.clone(),
            options_success_status: self.preflight_status,
        }
    }

    /// Builds a policy from environment-style lookups, starting from the
    /// defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ALLOWED_ORIGINS) {
            config.allowed_origins = split_owned(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_METHODS) {
            config.allowed_methods = split_owned(&value);
        }
        if let Some(value) = lookup(ENV_ALLOWED_HEADERS) {
            config.allowed_headers = split_owned(&value);
        }
        if let Some(value) = lookup(ENV_EXPOSED_HEADERS) {
            config.exposed_headers = split_owned(&value);
        }
        if let Some(value) = lookup(ENV_ALLOW_CREDENTIALS) {
            config.allow_credentials = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        key: ENV_ALLOW_CREDENTIALS,
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(ENV_MAX_AGE) {
            let seconds = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_MAX_AGE,
                value: value.clone(),
            })?;
            config.max_age_seconds = Some(seconds);
        }
        if let Some(value) = lookup(ENV_PATH_PATTERN) {
            config.path = value.trim().to_string();
        }

        Ok(config)
    }
}

impl CorsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            policies: vec![PolicyConfig::from_lookup(lookup)?],
        })
    }

    /// Reads `path` when given, otherwise falls back to the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading CORS configuration file");
                Self::from_file(path)
            }
            None => {
                tracing::info!("loading CORS configuration from environment");
                Self::from_env()
            }
        }
    }

    /// Validates every policy and assembles the evaluator.
    pub fn build(&self) -> Result<Cors, ConfigError> {
        let policies = self
            .policies
            .iter()
            .map(|policy| CorsPolicy::new(policy.to_options()))
            .collect::<Result<Vec<_>, _>>()?;

        for policy in &policies {
            if policy.options().origins.is_empty() {
                tracing::warn!(
                    path = policy.pattern().as_str(),
                    "CORS policy lists no origins; every cross-origin request will be denied"
                );
            }
        }

        let cors = Cors::from_policies(policies)?;
        tracing::info!(policies = cors.policies().len(), "CORS policies loaded");
        Ok(cors)
    }
}

fn split_owned(value: &str) -> Vec<String> {
    split_list(value).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
