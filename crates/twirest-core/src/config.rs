//! Library configuration
//!
//! Settings are layered with the `config` crate: built-in defaults, then
//! optional `config/twirest` files, then `TWIREST__*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TwirestConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
}

/// Response decoding configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest response body accepted, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// How much of a body is echoed into debug logs
    #[serde(default = "default_body_preview_bytes")]
    pub body_preview_bytes: usize,

    /// Replace a RestException's numeric status with its reason phrase
    #[serde(default = "default_normalize_exceptions")]
    pub normalize_exceptions: bool,
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_body_preview_bytes() -> usize {
    512
}

fn default_normalize_exceptions() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            body_preview_bytes: default_body_preview_bytes(),
            normalize_exceptions: default_normalize_exceptions(),
        }
    }
}

impl DecoderConfig {
    /// Truncate a body for logging, respecting char boundaries
    pub fn preview<'a>(&self, body: &'a str) -> &'a str {
        if body.len() <= self.body_preview_bytes {
            return body;
        }
        let mut end = self.body_preview_bytes;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        &body[..end]
    }
}

impl TwirestConfig {
    /// Load configuration from `.env`, optional config files and environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .set_default("decoder.max_body_bytes", default_max_body_bytes() as i64)?
            .set_default(
                "decoder.body_preview_bytes",
                default_body_preview_bytes() as i64,
            )?
            .set_default("decoder.normalize_exceptions", true)?
            .add_source(File::with_name("config/twirest").required(false))
            .add_source(File::with_name(&format!("config/twirest.{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("TWIREST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("TWIREST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
