//! Drop zone configuration: accepted MIME types and the per-file size limit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_SIZE_FILE: u64 = 1_000_000;

pub fn default_accepted_mime_types() -> Vec<String> {
    vec!["application/pdf".to_string(), "application/json".to_string()]
}

fn default_max_size_file() -> u64 {
    DEFAULT_MAX_SIZE_FILE
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("acceptedMimeTypes must be a JSON array of strings: {0}")]
    MimeTypes(#[source] serde_json::Error),
    #[error("maxSizeFile must be a non-negative byte count, got {0:?}")]
    MaxSize(String),
    #[error("invalid drop zone config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings a host page can change on a drop zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropZoneConfig {
    #[serde(default = "default_accepted_mime_types")]
    pub accepted_mime_types: Vec<String>,
    #[serde(default = "default_max_size_file")]
    pub max_size_file: u64,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            accepted_mime_types: default_accepted_mime_types(),
            max_size_file: DEFAULT_MAX_SIZE_FILE,
        }
    }
}

impl DropZoneConfig {
    pub fn new(accepted_mime_types: Vec<String>, max_size_file: u64) -> Self {
        Self {
            accepted_mime_types: dedup_in_order(accepted_mime_types),
            max_size_file,
        }
    }

    /// Builds a config from raw attribute values, the way a web component
    /// receives them. A missing attribute keeps its default.
    pub fn from_attributes(
        accepted_mime_types: Option<&str>,
        max_size_file: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = accepted_mime_types {
            let types: Vec<String> =
                serde_json::from_str(raw.trim()).map_err(ConfigError::MimeTypes)?;
            config.accepted_mime_types = dedup_in_order(types);
        }

        if let Some(raw) = max_size_file {
            config.max_size_file = parse_byte_count(raw)?;
        }

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(Self::new(config.accepted_mime_types, config.max_size_file))
    }

    pub fn accepts_type(&self, mime_type: &str) -> bool {
        self.accepted_mime_types.iter().any(|t| t == mime_type)
    }

    pub fn accepts_size(&self, size: u64) -> bool {
        size <= self.max_size_file
    }
}

// Largest integer an f64 holds exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

// Accepts integral values written as floats ("1e6", "2048.0") since that is
// what a number attribute can carry. Float forms above 2^53 - 1 are rejected
// rather than rounded.
fn parse_byte_count(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 && value <= MAX_EXACT_FLOAT && value.fract() == 0.0 => {
            Ok(value as u64)
        }
        _ => Err(ConfigError::MaxSize(raw.to_string())),
    }
}

fn dedup_in_order(types: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(types.len());
    for mime_type in types {
        if !out.contains(&mime_type) {
            out.push(mime_type);
        }
    }
    out
}
