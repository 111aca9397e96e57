use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Resolved locations for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Default)]
pub struct EncodeConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl EncodeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn build(self) -> Result<EncodeConfig, ConfigError> {
        Ok(EncodeConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
        })
    }
}
