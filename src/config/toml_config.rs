use crate::core::ConfigProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteJobConfig {
    pub job: JobConfig,
    pub input: InputConfig,
    pub matching: Option<MatchingConfig>,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub request_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub suggestions: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl QuoteJobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;
        validation::validate_path("input.request_file", &self.input.request_file)?;
        validation::validate_file_extensions(
            "input.request_file",
            std::slice::from_ref(&self.input.request_file),
            &["json"],
        )?;
        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_output_formats("output.output_formats", &self.output.output_formats)?;
        validation::validate_range("matching.suggestions", self.suggestion_count(), 0, 50)?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(QuoteError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for QuoteJobConfig {
    fn input_file(&self) -> &str {
        &self.input.request_file
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn suggestion_count(&self) -> usize {
        self.matching
            .as_ref()
            .and_then(|m| m.suggestions)
            .unwrap_or(DEFAULT_SUGGESTIONS)
    }
}

impl Validate for QuoteJobConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
