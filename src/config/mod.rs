pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "freight-quote")]
#[command(about = "Compare freight pricing options and match locations to seaports")]
pub struct CliConfig {
    /// Quote request file (JSON)
    #[arg(long, short)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json,csv")]
    pub formats: Vec<String>,

    /// Number of nearby ports listed alongside the matched port
    #[arg(long, default_value = "5")]
    pub suggestions: usize,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn suggestion_count(&self) -> usize {
        self.suggestions
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        let input = std::slice::from_ref(&self.input);
        validation::validate_file_extensions("input", input, &["json"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        validation::validate_range("suggestions", self.suggestions, 0, 50)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::QuoteError;

    #[test]
    fn test_parse_cli_defaults() {
        let config = CliConfig::parse_from(["freight-quote", "--input", "request.json"]);

        assert_eq!(config.output_path, "./output");
        assert_eq!(config.formats, vec!["json", "csv"]);
        assert_eq!(config.suggestions, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let config = CliConfig::parse_from([
            "freight-quote",
            "--input",
            "request.json",
            "--formats",
            "json,xlsx",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_rejects_non_json_input() {
        let config = CliConfig::parse_from(["freight-quote", "-i", "request.csv"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_suggestion_bounds() {
        let with = |count: &str| {
            CliConfig::parse_from(["freight-quote", "-i", "request.json", "--suggestions", count])
        };
        assert!(with("0").validate().is_ok());

        let many = with("51");
        assert!(matches!(
            many.validate(),
            Err(QuoteError::InvalidConfigValueError { field, .. }) if field == "suggestions"
        ));
    }
}
