use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "resources/icons/shortcuts.svg";
pub const DEFAULT_OUTPUT: &str = "resources/icons/shortcuts.png";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "convert-svg-to-png")]
#[command(about = "Convert an SVG icon to PNG with marketplace sizing")]
pub struct ConvertConfig {
    /// SVG input path
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// PNG output path
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Square output size in pixels
    #[arg(default_value_t = 128)]
    pub size: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for ConvertConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_positive_number("size", self.size, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = ConvertConfig::parse_from(["convert-svg-to-png"]);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.size, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_positional_overrides() {
        let config =
            ConvertConfig::parse_from(["convert-svg-to-png", "icon.svg", "icon.png", "64"]);
        assert_eq!(config.input, PathBuf::from("icon.svg"));
        assert_eq!(config.output, PathBuf::from("icon.png"));
        assert_eq!(config.size, 64);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = ConvertConfig::parse_from(["convert-svg-to-png", "icon.svg", "icon.png", "0"]);
        assert!(config.validate().is_err());
    }
}
