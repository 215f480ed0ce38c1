use crate::app::render::DisplayFormat;
use crate::config::toml_config::CatalogConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-catalog")]
#[command(about = "Sort and search a small collection of components")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Insert the example components before the menu starts")]
    pub seed: bool,

    #[arg(long, help = "Listing format: table, csv, tsv or json")]
    pub format: Option<String>,
}

impl CliConfig {
    /// Loads the TOML file if one was given and lays the command line flags
    /// over it.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };
        self.merge_into(&mut config);
        Ok(config)
    }

    pub fn merge_into(&self, config: &mut CatalogConfig) {
        if self.verbose {
            config.logging.verbose = Some(true);
        }
        if self.seed {
            config.session.seed_example = Some(true);
        }
        if let Some(format) = &self.format {
            config.display.format = Some(format.clone());
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("format", format, &DisplayFormat::NAMES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from(["small-catalog", "--seed", "--format", "json", "-v"]);
        assert!(cli.seed);
        assert!(cli.verbose);
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut config = CatalogConfig::from_toml_str(
            "[display]\nformat = \"csv\"\n[session]\nseed_example = false\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from(["small-catalog", "--seed", "--format", "tsv"]);

        cli.merge_into(&mut config);
        assert!(config.seed_example());
        assert_eq!(config.display_format().unwrap(), DisplayFormat::Tsv);
    }

    #[test]
    fn test_unknown_format_flag_is_invalid() {
        let cli = CliConfig::parse_from(["small-catalog", "--format", "xml"]);
        assert!(cli.validate().is_err());
    }
}
