//! User configuration, read from `config.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::calculator::{CalcError, Key, KeyParser};

/// How the front-end prints the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the display text.
    #[default]
    Plain,
    /// A JSON snapshot per line.
    Json,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt shown in interactive mode.
    pub prompt: String,
    pub output: OutputFormat,
    /// Copy the display to the clipboard after each line ending in `=`.
    pub copy_on_evaluate: bool,
    /// Extra words accepted as keys, mapped to a key label.
    pub aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            output: OutputFormat::Plain,
            copy_on_evaluate: false,
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/keycalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load from an explicit path, or the default path if it exists.
    ///
    /// A missing default file gives the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        // Fail at load time rather than on first use.
        config.key_parser()?;
        Ok(config)
    }

    /// Build the key parser with the configured aliases.
    pub fn key_parser(&self) -> Result<KeyParser, CalcError> {
        self.aliases
            .iter()
            .try_fold(KeyParser::new(), |parser, (word, label)| {
                let key: Key = label
                    .parse()
                    .map_err(|_| CalcError::invalid_alias(word, format!("unknown key '{}'", label)))?;
                parser.with_alias(word, key)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::BinaryOperator;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.output, OutputFormat::Plain);
        assert!(!config.copy_on_evaluate);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            prompt = "calc> "
            output = "json"
            copy_on_evaluate = true

            [aliases]
            plus = "+"
            times = "×"
            "#,
        )
        .unwrap();
        assert_eq!(config.prompt, "calc> ");
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.copy_on_evaluate);

        let keys = config.key_parser().unwrap().tokenize("2 times 3").unwrap();
        assert_eq!(keys[1], Key::Binary(BinaryOperator::Multiply));
    }

    #[test]
    fn test_bad_alias_rejected() {
        let result = Config::from_toml(
            r#"
            [aliases]
            root = "sqrt"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_output_rejected() {
        assert!(Config::from_toml(r#"output = "xml""#).is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        assert!(Config::load(Some(Path::new("/nonexistent/keycalc.toml"))).is_err());
    }
}
