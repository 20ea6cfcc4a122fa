use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, String> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config file: {}", e))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| format!("Failed to parse config: {}", e))?;

            Ok(config)
        } else {
            // Use defaults if file not found
            Ok(Config::default())
        }
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) {
        if let Some(input) = &args.input {
            self.files.input = input.clone();
        }

        if let Some(output) = &args.output {
            self.files.output = output.clone();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: FilesConfig {
                input: PathBuf::from("blockdag.in"),
                output: PathBuf::from("blockdag.out"),
            },
        }
    }
}
