use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_board_name() -> String {
    "Untitled board".to_string()
}

fn default_join_code_len() -> usize {
    16
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name given to boards created with a blank name.
    #[serde(default = "default_board_name")]
    pub default_board_name: String,
    /// Length of generated join codes.
    #[serde(default = "default_join_code_len")]
    pub join_code_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_board_name: default_board_name(),
            join_code_len: default_join_code_len(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("corkboard/config.toml"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_board_name, "Untitled board");
        assert_eq!(config.join_code_len, 16);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("default_board_name = \"Scratch\"").unwrap();
        assert_eq!(config.default_board_name, "Scratch");
        assert_eq!(config.join_code_len, 16);
    }
}
