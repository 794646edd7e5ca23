//! Game construction options.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! search_depth = 6
//! automated_opponent = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CheckersErrors, CheckersResult};
use crate::game_state::checkers_rules::{
    DEFAULT_FRAME_RATE, DEFAULT_HISTORY_CAPACITY, DEFAULT_SEARCH_DEPTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Redraw rate for a front end. The game logic never reads it.
    pub frame_rate: u32,
    /// Number of automated-side snapshots kept for repetition detection.
    pub history_capacity: usize,
    /// Whether Dark replies automatically after every Light move.
    pub automated_opponent: bool,
    /// Plies searched for each automated move.
    pub search_depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            automated_opponent: true,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> CheckersResult<Self> {
        let config: GameConfig =
            toml::from_str(text).map_err(|e| CheckersErrors::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> CheckersResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CheckersErrors::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> CheckersResult<()> {
        if self.history_capacity == 0 {
            return Err(CheckersErrors::InvalidConfig(
                "history_capacity must be at least 1".to_owned(),
            ));
        }
        if self.search_depth == 0 {
            return Err(CheckersErrors::InvalidConfig(
                "search_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.history_capacity, 15);
        assert!(config.automated_opponent);
        assert_eq!(config.search_depth, 4);
    }

    #[test]
    fn partial_documents_override_only_their_keys() {
        let config = GameConfig::from_toml_str("search_depth = 6\nautomated_opponent = false\n")
            .unwrap();
        assert_eq!(config.search_depth, 6);
        assert!(!config.automated_opponent);
        assert_eq!(config.history_capacity, 15);
    }

    #[test]
    fn bad_values_and_unknown_keys_are_rejected() {
        for text in [
            "history_capacity = 0",
            "search_depth = 0",
            "search_depth = \"deep\"",
            "opponent = true",
        ] {
            assert!(
                matches!(
                    GameConfig::from_toml_str(text),
                    Err(CheckersErrors::InvalidConfig(_))
                ),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = GameConfig::load(Path::new("/definitely/not/here/checkers.toml"));
        assert!(matches!(result, Err(CheckersErrors::InvalidConfig(_))));
    }
}
