//! Store Configuration
//!
//! Storage keys and the clear-all confirmation phrase.

use serde::{Deserialize, Serialize};

/// Key holding the current (v2) item records
pub const STORAGE_KEY: &str = "shopping-items-v2";
/// Key the v1 app wrote to; read only when the v2 key is absent
pub const LEGACY_STORAGE_KEY: &str = "shopping-items-v1";
/// Literal the user must type to confirm "clear all"
pub const CLEAR_ALL_PHRASE: &str = "DELETE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub storage_key: String,
    pub legacy_storage_key: String,
    pub clear_all_phrase: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            legacy_storage_key: LEGACY_STORAGE_KEY.to_string(),
            clear_all_phrase: CLEAR_ALL_PHRASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"clearAllPhrase":"WIPE"}"#).unwrap();
        assert_eq!(config.clear_all_phrase, "WIPE");
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(config.legacy_storage_key, LEGACY_STORAGE_KEY);
    }
}
