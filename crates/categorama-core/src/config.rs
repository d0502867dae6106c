//! Configuration
//!
//! Store settings are baked in at compile time; each field can be
//! overridden with an environment variable when building:
//! - CATEGORAMA_FIRESTORE_URL
//! - CATEGORAMA_FIRESTORE_PROJECT
//! - CATEGORAMA_FIRESTORE_API_KEY

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_PROJECT_ID: &str = "guessr-84aed";
const DEFAULT_COLLECTION: &str = "Categories";
const DEFAULT_DOCUMENT: &str = "2Zvpb8RnzE3KG0QlF8XT";
const SHARED_COLLECTION: &str = "UpdatedCategories";

/// Where category lists live in the document store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
    /// Collection holding the built-in list
    pub default_collection: String,
    /// Document id of the built-in list
    pub default_document: String,
    /// Collection of saved lists, keyed by share token
    pub shared_collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            api_key: None,
            default_collection: DEFAULT_COLLECTION.to_string(),
            default_document: DEFAULT_DOCUMENT.to_string(),
            shared_collection: SHARED_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults plus any build-time overrides
    pub fn embedded() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("CATEGORAMA_FIRESTORE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(project) = option_env!("CATEGORAMA_FIRESTORE_PROJECT") {
            config.project_id = project.to_string();
        }
        config.api_key = option_env!("CATEGORAMA_FIRESTORE_API_KEY").map(str::to_string);
        config
    }
}

/// Round settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub duration_secs: u32,
    /// How many categories from the front of the list are played
    pub visible_count: usize,
    /// Length of the reset transition
    pub reset_delay_ms: u32,
    pub tick_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120,
            visible_count: 12,
            reset_delay_ms: 1000,
            tick_interval_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.default_collection, "Categories");
        assert_eq!(config.shared_collection, "UpdatedCategories");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_embedded_keeps_document_locations() {
        let config = StoreConfig::embedded();
        assert_eq!(config.default_collection, DEFAULT_COLLECTION);
        assert_eq!(config.default_document, DEFAULT_DOCUMENT);
        assert_eq!(config.shared_collection, SHARED_COLLECTION);
        assert!(!config.base_url.ends_with('/'));
    }

    #[test]
    fn test_game_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.duration_secs, 120);
        assert_eq!(config.visible_count, 12);
        assert_eq!(config.reset_delay_ms, 1000);
    }
}
