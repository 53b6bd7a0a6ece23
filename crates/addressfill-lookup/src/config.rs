use addressfill_core::fields::DEFAULT_LINE1_SUFFIX;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_URL: &str =
    "https://ws1.postescanada-canadapost.ca/AddressComplete/Interactive/AutoComplete/v1.00/json3.ws";
pub const DEFAULT_RETRIEVE_URL: &str =
    "https://ws1.postescanada-canadapost.ca/AddressComplete/Interactive/Retrieve/v1.00/json3.ws";

/// Data-source descriptor for the AddressComplete service: endpoints, static
/// query parameters, and the envelope field the suggestion list lives under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub search_url: String,
    pub retrieve_url: String,
    /// Caller credential sent as `Key` on every request.
    pub key: String,
    /// Fixed language preference sent with every search.
    pub language: String,
    /// Envelope field holding the suggestion list.
    pub items_path: String,
    pub user_agent: String,
}

impl LookupConfig {
    /// Production endpoints with the given caller credential.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            retrieve_url: DEFAULT_RETRIEVE_URL.to_string(),
            key: key.into(),
            language: "EN".to_string(),
            items_path: "Items".to_string(),
            user_agent: "addressfill/0.1".to_string(),
        }
    }

    /// Both endpoints rooted under `base_url`, for tests against a mock
    /// server.
    pub fn with_base_url(key: impl Into<String>, base_url: &str) -> Self {
        Self {
            search_url: format!("{base_url}/search"),
            retrieve_url: format!("{base_url}/retrieve"),
            ..Self::new(key)
        }
    }
}

/// Widget-facing options for one bound input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteOptions {
    /// Name of the trigger input this controller is bound to.
    pub input_name: String,
    /// Minimum characters before a search fires.
    pub min_chars: usize,
    /// Suggestion fields joined into one display line, by service name.
    pub display: Vec<String>,
    /// Suffix convention of the trigger input's name.
    pub line1_suffix: String,
}

impl AutocompleteOptions {
    pub fn for_input(input_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            min_chars: 1,
            display: vec!["Text".to_string(), "Description".to_string()],
            line1_suffix: DEFAULT_LINE1_SUFFIX.to_string(),
        }
    }
}
