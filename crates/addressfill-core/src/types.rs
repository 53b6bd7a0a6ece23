use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-text fragment typed into the trigger input. Built per keystroke and
/// discarded once the search it triggered resolves or is superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub text: String,
}

impl AddressQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One candidate match from the search endpoint, identified by an opaque id.
/// Only retrievable suggestions can be expanded into a full address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub description: String,
    pub is_retrievable: bool,
}

impl Suggestion {
    pub fn from_json(v: &Value) -> Self {
        Self {
            id: v
                .get("Id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            text: v
                .get("Text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: v
                .get("Description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            is_retrievable: v
                .get("IsRetrievable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

/// Structured address from a retrieve response. Fields the service leaves
/// unset come back as empty strings so they still overwrite stale input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub province_code: String,
    pub postal_code: String,
}

impl ResolvedAddress {
    pub fn from_json(v: &Value) -> Self {
        let field = |name: &str| {
            v.get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            line1: field("Line1"),
            line2: field("Line2"),
            city: field("City"),
            province_code: field("ProvinceCode"),
            postal_code: field("PostalCode"),
        }
    }
}

/// Submission outcome owned by the host framework. Only `success` and the
/// first legal entity id are consumed; everything else in the response is
/// the host's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub legal_entity_id: Option<String>,
}

impl SubmissionResult {
    pub fn from_json(v: &Value) -> Self {
        let success = v.get("success").and_then(Value::as_bool).unwrap_or(false);
        let legal_entity_id = v["result"]["claim"]["legal_entity_id"][0]
            .as_str()
            .map(|s| s.to_string());
        Self {
            success,
            legal_entity_id,
        }
    }
}
