use std::sync::Arc;

use addressfill_core::types::{ResolvedAddress, Suggestion};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::LookupConfig;
use crate::error::Result;
use crate::http::LookupClient;

/// Networked source behind the autocomplete widget: free-text search plus
/// retrieve-by-id.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Suggestions for a text fragment, in service relevance order, without
    /// client-side filtering or dedup. Failures degrade to an empty list and
    /// never reach the caller.
    async fn search(&self, text: &str) -> Vec<Suggestion>;

    /// Full structured address for a retrievable suggestion id. `Ok(None)`
    /// when the service returns no records.
    async fn resolve(&self, id: &str) -> Result<Option<ResolvedAddress>>;
}

// A page with several address groups can share one source across their
// controllers.
#[async_trait]
impl<S: AddressSource + ?Sized> AddressSource for Arc<S> {
    async fn search(&self, text: &str) -> Vec<Suggestion> {
        (**self).search(text).await
    }

    async fn resolve(&self, id: &str) -> Result<Option<ResolvedAddress>> {
        (**self).resolve(id).await
    }
}

/// Client for the Canada Post AddressComplete interactive endpoints.
pub struct AddressCompleteSource {
    client: LookupClient,
    config: LookupConfig,
}

impl AddressCompleteSource {
    pub fn new(config: LookupConfig) -> Self {
        let client = LookupClient::new(&config.user_agent);
        Self { client, config }
    }

    async fn search_items(&self, text: &str) -> Result<Vec<Suggestion>> {
        let val: Value = self
            .client
            .get_json(
                &self.config.search_url,
                &[
                    ("SearchTerm", text),
                    ("LanguagePreference", self.config.language.as_str()),
                    ("Key", self.config.key.as_str()),
                ],
            )
            .await?;

        let items = val
            .get(self.config.items_path.as_str())
            .and_then(Value::as_array)
            .map(|arr| arr.iter().map(Suggestion::from_json).collect())
            .unwrap_or_default();
        Ok(items)
    }
}

#[async_trait]
impl AddressSource for AddressCompleteSource {
    async fn search(&self, text: &str) -> Vec<Suggestion> {
        match self.search_items(text).await {
            Ok(items) => items,
            Err(err) => {
                debug!("address search failed: {err}");
                Vec::new()
            }
        }
    }

    async fn resolve(&self, id: &str) -> Result<Option<ResolvedAddress>> {
        let val: Value = self
            .client
            .get_json(
                &self.config.retrieve_url,
                &[("Key", self.config.key.as_str()), ("Id", id)],
            )
            .await?;

        // Items[1], when present, is the alternate-language rendering of the
        // same address and is ignored.
        let first = val["Items"].as_array().and_then(|items| items.first());
        Ok(first.map(ResolvedAddress::from_json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn source_for(server: &Server) -> AddressCompleteSource {
        AddressCompleteSource::new(LookupConfig::with_base_url("k-1", &server.url()))
    }

    #[tokio::test]
    async fn search_parses_items_in_service_order() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("SearchTerm".into(), "123 Main".into()),
                Matcher::UrlEncoded("LanguagePreference".into(), "EN".into()),
                Matcher::UrlEncoded("Key".into(), "k-1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"Items": [
                    {"Id": "b", "Text": "123 Main St", "Description": "Victoria, BC", "IsRetrievable": true},
                    {"Id": "a", "Text": "123 Main Ave", "Description": "Nanaimo, BC", "IsRetrievable": false}
                ]}"#,
            )
            .create_async()
            .await;

        let items = source_for(&server).search("123 Main").await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b");
        assert!(items[0].is_retrievable);
        assert_eq!(items[1].id, "a");
        assert!(!items[1].is_retrievable);
    }

    #[tokio::test]
    async fn search_swallows_transport_failures() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        assert!(source_for(&server).search("123").await.is_empty());
    }

    #[tokio::test]
    async fn search_swallows_malformed_envelopes() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"Error": "bad key"}"#)
            .create_async()
            .await;

        assert!(source_for(&server).search("123").await.is_empty());
    }

    #[tokio::test]
    async fn resolve_takes_only_the_first_record() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/retrieve")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Key".into(), "k-1".into()),
                Matcher::UrlEncoded("Id".into(), "opaque-1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"Items": [
                    {"Line1": "123 Main St", "Line2": "", "City": "Victoria", "ProvinceCode": "BC", "PostalCode": "V8W1A1"},
                    {"Line1": "123 rue Main", "Line2": "", "City": "Victoria", "ProvinceCode": "BC", "PostalCode": "V8W1A1"}
                ]}"#,
            )
            .create_async()
            .await;

        let address = source_for(&server)
            .resolve("opaque-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(address.line1, "123 Main St");
        assert_eq!(address.city, "Victoria");
        assert_eq!(address.province_code, "BC");
        assert_eq!(address.postal_code, "V8W1A1");
        assert_eq!(address.line2, "");
    }

    #[tokio::test]
    async fn resolve_with_empty_items_is_none() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/retrieve")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"Items": []}"#)
            .create_async()
            .await;

        assert!(source_for(&server).resolve("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolve_propagates_transport_failures() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/retrieve")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        assert!(source_for(&server).resolve("x").await.is_err());
    }
}
