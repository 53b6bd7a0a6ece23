use serde::de::DeserializeOwned;

use crate::error::{LookupError, Result};

/// Thin GET wrapper shared by the search and retrieve calls. The transport's
/// default behavior is accepted as-is: no retry, no backoff, no caching.
pub struct LookupClient {
    client: reqwest::Client,
}

impl LookupClient {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");
        Self { client }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let resp = self.client.get(url).query(query).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::ApiError(
                url.to_string(),
                format!("HTTP {status}: {body}"),
            ));
        }
        let text = resp.text().await.map_err(LookupError::Http)?;
        serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::Value;

    #[tokio::test]
    async fn get_json_sends_query_parameters() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup")
            .match_query(Matcher::UrlEncoded("Key".into(), "k-1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = LookupClient::new("addressfill-test");
        let url = format!("{}/lookup", server.url());
        let val: Value = client.get_json(&url, &[("Key", "k-1")]).await.unwrap();
        assert_eq!(val["ok"], Value::Bool(true));
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = LookupClient::new("addressfill-test");
        let url = format!("{}/lookup", server.url());
        let err = client.get_json::<Value>(&url, &[]).await.unwrap_err();
        assert!(matches!(err, LookupError::ApiError(_, _)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = LookupClient::new("addressfill-test");
        let url = format!("{}/lookup", server.url());
        let err = client.get_json::<Value>(&url, &[]).await.unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }
}
