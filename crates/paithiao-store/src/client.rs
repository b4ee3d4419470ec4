//! PostgREST client for the Supabase-backed directory tables.
//!
//! Wraps `reqwest` with store-specific error handling and key
//! management. Rows are returned as loose [`PlaceRecord`]s; nothing is
//! deserialized into rigid structs because upstream data entry does not
//! honor a rigid schema. No retries and no local timeout beyond the
//! client-wide request timeout; a failed fetch surfaces immediately.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use paithiao_core::{AppConfig, PlaceRecord};

use crate::error::StoreError;

/// Client for the remote data store.
///
/// Use [`StoreClient::new`] with loaded configuration in production or
/// [`StoreClient::with_base_url`] to point at a mock server in tests.
pub struct StoreClient {
    client: Client,
    anon_key: String,
    base_url: Url,
}

impl StoreClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::InvalidBaseUrl`] if the
    /// configured URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        Self::with_base_url(
            &config.supabase_url,
            &config.supabase_anon_key,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`StoreClient::new`].
    pub fn with_base_url(
        base_url: &str,
        anon_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so that join() appends
        // path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| StoreError::InvalidBaseUrl {
                url: normalised,
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            anon_key: anon_key.to_owned(),
            base_url,
        })
    }

    /// Fetches a single row by id. `Ok(None)` means the table has no
    /// such row, distinct from any transport or store error.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Api`] if the store rejects the request.
    /// - [`StoreError::Http`] on network failure.
    /// - [`StoreError::Deserialize`] if the response is not a JSON array.
    pub async fn fetch_one(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<PlaceRecord>, StoreError> {
        let url = self.table_url(table, &[("id", &format!("eq.{id}")), ("limit", "1")])?;
        let mut rows = self.request_rows(url).await?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(PlaceRecord::new(rows.swap_remove(0))))
    }

    /// Fetches every row of a table, server-side ordered.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`StoreClient::fetch_one`].
    pub async fn fetch_all(
        &self,
        table: &str,
        order_field: &str,
        ascending: bool,
    ) -> Result<Vec<PlaceRecord>, StoreError> {
        let direction = if ascending { "asc" } else { "desc" };
        let url = self.table_url(table, &[("order", &format!("{order_field}.{direction}"))])?;
        let rows = self.request_rows(url).await?;
        Ok(rows.into_iter().map(PlaceRecord::new).collect())
    }

    /// Builds `{base}/rest/v1/{table}` with `select=*` plus any extra
    /// query parameters, all percent-encoded via [`Url::query_pairs_mut`].
    fn table_url(&self, table: &str, extra: &[(&str, &str)]) -> Result<Url, StoreError> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|e| StoreError::InvalidBaseUrl {
                url: format!("{}rest/v1/{table}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authenticated GET and parses the body as a JSON array
    /// of rows.
    ///
    /// Non-2xx responses are turned into [`StoreError::Api`] carrying
    /// the PostgREST `message` field when the body has one, otherwise
    /// the raw body text.
    async fn request_rows(&self, url: Url) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(%url, "store GET");
        let response = self
            .client
            .get(url.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Pulls the `message` field out of a PostgREST error body, falling
/// back to the body itself when it is not the expected JSON shape.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| body.trim().to_string(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> StoreClient {
        StoreClient::with_base_url(base_url, "test-key", 30, "paithiao-test/0")
            .expect("client construction should not fail")
    }

    #[test]
    fn table_url_targets_rest_endpoint() {
        let client = test_client("https://example.supabase.co");
        let url = client
            .table_url("recom_temple", &[("id", "eq.7"), ("limit", "1")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.supabase.co/rest/v1/recom_temple?select=*&id=eq.7&limit=1"
        );
    }

    #[test]
    fn table_url_strips_extra_trailing_slashes() {
        let client = test_client("https://example.supabase.co///");
        let url = client
            .table_url("recom_event", &[("order", "name.asc")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.supabase.co/rest/v1/recom_event?select=*&order=name.asc"
        );
    }

    #[test]
    fn error_message_prefers_postgrest_field() {
        let body = r#"{"code":"PGRST301","message":"JWT expired"}"#;
        assert_eq!(extract_error_message(body), "JWT expired");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(extract_error_message("upstream timeout"), "upstream timeout");
    }
}
