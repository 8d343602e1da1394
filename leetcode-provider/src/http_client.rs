//! reqwest-backed GraphQL client
//!
//! Sends every operation as a JSON POST to the site's GraphQL endpoint with
//! the session cookie and CSRF headers the site expects, then unwraps the
//! `{data, errors}` envelope.
//!
//! Failures are surfaced once as [`ProviderError::UpstreamFailure`]. Nothing
//! here retries or caches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE, ORIGIN, REFERER};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::traits::{GraphQlClient, GraphQlRequest};
use crate::types::{Credential, SiteVariant};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - site identifier (for logging and errors)
    /// * `operation` - GraphQL operation name (for logging and errors)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        operation: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{provider_name}] POST {operation}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                e.to_string()
            };
            upstream_failure(provider_name, operation, detail)
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            upstream_failure(
                provider_name,
                operation,
                format!("Failed to read response body: {e}"),
            )
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Decode the GraphQL envelope and return its `data` member.
    ///
    /// A body that is not a GraphQL envelope, or one with a non-empty
    /// `errors` array, is an upstream failure.
    pub fn unwrap_envelope(response_text: &str, provider_name: &str, operation: &str) -> Result<Value> {
        let envelope: GraphQlEnvelope = serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            upstream_failure(provider_name, operation, format!("invalid response body: {e}"))
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let detail = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(upstream_failure(provider_name, operation, detail));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

fn upstream_failure(provider: &str, operation: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::UpstreamFailure {
        provider: provider.to_string(),
        operation: operation.to_string(),
        detail: detail.into(),
    }
}

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client(variant: SiteVariant) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| upstream_failure(variant.id(), "build http client", e.to_string()))
}

/// GraphQL client for one LeetCode site.
pub struct HttpGraphQlClient {
    client: Client,
    variant: SiteVariant,
    credential: Credential,
}

impl HttpGraphQlClient {
    pub fn new(variant: SiteVariant, credential: Credential) -> Result<Self> {
        Ok(Self {
            client: create_http_client(variant)?,
            variant,
            credential,
        })
    }

    fn cookie_header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(session) = self.credential.session() {
            parts.push(format!("LEETCODE_SESSION={session}"));
        }
        if let Some(csrf) = self.credential.csrf_token() {
            parts.push(format!("csrftoken={csrf}"));
        }
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

#[async_trait]
impl GraphQlClient for HttpGraphQlClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value> {
        let provider = self.variant.id();
        let base_url = self.variant.base_url();

        let mut builder = self
            .client
            .post(self.variant.graphql_endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, format!("{base_url}/"))
            .header(ORIGIN, base_url)
            .json(&request);

        if let Some(cookie) = self.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(csrf) = self.credential.csrf_token() {
            builder = builder.header("x-csrftoken", csrf);
        }

        let (status, body) =
            HttpUtils::execute_request(builder, provider, request.operation_name).await?;

        if status >= 400 {
            log::warn!("[{provider}] {} returned HTTP {status}", request.operation_name);
            return Err(upstream_failure(
                provider,
                request.operation_name,
                format!("HTTP {status}: {}", truncate_for_log(&body)),
            ));
        }

        HttpUtils::unwrap_envelope(&body, provider, request.operation_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_detail(result: Result<Value>) -> String {
        match result {
            Err(ProviderError::UpstreamFailure { detail, .. }) => detail,
            other => format!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn envelope_returns_data() {
        let data = HttpUtils::unwrap_envelope(
            r#"{"data":{"question":{"title":"Two Sum"}}}"#,
            "global",
            "questionData",
        );
        assert_eq!(
            data.ok().and_then(|v| v["question"]["title"].as_str().map(String::from)),
            Some("Two Sum".to_string())
        );
    }

    #[test]
    fn envelope_without_data_is_null() {
        let data = HttpUtils::unwrap_envelope("{}", "global", "questionData");
        assert_eq!(data.ok(), Some(Value::Null));
    }

    #[test]
    fn graphql_errors_become_upstream_failure() {
        let result = HttpUtils::unwrap_envelope(
            r#"{"data":null,"errors":[{"message":"That user does not exist."},{"message":"again"}]}"#,
            "global",
            "getUserProfile",
        );
        assert_eq!(upstream_detail(result), "That user does not exist.; again");
    }

    #[test]
    fn empty_errors_array_is_not_a_failure() {
        let result = HttpUtils::unwrap_envelope(r#"{"data":{"a":1},"errors":[]}"#, "cn", "x");
        assert!(result.is_ok());
    }

    #[test]
    fn html_body_is_upstream_failure() {
        let result = HttpUtils::unwrap_envelope("<html>blocked</html>", "cn", "userStatus");
        assert!(upstream_detail(result).starts_with("invalid response body"));
    }

    #[test]
    fn cookie_header_includes_present_tokens_only() {
        let full = HttpGraphQlClient::new(
            SiteVariant::China,
            Credential::new(Some("s".to_string()), Some("c".to_string())),
        );
        assert_eq!(
            full.ok().and_then(|c| c.cookie_header()),
            Some("LEETCODE_SESSION=s; csrftoken=c".to_string())
        );

        let anonymous = HttpGraphQlClient::new(SiteVariant::Global, Credential::anonymous());
        assert_eq!(anonymous.ok().and_then(|c| c.cookie_header()), None);
    }
}
