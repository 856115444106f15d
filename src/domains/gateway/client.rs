//! The HTTP executor and response normalizer.
//!
//! [`GatewayClient`] issues exactly one upstream request per invocation - no
//! retries, no backoff, no timeout override beyond the transport default -
//! and never lets a failure escape: every error on the way to or from the
//! upstream is folded into the uniform failure envelope.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::core::config::UpstreamConfig;

use super::endpoint::EndpointSpec;
use super::error::GatewayError;
use super::request::stage;
use super::result::InvocationResult;

/// Client bound to one fixed upstream base URL.
///
/// Cheap to share behind an `Arc`; holds no per-call state.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    /// Create a client for the configured upstream.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be
    /// constructed. This is the only gateway error surfaced at startup;
    /// everything later is folded into envelopes.
    pub fn new(upstream: &UpstreamConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&upstream.base_url)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one invocation against the endpoint.
    ///
    /// Always returns an envelope: a response envelope when the upstream
    /// answered (whatever the status code), a failure envelope when the
    /// request could not be built or did not complete.
    #[instrument(skip_all, fields(method = %spec.method, path = %spec.path_template))]
    pub async fn invoke(&self, spec: &EndpointSpec, params: &Map<String, Value>) -> InvocationResult {
        match self.dispatch(spec, params).await {
            Ok(result) => result,
            Err(error) => {
                warn!("invocation failed: {error}");
                InvocationResult::failure(error.to_string())
            }
        }
    }

    async fn dispatch(
        &self,
        spec: &EndpointSpec,
        params: &Map<String, Value>,
    ) -> Result<InvocationResult, GatewayError> {
        let staged = stage(spec, params);

        // The base URL is joined textually so a base with a path prefix
        // keeps that prefix in front of every endpoint template.
        let url = Url::parse(&format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            staged.path
        ))?;

        let mut request = self
            .http
            .request(spec.method.into(), url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if !staged.query.is_empty() {
            request = request.query(&staged.query);
        }

        // GET and DELETE never carry a body; staged fields are dropped here.
        if spec.method.allows_body() {
            if let Some(body) = &staged.body {
                request = request.json(body);
            }
        } else if staged.body.is_some() {
            debug!("dropping staged body for {} request", spec.method);
        }

        let response = request.send().await?;

        let status = response.status();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        let content_type = headers.get("content-type").cloned().unwrap_or_default();

        let text = response.text().await?;
        let rendered = if content_type.contains("json") {
            // Declared JSON that fails to parse is returned verbatim; the
            // parse failure is swallowed, not surfaced.
            match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => serde_json::to_string_pretty(&parsed)?,
                Err(_) => text,
            }
        } else {
            text
        };

        Ok(InvocationResult::response(
            rendered,
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            headers,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gateway::endpoint::{HttpMethod, ParameterDescriptor};
    use crate::domains::schema::SchemaNode;
    use axum::extract::{Path, RawQuery};
    use axum::http::{StatusCode, header};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> GatewayClient {
        GatewayClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    fn args(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_json_echo_round_trip_pretty_prints() {
        async fn echo(Json(body): Json<Value>) -> Json<Value> {
            Json(body)
        }
        let base = serve(Router::new().route("/user", post(echo))).await;
        let client = client_for(&base);

        let spec = EndpointSpec::new(HttpMethod::Post, "/user").body_fields(["email"]);
        let result = client
            .invoke(
                &spec,
                &args(json!({ "email": "a@b.com", "requestBodyData": { "extra": 1 } })),
            )
            .await;

        assert!(!result.is_error());
        assert_eq!(result.status(), Some(200));
        let round_tripped: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(round_tripped, json!({ "email": "a@b.com", "extra": 1 }));
        // Normalization pretty-prints parsed JSON bodies.
        assert_eq!(
            result.text(),
            serde_json::to_string_pretty(&round_tripped).unwrap()
        );
    }

    #[tokio::test]
    async fn test_path_substitution_reaches_upstream() {
        async fn widget(Path(id): Path<String>, RawQuery(query): RawQuery) -> Json<Value> {
            Json(json!({ "id": id, "query": query }))
        }
        let base = serve(Router::new().route("/widget/{id}", get(widget))).await;
        let client = client_for(&base);

        let spec = EndpointSpec::new(HttpMethod::Get, "/widget/{id}")
            .param(ParameterDescriptor::path("id", SchemaNode::string()));
        let result = client.invoke(&spec, &args(json!({ "id": "42" }))).await;

        assert_eq!(result.status(), Some(200));
        let seen: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(seen["id"], json!("42"));
        assert_eq!(seen["query"], json!(null));
    }

    #[tokio::test]
    async fn test_get_never_carries_a_body() {
        async fn measure(body: String) -> String {
            format!("len={}", body.len())
        }
        let base = serve(Router::new().route("/listing", get(measure))).await;
        let client = client_for(&base);

        // Fields staged for the body of a GET are dropped at build time.
        let spec = EndpointSpec::new(HttpMethod::Get, "/listing").body_fields(["email"]);
        let result = client
            .invoke(&spec, &args(json!({ "email": "a@b.com" })))
            .await;

        assert_eq!(result.status(), Some(200));
        assert_eq!(result.text(), "len=0");
    }

    #[tokio::test]
    async fn test_status_500_is_a_success_envelope() {
        async fn boom() -> (StatusCode, Json<Value>) {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" })))
        }
        let base = serve(Router::new().route("/order", get(boom))).await;
        let client = client_for(&base);

        let spec = EndpointSpec::new(HttpMethod::Get, "/order");
        let result = client.invoke(&spec, &Map::new()).await;

        assert!(!result.is_error());
        assert_eq!(result.status(), Some(500));
        let body: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(body, json!({ "error": "boom" }));
    }

    #[tokio::test]
    async fn test_declared_json_that_is_not_json_falls_back_to_text() {
        async fn liar() -> ([(header::HeaderName, &'static str); 1], &'static str) {
            ([(header::CONTENT_TYPE, "application/json")], "not json")
        }
        let base = serve(Router::new().route("/status", get(liar))).await;
        let client = client_for(&base);

        let spec = EndpointSpec::new(HttpMethod::Get, "/status");
        let result = client.invoke(&spec, &Map::new()).await;

        assert!(!result.is_error());
        assert_eq!(result.text(), "not json");
    }

    #[tokio::test]
    async fn test_get_is_idempotent_against_deterministic_upstream() {
        async fn fixed() -> Json<Value> {
            Json(json!({ "catalog": ["a", "b"] }))
        }
        let base = serve(Router::new().route("/listing", get(fixed))).await;
        let client = client_for(&base);

        let spec = EndpointSpec::new(HttpMethod::Get, "/listing");
        let first = client.invoke(&spec, &Map::new()).await;
        let second = client.invoke(&spec, &Map::new()).await;

        assert_eq!(first.status(), second.status());
        assert_eq!(first.content, second.content);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_failure_envelope() {
        // Nothing listens on port 9; the connection is refused.
        let client = client_for("http://127.0.0.1:9");
        let spec = EndpointSpec::new(HttpMethod::Get, "/listing");
        let result = client.invoke(&spec, &Map::new()).await;

        assert!(result.is_error());
        assert!(!result.text().is_empty());
        assert_eq!(result.status(), None);
    }

    #[test]
    fn test_invalid_base_url_is_a_startup_error() {
        let bad = GatewayClient::new(&UpstreamConfig {
            base_url: "not a url".to_string(),
        });
        assert!(bad.is_err());
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        async fn echo_ok() -> &'static str {
            "ok"
        }
        let base = serve(Router::new().route("/api/v2/listing", get(echo_ok))).await;
        let client = client_for(&format!("{base}/api/v2"));

        let spec = EndpointSpec::new(HttpMethod::Get, "/listing");
        let result = client.invoke(&spec, &Map::new()).await;
        assert_eq!(result.status(), Some(200));
        assert_eq!(result.text(), "ok");
    }
}
