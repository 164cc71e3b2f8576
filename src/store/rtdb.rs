//! Firebase Realtime Database [`Store`] backend over the REST API.
//!
//! Every path maps to `{database_url}/{path}.json`: `GET` reads (the literal
//! body `null` means absent), `PUT` upserts, `DELETE` removes. An optional
//! auth token is appended as the `auth` query parameter. Existence checks use
//! `shallow=true` so large subtrees are not transferred just to probe them.
//!
//! Failure classification happens here, where the transport error is visible:
//! a placeholder database URL (`YOUR_...`) is a configuration error, HTTP
//! 401/403 is a permission error, and anything at the socket level is a
//! connection error.

use std::time::Duration;

use async_trait::async_trait;
use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use url::Url;

use super::Store;
use crate::error::SlotboardError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

type HttpsConnector =
    hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>;
type HttpClient = Client<HttpsConnector, http_body_util::Full<bytes::Bytes>>;

fn build_http_client() -> HttpClient {
    // When multiple rustls crypto providers are compiled in, rustls cannot
    // auto-detect which one to use. Explicitly install `ring` as the default.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    Client::builder(TokioExecutor::new())
        .pool_idle_timeout(Duration::from_secs(30))
        .build(https)
}

#[derive(Debug)]
pub struct RtdbStore {
    client: HttpClient,
    base: Url,
    auth_token: Option<String>,
}

impl RtdbStore {
    pub fn new(database_url: &str, auth_token: Option<&str>) -> Result<Self, SlotboardError> {
        // A freshly copied project config still carries YOUR_PROJECT_ID-style
        // placeholders; catch that before the first request ever goes out.
        if database_url.contains("YOUR_") {
            return Err(SlotboardError::Configuration {
                hint: format!("The database URL '{database_url}' still contains a placeholder."),
            });
        }

        let base = Url::parse(database_url).map_err(|e| SlotboardError::InvalidUrl {
            url: database_url.to_string(),
            source: Box::new(e),
        })?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(SlotboardError::InvalidUrl {
                url: database_url.to_string(),
                source: format!("unsupported scheme '{}'", base.scheme()).into(),
            });
        }

        Ok(Self {
            client: build_http_client(),
            base,
            auth_token: auth_token.map(str::to_string),
        })
    }

    /// REST endpoint for a store path, e.g. `{base}/ads_config/global.json`.
    fn endpoint(&self, path: &str, shallow: bool) -> Result<hyper::Uri, SlotboardError> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                SlotboardError::InvalidUrl {
                    url: self.base.to_string(),
                    source: "database URL cannot be a base".into(),
                }
            })?;
            segments.pop_if_empty();
            let mut parts = path.split('/').peekable();
            while let Some(segment) = parts.next() {
                if parts.peek().is_some() {
                    segments.push(segment);
                } else {
                    segments.push(&format!("{segment}.json"));
                }
            }
        }
        if shallow {
            url.query_pairs_mut().append_pair("shallow", "true");
        }
        if let Some(ref token) = self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }

        url.as_str()
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| SlotboardError::InvalidUrl {
                url: url.to_string(),
                source: Box::new(e),
            })
    }

    async fn request(
        &self,
        method: hyper::Method,
        path: &str,
        shallow: bool,
        body: bytes::Bytes,
    ) -> Result<bytes::Bytes, SlotboardError> {
        let uri = self.endpoint(path, shallow)?;

        let req = hyper::Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(http_body_util::Full::new(body))
            .map_err(|e| SlotboardError::Store {
                backend: "rtdb",
                source: Box::new(e),
            })?;

        let response = tokio::time::timeout(REQUEST_TIMEOUT, self.client.request(req))
            .await
            .map_err(|_| SlotboardError::Connection {
                source: format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()).into(),
            })?
            .map_err(|e| SlotboardError::Connection {
                source: Box::new(e),
            })?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| SlotboardError::Connection {
                source: Box::new(e),
            })?
            .to_bytes();

        if status == http::StatusCode::UNAUTHORIZED || status == http::StatusCode::FORBIDDEN {
            return Err(SlotboardError::PermissionDenied {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SlotboardError::Store {
                backend: "rtdb",
                source: format!(
                    "HTTP {status}: {}",
                    String::from_utf8_lossy(&bytes).trim()
                )
                .into(),
            });
        }

        Ok(bytes)
    }
}

#[async_trait]
impl Store for RtdbStore {
    fn name(&self) -> &'static str {
        "rtdb"
    }

    async fn read(&self, path: &str) -> Result<Option<Value>, SlotboardError> {
        let body = self
            .request(hyper::Method::GET, path, false, bytes::Bytes::new())
            .await?;

        let value: Value =
            serde_json::from_slice(&body).map_err(|e| SlotboardError::Decode {
                path: path.to_string(),
                source: Box::new(e),
            })?;

        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }

    async fn write(&self, path: &str, value: &Value) -> Result<(), SlotboardError> {
        let body = serde_json::to_vec(value).map_err(|e| SlotboardError::Store {
            backend: "rtdb",
            source: Box::new(e),
        })?;
        self.request(hyper::Method::PUT, path, false, bytes::Bytes::from(body))
            .await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), SlotboardError> {
        self.request(hyper::Method::DELETE, path, false, bytes::Bytes::new())
            .await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool, SlotboardError> {
        let body = self
            .request(hyper::Method::GET, path, true, bytes::Bytes::new())
            .await?;
        Ok(body.as_ref() != b"null")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_is_a_configuration_error() {
        let err = RtdbStore::new(
            "https://YOUR_PROJECT_ID-default-rtdb.firebaseio.com/",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SlotboardError::Configuration { .. }));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = RtdbStore::new("ftp://example.com/", None).unwrap_err();
        assert!(matches!(err, SlotboardError::InvalidUrl { .. }));
    }

    #[test]
    fn endpoint_appends_json_suffix_to_last_segment() {
        let store = RtdbStore::new("https://demo-default-rtdb.firebaseio.com", None).unwrap();
        let uri = store.endpoint("ads_config/global", false).unwrap();
        assert_eq!(
            uri.to_string(),
            "https://demo-default-rtdb.firebaseio.com/ads_config/global.json"
        );
    }

    #[test]
    fn endpoint_carries_shallow_and_auth_params() {
        let store =
            RtdbStore::new("https://demo-default-rtdb.firebaseio.com/", Some("s3cret")).unwrap();
        let uri = store.endpoint("ads_config/banner_home", true).unwrap();
        let rendered = uri.to_string();
        assert!(rendered.contains("ads_config/banner_home.json?"));
        assert!(rendered.contains("shallow=true"));
        assert!(rendered.contains("auth=s3cret"));
    }
}
