//! Client construction and the login flow operations
//!
//! Handles the two auth endpoint interactions plus the generic call both of
//! them ride on:
//! 1. `authenticate` asks the service to deliver a one-time code (POST)
//! 2. `authorize` exchanges that code for a [`Credential`] (PUT)
//!
//! Everything else a caller does goes through `call`, which joins the path
//! onto the base URL, attaches the bearer token when a credential is
//! supplied, and surfaces any non-200 answer as a structured error. The
//! client holds no login state: credentials are caller-owned and passed per
//! call, so one client serves any number of principals concurrently.

use reqwest::{Method, Url};
use serde::Serialize;
use tracing::debug;

use crate::constants::AUTH_PATH;
use crate::credential::Credential;
use crate::error::{Error, Result};

/// Request body for [`Client::authenticate`].
#[derive(Debug, Serialize)]
struct AuthenticateRequest<'a> {
    /// Display name of the requesting application, shown to the user in the
    /// code delivery message.
    #[serde(rename = "displayNameApp")]
    display_name_app: &'a str,
    email: &'a str,
}

/// Request body for [`Client::authorize`].
#[derive(Debug, Serialize)]
struct AuthorizeRequest<'a> {
    email: &'a str,
    code: &'a str,
}

/// Client for a service protected by email one-time-code auth.
///
/// Holds the base URL and a pooled [`reqwest::Client`]; both are fixed at
/// construction. Cloning is cheap (the connection pool is shared) and a
/// single instance is safe for concurrent use from multiple tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use mailcode_client::{Client, Method};
///
/// # async fn example() -> mailcode_client::Result<()> {
/// let client = Client::new("https://api.example.com");
///
/// // Ask the service to email a one-time code
/// client.authenticate("my-app", "a@b.com").await?;
///
/// // ... user reads the code out of their inbox ...
/// let credential = client.authorize("a@b.com", "123456").await?;
///
/// // Act as the authenticated principal
/// let body = client
///     .call(Method::GET, "/profile/", Vec::new(), Some(&credential))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the service at `base_url`.
    ///
    /// Always succeeds and performs no network activity; the base URL is
    /// validated lazily when the first call joins a path onto it.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a caller-supplied [`reqwest::Client`].
    ///
    /// This is the hook for transport policy the library deliberately does
    /// not own: request deadlines, proxies, TLS configuration. A call with
    /// no deadline configured runs until the transport gives up; to cancel
    /// an in-flight call, drop its future.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// The base URL all paths are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a one-time code for `email`.
    ///
    /// The service delivers the code out of band (email); nothing beyond
    /// success comes back to the caller. `app_name` is the display name
    /// shown in the delivery message. Neither input is validated here;
    /// the service is the source of truth and rejects bad values with a
    /// non-200 status, surfaced as [`Error::Rejected`].
    pub async fn authenticate(&self, app_name: &str, email: &str) -> Result<()> {
        let payload = serde_json::to_vec(&AuthenticateRequest {
            display_name_app: app_name,
            email,
        })?;
        debug!(app_name, email, "requesting one-time code");
        self.call(Method::POST, AUTH_PATH, payload, None).await?;
        Ok(())
    }

    /// Exchange a one-time code for a [`Credential`].
    ///
    /// An invalid or expired code comes back as [`Error::Rejected`]; a 200
    /// response whose body does not parse as a credential comes back as
    /// [`Error::Json`]. The two are distinct so callers can tell a retryable
    /// user mistake from a protocol problem.
    pub async fn authorize(&self, email: &str, code: &str) -> Result<Credential> {
        let payload = serde_json::to_vec(&AuthorizeRequest { email, code })?;
        debug!(email, "exchanging one-time code for credential");
        let data = self.call(Method::PUT, AUTH_PATH, payload, None).await?;
        let credential: Credential = serde_json::from_slice(&data)?;
        Ok(credential)
    }

    /// Make a raw call against the service.
    ///
    /// Joins `path` onto the base URL, sends `body` with the given method,
    /// and sets `Authorization: Bearer <token>` iff `credential` is
    /// supplied. On status 200 the raw response bytes come back verbatim;
    /// interpreting them is the caller's business. Any other status is a
    /// [`Error::Rejected`] carrying the status and the raw body as
    /// diagnostic text.
    ///
    /// One attempt per call: no retries, and no deadline beyond whatever
    /// the underlying transport applies (see [`Client::with_http_client`]).
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
        credential: Option<&Credential>,
    ) -> Result<Vec<u8>> {
        let endpoint = join_url(&self.base_url, path)?;
        debug!(%method, %endpoint, authenticated = credential.is_some(), "calling service");

        let mut request = self.http.request(method, endpoint).body(body);
        if let Some(credential) = credential {
            request = request.bearer_auth(&credential.token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let data = response.bytes().await?;

        if status != 200 {
            return Err(Error::Rejected {
                status,
                body: String::from_utf8_lossy(&data).into_owned(),
            });
        }
        Ok(data.to_vec())
    }
}

/// Join a base URL and a path without doubling or dropping separators.
///
/// Plain [`Url::join`] resolves an absolute path against the host root,
/// which would discard any path segments already present on the base.
/// This keeps them: exactly one slash between base and path, then a full
/// parse to validate the result.
fn join_url(base: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| Error::InvalidEndpoint {
        base: base.to_owned(),
        path: path.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_all_slash_combinations() {
        for base in ["https://api.example.com", "https://api.example.com/"] {
            for path in ["/auth/", "auth/"] {
                let url = join_url(base, path).unwrap();
                assert_eq!(
                    url.as_str(),
                    "https://api.example.com/auth/",
                    "base={base} path={path}"
                );
            }
        }
    }

    #[test]
    fn join_preserves_base_path_segments() {
        let url = join_url("https://api.example.com/v2", "/auth/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v2/auth/");
    }

    #[test]
    fn join_keeps_trailing_slash_on_path() {
        let url = join_url("https://api.example.com", "/animals/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/animals/");
    }

    #[test]
    fn join_rejects_unparseable_base() {
        let err = join_url("not a url", "/auth/").unwrap_err();
        match err {
            Error::InvalidEndpoint { base, path, .. } => {
                assert_eq!(base, "not a url");
                assert_eq!(path, "/auth/");
            }
            other => panic!("expected InvalidEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn construction_stores_base_url_verbatim() {
        let client = Client::new("https://x.test");
        assert_eq!(client.base_url(), "https://x.test");
    }

    #[test]
    fn authenticate_request_uses_wire_field_names() {
        let payload = serde_json::to_value(AuthenticateRequest {
            display_name_app: "app1",
            email: "a@b.com",
        })
        .unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"displayNameApp": "app1", "email": "a@b.com"})
        );
    }

    #[test]
    fn authorize_request_carries_email_and_code() {
        let payload = serde_json::to_value(AuthorizeRequest {
            email: "a@b.com",
            code: "123456",
        })
        .unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"email": "a@b.com", "code": "123456"})
        );
    }
}
