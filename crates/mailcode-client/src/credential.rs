//! The credential returned by a successful authorization
//!
//! A plain value record: identity, bearer token, issuance time, and granted
//! scopes. Only [`Client::authorize`](crate::Client::authorize) produces
//! one, by deserializing the service response, and it is never mutated
//! afterwards: a caller holding a `Credential` holds a fully-formed
//! snapshot. Expiry and revocation are server-side state and not tracked
//! here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated principal: identity, bearer token, scopes, issuance time.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Opaque identifier for the user.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Address the one-time code was delivered to.
    pub email: String,
    /// Opaque bearer token, presented verbatim in `Authorization` headers.
    pub token: String,
    /// Issuance / last-login timestamp. Wire name is `lastLogon`.
    #[serde(rename = "lastLogon")]
    pub last_login: DateTime<Utc>,
    /// Granted permission scopes. Order is preserved as received but carries
    /// no meaning; treat them as a set of capabilities.
    pub scopes: Vec<String>,
}

// The token is a live bearer secret; keep it out of Debug output and logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("token", &"[REDACTED]")
            .field("last_login", &self.last_login)
            .field("scopes", &self.scopes)
            .finish()
    }
}
