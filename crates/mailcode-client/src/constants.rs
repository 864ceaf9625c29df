//! Wire-protocol constants
//!
//! The service owns the schema; these values only name it. Both halves of
//! the login flow talk to the same path: POST requests a one-time code,
//! PUT exchanges that code for a credential.

/// Auth endpoint path, joined onto the client's base URL.
pub const AUTH_PATH: &str = "/auth/";
