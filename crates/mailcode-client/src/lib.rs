//! Client library for services protected by email one-time-code auth
//!
//! Covers the whole login flow plus generic authenticated calls. The
//! service delivers a short-lived code out of band (email) and exchanges
//! it for a bearer credential; everything afterwards is ordinary HTTP with
//! an `Authorization` header.
//!
//! Credential flow:
//! 1. [`Client::authenticate`] asks the service to send a one-time code to
//!    an email address
//! 2. The user reads the code out of their inbox
//! 3. [`Client::authorize`] exchanges the code for a [`Credential`]
//! 4. The caller passes that credential into [`Client::call`] to act as an
//!    authenticated principal
//!
//! The client stores no login state: credentials are caller-owned and
//! passed explicitly per call, so a single client can serve any number of
//! principals concurrently. Token refresh, retry, and rate limiting are
//! deliberately out of scope; callers own that policy.

pub mod client;
pub mod constants;
pub mod credential;
pub mod error;

pub use client::Client;
pub use credential::Credential;
pub use error::{Error, Result};

// Callers name HTTP methods when making generic calls.
pub use reqwest::Method;
