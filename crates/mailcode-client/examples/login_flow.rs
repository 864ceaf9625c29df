//! End-to-end login flow against a live service.
//!
//! Requests a one-time code for the given address, waits for you to paste
//! the code from your inbox, exchanges it for a credential, then makes one
//! authenticated call to prove the bearer token works.
//!
//! # Running
//!
//! ```bash
//! cargo run --example login_flow -- https://api.example.com you@example.com
//! ```

use std::io::Write;

use anyhow::{Context, Result, bail};

use mailcode_client::{Client, Method};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .context("usage: login_flow <base-url> <email>")?;
    let email = args
        .next()
        .context("usage: login_flow <base-url> <email>")?;

    let client = Client::new(base_url);

    println!("Requesting a one-time code for {email}...");
    client.authenticate("login-flow-example", &email).await?;
    println!("Code sent. Check your inbox.\n");

    print!("Enter the code: ");
    std::io::stdout().flush()?;
    let mut code = String::new();
    std::io::stdin().read_line(&mut code)?;
    let code = code.trim();
    if code.is_empty() {
        bail!("no code entered");
    }

    let credential = client.authorize(&email, code).await?;
    println!("\nAuthorized as {} ({})", credential.user_id, credential.email);
    println!("Scopes:     {}", credential.scopes.join(", "));
    println!("Last login: {}", credential.last_login);

    // Any endpoint works here; a profile fetch is a harmless smoke test.
    println!("\nMaking an authenticated call...");
    let body = client
        .call(Method::GET, "/profile/", Vec::new(), Some(&credential))
        .await?;
    println!("GET /profile/ answered with {} bytes", body.len());

    Ok(())
}
