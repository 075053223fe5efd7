//! Shared helpers for the fixture-backed API tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use fullslate::FullSlate;
use httpmock::MockServer;

pub const KEY: &str = "test_key";
pub const TOKEN: &str = "test_token";

/// A client pointed at the fixture server, public resources only.
pub fn public_client(server: &MockServer) -> FullSlate {
    FullSlate::builder(KEY)
        .base_url(server.url("/api"))
        .build()
        .expect("client should build")
}

/// A client pointed at the fixture server with an API token configured.
pub fn token_client(server: &MockServer) -> FullSlate {
    FullSlate::builder(KEY)
        .token(TOKEN)
        .base_url(server.url("/api"))
        .build()
        .expect("client should build")
}
