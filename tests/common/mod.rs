#![allow(dead_code)]

use mockito::ServerGuard;
use optimizely::{Client, ClientConfig};

pub const API_KEY: &str = "test-key";

/// Client pointed at the mock server, authenticating with a legacy token.
pub fn client(server: &ServerGuard) -> Client {
    ClientConfig::from_api_key(API_KEY)
        .base_url(server.url())
        .to_client()
        .unwrap()
}
