//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use gamedeck::catalog::{CatalogStore, GameDraft, HttpCatalogClient};
use gamedeck::config::ApiConfig;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL where nothing is listening.
pub fn unreachable_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn client_for(base_url: &str) -> HttpCatalogClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(5),
    };
    HttpCatalogClient::new(&config).expect("Failed to build client")
}

pub fn store_for(base_url: &str) -> CatalogStore<HttpCatalogClient> {
    CatalogStore::new(client_for(base_url))
}

/// The record used throughout the examples: a board game with id 1.
pub fn chess_json() -> Value {
    json!({
        "id": 1,
        "name": "Chess",
        "genre": "Board",
        "price": "10",
        "releaseDate": "2020-01-01",
        "imageUri": "http://x/y.png"
    })
}

pub fn zelda_json() -> Value {
    json!({
        "id": 2,
        "name": "The Legend of Zelda",
        "genre": "Adventure",
        "price": 59.99,
        "releaseDate": "1986-02-21T00:00:00",
        "imageUri": "https://img.example.com/zelda.png",
        "publisher": "Nintendo"
    })
}

pub fn draft(name: &str) -> GameDraft {
    GameDraft {
        name: name.to_string(),
        genre: "Puzzle".to_string(),
        price: "19.99".to_string(),
        release_date: "2007-10-10".to_string(),
        image_uri: "https://img.example.com/game.png".to_string(),
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
