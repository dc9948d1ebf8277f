//! Error types for catalog operations.
//!
//! Every failure falls into one of three kinds: the remote could not be
//! reached or answered unexpectedly (transport), the remote does not know
//! the requested id (not found), or the remote rejected submitted data
//! (validation).

use thiserror::Error;

use crate::catalog::game::GameId;

/// Errors surfaced by the remote catalog client and propagated by the store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network failure, unreadable response, or undecodable body.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response without a more specific meaning.
    #[error("Catalog API returned {status} for '{url}': {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// The remote reports that the id does not exist.
    #[error("Game {id} not found")]
    NotFound { id: GameId },

    /// The remote rejected the submitted record.
    #[error("Catalog API rejected the game: {message}")]
    Validation { message: String },
}

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Validation,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Client(_)
            | CatalogError::Transport { .. }
            | CatalogError::Status { .. } => ErrorKind::Transport,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Validation { .. } => ErrorKind::Validation,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Short message for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Client(_) | CatalogError::Transport { .. } => {
                "Catalog service is unreachable".to_string()
            }
            CatalogError::Status { status, .. } => {
                format!("Catalog service error (HTTP {})", status)
            }
            CatalogError::NotFound { id } => format!("Game {} no longer exists", id),
            CatalogError::Validation { message } => format!("Rejected: {}", message),
        }
    }
}
