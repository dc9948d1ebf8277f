//! Game catalog: data model, remote client, shared store and form rules.
//!
//! The remote HTTP API is the system of record. [`CatalogStore`] caches its
//! contents and applies local changes only after the remote has acknowledged
//! them; [`validate`] checks drafts before they are submitted.

mod client;
mod error;
mod game;
mod store;
pub mod validate;

pub use client::{CatalogApi, HttpCatalogClient};
pub use error::{CatalogError, ErrorKind};
pub use game::{Game, GameDraft, GameId};
pub use store::{CatalogStore, CatalogView};
pub use validate::{validate, Field, FieldErrors};
