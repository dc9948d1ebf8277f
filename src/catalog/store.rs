//! Shared in-memory catalog kept in step with the remote API.
//!
//! The store is a cache: local state changes strictly follow remote
//! acknowledgment and never precede it. The list lock is only held for the
//! local update, never across a remote call.
//!
//! Mutations for the same id are not serialized. If two of them race, the
//! last successful response to apply wins until the next refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::client::CatalogApi;
use crate::catalog::error::CatalogError;
use crate::catalog::game::{Game, GameDraft, GameId};

/// Read-only handle onto the store's list.
///
/// Cheap to clone. Readable at any time; empty until the first successful
/// sync.
#[derive(Clone, Default)]
pub struct CatalogView {
    games: Arc<RwLock<Vec<Game>>>,
}

impl CatalogView {
    /// Snapshot of the current list, in fetch/append order.
    pub fn games(&self) -> Vec<Game> {
        self.games.read().clone()
    }

    pub fn get(&self, id: GameId) -> Option<Game> {
        self.games.read().iter().find(|g| g.id == id).cloned()
    }

    /// Games whose name contains `query`, ignoring case. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<Game> {
        self.games
            .read()
            .iter()
            .filter(|g| g.name_matches(query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

/// Owner of the catalog list and the only writer to it.
pub struct CatalogStore<C> {
    client: Arc<C>,
    view: CatalogView,
    initialized: Arc<AtomicBool>,
}

impl<C> Clone for CatalogStore<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            view: self.view.clone(),
            initialized: Arc::clone(&self.initialized),
        }
    }
}

impl<C: CatalogApi> CatalogStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            view: CatalogView::default(),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read-only handle for presentation code.
    pub fn view(&self) -> CatalogView {
        self.view.clone()
    }

    /// Current list snapshot.
    pub fn games(&self) -> Vec<Game> {
        self.view.games()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Warm up the list on first activation.
    ///
    /// Does nothing once a fetch has succeeded. Failures are logged and the
    /// list is left as it was. Returns whether the list is populated from
    /// the remote.
    pub async fn initialize(&self) -> bool {
        if self.initialized.load(Ordering::SeqCst) {
            return true;
        }
        self.refresh().await
    }

    /// Re-fetch the whole list. Same failure policy as [`initialize`](Self::initialize);
    /// returns `false` when the fetch failed and the old list was kept.
    pub async fn refresh(&self) -> bool {
        let synced = self.sync().await;
        if synced {
            self.initialized.store(true, Ordering::SeqCst);
        }
        synced
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn sync(&self) -> bool {
        match self.client.fetch_all().await {
            Ok(games) => {
                tracing::debug!(count = games.len(), "Catalog synced");
                *self.view.games.write() = games;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch games");
                false
            }
        }
    }

    /// Fetch one record straight from the remote. The list is not touched.
    pub async fn fetch(&self, id: GameId) -> Result<Game, CatalogError> {
        self.client.fetch_one(id).await
    }

    /// Create a record remotely, then append what the remote returned.
    pub async fn add(&self, draft: GameDraft) -> Result<Game, CatalogError> {
        let created = self.client.create(&draft).await.inspect_err(|err| {
            tracing::warn!(error = %err, "Failed to add game");
        })?;

        self.view.games.write().push(created.clone());
        tracing::info!(id = created.id, name = %created.name, "Game added");
        Ok(created)
    }

    /// Update a record remotely, then merge the draft over the local copy.
    pub async fn modify(&self, id: GameId, draft: GameDraft) -> Result<(), CatalogError> {
        self.client.update(id, &draft).await.inspect_err(|err| {
            tracing::warn!(id, error = %err, "Failed to update game");
        })?;

        let mut games = self.view.games.write();
        match games.iter_mut().find(|g| g.id == id) {
            Some(game) => {
                game.apply(&draft);
                tracing::info!(id, "Game updated");
            }
            None => {
                tracing::debug!(id, "Updated game is not in the local list");
            }
        }
        Ok(())
    }

    /// Delete a record remotely, then drop it from the list.
    pub async fn remove(&self, id: GameId) -> Result<(), CatalogError> {
        self.client.delete(id).await.inspect_err(|err| {
            tracing::warn!(id, error = %err, "Failed to delete game");
        })?;

        self.view.games.write().retain(|g| g.id != id);
        tracing::info!(id, "Game deleted");
        Ok(())
    }
}
