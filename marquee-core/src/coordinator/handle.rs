//! Handle for communicating with the search coordinator actor.

use tokio::sync::{mpsc, oneshot};

use super::commands::SearchCommand;
use super::state::SearchSnapshot;
use crate::errors::SearchError;

/// Handle for communicating with the search coordinator actor.
///
/// Provides an ergonomic async API for the UI layer. It can be cloned and
/// shared across tasks safely.
#[derive(Clone)]
pub struct SearchEngineHandle {
    command_tx: mpsc::Sender<SearchCommand>,
    raw_tx: mpsc::Sender<String>,
}

impl SearchEngineHandle {
    /// Creates a new handle over the command and raw-input channels.
    pub(super) fn new(command_tx: mpsc::Sender<SearchCommand>, raw_tx: mpsc::Sender<String>) -> Self {
        Self { command_tx, raw_tx }
    }

    /// Records a new raw input value.
    ///
    /// The value enters the debounce pipeline; the coordinator reacts only
    /// once the input has been quiet for the configured window, and only to
    /// the last value of a burst.
    ///
    /// # Errors
    /// - `SearchError::EngineShutdown` - Actor is no longer running
    pub async fn observe(&self, value: impl Into<String>) -> Result<(), SearchError> {
        self.raw_tx
            .send(value.into())
            .await
            .map_err(|_| SearchError::EngineShutdown)
    }

    /// Opens the detail view for a title and starts its detail fetch.
    ///
    /// The detail state switches to loading immediately; the fetched details
    /// become visible through [`current_state`](Self::current_state) once the
    /// request completes.
    ///
    /// # Errors
    /// - `SearchError::EngineShutdown` - Actor is no longer running
    pub async fn select_movie(&self, imdb_id: impl Into<String>) -> Result<(), SearchError> {
        self.command_tx
            .send(SearchCommand::SelectMovie {
                imdb_id: imdb_id.into(),
            })
            .await
            .map_err(|_| SearchError::EngineShutdown)
    }

    /// Dismisses the detail view.
    ///
    /// # Errors
    /// - `SearchError::EngineShutdown` - Actor is no longer running
    pub async fn close_detail(&self) -> Result<(), SearchError> {
        self.command_tx
            .send(SearchCommand::CloseDetail)
            .await
            .map_err(|_| SearchError::EngineShutdown)
    }

    /// Gets a snapshot of the current search and detail state.
    ///
    /// # Errors
    /// - `SearchError::EngineShutdown` - Actor is no longer running
    pub async fn current_state(&self) -> Result<SearchSnapshot, SearchError> {
        let (responder, rx) = oneshot::channel();
        self.command_tx
            .send(SearchCommand::GetState { responder })
            .await
            .map_err(|_| SearchError::EngineShutdown)?;

        rx.await.map_err(|_| SearchError::EngineShutdown)
    }

    /// Shuts down the coordinator actor gracefully.
    ///
    /// After this call, all subsequent operations return
    /// `SearchError::EngineShutdown`.
    ///
    /// # Errors
    /// - `SearchError::EngineShutdown` - Actor already stopped
    pub async fn shutdown(&self) -> Result<(), SearchError> {
        let (responder, rx) = oneshot::channel();
        self.command_tx
            .send(SearchCommand::Shutdown { responder })
            .await
            .map_err(|_| SearchError::EngineShutdown)?;

        rx.await.map_err(|_| SearchError::EngineShutdown)
    }

    /// Checks if the coordinator actor is still accepting commands.
    pub fn is_running(&self) -> bool {
        !self.command_tx.is_closed()
    }
}
