//! Board state provider — the single owner of [`BoardState`].
//!
//! DESIGN
//! ======
//! The provider holds the only write path to board state. Consumers get
//! `watch::Receiver` handles via [`BoardProvider::subscribe`] and observe
//! every change; mutators are applied serially through the watch sender, so
//! there is no multi-writer contention to reason about.
//!
//! Each refresh is tagged with a monotonically increasing sequence number
//! and is applied only if it is still the most recently issued one. A slow
//! response for a previously viewed board can therefore never overwrite
//! state for the board the user has since switched to.
//!
//! ERROR HANDLING
//! ==============
//! Refresh failures keep the last-known-good data and set
//! [`BoardState::refresh_error`]; the error is also returned to the caller.
//! A `save_subtask` against an unknown story fails without touching state
//! and without waking subscribers.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::BoardError;
use crate::model::{Epic, Story, SubTask};
use crate::net::api::ApiClient;
use crate::state::board::{BoardState, RefreshSnapshot};

pub struct BoardProvider {
    api: ApiClient,
    tx: watch::Sender<BoardState>,
    refresh_seq: AtomicU64,
}

impl BoardProvider {
    /// Build a provider with empty default state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::HttpClientBuild`] if the HTTP client fails to
    /// construct.
    pub fn new(config: &ApiConfig) -> Result<Self, BoardError> {
        Ok(Self {
            api: ApiClient::new(config)?,
            tx: watch::Sender::new(BoardState::default()),
            refresh_seq: AtomicU64::new(0),
        })
    }

    /// Subscribe to state changes. Every applied refresh and mutator call is
    /// observable on the returned receiver.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.tx.borrow().clone()
    }

    // =========================================================================
    // REFRESH
    // =========================================================================

    /// Point the provider at a board and refresh from the backend: sprint
    /// first, then stories, then one atomic state replacement. Call this on
    /// every change of the identifying inputs, including the first.
    ///
    /// The epic selection survives the refresh. If a newer `set_board` call
    /// was issued while this one was in flight, the result is discarded.
    ///
    /// # Errors
    ///
    /// Returns the fetch error on transport failure, non-success status, or
    /// a malformed body. State keeps the last-known-good data and
    /// `refresh_error` is set.
    pub async fn set_board(&self, project_key: &str, board_id: u64) -> Result<(), BoardError> {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.fetch_board(project_key, board_id).await;
        let latest = self.refresh_seq.load(Ordering::SeqCst) == seq;

        match result {
            Ok(snapshot) => {
                if latest {
                    let stories = snapshot.stories.len();
                    let subtasks: usize =
                        snapshot.stories.iter().map(|s| s.fields.subtasks.len()).sum();
                    self.tx.send_modify(|state| state.apply_refresh(snapshot));
                    info!(%board_id, project_key, stories, subtasks, "board refreshed");
                } else {
                    warn!(%board_id, seq, "discarding stale refresh response");
                }
                Ok(())
            }
            Err(e) => {
                if latest {
                    let message = e.to_string();
                    self.tx.send_modify(|state| state.refresh_error = Some(message));
                    warn!(%board_id, error = %e, "board refresh failed; keeping last-good state");
                } else {
                    debug!(%board_id, seq, error = %e, "stale refresh failed; ignoring");
                }
                Err(e)
            }
        }
    }

    async fn fetch_board(
        &self,
        project_key: &str,
        board_id: u64,
    ) -> Result<RefreshSnapshot, BoardError> {
        // Sequential on purpose: sprint resolves before the stories fetch starts.
        let sprint = self.api.fetch_sprint(board_id).await?;
        let stories = self.api.fetch_stories(board_id).await?;
        Ok(RefreshSnapshot { project_key: project_key.to_owned(), board_id, sprint, stories })
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Set or clear the focused epic.
    pub fn select_epic(&self, epic: Option<Epic>) {
        debug!(selected = epic.is_some(), "epic selection changed");
        self.tx.send_modify(|state| state.select_epic(epic));
    }

    /// Replace the stories collection wholesale. The flattened subtask view
    /// is deliberately not recomputed.
    pub fn update_stories(&self, stories: Vec<Story>) {
        debug!(count = stories.len(), "stories replaced");
        self.tx.send_modify(|state| state.update_stories(stories));
    }

    /// Replace the flattened subtask view wholesale. Stories are untouched.
    pub fn update_subtasks(&self, subtasks: Vec<SubTask>) {
        debug!(count = subtasks.len(), "subtasks replaced");
        self.tx.send_modify(|state| state.update_subtasks(subtasks));
    }

    /// Append a subtask to its story and to the flattened view in one step.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StoryNotFound`] when no story matches
    /// `story_id`; state is unchanged and subscribers are not notified.
    pub fn save_subtask(&self, subtask: SubTask, story_id: u64) -> Result<(), BoardError> {
        let mut result = Ok(());
        self.tx.send_if_modified(|state| {
            result = state.save_subtask(subtask, story_id);
            result.is_ok()
        });
        if let Err(e) = &result {
            warn!(%story_id, error = %e, "subtask save rejected");
        }
        result
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
