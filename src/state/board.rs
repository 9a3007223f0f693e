//! Board state aggregate and its mutation operations.
//!
//! DESIGN
//! ======
//! All mutations are pure methods on `BoardState` so they can be exercised
//! without a provider or a network. The provider applies them serially and
//! notifies subscribers after each one.
//!
//! `all_subtasks` is a flattened snapshot of `stories[*].fields.subtasks`
//! taken at refresh time. The wholesale setters (`update_stories`,
//! `update_subtasks`) each replace only their own collection; `save_subtask`
//! is the one write that keeps both in step.

use crate::error::BoardError;
use crate::model::{Epic, Sprint, Story, SubTask};

// =============================================================================
// STATE
// =============================================================================

/// Everything a board view needs: identity, fetched data, local selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub project_key: String,
    pub board_id: u64,
    /// `None` until the first successful refresh.
    pub sprint: Option<Sprint>,
    /// Stories exactly as ordered by the backend.
    pub stories: Vec<Story>,
    /// Flattened subtasks: story order, then per-story order.
    pub all_subtasks: Vec<SubTask>,
    /// Survives refreshes until explicitly changed.
    pub selected_epic: Option<Epic>,
    /// Set when the latest refresh failed; the data above stays
    /// last-known-good.
    pub refresh_error: Option<String>,
}

/// Data produced by one successful refresh, applied atomically.
#[derive(Debug, Clone)]
pub struct RefreshSnapshot {
    pub project_key: String,
    pub board_id: u64,
    pub sprint: Sprint,
    pub stories: Vec<Story>,
}

/// Flatten subtasks across stories, preserving story order then per-story
/// subtask order.
#[must_use]
pub fn flatten_subtasks(stories: &[Story]) -> Vec<SubTask> {
    stories
        .iter()
        .flat_map(|story| story.fields.subtasks.iter().cloned())
        .collect()
}

// =============================================================================
// MUTATIONS
// =============================================================================

impl BoardState {
    /// Replace identity and fetched data wholesale. The epic selection
    /// survives; a previous refresh failure is cleared.
    pub fn apply_refresh(&mut self, snapshot: RefreshSnapshot) {
        self.all_subtasks = flatten_subtasks(&snapshot.stories);
        self.project_key = snapshot.project_key;
        self.board_id = snapshot.board_id;
        self.sprint = Some(snapshot.sprint);
        self.stories = snapshot.stories;
        self.refresh_error = None;
    }

    /// Set or clear the focused epic. Any value is accepted.
    pub fn select_epic(&mut self, epic: Option<Epic>) {
        self.selected_epic = epic;
    }

    /// Wholesale story replacement. `all_subtasks` is left as-is.
    pub fn update_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
    }

    /// Wholesale replacement of the flattened view. `stories` is left as-is.
    pub fn update_subtasks(&mut self, subtasks: Vec<SubTask>) {
        self.all_subtasks = subtasks;
    }

    /// Append `subtask` to the owning story's list and to the flattened view.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StoryNotFound`] when no story's id matches the
    /// string form of `story_id`. State is untouched in that case.
    pub fn save_subtask(&mut self, subtask: SubTask, story_id: u64) -> Result<(), BoardError> {
        let id = story_id.to_string();
        let Some(story) = self.stories.iter_mut().find(|story| story.id == id) else {
            return Err(BoardError::StoryNotFound { story_id });
        };
        story.fields.subtasks.push(subtask.clone());
        self.all_subtasks.push(subtask);
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
