//! # sprintboard
//!
//! Board-scoped state container for a Scrum/Kanban UI.
//!
//! DESIGN
//! ======
//! One provider owns the state for the currently viewed board: the active
//! sprint, the stories with their nested subtasks, a flattened subtask view,
//! and the optional focused epic. The provider refreshes from the board
//! backend over REST whenever the board identity changes and fans state out
//! to any number of consumers through `watch` subscriptions. All writes go
//! through the provider, so consumers never race each other.

pub mod config;
pub mod error;
pub mod model;
pub mod net;
pub mod provider;
pub mod state;

pub use config::{ApiConfig, ApiTimeouts};
pub use error::BoardError;
pub use model::{Epic, Sprint, Story, StoryFields, SubTask};
pub use provider::BoardProvider;
pub use state::board::BoardState;
