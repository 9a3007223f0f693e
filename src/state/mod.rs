//! Board-scoped state and its pure mutation operations.

pub mod board;
