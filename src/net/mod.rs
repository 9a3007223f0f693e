//! Network layer for talking to the board backend.

pub mod api;
