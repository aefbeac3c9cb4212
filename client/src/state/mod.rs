//! Shared client-side state.

pub mod map;
