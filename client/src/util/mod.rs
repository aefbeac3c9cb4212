//! Browser glue helpers.

pub mod clipboard;
pub mod pointer;
