//! Network access: the fixture fetch.

pub mod api;
