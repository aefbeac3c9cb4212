//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MapHost` owns the `ViewportSession` and wires DOM events to it. The
//! remaining components are pure views over the `MapState` signal.

pub mod debug_overlay;
pub mod map_host;
pub mod planet_modal;
pub mod tooltip;
