//! Core of the star map: everything between the fixture data and the display.
//!
//! This crate has no browser dependencies. It owns the viewport transform,
//! turns planet and marker records into visual descriptors, hit-tests the
//! pointer against them, and runs the pan gesture state machine. The host
//! (the Leptos client) forwards DOM events to a [`session::ViewportSession`]
//! and applies the returned [`session::Action`]s to its
//! [`render::DrawSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Interaction controller and its [`session::ViewportSession`] state |
//! | [`catalog`] | Planet / marker records and fixture decoding |
//! | [`viewport`] | Scene offset, clamping, and coordinate conversions |
//! | [`input`] | Pointer sources and the drag state machine |
//! | [`hit`] | Hit-testing the pointer against entity visuals |
//! | [`render`] | Visual descriptors and the draw-surface capability |
//! | [`hash`] | Stable string hash used for textures and authoring ids |
//! | [`authoring`] | Debug-mode helpers for placing new entities |
//! | [`consts`] | Shared constants (texture count, offsets, sizes) |

pub mod authoring;
pub mod catalog;
pub mod consts;
pub mod hash;
pub mod hit;
pub mod input;
pub mod render;
pub mod session;
pub mod viewport;

#[cfg(test)]
mod testing;
