//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::RecallAction`]. Pads are
//! single presses with no auto-repeat, so there is no key-hold handling
//! here; hosts act on each mapped event as it arrives.

pub mod map;

pub use tui_playroom_types as types;

pub use map::{handle_key_event, should_quit};
