//! TUI Playroom (workspace facade crate).
//!
//! This package keeps the `tui_playroom::{core,audio,term,input,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_playroom_audio as audio;
pub use tui_playroom_core as core;
pub use tui_playroom_input as input;
pub use tui_playroom_term as term;
pub use tui_playroom_types as types;
