//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give the pad board precise colors and timing-driven lighting
//! - Send only changed cells to the terminal each frame

pub mod fb;
pub mod recall_view;
pub mod renderer;

pub use tui_playroom_core as core;
pub use tui_playroom_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use recall_view::{AnchorY, HudView, RecallView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
