//! Audio module - pad tones and spoken encouragement
//!
//! Sound is strictly best-effort: a machine with no output device plays
//! nothing and the game carries on. Nothing in here returns an error to
//! the game loop once construction is done.
//!
//! - [`chime`]: short sine-wave tones, one note per pad
//! - [`voice`]: delivery backends for spoken phrases
//! - [`narrator`]: picks encouraging phrases and optionally speaks them
//! - [`config`]: host-level audio switches, with environment overrides

pub mod chime;
pub mod config;
pub mod narrator;
pub mod voice;

pub use chime::{Beeper, Chime, NullChime};
pub use config::AudioConfig;
pub use narrator::Narrator;
pub use voice::{NullVoice, StderrVoice, Voice, VoiceTuning};
