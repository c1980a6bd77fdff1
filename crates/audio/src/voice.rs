//! Speech delivery backends
//!
//! There is no platform speech engine here; the host picks the delivery.
//! [`StderrVoice`] prints phrases as console lines for headless runs, and
//! [`NullVoice`] swallows them for hosts that put phrases on screen.

use std::io::{self, Write};

/// Delivery settings for spoken phrases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceTuning {
    /// Speaking rate, 1.0 is normal
    pub rate: f32,
    /// Voice pitch, 1.0 is normal
    pub pitch: f32,
    /// Loudness, 0.0 to 1.0
    pub volume: f32,
}

impl Default for VoiceTuning {
    /// A little slower, brighter, and softer than neutral; tuned for
    /// young players.
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.2,
            volume: 0.8,
        }
    }
}

/// One way of delivering a phrase.
pub trait Voice {
    fn say(&mut self, text: &str, tuning: VoiceTuning);
}

/// Discards every phrase. For hosts that display them instead.
#[derive(Debug, Default)]
pub struct NullVoice;

impl Voice for NullVoice {
    fn say(&mut self, _text: &str, _tuning: VoiceTuning) {}
}

/// Prints phrases to stderr, one per line.
#[derive(Debug, Default)]
pub struct StderrVoice;

impl Voice for StderrVoice {
    fn say(&mut self, text: &str, _tuning: VoiceTuning) {
        let mut err = io::stderr();
        let _ = writeln!(err, "{}", text);
    }
}
