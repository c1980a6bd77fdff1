//! Audio switches owned by the composition root
//!
//! The running game toggles these through key bindings; the environment
//! can pre-set them, which keeps recordings and CI runs quiet.

use crate::voice::VoiceTuning;

/// What should make noise, and how the narrator should sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioConfig {
    pub voice_enabled: bool,
    pub tones_enabled: bool,
    pub tuning: VoiceTuning,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            voice_enabled: true,
            tones_enabled: true,
            tuning: VoiceTuning::default(),
        }
    }
}

impl AudioConfig {
    /// Create from environment variables.
    ///
    /// `PLAYROOM_MUTE=1` (or `true`) silences both voice and tones.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let muted = std::env::var("PLAYROOM_MUTE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        if muted {
            config.voice_enabled = false;
            config.tones_enabled = false;
        }
        config
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_audible() {
        let config = AudioConfig::default();

        assert!(config.voice_enabled);
        assert!(config.tones_enabled);
        assert_eq!(config.tuning, VoiceTuning::default());
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("yes"));
    }
}
