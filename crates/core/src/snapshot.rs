use crate::types::{Hue, RecallPhase};

/// Render-ready view of the recall game, refreshed once per frame.
///
/// Counts stand in for the sequences themselves so the view cannot
/// leak the answer while the player is still entering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecallSnapshot {
    pub phase: RecallPhase,
    pub sequence_len: u8,
    pub entered_len: u8,
    /// Pad currently lit during playback, if any
    pub lit: Option<Hue>,
    pub score: u32,
    pub level: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub streak: u32,
    /// Length the next round will use
    pub next_length: u8,
}

impl RecallSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == RecallPhase::AwaitingInput
    }
}

impl Default for RecallSnapshot {
    fn default() -> Self {
        Self {
            phase: RecallPhase::Idle,
            sequence_len: 0,
            entered_len: 0,
            lit: None,
            score: 0,
            level: 1,
            rounds_won: 0,
            rounds_lost: 0,
            streak: 0,
            next_length: 0,
        }
    }
}
