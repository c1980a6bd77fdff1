//! Streak tracking - consecutive wins and the every-third celebration
//!
//! Shared by every exercise that rewards momentum. Three consecutive wins
//! fire a celebration and the count starts over from zero, so a fourth win
//! begins a fresh streak rather than firing again. A miss clears the count.

use crate::types::CELEBRATION_STREAK;

/// Counts consecutive wins and decides when to celebrate.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    current: u32,
    celebrations: u32,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win. Returns `true` when this win completes a streak
    /// and a celebration should fire.
    pub fn record_win(&mut self) -> bool {
        self.current += 1;
        if self.current >= CELEBRATION_STREAK {
            self.current = 0;
            self.celebrations += 1;
            return true;
        }
        false
    }

    /// Record a miss, clearing the running count.
    pub fn record_miss(&mut self) {
        self.current = 0;
    }

    /// Clear everything, including the celebration total.
    pub fn reset(&mut self) {
        self.current = 0;
        self.celebrations = 0;
    }

    /// Wins since the last miss or celebration.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Celebrations fired so far this session.
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }
}
