//! Recall game - watch a color sequence, then repeat it
//!
//! The engine is a fixed-timestep state machine. Playback is driven by
//! [`RecallGame::tick`]; pad presses are validated one at a time as they
//! arrive, so a round is lost the moment a press mismatches. Everything
//! the host needs to react to (lit pads, wins, losses) comes out of the
//! single-slot event channel via [`RecallGame::take_last_event`].

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::snapshot::RecallSnapshot;
use crate::streak::StreakTracker;
use crate::types::{
    Hue, RecallEvent, RecallPhase, BASE_SEQUENCE_LEN, MAX_SEQUENCE_LEN, PALETTE_SIZE,
    POINTS_PER_STEP, STEP_GAP_MS, STEP_LIT_MS,
};

/// Playback alternates a dark gap with a lit pad for every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepStage {
    Gap,
    Lit,
}

/// Complete state for one recall session.
#[derive(Debug, Clone)]
pub struct RecallGame {
    sequence: ArrayVec<Hue, MAX_SEQUENCE_LEN>,
    entered: ArrayVec<Hue, MAX_SEQUENCE_LEN>,
    phase: RecallPhase,
    /// Playback position within `sequence` while presenting
    cursor: usize,
    stage: StepStage,
    stage_timer_ms: u32,
    score: u32,
    rounds_won: u32,
    rounds_lost: u32,
    streak: StreakTracker,
    rng: SimpleRng,
    last_event: Option<RecallEvent>,
}

impl RecallGame {
    pub fn new(seed: u32) -> Self {
        Self {
            sequence: ArrayVec::new(),
            entered: ArrayVec::new(),
            phase: RecallPhase::Idle,
            cursor: 0,
            stage: StepStage::Gap,
            stage_timer_ms: 0,
            score: 0,
            rounds_won: 0,
            rounds_lost: 0,
            streak: StreakTracker::new(),
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    /// Begin a new round with a freshly generated sequence.
    ///
    /// Returns `false` without touching the game when a round is already
    /// underway, or when `length` is zero or longer than the engine holds.
    pub fn start_round(&mut self, length: usize) -> bool {
        if matches!(
            self.phase,
            RecallPhase::Presenting | RecallPhase::AwaitingInput
        ) {
            return false;
        }
        if length == 0 || length > MAX_SEQUENCE_LEN {
            return false;
        }

        self.sequence.clear();
        self.entered.clear();
        for _ in 0..length {
            let index = self.rng.next_range(PALETTE_SIZE as u32) as usize;
            self.sequence.push(Hue::ALL[index]);
        }

        self.phase = RecallPhase::Presenting;
        self.cursor = 0;
        self.stage = StepStage::Gap;
        self.stage_timer_ms = 0;
        self.last_event = None;
        true
    }

    /// Advance playback by `elapsed_ms`. Returns `true` when a stage
    /// boundary was crossed. Outside of playback this is a no-op.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != RecallPhase::Presenting {
            return false;
        }

        self.stage_timer_ms += elapsed_ms;
        match self.stage {
            StepStage::Gap => {
                if self.stage_timer_ms >= STEP_GAP_MS {
                    // Carry the remainder so the cadence does not drift
                    // across a long presentation.
                    self.stage_timer_ms -= STEP_GAP_MS;
                    self.stage = StepStage::Lit;
                    let hue = self.sequence[self.cursor];
                    self.last_event = Some(RecallEvent::StepLit {
                        position: self.cursor as u8,
                        hue,
                    });
                    return true;
                }
            }
            StepStage::Lit => {
                if self.stage_timer_ms >= STEP_LIT_MS {
                    self.stage_timer_ms -= STEP_LIT_MS;
                    self.cursor += 1;
                    if self.cursor >= self.sequence.len() {
                        self.phase = RecallPhase::AwaitingInput;
                        self.stage_timer_ms = 0;
                        self.last_event = Some(RecallEvent::InputOpen);
                    } else {
                        self.stage = StepStage::Gap;
                    }
                    return true;
                }
            }
        }
        false
    }

    /// Submit one pad press. Returns `false` when input is not being
    /// accepted; the press leaves no trace in that case.
    ///
    /// An accepted press is validated immediately: a mismatch ends the
    /// round on the spot, a final match wins it.
    pub fn press(&mut self, hue: Hue) -> bool {
        if self.phase != RecallPhase::AwaitingInput {
            return false;
        }

        let position = self.entered.len();
        let expected = self.sequence[position];
        if hue != expected {
            self.phase = RecallPhase::RoundLost;
            self.rounds_lost += 1;
            self.entered.clear();
            self.streak.record_miss();
            self.last_event = Some(RecallEvent::RoundLost {
                position: position as u8,
                expected,
            });
            return true;
        }

        self.entered.push(hue);
        if self.entered.len() == self.sequence.len() {
            let gained = self.sequence.len() as u32 * POINTS_PER_STEP;
            self.score += gained;
            self.rounds_won += 1;
            let celebrate = self.streak.record_win();
            self.phase = RecallPhase::RoundWon;
            self.last_event = Some(RecallEvent::RoundWon { gained, celebrate });
        }
        true
    }

    /// Wipe the session back to a fresh start. Valid in any phase.
    pub fn reset_session(&mut self) {
        self.sequence.clear();
        self.entered.clear();
        self.phase = RecallPhase::Idle;
        self.cursor = 0;
        self.stage = StepStage::Gap;
        self.stage_timer_ms = 0;
        self.score = 0;
        self.rounds_won = 0;
        self.rounds_lost = 0;
        self.streak.reset();
        self.last_event = None;
    }

    /// Take the pending event, leaving the slot empty.
    pub fn take_last_event(&mut self) -> Option<RecallEvent> {
        self.last_event.take()
    }

    /// Length the next round should use: the base plus the current level.
    pub fn suggested_length(&self) -> usize {
        (BASE_SEQUENCE_LEN + self.level() as usize).min(MAX_SEQUENCE_LEN)
    }

    /// Levels climb one per won round, starting at 1.
    pub fn level(&self) -> u32 {
        self.rounds_won + 1
    }

    /// Pad currently lit during playback.
    pub fn lit_pad(&self) -> Option<Hue> {
        if self.phase == RecallPhase::Presenting && self.stage == StepStage::Lit {
            return Some(self.sequence[self.cursor]);
        }
        None
    }

    pub fn phase(&self) -> RecallPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }

    /// Consecutive wins since the last miss or celebration.
    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn entered_len(&self) -> usize {
        self.entered.len()
    }

    /// Fill `out` with the current state without allocating.
    pub fn snapshot_into(&self, out: &mut RecallSnapshot) {
        out.phase = self.phase;
        out.sequence_len = self.sequence.len() as u8;
        out.entered_len = self.entered.len() as u8;
        out.lit = self.lit_pad();
        out.score = self.score;
        out.level = self.level();
        out.rounds_won = self.rounds_won;
        out.rounds_lost = self.rounds_lost;
        out.streak = self.streak.current();
        out.next_length = self.suggested_length() as u8;
    }

    /// Allocating convenience wrapper around [`snapshot_into`](Self::snapshot_into).
    pub fn snapshot(&self) -> RecallSnapshot {
        let mut out = RecallSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Test-only peek at the generated sequence.
    #[cfg(test)]
    pub(crate) fn sequence(&self) -> &[Hue] {
        &self.sequence
    }
}

impl Default for RecallGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    /// Drive playback to completion, discarding events along the way.
    fn present_fully(game: &mut RecallGame) {
        for _ in 0..10_000 {
            if game.phase() != RecallPhase::Presenting {
                break;
            }
            game.tick(TICK_MS);
            let _ = game.take_last_event();
        }
        assert_eq!(game.phase(), RecallPhase::AwaitingInput);
    }

    /// Start a round at the suggested length, watch it, and repeat it
    /// correctly. Returns the round-end event.
    fn win_round(game: &mut RecallGame) -> RecallEvent {
        assert!(game.start_round(game.suggested_length()));
        present_fully(game);
        let sequence: Vec<Hue> = game.sequence().to_vec();
        for hue in sequence {
            assert!(game.press(hue));
        }
        game.take_last_event().unwrap()
    }

    /// Any hue other than `avoid`.
    fn other_hue(avoid: Hue) -> Hue {
        Hue::ALL
            .iter()
            .copied()
            .find(|h| *h != avoid)
            .unwrap()
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = RecallGame::new(1);

        assert_eq!(game.phase(), RecallPhase::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.suggested_length(), 3);
        assert_eq!(game.lit_pad(), None);
        assert_eq!(game.sequence_len(), 0);
    }

    #[test]
    fn test_start_round_generates_requested_length() {
        let mut game = RecallGame::new(7);

        assert!(game.start_round(5));
        assert_eq!(game.phase(), RecallPhase::Presenting);
        assert_eq!(game.sequence_len(), 5);
        assert_eq!(game.entered_len(), 0);
    }

    #[test]
    fn test_start_round_rejects_zero() {
        let mut game = RecallGame::new(7);

        assert!(!game.start_round(0));
        assert_eq!(game.phase(), RecallPhase::Idle);
        assert_eq!(game.sequence_len(), 0);
    }

    #[test]
    fn test_start_round_rejects_oversized() {
        let mut game = RecallGame::new(7);

        assert!(!game.start_round(MAX_SEQUENCE_LEN + 1));
        assert_eq!(game.phase(), RecallPhase::Idle);

        // The cap itself is fine
        assert!(game.start_round(MAX_SEQUENCE_LEN));
        assert_eq!(game.sequence_len(), MAX_SEQUENCE_LEN);
    }

    #[test]
    fn test_start_round_ignored_mid_round() {
        let mut game = RecallGame::new(7);
        assert!(game.start_round(3));
        let original: Vec<Hue> = game.sequence().to_vec();

        // During playback
        game.tick(STEP_GAP_MS);
        assert!(!game.start_round(4));
        assert_eq!(game.sequence(), original.as_slice());

        // During input
        present_fully(&mut game);
        assert!(!game.start_round(4));
        assert_eq!(game.sequence(), original.as_slice());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RecallGame::new(99);
        let mut b = RecallGame::new(99);

        assert!(a.start_round(8));
        assert!(b.start_round(8));
        assert_eq!(a.sequence(), b.sequence());
    }

    #[test]
    fn test_presentation_cadence() {
        let mut game = RecallGame::new(5);
        assert!(game.start_round(2));
        let sequence: Vec<Hue> = game.sequence().to_vec();

        // Nothing happens inside the gap
        assert!(!game.tick(STEP_GAP_MS - 1));
        assert_eq!(game.take_last_event(), None);
        assert_eq!(game.lit_pad(), None);

        // Gap elapses: first step lights
        assert!(game.tick(1));
        assert_eq!(
            game.take_last_event(),
            Some(RecallEvent::StepLit {
                position: 0,
                hue: sequence[0]
            })
        );
        assert_eq!(game.lit_pad(), Some(sequence[0]));

        // Step stays lit until its time is up
        assert!(!game.tick(STEP_LIT_MS - 1));
        assert!(game.tick(1));
        assert_eq!(game.take_last_event(), None);
        assert_eq!(game.lit_pad(), None);

        // Second step, then input opens
        assert!(game.tick(STEP_GAP_MS));
        assert_eq!(
            game.take_last_event(),
            Some(RecallEvent::StepLit {
                position: 1,
                hue: sequence[1]
            })
        );
        assert!(game.tick(STEP_LIT_MS));
        assert_eq!(game.take_last_event(), Some(RecallEvent::InputOpen));
        assert_eq!(game.phase(), RecallPhase::AwaitingInput);
    }

    #[test]
    fn test_presentation_in_fixed_ticks() {
        let mut game = RecallGame::new(11);
        assert!(game.start_round(4));
        let sequence: Vec<Hue> = game.sequence().to_vec();

        let mut lit = Vec::new();
        let mut input_opened = false;
        for _ in 0..2_000 {
            if game.phase() != RecallPhase::Presenting {
                break;
            }
            game.tick(TICK_MS);
            match game.take_last_event() {
                Some(RecallEvent::StepLit { position, hue }) => {
                    assert_eq!(position as usize, lit.len());
                    lit.push(hue);
                }
                Some(RecallEvent::InputOpen) => input_opened = true,
                Some(other) => panic!("unexpected event during playback: {:?}", other),
                None => {}
            }
        }

        assert_eq!(lit, sequence);
        assert!(input_opened);
        assert_eq!(game.phase(), RecallPhase::AwaitingInput);
    }

    #[test]
    fn test_input_ignored_while_presenting() {
        let mut game = RecallGame::new(3);
        assert!(game.start_round(3));
        game.tick(STEP_GAP_MS);

        assert!(!game.press(Hue::Red));
        assert_eq!(game.entered_len(), 0);
        assert_eq!(game.phase(), RecallPhase::Presenting);
    }

    #[test]
    fn test_press_ignored_when_idle() {
        let mut game = RecallGame::new(3);

        assert!(!game.press(Hue::Green));
        assert_eq!(game.phase(), RecallPhase::Idle);
    }

    #[test]
    fn test_correct_entry_wins_round() {
        let mut game = RecallGame::new(21);
        assert!(game.start_round(3));
        present_fully(&mut game);
        let sequence: Vec<Hue> = game.sequence().to_vec();

        assert!(game.press(sequence[0]));
        assert_eq!(game.entered_len(), 1);
        assert!(game.press(sequence[1]));
        assert_eq!(game.phase(), RecallPhase::AwaitingInput);

        assert!(game.press(sequence[2]));
        assert_eq!(game.phase(), RecallPhase::RoundWon);
        assert_eq!(
            game.take_last_event(),
            Some(RecallEvent::RoundWon {
                gained: 30,
                celebrate: false
            })
        );
        assert_eq!(game.score(), 30);
        assert_eq!(game.rounds_won(), 1);
        assert_eq!(game.level(), 2);
        assert_eq!(game.suggested_length(), 4);
    }

    #[test]
    fn test_wrong_press_loses_round() {
        let mut game = RecallGame::new(21);
        assert!(game.start_round(3));
        present_fully(&mut game);
        let sequence: Vec<Hue> = game.sequence().to_vec();

        assert!(game.press(sequence[0]));
        let wrong = other_hue(sequence[1]);
        assert!(game.press(wrong));

        assert_eq!(game.phase(), RecallPhase::RoundLost);
        assert_eq!(
            game.take_last_event(),
            Some(RecallEvent::RoundLost {
                position: 1,
                expected: sequence[1]
            })
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.rounds_lost(), 1);
        // The partial entry is discarded with the round
        assert_eq!(game.entered_len(), 0);
    }

    #[test]
    fn test_loss_keeps_level() {
        let mut game = RecallGame::new(21);
        assert!(game.start_round(game.suggested_length()));
        present_fully(&mut game);
        let first = game.sequence()[0];
        assert!(game.press(other_hue(first)));

        assert_eq!(game.level(), 1);
        assert_eq!(game.suggested_length(), 3);
    }

    #[test]
    fn test_presses_after_round_end_are_ignored() {
        let mut game = RecallGame::new(21);
        let _ = win_round(&mut game);

        assert!(!game.press(Hue::Red));
        assert_eq!(game.phase(), RecallPhase::RoundWon);
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn test_streak_celebrates_every_third_win() {
        let mut game = RecallGame::new(33);

        let celebrated: Vec<bool> = (0..6)
            .map(|_| match win_round(&mut game) {
                RecallEvent::RoundWon { celebrate, .. } => celebrate,
                other => panic!("expected a won round, got {:?}", other),
            })
            .collect();

        assert_eq!(celebrated, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_miss_resets_streak() {
        let mut game = RecallGame::new(33);
        let _ = win_round(&mut game);
        let _ = win_round(&mut game);
        assert_eq!(game.streak(), 2);

        // Lose the next round
        assert!(game.start_round(game.suggested_length()));
        present_fully(&mut game);
        let first = game.sequence()[0];
        assert!(game.press(other_hue(first)));
        assert_eq!(game.streak(), 0);

        // A fresh streak still needs three wins
        let results: Vec<bool> = (0..3)
            .map(|_| match win_round(&mut game) {
                RecallEvent::RoundWon { celebrate, .. } => celebrate,
                other => panic!("expected a won round, got {:?}", other),
            })
            .collect();
        assert_eq!(results, vec![false, false, true]);
    }

    #[test]
    fn test_score_accumulates_across_rounds() {
        let mut game = RecallGame::new(13);

        // Round lengths grow with the level: 3, then 4
        let _ = win_round(&mut game);
        assert_eq!(game.score(), 30);
        let _ = win_round(&mut game);
        assert_eq!(game.score(), 70);
    }

    #[test]
    fn test_reset_session_clears_everything() {
        let mut game = RecallGame::new(13);
        let _ = win_round(&mut game);
        let _ = win_round(&mut game);

        game.reset_session();

        assert_eq!(game.phase(), RecallPhase::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.rounds_won(), 0);
        assert_eq!(game.rounds_lost(), 0);
        assert_eq!(game.streak(), 0);
        assert_eq!(game.sequence_len(), 0);
        assert_eq!(game.suggested_length(), 3);
        assert_eq!(game.take_last_event(), None);
    }

    #[test]
    fn test_reset_mid_presentation() {
        let mut game = RecallGame::new(13);
        assert!(game.start_round(3));
        game.tick(STEP_GAP_MS);
        assert!(game.lit_pad().is_some());

        game.reset_session();

        assert_eq!(game.phase(), RecallPhase::Idle);
        assert_eq!(game.lit_pad(), None);
        assert_eq!(game.take_last_event(), None);
    }

    #[test]
    fn test_take_last_event_consumes() {
        let mut game = RecallGame::new(5);
        assert!(game.start_round(2));
        game.tick(STEP_GAP_MS);

        assert!(game.take_last_event().is_some());
        assert_eq!(game.take_last_event(), None);
    }

    #[test]
    fn test_tick_outside_playback_is_a_no_op() {
        let mut game = RecallGame::new(5);

        assert!(!game.tick(10_000));
        assert_eq!(game.phase(), RecallPhase::Idle);

        assert!(game.start_round(2));
        present_fully(&mut game);
        assert!(!game.tick(10_000));
        assert_eq!(game.phase(), RecallPhase::AwaitingInput);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = RecallGame::new(17);
        assert!(game.start_round(3));
        present_fully(&mut game);
        let first = game.sequence()[0];
        assert!(game.press(first));

        let snap = game.snapshot();
        assert_eq!(snap.phase, RecallPhase::AwaitingInput);
        assert!(snap.accepting_input());
        assert_eq!(snap.sequence_len, 3);
        assert_eq!(snap.entered_len, 1);
        assert_eq!(snap.lit, None);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.next_length, 3);
    }

    #[test]
    fn test_snapshot_after_win() {
        let mut game = RecallGame::new(17);
        let _ = win_round(&mut game);

        let snap = game.snapshot();
        assert_eq!(snap.phase, RecallPhase::RoundWon);
        assert_eq!(snap.score, 30);
        assert_eq!(snap.rounds_won, 1);
        assert_eq!(snap.level, 2);
        assert_eq!(snap.next_length, 4);
        assert_eq!(snap.streak, 1);
    }

    #[test]
    fn test_snapshot_lit_pad_during_playback() {
        let mut game = RecallGame::new(17);
        assert!(game.start_round(2));
        game.tick(STEP_GAP_MS);

        let snap = game.snapshot();
        assert_eq!(snap.phase, RecallPhase::Presenting);
        assert_eq!(snap.lit, Some(game.sequence()[0]));
    }
}
