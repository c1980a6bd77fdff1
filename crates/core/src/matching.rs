//! Number matching - pair numerals with their written-out words
//!
//! Each round deals six consecutive numbers. The numeral column keeps its
//! order; the word column is shuffled. The player picks one entry from each
//! column and the pair resolves as soon as both sides are chosen. Three
//! rounds make a session, covering 0 through 17.

use crate::rng::SimpleRng;
use crate::streak::StreakTracker;
use crate::types::{MATCH_ROUNDS, PAIRS_PER_ROUND, POINTS_PER_CORRECT};

/// What a resolved pick pair amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched {
        number: u32,
        celebrate: bool,
        round_complete: bool,
        session_complete: bool,
    },
    Mismatched,
}

/// One number-to-word matching session.
#[derive(Debug, Clone)]
pub struct NumberMatch {
    round: u32,
    numbers: [u32; PAIRS_PER_ROUND],
    /// Word column layout: slot index to `numbers` index
    word_order: [usize; PAIRS_PER_ROUND],
    matched: [bool; PAIRS_PER_ROUND],
    picked_number: Option<usize>,
    picked_word: Option<usize>,
    score: u32,
    wrong_attempts: u32,
    complete: bool,
    streak: StreakTracker,
    rng: SimpleRng,
}

impl NumberMatch {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            round: 1,
            numbers: [0; PAIRS_PER_ROUND],
            word_order: [0; PAIRS_PER_ROUND],
            matched: [false; PAIRS_PER_ROUND],
            picked_number: None,
            picked_word: None,
            score: 0,
            wrong_attempts: 0,
            complete: false,
            streak: StreakTracker::new(),
            rng: SimpleRng::new(seed),
        };
        game.deal_round();
        game
    }

    /// Deal the current round: six consecutive numbers, words reshuffled.
    fn deal_round(&mut self) {
        let base = (self.round - 1) * PAIRS_PER_ROUND as u32;
        for (i, n) in self.numbers.iter_mut().enumerate() {
            *n = base + i as u32;
        }
        for (i, slot) in self.word_order.iter_mut().enumerate() {
            *slot = i;
        }
        self.rng.shuffle(&mut self.word_order);
        self.matched = [false; PAIRS_PER_ROUND];
        self.picked_number = None;
        self.picked_word = None;
    }

    /// Pick an entry in the numeral column. Resolves the pair when a word
    /// is already picked; otherwise the selection just sticks.
    ///
    /// Picks on matched pairs or after completion are ignored.
    pub fn pick_number(&mut self, slot: usize) -> Option<MatchOutcome> {
        if self.complete || slot >= PAIRS_PER_ROUND || self.matched[slot] {
            return None;
        }
        self.picked_number = Some(slot);
        if let (Some(n), Some(w)) = (self.picked_number, self.picked_word) {
            return Some(self.resolve(n, w));
        }
        None
    }

    /// Pick an entry in the word column. Mirror of [`pick_number`](Self::pick_number).
    pub fn pick_word(&mut self, slot: usize) -> Option<MatchOutcome> {
        if self.complete || slot >= PAIRS_PER_ROUND || self.matched[self.word_order[slot]] {
            return None;
        }
        self.picked_word = Some(slot);
        if let (Some(n), Some(w)) = (self.picked_number, self.picked_word) {
            return Some(self.resolve(n, w));
        }
        None
    }

    fn resolve(&mut self, number_slot: usize, word_slot: usize) -> MatchOutcome {
        self.picked_number = None;
        self.picked_word = None;

        let pair = self.word_order[word_slot];
        if pair != number_slot {
            self.wrong_attempts += 1;
            self.streak.record_miss();
            return MatchOutcome::Mismatched;
        }

        // Capture before a round advance re-deals the table
        let number = self.numbers[pair];
        self.matched[pair] = true;
        self.score += POINTS_PER_CORRECT;
        let celebrate = self.streak.record_win();

        let round_complete = self.matched.iter().all(|m| *m);
        let mut session_complete = false;
        if round_complete {
            if self.round >= MATCH_ROUNDS {
                self.complete = true;
                session_complete = true;
            } else {
                self.round += 1;
                self.deal_round();
            }
        }

        MatchOutcome::Matched {
            number,
            celebrate,
            round_complete,
            session_complete,
        }
    }

    /// Back to round one with a fresh deal.
    pub fn reset(&mut self) {
        self.round = 1;
        self.score = 0;
        self.wrong_attempts = 0;
        self.complete = false;
        self.streak.reset();
        self.deal_round();
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Numeral column in display order.
    pub fn numbers(&self) -> &[u32; PAIRS_PER_ROUND] {
        &self.numbers
    }

    /// Number behind a word-column slot.
    pub fn word_at(&self, slot: usize) -> u32 {
        self.numbers[self.word_order[slot]]
    }

    pub fn number_matched(&self, slot: usize) -> bool {
        self.matched[slot]
    }

    pub fn word_matched(&self, slot: usize) -> bool {
        self.matched[self.word_order[slot]]
    }

    pub fn pairs_matched(&self) -> usize {
        self.matched.iter().filter(|m| **m).count()
    }

    pub fn selected_number(&self) -> Option<usize> {
        self.picked_number
    }

    pub fn selected_word(&self) -> Option<usize> {
        self.picked_word
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    pub fn complete(&self) -> bool {
        self.complete
    }
}

impl Default for NumberMatch {
    fn default() -> Self {
        Self::new(1)
    }
}
