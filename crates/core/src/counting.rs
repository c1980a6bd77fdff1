//! Counting exercise - count the objects, pick the right number
//!
//! Each level shows a handful of objects and four answer buttons: the true
//! count plus three distinct decoys from the same neighborhood. The count
//! grows with the level and caps at ten. Answering is one-shot; the host
//! calls [`CountingGame::advance`] once the result has been shown.

use crate::rng::SimpleRng;
use crate::streak::StreakTracker;
use crate::types::{COUNTING_MAX_COUNT, COUNTING_MAX_LEVEL, OPTION_COUNT, POINTS_PER_CORRECT};

/// The recorded answer for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingAnswer {
    pub choice: u32,
    pub correct: bool,
}

/// Result of answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingOutcome {
    pub correct: bool,
    pub celebrate: bool,
    pub session_complete: bool,
}

/// One counting session, level 1 through 8.
#[derive(Debug, Clone)]
pub struct CountingGame {
    level: u32,
    count: u32,
    options: [u32; OPTION_COUNT],
    answered: Option<CountingAnswer>,
    score: u32,
    complete: bool,
    streak: StreakTracker,
    rng: SimpleRng,
}

impl CountingGame {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            level: 1,
            count: 0,
            options: [0; OPTION_COUNT],
            answered: None,
            score: 0,
            complete: false,
            streak: StreakTracker::new(),
            rng: SimpleRng::new(seed),
        };
        game.next_question();
        game
    }

    fn next_question(&mut self) {
        self.count = (self.level + 2).min(COUNTING_MAX_COUNT);

        // One right answer plus three distinct decoys from 1..=count+3
        self.options[0] = self.count;
        let mut filled = 1;
        while filled < OPTION_COUNT {
            let candidate = self.rng.next_range(self.count + 3) + 1;
            if !self.options[..filled].contains(&candidate) {
                self.options[filled] = candidate;
                filled += 1;
            }
        }
        self.rng.shuffle(&mut self.options);
        self.answered = None;
    }

    /// Answer the current question with one of the shown options.
    ///
    /// Returns `None` when the value is not an option, the question was
    /// already answered, or the session is over.
    pub fn answer(&mut self, choice: u32) -> Option<CountingOutcome> {
        if self.complete || self.answered.is_some() || !self.options.contains(&choice) {
            return None;
        }

        let correct = choice == self.count;
        self.answered = Some(CountingAnswer { choice, correct });

        let mut celebrate = false;
        let mut session_complete = false;
        if correct {
            self.score += POINTS_PER_CORRECT;
            celebrate = self.streak.record_win();
            if self.level >= COUNTING_MAX_LEVEL {
                self.complete = true;
                session_complete = true;
            }
        } else {
            self.streak.record_miss();
        }

        Some(CountingOutcome {
            correct,
            celebrate,
            session_complete,
        })
    }

    /// Move to the next question. Only valid once the current one has
    /// been answered.
    pub fn advance(&mut self) -> bool {
        if self.complete || self.answered.is_none() {
            return false;
        }
        self.level += 1;
        self.next_question();
        true
    }

    pub fn reset(&mut self) {
        self.level = 1;
        self.score = 0;
        self.complete = false;
        self.streak.reset();
        self.next_question();
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// How many objects the host should draw; also the right answer.
    pub fn object_count(&self) -> u32 {
        self.count
    }

    pub fn options(&self) -> &[u32; OPTION_COUNT] {
        &self.options
    }

    pub fn answered(&self) -> Option<CountingAnswer> {
        self.answered
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    pub fn complete(&self) -> bool {
        self.complete
    }
}

impl Default for CountingGame {
    fn default() -> Self {
        Self::new(1)
    }
}
