//! Word building - spell a target word from a scrambled letter pool
//!
//! The pool holds the word's own letters plus a few decoys, shuffled.
//! Letters go into the leftmost empty slot; a full set of slots is judged
//! on the spot. A wrong fill sits there until the player takes letters
//! back out, so there is no penalty beyond the detour.
//!
//! Word content comes from the host. The engine only tracks the current
//! target and the session totals.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::streak::StreakTracker;
use crate::types::{LETTER_POOL_MAX, MAX_DECOYS, MAX_WORD_LEN, POINTS_PER_CORRECT};

const POOL_CAP: usize = MAX_WORD_LEN + MAX_DECOYS;

/// One selectable letter in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLetter {
    pub letter: char,
    /// Currently sitting in a slot
    pub used: bool,
}

/// What a placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Letter landed in a slot; the word is not full yet
    Placed,
    /// The filled slots spell the target
    Built { celebrate: bool },
    /// All slots are full but the spelling is wrong
    WrongFill,
    /// Nothing happened
    Rejected,
}

/// Spelling session over host-supplied words.
#[derive(Debug, Clone)]
pub struct WordBuilder {
    target: ArrayVec<char, MAX_WORD_LEN>,
    /// Slot contents as indices into the pool
    slots: ArrayVec<Option<usize>, MAX_WORD_LEN>,
    pool: ArrayVec<PoolLetter, POOL_CAP>,
    built: bool,
    words_built: u32,
    score: u32,
    streak: StreakTracker,
    rng: SimpleRng,
}

impl WordBuilder {
    pub fn new(seed: u32) -> Self {
        Self {
            target: ArrayVec::new(),
            slots: ArrayVec::new(),
            pool: ArrayVec::new(),
            built: false,
            words_built: 0,
            score: 0,
            streak: StreakTracker::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Set up the next word. Letters are uppercased; only ASCII letters
    /// up to the length cap are accepted.
    pub fn begin_word(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        if len == 0 || len > MAX_WORD_LEN || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }

        self.target.clear();
        for c in word.chars() {
            self.target.push(c.to_ascii_uppercase());
        }
        self.slots.clear();
        for _ in 0..len {
            self.slots.push(None);
        }

        // Decoys come from outside the word; short words get more of them
        let mut candidates: ArrayVec<char, 26> = ArrayVec::new();
        for b in b'A'..=b'Z' {
            let c = b as char;
            if !self.target.contains(&c) {
                candidates.push(c);
            }
        }
        self.rng.shuffle(&mut candidates);
        let decoys = MAX_DECOYS.min(LETTER_POOL_MAX.saturating_sub(len));

        self.pool.clear();
        for &c in &self.target {
            self.pool.push(PoolLetter {
                letter: c,
                used: false,
            });
        }
        for &c in candidates.iter().take(decoys) {
            self.pool.push(PoolLetter {
                letter: c,
                used: false,
            });
        }
        self.rng.shuffle(&mut self.pool);

        self.built = false;
        true
    }

    /// Move a pool letter into the leftmost empty slot. Filling the last
    /// slot judges the word immediately.
    pub fn place(&mut self, pool_index: usize) -> PlaceOutcome {
        if self.built || self.target.is_empty() {
            return PlaceOutcome::Rejected;
        }
        match self.pool.get(pool_index) {
            Some(entry) if !entry.used => {}
            _ => return PlaceOutcome::Rejected,
        }
        let slot = match self.slots.iter().position(|s| s.is_none()) {
            Some(slot) => slot,
            None => return PlaceOutcome::Rejected,
        };

        self.pool[pool_index].used = true;
        self.slots[slot] = Some(pool_index);

        if self.slots.iter().any(|s| s.is_none()) {
            return PlaceOutcome::Placed;
        }

        let spelled = self
            .slots
            .iter()
            .zip(&self.target)
            .all(|(s, t)| s.map(|i| self.pool[i].letter) == Some(*t));
        if spelled {
            self.built = true;
            self.words_built += 1;
            self.score += POINTS_PER_CORRECT;
            let celebrate = self.streak.record_win();
            return PlaceOutcome::Built { celebrate };
        }
        PlaceOutcome::WrongFill
    }

    /// Return a slot's letter to the pool. No-op once the word is built.
    pub fn take_back(&mut self, slot: usize) -> bool {
        if self.built || slot >= self.slots.len() {
            return false;
        }
        match self.slots[slot].take() {
            Some(pool_index) => {
                self.pool[pool_index].used = false;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.target.clear();
        self.slots.clear();
        self.pool.clear();
        self.built = false;
        self.words_built = 0;
        self.score = 0;
        self.streak.reset();
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// The word being spelled.
    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    /// Letter currently in a slot, if any.
    pub fn slot_letter(&self, slot: usize) -> Option<char> {
        self.slots
            .get(slot)
            .copied()
            .flatten()
            .map(|i| self.pool[i].letter)
    }

    pub fn pool(&self) -> &[PoolLetter] {
        &self.pool
    }

    /// Whether the current word has been spelled.
    pub fn built(&self) -> bool {
        self.built
    }

    pub fn words_built(&self) -> u32 {
        self.words_built
    }

    /// Levels climb one per three finished words.
    pub fn level(&self) -> u32 {
        1 + self.words_built / 3
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak.current()
    }
}

impl Default for WordBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}
