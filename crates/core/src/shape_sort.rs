//! Shape sorting - drop each shape into its matching bin
//!
//! Levels alternate the sorting rule: odd levels sort by color, even
//! levels by shape kind. Clearing a level scores level × 10, counts as
//! one streak win, and deals a bigger batch, up to twelve shapes. Five
//! levels make a session.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::streak::StreakTracker;
use crate::types::{
    Hue, ShapeKind, MAX_SHAPES, PALETTE_SIZE, POINTS_PER_CORRECT, SHAPE_SORT_MAX_LEVEL,
};

/// One shape waiting to be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeItem {
    pub kind: ShapeKind,
    pub hue: Hue,
    pub sorted: bool,
}

/// Which attribute the current level sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    ByColor,
    ByKind,
}

/// A target bin. Only bins matching the current mode can be correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBin {
    Hue(Hue),
    Kind(ShapeKind),
}

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted {
        level_complete: bool,
        celebrate: bool,
        session_complete: bool,
    },
    Wrong,
    Rejected,
}

/// One shape sorting session, level 1 through 5.
#[derive(Debug, Clone)]
pub struct ShapeSort {
    shapes: ArrayVec<ShapeItem, MAX_SHAPES>,
    level: u32,
    score: u32,
    complete: bool,
    streak: StreakTracker,
    rng: SimpleRng,
}

impl ShapeSort {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            shapes: ArrayVec::new(),
            level: 1,
            score: 0,
            complete: false,
            streak: StreakTracker::new(),
            rng: SimpleRng::new(seed),
        };
        game.deal_level();
        game
    }

    fn deal_level(&mut self) {
        let total = (6 + self.level as usize * 2).min(MAX_SHAPES);
        self.shapes.clear();
        for _ in 0..total {
            let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
            let hue = Hue::ALL[self.rng.next_range(PALETTE_SIZE as u32) as usize];
            self.shapes.push(ShapeItem {
                kind,
                hue,
                sorted: false,
            });
        }
    }

    /// The sorting rule alternates with the level: odd sorts by color.
    pub fn mode(&self) -> SortMode {
        if self.level % 2 == 1 {
            SortMode::ByColor
        } else {
            SortMode::ByKind
        }
    }

    /// Drop a shape into a bin.
    ///
    /// Sorted shapes and finished sessions reject the drop outright; a
    /// bin that does not fit the current rule is simply wrong.
    pub fn sort_into(&mut self, shape: usize, bin: SortBin) -> SortOutcome {
        if self.complete || shape >= self.shapes.len() || self.shapes[shape].sorted {
            return SortOutcome::Rejected;
        }

        let item = self.shapes[shape];
        let correct = match (self.mode(), bin) {
            (SortMode::ByColor, SortBin::Hue(hue)) => item.hue == hue,
            (SortMode::ByKind, SortBin::Kind(kind)) => item.kind == kind,
            _ => false,
        };
        if !correct {
            self.streak.record_miss();
            return SortOutcome::Wrong;
        }

        self.shapes[shape].sorted = true;
        if self.shapes.iter().any(|s| !s.sorted) {
            return SortOutcome::Sorted {
                level_complete: false,
                celebrate: false,
                session_complete: false,
            };
        }

        // Level cleared
        self.score += self.level * POINTS_PER_CORRECT;
        let celebrate = self.streak.record_win();
        if self.level >= SHAPE_SORT_MAX_LEVEL {
            self.complete = true;
            return SortOutcome::Sorted {
                level_complete: true,
                celebrate,
                session_complete: true,
            };
        }
        self.level += 1;
        self.deal_level();
        SortOutcome::Sorted {
            level_complete: true,
            celebrate,
            session_complete: false,
        }
    }

    pub fn reset(&mut self) {
        self.level = 1;
        self.score = 0;
        self.complete = false;
        self.streak.reset();
        self.deal_level();
    }

    pub fn shapes(&self) -> &[ShapeItem] {
        &self.shapes
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sorted_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.sorted).count()
    }

    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    pub fn complete(&self) -> bool {
        self.complete
    }
}

impl Default for ShapeSort {
    fn default() -> Self {
        Self::new(1)
    }
}
