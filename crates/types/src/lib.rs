//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, terminal rendering, audio playback).
//!
//! # Pad Palette
//!
//! The recall game uses six colored pads, each tied to a musical tone:
//!
//! | Index | Hue | Key | Tone | Frequency |
//! |-------|--------|-----|------|-----------|
//! | 0 | Red | `1` | C4 | 261.63 Hz |
//! | 1 | Blue | `2` | D4 | 293.66 Hz |
//! | 2 | Green | `3` | E4 | 329.63 Hz |
//! | 3 | Yellow | `4` | F4 | 349.23 Hz |
//! | 4 | Purple | `5` | G4 | 392.00 Hz |
//! | 5 | Orange | `6` | A4 | 440.00 Hz |
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STEP_GAP_MS` | 600 | Dark gap before each presented step |
//! | `STEP_LIT_MS` | 400 | How long a presented pad stays lit |
//! | `TONE_MS` | 300 | Duration of a pad tone |
//! | `CELEBRATE_MS` | 3000 | Duration of the streak celebration overlay |
//!
//! # Scoring
//!
//! - `POINTS_PER_STEP`: 10 points per sequence step on a won round
//! - `POINTS_PER_CORRECT`: 10 points per correct answer in the side exercises
//! - `CELEBRATION_STREAK`: every 3rd consecutive win fires a celebration
//! - `BASE_SEQUENCE_LEN`: round length is this base plus the current level
//!
//! # Examples
//!
//! ```
//! use tui_playroom_types::{Hue, Note, RecallAction, PALETTE_SIZE, STEP_LIT_MS};
//!
//! // Pads are addressed by palette index
//! let pad = Hue::from_index(2).unwrap();
//! assert_eq!(pad, Hue::Green);
//!
//! // Each pad carries a tone
//! assert_eq!(pad.note(), Note::E4);
//! assert_eq!(pad.note().frequency_hz(), 329.63);
//!
//! // Actions wrap pad presses and session controls
//! let action = RecallAction::Pad(pad);
//! assert_eq!(action, RecallAction::Pad(Hue::Green));
//!
//! assert_eq!(PALETTE_SIZE, 6);
//! assert_eq!(STEP_LIT_MS, 400);
//! ```

/// Number of colored pads in the palette (6)
pub const PALETTE_SIZE: usize = 6;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Dark gap before each presented step lights up (600ms)
pub const STEP_GAP_MS: u32 = 600;

/// How long a presented pad stays lit (400ms)
pub const STEP_LIT_MS: u32 = 400;

/// Duration of a single pad tone (300ms)
pub const TONE_MS: u32 = 300;

/// Tone amplitude, 0.0 to 1.0
pub const TONE_GAIN: f32 = 0.3;

/// Duration of the streak celebration overlay (3000ms)
pub const CELEBRATE_MS: u32 = 3000;

/// Points per sequence step when a round is won
pub const POINTS_PER_STEP: u32 = 10;

/// Points per correct answer in the side exercises
pub const POINTS_PER_CORRECT: u32 = 10;

/// Round length is this base plus the current level
pub const BASE_SEQUENCE_LEN: usize = 2;

/// Longest sequence a round may hold
pub const MAX_SEQUENCE_LEN: usize = 32;

/// Consecutive wins needed to fire a celebration
pub const CELEBRATION_STREAK: u32 = 3;

/// Answer buttons shown per quiz question (1 right + 3 wrong)
pub const OPTION_COUNT: usize = 4;

/// Number-to-word pairs per matching round
pub const PAIRS_PER_ROUND: usize = 6;

/// Matching rounds per session
pub const MATCH_ROUNDS: u32 = 3;

/// Counting levels before the session completes
pub const COUNTING_MAX_LEVEL: u32 = 8;

/// Largest object count a counting question may ask about
pub const COUNTING_MAX_COUNT: u32 = 10;

/// Shape sorting levels before the session completes
pub const SHAPE_SORT_MAX_LEVEL: u32 = 5;

/// Most shapes a sorting level may hold
pub const MAX_SHAPES: usize = 12;

/// Longest word the word builder accepts
pub const MAX_WORD_LEN: usize = 12;

/// Most decoy letters mixed into the word builder pool
pub const MAX_DECOYS: usize = 4;

/// Letter pool stops growing past this size; short words get decoys up to it
pub const LETTER_POOL_MAX: usize = 8;


/// The six pad colors
///
/// Palette order is fixed; pad index, keyboard key, and tone all follow it:
/// - **Red**: C4
/// - **Blue**: D4
/// - **Green**: E4
/// - **Yellow**: F4
/// - **Purple**: G4
/// - **Orange**: A4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Hue {
    /// All hues in palette order
    pub const ALL: [Hue; PALETTE_SIZE] = [
        Hue::Red,
        Hue::Blue,
        Hue::Green,
        Hue::Yellow,
        Hue::Purple,
        Hue::Orange,
    ];

    /// Look up a hue by palette index
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_playroom_types::Hue;
    ///
    /// assert_eq!(Hue::from_index(0), Some(Hue::Red));
    /// assert_eq!(Hue::from_index(5), Some(Hue::Orange));
    /// assert_eq!(Hue::from_index(6), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Palette index of this hue
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_playroom_types::Hue;
    ///
    /// assert_eq!(Hue::Red.as_str(), "red");
    /// assert_eq!(Hue::Purple.as_str(), "purple");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Blue => "blue",
            Hue::Green => "green",
            Hue::Yellow => "yellow",
            Hue::Purple => "purple",
            Hue::Orange => "orange",
        }
    }

    /// The tone paired with this pad
    pub fn note(&self) -> Note {
        match self {
            Hue::Red => Note::C4,
            Hue::Blue => Note::D4,
            Hue::Green => Note::E4,
            Hue::Yellow => Note::F4,
            Hue::Purple => Note::G4,
            Hue::Orange => Note::A4,
        }
    }
}

/// Musical notes used for pad tones
///
/// Six notes of the C major scale, one per pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
}

impl Note {
    /// Frequency of this note in hertz
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_playroom_types::Note;
    ///
    /// assert_eq!(Note::C4.frequency_hz(), 261.63);
    /// assert_eq!(Note::A4.frequency_hz(), 440.0);
    /// ```
    pub fn frequency_hz(&self) -> f32 {
        match self {
            Note::C4 => 261.63,
            Note::D4 => 293.66,
            Note::E4 => 329.63,
            Note::F4 => 349.23,
            Note::G4 => 392.0,
            Note::A4 => 440.0,
        }
    }

    /// Note name, e.g. `"C4"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::D4 => "D4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::G4 => "G4",
            Note::A4 => "A4",
        }
    }
}

/// Where the recall game currently stands
///
/// The phase cycle for a normal round is:
/// Idle → Presenting → AwaitingInput → RoundWon / RoundLost → (next round)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallPhase {
    /// No round underway; waiting for the player to start
    Idle,
    /// The sequence is being played back; input is ignored
    Presenting,
    /// Playback finished; the player is entering their answer
    AwaitingInput,
    /// The full sequence was repeated correctly
    RoundWon,
    /// A press did not match the sequence
    RoundLost,
}

/// Event emitted by the recall game, consumed once per tick
///
/// The host maps these to tones, narration, and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallEvent {
    /// A sequence step just lit up during playback
    StepLit { position: u8, hue: Hue },
    /// Playback finished; player input is now accepted
    InputOpen,
    /// The round was completed correctly
    RoundWon { gained: u32, celebrate: bool },
    /// A press mismatched the sequence at `position`
    RoundLost { position: u8, expected: Hue },
}

/// Player actions for the recall game
///
/// Produced by the input mapper from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallAction {
    /// Press one of the six pads
    Pad(Hue),
    /// Start the next round
    Start,
    /// Reset the whole session
    Reset,
    /// Turn spoken feedback on or off
    ToggleVoice,
    /// Turn pad tones on or off
    ToggleTones,
}

/// Shapes used by the sorting exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    /// All shape kinds
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
    ];

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_playroom_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::Circle.as_str(), "circle");
    /// assert_eq!(ShapeKind::Hexagon.as_str(), "hexagon");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

/// Puzzle board sizes
///
/// Each difficulty is a square grid:
/// - **Easy**: 3×3 (9 pieces)
/// - **Medium**: 4×4 (16 pieces)
/// - **Hard**: 5×5 (25 pieces)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Side length of the puzzle grid
    pub fn grid_side(&self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        let side = self.grid_side() as usize;
        side * side
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_playroom_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.as_str(), "easy");
    /// assert_eq!(Difficulty::Medium.as_str(), "medium");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
