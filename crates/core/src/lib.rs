//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules and state machines for every exercise.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for the playback tick
//!
//! # Module Structure
//!
//! - [`recall`]: The color sequence recall game, a timed playback state machine
//! - [`snapshot`]: Render-ready copy of the recall state
//! - [`streak`]: Consecutive-win counting with the every-third celebration
//! - [`rng`]: Seedable LCG plus Fisher-Yates shuffling
//! - [`matching`]: Pair numerals with their written-out words
//! - [`number_words`]: English spellings for 0 through 99
//! - [`counting`]: Count objects, pick the right number
//! - [`word_build`]: Spell a word from a scrambled letter pool
//! - [`shape_sort`]: Drop shapes into color or kind bins
//! - [`puzzle`]: Swap scrambled picture pieces home
//! - [`quiz`]: Ordered multiple-choice questions with decoy options
//!
//! # The Recall Game
//!
//! The headline exercise plays a growing color sequence and asks the
//! player to repeat it:
//!
//! - **Playback**: each step is a 600ms gap followed by 400ms lit
//! - **Validation**: presses are checked as they arrive, not at the end
//! - **Scoring**: a won round pays 10 points per sequence step
//! - **Levels**: round length is 2 plus the level, one level per win
//! - **Streaks**: every third consecutive win fires a celebration
//!
//! # Example
//!
//! ```
//! use tui_playroom_core::RecallGame;
//! use tui_playroom_types::{RecallPhase, TICK_MS};
//!
//! let mut game = RecallGame::new(12345);
//! let started = game.start_round(game.suggested_length());
//! assert!(started);
//!
//! // Drive playback with the frame clock
//! while game.phase() == RecallPhase::Presenting {
//!     game.tick(TICK_MS);
//!     let _ = game.take_last_event();
//! }
//! assert_eq!(game.phase(), RecallPhase::AwaitingInput);
//! ```
//!
//! # Timing
//!
//! The recall game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Step Gap**: 600ms of darkness before each presented step
//! - **Step Lit**: 400ms with the pad lit
//!
//! Call [`RecallGame::tick`](recall::RecallGame::tick) every frame with elapsed time.

pub mod counting;
pub mod matching;
pub mod number_words;
pub mod puzzle;
pub mod quiz;
pub mod recall;
pub mod rng;
pub mod shape_sort;
pub mod snapshot;
pub mod streak;
pub mod word_build;

pub use tui_playroom_types as types;

// Re-export commonly used types for convenience
pub use counting::{CountingAnswer, CountingGame, CountingOutcome};
pub use matching::{MatchOutcome, NumberMatch};
pub use number_words::number_word;
pub use puzzle::Puzzle;
pub use quiz::{Quiz, QuizAnswer, QuizOutcome};
pub use recall::RecallGame;
pub use rng::SimpleRng;
pub use shape_sort::{ShapeItem, ShapeSort, SortBin, SortMode, SortOutcome};
pub use snapshot::RecallSnapshot;
pub use streak::StreakTracker;
pub use word_build::{PlaceOutcome, PoolLetter, WordBuilder};
