//! Narrator - encouraging phrases, optionally spoken aloud
//!
//! Pools of upbeat phrases for the moments the games celebrate or
//! console. The narrator always hands the chosen phrase back so the host
//! can show it on screen; speech only happens while enabled.

use tui_playroom_core::SimpleRng;

use crate::voice::{Voice, VoiceTuning};

/// Praise for a single correct answer.
pub const EXCELLENT: &[&str] = &[
    "Excellent work!",
    "Amazing job!",
    "You're a superstar!",
    "Fantastic!",
    "Outstanding!",
    "Incredible!",
    "You did it perfectly!",
];

/// Celebration for finishing a level.
pub const LEVEL_COMPLETE: &[&str] = &[
    "Level complete! You're amazing!",
    "Woohoo! Great job finishing this level!",
    "Awesome! You're getting better and better!",
    "Super cool! Ready for the next challenge?",
    "Brilliant work! You're so smart!",
];

/// Comfort after a miss.
pub const ENCOURAGEMENT: &[&str] = &[
    "Keep trying! You can do it!",
    "Almost there! Don't give up!",
    "Good effort! Try again!",
    "You're learning so well!",
    "Practice makes perfect!",
];

/// The big finish, for completing a whole session.
pub const GAME_COMPLETE: &[&str] = &[
    "Congratulations! You finished everything!",
    "Wow! You completed all the challenges!",
    "Amazing! You're a learning champion!",
    "Fantastic! You should be proud of yourself!",
];

/// Picks phrases and speaks them through the configured voice.
pub struct Narrator {
    voice: Box<dyn Voice>,
    tuning: VoiceTuning,
    enabled: bool,
    rng: SimpleRng,
}

impl Narrator {
    pub fn new(voice: Box<dyn Voice>, tuning: VoiceTuning, seed: u32) -> Self {
        Self {
            voice,
            tuning,
            enabled: true,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Pick from the pool and speak when enabled. The phrase comes back
    /// either way so the host can display it.
    fn announce(&mut self, pool: &'static [&'static str]) -> &'static str {
        let phrase = pool[self.rng.next_range(pool.len() as u32) as usize];
        if self.enabled {
            self.voice.say(phrase, self.tuning);
        }
        phrase
    }

    pub fn excellent(&mut self) -> &'static str {
        self.announce(EXCELLENT)
    }

    pub fn level_complete(&mut self) -> &'static str {
        self.announce(LEVEL_COMPLETE)
    }

    pub fn encouragement(&mut self) -> &'static str {
        self.announce(ENCOURAGEMENT)
    }

    pub fn game_complete(&mut self) -> &'static str {
        self.announce(GAME_COMPLETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::NullVoice;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records spoken phrases for inspection.
    #[derive(Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Voice for Recorder {
        fn say(&mut self, text: &str, _tuning: VoiceTuning) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    fn narrator_with_log(seed: u32) -> (Narrator, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let narrator = Narrator::new(
            Box::new(Recorder(log.clone())),
            VoiceTuning::default(),
            seed,
        );
        (narrator, log)
    }

    #[test]
    fn test_phrases_come_from_the_right_pool() {
        let mut narrator = Narrator::new(Box::new(NullVoice), VoiceTuning::default(), 1);

        assert!(EXCELLENT.contains(&narrator.excellent()));
        assert!(LEVEL_COMPLETE.contains(&narrator.level_complete()));
        assert!(ENCOURAGEMENT.contains(&narrator.encouragement()));
        assert!(GAME_COMPLETE.contains(&narrator.game_complete()));
    }

    #[test]
    fn test_enabled_narrator_speaks_the_returned_phrase() {
        let (mut narrator, log) = narrator_with_log(7);

        let phrase = narrator.excellent();
        assert_eq!(log.borrow().as_slice(), &[phrase.to_string()]);
    }

    #[test]
    fn test_disabled_narrator_stays_silent_but_still_picks() {
        let (mut narrator, log) = narrator_with_log(7);
        narrator.set_enabled(false);

        let phrase = narrator.encouragement();
        assert!(ENCOURAGEMENT.contains(&phrase));
        assert!(log.borrow().is_empty());

        // Re-enabling speaks again
        narrator.set_enabled(true);
        let phrase = narrator.level_complete();
        assert_eq!(log.borrow().as_slice(), &[phrase.to_string()]);
    }

    #[test]
    fn test_same_seed_same_phrases() {
        let mut a = Narrator::new(Box::new(NullVoice), VoiceTuning::default(), 42);
        let mut b = Narrator::new(Box::new(NullVoice), VoiceTuning::default(), 42);

        for _ in 0..10 {
            assert_eq!(a.excellent(), b.excellent());
        }
    }
}
