//! Multiple-choice quiz over an ordered set of items
//!
//! Questions walk the items in order; each one offers the right item plus
//! up to three distinct decoys, shuffled. The engine deals in item indices
//! only, so the host decides what an item looks like (letters, pictures).
//! Every answer is revealed and then advanced past, right or wrong.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::OPTION_COUNT;

/// The recorded answer for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswer {
    pub choice: usize,
    pub correct: bool,
}

/// Result of answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: bool,
    /// The right item, for the reveal
    pub answer: usize,
    /// Whether this was the final question
    pub last_question: bool,
}

/// One pass through the items.
#[derive(Debug, Clone)]
pub struct Quiz {
    total: usize,
    current: usize,
    options: ArrayVec<usize, OPTION_COUNT>,
    answered: Option<QuizAnswer>,
    score: u32,
    finished: bool,
    rng: SimpleRng,
}

impl Quiz {
    /// A quiz over `total` items. An empty item set is born finished.
    pub fn new(seed: u32, total: usize) -> Self {
        let mut quiz = Self {
            total,
            current: 0,
            options: ArrayVec::new(),
            answered: None,
            score: 0,
            finished: total == 0,
            rng: SimpleRng::new(seed),
        };
        if !quiz.finished {
            quiz.next_options();
        }
        quiz
    }

    fn next_options(&mut self) {
        self.options.clear();
        self.options.push(self.current);
        // Decoys are distinct items; small pools just offer fewer buttons
        while self.options.len() < OPTION_COUNT.min(self.total) {
            let candidate = self.rng.next_range(self.total as u32) as usize;
            if !self.options.contains(&candidate) {
                self.options.push(candidate);
            }
        }
        self.rng.shuffle(&mut self.options);
        self.answered = None;
    }

    /// Answer with one of the offered items. Returns `None` when the
    /// value is not an option, the question was already answered, or the
    /// quiz is over.
    pub fn answer(&mut self, choice: usize) -> Option<QuizOutcome> {
        if self.finished || self.answered.is_some() || !self.options.contains(&choice) {
            return None;
        }

        let correct = choice == self.current;
        self.answered = Some(QuizAnswer { choice, correct });
        if correct {
            self.score += 1;
        }

        Some(QuizOutcome {
            correct,
            answer: self.current,
            last_question: self.current + 1 >= self.total,
        })
    }

    /// Move past an answered question. The final advance finishes the quiz.
    pub fn advance(&mut self) -> bool {
        if self.finished || self.answered.is_none() {
            return false;
        }
        self.current += 1;
        if self.current >= self.total {
            self.finished = true;
            self.answered = None;
        } else {
            self.next_options();
        }
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.finished = self.total == 0;
        self.answered = None;
        if !self.finished {
            self.next_options();
        }
    }

    /// Item index the current question asks about.
    pub fn question(&self) -> usize {
        self.current
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    pub fn answered(&self) -> Option<QuizAnswer> {
        self.answered
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_question_offers_four_distinct_options() {
        let quiz = Quiz::new(1, 26);

        assert_eq!(quiz.question(), 0);
        assert_eq!(quiz.options().len(), 4);
        assert!(quiz.options().contains(&0));
        for (i, a) in quiz.options().iter().enumerate() {
            assert!(*a < 26);
            for b in &quiz.options()[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_small_pools_offer_fewer_options() {
        let quiz = Quiz::new(1, 3);
        assert_eq!(quiz.options().len(), 3);

        let solo = Quiz::new(1, 1);
        assert_eq!(solo.options(), &[0]);
    }

    #[test]
    fn test_correct_answer_scores_one() {
        let mut quiz = Quiz::new(5, 26);

        let outcome = quiz.answer(0).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.answer, 0);
        assert!(!outcome.last_question);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_wrong_answer_reveals_the_right_item() {
        let mut quiz = Quiz::new(5, 26);
        let wrong = *quiz.options().iter().find(|&&o| o != 0).unwrap();

        let outcome = quiz.answer(wrong).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.answer, 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(
            quiz.answered(),
            Some(QuizAnswer {
                choice: wrong,
                correct: false
            })
        );
    }

    #[test]
    fn test_one_answer_per_question() {
        let mut quiz = Quiz::new(5, 26);
        quiz.answer(0).unwrap();

        assert!(quiz.answer(0).is_none());
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_answer_must_be_an_option() {
        let mut quiz = Quiz::new(5, 26);
        let outside = (0..26).find(|i| !quiz.options().contains(i)).unwrap();

        assert!(quiz.answer(outside).is_none());
        assert_eq!(quiz.answered(), None);
    }

    #[test]
    fn test_questions_walk_the_items_in_order() {
        let mut quiz = Quiz::new(5, 26);

        assert!(!quiz.advance());

        quiz.answer(0).unwrap();
        assert!(quiz.advance());
        assert_eq!(quiz.question(), 1);
        assert!(quiz.options().contains(&1));
        assert_eq!(quiz.answered(), None);
    }

    #[test]
    fn test_quiz_finishes_after_the_last_question() {
        let mut quiz = Quiz::new(7, 3);

        for expected in 0..3 {
            assert_eq!(quiz.question(), expected);
            let outcome = quiz.answer(expected).unwrap();
            assert_eq!(outcome.last_question, expected == 2);
            assert!(quiz.advance());
        }

        assert!(quiz.finished());
        assert_eq!(quiz.score(), 3);
        assert!(quiz.answer(0).is_none());
        assert!(!quiz.advance());
    }

    #[test]
    fn test_wrong_answers_still_advance() {
        let mut quiz = Quiz::new(7, 3);

        while !quiz.finished() {
            let question = quiz.question();
            let choice = quiz
                .options()
                .iter()
                .copied()
                .find(|&o| o != question)
                .unwrap();
            quiz.answer(choice).unwrap();
            quiz.advance();
        }

        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_empty_quiz_is_born_finished() {
        let quiz = Quiz::new(1, 0);

        assert!(quiz.finished());
        assert!(quiz.options().is_empty());
    }

    #[test]
    fn test_reset_restarts_from_the_top() {
        let mut quiz = Quiz::new(7, 5);
        quiz.answer(0).unwrap();
        quiz.advance();

        quiz.reset();

        assert_eq!(quiz.question(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.finished());
        assert!(quiz.options().contains(&0));
    }
}
