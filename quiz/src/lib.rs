//! Weakness quiz.
//!
//! Each question shows a single defending type and asks for a type that hits
//! it super effectively. Easy mode offers four choices; hard mode takes free
//! text, matched against the English id or the Spanish label.
//!
//! A correct answer adds one point, a wrong one resets the streak to zero.
//! Answers that do not fit the session's mode are ignored.

use rand::Rng;
use rand::seq::SliceRandom;
use typedex_chart::{Type, analyze_defense};

/// Number of choices offered in easy mode
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pick one of [`OPTION_COUNT`] types
    #[default]
    Easy,
    /// Type the answer
    Hard,
}

/// One quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub defender: Type,
    /// Every type dealing more than 1x to `defender`
    pub correct: Vec<Type>,
    /// Distinct choices for easy mode, containing one correct answer when there is one
    pub options: Vec<Type>,
}

impl Question {
    pub fn is_correct(&self, answer: Type) -> bool {
        self.correct.contains(&answer)
    }

    /// Match free text against a correct answer's id or label, ignoring case
    pub fn is_correct_text(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        if answer.is_empty() {
            return false;
        }
        self.correct
            .iter()
            .any(|t| t.id() == answer || t.label().to_lowercase() == answer)
    }
}

/// Draw a random defending type and build its question
pub fn generate_question<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let defender = Type::ALL[rng.gen_range(0..Type::ALL.len())];
    question_for(defender, rng)
}

/// Build a question for a given defending type
pub fn question_for<R: Rng + ?Sized>(defender: Type, rng: &mut R) -> Question {
    let correct = analyze_defense(&[defender]).weaknesses;

    let mut options = Vec::with_capacity(OPTION_COUNT);
    if let Some(answer) = correct.choose(rng) {
        options.push(*answer);
    }
    while options.len() < OPTION_COUNT {
        let candidate = Type::ALL[rng.gen_range(0..Type::ALL.len())];
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options.shuffle(rng);

    Question {
        defender,
        correct,
        options,
    }
}

/// Result of answering a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    /// The question that was answered
    pub question: Question,
    /// Score after this answer
    pub score: u32,
}

/// A running quiz: current question, mode and streak
#[derive(Debug, Clone)]
pub struct QuizSession<R> {
    rng: R,
    mode: Mode,
    score: u32,
    best: u32,
    question: Question,
}

impl<R: Rng> QuizSession<R> {
    /// Start a quiz with a fresh question and zero score
    pub fn start(mode: Mode, mut rng: R) -> Self {
        let question = generate_question(&mut rng);
        Self {
            rng,
            mode,
            score: 0,
            best: 0,
            question,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes; the score resets and a new question is drawn
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.score = 0;
        self.question = generate_question(&mut self.rng);
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Longest streak reached in this session
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Answer by picking a type; `None` outside easy mode
    pub fn answer(&mut self, answer: Type) -> Option<Feedback> {
        if self.mode != Mode::Easy {
            return None;
        }
        let correct = self.question.is_correct(answer);
        Some(self.submit(correct))
    }

    /// Answer by typing a name; `None` outside hard mode or for blank input
    pub fn answer_text(&mut self, answer: &str) -> Option<Feedback> {
        if self.mode != Mode::Hard || answer.trim().is_empty() {
            return None;
        }
        let correct = self.question.is_correct_text(answer);
        Some(self.submit(correct))
    }

    fn submit(&mut self, correct: bool) -> Feedback {
        if correct {
            self.score += 1;
            self.best = self.best.max(self.score);
        } else {
            self.score = 0;
        }

        let next = generate_question(&mut self.rng);
        let question = std::mem::replace(&mut self.question, next);
        Feedback {
            correct,
            question,
            score: self.score,
        }
    }
}
