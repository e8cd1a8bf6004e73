//! Question generation with difficulty-dependent color strategies.
//!
//! Each strategy constrains how the six hex digits of a color are chosen.
//! Decoys come from the same strategy as the answer, so at low difficulty
//! every option looks alike in structure (e.g. all grays) and the player has
//! to tell them apart by the digits alone.

use crate::color::Color;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Number of options in a generated question.
pub const OPTION_COUNT: usize = 4;

/// Color generation strategy, selected by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// All six digits equal (`#777777`).
    Grayscale,
    /// Two halves of three equal digits (`#AAA333`).
    Halves,
    /// Three pairs of equal digits (`#22BB55`).
    Pairs,
    /// One repeated digit pair at a random position, the rest random.
    RepeatedPair,
    /// Every digit random.
    Random,
}

impl Strategy {
    /// Map a difficulty (1-5) to its strategy.
    pub fn from_difficulty(difficulty: i32) -> Option<Self> {
        match difficulty {
            1 => Some(Strategy::Grayscale),
            2 => Some(Strategy::Halves),
            3 => Some(Strategy::Pairs),
            4 => Some(Strategy::RepeatedPair),
            5 => Some(Strategy::Random),
            _ => None,
        }
    }

    /// Difficulty level this strategy corresponds to.
    pub fn difficulty(self) -> i32 {
        match self {
            Strategy::Grayscale => 1,
            Strategy::Halves => 2,
            Strategy::Pairs => 3,
            Strategy::RepeatedPair => 4,
            Strategy::Random => 5,
        }
    }

    /// Produce one color following this strategy.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> Color {
        match self {
            Strategy::Grayscale => {
                let d = unique_hex_digit(rng, &[]);
                Color::from_nibbles([d; 6])
            }
            Strategy::Halves => {
                let a = unique_hex_digit(rng, &[]);
                let b = unique_hex_digit(rng, &[a]);
                Color::from_nibbles([a, a, a, b, b, b])
            }
            Strategy::Pairs => {
                let a = unique_hex_digit(rng, &[]);
                let b = unique_hex_digit(rng, &[a]);
                let c = unique_hex_digit(rng, &[a, b]);
                Color::from_nibbles([a, a, b, b, c, c])
            }
            Strategy::RepeatedPair => {
                let mut digits = [0u8; 6];
                for d in digits.iter_mut() {
                    *d = random_hex_digit(rng);
                }
                let repeated = random_hex_digit(rng);
                let start = rng.gen_range(0..5);
                digits[start] = repeated;
                digits[start + 1] = repeated;
                Color::from_nibbles(digits)
            }
            Strategy::Random => random_color(rng),
        }
    }
}

/// A multiple-choice question: the answer plus its decoys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub answer: Color,
    /// Presentation order; always contains `answer`.
    pub options: Vec<Color>,
}

impl Question {
    /// Fallback question for difficulties without a strategy.
    pub fn degenerate() -> Self {
        Self {
            answer: Color::BLACK,
            options: vec![Color::BLACK],
        }
    }

    /// Check whether a picked color is the answer.
    pub fn is_correct(&self, picked: Color) -> bool {
        picked == self.answer
    }
}

/// A random hex digit value (0-15).
pub fn random_hex_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..16)
}

/// A random hex digit value not contained in `taken`.
///
/// `taken` must leave at least one digit free; with fewer than 16 entries
/// this always terminates.
pub fn unique_hex_digit<R: Rng + ?Sized>(rng: &mut R, taken: &[u8]) -> u8 {
    loop {
        let digit = random_hex_digit(rng);
        if !taken.contains(&digit) {
            return digit;
        }
    }
}

/// A uniformly random 24-bit color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255))
}

/// Generate a question for `difficulty` using the thread-local RNG.
pub fn generate_question(difficulty: i32) -> Question {
    generate_question_with(&mut rand::thread_rng(), difficulty)
}

/// Generate a question for `difficulty`.
///
/// Unknown difficulties produce [`Question::degenerate`] instead of failing.
pub fn generate_question_with<R: Rng + ?Sized>(rng: &mut R, difficulty: i32) -> Question {
    let Some(strategy) = Strategy::from_difficulty(difficulty) else {
        log::debug!("No color strategy for difficulty {difficulty}, using fallback question");
        return Question::degenerate();
    };

    let answer = strategy.generate(rng);
    let mut options = vec![answer];
    while options.len() < OPTION_COUNT {
        let color = strategy.generate(rng);
        if !options.contains(&color) {
            options.push(color);
        }
    }
    options.shuffle(rng);

    log::debug!("Generated {strategy:?} question with answer {answer}");
    Question { answer, options }
}
