//! Distance-based scoring for color matching.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Largest possible Euclidean distance between two RGB colors (255 * sqrt(3)).
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Best score a single match round can award.
pub const MAX_MATCH_SCORE: u32 = 5;

/// Distance bands (inclusive upper bound, score), best first.
const SCORE_BANDS: [(f64, u32); 5] = [(5.0, 5), (7.0, 4), (10.0, 3), (15.0, 2), (20.0, 1)];

/// Distance at or below which a match counts as exact.
const CORRECT_THRESHOLD: f64 = 5.0;
/// Distance above which a match counts as a miss.
const PARTIAL_THRESHOLD: f64 = 20.0;

/// Verdict for a single selected color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerResult {
    Correct,
    Wrong,
    Partial,
}

impl AnswerResult {
    /// Correct or wrong, from a boolean check.
    pub fn from_bool(correct: bool) -> Self {
        if correct {
            AnswerResult::Correct
        } else {
            AnswerResult::Wrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerResult::Correct => "correct",
            AnswerResult::Wrong => "wrong",
            AnswerResult::Partial => "partial",
        }
    }
}

/// Distance between two colors as a percentage (0-100) of the largest possible distance.
pub fn color_distance(a: Color, b: Color) -> f64 {
    let sum: f64 = a
        .channels()
        .iter()
        .zip(b.channels().iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum();
    (sum.sqrt() / MAX_RGB_DISTANCE) * 100.0
}

/// Stepped score (0-5) for a distance percentage.
pub fn score_from_distance(distance: f64) -> u32 {
    SCORE_BANDS
        .iter()
        .find(|(limit, _)| distance <= *limit)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

/// Verdict for a match guess at the given distance.
pub fn match_result(distance: f64) -> AnswerResult {
    if distance <= CORRECT_THRESHOLD {
        AnswerResult::Correct
    } else if distance <= PARTIAL_THRESHOLD {
        AnswerResult::Partial
    } else {
        AnswerResult::Wrong
    }
}

/// Similarity shown to the player ("Match: 97.12%"), rounded to two decimals.
pub fn match_percentage(distance: f64) -> f64 {
    ((100.0 - distance) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        for color in [Color::BLACK, Color::WHITE, Color::new(12, 34, 56)] {
            assert_eq!(color_distance(color, color), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Color::new(200, 10, 90);
        let b = Color::new(15, 180, 33);
        assert_eq!(color_distance(a, b), color_distance(b, a));
    }

    #[test]
    fn test_distance_extremes() {
        let d = color_distance(Color::BLACK, Color::WHITE);
        assert!((d - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_from_distance(0.0), 5);
        assert_eq!(score_from_distance(5.0), 5);
        assert_eq!(score_from_distance(5.01), 4);
        assert_eq!(score_from_distance(7.0), 4);
        assert_eq!(score_from_distance(10.0), 3);
        assert_eq!(score_from_distance(15.0), 2);
        assert_eq!(score_from_distance(20.0), 1);
        assert_eq!(score_from_distance(20.5), 0);
        assert_eq!(score_from_distance(100.0), 0);
    }

    #[test]
    fn test_score_is_non_increasing() {
        let mut previous = score_from_distance(0.0);
        let mut d = 0.0;
        while d <= 100.0 {
            let score = score_from_distance(d);
            assert!(score <= previous, "score rose at {d}");
            previous = score;
            d += 0.25;
        }
    }

    #[test]
    fn test_match_result_bands() {
        assert_eq!(match_result(0.0), AnswerResult::Correct);
        assert_eq!(match_result(5.0), AnswerResult::Correct);
        assert_eq!(match_result(12.0), AnswerResult::Partial);
        assert_eq!(match_result(20.0), AnswerResult::Partial);
        assert_eq!(match_result(20.1), AnswerResult::Wrong);
    }

    #[test]
    fn test_match_percentage_rounding() {
        assert_eq!(match_percentage(2.876), 97.12);
        assert_eq!(match_percentage(0.0), 100.0);
    }

    #[test]
    fn test_answer_result_serde() {
        let json = serde_json::to_string(&AnswerResult::Partial).unwrap();
        assert_eq!(json, "\"partial\"");
        assert_eq!(AnswerResult::from_bool(true), AnswerResult::Correct);
        assert_eq!(AnswerResult::from_bool(false).label(), "wrong");
    }
}
