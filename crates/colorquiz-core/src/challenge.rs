//! Concrete per-round challenges and the evaluation of player submissions.

use crate::audio::SoundCue;
use crate::color::Color;
use crate::generator::{Question, generate_question_with, random_color};
use crate::mix::{MIX_ROUND_SCORE, MixMode, MixPuzzle};
use crate::plan::{GameRound, QuestionType};
use crate::saturation::SaturationPuzzle;
use crate::scoring::{AnswerResult, color_distance, match_result, score_from_distance};
use crate::session::{AnswerRecord, SelectedColor};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from evaluating a submission against a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{got} submission does not fit a {expected:?} round")]
    KindMismatch {
        expected: QuestionType,
        got: &'static str,
    },
    #[error("{0} is not one of the options")]
    NotAnOption(Color),
}

/// Reproduce-the-color challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchChallenge {
    pub target: Color,
    /// Where the player's picker starts.
    pub start: Color,
}

/// A generated round, ready to be shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Challenge {
    Quiz(Question),
    Match(MatchChallenge),
    Mix(MixPuzzle),
    SortBySaturation(SaturationPuzzle),
}

/// A player's answer to a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Chosen quiz option.
    Pick(Color),
    /// Color produced with the picker.
    Guess(Color),
    /// Contents of the two mixing slots.
    Mix(Color, Color),
    /// Confirm the current saturation order.
    ConfirmOrder,
}

impl Submission {
    fn kind(&self) -> &'static str {
        match self {
            Submission::Pick(_) => "Pick",
            Submission::Guess(_) => "Guess",
            Submission::Mix(..) => "Mix",
            Submission::ConfirmOrder => "ConfirmOrder",
        }
    }
}

/// Result of evaluating a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub points: u32,
    pub record: AnswerRecord,
    pub cue: SoundCue,
    /// Distance percentage for match rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Outcome {
    fn new(points: u32, record: AnswerRecord) -> Self {
        Self {
            points,
            record,
            cue: SoundCue::for_points(points),
            distance: None,
        }
    }
}

impl Challenge {
    /// Build the challenge for a round of the plan, mixing by average.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, round: &GameRound) -> Self {
        Self::generate_with(rng, round, MixMode::default())
    }

    /// Build the challenge for a round, mixing puzzles in `mix_mode`.
    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        round: &GameRound,
        mix_mode: MixMode,
    ) -> Self {
        match round.question_type {
            QuestionType::Quiz => Challenge::Quiz(generate_question_with(rng, round.difficulty)),
            QuestionType::Match => {
                let target = generate_question_with(rng, round.difficulty).answer;
                Challenge::Match(MatchChallenge {
                    target,
                    start: random_color(rng),
                })
            }
            QuestionType::MathExpression => Challenge::Mix(MixPuzzle::generate_in(rng, mix_mode)),
            QuestionType::SortBySaturation => {
                Challenge::SortBySaturation(SaturationPuzzle::generate(rng))
            }
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            Challenge::Quiz(_) => QuestionType::Quiz,
            Challenge::Match(_) => QuestionType::Match,
            Challenge::Mix(_) => QuestionType::MathExpression,
            Challenge::SortBySaturation(_) => QuestionType::SortBySaturation,
        }
    }

    pub fn max_points(&self) -> u32 {
        self.question_type().max_points()
    }

    /// Score a submission. The challenge itself is left untouched.
    pub fn evaluate(&self, submission: &Submission) -> Result<Outcome, SubmissionError> {
        let outcome = match (self, submission) {
            (Challenge::Quiz(question), Submission::Pick(picked)) => {
                if !question.options.contains(picked) {
                    return Err(SubmissionError::NotAnOption(*picked));
                }
                let correct = question.is_correct(*picked);
                Outcome::new(
                    u32::from(correct),
                    AnswerRecord::single(question.answer, *picked, AnswerResult::from_bool(correct)),
                )
            }
            (Challenge::Match(challenge), Submission::Guess(guess)) => {
                let distance = color_distance(challenge.target, *guess);
                let mut outcome = Outcome::new(
                    score_from_distance(distance),
                    AnswerRecord::single(challenge.target, *guess, match_result(distance)),
                );
                outcome.distance = Some(distance);
                outcome
            }
            (Challenge::Mix(puzzle), Submission::Mix(a, b)) => {
                let result = puzzle.result(*a, *b);
                let points = if result == AnswerResult::Correct {
                    MIX_ROUND_SCORE
                } else {
                    0
                };
                Outcome::new(
                    points,
                    AnswerRecord {
                        question_color: puzzle.target,
                        selected: vec![
                            SelectedColor::new(*a, result),
                            SelectedColor::new(*b, result),
                        ],
                        correct: puzzle.target,
                    },
                )
            }
            (Challenge::SortBySaturation(puzzle), Submission::ConfirmOrder) => {
                let sorted = puzzle.is_sorted();
                let result = AnswerResult::from_bool(sorted);
                let colors = puzzle.colors();
                let least_saturated = colors
                    .iter()
                    .copied()
                    .min_by(|a, b| a.to_hsl().s.total_cmp(&b.to_hsl().s))
                    .unwrap_or_default();
                Outcome::new(
                    u32::from(sorted),
                    AnswerRecord {
                        question_color: colors.first().copied().unwrap_or_default(),
                        selected: colors
                            .iter()
                            .map(|c| SelectedColor::new(*c, result))
                            .collect(),
                        correct: least_saturated,
                    },
                )
            }
            (challenge, submission) => {
                return Err(SubmissionError::KindMismatch {
                    expected: challenge.question_type(),
                    got: submission.kind(),
                });
            }
        };

        log::debug!(
            "{:?} answer scored {} point(s)",
            self.question_type(),
            outcome.points
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;
    use crate::saturation::Swatch;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiz() -> Challenge {
        Challenge::Quiz(Question {
            answer: Color::new(0x33, 0x33, 0x33),
            options: vec![
                Color::new(0x11, 0x11, 0x11),
                Color::new(0x33, 0x33, 0x33),
                Color::new(0xAA, 0xAA, 0xAA),
                Color::new(0xEE, 0xEE, 0xEE),
            ],
        })
    }

    #[test]
    fn test_generate_follows_round_type() {
        let mut rng = StdRng::seed_from_u64(31);
        for question_type in [
            QuestionType::Quiz,
            QuestionType::Match,
            QuestionType::MathExpression,
            QuestionType::SortBySaturation,
        ] {
            let challenge = Challenge::generate(&mut rng, &GameRound::new(question_type, 3));
            assert_eq!(challenge.question_type(), question_type);
        }
    }

    #[test]
    fn test_root_mean_square_mix_round_accepts_its_pair() {
        let mut rng = StdRng::seed_from_u64(33);
        let round = GameRound::new(QuestionType::MathExpression, 1);
        for _ in 0..20 {
            let challenge = Challenge::generate_with(&mut rng, &round, MixMode::RootMeanSquare);
            let Challenge::Mix(puzzle) = challenge else {
                panic!("expected a mix challenge");
            };
            assert_eq!(puzzle.mode, MixMode::RootMeanSquare);

            let palette = puzzle.palette.clone();
            let (a, b) = palette
                .iter()
                .enumerate()
                .find_map(|(i, a)| {
                    palette[i + 1..]
                        .iter()
                        .find(|b| puzzle.is_correct(*a, **b))
                        .map(|b| (*a, *b))
                })
                .unwrap();

            let outcome = Challenge::Mix(puzzle).evaluate(&Submission::Mix(a, b)).unwrap();
            assert_eq!(outcome.points, MIX_ROUND_SCORE);
        }
    }

    #[test]
    fn test_quiz_correct_pick() {
        let outcome = quiz().evaluate(&Submission::Pick(Color::new(0x33, 0x33, 0x33))).unwrap();
        assert_eq!(outcome.points, 1);
        assert_eq!(outcome.cue, SoundCue::CorrectAnswer);
        assert_eq!(outcome.record.selected[0].result, AnswerResult::Correct);
        assert_eq!(outcome.record.correct, Color::new(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_quiz_wrong_pick() {
        let outcome = quiz().evaluate(&Submission::Pick(Color::new(0xEE, 0xEE, 0xEE))).unwrap();
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.cue, SoundCue::WrongAnswer);
        assert_eq!(outcome.record.selected[0].color, Color::new(0xEE, 0xEE, 0xEE));
        assert_eq!(outcome.record.selected[0].result, AnswerResult::Wrong);
    }

    #[test]
    fn test_quiz_rejects_unknown_option() {
        let err = quiz().evaluate(&Submission::Pick(Color::WHITE)).unwrap_err();
        assert_eq!(err, SubmissionError::NotAnOption(Color::WHITE));
    }

    #[test]
    fn test_kind_mismatch() {
        let err = quiz().evaluate(&Submission::ConfirmOrder).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::KindMismatch {
                expected: QuestionType::Quiz,
                got: "ConfirmOrder"
            }
        );
    }

    #[test]
    fn test_match_scoring() {
        let challenge = Challenge::Match(MatchChallenge {
            target: Color::new(100, 100, 100),
            start: Color::BLACK,
        });

        let exact = challenge.evaluate(&Submission::Guess(Color::new(100, 100, 100))).unwrap();
        assert_eq!(exact.points, 5);
        assert_eq!(exact.distance, Some(0.0));
        assert_eq!(exact.record.selected[0].result, AnswerResult::Correct);
        assert_eq!(exact.cue, SoundCue::CorrectAnswer);

        // 40 per channel is roughly 15.7% of the max distance
        let close = challenge.evaluate(&Submission::Guess(Color::new(140, 140, 140))).unwrap();
        assert_eq!(close.record.selected[0].result, AnswerResult::Partial);
        assert!(close.points >= 1 && close.points < 5);

        let far = challenge.evaluate(&Submission::Guess(Color::WHITE)).unwrap();
        assert_eq!(far.points, 0);
        assert_eq!(far.record.selected[0].result, AnswerResult::Wrong);
        assert_eq!(far.cue, SoundCue::WrongAnswer);
    }

    #[test]
    fn test_mix_scoring() {
        let challenge = Challenge::Mix(MixPuzzle {
            target: Color::new(0x80, 0x00, 0x80),
            palette: crate::mix::BASE_COLORS.to_vec(),
            mode: crate::mix::MixMode::Average,
        });
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);

        let outcome = challenge.evaluate(&Submission::Mix(blue, red)).unwrap();
        assert_eq!(outcome.points, MIX_ROUND_SCORE);
        assert_eq!(outcome.record.selected.len(), 2);
        assert_eq!(outcome.record.selected[0].color, blue);

        let wrong = challenge.evaluate(&Submission::Mix(red, red)).unwrap();
        assert_eq!(wrong.points, 0);
        assert_eq!(wrong.record.selected[1].result, AnswerResult::Wrong);
    }

    #[test]
    fn test_sort_scoring() {
        let swatches: Vec<Swatch> = [0.3, 0.5, 0.7, 0.9]
            .iter()
            .enumerate()
            .map(|(id, s)| Swatch {
                id,
                color: Hsl::new(10.0, *s, 0.5).to_color(),
            })
            .collect();
        let least = swatches[0].color;
        let mut challenge = Challenge::SortBySaturation(SaturationPuzzle::from_swatches(swatches));

        let sorted = challenge.evaluate(&Submission::ConfirmOrder).unwrap();
        assert_eq!(sorted.points, 1);
        assert_eq!(sorted.record.correct, least);
        assert_eq!(sorted.record.selected.len(), 4);

        if let Challenge::SortBySaturation(puzzle) = &mut challenge {
            puzzle.swap(0, 2);
        }
        let unsorted = challenge.evaluate(&Submission::ConfirmOrder).unwrap();
        assert_eq!(unsorted.points, 0);
        assert_eq!(unsorted.record.correct, least);
        assert_ne!(unsorted.record.question_color, least);
    }

    #[test]
    fn test_max_points() {
        assert_eq!(quiz().max_points(), 1);
        let mut rng = StdRng::seed_from_u64(32);
        let challenge = Challenge::generate(&mut rng, &GameRound::new(QuestionType::Match, 5));
        assert_eq!(challenge.max_points(), 5);
    }
}
