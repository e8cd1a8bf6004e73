//! Round descriptors and the ordered game plan.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Pause before a round without auto-advance accepts "next round".
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// How long a quiz answer stays highlighted before the next round.
pub const QUIZ_REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// Errors from building or loading a game plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Game plan has no rounds")]
    Empty,
    #[error("Invalid game plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The mini-game played in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    /// Pick the hex code of a swatch from four options.
    Quiz,
    /// Reproduce a swatch as closely as possible.
    Match,
    /// Mix two palette colors into the target.
    MathExpression,
    /// Order swatches from least to most saturated.
    SortBySaturation,
}

impl QuestionType {
    /// Best score a round of this type can award.
    pub fn max_points(&self) -> u32 {
        match self {
            QuestionType::Quiz => 1,
            QuestionType::Match => crate::scoring::MAX_MATCH_SCORE,
            QuestionType::MathExpression => crate::mix::MIX_ROUND_SCORE,
            QuestionType::SortBySaturation => 1,
        }
    }

    /// Whether the round moves on by itself once the answer has been shown.
    pub fn auto_advances(&self) -> bool {
        matches!(self, QuestionType::Quiz)
    }

    /// Pause between submitting an answer and the next round.
    pub fn reveal_delay(&self) -> Duration {
        if self.auto_advances() {
            QUIZ_REVEAL_DELAY
        } else {
            ADVANCE_DELAY
        }
    }

    /// Instruction shown above the round.
    pub fn title(&self) -> &'static str {
        match self {
            QuestionType::Quiz => "Which hex code is this color?",
            QuestionType::Match => "Match the color as closely as possible",
            QuestionType::MathExpression => "Mix colors to get the target one",
            QuestionType::SortBySaturation => "Sort colors by saturation (from lower to higher)",
        }
    }
}

/// One entry of the game plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    pub question_type: QuestionType,
    pub difficulty: i32,
}

impl GameRound {
    pub const fn new(question_type: QuestionType, difficulty: i32) -> Self {
        Self {
            question_type,
            difficulty,
        }
    }
}

/// Non-empty ordered sequence of rounds making up a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GameRound>", into = "Vec<GameRound>")]
pub struct GamePlan {
    rounds: Vec<GameRound>,
}

impl Default for GamePlan {
    fn default() -> Self {
        Self {
            rounds: vec![
                GameRound::new(QuestionType::Quiz, 1),
                GameRound::new(QuestionType::Quiz, 2),
                GameRound::new(QuestionType::Quiz, 3),
                GameRound::new(QuestionType::Quiz, 4),
                GameRound::new(QuestionType::MathExpression, 1),
                GameRound::new(QuestionType::Match, 5),
            ],
        }
    }
}

impl GamePlan {
    pub fn new(rounds: Vec<GameRound>) -> Result<Self, PlanError> {
        if rounds.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(Self { rounds })
    }

    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let rounds: Vec<GameRound> = serde_json::from_str(json)?;
        Self::new(rounds)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rounds)
    }

    pub fn rounds(&self) -> &[GameRound] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Always false for a constructed plan.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Round by 1-based number.
    pub fn get(&self, round: u32) -> Option<GameRound> {
        let index = usize::try_from(round).ok()?.checked_sub(1)?;
        self.rounds.get(index).copied()
    }

    /// Sum of the best score of every round.
    pub fn max_score(&self) -> u32 {
        self.rounds.iter().map(|r| r.question_type.max_points()).sum()
    }
}

impl TryFrom<Vec<GameRound>> for GamePlan {
    type Error = PlanError;

    fn try_from(rounds: Vec<GameRound>) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl From<GamePlan> for Vec<GameRound> {
    fn from(plan: GamePlan) -> Self {
        plan.rounds
    }
}
