//! Session state and its copy-on-write transitions.
//!
//! The host owns a [`SessionState`] and replaces it with the value returned by
//! each transition. Answering is split in two phases: [`SessionState::submit`]
//! parks the outcome while the host reveals it, [`SessionState::advance`]
//! commits it and moves to the next round. A parked outcome blocks further
//! submissions, so double clicks during the reveal are dropped.

use crate::audio::SoundCue;
use crate::challenge::Outcome;
use crate::color::Color;
use crate::plan::{GamePlan, GameRound};
use crate::scoring::AnswerResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scene {
    #[default]
    Menu,
    Game,
    GameOver,
}

/// A color the player chose and how it was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedColor {
    pub color: Color,
    pub result: AnswerResult,
}

impl SelectedColor {
    pub fn new(color: Color, result: AnswerResult) -> Self {
        Self { color, result }
    }
}

/// Log entry for one answered round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_color: Color,
    pub selected: Vec<SelectedColor>,
    pub correct: Color,
}

impl AnswerRecord {
    /// Record with a single selection whose question color is also the answer.
    pub fn single(answer: Color, selected: Color, result: AnswerResult) -> Self {
        Self {
            question_color: answer,
            selected: vec![SelectedColor::new(selected, result)],
            correct: answer,
        }
    }

    /// Overall verdict: correct when every selection is, wrong when none is
    /// even partially right.
    pub fn result(&self) -> AnswerResult {
        if !self.selected.is_empty()
            && self.selected.iter().all(|s| s.result == AnswerResult::Correct)
        {
            AnswerResult::Correct
        } else if self.selected.iter().any(|s| s.result != AnswerResult::Wrong) {
            AnswerResult::Partial
        } else {
            AnswerResult::Wrong
        }
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let picks: Vec<String> = self.selected.iter().map(|s| s.color.to_hex()).collect();
        write!(
            f,
            "{}: picked {} (correct {}) - {}",
            self.question_color,
            picks.join(" + "),
            self.correct,
            self.result().label()
        )
    }
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub score: u32,
    pub max_score: u32,
    pub total_rounds: usize,
    pub answers: Vec<AnswerRecord>,
}

impl GameSummary {
    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| a.result() == AnswerResult::Correct)
            .count()
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "You scored {} out of {} points.",
            self.score, self.max_score
        )?;
        for (i, answer) in self.answers.iter().enumerate() {
            writeln!(f, "{:>2}. {}", i + 1, answer)?;
        }
        Ok(())
    }
}

/// Everything the host needs to know about the running session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    round: u32,
    score: u32,
    scene: Scene,
    answers: Vec<AnswerRecord>,
    plan: GamePlan,
    /// Outcome shown to the player but not yet committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending: Option<Outcome>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(GamePlan::default())
    }
}

impl SessionState {
    /// A session sitting on the menu.
    pub fn new(plan: GamePlan) -> Self {
        Self {
            round: 1,
            score: 0,
            scene: Scene::Menu,
            answers: Vec::new(),
            plan,
            pending: None,
        }
    }

    /// 1-based round number; one past the last round after game over.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Points committed so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn plan(&self) -> &GamePlan {
        &self.plan
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn total_rounds(&self) -> usize {
        self.plan.len()
    }

    /// Outcome waiting for [`advance`](Self::advance).
    pub fn pending(&self) -> Option<&Outcome> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_advance(&self) -> bool {
        self.pending.is_some()
    }

    /// Round currently being played; `None` outside the game scene.
    pub fn current_round(&self) -> Option<GameRound> {
        if self.scene != Scene::Game {
            return None;
        }
        self.plan.get(self.round)
    }

    /// Fresh game with the same plan: round 1, no score, empty log.
    #[must_use]
    pub fn reset_game(&self) -> Self {
        log::info!("Starting game with {} rounds", self.plan.len());
        Self {
            scene: Scene::Game,
            ..Self::new(self.plan.clone())
        }
    }

    /// Back to the menu with a fresh log.
    #[must_use]
    pub fn to_menu(&self) -> Self {
        log::info!("Returning to menu");
        Self::new(self.plan.clone())
    }

    /// Park an outcome for reveal. Ignored outside the game scene or while
    /// another outcome is still pending.
    #[must_use]
    pub fn submit(&self, outcome: Outcome) -> Self {
        if self.scene != Scene::Game {
            log::warn!("Ignoring answer submitted in {:?} scene", self.scene);
            return self.clone();
        }
        if self.pending.is_some() {
            log::warn!("Ignoring answer for round {}: previous answer still pending", self.round);
            return self.clone();
        }

        log::debug!("Round {} answered for {} point(s)", self.round, outcome.points);
        Self {
            pending: Some(outcome),
            ..self.clone()
        }
    }

    /// Commit the pending outcome and move to the next round, or to the game
    /// over screen after the last one. No-op without a pending outcome.
    #[must_use]
    pub fn advance(&self) -> Self {
        let Some(outcome) = &self.pending else {
            return self.clone();
        };

        let mut next = self.clone();
        next.pending = None;
        next.score += outcome.points;
        next.answers.push(outcome.record.clone());
        next.round += 1;

        if next.round as usize > next.plan.len() {
            log::info!("Game over: {} of {} points", next.score, next.plan.max_score());
            next.scene = Scene::GameOver;
        }
        next
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            max_score: self.plan.max_score(),
            total_rounds: self.plan.len(),
            answers: self.answers.clone(),
        }
    }
}

/// Cue for a scene change, if it deserves one.
pub fn transition_cue(previous: &SessionState, next: &SessionState) -> Option<SoundCue> {
    (previous.scene() == Scene::Game && next.scene() == Scene::GameOver)
        .then_some(SoundCue::GameOver)
}
