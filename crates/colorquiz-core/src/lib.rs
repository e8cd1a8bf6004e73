//! Color Quiz Core Library
//!
//! Platform-agnostic game logic for the Color Quiz: color generation,
//! scoring, the per-round challenges and the session state machine.

pub mod audio;
pub mod challenge;
pub mod changelog;
pub mod color;
pub mod generator;
pub mod mix;
pub mod plan;
pub mod saturation;
pub mod scoring;
pub mod session;

pub use audio::{AudioSettings, SoundCue};
pub use challenge::{Challenge, MatchChallenge, Outcome, Submission, SubmissionError};
pub use changelog::{Changelog, ChangelogEntry, ChangelogError};
pub use color::{Color, ColorError, ColorMode, Hsl, Hsv};
pub use generator::{Question, Strategy, generate_question, generate_question_with, random_color};
pub use mix::{MixMode, MixModeError, MixPuzzle, mix_colors, mix_colors_in};
pub use plan::{GamePlan, GameRound, PlanError, QuestionType};
pub use saturation::{SaturationPuzzle, Swatch};
pub use scoring::{AnswerResult, color_distance, match_result, score_from_distance};
pub use session::{AnswerRecord, GameSummary, Scene, SelectedColor, SessionState, transition_cue};
