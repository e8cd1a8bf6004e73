//! Core application state and the input loop.

use colorquiz_core::{
    AudioSettings, Challenge, Changelog, ChangelogError, Scene, SessionState, SoundCue,
    Submission, transition_cue,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use thiserror::Error;

use crate::commands::CommandRegistry;
use crate::config::{AppConfig, ConfigError};
use crate::event_handler::{EventHandler, InputContext, UiAction};
use crate::ui::UiState;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
    #[error("Failed to write summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: SessionState,
    /// Challenge for the current round, while in the game scene.
    challenge: Option<Challenge>,
    rng: StdRng,
    audio: AudioSettings,
    ui: UiState,
    event_handler: EventHandler,
    changelog: Changelog,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let ui = UiState {
            use_color: config.use_color,
            color_mode: config.color_mode,
            ..UiState::default()
        };

        Ok(Self {
            state: SessionState::new(config.plan.clone()),
            challenge: None,
            rng,
            audio: AudioSettings {
                muted: config.muted,
            },
            ui,
            event_handler: EventHandler::new(),
            changelog: Changelog::embedded()?,
            config,
        })
    }

    /// Run against stdin/stdout until the player quits.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let mut app = Self::new(config)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        app.run_with(stdin.lock(), stdout.lock())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drive the game from any line source, writing to `out`.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), AppError> {
        if let Some(notice) = self.ui.no_color_notice() {
            write!(out, "{notice}")?;
        }
        match self.state.scene() {
            Scene::Menu => write!(out, "{}", self.ui.render_menu(&self.config.title, &self.state))?,
            Scene::Game => self.render_challenge(&mut out)?,
            Scene::GameOver => write!(out, "{}", self.ui.render_game_over(&self.state.summary()))?,
        }
        self.prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let ctx = InputContext {
                scene: self.state.scene(),
                challenge: self.challenge.as_ref(),
                awaiting_advance: self.state.is_awaiting_advance(),
            };

            match self.event_handler.handle(&line, ctx) {
                Ok(UiAction::Quit) => break,
                Ok(action) => self.apply(action, &mut out)?,
                Err(e) => writeln!(out, "{e}")?,
            }
            self.prompt(&mut out)?;
        }

        log::info!("Leaving with score {}", self.state.score());
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "> ")?;
        out.flush()
    }

    fn apply<W: Write>(&mut self, action: UiAction, out: &mut W) -> Result<(), AppError> {
        match action {
            UiAction::Start => {
                self.state = self.state.reset_game();
                self.begin_round(out)?;
            }
            UiAction::Menu => {
                self.state = self.state.to_menu();
                self.challenge = None;
                write!(out, "{}", self.ui.render_menu(&self.config.title, &self.state))?;
            }
            UiAction::Answer(submission) => self.answer(submission, out)?,
            UiAction::Next => self.advance(out)?,
            UiAction::Select(index) => {
                if let Some(Challenge::SortBySaturation(puzzle)) = &mut self.challenge {
                    puzzle.select(index);
                }
                self.render_challenge(out)?;
            }
            UiAction::Swap(a, b) => {
                if let Some(Challenge::SortBySaturation(puzzle)) = &mut self.challenge {
                    puzzle.swap(a, b);
                }
                self.render_challenge(out)?;
            }
            UiAction::ToggleMute => {
                self.audio.toggle_mute();
                let label = if self.audio.muted { "off" } else { "on" };
                writeln!(out, "Sound {label}")?;
            }
            UiAction::CycleColorMode => {
                self.ui.color_mode = self.ui.color_mode.next();
                writeln!(out, "Color mode: {}", self.ui.color_mode)?;
                self.render_challenge(out)?;
            }
            UiAction::WhatsNew => {
                if let Some(entry) = self.changelog.latest() {
                    write!(out, "{}", self.ui.render_changelog(entry))?;
                }
            }
            UiAction::Help => {
                let question_type = self.challenge.as_ref().map(|c| c.question_type());
                write!(out, "{}", CommandRegistry::help(self.state.scene(), question_type))?;
            }
            UiAction::Quit => {}
        }
        Ok(())
    }

    /// Generate and show the challenge for the current round.
    fn begin_round<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        let Some(round) = self.state.current_round() else {
            self.challenge = None;
            return Ok(());
        };
        self.challenge = Some(Challenge::generate_with(
            &mut self.rng,
            &round,
            self.config.mix_mode,
        ));
        self.render_challenge(out)
    }

    fn render_challenge<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        if let Some(challenge) = &self.challenge {
            write!(out, "{}", self.ui.render_challenge(&self.state, challenge))?;
        }
        Ok(())
    }

    fn answer<W: Write>(&mut self, submission: Submission, out: &mut W) -> Result<(), AppError> {
        let Some(challenge) = &self.challenge else {
            return Ok(());
        };

        let outcome = match challenge.evaluate(&submission) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        };

        write!(out, "{}", self.ui.render_outcome(challenge, &outcome))?;
        let question_type = challenge.question_type();
        let cue = outcome.cue;
        self.state = self.state.submit(outcome);
        self.play(cue, out)?;

        self.pause(question_type.reveal_delay());
        if question_type.auto_advances() {
            self.advance(out)?;
        } else {
            writeln!(out, "Press Enter for the next round.")?;
        }
        Ok(())
    }

    fn advance<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.advance();

        if let Some(cue) = transition_cue(&previous, &self.state) {
            self.play(cue, out)?;
        }

        if self.state.scene() == Scene::GameOver {
            self.challenge = None;
            let summary = self.state.summary();
            write!(out, "{}", self.ui.render_game_over(&summary))?;
            if let Some(path) = &self.config.summary_json {
                std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
                log::info!("Wrote summary to {}", path.display());
            }
            return Ok(());
        }
        self.begin_round(out)
    }

    fn pause(&self, delay: Duration) {
        if self.config.pacing {
            std::thread::sleep(delay);
        }
    }

    fn play<W: Write>(&self, cue: SoundCue, out: &mut W) -> io::Result<()> {
        if let Some(cue) = self.audio.filter(cue) {
            log::debug!("Playing {}", cue.file_name());
            if self.config.bell {
                write!(out, "\x07")?;
            }
        }
        Ok(())
    }
}
