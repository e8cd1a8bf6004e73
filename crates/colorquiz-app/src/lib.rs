//! Color Quiz Application
//!
//! Terminal shell around the core game logic: input parsing, scene
//! rendering, reveal pacing and sound cues.

mod app;
mod commands;
mod config;
mod event_handler;
mod ui;

pub use app::{App, AppError};
pub use commands::{Command, CommandRegistry};
pub use config::{AppConfig, Args, ConfigError, load_plan};
pub use event_handler::{EventHandler, InputContext, InputError, UiAction};
pub use ui::UiState;
