//! Command-line flags and application configuration.

use clap::Parser;
use colorquiz_core::{ColorMode, GamePlan, MixMode, PlanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while building the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read game plan {path}: {source}")]
    ReadPlan {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Color Quiz in the terminal.
#[derive(Debug, Parser, Default)]
#[command(name = "colorquiz", version, about)]
pub struct Args {
    /// JSON game plan: `[{"questionType": "quiz", "difficulty": 1}, ...]`.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Seed for reproducible rounds.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Start with sound effects muted.
    #[arg(long)]
    pub mute: bool,
    /// Skip the reveal pauses between rounds.
    #[arg(long)]
    pub fast: bool,
    /// Plain output without ANSI colors. Swatches cannot be shown.
    #[arg(long)]
    pub no_color: bool,
    /// Notation for color codes: hex, rgb, hsv or hsl.
    #[arg(long, default_value_t = ColorMode::Hex)]
    pub color_mode: ColorMode,
    /// How mixing puzzles blend two colors: average or rms.
    #[arg(long, default_value_t = MixMode::Average)]
    pub mix_mode: MixMode,
    /// Write the final summary as JSON to this file.
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

/// Runtime configuration of the terminal shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub plan: GamePlan,
    pub seed: Option<u64>,
    pub muted: bool,
    /// Honor the per-round reveal delays.
    pub pacing: bool,
    pub use_color: bool,
    pub color_mode: ColorMode,
    pub mix_mode: MixMode,
    /// Ring the terminal bell for sound cues.
    pub bell: bool,
    pub summary_json: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Color Quiz".to_string(),
            plan: GamePlan::default(),
            seed: None,
            muted: false,
            pacing: true,
            use_color: true,
            color_mode: ColorMode::Hex,
            mix_mode: MixMode::Average,
            bell: true,
            summary_json: None,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let plan = match &args.plan {
            Some(path) => load_plan(path)?,
            None => GamePlan::default(),
        };

        if args.no_color {
            log::warn!("Colors disabled: quiz, match and mix swatches will not be visible");
        }

        Ok(Self {
            plan,
            seed: args.seed,
            muted: args.mute,
            pacing: !args.fast,
            use_color: !args.no_color,
            color_mode: args.color_mode,
            mix_mode: args.mix_mode,
            summary_json: args.summary_json,
            ..Self::default()
        })
    }
}

/// Read a game plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<GamePlan, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadPlan {
        path: path.to_path_buf(),
        source,
    })?;
    let plan = GamePlan::from_json(&json)?;
    log::info!("Loaded {} round plan from {}", plan.len(), path.display());
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorquiz_core::QuestionType;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_args() {
        let config = AppConfig::from_args(Args::default()).unwrap();
        assert_eq!(config.plan, GamePlan::default());
        assert!(config.pacing);
        assert!(config.use_color);
        assert!(!config.muted);
        assert_eq!(config.color_mode, ColorMode::Hex);
        assert_eq!(config.mix_mode, MixMode::Average);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["colorquiz", "--seed", "7", "--mute", "--fast", "--no-color"]);
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.muted);
        assert!(!config.pacing);
        assert!(!config.use_color);
    }

    #[test]
    fn test_parse_color_and_mix_modes() {
        let args = Args::parse_from(["colorquiz", "--color-mode", "hsv", "--mix-mode", "rms"]);
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.color_mode, ColorMode::Hsv);
        assert_eq!(config.mix_mode, MixMode::RootMeanSquare);

        assert!(Args::try_parse_from(["colorquiz", "--color-mode", "cmyk"]).is_err());
        assert!(Args::try_parse_from(["colorquiz", "--mix-mode", "paint"]).is_err());
    }

    #[test]
    fn test_load_plan_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "questionType": "sortBySaturation", "difficulty": 1 }}]"#
        )
        .unwrap();

        let args = Args {
            plan: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.plan.len(), 1);
        assert_eq!(config.plan.rounds()[0].question_type, QuestionType::SortBySaturation);
    }

    #[test]
    fn test_missing_plan_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_plan(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::ReadPlan { .. })));
    }

    #[test]
    fn test_empty_plan_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let result = load_plan(file.path());
        assert!(matches!(result, Err(ConfigError::Plan(PlanError::Empty))));
    }
}
