//! Text rendering of scenes, using 24-bit ANSI colors for swatches.

use colorquiz_core::{
    AnswerResult, Challenge, ChangelogEntry, Color, ColorMode, GameSummary, Outcome,
    QuestionType, SessionState, scoring::match_percentage,
};

/// Rendering preferences.
#[derive(Debug, Clone, Copy)]
pub struct UiState {
    /// Emit ANSI escape codes for swatches and highlights.
    pub use_color: bool,
    /// Width of a swatch in terminal cells.
    pub swatch_width: usize,
    /// Notation for color codes shown next to swatches and as quiz options.
    pub color_mode: ColorMode,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            use_color: true,
            swatch_width: 8,
            color_mode: ColorMode::Hex,
        }
    }
}

impl UiState {
    /// A colored block; a neutral placeholder without color support.
    pub fn swatch(&self, color: Color) -> String {
        let cells = " ".repeat(self.swatch_width);
        if self.use_color {
            format!("\x1b[48;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, cells)
        } else {
            format!("[{}]", "#".repeat(self.swatch_width))
        }
    }

    /// Swatch followed by its code in the current color mode.
    pub fn labeled_swatch(&self, color: Color) -> String {
        format!("{} {}", self.swatch(color), self.color_mode.format(color))
    }

    /// Shown once at startup when swatches cannot be drawn.
    pub fn no_color_notice(&self) -> Option<&'static str> {
        (!self.use_color).then_some(
            "Warning: colors are disabled, swatches show as [####]. \
             Only the saturation rounds stay answerable from the listed codes.\n",
        )
    }

    fn verdict(&self, result: AnswerResult) -> String {
        let (text, code) = match result {
            AnswerResult::Correct => ("That's right!", "32"),
            AnswerResult::Partial => ("Close!", "33"),
            AnswerResult::Wrong => ("Incorrect...", "31"),
        };
        if self.use_color {
            format!("\x1b[1;{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn render_menu(&self, title: &str, state: &SessionState) -> String {
        format!(
            "\n=== {title} ===\nGuess colors HEX-codes correctly. Just {} rounds to show what you can.\nColor mode: {} ('mode' to change)\nPress Enter to start, 'new' for what's new, 'help' for commands.\n",
            state.total_rounds(),
            self.color_mode
        )
    }

    /// Round header plus the challenge itself.
    pub fn render_challenge(&self, state: &SessionState, challenge: &Challenge) -> String {
        let mut out = format!(
            "\nRound: {}/{}   Score: {}\n{}\n\n",
            state.round(),
            state.total_rounds(),
            state.score(),
            challenge.question_type().title()
        );

        match challenge {
            Challenge::Quiz(question) => {
                out.push_str(&format!("  {}\n\n", self.swatch(question.answer)));
                for (i, option) in question.options.iter().enumerate() {
                    out.push_str(&format!("  {}) {}\n", i + 1, self.color_mode.format(*option)));
                }
            }
            Challenge::Match(challenge) => {
                out.push_str(&format!("  Target color: {}\n", self.swatch(challenge.target)));
                out.push_str(&format!(
                    "  Start from:   {}\n",
                    self.labeled_swatch(challenge.start)
                ));
            }
            Challenge::Mix(puzzle) => {
                out.push_str(&format!("  ? + ? = {}\n\n", self.swatch(puzzle.target)));
                for (i, color) in puzzle.palette.iter().enumerate() {
                    out.push_str(&format!("  {}) {}\n", i + 1, self.swatch(*color)));
                }
            }
            Challenge::SortBySaturation(puzzle) => {
                for (i, swatch) in puzzle.swatches().iter().enumerate() {
                    let marker = if puzzle.selected() == Some(i) { '>' } else { ' ' };
                    out.push_str(&format!(
                        " {marker}{}) {}\n",
                        i + 1,
                        self.labeled_swatch(swatch.color)
                    ));
                }
            }
        }
        out
    }

    /// Reveal of an answer before the next round.
    pub fn render_outcome(&self, challenge: &Challenge, outcome: &Outcome) -> String {
        let mut out = String::new();
        match challenge {
            Challenge::Quiz(question) => {
                for (i, option) in question.options.iter().enumerate() {
                    let mark = if *option == question.answer {
                        "  <- answer"
                    } else if outcome.record.selected.iter().any(|s| s.color == *option) {
                        "  <- your pick"
                    } else {
                        ""
                    };
                    out.push_str(&format!("  {}) {}{}\n", i + 1, self.labeled_swatch(*option), mark));
                }
            }
            Challenge::Match(challenge) => {
                if let Some(guess) = outcome.record.selected.first() {
                    out.push_str(&format!("  Your color:   {}\n", self.labeled_swatch(guess.color)));
                }
                out.push_str(&format!("  Target color: {}\n", self.labeled_swatch(challenge.target)));
                if let Some(distance) = outcome.distance {
                    out.push_str(&format!("  Match: {:.2}%\n", match_percentage(distance)));
                }
                out.push_str(&format!(
                    "  Score: {} / {}\n",
                    outcome.points,
                    QuestionType::Match.max_points()
                ));
            }
            Challenge::Mix(puzzle) => {
                if let [a, b] = outcome.record.selected.as_slice() {
                    out.push_str(&format!(
                        "  {} + {} = {} (target {})\n",
                        self.swatch(a.color),
                        self.swatch(b.color),
                        self.swatch(puzzle.mix(a.color, b.color)),
                        self.swatch(puzzle.target)
                    ));
                }
            }
            Challenge::SortBySaturation(_) => {
                for selected in &outcome.record.selected {
                    out.push_str(&format!("  {}\n", self.labeled_swatch(selected.color)));
                }
            }
        }
        out.push_str(&format!("{}\n", self.verdict(outcome.record.result())));
        out
    }

    pub fn render_game_over(&self, summary: &GameSummary) -> String {
        let mut out = String::from("\n=== Game over! ===\n");
        out.push_str(&summary.to_string());
        out.push_str("Press Enter to play again.\n");
        out
    }

    pub fn render_changelog(&self, entry: &ChangelogEntry) -> String {
        let mut out = format!("\nWhat's New - v{}\n", entry.version);
        for change in &entry.changes {
            out.push_str(&format!("  * {change}\n"));
        }
        out
    }
}
