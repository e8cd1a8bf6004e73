//! Typed command registry and help text.

use colorquiz_core::{QuestionType, Scene};

/// A command the player can type.
#[derive(Debug, Clone)]
pub struct Command {
    pub keys: &'static [&'static str],
    pub description: &'static str,
}

impl Command {
    pub const fn new(keys: &'static [&'static str], description: &'static str) -> Self {
        Self { keys, description }
    }

    /// Format the accepted spellings for display (e.g., "q / quit").
    pub fn format(&self) -> String {
        self.keys.join(" / ")
    }
}

/// Registry of the commands available on each screen.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Commands accepted everywhere.
    pub fn global() -> Vec<Command> {
        vec![
            Command::new(&["h", "help", "?"], "Show this help"),
            Command::new(&["new", "whats-new"], "What's new in this version"),
            Command::new(&["mute"], "Toggle sound effects"),
            Command::new(&["mode"], "Cycle how colors are written (hex, rgb, hsv, hsl)"),
            Command::new(&["menu"], "Back to the main menu"),
            Command::new(&["q", "quit"], "Quit"),
        ]
    }

    /// Commands for a scene and, in the game, the current round type.
    pub fn for_context(scene: Scene, question_type: Option<QuestionType>) -> Vec<Command> {
        let mut commands = match (scene, question_type) {
            (Scene::Menu, _) => vec![Command::new(&["<Enter>", "s", "start"], "Start game")],
            (Scene::GameOver, _) => {
                vec![Command::new(&["<Enter>", "r", "restart"], "Play again")]
            }
            (Scene::Game, Some(QuestionType::Quiz)) => vec![
                Command::new(&["1-4"], "Pick an option"),
                Command::new(&["#RRGGBB"], "Pick an option by its hex code"),
            ],
            (Scene::Game, Some(QuestionType::Match)) => {
                vec![Command::new(&["#RRGGBB"], "Submit your color")]
            }
            (Scene::Game, Some(QuestionType::MathExpression)) => {
                vec![Command::new(&["<a> <b>"], "Mix palette colors a and b")]
            }
            (Scene::Game, Some(QuestionType::SortBySaturation)) => vec![
                Command::new(&["<n>"], "Tap a slot (tap another slot to swap)"),
                Command::new(&["swap <a> <b>"], "Swap two slots"),
                Command::new(&["done", "ok"], "Confirm the order"),
            ],
            (Scene::Game, None) => Vec::new(),
        };
        if scene == Scene::Game {
            commands.push(Command::new(&["<Enter>", "n", "next"], "Next round after an answer"));
        }
        commands.extend(Self::global());
        commands
    }

    /// Help text for the given context.
    pub fn help(scene: Scene, question_type: Option<QuestionType>) -> String {
        let mut out = String::from("=== Commands ===\n");
        for command in Self::for_context(scene, question_type) {
            out.push_str(&format!("  {:24} {}\n", command.format(), command.description));
        }
        out
    }
}
