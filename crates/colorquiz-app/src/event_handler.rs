//! Turns typed player input into UI actions.

use colorquiz_core::{Challenge, Color, ColorError, Scene, Submission};
use thiserror::Error;

/// Something the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Start (or restart) a game.
    Start,
    /// Answer the current round.
    Answer(Submission),
    /// Commit the revealed answer and move on.
    Next,
    /// Tap a sorting slot (0-based).
    Select(usize),
    /// Swap two sorting slots (0-based).
    Swap(usize, usize),
    ToggleMute,
    /// Switch to the next color notation.
    CycleColorMode,
    WhatsNew,
    Help,
    Menu,
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}' (type 'help' for commands)")]
    Unknown(String),
    #[error("Choose a number between 1 and {len}, got {index}")]
    OutOfRange { index: usize, len: usize },
    #[error("Not a color: {0}")]
    Color(#[from] ColorError),
    #[error("Waiting for the next round (press Enter)")]
    AwaitingNext,
}

/// What the handler needs to know to interpret a line.
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    pub scene: Scene,
    pub challenge: Option<&'a Challenge>,
    pub awaiting_advance: bool,
}

/// Stateless parser for player input.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, line: &str, ctx: InputContext<'_>) -> Result<UiAction, InputError> {
        let input = line.trim();
        let lowered = input.to_ascii_lowercase();

        match lowered.as_str() {
            "q" | "quit" | "exit" => return Ok(UiAction::Quit),
            "h" | "help" | "?" => return Ok(UiAction::Help),
            "new" | "whats-new" => return Ok(UiAction::WhatsNew),
            "mute" => return Ok(UiAction::ToggleMute),
            "mode" => return Ok(UiAction::CycleColorMode),
            "menu" => return Ok(UiAction::Menu),
            _ => {}
        }

        match ctx.scene {
            Scene::Menu => match lowered.as_str() {
                "" | "s" | "start" => Ok(UiAction::Start),
                _ => Err(InputError::Unknown(input.to_string())),
            },
            Scene::GameOver => match lowered.as_str() {
                "" | "r" | "restart" | "s" | "start" => Ok(UiAction::Start),
                _ => Err(InputError::Unknown(input.to_string())),
            },
            Scene::Game if ctx.awaiting_advance => match lowered.as_str() {
                "" | "n" | "next" => Ok(UiAction::Next),
                _ => Err(InputError::AwaitingNext),
            },
            Scene::Game => match ctx.challenge {
                Some(challenge) => self.handle_answer(input, &lowered, challenge),
                None => Err(InputError::Unknown(input.to_string())),
            },
        }
    }

    fn handle_answer(
        &self,
        input: &str,
        lowered: &str,
        challenge: &Challenge,
    ) -> Result<UiAction, InputError> {
        match challenge {
            Challenge::Quiz(question) => {
                if let Ok(index) = input.parse::<usize>() {
                    let picked = pick(&question.options, index)?;
                    return Ok(UiAction::Answer(Submission::Pick(picked)));
                }
                let color: Color = input.parse()?;
                Ok(UiAction::Answer(Submission::Pick(color)))
            }
            Challenge::Match(_) => {
                let color: Color = input.parse()?;
                Ok(UiAction::Answer(Submission::Guess(color)))
            }
            Challenge::Mix(puzzle) => {
                let [a, b] = two_numbers(input)?;
                Ok(UiAction::Answer(Submission::Mix(
                    pick(&puzzle.palette, a)?,
                    pick(&puzzle.palette, b)?,
                )))
            }
            Challenge::SortBySaturation(puzzle) => {
                let len = puzzle.swatches().len();
                if matches!(lowered, "done" | "ok" | "c" | "confirm") {
                    return Ok(UiAction::Answer(Submission::ConfirmOrder));
                }
                if let Some(rest) = lowered.strip_prefix("swap") {
                    let [a, b] = two_numbers(rest)?;
                    return Ok(UiAction::Swap(slot(a, len)?, slot(b, len)?));
                }
                match input.parse::<usize>() {
                    Ok(index) => Ok(UiAction::Select(slot(index, len)?)),
                    Err(_) => Err(InputError::Unknown(input.to_string())),
                }
            }
        }
    }
}

/// Convert a 1-based number into a 0-based slot.
fn slot(index: usize, len: usize) -> Result<usize, InputError> {
    if index == 0 || index > len {
        return Err(InputError::OutOfRange { index, len });
    }
    Ok(index - 1)
}

fn pick(colors: &[Color], index: usize) -> Result<Color, InputError> {
    Ok(colors[slot(index, colors.len())?])
}

fn two_numbers(input: &str) -> Result<[usize; 2], InputError> {
    let numbers: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == '+' || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| InputError::Unknown(input.trim().to_string()))?;

    match numbers.as_slice() {
        &[a, b] => Ok([a, b]),
        _ => Err(InputError::Unknown(input.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorquiz_core::mix::{BASE_COLORS, MixMode};
    use colorquiz_core::{MatchChallenge, MixPuzzle, Question, SaturationPuzzle, Swatch};

    fn game(challenge: &Challenge) -> InputContext<'_> {
        InputContext {
            scene: Scene::Game,
            challenge: Some(challenge),
            awaiting_advance: false,
        }
    }

    fn quiz() -> Challenge {
        Challenge::Quiz(Question {
            answer: Color::new(0x11, 0x11, 0x11),
            options: vec![
                Color::new(0x22, 0x22, 0x22),
                Color::new(0x11, 0x11, 0x11),
                Color::new(0x33, 0x33, 0x33),
                Color::new(0x44, 0x44, 0x44),
            ],
        })
    }

    #[test]
    fn test_global_commands() {
        let handler = EventHandler::new();
        let ctx = InputContext {
            scene: Scene::Menu,
            challenge: None,
            awaiting_advance: false,
        };
        assert_eq!(handler.handle("QUIT", ctx), Ok(UiAction::Quit));
        assert_eq!(handler.handle(" help ", ctx), Ok(UiAction::Help));
        assert_eq!(handler.handle("mute", ctx), Ok(UiAction::ToggleMute));
        assert_eq!(handler.handle("Mode", ctx), Ok(UiAction::CycleColorMode));
        assert_eq!(handler.handle("", ctx), Ok(UiAction::Start));
        assert!(matches!(handler.handle("dance", ctx), Err(InputError::Unknown(_))));
    }

    #[test]
    fn test_quiz_by_number_and_hex() {
        let handler = EventHandler::new();
        let challenge = quiz();
        assert_eq!(
            handler.handle("2", game(&challenge)),
            Ok(UiAction::Answer(Submission::Pick(Color::new(0x11, 0x11, 0x11))))
        );
        assert_eq!(
            handler.handle("#333333", game(&challenge)),
            Ok(UiAction::Answer(Submission::Pick(Color::new(0x33, 0x33, 0x33))))
        );
        assert_eq!(
            handler.handle("5", game(&challenge)),
            Err(InputError::OutOfRange { index: 5, len: 4 })
        );
    }

    #[test]
    fn test_match_requires_color() {
        let handler = EventHandler::new();
        let challenge = Challenge::Match(MatchChallenge {
            target: Color::WHITE,
            start: Color::BLACK,
        });
        assert_eq!(
            handler.handle("fafafa", game(&challenge)),
            Ok(UiAction::Answer(Submission::Guess(Color::new(0xFA, 0xFA, 0xFA))))
        );
        assert!(matches!(
            handler.handle("#zz0000", game(&challenge)),
            Err(InputError::Color(ColorError::InvalidDigit('z')))
        ));
    }

    #[test]
    fn test_mix_slots() {
        let handler = EventHandler::new();
        let challenge = Challenge::Mix(MixPuzzle {
            target: Color::BLACK,
            palette: BASE_COLORS.to_vec(),
            mode: MixMode::Average,
        });
        assert_eq!(
            handler.handle("1 + 3", game(&challenge)),
            Ok(UiAction::Answer(Submission::Mix(BASE_COLORS[0], BASE_COLORS[2])))
        );
        assert_eq!(
            handler.handle("1 9", game(&challenge)),
            Err(InputError::OutOfRange { index: 9, len: 8 })
        );
        assert!(handler.handle("1", game(&challenge)).is_err());
    }

    #[test]
    fn test_sort_commands() {
        let handler = EventHandler::new();
        let swatches = (0..4)
            .map(|id| Swatch {
                id,
                color: Color::new(id as u8, 0, 0),
            })
            .collect();
        let challenge = Challenge::SortBySaturation(SaturationPuzzle::from_swatches(swatches));
        assert_eq!(handler.handle("3", game(&challenge)), Ok(UiAction::Select(2)));
        assert_eq!(handler.handle("swap 1 4", game(&challenge)), Ok(UiAction::Swap(0, 3)));
        assert_eq!(
            handler.handle("done", game(&challenge)),
            Ok(UiAction::Answer(Submission::ConfirmOrder))
        );
        assert!(handler.handle("0", game(&challenge)).is_err());
    }

    #[test]
    fn test_awaiting_next_blocks_answers() {
        let handler = EventHandler::new();
        let challenge = quiz();
        let ctx = InputContext {
            awaiting_advance: true,
            ..game(&challenge)
        };
        assert_eq!(handler.handle("", ctx), Ok(UiAction::Next));
        assert_eq!(handler.handle("2", ctx), Err(InputError::AwaitingNext));
    }
}
