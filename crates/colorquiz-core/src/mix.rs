//! Color mixing and the "mix two colors to get the target" puzzle.

use crate::color::Color;
use crate::scoring::AnswerResult;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Points awarded for an exact mix.
pub const MIX_ROUND_SCORE: u32 = 3;

/// Palette the player mixes from.
pub const BASE_COLORS: [Color; 8] = [
    Color::new(0xFF, 0x00, 0x00), // red
    Color::new(0x00, 0xFF, 0x00), // green
    Color::new(0x00, 0x00, 0xFF), // blue
    Color::new(0xFF, 0xFF, 0x00), // yellow
    Color::new(0x00, 0xFF, 0xFF), // cyan
    Color::new(0xFF, 0x00, 0xFF), // magenta
    Color::new(0xFF, 0xA5, 0x00), // orange
    Color::new(0x8B, 0x45, 0x13), // brown
];

/// How two colors are blended. Both modes are commutative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MixMode {
    /// Per-channel average, halves rounded up.
    #[default]
    Average,
    /// Per-channel root mean square, approximating a mix in linear light.
    /// Brighter than [`MixMode::Average`] for contrasting channels.
    RootMeanSquare,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mix mode '{0}' (expected average or rms)")]
pub struct MixModeError(pub String);

impl MixMode {
    pub fn name(&self) -> &'static str {
        match self {
            MixMode::Average => "average",
            MixMode::RootMeanSquare => "rms",
        }
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixMode {
    type Err = MixModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "avg" => Ok(MixMode::Average),
            "rms" | "root-mean-square" => Ok(MixMode::RootMeanSquare),
            _ => Err(MixModeError(s.trim().to_string())),
        }
    }
}

/// Mix two colors with [`MixMode::Average`].
pub fn mix_colors(a: Color, b: Color) -> Color {
    mix_colors_in(a, b, MixMode::Average)
}

/// Mix two colors with the given mode.
pub fn mix_colors_in(a: Color, b: Color, mode: MixMode) -> Color {
    let channel = |x: u8, y: u8| -> u8 {
        match mode {
            MixMode::Average => ((u16::from(x) + u16::from(y) + 1) / 2) as u8,
            MixMode::RootMeanSquare => {
                let (x, y) = (f64::from(x), f64::from(y));
                ((x * x + y * y) / 2.0).sqrt().round().clamp(0.0, 255.0) as u8
            }
        }
    };
    Color::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// A mixing puzzle: pick two palette colors whose mix equals the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixPuzzle {
    pub target: Color,
    /// Palette in presentation order.
    pub palette: Vec<Color>,
    pub mode: MixMode,
}

impl MixPuzzle {
    /// Generate a puzzle from two distinct base colors, averaging mode.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_in(rng, MixMode::Average)
    }

    pub fn generate_in<R: Rng + ?Sized>(rng: &mut R, mode: MixMode) -> Self {
        let first = rng.gen_range(0..BASE_COLORS.len());
        let mut second = rng.gen_range(0..BASE_COLORS.len());
        while second == first {
            second = rng.gen_range(0..BASE_COLORS.len());
        }
        let (first, second) = (BASE_COLORS[first], BASE_COLORS[second]);

        let mut palette = BASE_COLORS.to_vec();
        palette.shuffle(rng);

        let target = mix_colors_in(first, second, mode);
        log::debug!("Mix puzzle: {first} + {second} = {target}");
        Self {
            target,
            palette,
            mode,
        }
    }

    /// Result of mixing the two slot colors.
    pub fn mix(&self, a: Color, b: Color) -> Color {
        mix_colors_in(a, b, self.mode)
    }

    pub fn is_correct(&self, a: Color, b: Color) -> bool {
        self.mix(a, b) == self.target
    }

    /// Verdict for the two slots.
    pub fn result(&self, a: Color, b: Color) -> AnswerResult {
        AnswerResult::from_bool(self.is_correct(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mix_red_blue() {
        let mixed = mix_colors(Color::new(255, 0, 0), Color::new(0, 0, 255));
        assert_eq!(mixed, Color::new(0x80, 0x00, 0x80));
        assert_eq!(mixed.to_hex(), "#800080");
    }

    #[test]
    fn test_mix_is_commutative() {
        let a = Color::new(0x8B, 0x45, 0x13);
        let b = Color::new(0x00, 0xFF, 0xFF);
        for mode in [MixMode::Average, MixMode::RootMeanSquare] {
            assert_eq!(mix_colors_in(a, b, mode), mix_colors_in(b, a, mode));
        }
    }

    #[test]
    fn test_mix_with_self_is_identity() {
        let c = Color::new(17, 99, 254);
        assert_eq!(mix_colors(c, c), c);
        assert_eq!(mix_colors_in(c, c, MixMode::RootMeanSquare), c);
    }

    #[test]
    fn test_root_mean_square_mix() {
        let mixed = mix_colors_in(Color::new(255, 0, 0), Color::new(0, 0, 255), MixMode::RootMeanSquare);
        assert_eq!(mixed, Color::new(180, 0, 180));
    }

    #[test]
    fn test_puzzle_target_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            let puzzle = MixPuzzle::generate(&mut rng);
            assert_eq!(puzzle.palette.len(), BASE_COLORS.len());
            for color in BASE_COLORS {
                assert!(puzzle.palette.contains(&color));
            }

            let reachable = puzzle.palette.iter().enumerate().any(|(i, a)| {
                puzzle.palette[i + 1..]
                    .iter()
                    .any(|b| puzzle.is_correct(*a, *b))
            });
            assert!(reachable, "target {} unreachable", puzzle.target);
            assert!(!BASE_COLORS.contains(&puzzle.target));
        }
    }

    #[test]
    fn test_puzzle_result() {
        let puzzle = MixPuzzle {
            target: Color::new(0x80, 0x00, 0x80),
            palette: BASE_COLORS.to_vec(),
            mode: MixMode::Average,
        };
        assert_eq!(puzzle.result(BASE_COLORS[2], BASE_COLORS[0]), AnswerResult::Correct);
        assert_eq!(puzzle.result(BASE_COLORS[1], BASE_COLORS[0]), AnswerResult::Wrong);
    }

    #[test]
    fn test_mix_mode_names() {
        assert_eq!("RMS".parse::<MixMode>(), Ok(MixMode::RootMeanSquare));
        assert_eq!("average".parse::<MixMode>(), Ok(MixMode::Average));
        assert_eq!(
            "paint".parse::<MixMode>(),
            Err(MixModeError("paint".to_string()))
        );
        assert_eq!(MixMode::RootMeanSquare.to_string(), "rms");
    }
}
