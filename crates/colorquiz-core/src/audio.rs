//! Sound cues emitted by the game; playback belongs to the host.

use serde::{Deserialize, Serialize};

/// A sound the host should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundCue {
    CorrectAnswer,
    WrongAnswer,
    GameOver,
}

impl SoundCue {
    /// Cue for an answer worth `points`.
    pub fn for_points(points: u32) -> Self {
        if points > 0 {
            SoundCue::CorrectAnswer
        } else {
            SoundCue::WrongAnswer
        }
    }

    /// Asset file name conventionally used for this cue.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::CorrectAnswer => "correct-answer.mp3",
            SoundCue::WrongAnswer => "wrong-answer.mp3",
            SoundCue::GameOver => "game-over.mp3",
        }
    }
}

/// Player audio preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioSettings {
    pub muted: bool,
}

impl AudioSettings {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Pass a cue through unless muted.
    pub fn filter(&self, cue: SoundCue) -> Option<SoundCue> {
        (!self.muted).then_some(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_for_points() {
        assert_eq!(SoundCue::for_points(0), SoundCue::WrongAnswer);
        assert_eq!(SoundCue::for_points(1), SoundCue::CorrectAnswer);
        assert_eq!(SoundCue::for_points(5), SoundCue::CorrectAnswer);
    }

    #[test]
    fn test_mute_filters_cues() {
        let mut audio = AudioSettings::default();
        assert_eq!(audio.filter(SoundCue::GameOver), Some(SoundCue::GameOver));
        audio.toggle_mute();
        assert_eq!(audio.filter(SoundCue::GameOver), None);
        audio.toggle_mute();
        assert!(!audio.muted);
    }
}
