use serde::Serialize;

use crate::core::renderer::Palette;

/// Preset bundling a numeric range with an attempt budget
#[derive(Debug, Clone, Serialize)]
pub struct DifficultyProfile {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub max_attempts: u32,
    pub accent: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

static EASY: DifficultyProfile = DifficultyProfile {
    name: "EASY",
    min: 1,
    max: 50,
    max_attempts: 10,
    accent: Palette::LightGreen,
};

static MEDIUM: DifficultyProfile = DifficultyProfile {
    name: "MEDIUM",
    min: 1,
    max: 100,
    max_attempts: 15,
    accent: Palette::LightBlue,
};

static HARD: DifficultyProfile = DifficultyProfile {
    name: "HARD",
    min: 1,
    max: 200,
    max_attempts: 25,
    accent: Palette::LightRed,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    /// Keyboard shortcut on the selection screen ('1'..'3')
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Difficulty::Easy),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl DifficultyProfile {
    pub fn details(&self) -> String {
        format!("Range: {}-{}, Attempts: {}", self.min, self.max, self.max_attempts)
    }
}
