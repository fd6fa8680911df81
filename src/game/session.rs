use std::fmt;

use rand::Rng;

use crate::core::renderer::Palette;
use crate::game::difficulty::{Difficulty, DifficultyProfile};
use crate::game::feedback::{Hint, Proximity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// A wrong guess that still left attempts on the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: u32,
    pub proximity: Proximity,
}

impl GuessRecord {
    pub fn color(&self) -> Palette {
        self.proximity.color()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Won { attempts: u32 },
    Lost { secret: u32 },
    Miss {
        proximity: Proximity,
        hint: Hint,
        attempts: u32,
        max_attempts: u32,
    },
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Won { attempts } => write!(
                f,
                "Congratulations! You guessed the number in {attempts} attempts!"
            ),
            GuessOutcome::Lost { secret } => write!(f, "Game Over! The number was {secret}"),
            GuessOutcome::Miss { proximity, hint, attempts, max_attempts } => write!(
                f,
                "{proximity} Try {hint}. Attempts: {attempts}/{max_attempts}"
            ),
        }
    }
}

/// One play-through at a fixed difficulty
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: u32,
    attempts_used: u32,
    history: Vec<GuessRecord>,
    status: SessionStatus,
}

impl GameSession {
    /// Draws the secret uniformly from the difficulty's inclusive range.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let profile = difficulty.profile();
        let secret = rng.random_range(profile.min..=profile.max);
        Self::with_secret(difficulty, secret)
    }

    pub fn with_secret(difficulty: Difficulty, secret: u32) -> Self {
        debug_assert!((difficulty.profile().min..=difficulty.profile().max).contains(&secret));
        Self {
            difficulty,
            secret,
            attempts_used: 0,
            history: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        self.difficulty.profile()
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Scores a guess. Returns `None` once the session has been decided.
    pub fn guess(&mut self, guess: u32) -> Option<GuessOutcome> {
        if self.status != SessionStatus::InProgress {
            return None;
        }
        let profile = self.profile();
        self.attempts_used += 1;

        if guess == self.secret {
            self.status = SessionStatus::Won;
            return Some(GuessOutcome::Won { attempts: self.attempts_used });
        }
        if self.attempts_used >= profile.max_attempts {
            self.status = SessionStatus::Lost;
            return Some(GuessOutcome::Lost { secret: self.secret });
        }

        let proximity = Proximity::classify(guess.abs_diff(self.secret), profile.max);
        self.history.push(GuessRecord { guess, proximity });
        Some(GuessOutcome::Miss {
            proximity,
            hint: Hint::for_guess(guess, self.secret),
            attempts: self.attempts_used,
            max_attempts: profile.max_attempts,
        })
    }
}
