pub mod controller;
pub mod difficulty;
pub mod feedback;
pub mod session;
mod view;

pub use controller::{GameController, Screen, UiState};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use feedback::{Hint, Proximity};
pub use session::{GameSession, GuessOutcome, GuessRecord, SessionStatus};
