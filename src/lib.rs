pub mod cli;
pub mod core;
pub mod game;

// Re-export for convenience
pub use crate::core::input::InputEvent;
pub use crate::core::layout::ScreenLayout;
pub use crate::core::renderer::{Anchor, FontTier, Palette, Renderer};
pub use crate::game::{Difficulty, GameController, Screen};
