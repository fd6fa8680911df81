pub mod engine;
pub mod input;
pub mod layout;
pub mod renderer; // Draw-call vocabulary
pub mod terminal; // ratatui backend for the renderer
