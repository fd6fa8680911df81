//! Game state machine: difficulty selection, play, game over.
//!
//! `paused` and `menu_open` are independent flags layered over whichever
//! screen is active; they never change the screen themselves.

use std::ops::ControlFlow;

use rand::{rngs::StdRng, SeedableRng};
use ratatui::layout::Position;
use tracing::{debug, info, trace, warn};

use crate::core::input::InputEvent;
use crate::core::layout::{MenuItem, ScreenLayout};
use crate::game::difficulty::Difficulty;
use crate::game::session::{GameSession, GuessOutcome};

/// Longest number the input box accepts
pub const MAX_INPUT_LEN: usize = 3;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number!";
pub const SELECT_MESSAGE: &str = "Select a difficulty level";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SelectDifficulty,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub screen: Screen,
    pub paused: bool,
    pub menu_open: bool,
    pub pending_input: String,
    pub message: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::SelectDifficulty,
            paused: false,
            menu_open: false,
            pending_input: String::new(),
            message: SELECT_MESSAGE.to_string(),
        }
    }
}

pub struct GameController {
    layout: ScreenLayout,
    rng: StdRng,
    ui: UiState,
    session: Option<GameSession>,
}

impl GameController {
    /// `seed` makes the sequence of secrets reproducible; `None` seeds from the OS.
    pub fn new(layout: ScreenLayout, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            layout,
            rng,
            ui: UiState::default(),
            session: None,
        }
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn screen(&self) -> Screen {
        self.ui.screen
    }

    pub fn message(&self) -> &str {
        &self.ui.message
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        let session = GameSession::new(difficulty, &mut self.rng);
        let profile = session.profile();
        info!(difficulty = profile.name, "difficulty selected");
        trace!(secret = session.secret(), "secret drawn");

        self.ui.message = format!("Guess a number between {} and {}", profile.min, profile.max);
        self.ui.pending_input.clear();
        self.ui.screen = Screen::Playing;
        self.session = Some(session);
    }

    /// Scores the raw input box contents against the active session.
    pub fn submit_guess(&mut self, raw: &str) {
        if self.ui.paused {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let parsed = raw
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| raw.parse::<u32>().ok())
            .flatten()
            .filter(|_| raw.len() <= MAX_INPUT_LEN);
        let Some(guess) = parsed else {
            warn!(input = raw, "rejected guess");
            self.ui.message = INVALID_NUMBER_MESSAGE.to_string();
            return;
        };
        let Some(outcome) = session.guess(guess) else {
            return;
        };

        match &outcome {
            GuessOutcome::Won { attempts } => {
                info!(attempts, "session won");
                self.ui.screen = Screen::GameOver;
            }
            GuessOutcome::Lost { secret } => {
                info!(secret, "session lost");
                self.ui.screen = Screen::GameOver;
            }
            GuessOutcome::Miss { proximity, hint, attempts, .. } => {
                debug!(guess, ?proximity, ?hint, attempts, "guess evaluated");
            }
        }
        self.ui.message = outcome.to_string();
    }

    /// `keep_difficulty` replays the current level; otherwise back to selection.
    pub fn reset(&mut self, keep_difficulty: bool) {
        self.ui.pending_input.clear();
        match self.session.as_ref().map(GameSession::difficulty) {
            Some(difficulty) if keep_difficulty => {
                debug!("restarting at same difficulty");
                self.select_difficulty(difficulty);
            }
            _ => {
                debug!("returning to difficulty selection");
                self.session = None;
                self.ui.screen = Screen::SelectDifficulty;
                self.ui.message = SELECT_MESSAGE.to_string();
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.ui.paused = !self.ui.paused;
        debug!(paused = self.ui.paused, "pause toggled");
    }

    pub fn toggle_menu(&mut self) {
        self.ui.menu_open = !self.ui.menu_open;
        debug!(menu_open = self.ui.menu_open, "menu toggled");
    }

    /// Applies one input event. `Break` means the player asked to quit.
    pub fn handle_event(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                return ControlFlow::Break(());
            }
            InputEvent::Click(pos) => return self.handle_click(pos),
            InputEvent::ToggleMenu => self.toggle_menu(),
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::Back => {
                if self.ui.screen != Screen::SelectDifficulty {
                    self.reset(false);
                }
            }
            other => match self.ui.screen {
                Screen::SelectDifficulty => {
                    if let InputEvent::Digit(c) = other {
                        if let Some(difficulty) = Difficulty::from_shortcut(c) {
                            self.select_difficulty(difficulty);
                        }
                    }
                }
                Screen::Playing if !self.ui.paused => self.handle_typing(other),
                Screen::Playing => {}
                Screen::GameOver => match other {
                    InputEvent::Restart => self.reset(true),
                    InputEvent::MainMenu => self.reset(false),
                    _ => {}
                },
            },
        }
        ControlFlow::Continue(())
    }

    fn handle_typing(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(c)
                if c.is_ascii_digit() && self.ui.pending_input.len() < MAX_INPUT_LEN =>
            {
                self.ui.pending_input.push(c);
            }
            InputEvent::Backspace => {
                self.ui.pending_input.pop();
            }
            InputEvent::Submit if !self.ui.pending_input.is_empty() => {
                let raw = std::mem::take(&mut self.ui.pending_input);
                self.submit_guess(&raw);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) -> ControlFlow<()> {
        let layout = self.layout;

        if self.ui.menu_open {
            if let Some(item) = layout.menu_item_at(pos) {
                debug!(?item, "menu item clicked");
                match item {
                    MenuItem::Resume => self.ui.paused = false,
                    MenuItem::Pause => self.ui.paused = true,
                    MenuItem::Quit => {
                        info!("quit from menu");
                        return ControlFlow::Break(());
                    }
                }
                self.ui.menu_open = false;
                return ControlFlow::Continue(());
            }
        }

        if layout.hamburger().contains(pos) {
            self.toggle_menu();
            return ControlFlow::Continue(());
        }

        match self.ui.screen {
            Screen::Playing | Screen::GameOver if layout.back_button().contains(pos) => {
                self.reset(false);
            }
            Screen::SelectDifficulty => {
                if let Some(difficulty) = layout.difficulty_at(pos) {
                    self.select_difficulty(difficulty);
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::center_of;
    use crate::game::session::SessionStatus;

    fn controller() -> GameController {
        GameController::new(ScreenLayout::new(120, 40), Some(7))
    }

    fn type_number(game: &mut GameController, n: u32) {
        for c in n.to_string().chars() {
            let _ = game.handle_event(InputEvent::Digit(c));
        }
        let _ = game.handle_event(InputEvent::Submit);
    }

    /// A number in range that is not the secret
    fn wrong_guess(game: &GameController) -> u32 {
        let session = game.session().unwrap();
        if session.secret() == session.profile().min {
            session.profile().max
        } else {
            session.profile().min
        }
    }

    #[test]
    fn starts_on_selection_screen() {
        let game = controller();
        assert_eq!(game.screen(), Screen::SelectDifficulty);
        assert!(game.session().is_none());
        assert_eq!(game.message(), SELECT_MESSAGE);
    }

    #[test]
    fn selecting_starts_a_session() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Hard);
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.message(), "Guess a number between 1 and 200");
        let session = game.session().unwrap();
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn typing_is_capped_at_three_digits() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        for c in ['1', '2', '3', '4'] {
            let _ = game.handle_event(InputEvent::Digit(c));
        }
        assert_eq!(game.ui().pending_input, "123");
        let _ = game.handle_event(InputEvent::Backspace);
        assert_eq!(game.ui().pending_input, "12");
    }

    #[test]
    fn non_digit_characters_never_reach_the_input() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let _ = game.handle_event(InputEvent::Digit('x'));
        let _ = game.handle_event(InputEvent::Digit('é'));
        let _ = game.handle_event(InputEvent::Digit('٣'));
        assert!(game.ui().pending_input.is_empty());
        let _ = game.handle_event(InputEvent::Digit('9'));
        assert_eq!(game.ui().pending_input, "9");
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let _ = game.handle_event(InputEvent::Submit);
        assert_eq!(game.session().unwrap().attempts_used(), 0);
    }

    #[test]
    fn correct_guess_ends_the_game() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Medium);
        let secret = game.session().unwrap().secret();
        type_number(&mut game, secret);
        assert_eq!(game.screen(), Screen::GameOver);
        assert_eq!(game.session().unwrap().status(), SessionStatus::Won);
        assert!(game.message().contains("in 1 attempts"));
        assert!(game.ui().pending_input.is_empty());
    }

    #[test]
    fn miss_updates_message_and_history() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let guess = wrong_guess(&game);
        type_number(&mut game, guess);
        assert_eq!(game.screen(), Screen::Playing);
        assert!(game.message().ends_with("Attempts: 1/10"));
        assert_eq!(game.session().unwrap().history()[0].guess, guess);
    }

    #[test]
    fn invalid_input_keeps_attempts() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        game.submit_guess("4x");
        assert_eq!(game.message(), INVALID_NUMBER_MESSAGE);
        game.submit_guess("+5");
        assert_eq!(game.message(), INVALID_NUMBER_MESSAGE);
        game.submit_guess("1234");
        assert_eq!(game.message(), INVALID_NUMBER_MESSAGE);
        assert_eq!(game.session().unwrap().attempts_used(), 0);
    }

    #[test]
    fn pause_blocks_typing_and_submission() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let _ = game.handle_event(InputEvent::TogglePause);
        let _ = game.handle_event(InputEvent::Digit('5'));
        assert!(game.ui().pending_input.is_empty());
        game.submit_guess("5");
        assert_eq!(game.session().unwrap().attempts_used(), 0);
        let _ = game.handle_event(InputEvent::TogglePause);
        let _ = game.handle_event(InputEvent::Digit('5'));
        assert_eq!(game.ui().pending_input, "5");
    }

    #[test]
    fn restart_keeps_difficulty_and_clears_history() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        for _ in 0..10 {
            let guess = wrong_guess(&game);
            type_number(&mut game, guess);
        }
        assert_eq!(game.screen(), Screen::GameOver);
        assert_eq!(game.session().unwrap().status(), SessionStatus::Lost);
        assert!(game.message().starts_with("Game Over! The number was"));

        let _ = game.handle_event(InputEvent::Restart);
        let session = game.session().unwrap();
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert!(session.history().is_empty());
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn main_menu_key_clears_difficulty() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let secret = game.session().unwrap().secret();
        type_number(&mut game, secret);
        let _ = game.handle_event(InputEvent::MainMenu);
        assert_eq!(game.screen(), Screen::SelectDifficulty);
        assert!(game.session().is_none());
    }

    #[test]
    fn restart_key_does_nothing_mid_game() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let _ = game.handle_event(InputEvent::Restart);
        let _ = game.handle_event(InputEvent::MainMenu);
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn quit_breaks_the_loop() {
        let mut game = controller();
        assert_eq!(game.handle_event(InputEvent::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn clicking_a_difficulty_button_selects_it() {
        let mut game = controller();
        let medium = center_of(game.layout().difficulty_button(Difficulty::Medium));
        let _ = game.handle_event(InputEvent::Click(medium));
        assert_eq!(game.session().unwrap().difficulty(), Difficulty::Medium);
    }

    #[test]
    fn back_button_returns_to_selection() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Hard);
        let back = center_of(game.layout().back_button());
        let _ = game.handle_event(InputEvent::Click(back));
        assert_eq!(game.screen(), Screen::SelectDifficulty);
        assert!(game.session().is_none());
    }

    #[test]
    fn menu_buttons_drive_pause_and_quit() {
        let mut game = controller();
        game.select_difficulty(Difficulty::Easy);
        let layout = *game.layout();

        let _ = game.handle_event(InputEvent::Click(center_of(layout.hamburger())));
        assert!(game.ui().menu_open);
        let _ = game.handle_event(InputEvent::Click(center_of(layout.menu_button(MenuItem::Pause))));
        assert!(game.ui().paused);
        assert!(!game.ui().menu_open);
        assert_eq!(game.screen(), Screen::Playing);

        let _ = game.handle_event(InputEvent::Click(center_of(layout.hamburger())));
        let _ = game.handle_event(InputEvent::Click(center_of(layout.menu_button(MenuItem::Resume))));
        assert!(!game.ui().paused);

        let _ = game.handle_event(InputEvent::ToggleMenu);
        let quit = center_of(layout.menu_button(MenuItem::Quit));
        assert_eq!(game.handle_event(InputEvent::Click(quit)), ControlFlow::Break(()));
    }

    #[test]
    fn menu_buttons_are_inert_while_closed() {
        let mut game = controller();
        let quit = center_of(game.layout().menu_button(MenuItem::Quit));
        assert_eq!(game.handle_event(InputEvent::Click(quit)), ControlFlow::Continue(()));
    }

    #[test]
    fn seeded_controllers_draw_the_same_secrets() {
        let mut a = controller();
        let mut b = controller();
        for _ in 0..5 {
            a.select_difficulty(Difficulty::Hard);
            b.select_difficulty(Difficulty::Hard);
            assert_eq!(a.session().unwrap().secret(), b.session().unwrap().secret());
        }
    }
}
