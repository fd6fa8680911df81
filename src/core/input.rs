use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Position;

/// Discrete input events understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Digit(char),
    Backspace,
    Submit,
    Restart,
    MainMenu,
    Back,
    ToggleMenu,
    TogglePause,
    Click(Position),
}

impl InputEvent {
    /// Translate a raw terminal event. Anything without a meaning is dropped.
    pub fn from_terminal(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(InputEvent::Click(Position::new(mouse.column, mouse.row)))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(InputEvent::Quit);
        }
        let event = match key.code {
            KeyCode::Esc => InputEvent::Quit,
            KeyCode::Enter => InputEvent::Submit,
            KeyCode::Backspace => InputEvent::Backspace,
            KeyCode::Tab => InputEvent::ToggleMenu,
            KeyCode::Char(c) if c.is_ascii_digit() => InputEvent::Digit(c),
            KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') => InputEvent::MainMenu,
            KeyCode::Char('b') | KeyCode::Char('B') => InputEvent::Back,
            KeyCode::Char('p') | KeyCode::Char('P') => InputEvent::TogglePause,
            _ => return None,
        };
        Some(event)
    }
}
