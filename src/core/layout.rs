//! Screen geometry scaled from the display size captured at startup.
//!
//! Every region is expressed as a fraction of the screen width/height, so the
//! same numbers drive both drawing and click hit-testing.

use ratatui::layout::{Position, Rect};

use crate::game::difficulty::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Resume,
    Pause,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Resume, MenuItem::Pause, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Resume => "Resume",
            MenuItem::Pause => "Pause",
            MenuItem::Quit => "Quit",
        }
    }

    fn top(self) -> f32 {
        match self {
            MenuItem::Resume => 0.07,
            MenuItem::Pause => 0.13,
            MenuItem::Quit => 0.19,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
}

impl ScreenLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn x(&self, f: f32) -> u16 {
        (self.width as f32 * f).round() as u16
    }

    fn y(&self, f: f32) -> u16 {
        (self.height as f32 * f).round() as u16
    }

    /// Rect from fractional origin and size; extents never collapse to zero.
    pub fn scaled(&self, fx: f32, fy: f32, fw: f32, fh: f32) -> Rect {
        Rect::new(
            self.x(fx),
            self.y(fy),
            self.x(fw).max(1),
            self.y(fh).max(1),
        )
    }

    pub fn point(&self, fx: f32, fy: f32) -> Position {
        Position::new(self.x(fx), self.y(fy))
    }

    /// Horizontal centre of the screen at fractional height `fy`
    pub fn centered(&self, fy: f32) -> Position {
        Position::new(self.width / 2, self.y(fy))
    }

    pub fn back_button(&self) -> Rect {
        self.scaled(0.05, 0.05, 0.1, 0.05)
    }

    pub fn hamburger(&self) -> Rect {
        self.scaled(1.0 - 0.06, 0.02, 0.04, 0.05)
    }

    /// The three bars of the hamburger icon
    pub fn hamburger_bars(&self) -> [Rect; 3] {
        let button = self.hamburger();
        let bar_width = self.x(0.02).max(1);
        let x = button.x + button.width.saturating_sub(bar_width) / 2;
        let rows = button.height.max(1);
        std::array::from_fn(|i| {
            let y = button.y + (i as u16 * rows / 3).min(rows - 1);
            Rect::new(x, y, bar_width, 1)
        })
    }

    pub fn menu_panel(&self) -> Rect {
        self.scaled(1.0 - 0.17, 0.065, 0.16, 0.17)
    }

    /// Items never share a row, even when rounding squeezes them together.
    pub fn menu_buttons(&self) -> [Rect; 3] {
        let mut floor = 0;
        MenuItem::ALL.map(|item| {
            let mut rect = self.scaled(1.0 - 0.16, item.top(), 0.14, 0.05);
            rect.y = rect.y.max(floor);
            floor = rect.bottom();
            rect
        })
    }

    pub fn menu_button(&self, item: MenuItem) -> Rect {
        self.menu_buttons()[item as usize]
    }

    pub fn difficulty_button(&self, difficulty: Difficulty) -> Rect {
        let top = match difficulty {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.32,
            Difficulty::Hard => 0.49,
        };
        let width = self.x(0.3).max(1);
        Rect::new(
            (self.width / 2).saturating_sub(width / 2),
            self.y(top),
            width,
            self.y(0.08).max(1),
        )
    }

    pub fn game_area(&self) -> Rect {
        self.scaled(0.05, 0.12, 0.9, 0.85)
    }

    pub fn input_box(&self) -> Rect {
        let width = self.x(0.2).max(1);
        Rect::new(
            (self.width / 2).saturating_sub(width / 2),
            self.y(0.2),
            width,
            self.y(0.06).max(1),
        )
    }

    /// Top-left of the `index`-th visible history row
    pub fn history_row(&self, index: usize) -> Position {
        Position::new(self.x(0.1), self.y(0.4 + index as f32 * 0.04))
    }

    pub fn difficulty_badge(&self) -> Rect {
        self.scaled(0.7, 0.45, 0.2, 0.05)
    }

    pub fn menu_item_at(&self, pos: Position) -> Option<MenuItem> {
        MenuItem::ALL
            .into_iter()
            .zip(self.menu_buttons())
            .find_map(|(item, rect)| rect.contains(pos).then_some(item))
    }

    pub fn difficulty_at(&self, pos: Position) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|d| self.difficulty_button(*d).contains(pos))
    }
}

/// Centre cell of a rect
pub fn center_of(rect: Rect) -> Position {
    Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}
