//! Turns controller state into draw calls. Nothing in here mutates the game.

use ratatui::layout::{Position, Rect};

use crate::core::layout::{center_of, MenuItem, ScreenLayout};
use crate::core::renderer::{Anchor, FontTier, Palette, Renderer};
use crate::game::controller::{GameController, Screen};
use crate::game::session::{GameSession, SessionStatus};

/// Number of past guesses listed on the play screen
const HISTORY_ROWS: usize = 10;

impl GameController {
    pub fn draw<R: Renderer + ?Sized>(&self, r: &mut R) {
        let layout = self.layout();
        draw_background(r, layout);

        match (self.screen(), self.session()) {
            (Screen::SelectDifficulty, _) | (_, None) => draw_difficulty_selection(r, layout),
            (_, Some(session)) => self.draw_game(r, session),
        }

        // hamburger sits above everything else
        self.draw_hamburger_menu(r);
    }

    fn draw_game<R: Renderer + ?Sized>(&self, r: &mut R, session: &GameSession) {
        let layout = self.layout();
        let ui = self.ui();
        let profile = session.profile();

        let back = layout.back_button();
        r.fill_rect(back, Palette::LightBlue, 5);
        r.outline_rect(back, Palette::Black, 2, 5);
        r.text("Back", FontTier::Small, Palette::Black, Anchor::Center(center_of(back)));

        r.text(
            &format!("Number Guessing Game - {}", profile.name),
            FontTier::Title,
            Palette::Purple,
            Anchor::Center(layout.centered(0.05)),
        );

        let area = layout.game_area();
        r.fill_rect(area, Palette::White, 15);
        r.outline_rect(area, Palette::DarkGray, 3, 15);

        r.text(
            &ui.message,
            FontTier::Medium,
            Palette::Blue,
            Anchor::Center(layout.centered(0.15)),
        );

        if ui.paused {
            draw_pause_overlay(r, layout, area);
            return;
        }

        if self.screen() == Screen::Playing {
            let input = layout.input_box();
            r.fill_rect(input, Palette::Gray, 10);
            r.outline_rect(input, Palette::Black, 2, 10);
            r.text(
                &ui.pending_input,
                FontTier::Large,
                Palette::Black,
                Anchor::Center(center_of(input)),
            );
            r.text(
                "Press ENTER to submit your guess",
                FontTier::Small,
                Palette::DarkGray,
                Anchor::Center(layout.centered(0.28)),
            );
        } else {
            let (banner, color) = match session.status() {
                SessionStatus::Won => ("You Won!".to_string(), Palette::Green),
                _ => (format!("Game Over! Number was {}", session.secret()), Palette::Red),
            };
            r.text(&banner, FontTier::Large, color, Anchor::Center(layout.centered(0.2)));
            r.text(
                "Press R to play again",
                FontTier::Medium,
                Palette::Blue,
                Anchor::Center(layout.centered(0.25)),
            );
            r.text(
                "Press M for main menu",
                FontTier::Medium,
                Palette::Blue,
                Anchor::Center(layout.centered(0.3)),
            );
        }

        r.text(
            "Guess History:",
            FontTier::Medium,
            Palette::Black,
            Anchor::TopLeft(layout.point(0.1, 0.35)),
        );
        let history = session.history();
        let first = history.len().saturating_sub(HISTORY_ROWS);
        for (row, record) in history[first..].iter().enumerate() {
            r.text(
                &format!("Guess #{}: {}", first + row + 1, record.guess),
                FontTier::Small,
                record.color(),
                Anchor::TopLeft(layout.history_row(row)),
            );
        }

        r.text(
            &format!("Range: {} - {}", profile.min, profile.max),
            FontTier::Small,
            Palette::DarkGray,
            Anchor::TopLeft(layout.point(0.7, 0.35)),
        );
        r.text(
            &format!("Attempts: {}/{}", session.attempts_used(), profile.max_attempts),
            FontTier::Small,
            Palette::DarkGray,
            Anchor::TopLeft(layout.point(0.7, 0.4)),
        );
        let badge = layout.difficulty_badge();
        r.fill_rect(badge, profile.accent, 5);
        r.text(profile.name, FontTier::Small, Palette::Black, Anchor::Center(center_of(badge)));
    }

    fn draw_hamburger_menu<R: Renderer + ?Sized>(&self, r: &mut R) {
        let layout = self.layout();
        r.fill_rect(layout.hamburger(), Palette::DarkGray, 5);
        for bar in layout.hamburger_bars() {
            r.fill_rect(bar, Palette::White, 0);
        }

        if !self.ui().menu_open {
            return;
        }
        let panel = layout.menu_panel();
        r.fill_rect(panel, Palette::White, 10);
        r.outline_rect(panel, Palette::Black, 2, 10);
        for item in MenuItem::ALL {
            let button = layout.menu_button(item);
            let color = match item {
                MenuItem::Resume => Palette::LightGreen,
                MenuItem::Pause => Palette::LightBlue,
                MenuItem::Quit => Palette::LightRed,
            };
            r.fill_rect(button, color, 5);
            r.text(item.label(), FontTier::Small, Palette::Black, Anchor::Center(center_of(button)));
        }
    }
}

/// Vertical grey ramp, lighter at the top
fn draw_background<R: Renderer + ?Sized>(r: &mut R, layout: &ScreenLayout) {
    let height = u32::from(layout.height.max(1));
    for y in 0..layout.height {
        let shade = 180 + u32::from(y) * 50 / height;
        r.fill_rect(Rect::new(0, y, layout.width, 1), Palette::Shade(shade as u8), 0);
    }
}

fn draw_difficulty_selection<R: Renderer + ?Sized>(r: &mut R, layout: &ScreenLayout) {
    r.text(
        "Number Guessing Game",
        FontTier::Title,
        Palette::Purple,
        Anchor::Center(layout.centered(0.08)),
    );
    r.text(
        "Select Difficulty Level",
        FontTier::Medium,
        Palette::Black,
        Anchor::Center(layout.centered(0.12)),
    );

    for difficulty in crate::game::difficulty::Difficulty::ALL {
        let profile = difficulty.profile();
        let button = layout.difficulty_button(difficulty);
        r.fill_rect(button, profile.accent, 15);
        r.outline_rect(button, Palette::Black, 2, 15);
        r.text(profile.name, FontTier::Large, Palette::Black, Anchor::Center(center_of(button)));

        let details_y = button.bottom() + (f32::from(button.height) * 0.6).round() as u16;
        r.text(
            &profile.details(),
            FontTier::Medium,
            Palette::Black,
            Anchor::Center(Position::new(center_of(button).x, details_y)),
        );
    }

    r.text(
        "Click a level or press 1-3",
        FontTier::Small,
        Palette::DarkGray,
        Anchor::Center(layout.centered(0.7)),
    );
}

fn draw_pause_overlay<R: Renderer + ?Sized>(r: &mut R, layout: &ScreenLayout, area: Rect) {
    r.fill_rect(area, Palette::Overlay, 15);
    let middle = layout.centered(0.5);
    r.text("GAME PAUSED", FontTier::Large, Palette::White, Anchor::Center(middle));
    r.text(
        "Click menu to resume",
        FontTier::Medium,
        Palette::White,
        Anchor::Center(layout.centered(0.55)),
    );
}
