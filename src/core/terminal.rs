/// Terminal backend for the `Renderer` trait, drawing into a ratatui frame
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType},
    Frame,
};

use crate::core::renderer::{Anchor, FontTier, Palette, Renderer};

impl From<Palette> for Color {
    fn from(color: Palette) -> Self {
        let (r, g, b) = color.rgb();
        Color::Rgb(r, g, b)
    }
}

impl From<FontTier> for Modifier {
    fn from(tier: FontTier) -> Self {
        match tier {
            FontTier::Title => Modifier::BOLD | Modifier::UNDERLINED,
            FontTier::Large => Modifier::BOLD,
            FontTier::Medium => Modifier::empty(),
            FontTier::Small => Modifier::ITALIC,
        }
    }
}

pub struct TuiRenderer<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> TuiRenderer<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }

    /// Clip to the visible area; `None` when nothing would be visible.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.frame.area());
        (!clipped.is_empty()).then_some(clipped)
    }
}

impl Renderer for TuiRenderer<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Palette, _radius: u16) {
        if let Some(area) = self.clip(rect) {
            self.frame
                .render_widget(Block::new().style(Style::new().bg(color.into())), area);
        }
    }

    fn outline_rect(&mut self, rect: Rect, color: Palette, thickness: u16, radius: u16) {
        // A border needs at least one interior cell, otherwise it would hide
        // the fill underneath.
        if rect.width < 3 || rect.height < 3 {
            return;
        }
        let Some(area) = self.clip(rect) else { return };
        let border_type = if thickness >= 3 {
            BorderType::Thick
        } else if radius > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::new().fg(color.into()));
        self.frame.render_widget(block, area);
    }

    fn text(&mut self, content: &str, tier: FontTier, color: Palette, anchor: Anchor) {
        let line = Line::styled(
            content.to_string(),
            Style::new().fg(color.into()).add_modifier(tier.into()),
        );
        let width = line.width().min(u16::MAX as usize) as u16;
        let origin = match anchor {
            Anchor::Center(p) => (p.x.saturating_sub(width / 2), p.y),
            Anchor::TopLeft(p) => (p.x, p.y),
        };
        if let Some(area) = self.clip(Rect::new(origin.0, origin.1, width, 1)) {
            self.frame.render_widget(line, area);
        }
    }
}
