/// Draw-call vocabulary shared by every rendering backend
use ratatui::layout::{Position, Rect};
use serde::Serialize;

/// Named colours used by the game. Backends map these onto whatever the
/// display supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    White,
    Black,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Gray,
    DarkGray,
    LightBlue,
    LightGreen,
    LightRed,
    /// Neutral grey of the given intensity (background gradient)
    Shade(u8),
    /// Dimmed backdrop drawn behind the pause banner
    Overlay,
}

impl Palette {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Palette::White => (255, 255, 255),
            Palette::Black => (0, 0, 0),
            Palette::Blue => (0, 123, 255),
            Palette::Red => (255, 0, 0),
            Palette::Green => (0, 255, 0),
            Palette::Yellow => (255, 255, 0),
            Palette::Purple => (128, 0, 128),
            Palette::Gray => (200, 200, 200),
            Palette::DarkGray => (100, 100, 100),
            Palette::LightBlue => (173, 216, 230),
            Palette::LightGreen => (144, 238, 144),
            Palette::LightRed => (255, 182, 193),
            Palette::Shade(v) => (v, v, v),
            Palette::Overlay => (40, 40, 40),
        }
    }
}

/// Relative text size. Terminal backends express tiers through modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTier {
    Title,
    Large,
    Medium,
    Small,
}

/// Where a piece of text is pinned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center(Position),
    TopLeft(Position),
}

/// Rendering backend trait - the game only ever talks to this
pub trait Renderer {
    /// Fill a rectangle with a solid colour
    fn fill_rect(&mut self, rect: Rect, color: Palette, radius: u16);

    /// Stroke the border of a rectangle
    fn outline_rect(&mut self, rect: Rect, color: Palette, thickness: u16, radius: u16);

    /// Draw a single line of text
    fn text(&mut self, content: &str, tier: FontTier, color: Palette, anchor: Anchor);
}
