use std::fmt;

use crate::core::renderer::Palette;

/// How close a guess landed, ordered from hottest to coldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Proximity {
    VeryHot,
    Hot,
    Warm,
    Cool,
    Cold,
}

impl Proximity {
    /// Buckets `difference` against percentages of the range's upper bound.
    pub fn classify(difference: u32, max: u32) -> Self {
        // diff <= max * pct / 100, kept in integers so 15 <= 50 * 30% holds exactly
        let within = |pct: u64| u64::from(difference) * 100 <= u64::from(max) * pct;
        if within(5) {
            Proximity::VeryHot
        } else if within(10) {
            Proximity::Hot
        } else if within(20) {
            Proximity::Warm
        } else if within(30) {
            Proximity::Cool
        } else {
            Proximity::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Proximity::VeryHot => "Very hot!",
            Proximity::Hot => "Hot!",
            Proximity::Warm => "Warm",
            Proximity::Cool => "Cool",
            Proximity::Cold => "Cold!",
        }
    }

    pub fn color(self) -> Palette {
        match self {
            Proximity::VeryHot => Palette::Red,
            Proximity::Hot | Proximity::Warm => Palette::Yellow,
            Proximity::Cool | Proximity::Cold => Palette::Blue,
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Higher,
    Lower,
}

impl Hint {
    pub fn for_guess(guess: u32, secret: u32) -> Self {
        if guess < secret {
            Hint::Higher
        } else {
            Hint::Lower
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Higher => f.write_str("Higher ↑"),
            Hint::Lower => f.write_str("Lower ↓"),
        }
    }
}
