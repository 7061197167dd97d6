use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outer chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

/// Pixel interval a scale maps its domain onto.
///
/// `start` may be greater than `end`; the value axis uses that to plot larger
/// values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
