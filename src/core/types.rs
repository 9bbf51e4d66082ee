use serde::{Deserialize, Serialize};

/// Measured pixel size of the host element.
///
/// A zero dimension means the host has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
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

/// Fixed space reserved around the plot for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const SCATTER: Self = Self {
        top: 20.0,
        right: 20.0,
        bottom: 60.0,
        left: 60.0,
    };

    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::SCATTER
    }
}

/// Inner plotting rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl PlotArea {
    /// Subtracts margins from the viewport. Sizes smaller than the margins
    /// collapse to zero rather than going negative.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            chart_width: (f64::from(viewport.width) - margins.left - margins.right).max(0.0),
            chart_height: (f64::from(viewport.height) - margins.top - margins.bottom).max(0.0),
        }
    }

    /// Converts plot-local coordinates into viewport coordinates.
    #[must_use]
    pub fn to_viewport(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top + y)
    }

    #[must_use]
    pub fn contains_local(self, x: f64, y: f64) -> bool {
        (0.0..=self.chart_width).contains(&x) && (0.0..=self.chart_height).contains(&y)
    }
}

/// One scatter sample as supplied by the host.
///
/// `label` is carried with the sample but does not affect rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    #[must_use]
    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for ScatterPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
