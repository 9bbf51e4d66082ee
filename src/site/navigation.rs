use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

/// Scroll offset beyond which the bar switches to its denser backdrop.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Teal accent of the active item (`#2dd4bf`).
pub const ACTIVE_ITEM_COLOR: Color = Color::rgb(45.0 / 255.0, 212.0 / 255.0, 191.0 / 255.0);

const BAR_TOP_PX: f64 = 16.0;
const BAR_PADDING_X_PX: f64 = 16.0;
const BAR_PADDING_Y_PX: f64 = 8.0;
const BAR_CORNER_RADIUS_PX: f64 = 16.0;
const ITEM_PADDING_X_PX: f64 = 16.0;
const ITEM_HEIGHT_PX: f64 = 32.0;
const ITEM_FONT_SIZE_PX: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Introduction,
    InterestingFinds,
    AnalyzeData,
    ExploreRoom,
}

impl Route {
    /// Display order of the navigation items.
    pub const ALL: [Self; 4] = [
        Self::Introduction,
        Self::InterestingFinds,
        Self::AnalyzeData,
        Self::ExploreRoom,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Introduction => "/",
            Self::InterestingFinds => "/interesting-finds",
            Self::AnalyzeData => "/analyze-data",
            Self::ExploreRoom => "/explore-room",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::InterestingFinds => "Interesting Finds",
            Self::AnalyzeData => "Analyze Data",
            Self::ExploreRoom => "Explore Room",
        }
    }

    /// Exact path lookup. Trailing slashes and query strings do not match.
    pub fn from_path(path: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| ChartError::UnknownRoute(path.to_owned()))
    }
}

/// Resolved presentation of one navigation entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub active: bool,
    pub color: Color,
    pub font_weight: u16,
}

/// Top navigation bar state: current location and scroll flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    location: String,
    scrolled: bool,
    listening: bool,
}

impl NavBar {
    /// Mounts the bar at `location` and starts listening to scroll events.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            scrolled: false,
            listening: true,
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Any path is accepted; paths outside [`Route::ALL`] leave every item
    /// inactive.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        debug!(location = %self.location, "navigation location changed");
    }

    #[must_use]
    pub fn active_route(&self) -> Option<Route> {
        Route::from_path(&self.location).ok()
    }

    #[must_use]
    pub fn items(&self) -> [NavItem; 4] {
        let active_route = self.active_route();
        Route::ALL.map(|route| {
            let active = active_route == Some(route);
            NavItem {
                route,
                active,
                color: if active { ACTIVE_ITEM_COLOR } else { Color::WHITE },
                font_weight: if active {
                    TextPrimitive::WEIGHT_BOLD
                } else {
                    TextPrimitive::WEIGHT_NORMAL
                },
            }
        })
    }

    /// Window scroll notification. Ignored once the bar is unmounted.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !self.listening {
            debug!("ignore scroll on unmounted navigation bar");
            return;
        }
        let scrolled = scroll_y > SCROLL_THRESHOLD_PX;
        if scrolled != self.scrolled {
            trace!(scroll_y, scrolled, "navigation scroll state changed");
        }
        self.scrolled = scrolled;
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn backdrop_color(&self) -> Color {
        Color::rgba(0.0, 0.0, 0.0, if self.scrolled { 0.4 } else { 0.2 })
    }

    /// Removes the scroll listener.
    pub fn unmount(&mut self) {
        self.listening = false;
    }

    /// Centered pill holding the items left to right.
    pub fn build_render_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let items = self.items();
        let widths = items.map(|item| {
            estimate_text_width_px(item.route.label(), ITEM_FONT_SIZE_PX) + 2.0 * ITEM_PADDING_X_PX
        });
        let bar_width = widths.iter().sum::<f64>() + 2.0 * BAR_PADDING_X_PX;
        let bar_height = ITEM_HEIGHT_PX + 2.0 * BAR_PADDING_Y_PX;
        let bar_left = (f64::from(viewport.width) - bar_width) / 2.0;

        let mut frame = RenderFrame::new(viewport).with_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(bar_left, BAR_TOP_PX, bar_width, bar_height, self.backdrop_color())
                .with_corner_radius(BAR_CORNER_RADIUS_PX),
        );

        let baseline = BAR_TOP_PX + BAR_PADDING_Y_PX + ITEM_HEIGHT_PX / 2.0 + 0.35 * ITEM_FONT_SIZE_PX;
        let mut cursor = bar_left + BAR_PADDING_X_PX;
        for (item, width) in items.iter().zip(widths) {
            frame.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    item.route.label(),
                    cursor + width / 2.0,
                    baseline,
                    ITEM_FONT_SIZE_PX,
                    item.color,
                    TextHAlign::Center,
                )
                .with_weight(item.font_weight),
            );
            cursor += width;
        }

        frame.validate()?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, SCROLL_THRESHOLD_PX};

    #[test]
    fn paths_round_trip_through_lookup() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).expect("known path"), route);
        }
        assert!(Route::from_path("/explore-room/").is_err());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut bar = super::NavBar::new("/");
        bar.on_scroll(SCROLL_THRESHOLD_PX);
        assert!(!bar.is_scrolled());
        bar.on_scroll(SCROLL_THRESHOLD_PX + 0.5);
        assert!(bar.is_scrolled());
    }
}
