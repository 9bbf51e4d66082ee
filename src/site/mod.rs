//! Page-level components around the scatter chart: navigation bar, titled
//! chart card and the explore-room hotspot scene.

mod chart_container;
mod explore_room;
mod explore_room_frame_builder;
mod hotspots;
mod navigation;

pub use chart_container::{ChartContainer, ContainerStyle};
pub use explore_room::{
    BackgroundTransform, ExplorePhase, ExploreRoom, ExploreRoomTiming, InfoCardPresentation,
};
pub use explore_room_frame_builder::{info_card_width, wrap_text};
pub use hotspots::{HOTSPOT_ICON_COLOR, Hotspot, HotspotIcon, HotspotRegistry};
pub use navigation::{ACTIVE_ITEM_COLOR, NavBar, NavItem, Route, SCROLL_THRESHOLD_PX};
