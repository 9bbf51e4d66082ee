pub mod layout;
pub mod projection;
pub mod scale;
pub mod ticks;
pub mod types;

pub use layout::{DOMAIN_PADDING_RATIO, ScatterLayout, max_or_zero, padded_domain_end};
pub use projection::{MarkerGeometry, project_markers};
pub use scale::LinearScale;
pub use ticks::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT, format_tick_label, nice_ticks, tick_step};
pub use types::{Margins, PlotArea, ScatterPoint, Viewport};
