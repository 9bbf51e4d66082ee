//! scatter-room: headless interactive scatter plot and the page components
//! around it.
//!
//! Every component is a pure function from its state to a layered
//! [`render::RenderFrame`]; backends implement [`render::Renderer`]. Time is
//! host-driven through `advance(Duration)` so hover transitions and scene
//! delays are deterministic.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod site;
pub mod telemetry;

pub use api::{RenderOutcome, ScatterChart, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
