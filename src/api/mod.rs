mod scatter_chart;
mod scatter_config;
mod scatter_render_frame_builder;

pub use scatter_chart::{RenderOutcome, ScatterChart};
pub use scatter_config::{
    AxisStyle, DEFAULT_MARKER_COLOR, MarkerStyle, ScatterChartConfig, TooltipStyle,
};
pub use scatter_render_frame_builder::tooltip_text;
