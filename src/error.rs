use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("marker index {index} out of range for {len} markers")]
    MarkerOutOfRange { index: usize, len: usize },

    #[error("unknown hotspot `{0}`")]
    UnknownHotspot(String),

    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("chart container `{title}` has no content")]
    MissingContent { title: String },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
