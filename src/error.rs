use thiserror::Error;

/// Startup failures that leave the page without a running visualizer.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("browser environment unavailable: {0}")]
    NoEnvironment(&'static str),
    #[error("missing #{0} element")]
    MissingElement(&'static str),
    #[error("#{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("WebGPU is not available")]
    GraphicsUnavailable,
    #[error("renderer setup failed: {0}")]
    Renderer(String),
}
