use thiserror::Error;

/// Failures of the windowing and drawing side. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to initialize SDL: {0}")]
    Init(String),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("draw call failed: {0}")]
    Render(String),
}
