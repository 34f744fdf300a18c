use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// A body or configuration value is out of range (non-positive mass,
    /// non-finite position or velocity, zero sub-steps, ...)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A step was requested with a negative or non-finite time increment
    #[error("Invalid time increment {dt}: must be finite and non-negative")]
    InvalidArgument { dt: f64 },

    #[error("Failed to parse scenario!")]
    Scenario(#[from] serde_yaml::Error),

    #[error("Failed to read scenario file!")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
