use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid rail geometry: rail_length={rail_length}, handle_size={handle_size}")]
    InvalidGeometry { rail_length: f64, handle_size: f64 },

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
