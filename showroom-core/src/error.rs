use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,

    #[error("carousel interval must be greater than zero")]
    ZeroInterval,

    #[error("unknown product category: {0}")]
    UnknownCategory(String),

    #[error("no tokio runtime available to drive the carousel ticker")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
