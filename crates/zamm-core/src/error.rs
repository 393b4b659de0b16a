use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed timing: {0}")]
    MalformedTiming(String),

    #[error("Negative duration: interval ends at {end} before it starts at {start}")]
    NegativeDuration { start: f64, end: f64 },

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("Cannot nest inside a zero-duration parent starting at {0} ms")]
    DegenerateParent(f64),

    #[error("Timing group must contain at least one member")]
    EmptyGroup,

    #[error("Invalid speed scale factor: {0}")]
    InvalidScaleFactor(f64),

    #[error("Spacing fraction {0} leaves no time for the transition")]
    DegenerateTransition(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
