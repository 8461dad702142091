use thiserror::Error;
use vess_interpolate::InterpolationError;

pub type Result<T, E = VessError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum VessError {
    #[error("initialization failed: {0}")]
    Initialization(String),
    #[error("secure randomness unavailable: {0}")]
    Randomness(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid threshold {threshold} for {nodes} shares")]
    InvalidThreshold { threshold: usize, nodes: usize },
    #[error("insufficient shares: need {required}, got {got}")]
    InsufficientShares { required: usize, got: usize },
    #[error("share index {0} submitted with conflicting values")]
    InconsistentShare(u64),
    #[error("share index {index} outside of 1..={nodes}")]
    InvalidShareIndex { index: u64, nodes: usize },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl From<rand_core::Error> for VessError {
    fn from(err: rand_core::Error) -> Self {
        Self::Randomness(err.to_string())
    }
}
