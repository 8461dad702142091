use crate::error::VessError;
use serde::{Deserialize, Serialize};

/// An n-of-m sharing: any `threshold` of the `nodes` shares suffice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    threshold: usize,
    nodes: usize,
}

#[derive(Deserialize)]
struct RawParameters {
    threshold: usize,
    nodes: usize,
}

impl Parameters {
    pub fn new(threshold: usize, nodes: usize) -> Result<Self, VessError> {
        if threshold == 0 || nodes < threshold {
            return Err(VessError::InvalidThreshold { threshold, nodes });
        }
        Ok(Self { threshold, nodes })
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = VessError;
    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw.threshold, raw.nodes)
    }
}
