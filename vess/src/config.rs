use crate::hash::ETH_POP_DST;
use serde::{Deserialize, Serialize};

/// Settings fixed once when the engine is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Domain separation tag for hashing messages to G2. Signer and verifier
    /// must agree on it or every signature silently fails to verify.
    pub hash_dst: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_dst: ETH_POP_DST.to_string(),
        }
    }
}
