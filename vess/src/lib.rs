//! Verifiably encrypted BLS signatures on BLS12-381.
//!
//! A signer blinds an ordinary BLS signature under an adjudicator's public
//! key. Anyone can check that the result hides a valid signature on a given
//! message, while only the adjudicator, or any `n` of the `m` holders of a
//! share of its secret, can recover the signature itself.
//!
//! ```no_run
//! use rand_core::OsRng;
//! use vess::threshold::{self, Parameters, PartialDecryption};
//! use vess::{AdjudicatorKeypair, Keypair, Vess};
//!
//! # fn main() -> Result<(), vess::VessError> {
//! let vess = Vess::new()?;
//! let signer = Keypair::random(&mut OsRng)?;
//! let adjudicator = AdjudicatorKeypair::random(&mut OsRng)?;
//!
//! let msg = b"pay 10 to bob";
//! let sig = vess.sign(msg, signer.privkey());
//! let ves = vess.encrypt(&mut OsRng, &sig, &adjudicator.pubkey_g2())?;
//! assert!(vess.verify(msg, &signer.pubkey(), &adjudicator.pubkey_g1(), &ves));
//! assert_eq!(vess.adjudicate(&ves, adjudicator.privkey()), sig);
//!
//! let parameters = Parameters::new(3, 10)?;
//! let shares = threshold::split(&mut OsRng, adjudicator.privkey(), &parameters)?;
//! let partials = shares[4..7]
//!     .iter()
//!     .map(|share| share.partial_decrypt(&ves.mu))
//!     .collect::<Vec<PartialDecryption>>();
//! assert_eq!(threshold::adjudicate(&ves, &partials, &parameters)?, sig);
//! # Ok(())
//! # }
//! ```
#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keypair;
mod rng;
pub mod scheme;
pub mod signature;
pub mod threshold;

pub use config::Config;
pub use error::{Result, VessError};
pub use keypair::{AdjudicatorKeypair, Keypair};
pub use scheme::Vess;
pub use signature::{Signature, VesSignature};
