use super::{adjudicate, Parameters, PartialDecryption};
use crate::error::{Result, VessError};
use crate::scheme::Vess;
use crate::signature::{Signature, VesSignature};

use bls::G1Affine;
use log::{debug, warn};

use std::collections::BTreeMap;

/// Coordinator side of threshold adjudication for one encrypted signature.
///
/// Shareholders compute their partial decryptions independently; the
/// collector is the join point that checks each contribution as it arrives
/// and finalizes once `threshold` of them are present.
pub struct Collector<'a> {
    vess: &'a Vess,
    parameters: Parameters,
    ves: VesSignature,
    verification_keys: BTreeMap<u64, G1Affine>,
    partials: BTreeMap<u64, PartialDecryption>,
}

impl<'a> Collector<'a> {
    /// `verification_keys` are the published `Share::verification_key`s,
    /// indexed by share index.
    pub fn new(
        vess: &'a Vess,
        parameters: Parameters,
        ves: VesSignature,
        verification_keys: BTreeMap<u64, G1Affine>,
    ) -> Self {
        Self {
            vess,
            parameters,
            ves,
            verification_keys,
            partials: BTreeMap::new(),
        }
    }

    pub fn collect(&mut self, partial: PartialDecryption) -> Result<()> {
        if partial.index == 0 || partial.index > self.parameters.nodes() as u64 {
            warn!("partial with out of range index {}", partial.index);
            return Err(VessError::InvalidShareIndex {
                index: partial.index,
                nodes: self.parameters.nodes(),
            });
        }
        if let Some(existing) = self.partials.get(&partial.index) {
            if *existing == partial {
                return Ok(());
            }
            warn!("conflicting partial for index {}", partial.index);
            return Err(VessError::InconsistentShare(partial.index));
        }
        let vk = self.verification_keys.get(&partial.index).ok_or_else(|| {
            VessError::MalformedInput(format!(
                "no verification key for share index {}",
                partial.index
            ))
        })?;
        if !self.vess.verify_partial(&partial, vk, &self.ves.mu) {
            warn!("partial for index {} failed verification", partial.index);
            return Err(VessError::InconsistentShare(partial.index));
        }
        self.partials.insert(partial.index, partial);
        debug!(
            "collected {}/{} partials",
            self.partials.len(),
            self.parameters.threshold()
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.partials.len() >= self.parameters.threshold()
    }

    pub fn finalize(self) -> Result<Signature> {
        let partials = self.partials.into_values().collect::<Vec<PartialDecryption>>();
        adjudicate(&self.ves, &partials, &self.parameters)
    }
}
