#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use checksums::{DEFAULT_STRONG_SEED, DEFAULT_WEAK_SEED, HashParams, Murmur3, RollingHash};
pub use matching::{DeltaEntry, DeltaError, DeltaPlan, compute_delta};
pub use signature::{
    BlockSignature, PARALLEL_THRESHOLD_BYTES, SignatureTable, generate_signatures,
    generate_signatures_auto, generate_signatures_parallel,
};

/// The outcome of a full two-phase comparison.
///
/// Bundles the signature table generated from the reference with the plan
/// computed against the target, each borrowing from its source document.
#[derive(Clone, Debug)]
pub struct Diff<'r, 't> {
    signatures: SignatureTable<'r>,
    plan: DeltaPlan<'t>,
}

impl<'r, 't> Diff<'r, 't> {
    /// Returns the signature table generated from the reference.
    #[inline]
    #[must_use]
    pub const fn signatures(&self) -> &SignatureTable<'r> {
        &self.signatures
    }

    /// Returns the delta plan computed against the target.
    #[inline]
    #[must_use]
    pub const fn plan(&self) -> &DeltaPlan<'t> {
        &self.plan
    }

    /// Splits the result into its table and plan.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (SignatureTable<'r>, DeltaPlan<'t>) {
        (self.signatures, self.plan)
    }
}

/// Runs both phases in one call: generates signatures for `reference`, then
/// matches `target` against them.
///
/// Signature generation picks sequential or parallel hashing based on the
/// reference size, exactly as [`generate_signatures_auto`] does. Run the
/// phases separately when the documents live on different machines or the
/// table is reused across several targets.
///
/// # Errors
///
/// Returns [`DeltaError`] when the generated table and `params` disagree on
/// block size or seeds, as [`compute_delta`] reports.
pub fn diff<'r, 't>(
    params: &HashParams,
    reference: &'r [u8],
    target: &'t [u8],
) -> Result<Diff<'r, 't>, DeltaError> {
    let signatures = generate_signatures_auto(params, reference);
    let plan = compute_delta(params, &signatures, target)?;
    Ok(Diff { signatures, plan })
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    #[test]
    fn diff_bundles_both_phases() {
        let params = HashParams::new(NonZeroU32::new(4).expect("block size"));
        let result = diff(&params, b"abcdwxyz", b"abcdNEWwxyz").expect("params agree");

        assert_eq!(result.signatures().len(), 2);
        assert_eq!(result.plan().len(), 2);
        assert_eq!(result.plan().entries()[1].literal(), b"NEW");

        let (table, plan) = result.into_parts();
        assert_eq!(table.len(), plan.len());
    }
}
