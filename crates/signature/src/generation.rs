//! crates/signature/src/generation.rs
//!
//! Signature table generation from reference documents.

#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::{HashParams, Murmur3, RollingHash};

use crate::block::BlockSignature;
use crate::table::SignatureTable;

/// Generates a signature table for `reference`.
///
/// The reference is tiled into `reference.len().div_ceil(block_size)`
/// consecutive blocks; every block except possibly the last spans the full
/// block size. Each block is recorded with its rolling hash, its Murmur3
/// digest, and a borrowed view of its bytes. An empty reference yields an
/// empty table.
///
/// Generation is deterministic: the same parameters and reference always
/// produce the same table.
#[cfg_attr(
    feature = "tracing",
    instrument(
        skip(params, reference),
        fields(
            reference_len = reference.len(),
            block_size = params.block_size().get()
        ),
        name = "generate_signatures"
    )
)]
#[must_use]
pub fn generate_signatures<'a>(params: &HashParams, reference: &'a [u8]) -> SignatureTable<'a> {
    let blocks = reference
        .chunks(params.block_len())
        .enumerate()
        .map(|(index, chunk)| signature_for(params, index as u32, chunk))
        .collect();

    SignatureTable::new(params, reference.len(), blocks)
}

/// Hashes a single block. Shared with the parallel generator so both produce
/// identical tables.
pub(crate) fn signature_for<'a>(
    params: &HashParams,
    index: u32,
    chunk: &'a [u8],
) -> BlockSignature<'a> {
    let weak = RollingHash::from_window(params, chunk).value();
    let strong = Murmur3::digest(params.strong_seed(), chunk);
    BlockSignature::new(index, weak, strong, chunk)
}
