//! crates/signature/src/parallel.rs
//!
//! Parallel signature generation using rayon.
//!
//! Reference blocks are independent, so this module hashes them concurrently
//! on rayon's thread pool. The resulting table is identical to the one the
//! sequential generator produces for the same input.

use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::HashParams;

use crate::generation::signature_for;
use crate::table::SignatureTable;

/// Minimum reference size (in bytes) where parallel generation is beneficial.
///
/// References smaller than this threshold should use the sequential
/// [`generate_signatures`](crate::generate_signatures) function to avoid
/// parallelization overhead.
///
/// The value is based on typical block sizes and the overhead of rayon's
/// work-stealing scheduler. For most systems, parallel processing becomes
/// beneficial when there are at least a few dozen blocks to hash.
pub const PARALLEL_THRESHOLD_BYTES: usize = 256 * 1024; // 256 KB

/// Generates a signature table using parallel checksum computation.
///
/// Blocks are hashed on rayon's thread pool and collected in index order, so
/// the table is bit-for-bit identical to the sequential result. The reference
/// is borrowed, not buffered, so there is no extra memory cost beyond the
/// table itself.
///
/// # Performance
///
/// Parallel hashing pays off when the reference has many blocks and multiple
/// CPU cores are available. For small references the scheduling overhead can
/// outweigh the benefit; see [`generate_signatures_auto`] for an adaptive
/// entry point.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
///
/// use checksums::HashParams;
/// use signature::parallel::generate_signatures_parallel;
///
/// let params = HashParams::new(NonZeroU32::new(512).unwrap());
/// let reference = vec![0u8; 4096];
/// let table = generate_signatures_parallel(&params, &reference);
/// assert_eq!(table.len(), 8);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(
        skip(params, reference),
        fields(
            reference_len = reference.len(),
            block_size = params.block_size().get()
        ),
        name = "generate_signatures_parallel"
    )
)]
#[must_use]
pub fn generate_signatures_parallel<'a>(
    params: &HashParams,
    reference: &'a [u8],
) -> SignatureTable<'a> {
    let blocks = reference
        .par_chunks(params.block_len())
        .enumerate()
        .map(|(index, chunk)| signature_for(params, index as u32, chunk))
        .collect();

    SignatureTable::new(params, reference.len(), blocks)
}

/// Generates a signature table, automatically choosing parallel or sequential
/// mode.
///
/// References of at least [`PARALLEL_THRESHOLD_BYTES`] are hashed in
/// parallel; smaller ones sequentially to avoid scheduling overhead. Both
/// paths produce identical tables.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
///
/// use checksums::HashParams;
/// use signature::parallel::generate_signatures_auto;
///
/// let params = HashParams::new(NonZeroU32::new(16).unwrap());
/// let table = generate_signatures_auto(&params, b"small references stay sequential");
/// assert_eq!(table.len(), 2);
/// ```
#[must_use]
pub fn generate_signatures_auto<'a>(
    params: &HashParams,
    reference: &'a [u8],
) -> SignatureTable<'a> {
    if reference.len() >= PARALLEL_THRESHOLD_BYTES {
        generate_signatures_parallel(params, reference)
    } else {
        crate::generate_signatures(params, reference)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use checksums::HashParams;

    use super::*;
    use crate::generate_signatures;

    fn params(block_size: u32) -> HashParams {
        HashParams::new(NonZeroU32::new(block_size).expect("block size must be non-zero"))
    }

    fn assert_tables_equal(sequential: &SignatureTable<'_>, parallel: &SignatureTable<'_>) {
        assert_eq!(sequential.len(), parallel.len());
        assert_eq!(sequential.source_len(), parallel.source_len());

        for (seq_block, par_block) in sequential.blocks().iter().zip(parallel.blocks().iter()) {
            assert_eq!(seq_block.index(), par_block.index());
            assert_eq!(seq_block.weak(), par_block.weak());
            assert_eq!(seq_block.strong(), par_block.strong());
            assert_eq!(seq_block.data(), par_block.data());
        }
    }

    #[test]
    fn parallel_matches_sequential_single_block() {
        let params = params(16);
        let sequential = generate_signatures(&params, b"hello world");
        let parallel = generate_signatures_parallel(&params, b"hello world");
        assert_tables_equal(&sequential, &parallel);
    }

    #[test]
    fn parallel_matches_sequential_multiple_blocks() {
        let mut data = vec![0u8; 1_024 + 111];
        for (index, byte) in data.iter_mut().enumerate() {
            *byte = (index % 251) as u8;
        }
        let params = params(512);

        let sequential = generate_signatures(&params, &data);
        let parallel = generate_signatures_parallel(&params, &data);
        assert_tables_equal(&sequential, &parallel);
    }

    #[test]
    fn parallel_handles_empty_reference() {
        let table = generate_signatures_parallel(&params(16), b"");
        assert!(table.is_empty());
        assert_eq!(table.source_len(), 0);
    }

    #[test]
    fn parallel_preserves_candidate_order() {
        let data = vec![b'a'; 64];
        let table = generate_signatures_parallel(&params(8), &data);
        let weak = table.blocks()[0].weak();
        assert_eq!(table.candidates(weak), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn auto_handles_small_references() {
        let table = generate_signatures_auto(&params(16), &[1u8; 100]);
        assert_eq!(table.len(), 7);
        assert_eq!(table.source_len(), 100);
    }

    #[test]
    fn auto_handles_large_references() {
        let size = PARALLEL_THRESHOLD_BYTES + 1_000;
        let data = vec![0x5au8; size];
        let params = params(2_048);

        let auto = generate_signatures_auto(&params, &data);
        let sequential = generate_signatures(&params, &data);
        assert_tables_equal(&sequential, &auto);
    }

    #[test]
    fn parallel_threshold_constant_is_reasonable() {
        // Threshold should be at least a few blocks worth
        assert!(PARALLEL_THRESHOLD_BYTES >= 64 * 1024);
        // But not so large that we never use parallel mode
        assert!(PARALLEL_THRESHOLD_BYTES <= 1024 * 1024);
    }
}
