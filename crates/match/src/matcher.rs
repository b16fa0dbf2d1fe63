//! crates/match/src/matcher.rs
//!
//! The sliding-window scan that matches target windows to reference blocks.

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::{HashParams, Murmur3, RollingHash};
use signature::SignatureTable;

use crate::plan::{DeltaEntry, DeltaPlan};

/// Errors returned when computing a delta plan.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DeltaError {
    /// The table was generated with a different block size.
    #[error("signature table uses block size {table} but matching was requested with {requested}")]
    BlockSizeMismatch {
        /// Block size recorded in the table.
        table: u32,
        /// Block size carried by the matching parameters.
        requested: u32,
    },
    /// The table was generated under different hash seeds.
    #[error("signature table was generated under different hash seeds, so window hashes can never agree with it")]
    SeedMismatch,
}

/// Computes a delta plan describing `target` in terms of reference blocks.
///
/// The scan slides a one-block window over the target one byte at a time,
/// updating the rolling hash in constant time. When the window's weak hash
/// has reference candidates and its Murmur3 digest confirms one of them, the
/// matcher records the match together with the literal bytes accumulated
/// since the previous match, then jumps the window past the matched region
/// and starts a fresh hash there. Bytes after the final match become the
/// plan's trailing literal.
///
/// Each reference block is matched at most once. When several still-unmatched
/// blocks share the window's content, the lowest block index wins, so
/// duplicated reference content is claimed in reference order.
///
/// The target is only ever read through `&[u8]`; the returned plan borrows
/// its literal runs from it.
///
/// # Errors
///
/// Returns [`DeltaError`] when `params` disagrees with the parameters the
/// table was generated under. A table only matches windows hashed with its
/// own block size and seeds, so proceeding would silently produce an
/// all-missing plan.
#[cfg_attr(
    feature = "tracing",
    instrument(
        skip(params, table, target),
        fields(
            target_len = target.len(),
            block_count = table.len(),
            block_size = params.block_size().get()
        ),
        name = "compute_delta"
    )
)]
pub fn compute_delta<'t>(
    params: &HashParams,
    table: &SignatureTable<'_>,
    target: &'t [u8],
) -> Result<DeltaPlan<'t>, DeltaError> {
    check_params(params, table)?;

    let mut plan = DeltaPlan::new(
        table
            .blocks()
            .iter()
            .map(|block| {
                let range = table.block_range(block.index());
                DeltaEntry::unmatched(block.index(), range.start, range.end)
            })
            .collect(),
    );

    let block_len = params.block_len();
    let mut window_start = 0usize;
    let mut window_end = usize::min(block_len, target.len());
    let mut last_match_end = 0usize;
    let mut weak = RollingHash::from_window(params, &target[..window_end]);

    while window_start < target.len() {
        let window = &target[window_start..window_end];
        if let Some(index) = matching_block(params, table, &plan, window, weak.value()) {
            plan.record_match(index, &target[last_match_end..window_start]);
            window_start = window_end;
            last_match_end = window_start;
            if window_start == target.len() {
                break;
            }
            window_end = window_start + usize::min(block_len, target.len() - window_start);
            weak = RollingHash::from_window(params, &target[window_start..window_end]);
        } else {
            if window_end == target.len() {
                break;
            }
            // Only full-width windows ever slide; a short window is always
            // flush with the end of the target.
            weak.slide(target[window_start], target[window_end]);
            window_start += 1;
            window_end += 1;
        }
    }

    plan.set_trailing_literal(&target[last_match_end..]);
    Ok(plan)
}

/// Finds the lowest-indexed, still-unmatched reference block whose hashes
/// both agree with the current window.
fn matching_block(
    params: &HashParams,
    table: &SignatureTable<'_>,
    plan: &DeltaPlan<'_>,
    window: &[u8],
    weak: u32,
) -> Option<u32> {
    let candidates = table.candidates(weak);
    if candidates.is_empty() {
        return None;
    }

    // Weak bucket exists: confirm candidates with the strong digest.
    let strong = Murmur3::digest(params.strong_seed(), window);
    candidates.iter().copied().find(|&index| {
        plan.is_unmatched(index)
            && table
                .get(index)
                .is_some_and(|block| block.strong() == strong)
    })
}

fn check_params(params: &HashParams, table: &SignatureTable<'_>) -> Result<(), DeltaError> {
    if table.block_size() != params.block_size() {
        return Err(DeltaError::BlockSizeMismatch {
            table: table.block_size().get(),
            requested: params.block_size().get(),
        });
    }
    if table.weak_seed() != params.weak_seed() || table.strong_seed() != params.strong_seed() {
        return Err(DeltaError::SeedMismatch);
    }
    Ok(())
}
