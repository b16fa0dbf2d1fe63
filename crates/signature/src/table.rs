//! crates/signature/src/table.rs
//!
//! Signature tables and the weak-hash candidate index.

use std::num::NonZeroU32;
use std::ops::Range;

use checksums::HashParams;
use rustc_hash::FxHashMap;

use crate::block::BlockSignature;

/// A complete signature table for one reference document.
///
/// The table holds one [`BlockSignature`] per reference block in index order
/// together with a candidate index keyed by weak hash. It also remembers the
/// hashing parameters it was generated under so a matcher can reject tables
/// built with a different block size or different seeds.
#[derive(Clone, Debug)]
pub struct SignatureTable<'a> {
    block_size: NonZeroU32,
    weak_seed: u64,
    strong_seed: u32,
    source_len: usize,
    blocks: Vec<BlockSignature<'a>>,
    by_weak: FxHashMap<u32, Vec<u32>>,
}

impl<'a> SignatureTable<'a> {
    /// Builds a table from blocks already hashed in index order.
    pub(crate) fn new(
        params: &HashParams,
        source_len: usize,
        blocks: Vec<BlockSignature<'a>>,
    ) -> Self {
        let mut by_weak: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
        for block in &blocks {
            by_weak.entry(block.weak()).or_default().push(block.index());
        }
        Self {
            block_size: params.block_size(),
            weak_seed: params.weak_seed(),
            strong_seed: params.strong_seed(),
            source_len,
            blocks,
            by_weak,
        }
    }

    /// Returns the block size the table was generated with.
    #[inline]
    #[must_use]
    pub const fn block_size(&self) -> NonZeroU32 {
        self.block_size
    }

    /// Returns the weak-hash seed the table was generated with.
    #[inline]
    #[must_use]
    pub const fn weak_seed(&self) -> u64 {
        self.weak_seed
    }

    /// Returns the strong-hash seed the table was generated with.
    #[inline]
    #[must_use]
    pub const fn strong_seed(&self) -> u32 {
        self.strong_seed
    }

    /// Returns the length of the reference document in bytes.
    #[inline]
    #[must_use]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// Returns the number of blocks in the table.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Reports whether the table describes an empty reference.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the blocks in reference order.
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[BlockSignature<'a>] {
        &self.blocks
    }

    /// Returns the block at `index`, if the table contains it.
    #[inline]
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&BlockSignature<'a>> {
        self.blocks.get(index as usize)
    }

    /// Returns the indices of every block whose weak hash equals `weak`.
    ///
    /// Candidates are listed in ascending block order. An unknown weak hash
    /// yields an empty slice; lookups never allocate or insert.
    #[inline]
    #[must_use]
    pub fn candidates(&self, weak: u32) -> &[u32] {
        self.by_weak.get(&weak).map_or(&[], Vec::as_slice)
    }

    /// Returns the byte range block `index` occupies in the reference.
    ///
    /// The end of the final block is clamped to the reference length, so the
    /// returned range always describes bytes that exist.
    #[must_use]
    pub fn block_range(&self, index: u32) -> Range<usize> {
        let block_len = self.block_size.get() as usize;
        let start = usize::min(index as usize * block_len, self.source_len);
        let end = usize::min(start + block_len, self.source_len);
        start..end
    }

    /// Iterates over the blocks in reference order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockSignature<'a>> {
        self.blocks.iter()
    }
}
