//! crates/match/src/plan.rs
//!
//! Delta plans keyed by reference block index.

use std::ops::Range;

/// The matching outcome for a single reference block.
///
/// Every entry starts out missing. When the matcher finds the block's
/// content in the target it marks the entry matched and attaches the literal
/// run, the target bytes between the previous match and this one that no
/// reference block covers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeltaEntry<'a> {
    index: u32,
    start: usize,
    end: usize,
    missing: bool,
    literal: &'a [u8],
}

impl<'a> DeltaEntry<'a> {
    /// Creates an entry in its initial, unmatched state.
    pub(crate) const fn unmatched(index: u32, start: usize, end: usize) -> Self {
        Self {
            index,
            start,
            end,
            missing: true,
            literal: &[],
        }
    }

    /// Marks the entry matched and records the literal run that preceded it.
    pub(crate) fn record_match(&mut self, literal: &'a [u8]) {
        self.missing = false;
        self.literal = literal;
    }

    /// Returns the index of the reference block this entry describes.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the byte offset of the block within the reference.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end of the block's byte range within the reference.
    ///
    /// The final block's end is clamped to the reference length.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the block's byte range within the reference.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Reports whether the block's content was absent from the target.
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.missing
    }

    /// Returns the target bytes between the previous match and this one.
    ///
    /// Empty for unmatched entries and for matches the target reaches
    /// without intervening unmatched bytes.
    #[inline]
    #[must_use]
    pub const fn literal(&self) -> &'a [u8] {
        self.literal
    }
}

/// The complete result of matching a target against a reference.
///
/// A plan holds one [`DeltaEntry`] per reference block, in block order, plus
/// the trailing literal: target bytes after the last match that belong to no
/// entry. Literal runs never overlap, and their concatenation with the
/// matched blocks (taken in target order) reproduces the target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeltaPlan<'a> {
    entries: Vec<DeltaEntry<'a>>,
    trailing_literal: &'a [u8],
}

impl<'a> DeltaPlan<'a> {
    /// Creates a plan with every entry unmatched and an empty tail.
    pub(crate) const fn new(entries: Vec<DeltaEntry<'a>>) -> Self {
        Self {
            entries,
            trailing_literal: &[],
        }
    }

    /// Reports whether the entry for block `index` is still unmatched.
    pub(crate) fn is_unmatched(&self, index: u32) -> bool {
        self.entries[index as usize].is_missing()
    }

    /// Records a match for block `index`.
    pub(crate) fn record_match(&mut self, index: u32, literal: &'a [u8]) {
        self.entries[index as usize].record_match(literal);
    }

    /// Stores the target bytes that follow the final match.
    pub(crate) fn set_trailing_literal(&mut self, literal: &'a [u8]) {
        self.trailing_literal = literal;
    }

    /// Returns the entries in reference block order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[DeltaEntry<'a>] {
        &self.entries
    }

    /// Returns the entry for block `index`, if the plan contains it.
    #[inline]
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&DeltaEntry<'a>> {
        self.entries.get(index as usize)
    }

    /// Returns the number of entries, one per reference block.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the plan has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the target bytes after the last match.
    ///
    /// When nothing matched this is the entire target.
    #[inline]
    #[must_use]
    pub const fn trailing_literal(&self) -> &'a [u8] {
        self.trailing_literal
    }

    /// Iterates over the entries in reference block order.
    pub fn iter(&self) -> impl Iterator<Item = &DeltaEntry<'a>> {
        self.entries.iter()
    }

    /// Returns the number of blocks the target did not contain.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_missing()).count()
    }
}
