//! crates/signature/src/block.rs
//!
//! Individual signature block representation.

/// Describes a single block of the reference document.
///
/// A block records both checksums plus a borrowed view of the bytes it was
/// computed over, so a matcher can report matched reference content without
/// copying it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockSignature<'a> {
    index: u32,
    weak: u32,
    strong: u32,
    data: &'a [u8],
}

impl<'a> BlockSignature<'a> {
    /// Creates a new block descriptor.
    pub(crate) const fn new(index: u32, weak: u32, strong: u32, data: &'a [u8]) -> Self {
        Self {
            index,
            weak,
            strong,
            data,
        }
    }

    /// Returns the zero-based index of the block within the reference.
    ///
    /// Indices are 32-bit; a table therefore describes at most `u32::MAX`
    /// blocks.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the rolling (weak) hash of the block bytes.
    #[inline]
    #[must_use]
    pub const fn weak(&self) -> u32 {
        self.weak
    }

    /// Returns the Murmur3 (strong) digest of the block bytes.
    #[inline]
    #[must_use]
    pub const fn strong(&self) -> u32 {
        self.strong
    }

    /// Returns the block bytes, borrowed from the reference document.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of bytes in the block.
    ///
    /// Every block except possibly the last spans the full configured block
    /// size.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Reports whether the block covers an empty range.
    ///
    /// Tables never contain empty blocks; this exists for API completeness.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let block = BlockSignature::new(42, 0x1_23ab, 0xdead_beef, b"sixteen byte blk");
        assert_eq!(block.index(), 42);
        assert_eq!(block.weak(), 0x1_23ab);
        assert_eq!(block.strong(), 0xdead_beef);
        assert_eq!(block.data(), b"sixteen byte blk");
        assert_eq!(block.len(), 16);
        assert!(!block.is_empty());
    }

    #[test]
    fn data_borrows_without_copying() {
        let reference = b"abcdefgh".to_vec();
        let block = BlockSignature::new(0, 0, 0, &reference[4..]);
        assert!(std::ptr::eq(block.data().as_ptr(), reference[4..].as_ptr()));
    }

    #[test]
    fn blocks_are_copy() {
        let block = BlockSignature::new(1, 2, 3, b"data");
        let copied = block;
        assert_eq!(block, copied);
    }

    #[test]
    fn debug_names_the_type() {
        let block = BlockSignature::new(0, 0, 0, b"");
        let debug = format!("{block:?}");
        assert!(debug.contains("BlockSignature"));
    }
}
