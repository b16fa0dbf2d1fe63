//! Karp-Rabin polynomial rolling checksum.
//!
//! The delta matcher scans a target document with a window of block size and
//! needs the window's checksum at every byte offset. Recomputing from
//! scratch at each offset would cost O(window) per step; the polynomial form
//! used here supports an O(1) slide instead. For a window `w[0..n)` the
//! value is
//!
//! ```text
//! h = sum(37^(n-1-k) * weight(w[k])) mod 2^19
//! ```
//!
//! so sliding one byte to the right is a multiply, an add for the incoming
//! byte, and a subtract of the outgoing byte's contribution through the
//! precomputed factor `37^n mod 2^19` held by [`HashParams`].
//!
//! With only 19 bits of state, collisions are routine and expected. The
//! matcher treats equal rolling values purely as candidates and confirms
//! them with the strong hash.

use crate::params::{BASE, HashParams, MASK};

/// Rolling checksum over a byte window, bound to one [`HashParams`] value.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use checksums::{HashParams, RollingHash};
///
/// let params = HashParams::new(NonZeroU32::new(4).unwrap());
/// let data = b"rolling";
///
/// let mut hash = RollingHash::from_window(&params, &data[0..4]);
/// hash.slide(data[0], data[4]);
///
/// let rehashed = RollingHash::from_window(&params, &data[1..5]);
/// assert_eq!(hash.value(), rehashed.value());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollingHash<'p> {
    params: &'p HashParams,
    value: u32,
    window_len: usize,
}

impl<'p> RollingHash<'p> {
    /// Computes the checksum of `window` from scratch in O(window) time.
    ///
    /// Accepts any window length up to the parameter block size; short
    /// windows arise at document tails. An empty window hashes to zero.
    #[must_use]
    pub fn from_window(params: &'p HashParams, window: &[u8]) -> Self {
        let mut value = 0u32;
        for &byte in window {
            value = value.wrapping_mul(BASE).wrapping_add(params.weight(byte)) & MASK;
        }
        Self {
            params,
            value,
            window_len: window.len(),
        }
    }

    /// Slides the window one byte to the right in O(1) time.
    ///
    /// `outgoing` is the byte leaving the window on the left, `incoming` the
    /// byte entering on the right. Only defined for full-width windows; the
    /// caller must slide exactly one byte per call, in document order.
    #[inline]
    pub fn slide(&mut self, outgoing: u8, incoming: u8) {
        debug_assert_eq!(
            self.window_len,
            self.params.block_len(),
            "slide is only defined for full-width windows"
        );
        self.value = BASE
            .wrapping_mul(self.value)
            .wrapping_add(self.params.weight(incoming))
            .wrapping_sub(self.params.b_to_n().wrapping_mul(self.params.weight(outgoing)))
            & MASK;
    }

    /// Current checksum value, always below 2^19.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Width of the window this value was computed over.
    #[must_use]
    #[inline]
    pub const fn window_len(&self) -> usize {
        self.window_len
    }
}
