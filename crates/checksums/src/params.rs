//! Shared hashing parameters for the signature and matching phases.
//!
//! Both phases of a delta computation must hash with the same block size,
//! the same per-byte weight table, and the same strong-hash seed; any
//! disagreement silently breaks every match. [`HashParams`] packages all of
//! that state into one immutable value that is constructed once and passed
//! by reference wherever hashing happens, so the two phases cannot drift
//! apart by accident.

use std::num::NonZeroU32;

/// Default seed for deriving the rolling-hash weight table.
///
/// An arbitrary fixed constant (the ASCII bytes `blockdif`). Using a fixed
/// seed makes signatures reproducible across runs and processes; callers
/// that want domain separation can supply their own seed through
/// [`HashParams::with_seeds`].
pub const DEFAULT_WEAK_SEED: u64 = 0x626c_6f63_6b64_6966;

/// Default seed for the strong hash, shared by both phases.
pub const DEFAULT_STRONG_SEED: u32 = 0x1234;

/// Polynomial base of the rolling hash.
pub(crate) const BASE: u32 = 37;

/// Bit mask reducing all rolling-hash state modulo 2^19.
pub(crate) const MASK: u32 = (1 << 19) - 1;

/// Immutable hashing parameters bound to one block size.
///
/// Holds the 256-entry per-byte weight table, the precomputed factor
/// `37^block_size mod 2^19` that cancels an outgoing byte during a window
/// slide, and the seeds both hashes run under. Equality compares the full
/// table, so two values built from the same seeds always compare equal.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use checksums::HashParams;
///
/// let block_size = NonZeroU32::new(16).unwrap();
/// let params = HashParams::new(block_size);
/// assert_eq!(params.block_len(), 16);
/// assert_eq!(params, HashParams::new(block_size));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    block_size: NonZeroU32,
    weak_seed: u64,
    strong_seed: u32,
    weights: [u32; 256],
    b_to_n: u32,
}

impl HashParams {
    /// Creates parameters for `block_size` with the default seeds.
    #[must_use]
    pub fn new(block_size: NonZeroU32) -> Self {
        Self::with_seeds(block_size, DEFAULT_WEAK_SEED, DEFAULT_STRONG_SEED)
    }

    /// Creates parameters with caller-supplied seeds.
    ///
    /// The weight table is derived deterministically from `weak_seed`, one
    /// entry per possible byte value, each reduced to 19 bits.
    #[must_use]
    pub fn with_seeds(block_size: NonZeroU32, weak_seed: u64, strong_seed: u32) -> Self {
        let mut weights = [0u32; 256];
        for (byte, weight) in weights.iter_mut().enumerate() {
            *weight = derive_weight(weak_seed, byte as u8);
        }
        Self {
            block_size,
            weak_seed,
            strong_seed,
            weights,
            b_to_n: pow_masked(BASE, block_size.get()),
        }
    }

    /// Block size these parameters were built for.
    #[must_use]
    #[inline]
    pub const fn block_size(&self) -> NonZeroU32 {
        self.block_size
    }

    /// Block size as a `usize`, convenient for slicing.
    #[must_use]
    #[inline]
    pub const fn block_len(&self) -> usize {
        self.block_size.get() as usize
    }

    /// Seed the weight table was derived from.
    #[must_use]
    #[inline]
    pub const fn weak_seed(&self) -> u64 {
        self.weak_seed
    }

    /// Seed for the strong hash.
    #[must_use]
    #[inline]
    pub const fn strong_seed(&self) -> u32 {
        self.strong_seed
    }

    /// Weight assigned to a byte value, already reduced to 19 bits.
    #[must_use]
    #[inline]
    pub const fn weight(&self, byte: u8) -> u32 {
        self.weights[byte as usize]
    }

    /// Precomputed `37^block_size mod 2^19`.
    #[must_use]
    #[inline]
    pub const fn b_to_n(&self) -> u32 {
        self.b_to_n
    }
}

/// SplitMix64-style mix of `seed` and a byte value down to a 19-bit weight.
fn derive_weight(seed: u64, byte: u8) -> u32 {
    let mut x = seed.wrapping_add((u64::from(byte) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x as u32) & MASK
}

/// `base^exp mod 2^19` by binary exponentiation.
///
/// Wrapping u32 products are exact under the final mask because 2^19
/// divides 2^32.
fn pow_masked(base: u32, mut exp: u32) -> u32 {
    let mut result = 1u32;
    let mut base = base & MASK;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base) & MASK;
        }
        base = base.wrapping_mul(base) & MASK;
        exp >>= 1;
    }
    result
}
