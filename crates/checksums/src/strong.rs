//! MurmurHash3 strong hash used to confirm rolling-hash candidates.
//!
//! The x86 32-bit variant of MurmurHash3: input is consumed in 4-byte
//! little-endian groups through a multiply/rotate/xor round, a 0-3 byte
//! tail is folded in with the unused high bytes left zero, and finalization
//! mixes the input length into an avalanche of xor-shifts and multiplies.
//!
//! Not cryptographic. Its job is to make accidental collisions between a
//! scan window and a reference block vanishingly unlikely after the 19-bit
//! rolling checksum has already agreed, and it is orders of magnitude
//! cheaper than a cryptographic digest in that role.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Streaming MurmurHash3 x86/32 hasher.
///
/// The one-shot [`Murmur3::digest`] is the common entry point; the streaming
/// interface exists for callers that assemble input incrementally. Both
/// produce identical digests for identical byte sequences.
///
/// # Examples
///
/// One-shot hashing with a seed:
///
/// ```
/// use checksums::Murmur3;
///
/// let digest = Murmur3::digest(0x1234, b"hello world");
/// assert_eq!(digest, Murmur3::digest(0x1234, b"hello world"));
/// ```
///
/// Streaming over arbitrary splits:
///
/// ```
/// use checksums::Murmur3;
///
/// let mut hasher = Murmur3::new(0x1234);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), Murmur3::digest(0x1234, b"hello world"));
/// ```
#[derive(Debug, Clone)]
pub struct Murmur3 {
    state: u32,
    len: u32,
    pending: [u8; 4],
    pending_len: usize,
}

impl Murmur3 {
    /// Creates a hasher seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: seed,
            len: 0,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    /// Computes the digest of `data` in one call.
    #[must_use]
    pub fn digest(seed: u32, data: &[u8]) -> u32 {
        let mut hasher = Self::new(seed);
        hasher.update(data);
        hasher.finalize()
    }

    /// Feeds `data` into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u32);

        let mut data = data;
        if self.pending_len > 0 {
            let take = (4 - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take]
                .copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];
            if self.pending_len < 4 {
                return;
            }
            let group = self.pending;
            self.mix_group(u32::from_le_bytes(group));
            self.pending_len = 0;
        }

        let mut groups = data.chunks_exact(4);
        for group in &mut groups {
            self.mix_group(u32::from_le_bytes([group[0], group[1], group[2], group[3]]));
        }

        let rest = groups.remainder();
        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
    }

    /// Consumes the hasher, folding in the tail and length, and returns the
    /// digest.
    #[must_use]
    pub fn finalize(self) -> u32 {
        let mut h1 = self.state;
        if self.pending_len > 0 {
            let mut k1 = 0u32;
            for i in (0..self.pending_len).rev() {
                k1 = (k1 << 8) | u32::from(self.pending[i]);
            }
            k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
            h1 ^= k1;
        }
        h1 ^= self.len;
        avalanche(h1)
    }

    #[inline]
    fn mix_group(&mut self, group: u32) {
        let k1 = group.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        self.state ^= k1;
        self.state = self.state.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }
}

/// Final avalanche mix.
#[inline]
const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
