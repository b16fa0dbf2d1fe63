#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod params;
mod rolling;
mod strong;

pub use params::{DEFAULT_STRONG_SEED, DEFAULT_WEAK_SEED, HashParams};
pub use rolling::RollingHash;
pub use strong::Murmur3;
