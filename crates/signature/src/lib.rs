#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod block;
mod generation;
pub mod parallel;
mod table;

pub use block::BlockSignature;
pub use generation::generate_signatures;
pub use parallel::{
    PARALLEL_THRESHOLD_BYTES, generate_signatures_auto, generate_signatures_parallel,
};
pub use table::SignatureTable;
