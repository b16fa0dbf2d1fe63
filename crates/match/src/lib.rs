#![deny(unsafe_code)]

//! Sliding-window block matching and delta plan construction.
//!
//! This crate implements the matching phase of two-phase delta
//! synchronization:
//! - [`compute_delta`] scans a target document against a reference
//!   signature table
//! - [`DeltaPlan`] and [`DeltaEntry`] report, per reference block, whether
//!   the target still contains it and which literal bytes surround the
//!   matches
//!
//! # Design
//!
//! The matcher reuses the rolling hash from the `checksums` crate and the
//! candidate index carried by [`signature::SignatureTable`]. A one-block
//! window slides over the target byte by byte; a match requires the weak
//! hash bucket and the Murmur3 digest to agree, and consumes the window so
//! scanning resumes after the matched bytes. Every reference block is
//! matched at most once, which keeps literal runs disjoint.
//!
//! # See also
//!
//! - [`signature`] crate for signature generation

mod matcher;
mod plan;

pub use matcher::{DeltaError, compute_delta};
pub use plan::{DeltaEntry, DeltaPlan};
