//! `fukubiki`: weighted random drawing primitives.
//!
//! Draw one or more items from a finite collection with probability
//! proportional (or inversely proportional) to a caller-supplied weight.
//! Selection uses Efraimidis–Spirakis `u^(1/w)` keys in a single pass, so
//! there is no repeated re-normalization and no state kept between calls.
//!
//! Exposed modules:
//! - `weighted`: proportional drawing (`weighted_sample_by` and friends).
//! - `inverse`: inverse-proportional drawing via the `w_max - w + 1` transform.
//! - `weight`: the `Weighted` accessor trait and the error taxonomy.
//!
//! Every drawing entrypoint has a `*_with_rng` form taking any `Rng` for
//! deterministic use; the plain forms use the thread-local generator.

#![forbid(unsafe_code)]

pub mod inverse;
pub mod weight;
pub mod weighted;

pub use inverse::{
    inverse_weighted_sample, inverse_weighted_sample_by, inverse_weighted_sample_by_with_rng,
    inverse_weighted_sample_n, inverse_weighted_sample_n_by,
    inverse_weighted_sample_n_by_with_rng, inverted_weights,
};
pub use weight::{Weighted, WeightedDrawError};
pub use weighted::{
    weighted_sample, weighted_sample_by, weighted_sample_by_with_rng, weighted_sample_n,
    weighted_sample_n_by, weighted_sample_n_by_with_rng,
};
