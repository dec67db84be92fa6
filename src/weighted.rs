//! Weighted drawing.
//!
//! Selects items with probability proportional to a caller-supplied weight,
//! in a single pass over the collection.
//!
//! Each item with normalized probability `p_i` gets a key `u^(1/p_i)` where
//! `u ~ Uniform[0, 1)`, and the maximal key wins. For a single draw this is
//! the `k = 1` form of weighted reservoir sampling (A-Res).
//!
//! ## References
//!
//! - Efraimidis & Spirakis (2006): weighted random sampling with a reservoir.
//!
//! Notes:
//! - Multi-draw entrypoints (`weighted_sample_n_by*`) draw WITH replacement:
//!   every draw re-keys the full collection with fresh uniforms, so the same
//!   item may be returned more than once. This is the contract, not an
//!   accident of the one-pass technique.
//! - This module provides `*_with_rng` entrypoints for deterministic
//!   testing/benchmarking.

use rand::prelude::*;

use crate::weight::{draw_index, normalize, positive_weights, Weighted, WeightedDrawError};

/// Draw one item with probability proportional to `weight_of`.
///
/// Weights must be finite and positive. Fails on an empty collection.
pub fn weighted_sample_by_with_rng<'a, T, F, R>(
    items: &'a [T],
    mut weight_of: F,
    rng: &mut R,
) -> Result<&'a T, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(WeightedDrawError::EmptyCollection);
    }
    let probs = normalize(positive_weights(items, &mut weight_of)?)?;
    Ok(&items[draw_index(&probs, rng)])
}

/// [`weighted_sample_by_with_rng`] with the thread-local generator.
pub fn weighted_sample_by<'a, T, F>(
    items: &'a [T],
    weight_of: F,
) -> Result<&'a T, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    let mut rng = rand::rng();
    weighted_sample_by_with_rng(items, weight_of, &mut rng)
}

/// Draw `count` items with replacement, in draw order.
///
/// Weights are extracted and normalized once; every draw then re-keys the
/// collection with fresh uniforms. `count == 0` returns an empty `Vec`
/// without touching the weight function, even for an empty collection.
pub fn weighted_sample_n_by_with_rng<'a, T, F, R>(
    items: &'a [T],
    mut weight_of: F,
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if items.is_empty() {
        return Err(WeightedDrawError::EmptyCollection);
    }
    let probs = normalize(positive_weights(items, &mut weight_of)?)?;
    Ok((0..count).map(|_| &items[draw_index(&probs, rng)]).collect())
}

/// [`weighted_sample_n_by_with_rng`] with the thread-local generator.
pub fn weighted_sample_n_by<'a, T, F>(
    items: &'a [T],
    weight_of: F,
    count: usize,
) -> Result<Vec<&'a T>, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    let mut rng = rand::rng();
    weighted_sample_n_by_with_rng(items, weight_of, count, &mut rng)
}

/// Sugar for items implementing [`Weighted`].
pub fn weighted_sample<T: Weighted>(items: &[T]) -> Result<&T, WeightedDrawError> {
    weighted_sample_by(items, Weighted::weight)
}

/// Sugar for items implementing [`Weighted`].
pub fn weighted_sample_n<T: Weighted>(
    items: &[T],
    count: usize,
) -> Result<Vec<&T>, WeightedDrawError> {
    weighted_sample_n_by(items, Weighted::weight, count)
}
