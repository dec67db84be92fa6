//! Inverse-weighted drawing.
//!
//! Favors low-weight items by transforming each raw weight into its
//! distance from the raw maximum, `w' = w_max - w + 1`, then drawing with
//! the transformed weights through the ordinary weighted pipeline.
//!
//! The `+ 1` keeps the heaviest item at transformed weight exactly 1, so it
//! retains a nonzero probability, and items with equal raw weights land on
//! equal transformed weights. Lower raw weight always maps to higher
//! transformed weight, so the preference order is fully reversed.
//!
//! Raw weights only need to be finite here: zero and negative values are
//! fine, since the transform lifts everything to at least 1 for a non-empty
//! collection.

use rand::prelude::*;

use crate::weight::{draw_index, normalize, Weighted, WeightedDrawError};

/// Compute the transformed weights `w_max - w_i + 1`, positionally.
///
/// Exposed so callers can inspect what the inverse draw actually samples
/// from. Rejects non-finite raw weights; fails on an empty collection
/// (there is no maximum to invert against).
pub fn inverted_weights<T, F>(
    items: &[T],
    mut weight_of: F,
) -> Result<Vec<f64>, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    if items.is_empty() {
        return Err(WeightedDrawError::EmptyCollection);
    }

    let mut raw = Vec::with_capacity(items.len());
    for item in items {
        let w = weight_of(item);
        if !w.is_finite() {
            return Err(WeightedDrawError::NonFiniteWeight(w));
        }
        raw.push(w);
    }

    let w_max = raw.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    for w in &mut raw {
        *w = w_max - *w + 1.0;
    }
    Ok(raw)
}

/// Draw one item with probability proportional to its inverted weight.
pub fn inverse_weighted_sample_by_with_rng<'a, T, F, R>(
    items: &'a [T],
    weight_of: F,
    rng: &mut R,
) -> Result<&'a T, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
    R: Rng + ?Sized,
{
    let probs = normalize(inverted_weights(items, weight_of)?)?;
    Ok(&items[draw_index(&probs, rng)])
}

/// [`inverse_weighted_sample_by_with_rng`] with the thread-local generator.
pub fn inverse_weighted_sample_by<'a, T, F>(
    items: &'a [T],
    weight_of: F,
) -> Result<&'a T, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    let mut rng = rand::rng();
    inverse_weighted_sample_by_with_rng(items, weight_of, &mut rng)
}

/// Draw `count` items with replacement, favoring low raw weights.
///
/// Same contract as the proportional form: the transform and normalization
/// happen once, each draw re-keys with fresh uniforms, and `count == 0`
/// returns an empty `Vec` without touching the weight function.
pub fn inverse_weighted_sample_n_by_with_rng<'a, T, F, R>(
    items: &'a [T],
    weight_of: F,
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
    let probs = normalize(inverted_weights(items, weight_of)?)?;
    Ok((0..count).map(|_| &items[draw_index(&probs, rng)]).collect())
}

/// [`inverse_weighted_sample_n_by_with_rng`] with the thread-local generator.
pub fn inverse_weighted_sample_n_by<'a, T, F>(
    items: &'a [T],
    weight_of: F,
    count: usize,
) -> Result<Vec<&'a T>, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    let mut rng = rand::rng();
    inverse_weighted_sample_n_by_with_rng(items, weight_of, count, &mut rng)
}

/// Sugar for items implementing [`Weighted`].
pub fn inverse_weighted_sample<T: Weighted>(items: &[T]) -> Result<&T, WeightedDrawError> {
    inverse_weighted_sample_by(items, Weighted::weight)
}

/// Sugar for items implementing [`Weighted`].
pub fn inverse_weighted_sample_n<T: Weighted>(
    items: &[T],
    count: usize,
) -> Result<Vec<&T>, WeightedDrawError> {
    inverse_weighted_sample_n_by(items, Weighted::weight, count)
}
