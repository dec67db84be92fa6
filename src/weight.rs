//! Weight extraction and the shared draw pipeline.
//!
//! Every draw in this crate goes through the same three steps: collect
//! per-item weights positionally, normalize them into probabilities, then
//! scan for the maximal Efraimidis–Spirakis key. Items are correlated with
//! their weights by index only, so duplicate-valued items stay distinct
//! candidates.

use rand::Rng;

/// Items that carry an intrinsic sampling weight.
///
/// This is the explicit form of a `.weight` accessor: implement it to use
/// the sugar entrypoints (`weighted_sample`, `inverse_weighted_sample`, …)
/// instead of passing a weight closure at every call site.
pub trait Weighted {
    /// The raw sampling weight of this item.
    fn weight(&self) -> f64;
}

/// Errors for weighted drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedDrawError {
    /// A draw was requested from an empty collection.
    EmptyCollection,
    /// A weight is not finite (NaN/inf).
    NonFiniteWeight(f64),
    /// A weight is non-positive where a positive weight is required.
    NonPositiveWeight(f64),
    /// The weight total is non-finite or non-positive.
    InvalidWeightSum(f64),
}

impl std::fmt::Display for WeightedDrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "cannot draw from an empty collection"),
            Self::NonFiniteWeight(w) => write!(f, "weight must be finite (got {w})"),
            Self::NonPositiveWeight(w) => write!(f, "weight must be > 0 (got {w})"),
            Self::InvalidWeightSum(s) => {
                write!(f, "weight total must be finite and > 0 (got {s})")
            }
        }
    }
}

impl std::error::Error for WeightedDrawError {}

/// Collect one raw weight per item, in iteration order.
///
/// Rejects non-finite and non-positive weights at the offending value.
pub(crate) fn positive_weights<T, F>(
    items: &[T],
    weight_of: &mut F,
) -> Result<Vec<f64>, WeightedDrawError>
where
    F: FnMut(&T) -> f64,
{
    let mut weights = Vec::with_capacity(items.len());
    for item in items {
        let w = weight_of(item);
        if !w.is_finite() {
            return Err(WeightedDrawError::NonFiniteWeight(w));
        }
        if w <= 0.0 {
            return Err(WeightedDrawError::NonPositiveWeight(w));
        }
        weights.push(w);
    }
    Ok(weights)
}

/// Normalize weights into probabilities summing to 1, in place.
pub(crate) fn normalize(mut weights: Vec<f64>) -> Result<Vec<f64>, WeightedDrawError> {
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(WeightedDrawError::InvalidWeightSum(sum));
    }
    for w in &mut weights {
        *w /= sum;
    }
    Ok(weights)
}

/// One Efraimidis–Spirakis draw over normalized probabilities.
///
/// Each item gets a key `u^(1/p_i)` from a fresh `u ~ Uniform[0, 1)`; the
/// index of the maximal key wins. The strict `>` keeps the first maximal
/// index on ties (possible only with degenerate inputs, e.g. equal
/// probabilities fed equal uniforms).
pub(crate) fn draw_index<R: Rng + ?Sized>(probs: &[f64], rng: &mut R) -> usize {
    debug_assert!(!probs.is_empty());

    let mut best_idx = 0usize;
    let mut best_key = f64::NEG_INFINITY;

    for (idx, &p) in probs.iter().enumerate() {
        let u = rng.random::<f64>().max(f64::MIN_POSITIVE);
        let key = (u.ln() / p).exp();
        if key > best_key {
            best_key = key;
            best_idx = idx;
        }
    }

    best_idx
}
