use serde::Serialize;
use thiserror::Error;

use crate::criteria::{HardCriteria, SoftCriteria, SoftWeights};

/// Inclusive bounds a soft criterion value must fall within.
pub const SOFT_VALUE_BOUNDS: std::ops::RangeInclusive<f64> = 0.0..=1.0;

/// Inclusive bounds the weight sum must fall within (1.0 +/- 0.01).
pub const WEIGHT_SUM_BOUNDS: std::ops::RangeInclusive<f64> = 0.99..=1.01;

/// Which invariant an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Soft criteria and weights disagree on their key sets.
    SchemaMismatch,
    /// A soft criterion value lies outside [0, 1].
    RangeViolation,
    /// Weights do not sum to 1.0 within tolerance.
    NormalizationViolation,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Missing weights for criteria: {{{}}}", .0.join(", "))]
    MissingWeights(Vec<String>),

    #[error("Weights specified for non-existent criteria: {{{}}}", .0.join(", "))]
    UnusedWeights(Vec<String>),

    #[error("Soft criteria values must be between 0 and 1: {{{}}}", format_pairs(.0))]
    OutOfRange(Vec<(String, f64)>),

    #[error("Weights must sum to 1.0 (current sum: {0:.2})")]
    WeightSum(f64),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingWeights(_) | ValidationError::UnusedWeights(_) => {
                ErrorKind::SchemaMismatch
            }
            ValidationError::OutOfRange(_) => ErrorKind::RangeViolation,
            ValidationError::WeightSum(_) => ErrorKind::NormalizationViolation,
        }
    }
}

fn format_pairs(pairs: &[(String, f64)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}: {:?}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check soft criteria against their weights.
///
/// Checks run in a fixed order and stop at the first failure:
/// missing weights, unused weights, out-of-range values, weight sum.
pub fn check_criteria(soft: &SoftCriteria, weights: &SoftWeights) -> Result<(), ValidationError> {
    let missing: Vec<String> = soft
        .keys()
        .filter(|name| !weights.contains_key(*name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingWeights(missing));
    }

    let unused: Vec<String> = weights
        .keys()
        .filter(|name| !soft.contains_key(*name))
        .cloned()
        .collect();
    if !unused.is_empty() {
        return Err(ValidationError::UnusedWeights(unused));
    }

    // NaN is never contained in the range, so it is reported here too
    let out_of_range: Vec<(String, f64)> = soft
        .iter()
        .filter(|(_, value)| !SOFT_VALUE_BOUNDS.contains(*value))
        .map(|(name, value)| (name.clone(), *value))
        .collect();
    if !out_of_range.is_empty() {
        return Err(ValidationError::OutOfRange(out_of_range));
    }

    // Seeded with +0.0; `Sum` over an empty f64 iterator yields -0.0
    let weight_sum = weights.values().fold(0.0, |acc, weight| acc + weight);
    if !WEIGHT_SUM_BOUNDS.contains(&weight_sum) {
        return Err(ValidationError::WeightSum(weight_sum));
    }

    Ok(())
}

/// Validate the inputs of an evaluation, returning a human-readable message
/// for the first violated invariant or `None` when the inputs are usable.
///
/// Hard criteria are accepted so the signature matches
/// [`evaluate_location`](super::evaluate_location); they are not inspected.
pub fn validate_criteria(
    _hard: &HardCriteria,
    soft: &SoftCriteria,
    weights: &SoftWeights,
) -> Option<String> {
    check_criteria(soft, weights).err().map(|e| e.to_string())
}
