use std::collections::BTreeMap;

/// Criterion name -> satisfied. `false` excludes the location.
pub type HardCriteria = BTreeMap<String, bool>;

/// Criterion name -> normalized suitability in [0, 1] (0 = worst, 1 = best).
pub type SoftCriteria = BTreeMap<String, f64>;

/// Criterion name -> relative importance. Keys must match `SoftCriteria`.
pub type SoftWeights = BTreeMap<String, f64>;

/// Build a criteria map from `(name, value)` pairs.
///
/// ```
/// let soft = esi_scorer::criteria::from_pairs([("forest_density", 0.3)]);
/// assert_eq!(soft["forest_density"], 0.3);
/// ```
pub fn from_pairs<K, V, I>(pairs: I) -> BTreeMap<String, V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect()
}
