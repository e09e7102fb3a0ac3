use serde::{Deserialize, Serialize};

use crate::criteria::{HardCriteria, SoftCriteria, SoftWeights};

/// Everything needed to score one candidate location.
///
/// Example YAML:
/// ```yaml
/// name: north-field
/// hard:
///   not_in_protected_area: true
///   not_in_flood_zone_Q100: true
/// soft:
///   flood_zone_type: 0.6
///   forest_density: 0.3
/// weights:
///   flood_zone_type: 0.7
///   forest_density: 0.3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocationProfile {
    pub name: String,

    /// Exclusion rules; omitted means nothing excludes the location
    #[serde(default)]
    pub hard: HardCriteria,

    pub soft: SoftCriteria,

    pub weights: SoftWeights,
}
