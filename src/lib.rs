//! Environmental Suitability Index (ESI) scoring.
//!
//! A location is scored by first checking its hard criteria (any `false`
//! excludes it outright) and then taking the weighted sum of its normalized
//! soft criteria. Inputs are validated before scoring.

pub mod criteria;
pub mod diagnostics;
pub mod profile;
pub mod scoring;

pub use criteria::{HardCriteria, SoftCriteria, SoftWeights};
pub use diagnostics::{BufferedSink, Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use profile::{parse_profiles_yaml, rank_locations, LocationProfile, RankedLocation};
pub use scoring::{
    assess_location, assess_location_with, check_criteria, evaluate_location,
    evaluate_location_with, validate_criteria, Assessment, CriterionContribution, ErrorKind,
    ScoreBreakdown, ValidationError,
};
