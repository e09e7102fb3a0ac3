pub mod engine;
pub mod validation;

pub use engine::{
    assess_location, assess_location_with, evaluate_location, evaluate_location_with, Assessment,
    CriterionContribution, ScoreBreakdown,
};
pub use validation::{check_criteria, validate_criteria, ErrorKind, ValidationError};
