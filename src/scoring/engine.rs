use serde::Serialize;

use super::validation::{check_criteria, ValidationError};
use crate::criteria::{HardCriteria, SoftCriteria, SoftWeights};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink, NullSink};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionContribution {
    pub name: String,
    pub value: f64,        // Normalized soft criterion value
    pub weight: f64,       // Weight applied to the value
    pub contribution: f64, // value * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// Outcome of assessing one location.
///
/// Unlike [`evaluate_location`], which collapses every failure to `0.0`,
/// this keeps "excluded" and "invalid input" apart from a genuine score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    Scored(ScoreBreakdown),
    Excluded { criterion: String },
    Invalid { error: ValidationError },
}

impl Assessment {
    /// The ESI score, or `0.0` for excluded and invalid locations.
    pub fn score(&self) -> f64 {
        match self {
            Assessment::Scored(breakdown) => breakdown.score,
            Assessment::Excluded { .. } | Assessment::Invalid { .. } => 0.0,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, Assessment::Scored(_))
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Assessment::Excluded { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Assessment::Invalid { .. })
    }

    fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Assessment::Scored(_) => None,
            Assessment::Excluded { criterion } => Some(Diagnostic::info(format!(
                "Location excluded due to hard criterion: {}",
                criterion
            ))),
            Assessment::Invalid { error } => {
                Some(Diagnostic::error(format!("Validation failed: {}", error)))
            }
        }
    }
}

/// Assess a location without emitting diagnostics.
pub fn assess_location(
    hard: &HardCriteria,
    soft: &SoftCriteria,
    weights: &SoftWeights,
) -> Assessment {
    assess_location_with(&NullSink, hard, soft, weights)
}

/// Assess a location, reporting validation failures (error level) and
/// exclusions (info level) to `sink`.
pub fn assess_location_with(
    sink: &dyn DiagnosticSink,
    hard: &HardCriteria,
    soft: &SoftCriteria,
    weights: &SoftWeights,
) -> Assessment {
    let assessment = assess(hard, soft, weights);
    if let Some(diagnostic) = assessment.diagnostic() {
        sink.emit(&diagnostic);
    }
    assessment
}

fn assess(hard: &HardCriteria, soft: &SoftCriteria, weights: &SoftWeights) -> Assessment {
    if let Err(error) = check_criteria(soft, weights) {
        return Assessment::Invalid { error };
    }

    // First failing criterion wins; any single one is enough to exclude
    if let Some((criterion, _)) = hard.iter().find(|(_, satisfied)| !**satisfied) {
        return Assessment::Excluded {
            criterion: criterion.clone(),
        };
    }

    let mut score = 0.0;
    let mut contributions = Vec::with_capacity(soft.len());
    for (name, &value) in soft {
        // Key sets were checked equal above
        let Some(&weight) = weights.get(name) else {
            continue;
        };
        let contribution = weight * value;
        score += contribution;
        contributions.push(CriterionContribution {
            name: name.clone(),
            value,
            weight,
            contribution,
        });
    }

    Assessment::Scored(ScoreBreakdown {
        score,
        contributions,
    })
}

/// Calculate the Environmental Suitability Index for a location.
///
/// Returns `0.0` when the inputs are invalid or a hard criterion fails; the
/// cause is logged through the `log` facade.
pub fn evaluate_location(hard: &HardCriteria, soft: &SoftCriteria, weights: &SoftWeights) -> f64 {
    evaluate_location_with(&LogSink, hard, soft, weights)
}

/// Same as [`evaluate_location`], reporting to an explicit sink.
pub fn evaluate_location_with(
    sink: &dyn DiagnosticSink,
    hard: &HardCriteria,
    soft: &SoftCriteria,
    weights: &SoftWeights,
) -> f64 {
    assess_location_with(sink, hard, soft, weights).score()
}
