mod schema;

pub use schema::LocationProfile;

use anyhow::{Context, Result};
use std::cmp::Ordering;

use crate::diagnostics::{DiagnosticSink, Labelled, LogSink};
use crate::scoring::{assess_location, assess_location_with, Assessment};

impl LocationProfile {
    /// Parse a single profile from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).context("Failed to parse location profile: invalid YAML")
    }

    /// Parse a single profile from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse location profile: invalid JSON")
    }

    /// Assess this location without emitting diagnostics.
    pub fn assess(&self) -> Assessment {
        assess_location(&self.hard, &self.soft, &self.weights)
    }

    /// ESI score for this location; failures are logged and score `0.0`.
    pub fn evaluate(&self) -> f64 {
        let sink = Labelled {
            label: &self.name,
            inner: &LogSink,
        };
        assess_location_with(&sink, &self.hard, &self.soft, &self.weights).score()
    }
}

/// Parse a YAML sequence of profiles.
///
/// # Errors
///
/// Returns an error if the text is not a YAML sequence of valid profiles or
/// if two profiles share a name.
pub fn parse_profiles_yaml(text: &str) -> Result<Vec<LocationProfile>> {
    let profiles: Vec<LocationProfile> = serde_saphyr::from_str(text)
        .context("Failed to parse location profiles: invalid YAML")?;

    let mut seen = std::collections::HashSet::new();
    for profile in &profiles {
        if !seen.insert(profile.name.as_str()) {
            anyhow::bail!("Duplicate location name in profiles: {}", profile.name);
        }
    }

    Ok(profiles)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedLocation {
    pub name: String,
    pub assessment: Assessment,
}

impl RankedLocation {
    pub fn score(&self) -> f64 {
        self.assessment.score()
    }
}

/// Assess every profile and order them best first.
///
/// Diagnostics are prefixed with the location name. Equal scores are ordered
/// by name so the ranking is stable regardless of input order.
pub fn rank_locations(profiles: &[LocationProfile], sink: &dyn DiagnosticSink) -> Vec<RankedLocation> {
    let mut ranked: Vec<RankedLocation> = profiles
        .iter()
        .map(|profile| {
            let labelled = Labelled {
                label: &profile.name,
                inner: sink,
            };
            RankedLocation {
                name: profile.name.clone(),
                assessment: assess_location_with(
                    &labelled,
                    &profile.hard,
                    &profile.soft,
                    &profile.weights,
                ),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        // Primary: score descending
        let score_cmp = b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            return score_cmp;
        }
        a.name.cmp(&b.name)
    });

    ranked
}
