#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Premium model inference adapter.
//!
//! Loads a serialized tree-ensemble artifact once at process startup
//! and exposes a pure prediction call over engineered features. The
//! artifact is immutable after load, so a single handle can be shared
//! read-only across request handlers without locking.

pub mod artifact;

use std::path::Path;

use premium_api_applicant_models::EngineeredFeatures;

use crate::artifact::{Artifact, FEATURE_COUNT};

/// Column order of the feature row the model was trained on.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "bmi",
    "age_group",
    "lifestyle_risk",
    "city_tier",
    "income_lpa",
    "occupation",
];

/// Errors that can occur while loading a model artifact.
///
/// All of these are fatal at startup: the process must not begin
/// serving without a usable model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Artifact file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact is not valid JSON for the expected format.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Artifact parsed but violates a structural invariant.
    #[error("Invalid model artifact: {message}")]
    Invalid {
        /// Description of the structural defect.
        message: String,
    },
}

/// Errors that can occur during a prediction call.
///
/// Caught per request by the caller; never fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// A categorical feature value is absent from the artifact's
    /// encoder, so the model has no encoding for it.
    #[error("unseen categorical value `{value}` for feature `{feature}`")]
    UnseenCategory {
        /// Feature column name.
        feature: &'static str,
        /// The unencodable label.
        value: String,
    },
}

/// A loaded premium model.
#[derive(Debug, Clone)]
pub struct PremiumModel {
    artifact: Artifact,
}

impl PremiumModel {
    /// Loads and validates a model artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the file is missing or unreadable,
    /// is not valid artifact JSON, or fails structural validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses and validates a model artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the JSON does not match the artifact
    /// format or fails structural validation.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(json)?;
        artifact
            .validate()
            .map_err(|message| ModelError::Invalid { message })?;
        Ok(Self { artifact })
    }

    /// Semantic version of the trained model.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.artifact.version
    }

    /// Output class labels this model can predict.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.artifact.classes
    }

    /// Predicts the premium category for one engineered feature row.
    ///
    /// Builds the single-row input in the trained column order
    /// ([`FEATURE_COLUMNS`]), walks every tree, and majority-votes the
    /// class. A tie goes to the lowest class index, keeping the call
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns a [`PredictError`] if a categorical value has no
    /// encoding in the artifact.
    pub fn predict(&self, features: &EngineeredFeatures) -> Result<String, PredictError> {
        let row = self.encode(features)?;

        let mut votes = vec![0_usize; self.artifact.classes.len()];
        for tree in &self.artifact.trees {
            votes[tree.decide(&row)] += 1;
        }

        let mut winner = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[winner] {
                winner = class;
            }
        }

        Ok(self.artifact.classes[winner].clone())
    }

    /// Encodes engineered features into the trained column order.
    fn encode(&self, features: &EngineeredFeatures) -> Result<[f64; FEATURE_COUNT], PredictError> {
        let age_group = code(
            &self.artifact.encoders.age_group,
            "age_group",
            features.age_group.as_ref(),
        )?;
        let lifestyle_risk = code(
            &self.artifact.encoders.lifestyle_risk,
            "lifestyle_risk",
            features.lifestyle_risk.as_ref(),
        )?;
        let occupation = code(
            &self.artifact.encoders.occupation,
            "occupation",
            features.occupation.as_ref(),
        )?;

        Ok([
            features.bmi,
            age_group,
            lifestyle_risk,
            f64::from(features.city_tier),
            features.income_lpa,
            occupation,
        ])
    }
}

/// Looks up a label's numeric code in an ordered encoder list.
#[allow(clippy::cast_precision_loss)]
fn code(labels: &[String], feature: &'static str, value: &str) -> Result<f64, PredictError> {
    labels
        .iter()
        .position(|label| label == value)
        .map(|position| position as f64)
        .ok_or_else(|| PredictError::UnseenCategory {
            feature,
            value: value.to_string(),
        })
}
