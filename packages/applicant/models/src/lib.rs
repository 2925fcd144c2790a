#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Applicant domain types and engineered feature definitions.
//!
//! This crate defines the canonical applicant model shared across the
//! premium-api system: the raw attributes accepted from callers, the
//! closed categorical enumerations, and the engineered feature set fed
//! to the premium model.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Occupation of an applicant.
///
/// Closed enumeration; the premium model was trained on exactly these
/// seven categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Occupation {
    /// No longer in the workforce
    Retired,
    /// Self-employed contract work
    Freelancer,
    /// Enrolled in full-time education
    Student,
    /// Public sector employment
    GovernmentJob,
    /// Owns and operates a business
    BusinessOwner,
    /// Not currently employed
    Unemployed,
    /// Private sector employment
    PrivateJob,
}

impl Occupation {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Retired,
            Self::Freelancer,
            Self::Student,
            Self::GovernmentJob,
            Self::BusinessOwner,
            Self::Unemployed,
            Self::PrivateJob,
        ]
    }
}

/// Age bracket of an applicant, derived from age thresholds 25/45/60.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgeGroup {
    /// Under 25
    Young,
    /// 25 to 44
    Adult,
    /// 45 to 59
    MiddleAged,
    /// 60 and over
    Senior,
}

impl AgeGroup {
    /// Classifies an age into its bracket. Boundaries are inclusive on
    /// the lower bound: 25 is `Adult`, 45 is `MiddleAged`, 60 is
    /// `Senior`.
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=24 => Self::Young,
            25..=44 => Self::Adult,
            45..=59 => Self::MiddleAged,
            _ => Self::Senior,
        }
    }
}

/// Lifestyle risk bracket combining smoking status and BMI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LifestyleRisk {
    /// Non-smoker with BMI at or below 27
    Low,
    /// Smoker, or BMI above 27
    Medium,
    /// Smoker with BMI above 30
    High,
}

impl LifestyleRisk {
    /// Classifies smoking status and BMI into a risk bracket.
    ///
    /// The smoker-with-high-BMI case is checked first, so a smoker with
    /// BMI at or below 27 still classifies as `Medium` via the
    /// smoker-or-elevated-BMI branch.
    #[must_use]
    pub fn classify(smoker: bool, bmi: f64) -> Self {
        if smoker && bmi > 30.0 {
            Self::High
        } else if smoker || bmi > 27.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Raw applicant attributes as received from a caller, prior to any
/// validation. Field contents carry no guarantees.
#[derive(Debug, Clone)]
pub struct ApplicantInput {
    /// Age in whole years.
    pub age: i64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Annual income in lakhs per annum.
    pub income_lpa: f64,
    /// Whether the applicant smokes.
    pub smoker: bool,
    /// City of residence, free text.
    pub city: String,
    /// Occupation, free text matched against [`Occupation`].
    pub occupation: String,
}

/// A validated applicant.
///
/// Every field has passed range and membership checks and the city has
/// been normalized (trimmed, title-cased), so tier lookups against the
/// city tables are case and whitespace insensitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawApplicant {
    /// Age in whole years, 1 to 119.
    pub age: u32,
    /// Weight in kilograms, strictly positive.
    pub weight: f64,
    /// Height in centimeters, strictly positive.
    pub height: f64,
    /// Annual income in lakhs per annum, strictly positive.
    pub income_lpa: f64,
    /// Whether the applicant smokes.
    pub smoker: bool,
    /// Normalized city of residence.
    pub city: String,
    /// Occupation category.
    pub occupation: Occupation,
}

/// Engineered feature row fed to the premium model.
///
/// Computed fresh from a [`RawApplicant`] per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineeredFeatures {
    /// Body mass index: weight over height-in-meters squared.
    pub bmi: f64,
    /// Age bracket.
    pub age_group: AgeGroup,
    /// Lifestyle risk bracket.
    pub lifestyle_risk: LifestyleRisk,
    /// City tier, 1 to 3.
    pub city_tier: u8,
    /// Annual income in lakhs per annum, passed through unchanged.
    pub income_lpa: f64,
    /// Occupation, passed through unchanged.
    pub occupation: Occupation,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn occupation_round_trips_snake_case() {
        assert_eq!(Occupation::PrivateJob.to_string(), "private_job");
        assert_eq!(
            Occupation::from_str("business_owner").unwrap(),
            Occupation::BusinessOwner
        );
    }

    #[test]
    fn occupation_rejects_unknown_value() {
        assert!(Occupation::from_str("astronaut").is_err());
    }

    #[test]
    fn age_group_boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(AgeGroup::from_age(24), AgeGroup::Young);
        assert_eq!(AgeGroup::from_age(25), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(44), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(45), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Senior);
    }

    #[test]
    fn lifestyle_risk_checks_smoker_with_high_bmi_first() {
        assert_eq!(LifestyleRisk::classify(true, 31.0), LifestyleRisk::High);
        assert_eq!(LifestyleRisk::classify(true, 25.0), LifestyleRisk::Medium);
        assert_eq!(LifestyleRisk::classify(false, 28.0), LifestyleRisk::Medium);
        assert_eq!(LifestyleRisk::classify(false, 20.0), LifestyleRisk::Low);
    }

    #[test]
    fn lifestyle_risk_thresholds_are_exclusive() {
        // Exactly 30 is not "above 30"; exactly 27 is not "above 27".
        assert_eq!(LifestyleRisk::classify(true, 30.0), LifestyleRisk::Medium);
        assert_eq!(LifestyleRisk::classify(false, 27.0), LifestyleRisk::Low);
    }

    #[test]
    fn age_group_displays_snake_case() {
        assert_eq!(AgeGroup::MiddleAged.to_string(), "middle_aged");
    }
}
