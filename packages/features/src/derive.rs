//! Feature derivation from a validated applicant.

use premium_api_applicant_models::{AgeGroup, EngineeredFeatures, LifestyleRisk, RawApplicant};

use crate::city_tier;

/// Derives the engineered feature row for a validated applicant.
///
/// Pure and deterministic: identical input always yields an identical
/// feature row. Assumes validation has already run, so there is no
/// failure mode.
#[must_use]
pub fn derive(raw: &RawApplicant) -> EngineeredFeatures {
    let height_m = raw.height / 100.0;
    let bmi = raw.weight / (height_m * height_m);

    EngineeredFeatures {
        bmi,
        age_group: AgeGroup::from_age(raw.age),
        lifestyle_risk: LifestyleRisk::classify(raw.smoker, bmi),
        city_tier: city_tier::city_tier(&raw.city),
        income_lpa: raw.income_lpa,
        occupation: raw.occupation,
    }
}

#[cfg(test)]
mod tests {
    use premium_api_applicant_models::Occupation;

    use super::*;

    fn applicant(age: u32, weight: f64, height: f64, smoker: bool, city: &str) -> RawApplicant {
        RawApplicant {
            age,
            weight,
            height,
            income_lpa: 10.0,
            smoker,
            city: city.to_string(),
            occupation: Occupation::PrivateJob,
        }
    }

    #[test]
    fn computes_bmi_from_height_in_centimeters() {
        let features = derive(&applicant(30, 70.5, 175.2, false, "Mumbai"));
        assert!((features.bmi - 22.97).abs() < 0.01);
    }

    #[test]
    fn is_deterministic() {
        let raw = applicant(52, 80.0, 168.0, true, "Jaipur");
        assert_eq!(derive(&raw), derive(&raw));
    }

    #[test]
    fn classifies_smoker_with_high_bmi_as_high_risk() {
        // weight 31 at height 100cm gives bmi exactly 31
        let features = derive(&applicant(30, 31.0, 100.0, true, "Mumbai"));
        assert_eq!(features.lifestyle_risk, LifestyleRisk::High);
    }

    #[test]
    fn classifies_lean_smoker_as_medium_risk() {
        let features = derive(&applicant(30, 25.0, 100.0, true, "Mumbai"));
        assert_eq!(features.lifestyle_risk, LifestyleRisk::Medium);
    }

    #[test]
    fn classifies_non_smoker_with_elevated_bmi_as_medium_risk() {
        let features = derive(&applicant(30, 28.0, 100.0, false, "Mumbai"));
        assert_eq!(features.lifestyle_risk, LifestyleRisk::Medium);
    }

    #[test]
    fn classifies_lean_non_smoker_as_low_risk() {
        let features = derive(&applicant(30, 20.0, 100.0, false, "Mumbai"));
        assert_eq!(features.lifestyle_risk, LifestyleRisk::Low);
    }

    #[test]
    fn maps_age_to_group() {
        assert_eq!(
            derive(&applicant(24, 70.0, 175.0, false, "Pune")).age_group,
            AgeGroup::Young
        );
        assert_eq!(
            derive(&applicant(45, 70.0, 175.0, false, "Pune")).age_group,
            AgeGroup::MiddleAged
        );
        assert_eq!(
            derive(&applicant(60, 70.0, 175.0, false, "Pune")).age_group,
            AgeGroup::Senior
        );
    }

    #[test]
    fn looks_up_city_tier() {
        assert_eq!(derive(&applicant(30, 70.0, 175.0, false, "Mumbai")).city_tier, 1);
        assert_eq!(derive(&applicant(30, 70.0, 175.0, false, "Jaipur")).city_tier, 2);
        assert_eq!(
            derive(&applicant(30, 70.0, 175.0, false, "Atlantis")).city_tier,
            3
        );
    }

    #[test]
    fn passes_income_and_occupation_through() {
        let features = derive(&applicant(30, 70.0, 175.0, false, "Mumbai"));
        assert!((features.income_lpa - 10.0).abs() < f64::EPSILON);
        assert_eq!(features.occupation, Occupation::PrivateJob);
    }
}
