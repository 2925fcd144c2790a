//! Applicant input validation and city normalization.
//!
//! Every constraint is checked before any result is produced, so a
//! failed validation reports the full set of violations rather than
//! the first one encountered.

use std::str::FromStr as _;

use premium_api_applicant_models::{ApplicantInput, Occupation, RawApplicant};

use crate::{FieldError, ValidationError};

/// Normalizes a city name for tier lookup.
///
/// Trims surrounding whitespace, collapses internal whitespace runs to
/// a single space, and title-cases each word, so `" mumbai "` and
/// `"MUMBAI"` both normalize to `"Mumbai"`.
#[must_use]
pub fn normalize_city(city: &str) -> String {
    city.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character of a word and lowercases the rest.
fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Validates raw applicant input, producing a [`RawApplicant`] with a
/// normalized city.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated field
/// constraint: age outside 1..=119, non-positive weight, height, or
/// income, an occupation outside the closed category set, or a city
/// that is empty after trimming.
pub fn validate(input: &ApplicantInput) -> Result<RawApplicant, ValidationError> {
    let mut errors = Vec::new();

    let age = u32::try_from(input.age)
        .ok()
        .filter(|age| (1..120).contains(age));
    if age.is_none() {
        errors.push(FieldError {
            field: "age",
            message: "must be between 1 and 119".to_string(),
        });
    }

    if input.weight <= 0.0 {
        errors.push(FieldError {
            field: "weight",
            message: "must be a positive number".to_string(),
        });
    }

    if input.height <= 0.0 {
        errors.push(FieldError {
            field: "height",
            message: "must be a positive number".to_string(),
        });
    }

    if input.income_lpa <= 0.0 {
        errors.push(FieldError {
            field: "income_lpa",
            message: "must be a positive number".to_string(),
        });
    }

    let city = normalize_city(&input.city);
    if city.is_empty() {
        errors.push(FieldError {
            field: "city",
            message: "must not be empty".to_string(),
        });
    }

    let occupation = Occupation::from_str(input.occupation.trim()).ok();
    if occupation.is_none() {
        let valid = Occupation::all()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(FieldError {
            field: "occupation",
            message: format!("must be one of: {valid}"),
        });
    }

    if let (Some(age), Some(occupation), true) = (age, occupation, errors.is_empty()) {
        Ok(RawApplicant {
            age,
            weight: input.weight,
            height: input.height,
            income_lpa: input.income_lpa,
            smoker: input.smoker,
            city,
            occupation,
        })
    } else {
        Err(ValidationError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ApplicantInput {
        ApplicantInput {
            age: 30,
            weight: 70.5,
            height: 175.2,
            income_lpa: 10.0,
            smoker: false,
            city: "Mumbai".to_string(),
            occupation: "private_job".to_string(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let applicant = validate(&valid_input()).unwrap();
        assert_eq!(applicant.age, 30);
        assert_eq!(applicant.city, "Mumbai");
        assert_eq!(applicant.occupation, Occupation::PrivateJob);
    }

    #[test]
    fn rejects_age_zero() {
        let input = ApplicantInput {
            age: 0,
            ..valid_input()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "age");
    }

    #[test]
    fn rejects_age_120() {
        let input = ApplicantInput {
            age: 120,
            ..valid_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        let input = ApplicantInput {
            weight: -70.5,
            ..valid_input()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.errors[0].field, "weight");
    }

    #[test]
    fn rejects_negative_height() {
        let input = ApplicantInput {
            height: -1.0,
            ..valid_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn rejects_negative_income() {
        let input = ApplicantInput {
            income_lpa: -5.0,
            ..valid_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn rejects_unknown_occupation() {
        let input = ApplicantInput {
            occupation: "astronaut".to_string(),
            ..valid_input()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.errors[0].field, "occupation");
        assert!(err.errors[0].message.contains("private_job"));
    }

    #[test]
    fn reports_every_violation_at_once() {
        let input = ApplicantInput {
            age: -3,
            weight: 0.0,
            height: -10.0,
            income_lpa: 0.0,
            smoker: true,
            city: "   ".to_string(),
            occupation: "astronaut".to_string(),
        };
        let err = validate(&input).unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["age", "weight", "height", "income_lpa", "city", "occupation"]
        );
    }

    #[test]
    fn normalizes_city_before_storing() {
        let input = ApplicantInput {
            city: " mumbai ".to_string(),
            ..valid_input()
        };
        let applicant = validate(&input).unwrap();
        assert_eq!(applicant.city, "Mumbai");
    }

    #[test]
    fn normalize_city_title_cases_each_word() {
        assert_eq!(normalize_city(" new  delhi "), "New Delhi");
        assert_eq!(normalize_city("NAVI MUMBAI"), "Navi Mumbai");
    }

    #[test]
    fn normalize_city_of_empty_string_is_empty() {
        assert_eq!(normalize_city("   "), "");
    }
}
