//! Static city-tier membership tables.
//!
//! A coarse 3-level classification of a city's economic status, used as
//! a categorical model feature. Membership is configuration data,
//! initialized once and read-only thereafter; lookups expect city names
//! already normalized by [`crate::validate::normalize_city`].

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tier-1 metropolitan cities.
static TIER_1_CITIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Mumbai",
        "Delhi",
        "Bangalore",
        "Chennai",
        "Kolkata",
        "Hyderabad",
        "Pune",
    ]
    .into_iter()
    .collect()
});

/// Tier-2 cities.
static TIER_2_CITIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Jaipur",
        "Chandigarh",
        "Indore",
        "Lucknow",
        "Patna",
        "Ranchi",
        "Visakhapatnam",
        "Coimbatore",
        "Bhopal",
        "Nagpur",
        "Vadodara",
        "Surat",
        "Rajkot",
        "Jodhpur",
        "Raipur",
        "Amritsar",
        "Varanasi",
        "Agra",
        "Dehradun",
        "Mysore",
        "Jabalpur",
        "Guwahati",
        "Thiruvananthapuram",
        "Ludhiana",
        "Nashik",
        "Allahabad",
        "Udaipur",
        "Aurangabad",
        "Hubli",
        "Belgaum",
        "Salem",
        "Vijayawada",
        "Tiruchirappalli",
        "Bhavnagar",
        "Gwalior",
        "Dhanbad",
        "Bareilly",
        "Aligarh",
        "Gaya",
        "Kozhikode",
        "Warangal",
        "Kolhapur",
        "Bilaspur",
        "Jalandhar",
        "Noida",
        "Guntur",
        "Asansol",
        "Siliguri",
    ]
    .into_iter()
    .collect()
});

/// Classifies a normalized city name into tier 1, 2, or 3.
///
/// Total over all strings: cities in neither table are tier 3.
#[must_use]
pub fn city_tier(city: &str) -> u8 {
    if TIER_1_CITIES.contains(city) {
        1
    } else if TIER_2_CITIES.contains(city) {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tier_1_city() {
        assert_eq!(city_tier("Mumbai"), 1);
    }

    #[test]
    fn classifies_tier_2_city() {
        assert_eq!(city_tier("Jaipur"), 2);
    }

    #[test]
    fn unknown_city_defaults_to_tier_3() {
        assert_eq!(city_tier("Atlantis"), 3);
    }

    #[test]
    fn lookup_is_case_sensitive_over_normalized_names() {
        // Callers normalize first; a raw lowercase name is not a match.
        assert_eq!(city_tier("mumbai"), 3);
    }

    #[test]
    fn empty_string_is_tier_3() {
        assert_eq!(city_tier(""), 3);
    }
}
