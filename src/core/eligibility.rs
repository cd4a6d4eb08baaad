//! Driving eligibility by country

use super::RuleViolation;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Countries with a known minimum driving age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Us,
    Uk,
}

impl CountryCode {
    pub const fn minimum_driving_age(self) -> u32 {
        match self {
            Self::Us => 16,
            Self::Uk => 17,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
        }
    }
}

impl FromStr for CountryCode {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(Self::Us),
            "UK" => Ok(Self::Uk),
            other => Err(RuleViolation::InvalidCountryCode(other.to_string())),
        }
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether someone of `age` may drive in `country_code`
///
/// Codes are matched exactly ("US", "UK"); any other code is a violation.
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, RuleViolation> {
    let country: CountryCode = country_code.parse()?;
    Ok(age >= country.minimum_driving_age())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_country() {
        let err = can_drive(20, "ID").unwrap_err();
        assert_eq!(err, RuleViolation::InvalidCountryCode("ID".to_string()));
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_country_code_is_case_sensitive() {
        assert!(can_drive(30, "us").is_err());
    }

    #[test]
    fn test_driving_age_table() {
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (24, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (24, "UK", true),
        ];

        for (age, country, expected) in cases {
            assert_eq!(
                can_drive(age, country),
                Ok(expected),
                "should return {expected} for {age} in {country}"
            );
        }
    }

    #[test]
    fn test_country_code_round_trips_through_display() {
        for code in [CountryCode::Us, CountryCode::Uk] {
            assert_eq!(code.to_string().parse::<CountryCode>(), Ok(code));
        }
    }
}
