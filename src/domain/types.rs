//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text lengths and the closed difficulty/category sets are
//! enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Maximum number of characters in a hobby name.
pub const HOBBY_NAME_MAX_LEN: usize = 100;
/// Maximum number of characters in a hobby description.
pub const HOBBY_DESCRIPTION_MAX_LEN: usize = 500;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum character count.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Identifier assigned by storage to every hobby.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct HobbyId(i32);

impl HobbyId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("hobby id"))
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for HobbyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for HobbyId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HobbyId> for i32 {
    fn from(value: HobbyId) -> Self {
        value.0
    }
}

impl PartialEq<i32> for HobbyId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

fn require_max_chars(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), TypeConstraintError> {
    if value.chars().count() > max {
        Err(TypeConstraintError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// Unique hobby name of at most [`HOBBY_NAME_MAX_LEN`] characters.
///
/// Stored as submitted; only the emptiness check ignores surrounding whitespace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct HobbyName(String);

impl HobbyName {
    /// Rejects blank inputs and enforces the length limit.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString("name"));
        }
        require_max_chars(&value, "name", HOBBY_NAME_MAX_LEN)?;
        Ok(Self(value))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for HobbyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HobbyName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HobbyName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<&str> for HobbyName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Free-form description of at most [`HOBBY_DESCRIPTION_MAX_LEN`] characters.
///
/// Unlike names, descriptions are stored verbatim and may be empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HobbyDescription(String);

impl HobbyDescription {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        require_max_chars(&value, "description", HOBBY_DESCRIPTION_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for HobbyDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HobbyDescription {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// How demanding a hobby is to pick up.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HobbyDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl HobbyDifficulty {
    /// Every accepted difficulty, in canonical order.
    pub const ALL: [HobbyDifficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Display for HobbyDifficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for HobbyDifficulty {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("difficulty: {value}")))
    }
}

impl TryFrom<String> for HobbyDifficulty {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<HobbyDifficulty> for String {
    fn from(value: HobbyDifficulty) -> Self {
        value.as_str().to_string()
    }
}

/// Broad grouping a hobby belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HobbyCategory {
    Sports,
    Arts,
    Technology,
    Outdoor,
    Indoor,
    Creative,
}

impl HobbyCategory {
    /// Every accepted category, in canonical order.
    pub const ALL: [HobbyCategory; 6] = [
        Self::Sports,
        Self::Arts,
        Self::Technology,
        Self::Outdoor,
        Self::Indoor,
        Self::Creative,
    ];

    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sports => "sports",
            Self::Arts => "arts",
            Self::Technology => "technology",
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::Creative => "creative",
        }
    }
}

impl Display for HobbyCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for HobbyCategory {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("category: {value}")))
    }
}

impl TryFrom<String> for HobbyCategory {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<HobbyCategory> for String {
    fn from(value: HobbyCategory) -> Self {
        value.as_str().to_string()
    }
}

/// Returns `true` when `value` is exactly one of the canonical difficulty strings.
pub fn is_valid_hobby_difficulty(value: &str) -> bool {
    HobbyDifficulty::try_from(value).is_ok()
}

/// Returns `true` when `value` is exactly one of the canonical category strings.
pub fn is_valid_hobby_category(value: &str) -> bool {
    HobbyCategory::try_from(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_predicate_accepts_only_canonical_values() {
        for value in ["beginner", "intermediate", "advanced"] {
            assert!(is_valid_hobby_difficulty(value), "{value} should be valid");
        }
        for value in ["", "expert", "Beginner", "ADVANCED", " beginner", "sports"] {
            assert!(!is_valid_hobby_difficulty(value), "{value:?} should be invalid");
        }
    }

    #[test]
    fn category_predicate_accepts_only_canonical_values() {
        for value in ["sports", "arts", "technology", "outdoor", "indoor", "creative"] {
            assert!(is_valid_hobby_category(value), "{value} should be valid");
        }
        for value in ["", "music", "Sports", "ARTS", "outdoor ", "beginner"] {
            assert!(!is_valid_hobby_category(value), "{value:?} should be invalid");
        }
    }

    #[test]
    fn enums_round_trip_through_their_string_form() {
        for difficulty in HobbyDifficulty::ALL {
            assert_eq!(HobbyDifficulty::try_from(difficulty.as_str()), Ok(difficulty));
        }
        for category in HobbyCategory::ALL {
            assert_eq!(HobbyCategory::try_from(category.to_string()), Ok(category));
        }
    }

    #[test]
    fn hobby_name_keeps_whitespace_but_must_not_be_blank() {
        assert_eq!(HobbyName::new("  Yoga ").unwrap().as_str(), "  Yoga ");
        assert_eq!(
            HobbyName::new("   "),
            Err(TypeConstraintError::EmptyString("name"))
        );
        assert!(HobbyName::new("a".repeat(HOBBY_NAME_MAX_LEN)).is_ok());
        assert_eq!(
            HobbyName::new("a".repeat(HOBBY_NAME_MAX_LEN + 1)),
            Err(TypeConstraintError::TooLong {
                field: "name",
                max: HOBBY_NAME_MAX_LEN
            })
        );
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        assert!(HobbyDescription::new("é".repeat(HOBBY_DESCRIPTION_MAX_LEN)).is_ok());
        assert!(HobbyDescription::new("x".repeat(HOBBY_DESCRIPTION_MAX_LEN + 1)).is_err());
        assert_eq!(HobbyDescription::new("").unwrap().as_str(), "");
    }

    #[test]
    fn hobby_id_must_be_positive() {
        assert_eq!(HobbyId::new(7).unwrap().get(), 7);
        assert!(HobbyId::new(0).is_err());
        assert!(HobbyId::new(-3).is_err());
    }
}
