use chrono::Utc;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::hobby::{HobbyUpdate, NewHobby};
use crate::domain::types::{
    HOBBY_DESCRIPTION_MAX_LEN, HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyName,
    TypeConstraintError, is_valid_hobby_category, is_valid_hobby_difficulty,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE};
use crate::repository::HobbyListQuery;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_DIFFICULTY: &str = "Invalid difficulty level";
pub const INVALID_CATEGORY: &str = "Invalid category";
pub const INVALID_HOBBY_ID: &str = "Invalid hobby ID";
pub const DESCRIPTION_TOO_LONG: &str = "Description must be at most 500 characters";

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    if is_valid_hobby_difficulty(value) {
        Ok(())
    } else {
        Err(ValidationError::new("difficulty").with_message(INVALID_DIFFICULTY.into()))
    }
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if is_valid_hobby_category(value) {
        Ok(())
    } else {
        Err(ValidationError::new("category").with_message(INVALID_CATEGORY.into()))
    }
}

/// Flatten validator output into human-readable messages, ordered by `fields`.
pub fn violation_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => format!("Invalid {}", error.code),
        })
        .collect()
}

/// Parse a path identifier; only plain non-negative integers are accepted.
pub fn parse_hobby_id(raw: &str) -> Result<i32, HobbyFormError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HobbyFormError::Validation(INVALID_HOBBY_ID.to_string()));
    }
    raw.parse::<i32>()
        .map_err(|_| HobbyFormError::Validation(INVALID_HOBBY_ID.to_string()))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HobbyFormError {
    /// One or more request rules failed; the message lists all of them.
    #[error("{0}")]
    Validation(String),
    /// A domain constraint rejected input the form rules accepted. Only
    /// reachable if the two sets of rules drift apart.
    #[error("Hobby form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl HobbyFormError {
    fn from_violations(violations: Vec<String>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::Validation(violations.join(", ")))
        }
    }
}

impl From<ValidationErrors> for HobbyFormError {
    fn from(value: ValidationErrors) -> Self {
        let fields = ["page", "limit", "category", "difficulty"];
        Self::Validation(violation_messages(&value, &fields).join(", "))
    }
}

impl From<TypeConstraintError> for HobbyFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Query string accepted by `GET /hobbies`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListHobbiesQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<usize>,
    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl TryFrom<ListHobbiesQuery> for HobbyListQuery {
    type Error = HobbyFormError;

    fn try_from(value: ListHobbiesQuery) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut query = HobbyListQuery::default().paginate(
            value.page.unwrap_or(DEFAULT_PAGE),
            value.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        );
        if let Some(category) = value.category {
            query = query.category(HobbyCategory::try_from(category)?);
        }
        if let Some(difficulty) = value.difficulty {
            query = query.difficulty(HobbyDifficulty::try_from(difficulty)?);
        }
        if let Some(is_active) = value.is_active {
            query = query.active(is_active);
        }
        if let Some(search) = value.search.filter(|s| !s.is_empty()) {
            query = query.search(search);
        }
        Ok(query)
    }
}

/// JSON body accepted by `POST /hobbies`.
///
/// Required fields default to empty strings so that a missing field is
/// reported alongside every other violation instead of failing parsing.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHobbyForm {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateHobbyPayload {
    pub name: HobbyName,
    pub description: Option<HobbyDescription>,
    pub difficulty: HobbyDifficulty,
    pub category: HobbyCategory,
    pub is_active: bool,
}

impl CreateHobbyPayload {
    pub fn into_new_hobby(self) -> NewHobby {
        let now = Utc::now().naive_utc();
        NewHobby {
            name: self.name,
            description: self.description,
            difficulty: self.difficulty,
            category: self.category,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<CreateHobbyForm> for CreateHobbyPayload {
    type Error = HobbyFormError;

    fn try_from(value: CreateHobbyForm) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        if value.name.trim().is_empty() {
            violations.push(NAME_REQUIRED.to_string());
        }
        if let Err(errors) = value.validate() {
            violations.extend(violation_messages(&errors, &["name", "description"]));
        }
        if !is_valid_hobby_difficulty(&value.difficulty) {
            violations.push(INVALID_DIFFICULTY.to_string());
        }
        if !is_valid_hobby_category(&value.category) {
            violations.push(INVALID_CATEGORY.to_string());
        }
        HobbyFormError::from_violations(violations)?;

        Ok(Self {
            name: HobbyName::new(value.name)?,
            // An empty description on create is stored as absent.
            description: value
                .description
                .filter(|description| !description.is_empty())
                .map(HobbyDescription::new)
                .transpose()?,
            difficulty: HobbyDifficulty::try_from(value.difficulty)?,
            category: HobbyCategory::try_from(value.category)?,
            is_active: value.is_active.unwrap_or(true),
        })
    }
}

/// JSON body accepted by `PUT /hobbies/{id}`; every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHobbyForm {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    /// `null` clears the description, absence leaves it alone.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateHobbyPayload {
    pub update: HobbyUpdate,
}

impl TryFrom<UpdateHobbyForm> for UpdateHobbyPayload {
    type Error = HobbyFormError;

    fn try_from(value: UpdateHobbyForm) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        if value.name.as_ref().is_some_and(|name| name.trim().is_empty()) {
            violations.push(NAME_REQUIRED.to_string());
        }
        if let Err(errors) = value.validate() {
            violations.extend(violation_messages(&errors, &["name"]));
        }
        if let Some(Some(description)) = &value.description {
            if description.chars().count() > HOBBY_DESCRIPTION_MAX_LEN {
                violations.push(DESCRIPTION_TOO_LONG.to_string());
            }
        }
        if value
            .difficulty
            .as_deref()
            .is_some_and(|d| !is_valid_hobby_difficulty(d))
        {
            violations.push(INVALID_DIFFICULTY.to_string());
        }
        if value
            .category
            .as_deref()
            .is_some_and(|c| !is_valid_hobby_category(c))
        {
            violations.push(INVALID_CATEGORY.to_string());
        }
        HobbyFormError::from_violations(violations)?;

        Ok(Self {
            update: HobbyUpdate {
                name: value.name.map(HobbyName::new).transpose()?,
                description: value
                    .description
                    .map(|description| description.map(HobbyDescription::new).transpose())
                    .transpose()?,
                difficulty: value.difficulty.map(HobbyDifficulty::try_from).transpose()?,
                category: value.category.map(HobbyCategory::try_from).transpose()?,
                is_active: value.is_active,
            },
        })
    }
}
