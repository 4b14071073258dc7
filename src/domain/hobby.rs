use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyId, HobbyName};

/// A stored hobby record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hobby {
    pub id: HobbyId,
    pub name: HobbyName,
    pub description: Option<HobbyDescription>,
    pub difficulty: HobbyDifficulty,
    pub category: HobbyCategory,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Hobby`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHobby {
    pub name: HobbyName,
    pub description: Option<HobbyDescription>,
    pub difficulty: HobbyDifficulty,
    pub category: HobbyCategory,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial set of fields to change on an existing [`Hobby`].
///
/// `None` leaves a field untouched. For `description`, `Some(None)` clears the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HobbyUpdate {
    pub name: Option<HobbyName>,
    pub description: Option<Option<HobbyDescription>>,
    pub difficulty: Option<HobbyDifficulty>,
    pub category: Option<HobbyCategory>,
    pub is_active: Option<bool>,
}

impl HobbyUpdate {
    /// Apply the supplied fields to `hobby`, leaving the rest as they are.
    pub fn apply_to(&self, hobby: &mut Hobby) {
        if let Some(name) = &self.name {
            hobby.name = name.clone();
        }
        if let Some(description) = &self.description {
            hobby.description = description.clone();
        }
        if let Some(difficulty) = self.difficulty {
            hobby.difficulty = difficulty;
        }
        if let Some(category) = self.category {
            hobby.category = category;
        }
        if let Some(is_active) = self.is_active {
            hobby.is_active = is_active;
        }
    }
}
