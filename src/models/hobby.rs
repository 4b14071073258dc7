use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::hobby::{Hobby as DomainHobby, HobbyUpdate, NewHobby as DomainNewHobby};
use crate::domain::types::{
    HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyName, TypeConstraintError,
};

/// Diesel model representing a row in the `hobbies` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::hobbies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Hobby {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Hobby`] used for creating new rows.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::hobbies)]
pub struct NewHobby<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub difficulty: &'a str,
    pub category: &'a str,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Patch applied by partial updates. `None` fields are left out of the `SET` clause.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::hobbies)]
pub struct HobbyChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub difficulty: Option<&'a str>,
    pub category: Option<&'a str>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Hobby> for DomainHobby {
    type Error = TypeConstraintError;

    fn try_from(hobby: Hobby) -> Result<Self, Self::Error> {
        Ok(Self {
            id: hobby.id.try_into()?,
            name: HobbyName::new(hobby.name)?,
            description: hobby.description.map(HobbyDescription::new).transpose()?,
            difficulty: HobbyDifficulty::try_from(hobby.difficulty)?,
            category: HobbyCategory::try_from(hobby.category)?,
            is_active: hobby.is_active,
            created_at: hobby.created_at,
            updated_at: hobby.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewHobby> for NewHobby<'a> {
    fn from(hobby: &'a DomainNewHobby) -> Self {
        Self {
            name: hobby.name.as_str(),
            description: hobby.description.as_ref().map(HobbyDescription::as_str),
            difficulty: hobby.difficulty.as_str(),
            category: hobby.category.as_str(),
            is_active: hobby.is_active,
            created_at: hobby.created_at,
            updated_at: hobby.updated_at,
        }
    }
}

impl<'a> HobbyChangeset<'a> {
    pub fn new(update: &'a HobbyUpdate, updated_at: NaiveDateTime) -> Self {
        Self {
            name: update.name.as_ref().map(HobbyName::as_str),
            description: update
                .description
                .as_ref()
                .map(|description| description.as_ref().map(HobbyDescription::as_str)),
            difficulty: update.difficulty.map(HobbyDifficulty::as_str),
            category: update.category.map(HobbyCategory::as_str),
            is_active: update.is_active,
            updated_at,
        }
    }
}
