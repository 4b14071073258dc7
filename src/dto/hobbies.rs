use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::hobby::Hobby;
use crate::domain::types::{HobbyCategory, HobbyDifficulty};
use crate::pagination::{Pagination, total_pages};

/// Uniform envelope wrapping every response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: usize, pagination: Pagination) -> Self {
        Self {
            data,
            total,
            page: pagination.page,
            limit: pagination.per_page,
            total_pages: total_pages(total, pagination.per_page),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HobbyDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: HobbyDifficulty,
    pub category: HobbyCategory,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hobby> for HobbyDto {
    fn from(value: Hobby) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            difficulty: value.difficulty,
            category: value.category,
            is_active: value.is_active,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}
