use crate::db::{DbConnection, DbPool};
use crate::domain::hobby::{Hobby, HobbyUpdate, NewHobby};
use crate::domain::types::{HobbyCategory, HobbyDifficulty, HobbyId};
use crate::pagination::Pagination;

pub mod errors;
pub mod hobby;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Filters and pagination used when listing or counting hobbies.
///
/// Every `None` filter means "no constraint". Counting ignores `pagination`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HobbyListQuery {
    /// Exact category match.
    pub category: Option<HobbyCategory>,
    /// Exact difficulty match.
    pub difficulty: Option<HobbyDifficulty>,
    /// Exact active flag match.
    pub is_active: Option<bool>,
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl HobbyListQuery {
    pub fn category(mut self, category: HobbyCategory) -> Self {
        self.category = Some(category);
        self
    }
    pub fn difficulty(mut self, difficulty: HobbyDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// The search term, or `None` when absent or empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|search| !search.is_empty())
    }
}

/// Read-only operations for hobby entities.
pub trait HobbyReader {
    /// Retrieve a hobby by its identifier.
    fn get_hobby_by_id(&self, id: HobbyId) -> RepositoryResult<Option<Hobby>>;
    /// List hobbies matching the query, newest first.
    fn list_hobbies(&self, query: &HobbyListQuery) -> RepositoryResult<Vec<Hobby>>;
    /// Count hobbies matching the query filters.
    fn count_hobbies(&self, query: &HobbyListQuery) -> RepositoryResult<usize>;
}

/// Write operations for hobby entities.
pub trait HobbyWriter {
    /// Persist a new hobby and return it with its assigned identifier.
    fn create_hobby(&self, hobby: &NewHobby) -> RepositoryResult<Hobby>;
    /// Apply a partial update. Returns `None` when the hobby does not exist.
    fn update_hobby(&self, id: HobbyId, update: &HobbyUpdate) -> RepositoryResult<Option<Hobby>>;
    /// Delete a hobby. Returns `false` when the hobby does not exist.
    fn delete_hobby(&self, id: HobbyId) -> RepositoryResult<bool>;
}
