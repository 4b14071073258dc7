//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::Utc;
use hobbies_api::db::{DbPool, establish_connection_pool, run_migrations};
use hobbies_api::domain::hobby::NewHobby;
use hobbies_api::domain::types::{HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyName};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_hobby(
    name: &str,
    description: Option<&str>,
    difficulty: HobbyDifficulty,
    category: HobbyCategory,
) -> NewHobby {
    let now = Utc::now().naive_utc();
    NewHobby {
        name: HobbyName::new(name).expect("valid hobby name"),
        description: description.map(|d| HobbyDescription::new(d).expect("valid description")),
        difficulty,
        category,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
