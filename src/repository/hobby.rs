use chrono::{NaiveDateTime, TimeDelta, Utc};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::hobby::{Hobby, HobbyUpdate, NewHobby};
use crate::domain::types::HobbyId;
use crate::models::hobby::{Hobby as DbHobby, HobbyChangeset, NewHobby as DbNewHobby};
use crate::repository::{
    DieselRepository, HobbyListQuery, HobbyReader, HobbyWriter, RepositoryResult,
};
use crate::schema::hobbies;

/// Escape `LIKE` wildcards so user input is matched literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Filter set shared by listing and counting.
fn filtered(query: &HobbyListQuery) -> hobbies::BoxedQuery<'static, Sqlite> {
    let mut items = hobbies::table.into_boxed::<Sqlite>();

    if let Some(category) = query.category {
        items = items.filter(hobbies::category.eq(category.as_str()));
    }
    if let Some(difficulty) = query.difficulty {
        items = items.filter(hobbies::difficulty.eq(difficulty.as_str()));
    }
    if let Some(is_active) = query.is_active {
        items = items.filter(hobbies::is_active.eq(is_active));
    }
    // SQLite's LIKE is case-insensitive for ASCII.
    if let Some(search) = query.search_term() {
        let pattern = format!("%{}%", escape_like(search));
        items = items.filter(
            hobbies::name
                .like(pattern.clone())
                .escape('\\')
                .or(hobbies::description.like(pattern).escape('\\')),
        );
    }

    items
}

impl HobbyReader for DieselRepository {
    fn get_hobby_by_id(&self, id: HobbyId) -> RepositoryResult<Option<Hobby>> {
        let mut conn = self.conn()?;

        let hobby = hobbies::table
            .find(id.get())
            .first::<DbHobby>(&mut conn)
            .optional()?;

        let hobby = hobby.map(TryInto::try_into).transpose()?;
        Ok(hobby)
    }

    fn list_hobbies(&self, query: &HobbyListQuery) -> RepositoryResult<Vec<Hobby>> {
        let mut conn = self.conn()?;

        let mut items = filtered(query);
        if let Some(pagination) = &query.pagination {
            // Offsets beyond `i64::MAX` clamp to it; a negative OFFSET would mean zero.
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order((hobbies::created_at.desc(), hobbies::id.desc()))
            .load::<DbHobby>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Hobby>, _>>()?;

        Ok(items)
    }

    fn count_hobbies(&self, query: &HobbyListQuery) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = filtered(query).count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}

impl HobbyWriter for DieselRepository {
    fn create_hobby(&self, hobby: &NewHobby) -> RepositoryResult<Hobby> {
        let mut conn = self.conn()?;
        let db_hobby = DbNewHobby::from(hobby);

        let created = diesel::insert_into(hobbies::table)
            .values(&db_hobby)
            .get_result::<DbHobby>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_hobby(&self, id: HobbyId, update: &HobbyUpdate) -> RepositoryResult<Option<Hobby>> {
        let mut conn = self.conn()?;

        let updated = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let previous = hobbies::table
                .find(id.get())
                .select(hobbies::updated_at)
                .first::<NaiveDateTime>(conn)
                .optional()?;

            let Some(previous) = previous else {
                return Ok(None);
            };

            // Keep `updated_at` strictly increasing even within one clock tick.
            let now = Utc::now().naive_utc();
            let updated_at = if now > previous {
                now
            } else {
                previous + TimeDelta::microseconds(1)
            };

            diesel::update(hobbies::table.find(id.get()))
                .set(HobbyChangeset::new(update, updated_at))
                .get_result::<DbHobby>(conn)
                .optional()
        })?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_hobby(&self, id: HobbyId) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(hobbies::table.find(id.get())).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
