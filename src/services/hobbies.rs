//! Request handlers for the hobby endpoints.
//!
//! Each function validates its input, talks to the repository and returns a
//! DTO or a [`ServiceError`]. Storage failures are logged here and degraded to
//! [`ServiceError::Internal`]; the HTTP route only maps outcomes to statuses.

use crate::domain::types::HobbyId;
use crate::dto::hobbies::{HobbyDto, PaginatedResponse};
use crate::forms::hobbies::{
    CreateHobbyForm, CreateHobbyPayload, ListHobbiesQuery, UpdateHobbyForm, UpdateHobbyPayload,
    parse_hobby_id,
};
use crate::repository::{HobbyListQuery, HobbyReader, HobbyWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Resolve a raw path segment to an identifier.
///
/// Malformed input is a validation error; well-formed ids that can never
/// exist (zero) are simply not found.
fn resolve_id(raw_id: &str) -> ServiceResult<HobbyId> {
    let id = parse_hobby_id(raw_id)?;
    HobbyId::new(id).map_err(|_| ServiceError::NotFound)
}

fn internal(action: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |e| {
        log::error!("Failed to {action}: {e}");
        ServiceError::Internal
    }
}

/// Like [`internal`], but reports uniqueness violations as conflicts.
fn classify_write(action: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |e| {
        if e.is_conflict() {
            log::warn!("Rejected {action}: {e}");
            ServiceError::Conflict
        } else {
            internal(action)(e)
        }
    }
}

pub fn list_hobbies<R>(
    query: ListHobbiesQuery,
    repo: &R,
) -> ServiceResult<PaginatedResponse<HobbyDto>>
where
    R: HobbyReader,
{
    let query = HobbyListQuery::try_from(query)?;
    let pagination = query.pagination.unwrap_or_default();

    // Independent reads: the total may drift from the page between them.
    let items = repo
        .list_hobbies(&query)
        .map_err(internal("list hobbies"))?;
    let total = repo
        .count_hobbies(&query)
        .map_err(internal("count hobbies"))?;

    Ok(PaginatedResponse::new(
        items.into_iter().map(HobbyDto::from).collect(),
        total,
        pagination,
    ))
}

pub fn get_hobby<R>(raw_id: &str, repo: &R) -> ServiceResult<HobbyDto>
where
    R: HobbyReader,
{
    let id = resolve_id(raw_id)?;

    match repo.get_hobby_by_id(id) {
        Ok(Some(hobby)) => Ok(hobby.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(internal("get hobby")(e)),
    }
}

pub fn create_hobby<R>(form: CreateHobbyForm, repo: &R) -> ServiceResult<HobbyDto>
where
    R: HobbyWriter,
{
    let payload = CreateHobbyPayload::try_from(form)?;
    let new_hobby = payload.into_new_hobby();

    let hobby = repo
        .create_hobby(&new_hobby)
        .map_err(classify_write("create hobby"))?;

    log::info!("Created hobby {} ({})", hobby.id, hobby.name);
    Ok(hobby.into())
}

pub fn update_hobby<R>(raw_id: &str, form: UpdateHobbyForm, repo: &R) -> ServiceResult<HobbyDto>
where
    R: HobbyWriter,
{
    let id = resolve_id(raw_id)?;
    let payload = UpdateHobbyPayload::try_from(form)?;

    match repo.update_hobby(id, &payload.update) {
        Ok(Some(hobby)) => Ok(hobby.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(classify_write("update hobby")(e)),
    }
}

pub fn delete_hobby<R>(raw_id: &str, repo: &R) -> ServiceResult<()>
where
    R: HobbyWriter,
{
    let id = resolve_id(raw_id)?;

    match repo.delete_hobby(id) {
        Ok(true) => {
            log::info!("Deleted hobby {id}");
            Ok(())
        }
        Ok(false) => Err(ServiceError::NotFound),
        Err(e) => Err(internal("delete hobby")(e)),
    }
}
