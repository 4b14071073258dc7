//! HTTP transport: extractors, route registration and status mapping.

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::hobbies::ApiResponse;
use crate::services::ServiceError;

pub mod hobbies;

pub const HOBBY_NOT_FOUND: &str = "Hobby not found";
pub const HOBBY_NAME_CONFLICT: &str = "Hobby with this name already exists";

/// Map a service failure to its status code and envelope.
///
/// `internal_message` is the fixed text shown for unexpected failures; the
/// underlying cause has already been logged by the service.
pub fn error_response(err: ServiceError, internal_message: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(message))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::failure(HOBBY_NOT_FOUND))
        }
        ServiceError::Conflict => {
            HttpResponse::Conflict().json(ApiResponse::<()>::failure(HOBBY_NAME_CONFLICT))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ApiResponse::<()>::failure(internal_message))
        }
    }
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    log::debug!("Rejected request body: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::failure(format!("Invalid request body: {err}")));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    log::debug!("Rejected query string: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::failure(format!("Invalid query parameters: {err}")));
    InternalError::from_response(err, response).into()
}

/// Cross-origin policy: any origin may call the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Fallback for paths no route matches.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure("Route not found"))
}

/// Register the hobby routes and the envelope-producing extractor configs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(hobbies::list_hobbies)
        .service(hobbies::get_hobby)
        .service(hobbies::create_hobby)
        .service(hobbies::update_hobby)
        .service(hobbies::delete_hobby);
}
