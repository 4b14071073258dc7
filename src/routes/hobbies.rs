use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::hobbies::ApiResponse;
use crate::forms::hobbies::{CreateHobbyForm, ListHobbiesQuery, UpdateHobbyForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::hobbies::{
    create_hobby as create_hobby_service, delete_hobby as delete_hobby_service,
    get_hobby as get_hobby_service, list_hobbies as list_hobbies_service,
    update_hobby as update_hobby_service,
};

#[get("/hobbies")]
pub async fn list_hobbies(
    query: web::Query<ListHobbiesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_hobbies_service(query.into_inner(), repo.get_ref()) {
        Ok(page) => {
            let message = format!("Found {} hobbies", page.data.len());
            HttpResponse::Ok().json(ApiResponse::success(page).with_message(message))
        }
        Err(err) => error_response(err, "Failed to fetch hobbies"),
    }
}

#[get("/hobbies/{id}")]
pub async fn get_hobby(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_hobby_service(&path, repo.get_ref()) {
        Ok(hobby) => HttpResponse::Ok()
            .json(ApiResponse::success(hobby).with_message("Hobby retrieved successfully")),
        Err(err) => error_response(err, "Failed to fetch hobby"),
    }
}

#[post("/hobbies")]
pub async fn create_hobby(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateHobbyForm>,
) -> impl Responder {
    match create_hobby_service(form, repo.get_ref()) {
        Ok(hobby) => HttpResponse::Created()
            .json(ApiResponse::success(hobby).with_message("Hobby created successfully")),
        Err(err) => error_response(err, "Failed to create hobby"),
    }
}

#[put("/hobbies/{id}")]
pub async fn update_hobby(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateHobbyForm>,
) -> impl Responder {
    match update_hobby_service(&path, form, repo.get_ref()) {
        Ok(hobby) => HttpResponse::Ok()
            .json(ApiResponse::success(hobby).with_message("Hobby updated successfully")),
        Err(err) => error_response(err, "Failed to update hobby"),
    }
}

#[delete("/hobbies/{id}")]
pub async fn delete_hobby(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_hobby_service(&path, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok()
            .json(ApiResponse::success(()).with_message("Hobby deleted successfully")),
        Err(err) => error_response(err, "Failed to delete hobby"),
    }
}
