//! Category endpoints.
//!
//! ```text
//! GET    /categories
//! POST   /categories
//! GET    /categories/{id}
//! PATCH  /categories/{id}
//! DELETE /categories/{id}
//! ```
//!
//! Write requests walk the same pipeline, terminal on first failure:
//! media-type gate, decode, validate, persist, render.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};

use crate::domain::{CategoryIn, PersistenceError};
use crate::inbound::http::responders::{
    decode_body, json_response, not_found, require_json_media_type, server_error,
    validation_error_response,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate;

/// List all categories.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = [crate::domain::Category]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["categories"],
    operation_id = "getCategories"
)]
#[get("/categories")]
pub async fn get_categories(state: web::Data<HttpState>) -> HttpResponse {
    match state.categories.select_categories().await {
        Ok(categories) => json_response(StatusCode::OK, &categories),
        Err(err) => server_error(err),
    }
}

/// Fetch one category by identity.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = crate::domain::Category),
        (status = 404, description = "Not found", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{id}")]
pub async fn get_category(req: HttpRequest, state: web::Data<HttpState>) -> HttpResponse {
    match state.categories.select_one_category(req.path()).await {
        Ok(category) => json_response(StatusCode::OK, &category),
        Err(PersistenceError::NotFound { .. }) => not_found(&req),
        Err(err) => server_error(err),
    }
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/categories",
    request_body = crate::domain::CategoryIn,
    responses(
        (status = 201, description = "Created", body = crate::domain::Category),
        (status = 400, description = "Bad request", body = [crate::domain::Error]),
        (status = 415, description = "Bad Content-Type", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["categories"],
    operation_id = "addCategory"
)]
#[post("/categories")]
pub async fn post_category(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> HttpResponse {
    if let Err(response) = require_json_media_type(&req) {
        return response;
    }
    let input: CategoryIn = match decode_body(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(errors) = validate(&input) {
        return validation_error_response(errors);
    }
    match state.categories.insert_category(input).await {
        Ok(category) => json_response(StatusCode::CREATED, &category),
        Err(err) => server_error(err),
    }
}

/// Update a category. Never creates: an unknown identity is 404.
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = crate::domain::CategoryIn,
    responses(
        (status = 200, description = "Updated", body = crate::domain::Category),
        (status = 400, description = "Bad request", body = [crate::domain::Error]),
        (status = 404, description = "Not found", body = [crate::domain::Error]),
        (status = 415, description = "Bad Content-Type", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["categories"],
    operation_id = "updateCategory"
)]
#[patch("/categories/{id}")]
pub async fn patch_category(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> HttpResponse {
    if let Err(response) = require_json_media_type(&req) {
        return response;
    }
    let input: CategoryIn = match decode_body(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(errors) = validate(&input) {
        return validation_error_response(errors);
    }
    match state.categories.update_category(req.path(), input).await {
        Ok(category) => json_response(StatusCode::OK, &category),
        Err(PersistenceError::NotFound { .. }) => not_found(&req),
        Err(err) => server_error(err),
    }
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
#[delete("/categories/{id}")]
pub async fn delete_category(req: HttpRequest, state: web::Data<HttpState>) -> HttpResponse {
    match state.categories.delete_category(req.path()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => server_error(err),
    }
}
