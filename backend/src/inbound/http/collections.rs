//! Collection endpoints.
//!
//! Same pipeline as categories; a collection may carry an ID-only reference
//! to its category.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};

use crate::domain::{CollectionIn, PersistenceError};
use crate::inbound::http::responders::{
    decode_body, json_response, not_found, require_json_media_type, server_error,
    validation_error_response,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate;

/// List all collections.
#[utoipa::path(
    get,
    path = "/collections",
    responses(
        (status = 200, description = "All collections", body = [crate::domain::Collection]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["collections"],
    operation_id = "getCollections"
)]
#[get("/collections")]
pub async fn get_collections(state: web::Data<HttpState>) -> HttpResponse {
    match state.collections.select_collections().await {
        Ok(collections) => json_response(StatusCode::OK, &collections),
        Err(err) => server_error(err),
    }
}

/// Fetch one collection by identity.
#[utoipa::path(
    get,
    path = "/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "The collection", body = crate::domain::Collection),
        (status = 404, description = "Not found", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["collections"],
    operation_id = "getCollection"
)]
#[get("/collections/{id}")]
pub async fn get_collection(req: HttpRequest, state: web::Data<HttpState>) -> HttpResponse {
    match state.collections.select_one_collection(req.path()).await {
        Ok(collection) => json_response(StatusCode::OK, &collection),
        Err(PersistenceError::NotFound { .. }) => not_found(&req),
        Err(err) => server_error(err),
    }
}

/// Create a collection.
#[utoipa::path(
    post,
    path = "/collections",
    request_body = crate::domain::CollectionIn,
    responses(
        (status = 201, description = "Created", body = crate::domain::Collection),
        (status = 400, description = "Bad request", body = [crate::domain::Error]),
        (status = 415, description = "Bad Content-Type", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["collections"],
    operation_id = "addCollection"
)]
#[post("/collections")]
pub async fn post_collection(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> HttpResponse {
    if let Err(response) = require_json_media_type(&req) {
        return response;
    }
    let input: CollectionIn = match decode_body(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(errors) = validate(&input) {
        return validation_error_response(errors);
    }
    match state.collections.insert_collection(input).await {
        Ok(collection) => json_response(StatusCode::CREATED, &collection),
        Err(err) => server_error(err),
    }
}

/// Update a collection. Never creates: an unknown identity is 404.
#[utoipa::path(
    patch,
    path = "/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    request_body = crate::domain::CollectionIn,
    responses(
        (status = 200, description = "Updated", body = crate::domain::Collection),
        (status = 400, description = "Bad request", body = [crate::domain::Error]),
        (status = 404, description = "Not found", body = [crate::domain::Error]),
        (status = 415, description = "Bad Content-Type", body = [crate::domain::Error]),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["collections"],
    operation_id = "updateCollection"
)]
#[patch("/collections/{id}")]
pub async fn patch_collection(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<HttpState>,
) -> HttpResponse {
    if let Err(response) = require_json_media_type(&req) {
        return response;
    }
    let input: CollectionIn = match decode_body(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(errors) = validate(&input) {
        return validation_error_response(errors);
    }
    match state.collections.update_collection(req.path(), input).await {
        Ok(collection) => json_response(StatusCode::OK, &collection),
        Err(PersistenceError::NotFound { .. }) => not_found(&req),
        Err(err) => server_error(err),
    }
}

/// Delete a collection.
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Server error", body = [crate::domain::Error])
    ),
    tags = ["collections"],
    operation_id = "deleteCollection"
)]
#[delete("/collections/{id}")]
pub async fn delete_collection(req: HttpRequest, state: web::Data<HttpState>) -> HttpResponse {
    match state.collections.delete_collection(req.path()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::Collection;
    use crate::inbound::http::test_utils::test_state;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(test_state()))
            .service(get_collections)
            .service(get_collection)
            .service(post_collection)
            .service(patch_collection)
            .service(delete_collection)
    }

    #[rstest]
    #[actix_web::test]
    async fn post_preserves_the_category_reference() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/collections")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name":"Parish registers","category":{"id":999}}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Collection = actix_test::read_body_json(response).await;
        assert!(created.id > 0);
        assert_eq!(created.category.map(|r| r.id), Some(999));
    }

    #[rstest]
    #[actix_web::test]
    async fn zero_category_reference_fails_the_nonzero_tag() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/collections")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name":"Census","category":{"id":0}}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([{
                "code": "other",
                "message": "Key: 'CollectionIn.category' Error:Field validation for \
                            'category' failed on the 'nonzero' tag"
            }])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_name_and_zero_reference_report_in_rule_order() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/collections")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"category":{"id":0}}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body[0], json!({ "code": "required", "message": "name" }));
        assert_eq!(body[1]["code"], "other");
    }

    #[rstest]
    #[actix_web::test]
    async fn patch_updates_an_existing_collection() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/collections")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name":"Census"}"#)
            .to_request();
        let created: Collection =
            actix_test::read_body_json(actix_test::call_service(&app, request).await).await;

        let path = format!("/collections/{}", created.id);
        let request = actix_test::TestRequest::patch()
            .uri(&path)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"name":"Census returns","category":{"id":3}}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Collection = actix_test::read_body_json(response).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Census returns");
        assert_eq!(updated.category.map(|r| r.id), Some(3));
    }

    #[rstest]
    #[actix_web::test]
    async fn patch_with_wrong_media_type_is_415() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::patch()
            .uri("/collections/1")
            .insert_header((CONTENT_TYPE, "application/xml"))
            .set_payload(r#"{"name":"Census"}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_returns_inserted_collections_in_order() {
        let app = actix_test::init_service(test_app()).await;

        for name in ["Births", "Marriages"] {
            let request = actix_test::TestRequest::post()
                .uri("/collections")
                .insert_header((CONTENT_TYPE, "application/json"))
                .set_payload(format!(r#"{{"name":"{name}"}}"#))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let request = actix_test::TestRequest::get().uri("/collections").to_request();
        let listed: Vec<Collection> =
            actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Births", "Marriages"]);
    }
}
