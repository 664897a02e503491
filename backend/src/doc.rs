//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the category and collection endpoints plus the wire schemas,
//! and feeds the Swagger UI mounted at `/swagger/`.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Records catalogue API",
        description = "CRUD endpoints for record categories and collections."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::get_categories,
        crate::inbound::http::categories::post_category,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::patch_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::collections::get_collections,
        crate::inbound::http::collections::post_collection,
        crate::inbound::http::collections::get_collection,
        crate::inbound::http::collections::patch_collection,
        crate::inbound::http::collections::delete_collection,
    ),
    components(schemas(
        crate::domain::Category,
        crate::domain::CategoryIn,
        crate::domain::CategoryRef,
        crate::domain::Collection,
        crate::domain::CollectionIn,
        crate::domain::Error,
        crate::domain::ErrorCode,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/categories".to_owned()));
        assert!(paths.contains(&"/categories/{id}".to_owned()));
        assert!(paths.contains(&"/collections".to_owned()));
        assert!(paths.contains(&"/collections/{id}".to_owned()));
    }
}
