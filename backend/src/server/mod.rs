//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use actix_web::http::header;
use actix_web::{App, HttpResponse, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::inbound::http::responders::fallback_not_found;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{categories, collections};

/// Redirect the index to the Swagger documentation.
async fn get_index(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, format!("{}/swagger/", state.base_path)))
        .finish()
}

/// Register all routes, the Swagger UI mount, and the fallback 404 service.
///
/// Split out from [`run`] so tests can assemble the full app in memory.
pub fn configure(cfg: &mut web::ServiceConfig, state: HttpState) {
    let base_path = state.base_path.clone();
    cfg.app_data(web::Data::new(state))
        .service(
            web::scope(&base_path)
                .route("/", web::get().to(get_index))
                .route("/index.html", web::get().to(get_index))
                .service(categories::get_categories)
                .service(categories::post_category)
                .service(categories::get_category)
                .service(categories::patch_category)
                .service(categories::delete_category)
                .service(collections::get_collections)
                .service(collections::post_collection)
                .service(collections::get_collection)
                .service(collections::patch_collection)
                .service(collections::delete_collection)
                .service(
                    SwaggerUi::new("/swagger/{_:.*}")
                        .url("/api-doc/openapi.json", ApiDoc::openapi()),
                ),
        )
        .default_service(web::route().to(fallback_not_found));
}

/// Bind and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig, state: HttpState) -> std::io::Result<()> {
    let bind_addr = config.bind_addr();
    HttpServer::new(move || App::new().configure(|cfg| configure(cfg, state.clone())))
        .bind(bind_addr)?
        .run()
        .await
}
