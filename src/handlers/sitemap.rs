use axum::response::Json;
use tracing::{debug, instrument};
use utoipa::{openapi::PathItemType, OpenApi};

use crate::schemas::{ApiDoc, RouteEntry, SitemapResponse};

fn method_name(method: &PathItemType) -> &'static str {
    match method {
        PathItemType::Get => "GET",
        PathItemType::Post => "POST",
        PathItemType::Put => "PUT",
        PathItemType::Delete => "DELETE",
        PathItemType::Options => "OPTIONS",
        PathItemType::Head => "HEAD",
        PathItemType::Patch => "PATCH",
        PathItemType::Trace => "TRACE",
        PathItemType::Connect => "CONNECT",
    }
}

/// Lists every documented route.
///
/// Built from the OpenAPI path table, so a handler shows up here as soon as
/// it is registered in [`ApiDoc`].
pub fn collect_routes() -> Vec<RouteEntry> {
    let openapi = ApiDoc::openapi();
    let mut routes = Vec::new();

    for (path, item) in openapi.paths.paths.iter() {
        for method in item.operations.keys() {
            routes.push(RouteEntry {
                method: method_name(method).to_string(),
                path: path.clone(),
            });
        }
    }

    routes
}

/// Machine-readable listing of all routes
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Route listing", body = SitemapResponse)
    )
)]
#[instrument]
pub async fn sitemap() -> Json<SitemapResponse> {
    let routes = collect_routes();
    debug!("Serving sitemap with {} routes", routes.len());
    Json(SitemapResponse { routes })
}
