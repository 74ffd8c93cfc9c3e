use crate::handlers::{
    characters::{
        create_character, delete_character, get_character, get_characters, update_character,
    },
    favorites::{
        add_favorite, delete_favorite_character, delete_favorite_planet, delete_favorite_vehicle,
        get_favorites,
    },
    health::health_check,
    planets::{create_planet, delete_planet, get_planet, get_planets, update_planet},
    sitemap::sitemap,
    users::get_users,
    vehicles::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles, update_vehicle},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Route listing and health check
        .route("/", get(sitemap))
        .route("/health", get(health_check))
        // Users and their favorites
        .route("/users", get(get_users))
        .route("/users/:user_id/favorites", get(get_favorites))
        .route("/favorites/user/:user_id", post(add_favorite))
        .route(
            "/favorites/users/:user_id/planets/:planet_id",
            delete(delete_favorite_planet),
        )
        .route(
            "/favorites/users/:user_id/characters/:character_id",
            delete(delete_favorite_character),
        )
        .route(
            "/favorites/users/:user_id/vehicles/:vehicle_id",
            delete(delete_favorite_vehicle),
        )
        // Character CRUD routes
        .route("/characters", get(get_characters).post(create_character))
        .route(
            "/characters/:character_id",
            get(get_character).put(update_character).delete(delete_character),
        )
        // Planet CRUD routes
        .route("/planets", get(get_planets).post(create_planet))
        .route(
            "/planets/:planet_id",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
        // Vehicle CRUD routes
        .route("/vehicles", get(get_vehicles).post(create_vehicle))
        .route(
            "/vehicles/:vehicle_id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
