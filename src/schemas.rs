use crate::handlers::{
    characters::{CharacterResponse, CreateCharacterRequest, UpdateCharacterRequest},
    favorites::{AddFavoriteRequest, FavoriteResponse},
    planets::{CreatePlanetRequest, PlanetResponse, UpdatePlanetRequest},
    users::UserResponse,
    vehicles::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse},
};
use model::entities::{
    character::{EyeColor, Gender, HairColor},
    planet::{Climate, Terrain},
    vehicle::{Manufacturer, VehicleClass},
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool; every handler borrows it for the duration of the request
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(MessageResponse = ApiResponse<String>)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// One entry of the route listing served at `/`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteEntry {
    /// HTTP method in upper case, e.g. `GET`
    pub method: String,
    /// Path template, e.g. `/planets/{planet_id}`
    pub path: String,
}

/// Machine-readable listing of every documented route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SitemapResponse {
    pub routes: Vec<RouteEntry>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::sitemap::sitemap,
        crate::handlers::health::health_check,
        crate::handlers::users::get_users,
        crate::handlers::favorites::get_favorites,
        crate::handlers::favorites::add_favorite,
        crate::handlers::favorites::delete_favorite_planet,
        crate::handlers::favorites::delete_favorite_character,
        crate::handlers::favorites::delete_favorite_vehicle,
        crate::handlers::characters::get_characters,
        crate::handlers::characters::get_character,
        crate::handlers::characters::create_character,
        crate::handlers::characters::update_character,
        crate::handlers::characters::delete_character,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::planets::create_planet,
        crate::handlers::planets::update_planet,
        crate::handlers::planets::delete_planet,
        crate::handlers::vehicles::get_vehicles,
        crate::handlers::vehicles::get_vehicle,
        crate::handlers::vehicles::create_vehicle,
        crate::handlers::vehicles::update_vehicle,
        crate::handlers::vehicles::delete_vehicle,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            RouteEntry,
            SitemapResponse,
            UserResponse,
            FavoriteResponse,
            AddFavoriteRequest,
            CharacterResponse,
            CreateCharacterRequest,
            UpdateCharacterRequest,
            PlanetResponse,
            CreatePlanetRequest,
            UpdatePlanetRequest,
            VehicleResponse,
            CreateVehicleRequest,
            UpdateVehicleRequest,
            Terrain,
            Climate,
            Gender,
            HairColor,
            EyeColor,
            VehicleClass,
            Manufacturer,
        )
    ),
    tags(
        (name = "meta", description = "Route listing and health check"),
        (name = "users", description = "User listing"),
        (name = "favorites", description = "User bookmarks of planets, characters and vehicles"),
        (name = "characters", description = "Character CRUD endpoints"),
        (name = "planets", description = "Planet CRUD endpoints"),
        (name = "vehicles", description = "Vehicle CRUD endpoints"),
    ),
    info(
        title = "Holocron API",
        description = "CRUD API for Star Wars planets, characters, vehicles and user favorites",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
