use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::repository::Repository;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::State,
    response::Json,
};
use model::entities::planet::{self, Climate, Terrain};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Request body for creating a new planet
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePlanetRequest {
    /// Planet ID, chosen by the caller
    pub id: i32,
    /// Planet name (must be unique)
    pub name: String,
    pub terrain: Terrain,
    pub climate: Climate,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    /// Stored but never returned
    pub image_url: Option<String>,
}

/// Request body for replacing a planet. Every field except `image_url` is required.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePlanetRequest {
    /// Planet name (must be unique)
    pub name: String,
    pub terrain: Terrain,
    pub climate: Climate,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
    /// Overwritten when the key is present, `null` clears it; left alone when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

/// Planet response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub terrain: Terrain,
    pub climate: Climate,
    pub population: i64,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub diameter: i32,
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            terrain: model.terrain,
            climate: model.climate,
            population: model.population,
            orbital_period: model.orbital_period,
            rotation_period: model.rotation_period,
            diameter: model.diameter,
        }
    }
}

impl CreatePlanetRequest {
    fn into_active_model(self) -> planet::ActiveModel {
        planet::ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            terrain: Set(self.terrain),
            climate: Set(self.climate),
            population: Set(self.population),
            orbital_period: Set(self.orbital_period),
            rotation_period: Set(self.rotation_period),
            diameter: Set(self.diameter),
            image_url: Set(self.image_url),
        }
    }
}

impl UpdatePlanetRequest {
    fn apply_to(self, planet: &mut planet::ActiveModel) {
        planet.name = Set(self.name);
        planet.terrain = Set(self.terrain);
        planet.climate = Set(self.climate);
        planet.population = Set(self.population);
        planet.orbital_period = Set(self.orbital_period);
        planet.rotation_period = Set(self.rotation_period);
        planet.diameter = Set(self.diameter);
        if let Some(image_url) = self.image_url {
            planet.image_url = Set(image_url);
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<PlanetResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    trace!("Entering get_planets function");

    let planets = Repository::<planet::Entity, _>::new(&state.db)
        .list_all()
        .await?;

    info!("Successfully retrieved {} planets", planets.len());
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planet(
    PathParam(planet_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, ApiError> {
    debug!("Fetching planet with ID: {}", planet_id);

    match Repository::<planet::Entity, _>::new(&state.db)
        .get_by_id(planet_id)
        .await?
    {
        Some(planet) => {
            debug!("Found planet: {}", planet.name);
            Ok(Json(PlanetResponse::from(planet)))
        }
        None => {
            warn!("Planet with ID {} not found", planet_id);
            Err(ApiError::not_found("Planet", planet_id))
        }
    }
}

/// Create a new planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = "planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 200, description = "Planet created successfully", body = PlanetResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Planet ID or name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePlanetRequest>,
) -> Result<Json<PlanetResponse>, ApiError> {
    debug!("Creating planet {} with ID {}", request.name, request.id);

    let planet = Repository::<planet::Entity, _>::new(&state.db)
        .create(request.into_active_model())
        .await?;

    info!("Planet created successfully with ID: {}, name: {}", planet.id, planet.name);
    Ok(Json(PlanetResponse::from(planet)))
}

/// Replace a planet
#[utoipa::path(
    put,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    request_body = UpdatePlanetRequest,
    responses(
        (status = 200, description = "Planet updated successfully", body = PlanetResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 409, description = "Planet name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_planet(
    PathParam(planet_id): PathParam<i32>,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdatePlanetRequest>,
) -> Result<Json<PlanetResponse>, ApiError> {
    trace!("Entering update_planet function for planet_id: {}", planet_id);
    let planets = Repository::<planet::Entity, _>::new(&state.db);

    let existing = match planets.get_by_id(planet_id).await? {
        Some(planet) => planet,
        None => {
            warn!("Planet with ID {} not found for update", planet_id);
            return Err(ApiError::not_found("Planet", planet_id));
        }
    };

    let mut planet_active: planet::ActiveModel = existing.into();
    request.apply_to(&mut planet_active);

    let updated = planets.update(planet_active).await?;
    info!("Planet with ID {} updated successfully", planet_id);
    Ok(Json(PlanetResponse::from(updated)))
}

/// Delete a planet
///
/// Characters and favorites that point at the planet keep their reference.
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet deleted successfully", body = MessageResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_planet(
    PathParam(planet_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    debug!("Attempting to delete planet with ID: {}", planet_id);

    let delete_result = Repository::<planet::Entity, _>::new(&state.db)
        .delete(planet_id)
        .await?;

    if delete_result.rows_affected == 0 {
        warn!("Planet with ID {} not found for deletion (no rows affected)", planet_id);
        return Err(ApiError::not_found("Planet", planet_id));
    }

    info!("Planet with ID {} deleted successfully", planet_id);
    Ok(Json(ApiResponse {
        data: format!("Planet {} deleted", planet_id),
        message: "Planet deleted successfully".to_string(),
        success: true,
    }))
}
