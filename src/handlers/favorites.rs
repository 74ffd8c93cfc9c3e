use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::repository::Repository;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::State,
    response::Json,
};
use model::entities::{favorite, user};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for bookmarking one or more targets.
///
/// Every key is optional and the ids are stored as given, without checking
/// that the referenced rows exist.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

/// Favorite response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(model: favorite::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
            planet_id: model.planet_id,
            vehicle_id: model.vehicle_id,
        }
    }
}

/// Kind of row a favorite points at
#[derive(Debug, Clone, Copy)]
enum FavoriteTarget {
    Planet,
    Character,
    Vehicle,
}

impl FavoriteTarget {
    fn column(self) -> favorite::Column {
        match self {
            FavoriteTarget::Planet => favorite::Column::PlanetId,
            FavoriteTarget::Character => favorite::Column::CharacterId,
            FavoriteTarget::Vehicle => favorite::Column::VehicleId,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FavoriteTarget::Planet => "planet",
            FavoriteTarget::Character => "character",
            FavoriteTarget::Vehicle => "vehicle",
        }
    }
}

async fn find_user(db: &DatabaseConnection, user_id: i32) -> Result<user::Model, ApiError> {
    match Repository::<user::Entity, _>::new(db).get_by_id(user_id).await? {
        Some(user) => Ok(user),
        None => {
            warn!("User with ID {} not found", user_id);
            Err(ApiError::not_found("User", user_id))
        }
    }
}

async fn delete_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
    target_id: i32,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let user = find_user(db, user_id).await?;
    let favorites = Repository::<favorite::Entity, _>::new(db);

    let condition = Condition::all()
        .add(favorite::Column::UserId.eq(user.id))
        .add(target.column().eq(target_id));

    let entry = match favorites.find_one_where(condition).await? {
        Some(entry) => entry,
        None => {
            warn!(
                "Favorite {} {} not found for user {}",
                target.label(),
                target_id,
                user_id
            );
            return Err(ApiError::NotFound(format!(
                "Favorite {} {} not found for user {}",
                target.label(),
                target_id,
                user_id
            )));
        }
    };

    favorites.delete(entry.id).await?;
    info!(
        "Deleted favorite {} (user {}, {} {})",
        entry.id,
        user_id,
        target.label(),
        target_id
    );

    Ok(Json(ApiResponse {
        data: format!("Favorite {} deleted", entry.id),
        message: format!("Favorite {} deleted successfully", target.label()),
        success: true,
    }))
}

/// Get all favorites of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = Vec<FavoriteResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_favorites(
    PathParam(user_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    debug!("Fetching favorites for user ID: {}", user_id);
    let user = find_user(&state.db, user_id).await?;

    let favorites = Repository::<favorite::Entity, _>::new(&state.db)
        .find_all_where(favorite::Column::UserId.eq(user.id))
        .await?;

    info!("Retrieved {} favorites for user {}", favorites.len(), user_id);
    Ok(Json(favorites.into_iter().map(FavoriteResponse::from).collect()))
}

/// Add a favorite for a user
#[utoipa::path(
    post,
    path = "/favorites/user/{user_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Favorite added successfully", body = FavoriteResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_favorite(
    PathParam(user_id): PathParam<i32>,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddFavoriteRequest>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let user = find_user(&state.db, user_id).await?;

    let new_favorite = favorite::ActiveModel {
        user_id: Set(user.id),
        character_id: Set(request.character_id),
        planet_id: Set(request.planet_id),
        vehicle_id: Set(request.vehicle_id),
        ..Default::default()
    };

    let favorite = Repository::<favorite::Entity, _>::new(&state.db)
        .create(new_favorite)
        .await?;

    info!("Favorite {} added for user {}", favorite.id, user_id);
    Ok(Json(FavoriteResponse::from(favorite)))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/users/{user_id}/planets/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Favorite planet deleted successfully", body = MessageResponse),
        (status = 404, description = "User or favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_favorite_planet(
    PathParam((user_id, planet_id)): PathParam<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    delete_favorite(&state.db, user_id, FavoriteTarget::Planet, planet_id).await
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/users/{user_id}/characters/{character_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    responses(
        (status = 200, description = "Favorite character deleted successfully", body = MessageResponse),
        (status = 404, description = "User or favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_favorite_character(
    PathParam((user_id, character_id)): PathParam<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    delete_favorite(&state.db, user_id, FavoriteTarget::Character, character_id).await
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/users/{user_id}/vehicles/{vehicle_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Favorite vehicle deleted successfully", body = MessageResponse),
        (status = 404, description = "User or favorite not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_favorite_vehicle(
    PathParam((user_id, vehicle_id)): PathParam<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    delete_favorite(&state.db, user_id, FavoriteTarget::Vehicle, vehicle_id).await
}
