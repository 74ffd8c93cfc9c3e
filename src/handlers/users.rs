use crate::error::ApiError;
use crate::repository::Repository;
use crate::schemas::{AppState, ErrorResponse};
use axum::{extract::State, response::Json};
use model::entities::user;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// User response model. The password column is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    trace!("Entering get_users function");
    debug!("Fetching all users from database");

    let users = Repository::<user::Entity, _>::new(&state.db)
        .list_all()
        .await?;

    info!("Successfully retrieved {} users", users.len());
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
