use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::repository::Repository;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::State,
    response::Json,
};
use model::entities::character::{self, EyeColor, Gender, HairColor};
use sea_orm::Set;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Birth years are stored as text ("19BBY"); plain JSON numbers are accepted
/// and kept as their decimal string.
fn birth_year_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BirthYear {
        Text(String),
        Number(i64),
    }

    Ok(match BirthYear::deserialize(deserializer)? {
        BirthYear::Text(text) => text,
        BirthYear::Number(year) => year.to_string(),
    })
}

/// Request body for creating a new character
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCharacterRequest {
    /// Character ID, chosen by the caller
    pub id: i32,
    /// Character name (must be unique)
    pub name: String,
    pub gender: Gender,
    #[serde(deserialize_with = "birth_year_from_text_or_number")]
    pub birth_year: String,
    pub height: i32,
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
    /// Stored but never returned
    pub image_url: Option<String>,
    /// Home planet; not checked against existing planets
    pub planet_id: Option<i32>,
}

/// Request body for replacing a character.
///
/// All attributes are overwritten; an absent `planet_id` clears the home planet.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateCharacterRequest {
    pub name: String,
    pub gender: Gender,
    #[serde(deserialize_with = "birth_year_from_text_or_number")]
    pub birth_year: String,
    pub height: i32,
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
    /// Overwritten when the key is present, `null` clears it; left alone when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub planet_id: Option<i32>,
}

/// Character response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub birth_year: String,
    pub height: i32,
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
    pub planet_id: Option<i32>,
}

impl From<character::Model> for CharacterResponse {
    fn from(model: character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            birth_year: model.birth_year,
            height: model.height,
            hair_color: model.hair_color,
            eye_color: model.eye_color,
            planet_id: model.planet_id,
        }
    }
}

impl CreateCharacterRequest {
    fn into_active_model(self) -> character::ActiveModel {
        character::ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            gender: Set(self.gender),
            birth_year: Set(self.birth_year),
            height: Set(self.height),
            hair_color: Set(self.hair_color),
            eye_color: Set(self.eye_color),
            image_url: Set(self.image_url),
            planet_id: Set(self.planet_id),
        }
    }
}

impl UpdateCharacterRequest {
    fn apply_to(self, character: &mut character::ActiveModel) {
        character.name = Set(self.name);
        character.gender = Set(self.gender);
        character.birth_year = Set(self.birth_year);
        character.height = Set(self.height);
        character.hair_color = Set(self.hair_color);
        character.eye_color = Set(self.eye_color);
        character.planet_id = Set(self.planet_id);
        if let Some(image_url) = self.image_url {
            character.image_url = Set(image_url);
        }
    }
}

/// Get all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = "characters",
    responses(
        (status = 200, description = "Characters retrieved successfully", body = Vec<CharacterResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    trace!("Entering get_characters function");

    let characters = Repository::<character::Entity, _>::new(&state.db)
        .list_all()
        .await?;

    info!("Successfully retrieved {} characters", characters.len());
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

/// Get a specific character by ID
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = "characters",
    params(
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    responses(
        (status = 200, description = "Character retrieved successfully", body = CharacterResponse),
        (status = 404, description = "Character not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_character(
    PathParam(character_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<CharacterResponse>, ApiError> {
    debug!("Fetching character with ID: {}", character_id);

    match Repository::<character::Entity, _>::new(&state.db)
        .get_by_id(character_id)
        .await?
    {
        Some(character) => Ok(Json(CharacterResponse::from(character))),
        None => {
            warn!("Character with ID {} not found", character_id);
            Err(ApiError::not_found("Character", character_id))
        }
    }
}

/// Create a new character
#[utoipa::path(
    post,
    path = "/characters",
    tag = "characters",
    request_body = CreateCharacterRequest,
    responses(
        (status = 200, description = "Character created successfully", body = CharacterResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Character ID or name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_character(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    debug!("Creating character {} with ID {}", request.name, request.id);

    let character = Repository::<character::Entity, _>::new(&state.db)
        .create(request.into_active_model())
        .await?;

    info!(
        "Character created successfully with ID: {}, name: {}",
        character.id, character.name
    );
    Ok(Json(CharacterResponse::from(character)))
}

/// Replace a character
#[utoipa::path(
    put,
    path = "/characters/{character_id}",
    tag = "characters",
    params(
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    request_body = UpdateCharacterRequest,
    responses(
        (status = 200, description = "Character updated successfully", body = CharacterResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Character not found", body = ErrorResponse),
        (status = 409, description = "Character name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_character(
    PathParam(character_id): PathParam<i32>,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    trace!("Entering update_character function for character_id: {}", character_id);
    let characters = Repository::<character::Entity, _>::new(&state.db);

    let existing = match characters.get_by_id(character_id).await? {
        Some(character) => character,
        None => {
            warn!("Character with ID {} not found for update", character_id);
            return Err(ApiError::not_found("Character", character_id));
        }
    };

    let mut character_active: character::ActiveModel = existing.into();
    request.apply_to(&mut character_active);

    let updated = characters.update(character_active).await?;
    info!("Character with ID {} updated successfully", character_id);
    Ok(Json(CharacterResponse::from(updated)))
}

/// Delete a character
///
/// Vehicles piloted by the character and favorites pointing at it keep their reference.
#[utoipa::path(
    delete,
    path = "/characters/{character_id}",
    tag = "characters",
    params(
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    responses(
        (status = 200, description = "Character deleted successfully", body = MessageResponse),
        (status = 404, description = "Character not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_character(
    PathParam(character_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    debug!("Attempting to delete character with ID: {}", character_id);

    let delete_result = Repository::<character::Entity, _>::new(&state.db)
        .delete(character_id)
        .await?;

    if delete_result.rows_affected == 0 {
        warn!(
            "Character with ID {} not found for deletion (no rows affected)",
            character_id
        );
        return Err(ApiError::not_found("Character", character_id));
    }

    info!("Character with ID {} deleted successfully", character_id);
    Ok(Json(ApiResponse {
        data: format!("Character {} deleted", character_id),
        message: "Character deleted successfully".to_string(),
        success: true,
    }))
}
