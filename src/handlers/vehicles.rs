use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::repository::Repository;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::State,
    response::Json,
};
use model::entities::vehicle::{self, Manufacturer, VehicleClass};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Request body for creating a new vehicle
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateVehicleRequest {
    /// Vehicle ID, chosen by the caller
    pub id: i32,
    /// Vehicle name (must be unique)
    pub name: String,
    pub model: String,
    pub vehicle_class: VehicleClass,
    pub manufacturer: Manufacturer,
    pub length: i32,
    pub passengers: i32,
    /// Stored but never returned
    pub image_url: Option<String>,
    /// Character flying the vehicle; not checked against existing characters
    pub pilot_id: Option<i32>,
}

/// Request body for replacing a vehicle
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateVehicleRequest {
    pub name: String,
    pub model: String,
    pub vehicle_class: VehicleClass,
    pub manufacturer: Manufacturer,
    pub length: i32,
    pub passengers: i32,
    /// Overwritten when the key is present, `null` clears it; left alone when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    /// Overwritten when the key is present, `null` clears it; left alone when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<i32>)]
    pub pilot_id: Option<Option<i32>>,
}

/// Vehicle response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VehicleResponse {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: VehicleClass,
    pub manufacturer: Manufacturer,
    pub length: i32,
    pub passengers: i32,
    pub pilot_id: Option<i32>,
}

impl From<vehicle::Model> for VehicleResponse {
    fn from(model: vehicle::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model_name,
            vehicle_class: model.vehicle_class,
            manufacturer: model.manufacturer,
            length: model.length,
            passengers: model.passengers,
            pilot_id: model.pilot_id,
        }
    }
}

impl CreateVehicleRequest {
    fn into_active_model(self) -> vehicle::ActiveModel {
        vehicle::ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            model_name: Set(self.model),
            vehicle_class: Set(self.vehicle_class),
            manufacturer: Set(self.manufacturer),
            length: Set(self.length),
            passengers: Set(self.passengers),
            image_url: Set(self.image_url),
            pilot_id: Set(self.pilot_id),
        }
    }
}

impl UpdateVehicleRequest {
    fn apply_to(self, vehicle: &mut vehicle::ActiveModel) {
        vehicle.name = Set(self.name);
        vehicle.model_name = Set(self.model);
        vehicle.vehicle_class = Set(self.vehicle_class);
        vehicle.manufacturer = Set(self.manufacturer);
        vehicle.length = Set(self.length);
        vehicle.passengers = Set(self.passengers);
        if let Some(image_url) = self.image_url {
            vehicle.image_url = Set(image_url);
        }
        if let Some(pilot_id) = self.pilot_id {
            vehicle.pilot_id = Set(pilot_id);
        }
    }
}

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    responses(
        (status = 200, description = "Vehicles retrieved successfully", body = Vec<VehicleResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    trace!("Entering get_vehicles function");

    let vehicles = Repository::<vehicle::Entity, _>::new(&state.db)
        .list_all()
        .await?;

    info!("Successfully retrieved {} vehicles", vehicles.len());
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// Get a specific vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle retrieved successfully", body = VehicleResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicle(
    PathParam(vehicle_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<VehicleResponse>, ApiError> {
    debug!("Fetching vehicle with ID: {}", vehicle_id);

    match Repository::<vehicle::Entity, _>::new(&state.db)
        .get_by_id(vehicle_id)
        .await?
    {
        Some(vehicle) => Ok(Json(VehicleResponse::from(vehicle))),
        None => {
            warn!("Vehicle with ID {} not found", vehicle_id);
            Err(ApiError::not_found("Vehicle", vehicle_id))
        }
    }
}

/// Create a new vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle created successfully", body = VehicleResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Vehicle ID or name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateVehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    debug!("Creating vehicle {} with ID {}", request.name, request.id);

    let vehicle = Repository::<vehicle::Entity, _>::new(&state.db)
        .create(request.into_active_model())
        .await?;

    info!("Vehicle created successfully with ID: {}, name: {}", vehicle.id, vehicle.name);
    Ok(Json(VehicleResponse::from(vehicle)))
}

/// Replace a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated successfully", body = VehicleResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 409, description = "Vehicle name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_vehicle(
    PathParam(vehicle_id): PathParam<i32>,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    trace!("Entering update_vehicle function for vehicle_id: {}", vehicle_id);
    let vehicles = Repository::<vehicle::Entity, _>::new(&state.db);

    let existing = match vehicles.get_by_id(vehicle_id).await? {
        Some(vehicle) => vehicle,
        None => {
            warn!("Vehicle with ID {} not found for update", vehicle_id);
            return Err(ApiError::not_found("Vehicle", vehicle_id));
        }
    };

    let mut vehicle_active: vehicle::ActiveModel = existing.into();
    request.apply_to(&mut vehicle_active);

    let updated = vehicles.update(vehicle_active).await?;
    info!("Vehicle with ID {} updated successfully", vehicle_id);
    Ok(Json(VehicleResponse::from(updated)))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle deleted successfully", body = MessageResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_vehicle(
    PathParam(vehicle_id): PathParam<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    debug!("Attempting to delete vehicle with ID: {}", vehicle_id);

    let delete_result = Repository::<vehicle::Entity, _>::new(&state.db)
        .delete(vehicle_id)
        .await?;

    if delete_result.rows_affected == 0 {
        warn!("Vehicle with ID {} not found for deletion (no rows affected)", vehicle_id);
        return Err(ApiError::not_found("Vehicle", vehicle_id));
    }

    info!("Vehicle with ID {} deleted successfully", vehicle_id);
    Ok(Json(ApiResponse {
        data: format!("Vehicle {} deleted", vehicle_id),
        message: "Vehicle deleted successfully".to_string(),
        success: true,
    }))
}
