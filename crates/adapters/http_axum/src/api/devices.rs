//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::{CreateDeviceInput, Device};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a device or replacing its `name` and `brand`.
#[derive(Deserialize)]
pub struct DeviceRequest {
    pub name: String,
    pub brand: String,
}

impl TryFrom<DeviceRequest> for CreateDeviceInput {
    type Error = DeviceHubError;

    fn try_from(req: DeviceRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(req.name, req.brand)?)
    }
}

/// Query string of the search endpoint. A missing `brand` searches for `""`.
#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub brand: String,
}

/// Possible responses from the list and search endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A path segment that is not valid UTF-8 is just another unparseable id.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<DeviceId, ApiError> {
    let Path(id) = path.map_err(|_| ApiError::InvalidId)?;
    DeviceId::from_str(&id).map_err(|_| ApiError::InvalidId)
}

/// Decode the body as JSON whatever `Content-Type` the client sent.
fn parse_body(body: &Bytes) -> Result<CreateDeviceInput, ApiError> {
    let Json(req) = Json::<DeviceRequest>::from_bytes(body)?;
    Ok(CreateDeviceInput::try_from(req)?)
}

/// `GET /v1/devices`
pub async fn list<R>(State(state): State<AppState<R>>) -> ListResponse
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await;
    ListResponse::Ok(Json(devices))
}

/// `GET /v1/devices/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(path)?;
    let device = state.device_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /v1/devices`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let input = parse_body(&body)?;
    let created = state.device_service.create_device(input).await;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /v1/devices/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(path)?;
    let input = parse_body(&body)?;
    let updated = state.device_service.update_device(device_id, input).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /v1/devices/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(path)?;
    state.device_service.delete_device(device_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /v1/devices/search?brand=X`
pub async fn search<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    let devices = state
        .device_service
        .search_devices_by_brand(&params.brand)
        .await;
    Ok(ListResponse::Ok(Json(devices)))
}
