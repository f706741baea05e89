//! JSON REST handlers for alcohol records.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use alcs_app::ports::AlcoholRepository;
use alcs_domain::alcohol::Alcohol;
use alcs_domain::error::{AlcsError, NotFoundError, ValidationError};
use alcs_domain::id::AlcoholId;

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

/// Request body for creating a record.
#[derive(Debug, Deserialize)]
pub struct CreateAlcoholRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Alcohol>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Alcohol>),
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
    Created(Json<Alcohol>),
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
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => (
                StatusCode::OK,
                Json(MessageBody::new("successfully deleted")),
            )
                .into_response(),
        }
    }
}

/// Unparseable ids cannot name an existing record, so they are reported as
/// not found rather than as a bad request.
fn parse_id(raw: &str) -> Result<AlcoholId, ApiError> {
    AlcoholId::from_str(raw).map_err(|_| {
        ApiError::from(AlcsError::from(NotFoundError {
            entity: "Alcohol",
            id: raw.to_string(),
        }))
    })
}

/// `GET /alcs`
#[tracing::instrument(skip_all)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    let alcohols = state.alcohol_service.list_alcohols().await?;
    tracing::debug!(count = alcohols.len(), "listed alcohols");
    Ok(ListResponse::Ok(Json(alcohols)))
}

/// `GET /alcs/{id}`
#[tracing::instrument(skip(state))]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    let alcohol_id = parse_id(&id)?;
    let alcohol = state.alcohol_service.get_alcohol(alcohol_id).await?;
    Ok(GetResponse::Ok(Json(alcohol)))
}

/// `POST /alcs`
#[tracing::instrument(skip_all)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateAlcoholRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        ApiError::from(AlcsError::from(ValidationError::MalformedBody(
            rejection.body_text(),
        )))
    })?;

    let new = Alcohol::builder()
        .name(req.name)
        .maybe_description(req.description)
        .price(req.price)
        .build()?;
    let created = state.alcohol_service.create_alcohol(new).await?;
    tracing::info!(id = %created.id, name = %created.name, "alcohol created");
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /alcs/{id}`
#[tracing::instrument(skip(state))]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: AlcoholRepository + Send + Sync + 'static,
{
    let alcohol_id = parse_id(&id)?;
    let deleted = state.alcohol_service.delete_alcohol(alcohol_id).await?;
    tracing::info!(id = %deleted.id, name = %deleted.name, "alcohol deleted");
    Ok(DeleteResponse::Deleted)
}
