//! Resource CRUD handlers: create, all, one, update, delete. One handler set
//! serves all five resources; the path segment picks the descriptor.

use crate::error::AppError;
use crate::extract::AuthUser;
use crate::form::ResourceForm;
use crate::resource::Resource;
use crate::response;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

fn by_slug(segment: &str) -> Result<&'static Resource, AppError> {
    Resource::by_slug(segment).ok_or_else(|| AppError::NotFound("Invalid parameter".into()))
}

fn by_plural(segment: &str) -> Result<&'static Resource, AppError> {
    Resource::by_plural(segment).ok_or_else(|| AppError::NotFound("Invalid parameter".into()))
}

/// Ids must be positive integers; anything else is treated as an unknown
/// route parameter.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound("Invalid parameter".into())),
    }
}

/// Bind and validate the request body. Unparseable bodies get
/// "Invalid request"; field-level problems get their own messages.
fn bind_form(
    body: Result<Json<Value>, JsonRejection>,
    resource: &Resource,
) -> Result<ResourceForm, AppError> {
    let Json(value) = body.map_err(|_| AppError::NotAcceptable("Invalid request".into()))?;
    let form = ResourceForm::from_body(value)?;
    form.validate(resource)?;
    Ok(form)
}

fn db_failure(resource: &Resource, action: &str, err: &sqlx::Error) -> AppError {
    tracing::error!(resource = resource.slug, error = %err, "database failure");
    AppError::NotAcceptable(format!("{} could not be {}", resource.label, action))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(segment): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let resource = by_slug(&segment)?;
    let form = bind_form(body, resource)?;
    let id = CrudService::create(&state.pool, resource, user_id, &form)
        .await
        .map_err(|e| db_failure(resource, "created", &e))?;
    Ok(response::created(format!("{} created", resource.label), id))
}

pub async fn all(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(segment): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = by_plural(&segment)?;
    let rows = CrudService::all(&state.pool, resource, user_id)
        .await
        .map_err(|e| {
            tracing::error!(resource = resource.slug, error = %e, "database failure");
            AppError::NotAcceptable(format!("Could not get {}", resource.plural))
        })?;
    Ok(response::results(rows))
}

pub async fn one(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((segment, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = by_slug(&segment)?;
    let id = parse_id(&id)?;
    let not_found = || AppError::NotFound(format!("{} not found", resource.label));
    let row = CrudService::one(&state.pool, resource, user_id, id)
        .await
        .map_err(|e| {
            tracing::error!(resource = resource.slug, error = %e, "database failure");
            not_found()
        })?
        .ok_or_else(not_found)?;
    Ok(response::data(row))
}

pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((segment, id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let resource = by_slug(&segment)?;
    let id = parse_id(&id)?;
    let form = bind_form(body, resource)?;
    let affected = CrudService::update(&state.pool, resource, user_id, id, &form)
        .await
        .map_err(|e| db_failure(resource, "updated", &e))?;
    if affected == 0 {
        return Err(AppError::NotAcceptable(format!(
            "{} could not be updated",
            resource.label
        )));
    }
    Ok(response::message(format!("{} updated", resource.label)))
}

pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((segment, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = by_slug(&segment)?;
    let id = parse_id(&id)?;
    let affected = CrudService::delete(&state.pool, resource, user_id, id)
        .await
        .map_err(|e| db_failure(resource, "deleted", &e))?;
    if affected == 0 {
        return Err(AppError::NotAcceptable(format!(
            "{} could not be deleted",
            resource.label
        )));
    }
    Ok(response::message(format!("{} deleted", resource.label)))
}
