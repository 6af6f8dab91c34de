use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::experience::ExperienceRequest, errors::AppError, pagination::PageRequest, AppState};

fn page_request(query: &HashMap<String, String>) -> PageRequest {
    PageRequest::from_query(
        query.get("limit").map(String::as_str),
        query.get("offset").map(String::as_str),
    )
}

#[instrument(skip(state, data))]
pub async fn create_experience(
    state: web::Data<AppState>,
    data: web::Json<ExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler
        .create_experience(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(experience))
}

#[instrument(skip(state, query))]
pub async fn list_experiences(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler
        .list_experiences(page_request(&query))
        .await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(state, query))]
pub async fn list_deleted_experiences(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler
        .list_deleted_experiences(page_request(&query))
        .await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(state))]
pub async fn get_experience(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler.get_experience(&experience_id).await?;
    Ok(HttpResponse::Ok().json(experience))
}

#[instrument(skip(state, data))]
pub async fn update_experience(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state.experience_handler
        .update_experience(&experience_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state, query))]
pub async fn delete_experience(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let hard_delete = query.get("hard_delete").is_some_and(|v| v == "true");

    let response = state.experience_handler
        .delete_experience(&experience_id, hard_delete)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn restore_experience(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.experience_handler.restore_experience(&experience_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
