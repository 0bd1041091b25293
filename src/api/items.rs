//! Item handlers
//!
//! Update and delete look the item up first so that a missing id is reported
//! as 404 without touching storage.

use crate::api::dto::{CreateItemDto, ItemDto, ListItemsQuery, UpdateItemDto};
use crate::api::AppState;
use crate::domain::{CatalogError, Item, ItemId, Result};
use crate::log_item_mutation;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

fn parse_id(raw: &str) -> Result<ItemId> {
    raw.parse()
        .map_err(|e: String| CatalogError::Validation(format!("Invalid item id: {e}")))
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| CatalogError::Validation(rejection.body_text()))
}

async fn find_existing(state: &AppState, id: &ItemId) -> Result<Item> {
    state
        .repository
        .get_item(id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Item {id} not found")))
}

/// `GET /items?nameToMatch=`
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemDto>>> {
    let items = state.repository.get_items().await?;

    // Blank means unfiltered; otherwise the raw value is matched, spaces included.
    // `to_lowercase` folds full Unicode case, not just ASCII.
    let needle = query
        .name_to_match
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase);

    let dtos: Vec<ItemDto> = items
        .iter()
        .filter(|item| match &needle {
            Some(n) => item.name.to_lowercase().contains(n),
            None => true,
        })
        .map(Item::as_dto)
        .collect();

    tracing::debug!(count = dtos.len(), filtered = needle.is_some(), "Listed items");
    Ok(Json(dtos))
}

/// `GET /items/{id}`
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemDto>> {
    let id = parse_id(&id)?;
    let item = find_existing(&state, &id).await?;
    Ok(Json(item.as_dto()))
}

/// `POST /items`
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let input = json_body(payload)?;
    input.validate()?;

    let item = Item::new(ItemId::generate(), input.name, input.description, input.price);
    state.repository.create_item(&item).await?;
    log_item_mutation!("create", &item.id);

    let location = format!("/items/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item.as_dto()),
    ))
}

/// `PUT /items/{id}`
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateItemDto>, JsonRejection>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let input = json_body(payload)?;
    input.validate()?;

    let mut item = find_existing(&state, &id).await?;
    item.name = input.name;
    item.price = input.price;

    state.repository.update_item(&item).await?;
    log_item_mutation!("update", &id);

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    find_existing(&state, &id).await?;

    state.repository.delete_item(&id).await?;
    log_item_mutation!("delete", &id);

    Ok(StatusCode::NO_CONTENT)
}
