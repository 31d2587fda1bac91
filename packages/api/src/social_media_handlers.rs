// ABOUTME: HTTP request handlers for footer/contact social links
// ABOUTME: Every mutation reads the whole collection, changes it, and writes it back

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use atelier_core::{
    generate_social_link_id, next_order, now_millis, reordered, validate_social_link,
    visible_links, ReorderDirection, SocialMediaLink, SocialPlatform,
};
use atelier_storage::StorageAdapter;

use crate::auth::{is_admin, AdminUser};
use crate::error::{ApiResult, AppError};
use crate::response::ApiResponse;
use crate::AppState;

async fn load_links(storage: &StorageAdapter, context: &'static str) -> ApiResult<Vec<SocialMediaLink>> {
    storage
        .social_media
        .get()
        .await
        .map_err(AppError::storage(context))
}

async fn save_links(
    storage: &StorageAdapter,
    links: &[SocialMediaLink],
    context: &'static str,
) -> ApiResult<()> {
    storage
        .social_media
        .update(links)
        .await
        .map_err(AppError::storage(context))
}

fn parse_platform(platform: &str) -> ApiResult<SocialPlatform> {
    platform
        .parse()
        .map_err(|_| AppError::bad_request("Unknown platform"))
}

/// GET /api/social-media
pub async fn list_social_links(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<ApiResponse<Value>> {
    let storage = state.storage()?;
    let links = load_links(&storage, "Failed to fetch social media links").await?;
    let visible = visible_links(links, is_admin(&headers));

    Ok(ApiResponse::success(json!({ "data": visible }))
        .with_message("Social media links retrieved successfully"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSocialLinkRequest {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub enabled: Option<bool>,
}

/// POST /api/social-media
pub async fn create_social_link(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateSocialLinkRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(request) = payload?;

    let validation = validate_social_link(
        request.name.as_deref(),
        request.platform.as_deref(),
        request.url.as_deref(),
    );
    if !validation.is_valid {
        return Err(AppError::Validation(validation.errors));
    }

    let storage = state.storage()?;
    let mut links = load_links(&storage, "Failed to add social media link").await?;

    let now = now_millis();
    let link = SocialMediaLink {
        id: generate_social_link_id(now),
        name: request.name.unwrap_or_default().trim().to_string(),
        platform: parse_platform(request.platform.as_deref().unwrap_or_default())?,
        url: request.url.unwrap_or_default(),
        icon: request.icon.filter(|icon| !icon.is_empty()),
        enabled: request.enabled.unwrap_or(true),
        order: next_order(&links),
        created_at: now,
        updated_at: now,
    };

    links.push(link.clone());
    save_links(&storage, &links, "Failed to add social media link").await?;

    info!(link_id = %link.id, platform = %link.platform, "Social media link added");
    Ok(ApiResponse::success(json!({ "data": link }))
        .with_message("Social media link added successfully"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSocialLinkRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub enabled: Option<bool>,
    pub order: Option<f64>,
}

/// PATCH /api/social-media
pub async fn update_social_link(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateSocialLinkRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(request) = payload?;

    let id = request
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("Social media ID is required"))?;

    if let Some(url) = request.url.as_deref() {
        if url::Url::parse(url).is_err() {
            return Err(AppError::bad_request("Invalid URL format"));
        }
    }
    let platform = request.platform.as_deref().map(parse_platform).transpose()?;

    let storage = state.storage()?;
    let mut links = load_links(&storage, "Failed to update social media link").await?;

    let link = links
        .iter_mut()
        .find(|link| link.id == id)
        .ok_or_else(|| AppError::not_found("Social media link not found"))?;

    if let Some(name) = request.name {
        link.name = name;
    }
    if let Some(platform) = platform {
        link.platform = platform;
    }
    if let Some(url) = request.url {
        link.url = url;
    }
    if let Some(icon) = request.icon {
        link.icon = Some(icon).filter(|icon| !icon.is_empty());
    }
    if let Some(enabled) = request.enabled {
        link.enabled = enabled;
    }
    if let Some(order) = request.order {
        link.order = order;
    }
    link.updated_at = now_millis();
    let updated = link.clone();

    save_links(&storage, &links, "Failed to update social media link").await?;

    info!(link_id = %updated.id, "Social media link updated");
    Ok(ApiResponse::success(json!({ "data": updated }))
        .with_message("Social media link updated successfully"))
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub id: String,
    pub direction: ReorderDirection,
}

/// POST /api/social-media/reorder
pub async fn reorder_social_link(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(request) = payload?;

    let storage = state.storage()?;
    let mut links = load_links(&storage, "Failed to reorder social media link").await?;

    let link = links
        .iter_mut()
        .find(|link| link.id == request.id)
        .ok_or_else(|| AppError::not_found("Social media link not found"))?;

    link.order = reordered(link.order, request.direction);
    link.updated_at = now_millis();
    let moved = link.clone();

    save_links(&storage, &links, "Failed to reorder social media link").await?;

    info!(link_id = %moved.id, order = moved.order, "Social media link moved");
    Ok(ApiResponse::success(json!({ "data": moved }))
        .with_message("Social media link reordered successfully"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// DELETE /api/social-media?id=
pub async fn delete_social_link(
    _admin: AdminUser,
    State(state): State<AppState>,
    params: Result<Query<DeleteParams>, QueryRejection>,
) -> ApiResult<ApiResponse> {
    let Query(params) = params?;

    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("Social media ID is required"))?;

    let storage = state.storage()?;
    let links = load_links(&storage, "Failed to delete social media link").await?;
    let before = links.len();

    let remaining: Vec<SocialMediaLink> = links.into_iter().filter(|link| link.id != id).collect();
    if remaining.len() == before {
        return Err(AppError::not_found("Social media link not found"));
    }

    save_links(&storage, &remaining, "Failed to delete social media link").await?;

    info!(link_id = %id, "Social media link deleted");
    Ok(ApiResponse::message("Social media link deleted successfully"))
}
