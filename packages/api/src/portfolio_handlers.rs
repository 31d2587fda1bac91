// ABOUTME: HTTP request handlers for admin-created portfolio entries
// ABOUTME: Admin listing and creation, plus public lookup by slug

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Datelike;
use serde_json::{json, Value};
use tracing::info;

use atelier_core::{
    generate_portfolio_id, now_millis, portfolio_slug, validate_portfolio_data, CustomPortfolio,
    PortfolioFormData, Project,
};

use crate::auth::AdminUser;
use crate::error::{ApiResult, AppError};
use crate::response::ApiResponse;
use crate::AppState;

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turn a validated form into the stored record
fn build_portfolio(form: PortfolioFormData) -> ApiResult<CustomPortfolio> {
    let now = now_millis();
    let title = form.title.unwrap_or_default().trim().to_string();

    let category = form
        .category
        .unwrap_or_default()
        .parse()
        .map_err(|e| AppError::bad_request(format!("{}", e)))?;
    let style = form
        .style
        .unwrap_or_default()
        .parse()
        .map_err(|e| AppError::bad_request(format!("{}", e)))?;

    let year = form
        .year
        .map(|year| year.to_string())
        .filter(|year| !year.is_empty())
        .unwrap_or_else(|| now.year().to_string());

    Ok(CustomPortfolio {
        id: generate_portfolio_id(now),
        slug: portfolio_slug(&title, now),
        title,
        description: form.description.unwrap_or_default().trim().to_string(),
        category,
        style,
        location: form.location.unwrap_or_default().trim().to_string(),
        area_size: non_empty(form.area),
        year,
        image_url: non_empty(form.image_url),
        materials: form.materials.unwrap_or_default(),
        challenges: form.challenges.unwrap_or_default(),
        impact: form.impact.unwrap_or_default(),
        created_at: Some(now),
    })
}

/// POST /api/portfolio
pub async fn create_portfolio(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<PortfolioFormData>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(form) = payload?;

    let validation = validate_portfolio_data(&form);
    if !validation.is_valid {
        return Err(AppError::Validation(validation.errors));
    }

    let portfolio = build_portfolio(form)?;
    state
        .storage()?
        .portfolios
        .add(&portfolio)
        .await
        .map_err(AppError::storage("Failed to add portfolio"))?;

    info!(portfolio_id = %portfolio.id, slug = %portfolio.slug, "Portfolio added");
    Ok(
        ApiResponse::success(json!({ "portfolio": Project::from(&portfolio) }))
            .with_message("Portfolio added successfully"),
    )
}

/// GET /api/portfolio
pub async fn list_portfolios(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Value>> {
    let portfolios = state
        .storage()?
        .portfolios
        .get_all()
        .await
        .map_err(AppError::storage("Failed to fetch portfolios"))?;

    Ok(ApiResponse::success(json!({ "portfolios": portfolios })))
}

/// GET /api/portfolio/{slug}
pub async fn get_portfolio_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let custom = state
        .storage()?
        .portfolios
        .get_all()
        .await
        .map_err(AppError::storage("Failed to fetch portfolio"))?;

    let project = custom
        .iter()
        .find(|portfolio| portfolio.slug == slug)
        .map(Project::from)
        .ok_or_else(|| AppError::not_found("Portfolio not found"))?;

    Ok(ApiResponse::success(json!({ "portfolio": project })))
}
