//! Handlers for the `/companies` resource.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::company::CompanyRole;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::company::{Company, CreateCompany, UpdateCompany};
use bauorder_db::repositories::CompanyRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// Query parameters for listing companies.
#[derive(Debug, Deserialize)]
pub struct ListCompaniesQuery {
    /// Restrict to one company type.
    #[serde(rename = "type")]
    pub company_type: Option<CompanyRole>,
}

/// Query parameters for the name search.
#[derive(Debug, Deserialize)]
pub struct SearchCompaniesQuery {
    /// Substring to match, case-insensitive. Empty matches everything.
    #[serde(default)]
    pub q: String,
    /// Restrict to one company type.
    #[serde(rename = "type")]
    pub company_type: Option<CompanyRole>,
}

/// POST /api/v1/companies
pub async fn create(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyRepo::create(&state.pool, &tenant.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies
pub async fn list(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Query(query): Query<ListCompaniesQuery>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = match query.company_type {
        Some(ct) => CompanyRepo::list_by_tenant_and_type(&state.pool, &tenant.tenant_id, ct).await?,
        None => CompanyRepo::list_by_tenant(&state.pool, &tenant.tenant_id).await?,
    };
    Ok(Json(companies))
}

/// GET /api/v1/companies/tree
///
/// Types with zero companies are absent from the mapping; clients default
/// missing keys to empty.
pub async fn tree(
    State(state): State<AppState>,
    tenant: AuthTenant,
) -> AppResult<Json<HashMap<String, Vec<Company>>>> {
    let tree = CompanyRepo::tree(&state.pool, &tenant.tenant_id).await?;
    Ok(Json(tree))
}

/// GET /api/v1/companies/search
pub async fn search(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Query(query): Query<SearchCompaniesQuery>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyRepo::search_by_name(
        &state.pool,
        &tenant.tenant_id,
        query.company_type,
        &query.q,
    )
    .await?;
    Ok(Json(companies))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{id}
pub async fn update(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::update(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CompanyRepo::delete(&state.pool, &tenant.tenant_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))
    }
}
