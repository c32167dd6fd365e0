//! Tenant extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bauorder_core::error::CoreError;
use bauorder_core::types::DEFAULT_TENANT;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The tenant a request operates on, extracted from the JWT Bearer token
/// in the `Authorization` header.
///
/// A request without the header runs against the `"default"` tenant (the
/// unauthenticated/dev path); a header that is present but malformed or
/// carries an invalid token is rejected with 401.
///
/// Use this as an extractor parameter in any handler:
///
/// ```ignore
/// async fn my_handler(tenant: AuthTenant) -> AppResult<Json<()>> {
///     tracing::info!(tenant_id = %tenant.tenant_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthTenant {
    /// Opaque tenant identifier (the token's `sub` claim).
    pub tenant_id: String,
}

impl FromRequestParts<AppState> for AuthTenant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(AuthTenant {
                tenant_id: DEFAULT_TENANT.to_string(),
            });
        };

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthTenant {
            tenant_id: claims.sub,
        })
    }
}
