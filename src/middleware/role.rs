//! Role-based authorization.
//!
//! Every protected route goes through the same capability check,
//! [`check_any_role`]; the [`RequireAdmin`] extractor is the per-handler
//! convenience built on top of it.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the authenticated user holds one of `allowed_roles`.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[Role]) -> Result<(), AppError> {
    let user_role = parse_role(&auth_user.0.role)?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Administrator privileges required."
        )));
    }

    Ok(())
}

/// Extractor gating a handler to admin users. Carries the authenticated
/// claims so handlers don't need a second `AuthUser` argument.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_any_role(&auth_user, &[Role::Admin])?;
        Ok(RequireAdmin(auth_user))
    }
}

/// A role string in a token we signed should always parse; anything else is
/// a server-side inconsistency, not a client error.
fn parse_role(role_str: &str) -> Result<Role, AppError> {
    role_str
        .parse()
        .map_err(|_| AppError::internal(anyhow::anyhow!("Invalid role: {}", role_str)))
}
