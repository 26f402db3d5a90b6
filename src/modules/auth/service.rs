use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{Role, User};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Unknown username and wrong password answer identically so login
    /// failures reveal nothing about which half was wrong.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = UserService::find_by_username(db, &dto.username)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        let is_valid = verify_password(&dto.password, &user.password_hash)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid credentials")));
        }

        let token = create_access_token(user.id, &user.username, &user.role, jwt_config)?;

        Ok(LoginResponse {
            success: true,
            token,
            user: super::model::PublicUser {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        })
    }

    /// Existence pre-check keeps the common duplicate path at 400; the
    /// unique constraint inside `UserService::create` catches the race.
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        if UserService::find_by_username(db, &dto.username)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username already exists"
            )));
        }

        let role = dto.role.unwrap_or(Role::Admin);
        UserService::create(db, &dto.username, &dto.password, role).await
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        user_id: i32,
        username: &str,
        dto: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let user = UserService::find_by_username(db, username)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let is_valid = verify_password(&dto.current_password, &user.password_hash)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Current password is incorrect"
            )));
        }

        UserService::update_password(db, user_id, &dto.new_password).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::{ChangePasswordRequest, LoginRequest, RegisterRequest};
    use axum::http::StatusCode;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expires_in_secs: 3600,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn login_returns_token_and_identity(pool: PgPool) {
        UserService::create(&pool, "admin", "admin123", Role::Admin)
            .await
            .unwrap();

        let response = AuthService::login(
            &pool,
            LoginRequest {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
            &test_jwt_config(),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert!(!response.token.is_empty());
        assert_eq!(response.user.username, "admin");
        assert_eq!(response.user.role, "admin");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn login_rejects_wrong_password_and_unknown_user_alike(pool: PgPool) {
        UserService::create(&pool, "admin", "admin123", Role::Admin)
            .await
            .unwrap();

        for (username, password) in [("admin", "wrongpass"), ("ghost", "admin123")] {
            let err = AuthService::login(
                &pool,
                LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
                &test_jwt_config(),
            )
            .await
            .unwrap_err();

            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.error.to_string(), "Invalid credentials");
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn register_defaults_to_admin_role(pool: PgPool) {
        let user = AuthService::register(
            &pool,
            RegisterRequest {
                username: "newuser".to_string(),
                password: "secret123".to_string(),
                role: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(user.role, "admin");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn register_duplicate_username_is_rejected(pool: PgPool) {
        UserService::create(&pool, "taken", "admin123", Role::Viewer)
            .await
            .unwrap();

        let err = AuthService::register(
            &pool,
            RegisterRequest {
                username: "taken".to_string(),
                password: "secret123".to_string(),
                role: Some(Role::Teacher),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Username already exists");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn change_password_verifies_current_first(pool: PgPool) {
        let user = UserService::create(&pool, "admin", "admin123", Role::Admin)
            .await
            .unwrap();

        let err = AuthService::change_password(
            &pool,
            user.id,
            "admin",
            ChangePasswordRequest {
                current_password: "wrongpass".to_string(),
                new_password: "newpass123".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        AuthService::change_password(
            &pool,
            user.id,
            "admin",
            ChangePasswordRequest {
                current_password: "admin123".to_string(),
                new_password: "newpass123".to_string(),
            },
        )
        .await
        .unwrap();

        let response = AuthService::login(
            &pool,
            LoginRequest {
                username: "admin".to_string(),
                password: "newpass123".to_string(),
            },
            &test_jwt_config(),
        )
        .await
        .unwrap();
        assert!(response.success);
    }
}
