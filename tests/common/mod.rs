use lectern::config::cors::CorsConfig;
use lectern::config::jwt::JwtConfig;
use lectern::router::init_router;
use lectern::state::AppState;
use lectern::utils::jwt::create_access_token;
use lectern::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: String,
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Inserts a user directly. `role` must be admin, teacher, or viewer.
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str, role: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_group(pool: &PgPool, name: &str) {
    sqlx::query("INSERT INTO groups (name) VALUES ($1)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

/// Mints a token for the user with the same config the app reads.
pub fn token_for(user: &TestUser) -> String {
    dotenvy::dotenv().ok();
    let jwt_config = JwtConfig::from_env();
    create_access_token(user.id, &user.username, &user.role, &jwt_config).unwrap()
}

pub fn generate_unique_username() -> String {
    // Usernames cap at 50 chars; a trimmed uuid keeps these well under.
    let suffix = Uuid::new_v4().simple().to_string();
    format!("user-{}", &suffix[..12])
}

#[allow(dead_code)]
pub fn generate_unique_group_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("GRP-{}", &suffix[..8])
}
