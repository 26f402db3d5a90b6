use lectern::config::jwt::JwtConfig;
use lectern::utils::jwt::{create_access_token, verify_token};

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "unit-test-secret".to_string(),
        expires_in_secs: 3600,
    }
}

#[test]
fn token_round_trips() {
    let config = test_config();
    let token = create_access_token(42, "alice", "admin", &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, "admin");
    assert!(claims.exp > claims.iat);
}

#[test]
fn tampered_token_is_rejected() {
    let config = test_config();
    let token = create_access_token(42, "alice", "admin", &config).unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    parts[2] = "forgedsignature";
    let forged = parts.join(".");

    assert!(verify_token(&forged, &config).is_err());
}

#[test]
fn wrong_secret_is_rejected() {
    let config = test_config();
    let token = create_access_token(42, "alice", "admin", &config).unwrap();

    let other = JwtConfig {
        secret: "some-other-secret".to_string(),
        expires_in_secs: 3600,
    };

    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn expired_token_is_rejected() {
    let config = JwtConfig {
        secret: "unit-test-secret".to_string(),
        // Already in the past once the default 60s leeway is exceeded.
        expires_in_secs: -120,
    };

    let token = create_access_token(42, "alice", "admin", &config).unwrap();
    let err = verify_token(&token, &test_config()).unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
}
