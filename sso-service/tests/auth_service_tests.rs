mod common;

use std::collections::HashSet;
use std::sync::Arc;

use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use chrono::Utc;
use common::test_service;
use common::APP_ID;
use common::APP_SECRET;
use common::OTHER_APP_ID;
use common::OTHER_APP_SECRET;
use common::TOKEN_TTL;
use futures::future::join_all;
use sso_service::domain::auth::errors::AuthError;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::ports::AuthServicePort;
use sso_service::domain::auth::ports::UserProvider;

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let (service, _) = test_service();

    let user_id = service
        .register("alice@example.com", "correct-horse")
        .await
        .expect("Register failed");
    let token = service
        .login("alice@example.com", "correct-horse", AppId(APP_ID))
        .await
        .expect("Login failed");

    let claims: Claims = JwtHandler::new(APP_SECRET.as_bytes())
        .decode(&token)
        .expect("Token validation failed");
    assert_eq!(claims.uid, user_id.0);
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.app_id, APP_ID);

    let expected_exp = Utc::now().timestamp() + TOKEN_TTL.as_secs() as i64;
    assert!((claims.exp - expected_exp).abs() <= 1);
}

#[tokio::test]
async fn test_tokens_are_bound_to_their_app() {
    let (service, _) = test_service();
    service
        .register("alice@example.com", "correct-horse")
        .await
        .unwrap();

    let web_token = service
        .login("alice@example.com", "correct-horse", AppId(APP_ID))
        .await
        .unwrap();
    let mobile_token = service
        .login("alice@example.com", "correct-horse", AppId(OTHER_APP_ID))
        .await
        .unwrap();

    let web_key = JwtHandler::new(APP_SECRET.as_bytes());
    let mobile_key = JwtHandler::new(OTHER_APP_SECRET.as_bytes());

    assert!(matches!(
        mobile_key.decode::<Claims>(&web_token),
        Err(JwtError::DecodingFailed(_))
    ));
    assert!(matches!(
        web_key.decode::<Claims>(&mobile_token),
        Err(JwtError::DecodingFailed(_))
    ));
    assert_eq!(
        mobile_key.decode::<Claims>(&mobile_token).unwrap().app_id,
        OTHER_APP_ID
    );
}

#[tokio::test]
async fn test_duplicate_register_keeps_original_hash() {
    let (service, users) = test_service();
    service
        .register("alice@example.com", "correct-horse")
        .await
        .unwrap();
    let original_hash = users.user("alice@example.com").await.unwrap().password_hash;

    let result = service.register("alice@example.com", "battery-staple").await;

    assert_eq!(result, Err(AuthError::UserExists));
    assert_eq!(
        users.user("alice@example.com").await.unwrap().password_hash,
        original_hash
    );
}

#[tokio::test]
async fn test_stored_hash_is_not_the_password() {
    let (service, users) = test_service();
    service
        .register("alice@example.com", "correct-horse")
        .await
        .unwrap();

    let stored = users.user("alice@example.com").await.unwrap();

    assert!(!stored.password_hash.contains("correct-horse"));
    assert!(stored.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_is_admin_for_registered_users() {
    let (service, users) = test_service();
    let admin_id = service.register("root@example.com", "pw").await.unwrap();
    let user_id = service.register("bob@example.com", "pw").await.unwrap();
    users.set_admin(admin_id, true).await.unwrap();

    assert_eq!(service.is_admin(admin_id).await, Ok(true));
    assert_eq!(service.is_admin(user_id).await, Ok(false));

    users.set_admin(admin_id, false).await.unwrap();
    assert_eq!(service.is_admin(admin_id).await, Ok(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registers_with_distinct_emails() {
    let (service, _) = test_service();
    let service = Arc::new(service);

    let handles = (0..16).map(|i| {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .register(&format!("user{}@example.com", i), "correct-horse")
                .await
        })
    });

    let ids: HashSet<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("Task panicked").expect("Register failed"))
        .collect();

    assert_eq!(ids.len(), 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registers_with_same_email() {
    let (service, _) = test_service();
    let service = Arc::new(service);

    let handles = (0..8).map(|_| {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .register("contended@example.com", "correct-horse")
                .await
        })
    });

    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("Task panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| *r == Err(AuthError::UserExists)));
}
