use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use sso_service::domain::auth::models::App;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::InMemoryAppRepository;
use sso_service::outbound::repositories::InMemoryUserRepository;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret-key-for-jwt-signing";
pub const OTHER_APP_ID: i32 = 2;
pub const OTHER_APP_SECRET: &str = "other-secret-key-for-jwt-signing";
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

pub type TestAuthService =
    AuthService<InMemoryUserRepository, InMemoryUserRepository, InMemoryAppRepository>;

/// Two registered apps, each with its own signing secret
pub fn test_apps() -> InMemoryAppRepository {
    InMemoryAppRepository::new([
        App {
            id: AppId(APP_ID),
            name: "web".to_string(),
            secret: APP_SECRET.to_string(),
        },
        App {
            id: AppId(OTHER_APP_ID),
            name: "mobile".to_string(),
            secret: OTHER_APP_SECRET.to_string(),
        },
    ])
}

/// Build a service over fresh in-memory storage
pub fn test_service() -> (TestAuthService, Arc<InMemoryUserRepository>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&users),
        Arc::new(test_apps()),
        TOKEN_TTL,
    );

    (service, users)
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub users: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let (service, users) = test_service();
        let router = create_router(Arc::new(service));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            users,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(APP_SECRET.as_bytes()),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }
}
