//! Test helpers for integration tests
//!
//! Spawns the API on an ephemeral port and wraps the HTTP calls tests make.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use social_api::{create_app, AppState};
use social_common::JwtService;
use social_service::testing::{in_memory_context, InMemoryStore, RecordingPublisher, TEST_JWT_SECRET};
use social_service::CommentPolicy;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::Envelope;

/// Running API server backed by in-memory storage
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Storage behind the server, for seeding users and inspecting rows
    pub store: InMemoryStore,
    /// Every event the comment service broadcast
    pub publisher: RecordingPublisher,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the default comment policy
    pub async fn start() -> Result<Self> {
        Self::start_with_policy(CommentPolicy::default()).await
    }

    /// Start a server with a custom comment policy
    pub async fn start_with_policy(policy: CommentPolicy) -> Result<Self> {
        let (ctx, store, publisher) = in_memory_context(policy);
        let app = create_app(AppState::new(ctx));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            publisher,
            jwt: JwtService::new(TEST_JWT_SECRET, 3600),
            _handle: handle,
        })
    }

    /// Provision a user and return a bearer token issued to them
    pub fn login(&self, username: &str, known_as: Option<&str>) -> Result<String> {
        self.store.add_user(username, known_as);
        self.token_for(username)
    }

    /// Token for `username` whether or not the user exists
    pub fn token_for(&self, username: &str) -> Result<String> {
        Ok(self.jwt.generate_access_token(username)?)
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(request: RequestBuilder, token: &str) -> Result<Response> {
        Ok(request.bearer_auth(token).send().await?)
    }

    /// Make a GET request without credentials
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), token).await
    }

    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), token).await
    }

    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.patch(self.url(path)).json(body), token).await
    }

    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.put(self.url(path)).json(body), token).await
    }

    /// PUT without a body, for toggles that take none
    pub async fn put_empty(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.put(self.url(path)), token).await
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), token).await
    }
}

/// Assert the status and unwrap the `data` envelope
pub async fn assert_data<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let envelope: Envelope<T> = assert_json(response, expected_status).await?;
    Ok(envelope.data)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
