//! The facade itself: mock or live, decided once at construction.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use eproc_inventory::InventoryItem;
use eproc_orders::PurchaseOrder;
use eproc_reports::Report;
use eproc_requisitions::Requisition;
use eproc_users::User;
use eproc_vendors::Vendor;

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Token handed out by mock-mode login.
pub const MOCK_TOKEN: &str = "mock-token-12345";

/// Body of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: LoginUser,
}

/// The identity echo inside a login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub role: String,
}

#[derive(Debug)]
enum Mode {
    Mock,
    Remote {
        http: reqwest::Client,
        base_url: String,
        token: Option<String>,
    },
}

/// Accessors for every portal collection.
///
/// In mock mode each accessor returns the fixture collection immediately; in
/// live mode it issues one authenticated GET and parses a JSON array. One
/// attempt per call: a failure is returned, not retried.
#[derive(Debug)]
pub struct ApiClient {
    mode: Mode,
}

impl ApiClient {
    /// Build from configuration (read once at startup).
    pub fn new(config: &ClientConfig) -> Self {
        if config.use_mock {
            Self::mock()
        } else {
            Self::remote(config.base_url.clone())
        }
    }

    /// A facade that never touches the network.
    pub fn mock() -> Self {
        Self { mode: Mode::Mock }
    }

    /// A facade against a live API.
    ///
    /// No request timeout is configured; a hung request hangs the caller.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Remote {
                http: reqwest::Client::new(),
                base_url: base_url.into(),
                token: None,
            },
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.mode, Mode::Mock)
    }

    /// Attach the bearer token used by subsequent reads.
    pub fn set_token(&mut self, value: impl Into<String>) {
        if let Mode::Remote { token, .. } = &mut self.mode {
            *token = Some(value.into());
        }
    }

    /// Authenticate against the data source.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<LoginResponse, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(LoginResponse {
                success: true,
                token: MOCK_TOKEN.to_string(),
                user: LoginUser {
                    email: email.to_string(),
                    role: role.to_string(),
                },
            }),
            Mode::Remote { http, base_url, .. } => {
                let response = http
                    .post(format!("{base_url}/auth/login"))
                    .json(&serde_json::json!({
                        "email": email,
                        "password": password,
                        "role": role,
                    }))
                    .send()
                    .await
                    .map_err(|_| FetchError::LoginFailed)?;

                if !response.status().is_success() {
                    warn!(status = %response.status(), "login rejected");
                    return Err(FetchError::LoginFailed);
                }
                response.json().await.map_err(|_| FetchError::LoginFailed)
            }
        }
    }

    pub async fn vendors(&self) -> Result<Vec<Vendor>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::vendors().to_vec()),
            Mode::Remote { .. } => self.get_collection("vendors").await,
        }
    }

    pub async fn requisitions(&self) -> Result<Vec<Requisition>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::requisitions().to_vec()),
            Mode::Remote { .. } => self.get_collection("requisitions").await,
        }
    }

    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::inventory_items().to_vec()),
            Mode::Remote { .. } => self.get_collection("inventory").await,
        }
    }

    pub async fn reports(&self) -> Result<Vec<Report>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::reports().to_vec()),
            Mode::Remote { .. } => self.get_collection("reports").await,
        }
    }

    pub async fn users(&self) -> Result<Vec<User>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::users().to_vec()),
            Mode::Remote { .. } => self.get_collection("users").await,
        }
    }

    pub async fn orders(&self) -> Result<Vec<PurchaseOrder>, FetchError> {
        match &self.mode {
            Mode::Mock => Ok(eproc_fixtures::orders().to_vec()),
            Mode::Remote { .. } => self.get_collection("orders").await,
        }
    }

    /// One authenticated GET, one JSON array. No retries.
    async fn get_collection<T: DeserializeOwned>(
        &self,
        resource: &'static str,
    ) -> Result<Vec<T>, FetchError> {
        let Mode::Remote { http, base_url, token } = &self.mode else {
            unreachable!("get_collection is only called in remote mode");
        };

        debug!(resource, "fetching collection");
        let mut request = http.get(format!("{base_url}/{resource}"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(resource, status = %status, "fetch failed");
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Decode { resource, source })
    }
}
