//! Authentication service implementation.

use crate::dto::{AccessTokenResponse, CredentialsRequest, MessageResponse, RefreshTokenRequest, TokenResponse};
use async_trait::async_trait;
use inventory_core::{Interface, InventoryError, InventoryResult, NewUser};
use inventory_repository::UserRepository;
use inventory_security::{Claims, PasswordHasherInterface, TokenProvider};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const CREDENTIALS_REQUIRED: &str = "Username and password are required";
const REFRESH_REQUIRED: &str = "Refresh token is required";
const REGISTRATION_FAILED: &str = "User registration failed";

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Interface + Send + Sync {
    /// Registers a new user.
    async fn register(&self, request: CredentialsRequest) -> InventoryResult<MessageResponse>;

    /// Logs in a user and issues a token pair.
    async fn login(&self, request: CredentialsRequest) -> InventoryResult<TokenResponse>;

    /// Issues a new access token from a refresh token.
    async fn refresh_token(&self, request: RefreshTokenRequest) -> InventoryResult<AccessTokenResponse>;

    /// Validates an access token and returns claims.
    async fn validate_token(&self, token: &str) -> InventoryResult<Claims>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasherInterface>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

/// Extracts non-empty credentials from a request.
fn credentials(request: CredentialsRequest) -> InventoryResult<(String, String)> {
    match (request.username, request.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Ok((username, password))
        }
        _ => Err(InventoryError::validation(CREDENTIALS_REQUIRED)),
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: CredentialsRequest) -> InventoryResult<MessageResponse> {
        let (username, password) = credentials(request)?;
        debug!("Registering user: {}", username);

        if self.user_repository.exists_by_username(&username).await? {
            warn!("Registration failed: username already taken - {}", username);
            return Err(InventoryError::internal(REGISTRATION_FAILED));
        }

        let password_hash = self.password_hasher.hash(&password)?;

        let user = self
            .user_repository
            .create(&NewUser::new(username, password_hash))
            .await
            .map_err(|e| {
                error!("User registration failed: {}", e);
                InventoryError::internal(REGISTRATION_FAILED)
            })?;

        info!("User registered: {}", user.id);
        Ok(MessageResponse::new("User created"))
    }

    async fn login(&self, request: CredentialsRequest) -> InventoryResult<TokenResponse> {
        let (username, password) = credentials(request)?;
        debug!("Login attempt for: {}", username);

        let user = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found - {}", username);
                InventoryError::InvalidCredentials
            })?;

        if !self.password_hasher.verify(&password, &user.password_hash)? {
            warn!("Login failed: invalid password - {}", user.id);
            return Err(InventoryError::InvalidCredentials);
        }

        let tokens = self.token_provider.generate_tokens(user.id, &user.username)?;

        info!("User logged in: {}", user.id);
        Ok(TokenResponse {
            refresh: tokens.refresh_token,
            access: tokens.access_token,
        })
    }

    async fn refresh_token(&self, request: RefreshTokenRequest) -> InventoryResult<AccessTokenResponse> {
        debug!("Refreshing token");

        let refresh = request
            .refresh
            .filter(|token| !token.is_empty())
            .ok_or_else(|| InventoryError::validation(REFRESH_REQUIRED))?;

        let access = self.token_provider.refresh_access_token(&refresh)?;
        Ok(AccessTokenResponse { access })
    }

    async fn validate_token(&self, token: &str) -> InventoryResult<Claims> {
        self.token_provider.validate_access_token(token)
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
