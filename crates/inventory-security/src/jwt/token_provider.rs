//! JWT token provider for creating and validating tokens.

use super::{Claims, TokenType};
use chrono::Duration;
use inventory_config::SecurityConfig;
use inventory_core::{InventoryError, InventoryResult, UserId};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

/// Token pair containing access and refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Access token (short-lived).
    pub access_token: String,
    /// Refresh token (long-lived).
    pub refresh_token: String,
}

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates an access/refresh token pair for a user.
    pub fn generate_tokens(&self, user_id: UserId, username: &str) -> InventoryResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user_id, username)?,
            refresh_token: self.generate_refresh_token(user_id, username)?,
        })
    }

    /// Generates an access token.
    pub fn generate_access_token(&self, user_id: UserId, username: &str) -> InventoryResult<String> {
        self.generate(TokenType::Access, user_id, username, self.config.access_token_expiration())
    }

    /// Generates a refresh token.
    pub fn generate_refresh_token(&self, user_id: UserId, username: &str) -> InventoryResult<String> {
        self.generate(TokenType::Refresh, user_id, username, self.config.refresh_token_expiration())
    }

    fn generate(
        &self,
        token_type: TokenType,
        user_id: UserId,
        username: &str,
        lifetime: std::time::Duration,
    ) -> InventoryResult<String> {
        let lifetime = Duration::from_std(lifetime).map_err(|_| {
            InventoryError::Configuration(format!("Token lifetime out of range: {}s", lifetime.as_secs()))
        })?;

        let claims = Claims::new(
            token_type,
            user_id,
            username.to_string(),
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            lifetime,
        );

        let token = self.encode(&claims)?;
        debug!("Generated {} token for user {}", token_type, user_id);
        Ok(token)
    }

    fn encode(&self, claims: &Claims) -> InventoryResult<String> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            InventoryError::Internal(format!("Failed to generate {} token: {}", claims.token_type, e))
        })
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> InventoryResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!("Token validation failed: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => InventoryError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                    InventoryError::InvalidToken("Invalid token signature".to_string())
                }
                ErrorKind::InvalidIssuer => InventoryError::InvalidToken("Invalid token issuer".to_string()),
                ErrorKind::InvalidAudience => {
                    InventoryError::InvalidToken("Invalid token audience".to_string())
                }
                _ => InventoryError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validates an access token specifically.
    pub fn validate_access_token(&self, token: &str) -> InventoryResult<Claims> {
        let claims = self.validate_token(token)?;

        if !claims.is_access_token() {
            return Err(InventoryError::InvalidToken("Expected access token".to_string()));
        }

        Ok(claims)
    }

    /// Validates a refresh token specifically.
    pub fn validate_refresh_token(&self, token: &str) -> InventoryResult<Claims> {
        let claims = self.validate_token(token)?;

        if !claims.is_refresh_token() {
            return Err(InventoryError::InvalidToken("Expected refresh token".to_string()));
        }

        Ok(claims)
    }

    /// Issues a fresh access token from a valid refresh token.
    ///
    /// The refresh token itself is not rotated.
    pub fn refresh_access_token(&self, refresh_token: &str) -> InventoryResult<String> {
        let claims = self.validate_refresh_token(refresh_token)?;
        self.generate_access_token(claims.user_id(), &claims.username)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
            ..Default::default()
        }
    }

    fn create_test_provider() -> TokenProvider {
        TokenProvider::new(Arc::new(test_config()))
    }

    #[test]
    fn test_generate_and_validate_tokens() {
        let provider = create_test_provider();

        let tokens = provider.generate_tokens(UserId(1), "testuser").unwrap();

        let claims = provider.validate_access_token(&tokens.access_token).unwrap();
        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.user_id(), UserId(1));
        assert!(claims.is_access_token());

        let refresh_claims = provider.validate_refresh_token(&tokens.refresh_token).unwrap();
        assert!(refresh_claims.is_refresh_token());
    }

    #[test]
    fn test_default_lifetimes() {
        let provider = create_test_provider();
        let tokens = provider.generate_tokens(UserId(1), "testuser").unwrap();

        let access = provider.validate_token(&tokens.access_token).unwrap();
        let refresh = provider.validate_token(&tokens.refresh_token).unwrap();
        assert_eq!(access.exp - access.iat, 300);
        assert_eq!(refresh.exp - refresh.iat, 86_400);
    }

    #[test]
    fn test_token_types_not_interchangeable() {
        let provider = create_test_provider();
        let tokens = provider.generate_tokens(UserId(1), "testuser").unwrap();

        assert!(matches!(
            provider.validate_access_token(&tokens.refresh_token),
            Err(InventoryError::InvalidToken(_))
        ));
        assert!(matches!(
            provider.validate_refresh_token(&tokens.access_token),
            Err(InventoryError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_refresh_access_token() {
        let provider = create_test_provider();
        let tokens = provider.generate_tokens(UserId(3), "testuser").unwrap();

        let access = provider.refresh_access_token(&tokens.refresh_token).unwrap();
        let claims = provider.validate_access_token(&access).unwrap();
        assert_eq!(claims.user_id(), UserId(3));
        assert_eq!(claims.username, "testuser");

        assert!(provider.refresh_access_token(&tokens.access_token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let provider = create_test_provider();
        let config = test_config();
        let claims = Claims::new(
            TokenType::Access,
            UserId(1),
            "testuser".to_string(),
            config.jwt_issuer,
            config.jwt_audience,
            Duration::minutes(-10),
        );
        let token = provider.encode(&claims).unwrap();

        assert!(matches!(provider.validate_token(&token), Err(InventoryError::TokenExpired)));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let provider = create_test_provider();
        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "another-secret".to_string(),
            ..test_config()
        }));
        let token = other.generate_access_token(UserId(1), "testuser").unwrap();

        assert!(matches!(provider.validate_token(&token), Err(InventoryError::InvalidToken(_))));
    }

    #[test]
    fn test_invalid_token() {
        let provider = create_test_provider();
        let result = provider.validate_token("invalid-token");
        assert!(result.is_err());
    }
}
