//! Authenticated caller and role checks

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::AuthConfig, error::AppError};

/// Role allowed to mutate the book catalog
pub const ADMINISTRATOR_ROLE: &str = "Administrator";

/// JWT claims for authenticated callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Claims issued now by the configured issuer, valid for `ttl`
    pub fn new(sub: impl Into<String>, roles: Vec<String>, auth: &AuthConfig, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            email: None,
            roles,
            iss: auth.jwt_issuer.clone(),
            aud: auth.jwt_issuer.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Create a signed HS256 token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and validate a token: signature, expiry, issuer and audience
    pub fn from_token(token: &str, auth: &AuthConfig) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&auth.jwt_issuer]);
        validation.set_audience(&[&auth.jwt_issuer]);
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMINISTRATOR_ROLE)
    }

    /// Require the Administrator role
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Administrator privileges required".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_issuer: "https://bookstore.test/".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip_keeps_roles() {
        let claims = UserClaims::new(
            "admin@bookstore.com",
            vec![ADMINISTRATOR_ROLE.to_string()],
            &auth(),
            Duration::hours(1),
        );
        let token = claims.create_token("test-secret").unwrap();

        let parsed = UserClaims::from_token(&token, &auth()).unwrap();
        assert_eq!(parsed.sub, "admin@bookstore.com");
        assert!(parsed.is_admin());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = UserClaims::new("reader", vec![], &auth(), Duration::hours(1));
        let token = claims.create_token("other-secret").unwrap();
        assert!(UserClaims::from_token(&token, &auth()).is_err());
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let other = AuthConfig {
            jwt_issuer: "https://elsewhere.test/".to_string(),
            ..auth()
        };
        let claims = UserClaims::new("reader", vec![], &other, Duration::hours(1));
        let token = claims.create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, &auth()).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let claims = UserClaims::new("reader", vec![], &auth(), Duration::hours(-2));
        let token = claims.create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, &auth()).is_err());
    }

    #[test]
    fn test_customer_is_not_admin() {
        let claims = UserClaims::new(
            "reader",
            vec!["Customer".to_string()],
            &auth(),
            Duration::hours(1),
        );
        assert!(matches!(claims.require_admin(), Err(AppError::Authorization(_))));
    }
}
