use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::domain::{
    authentication::{
        entities::{ProjectAccessClaims, SessionClaims},
        ports::TokenIssuer,
    },
    common::entities::app_errors::CoreError,
};

/// HS256 signer shared by session and project access tokens.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    fn sign<C: Serialize>(&self, claims: &C) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, CoreError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                CoreError::Unauthorized
            })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign_session(&self, claims: &SessionClaims) -> Result<String, CoreError> {
        self.sign(claims)
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, CoreError> {
        self.verify(token)
    }

    fn sign_project_access(&self, claims: &ProjectAccessClaims) -> Result<String, CoreError> {
        self.sign(claims)
    }

    fn verify_project_access(&self, token: &str) -> Result<ProjectAccessClaims, CoreError> {
        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;

    fn session(exp_offset_hours: i64) -> SessionClaims {
        SessionClaims {
            id: Uuid::new_v4(),
            username: "lgarza".to_string(),
            fullname: "Laura Garza".to_string(),
            role: "editor".to_string(),
            exp: (Utc::now() + Duration::hours(exp_offset_hours)).timestamp(),
        }
    }

    #[test]
    fn test_session_token_round_trip() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let claims = session(24);

        let token = issuer.sign_session(&claims).unwrap();
        assert_eq!(issuer.verify_session(&token).unwrap(), claims);
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let token = issuer.sign_session(&session(-1)).unwrap();

        assert_eq!(issuer.verify_session(&token), Err(CoreError::Unauthorized));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = JwtTokenIssuer::new("one")
            .sign_session(&session(1))
            .unwrap();

        assert!(JwtTokenIssuer::new("two").verify_session(&token).is_err());
    }

    #[test]
    fn test_session_token_is_not_project_access() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let token = issuer.sign_session(&session(1)).unwrap();

        assert!(issuer.verify_project_access(&token).is_err());
    }
}
