use crate::{AuthError, Claims, Identity, Result as AuthErrorResult};

use oc_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies HS256 identity tokens.
///
/// The secret is mandatory at construction: without it no token can ever
/// verify, so its absence is a startup failure handled by config
/// validation, never a per-request condition.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify a token and return its claims.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::TokenSignatureInvalid {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::TokenMalformed {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Issue a signed token for `identity`, valid for `ttl`.
    #[track_caller]
    pub fn issue(&self, identity: &Identity, ttl: Duration) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: identity.subject_id.clone(),
            name: identity.name.clone(),
            role: identity.role,
            permissions: identity.permissions.clone(),
            exp: now + ttl.as_secs() as i64,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::TokenEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
