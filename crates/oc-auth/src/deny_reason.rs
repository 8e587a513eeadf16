use crate::AuthError;

/// Why the gate refused a request.
///
/// Every variant stays distinguishable for the caller and for logs; the
/// client-facing mapping is the embedding layer's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NoCredential,
    RateLimited,
    TokenExpired,
    TokenMalformed,
    TokenSignatureInvalid,
    IdentityNotFound,
    IdentityInactive,
    Forbidden,
    MalformedPermissionSet,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCredential => "NO_CREDENTIAL",
            Self::RateLimited => "RATE_LIMITED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenMalformed => "TOKEN_MALFORMED",
            Self::TokenSignatureInvalid => "TOKEN_SIGNATURE_INVALID",
            Self::IdentityNotFound => "IDENTITY_NOT_FOUND",
            Self::IdentityInactive => "IDENTITY_INACTIVE",
            Self::Forbidden => "FORBIDDEN",
            Self::MalformedPermissionSet => "MALFORMED_PERMISSION_SET",
        }
    }

    /// Client-facing message. Credential and account-state failures all
    /// collapse to the same string so responses cannot be used to
    /// enumerate accounts; the precise reason still reaches the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::RateLimited => "Too many failed attempts, try again later",
            Self::Forbidden => "Access denied",
            Self::MalformedPermissionSet => "Internal server error",
            _ => "Unauthorized",
        }
    }

    /// Whether this denial is evidence of credential guessing and should
    /// count toward the attempt limiter.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            Self::NoCredential
                | Self::TokenExpired
                | Self::TokenMalformed
                | Self::TokenSignatureInvalid
        )
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&AuthError> for DenyReason {
    fn from(error: &AuthError) -> Self {
        match error {
            AuthError::TokenExpired { .. } => Self::TokenExpired,
            AuthError::TokenSignatureInvalid { .. } => Self::TokenSignatureInvalid,
            AuthError::TokenMalformed { .. }
            | AuthError::TokenEncode { .. }
            | AuthError::InvalidClaim { .. } => Self::TokenMalformed,
            AuthError::MalformedPermissionSet { .. } => Self::MalformedPermissionSet,
        }
    }
}
