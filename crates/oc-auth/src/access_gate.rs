use crate::login_attempt_limiter::LoginAttemptLimiter;
use crate::permission_evaluator;
use crate::token_codec::TokenCodec;
use crate::{DenyReason, GateError, Identity};

use oc_core::Permission;
use oc_db::{RetryPolicy, UserStore, with_retry};

use std::sync::Arc;

/// Composition root for per-request access decisions.
///
/// Per request the steps are strictly sequential: rate check, token
/// verification, account fetch, permission check. The attempt limiter is
/// the only state shared across requests.
pub struct AccessGate {
    codec: TokenCodec,
    limiter: LoginAttemptLimiter,
    store: Arc<dyn UserStore>,
    retry: RetryPolicy,
}

impl AccessGate {
    pub fn new(
        codec: TokenCodec,
        limiter: LoginAttemptLimiter,
        store: Arc<dyn UserStore>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            codec,
            limiter,
            store,
            retry,
        }
    }

    pub fn limiter(&self) -> &LoginAttemptLimiter {
        &self.limiter
    }

    /// Authenticate a bearer credential for the client behind `client_key`.
    ///
    /// Credential failures (missing, malformed, expired, bad signature)
    /// count toward the attempt limiter. Account-state denials
    /// (`IdentityNotFound`, `IdentityInactive`) do not: the signature
    /// already proved the client is not guessing. Storage errors propagate
    /// unchanged once retries exhaust.
    pub async fn authenticate(
        &self,
        token: Option<&str>,
        client_key: &str,
    ) -> Result<Identity, GateError> {
        if !self.limiter.allow(client_key) {
            log::warn!("client {client_key} blocked: too many failed attempts");
            return Err(GateError::denied(DenyReason::RateLimited));
        }

        let token = match token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                self.limiter.record_failure(client_key);
                return Err(GateError::denied(DenyReason::NoCredential));
            }
        };

        let claims = match self.codec.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                self.limiter.record_failure(client_key);
                let reason = DenyReason::from(&e);
                log::warn!("token verification failed for client {client_key}: {e}");
                return Err(GateError::denied(reason));
            }
        };

        self.limiter.record_success(client_key);

        let account = with_retry(&self.retry, "find_user_by_id", || {
            self.store.find_by_id(&claims.sub)
        })
        .await?;

        let account = match account {
            Some(account) => account,
            None => {
                log::warn!("token subject {} has no account", claims.sub);
                return Err(GateError::denied(DenyReason::IdentityNotFound));
            }
        };

        if !account.active {
            log::warn!("account {} is inactive", account.id);
            return Err(GateError::denied(DenyReason::IdentityInactive));
        }

        log::debug!("client {client_key} authenticated as {}", account.id);
        Ok(Identity::from_account(account))
    }

    /// Check whether `identity` holds `required`.
    ///
    /// Policy denials are not credential failures and never touch the
    /// attempt limiter. A permission set that fits neither encoding is a
    /// server-side defect and kept distinct from `Forbidden`.
    pub fn authorize(&self, identity: &Identity, required: &Permission) -> Result<(), GateError> {
        match permission_evaluator::authorize(identity, required) {
            Ok(true) => {
                log::debug!("{} allowed {}", identity.subject_id, required);
                Ok(())
            }
            Ok(false) => {
                log::warn!("{} denied {}", identity.subject_id, required);
                Err(GateError::denied(DenyReason::Forbidden))
            }
            Err(e) => {
                log::error!(
                    "permission set for {} is corrupt: {}",
                    identity.subject_id,
                    e
                );
                Err(GateError::denied(DenyReason::MalformedPermissionSet))
            }
        }
    }
}
