pub mod access_gate;
pub mod claims;
pub mod deny_reason;
pub mod error;
pub mod identity;
pub mod login_attempt_limiter;
pub mod permission_evaluator;
pub mod token_codec;

pub use access_gate::AccessGate;
pub use claims::Claims;
pub use deny_reason::DenyReason;
pub use error::{AuthError, GateError, Result};
pub use identity::Identity;
pub use login_attempt_limiter::{AttemptLimitConfig, LoginAttemptLimiter};
pub use token_codec::TokenCodec;

#[cfg(test)]
mod tests;
