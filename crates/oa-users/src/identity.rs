//! Identity Lookup
//!
//! A single provider call per lookup, no retries, no timeout policy of its
//! own. Timeouts, if any, belong to the provider client behind the trait.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Identity provider errors
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("No account for user id: {0}")]
    UserNotFound(String),
    #[error("Malformed user id: {0}")]
    MalformedId(String),
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// External identity provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Look up the email address registered for a user id
    async fn user_email(&self, user_id: &str) -> Result<String, IdentityError>;
}

/// Adapter over the identity provider with a two-outcome contract:
/// an address, or nothing.
pub struct IdentityLookup<P: IdentityProvider> {
    provider: Arc<P>,
}

impl<P: IdentityProvider> IdentityLookup<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolve a user id to an email address.
    ///
    /// Every provider failure is absorbed here and reported as `None`;
    /// callers do not see the distinction between a missing account and a
    /// transient provider error. An email can often still be composed
    /// without a resolved address, so the decision to send stays with the
    /// caller.
    pub async fn lookup_email(&self, user_id: &str) -> Option<String> {
        match self.provider.user_email(user_id).await {
            Ok(email) => Some(email),
            Err(e) => {
                tracing::debug!("Identity lookup failed for {}: {}", user_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_returns_email() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_user_email()
            .withf(|user_id| user_id == "u1")
            .returning(|_| Ok("alice@example.com".to_string()));

        let lookup = IdentityLookup::new(Arc::new(provider));
        assert_eq!(
            lookup.lookup_email("u1").await,
            Some("alice@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_user_is_absent() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_user_email()
            .returning(|user_id| Err(IdentityError::UserNotFound(user_id.to_string())));

        let lookup = IdentityLookup::new(Arc::new(provider));
        assert_eq!(lookup.lookup_email("nobody").await, None);
    }

    #[tokio::test]
    async fn test_provider_outage_is_absent() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_user_email()
            .returning(|_| Err(IdentityError::Unavailable("connection refused".to_string())));

        let lookup = IdentityLookup::new(Arc::new(provider));
        assert_eq!(lookup.lookup_email("u1").await, None);
    }

    #[tokio::test]
    async fn test_malformed_id_is_absent() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_user_email()
            .returning(|user_id| Err(IdentityError::MalformedId(user_id.to_string())));

        let lookup = IdentityLookup::new(Arc::new(provider));
        assert_eq!(lookup.lookup_email("").await, None);
    }

    #[tokio::test]
    async fn test_single_call_per_lookup() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_user_email()
            .times(1)
            .returning(|_| Err(IdentityError::Unavailable("timeout".to_string())));

        let lookup = IdentityLookup::new(Arc::new(provider));
        assert_eq!(lookup.lookup_email("u1").await, None);
    }
}
