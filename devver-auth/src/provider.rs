//! Token provider capability
//!
//! The request layer asks for a token on every outbound call, passing the
//! resource indicator of the backend API and the tenant active at that
//! moment. When a tenant is supplied, the provider is expected to return an
//! organization token (a credential carrying the organization context);
//! without one it returns the plain resource token.

use async_trait::async_trait;
use devver_tenant::TenantId;

/// Capability for acquiring bearer tokens.
///
/// Implemented by the identity-provider integration and consumed by the API
/// client. Returning `None` means no credential is available; the request is
/// then sent unauthenticated and the backend's HTTP error stands as-is.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// A bearer token for `resource`, scoped to `organization_id` when given.
    async fn access_token(
        &self,
        resource: &str,
        organization_id: Option<&TenantId>,
    ) -> Option<String>;
}

/// Provider that returns one fixed token regardless of resource or tenant.
///
/// Suitable for service-to-service callers holding a long-lived credential,
/// and for tests.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Provider yielding `token` for every request.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(
        &self,
        _resource: &str,
        _organization_id: Option<&TenantId>,
    ) -> Option<String> {
        Some(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_ignores_scope() {
        let provider = StaticTokenProvider::new("tok");
        let tenant = TenantId::new("org-1");

        assert_eq!(
            provider.access_token("res", None).await.as_deref(),
            Some("tok")
        );
        assert_eq!(
            provider.access_token("res", Some(&tenant)).await.as_deref(),
            Some("tok")
        );
    }

    #[tokio::test]
    async fn test_provider_is_object_safe() {
        let provider: Box<dyn TokenProvider> = Box::new(StaticTokenProvider::new("tok"));
        assert!(provider.access_token("res", None).await.is_some());
    }
}
