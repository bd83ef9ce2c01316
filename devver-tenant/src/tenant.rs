//! Tenant identifier type
//!
//! Organizations are identified by opaque strings issued by the identity
//! provider. The client never mints or parses these ids; it only carries them
//! between the tenant store, the token provider, and the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for an organization (tenant).
///
/// Zero or one tenant is active at a time; the absence of a tenant
/// (`Option::None` throughout this workspace) is the personal,
/// non-organization context and is a valid state.
///
/// # Examples
///
/// ```
/// use devver_tenant::TenantId;
///
/// let id = TenantId::new("org-8f2k1");
/// assert_eq!(id.as_str(), "org-8f2k1");
/// assert_eq!(id.to_string(), "org-8f2k1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Create a tenant id from a provider-issued string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_display() {
        let id = TenantId::new("org-123");
        assert_eq!(format!("{}", id), "org-123");
    }

    #[test]
    fn test_tenant_id_from_conversions() {
        let a: TenantId = "org-123".into();
        let b: TenantId = String::from("org-123").into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tenant_id_serde_transparent() {
        let id = TenantId::new("org-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"org-123\"");

        let back: TenantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
