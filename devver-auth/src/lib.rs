//! # Devver Authentication Seam
//!
//! This crate defines how the Devver API client obtains bearer tokens without
//! hard-depending on a specific identity-provider integration.
//!
//! ## Overview
//!
//! The devver-auth crate handles:
//! - **TokenProvider**: The narrow capability `(resource, tenant) -> token`
//!   that the request layer holds a reference to
//! - **StaticTokenProvider**: Fixed-token implementation for
//!   service-to-service callers and tests
//!
//! ## Design
//!
//! Token acquisition is late-bound: the identity-provider integration
//! implements [`TokenProvider`] and injects it once when the client is built.
//! The core consumes the capability, it never implements login, logout, or
//! refresh flows.
//!
//! A provider returning `None` means "no credential available" (for example,
//! an unauthenticated session). The request layer then sends the request with
//! no `Authorization` header and lets the backend answer with an ordinary
//! HTTP error, so there is no separate unauthenticated exception path.
//!
//! ## Usage
//!
//! ```
//! use devver_auth::{StaticTokenProvider, TokenProvider};
//! use devver_tenant::TenantId;
//!
//! # async fn example() {
//! let provider = StaticTokenProvider::new("service-token");
//! let tenant = TenantId::new("org-1");
//! let token = provider.access_token("https://api.devver.dev/api/v1", Some(&tenant)).await;
//! assert_eq!(token.as_deref(), Some("service-token"));
//! # }
//! ```

pub mod provider;

// Re-export main types
pub use provider::{StaticTokenProvider, TokenProvider};
