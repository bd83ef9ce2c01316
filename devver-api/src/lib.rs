//! # Devver API Client
//!
//! Organization-scoped authenticated client for the Devver backend.
//!
//! ## Overview
//!
//! The devver-api crate handles:
//! - **Request Layer**: One authenticated HTTP exchange per call, JSON or
//!   multipart, against a single configured origin
//! - **Pagination**: The `{data, meta}` envelope and the
//!   `page`/`pageSize`/`search` query contract shared by all list endpoints
//! - **Retry Classification**: Which failures a caller's retry policy should
//!   skip (401/403/404 and contract errors) and backoff helpers
//! - **Resource Clients**: Typed call sites for projects, organizations, and
//!   users
//!
//! ## Tenant Scoping
//!
//! Every request reads the active organization from the shared
//! [`TenantStore`](devver_tenant::TenantStore) at the moment it builds its
//! auth headers, then asks the injected
//! [`TokenProvider`](devver_auth::TokenProvider) for a bearer token scoped to
//! that organization. Switching organizations mid-flight therefore affects
//! requests that have not yet reached their auth step, and never the ones
//! already on the wire — last-write-wins, the newest user selection counts.
//!
//! A provider with no credential yields a request without an `Authorization`
//! header; the backend's 401 comes back as an ordinary
//! [`ApiError::Status`], classified non-retryable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devver_api::{ApiClient, ApiConfig, ListQuery};
//! use devver_api::projects::ProjectsClient;
//! use devver_auth::StaticTokenProvider;
//! use devver_tenant::{TenantId, TenantStore};
//! use std::sync::Arc;
//!
//! async fn run() -> Result<(), devver_api::ApiError> {
//!     let tenant = Arc::new(TenantStore::in_memory());
//!     tenant.set_active(Some(TenantId::new("org-acme")));
//!
//!     let client = ApiClient::new(
//!         ApiConfig::from_env(),
//!         tenant.clone(),
//!         Arc::new(StaticTokenProvider::new("service-token")),
//!     );
//!
//!     let projects = ProjectsClient::new(client);
//!     let page = projects.list(&ListQuery::new().page(1).page_size(12)).await?;
//!     for project in &page.data {
//!         println!("{}: {}", project.id, project.name);
//!     }
//!     if page.has_next_page() {
//!         // fetch page 2 ...
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The request layer classifies and forwards; it never recovers. Transport
//! failures carry no status and are retryable; non-2xx responses carry the
//! status and best-effort body text; a 2xx body of the wrong shape is a
//! contract error. See [`ApiError::is_retryable`] and [`retry`].

pub mod client;
pub mod config;
pub mod error;
pub mod organizations;
pub mod page;
pub mod projects;
pub mod retry;
pub mod types;
pub mod users;

// Re-export main types
pub use client::{ApiClient, RequestBody};
pub use config::ApiConfig;
pub use error::ApiError;
pub use organizations::OrganizationsClient;
pub use page::{ListQuery, Paginated, PaginationMeta};
pub use projects::ProjectsClient;
pub use types::{AccessControl, FileUpload, MachineConfiguration, UserLight};
pub use users::UsersClient;
