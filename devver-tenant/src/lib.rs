//! # Devver Tenant Context
//!
//! This crate tracks which organization (tenant) is currently active for a
//! Devver client session, shared across every crate that issues API calls.
//!
//! ## Overview
//!
//! The devver-tenant crate handles:
//! - **TenantId**: Opaque organization identifier issued by the identity provider
//! - **TenantStore**: Process-wide store of the active tenant, always returning
//!   the latest selection to concurrent readers
//! - **TenantStorage**: Best-effort persistence of the selection across sessions
//!
//! ## Semantics
//!
//! "No tenant selected" is a valid state (personal, non-organization context).
//! Writes are rare and user-initiated; last-write-wins is the intended
//! behavior, so an in-flight request always reads the value at the moment it
//! builds its auth headers, never a copy captured earlier.
//!
//! Persistence is caching, not the source of truth: a storage failure never
//! fails the in-memory update, and unreadable storage loads as "no tenant".
//!
//! ## Usage
//!
//! ```
//! use devver_tenant::{TenantId, TenantStore};
//!
//! let store = TenantStore::in_memory();
//! store.set_active(Some(TenantId::new("org-acme")));
//! assert_eq!(store.active(), Some(TenantId::new("org-acme")));
//!
//! store.set_active(None);
//! assert!(store.active().is_none());
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `devver-auth`: Token acquisition scoped to the active tenant
//! - `devver-api`: Organization-scoped API client

pub mod storage;
pub mod store;
pub mod tenant;

// Re-export main types for convenience
pub use storage::{FileStorage, MemoryStorage, StorageError, TenantStorage};
pub use store::TenantStore;
pub use tenant::TenantId;
