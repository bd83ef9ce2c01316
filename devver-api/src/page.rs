//! Pagination envelope and list-query contract.
//!
//! Every list endpoint answers with `{ data, meta }` and accepts the query
//! parameters `page` (1-based), `pageSize`, and `search`. Parameters the
//! caller did not supply are omitted from the query string entirely so the
//! server applies its own defaults.

use serde::{Deserialize, Serialize};

/// Pagination metadata, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// The page this response covers (1-based).
    pub current_page: u32,

    /// Total matching items across all pages.
    pub total_items_count: u64,

    /// Total number of pages. Authoritative for "next" navigation.
    pub total_pages_count: u32,

    /// Page size the server applied.
    pub items_per_page: u32,
}

/// A page of results inside the `{ data, meta }` envelope.
///
/// Item order is server-defined and never re-sorted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,

    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Whether a next page exists.
    ///
    /// Driven by `meta.totalPagesCount` alone. An empty `data` is not proof
    /// of the end: an out-of-range page legitimately returns no items while
    /// earlier pages still exist.
    pub fn has_next_page(&self) -> bool {
        self.meta.current_page < self.meta.total_pages_count
    }

    /// Whether a previous page exists.
    pub fn has_previous_page(&self) -> bool {
        self.meta.current_page > 1
    }
}

/// Query parameters recognized by list endpoints.
///
/// # Examples
///
/// ```
/// use devver_api::ListQuery;
///
/// let query = ListQuery::new().page(2).page_size(12);
/// assert_eq!(
///     query.to_pairs(),
///     vec![("page", "2".to_string()), ("pageSize", "12".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Requested page (1-based).
    pub page: Option<u32>,

    /// Requested page size.
    pub page_size: Option<u32>,

    /// Free-text search filter.
    pub search: Option<String>,
}

impl ListQuery {
    /// Empty query; the server applies all of its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Request a specific page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Filter by free text.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Wire-format query pairs. Absent parameters are omitted, and an empty
    /// search string is treated as absent.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        pairs
    }
}
