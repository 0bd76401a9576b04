//! Pagination request and envelope types.

use serde::{Deserialize, Serialize};

/// Upper bound on `limit` accepted from clients.
pub const MAX_LIMIT: u64 = 100;

/// A resolved page request (1-based page, positive limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping page to at least 1 and limit to
    /// `1..=MAX_LIMIT`.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Number of documents to skip: `(page - 1) * limit`, saturating so
    /// that an absurd page number yields an empty page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// The pagination envelope returned alongside list data. Always derived,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total number of matching documents.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
    /// `page < total_pages`.
    pub has_next: bool,
    /// `page > 1`.
    pub has_prev: bool,
}

impl Pagination {
    /// Derive the envelope for `request` over `total` matching documents.
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit);
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }
}
