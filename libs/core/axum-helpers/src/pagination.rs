//! Page/limit normalization for list endpoints.

use crate::envelope::PaginationSummary;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// A normalized page window. `page >= 1`, `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Clamp arbitrary integers into a valid window.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_LIMIT as i64) as u64,
        }
    }

    /// Normalize raw query values.
    ///
    /// Missing or non-integer values fall back to the defaults; integers
    /// out of range are clamped.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_int(page).unwrap_or(DEFAULT_PAGE as i64);
        let limit = parse_int(limit).unwrap_or(DEFAULT_LIMIT as i64);
        Self::new(page, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of records to skip. Saturates at `i64::MAX`, the largest
    /// skip the server accepts.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn summary(&self, total: u64) -> PaginationSummary {
        PaginationSummary {
            page: self.page,
            limit: self.limit,
            total,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}
