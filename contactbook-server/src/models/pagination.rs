//! Pagination types

use serde::Deserialize;

/// Maximum items per page
pub const MAX_LIMIT: u32 = 100;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub limit: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Limit is clamped to 1..=100
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl<T> Paginated<T> {
    /// Calculate total number of pages.
    pub fn total_pages(&self) -> u64 {
        if self.total <= 0 {
            1
        } else {
            (self.total as u64).div_ceil(u64::from(self.limit.max(1)))
        }
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Raw query parameters for pagination.
///
/// Kept as strings so junk like `?page=abc` falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n > 0)
            .unwrap_or(1);
        let limit = params
            .limit
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n > 0)
            .unwrap_or(i64::from(DEFAULT_LIMIT));

        Self::new(
            u32::try_from(page).unwrap_or(u32::MAX),
            u32::try_from(limit).unwrap_or(MAX_LIMIT),
        )
    }
}

/// Parse the integer prefix of a string.
///
/// Leading whitespace and a single sign are allowed, trailing characters
/// after the digits are ignored: `" 12px"` is 12, `"-3"` is -3, `"x1"` is None.
/// Digit runs past the `i64` range saturate instead of failing, so a huge
/// page number is still a page past the end.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len]
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        });

    Some(match (value, negative) {
        (Some(v), true) => -v,
        (Some(v), false) => v,
        (None, true) => i64::MIN,
        (None, false) => i64::MAX,
    })
}
