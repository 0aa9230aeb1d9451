//! Page selection shared by every list endpoint in the service: event
//! listings, comment threads, and the activity feed all page the same way.

use serde::{Deserialize, Serialize};

/// Sort direction for list queries, serialized as `asc` / `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    Desc,
    Asc,
}

/// Page size applied when the query string names none.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Ceiling on page size. Oversized requests are clamped, not rejected,
/// so a scanner polling with `per-page=1000` still gets a valid response.
pub const MAX_PER_PAGE: u32 = 100;

/// Page selection parsed from the `per-page` and `page` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` into `1..=MAX_PER_PAGE` and `page` to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
            page: self.page.max(1),
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.per_page)
    }

    /// Row limit for this page.
    pub fn limit(self) -> u64 {
        u64::from(self.per_page)
    }
}
