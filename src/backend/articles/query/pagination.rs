use crate::shared::config::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

/// Largest offset that still renders as a SQLite integer
const MAX_OFFSET: u64 = i64::MAX as u64;

/// LIMIT/OFFSET parameters for the article list
///
/// Both values are typed integers and are rendered as literals, so nothing
/// the caller typed ever reaches the statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Build pagination from raw query-string values
    ///
    /// Absent, non-numeric and zero limits fall back to the default page
    /// size (or `ceiling`, if lower); larger limits are clamped to `ceiling`. Absent or non-numeric
    /// offsets become 0. Offsets are capped at the largest value SQLite
    /// accepts as an integer literal.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>, ceiling: u32) -> Self {
        let ceiling = if ceiling == 0 { DEFAULT_MAX_PAGE_SIZE } else { ceiling };
        let limit = match limit.and_then(|raw| raw.trim().parse::<u64>().ok()) {
            None | Some(0) => DEFAULT_PAGE_SIZE.min(ceiling),
            Some(n) if n > u64::from(ceiling) => ceiling,
            Some(n) => n as u32,
        };
        let offset = offset
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0)
            .min(MAX_OFFSET);

        Self { limit, offset }
    }

    /// Create pagination with both limit and offset
    pub fn limit_offset(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Convert to SQL string
    ///
    /// `OFFSET` is only rendered when it is non-zero.
    pub fn to_sql(&self) -> String {
        let mut sql = format!(" LIMIT {}", self.limit);
        if self.offset > 0 {
            sql.push_str(&format!(" OFFSET {}", self.offset));
        }
        sql
    }
}
