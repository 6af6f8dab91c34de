use serde::Serialize;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_OFFSET: i64 = 0;

/// A limit/offset window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub limit: i64,
    pub offset: i64,
}

impl PaginationParams {
    /// Builds a window, substituting defaults for out-of-range values.
    pub fn new(limit: i64, offset: i64) -> Self {
        let limit = if limit <= 0 || limit > MAX_LIMIT {
            DEFAULT_LIMIT
        } else {
            limit
        };
        let offset = if offset < 0 { DEFAULT_OFFSET } else { offset };

        PaginationParams { limit, offset }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        PaginationParams {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Whether a listing should return every matching row or a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    #[default]
    All,
    Window(PaginationParams),
}

impl PageRequest {
    /// Interprets raw `limit`/`offset` query values.
    ///
    /// Both missing (or empty) means the caller wants the complete set.
    /// Otherwise values that don't parse or fall out of range are replaced
    /// by the defaults instead of being rejected.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit.map(str::trim).filter(|v| !v.is_empty());
        let offset = offset.map(str::trim).filter(|v| !v.is_empty());

        if limit.is_none() && offset.is_none() {
            return PageRequest::All;
        }

        let limit = limit
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_OFFSET);

        PageRequest::Window(PaginationParams::new(limit, offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMetadata {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMetadata {
    pub fn new(limit: i64, offset: i64, total: i64) -> Self {
        // An unpaginated listing of an empty set arrives here with limit == 0
        let total_pages = if limit > 0 {
            ((total + limit - 1) / limit).max(1)
        } else {
            1
        };

        PaginationMetadata {
            limit,
            offset,
            total,
            total_pages,
            has_next: offset.saturating_add(limit) < total,
            has_prev: offset > 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationMetadata) -> Self {
        PaginatedResponse { data, pagination }
    }
}
