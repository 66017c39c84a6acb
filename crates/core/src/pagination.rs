//! Pagination model shared by the repository and HTTP layers.
//!
//! A [`PageRequest`] describes which window of a collection the caller wants
//! (zero-based page index, page size, sort order) and a [`Page`] carries the
//! window back together with the total number of matching records.

use crate::error::CoreError;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound for a caller-supplied page size.
pub const MAX_PAGE_SIZE: i64 = 2000;

/// Clamp a user-provided page size to `1..=max`.
pub fn clamp_size(size: Option<i64>, default: i64, max: i64) -> i64 {
    size.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided page index to non-negative.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort direction for a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

/// A closed set of properties a collection can be sorted by.
///
/// Implemented per entity so that only known properties ever reach a query.
pub trait SortKey: Copy + Default {
    /// Resolve a wire-level property name (e.g. `unitsSold`).
    fn from_property(property: &str) -> Option<Self>;
}

/// One `property,direction` sort instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder<K> {
    pub key: K,
    pub direction: Direction,
}

impl<K: SortKey> SortOrder<K> {
    /// Parse `property` or `property,asc|desc`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(CoreError::Validation("sort property must not be empty".into()));
        }
        let key = K::from_property(property).ok_or_else(|| {
            CoreError::Validation(format!("cannot sort by unknown property '{property}'"))
        })?;

        let direction = match parts.next() {
            None | Some("") => Direction::default(),
            Some(dir) => Direction::parse(dir).ok_or_else(|| {
                CoreError::Validation(format!("invalid sort direction '{dir}'"))
            })?,
        };

        if parts.next().is_some() {
            return Err(CoreError::Validation(format!(
                "sort must be 'property' or 'property,direction', got '{raw}'"
            )));
        }

        Ok(Self { key, direction })
    }
}

// ---------------------------------------------------------------------------
// Requests and pages
// ---------------------------------------------------------------------------

/// Which window of a collection to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<K> {
    /// Zero-based page index.
    pub page: i64,
    /// Number of items per page, always at least 1.
    pub size: i64,
    pub sort: SortOrder<K>,
}

impl<K: SortKey> PageRequest<K> {
    /// Build a request from raw query parameters, applying defaults and bounds.
    pub fn from_params(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort = match sort {
            Some(raw) => SortOrder::parse(raw)?,
            None => SortOrder::default(),
        };
        Ok(Self {
            page: clamp_page(page),
            size: clamp_size(size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
            sort,
        })
    }
}

impl<K> PageRequest<K> {
    /// Number of records preceding this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

/// A bounded window over a collection plus the collection's total size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page index.
    pub page: i64,
    pub size: i64,
    /// Number of records in the whole collection.
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new<K>(items: Vec<T>, request: &PageRequest<K>, total: i64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
        }
    }

    /// Number of pages needed to hold `total` records (0 for an empty collection).
    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 || self.total <= 0 {
            return 0;
        }
        (self.total - 1) / self.size + 1
    }

    /// Whether a page follows this one. Never overflows, even for `page == i64::MAX`.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages() - 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
