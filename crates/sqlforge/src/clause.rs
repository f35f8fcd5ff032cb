//! Shared clause fragment generators.
//!
//! Every statement builder in [`crate::stmt`] is a thin composition over two
//! generators: [`where_clause`] for equality conjunctions and
//! [`order_limit_clause`] for the `ORDER BY`/`LIMIT`/`OFFSET` suffix. Both
//! are pure string transforms; bound values never pass through here.

/// Sort direction for ORDER BY entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortDir {
    /// SQL keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// ORDER BY/LIMIT/OFFSET modifiers shared by find, update and delete
/// statements.
///
/// All pieces are optional; [`order_limit_clause`] renders whatever is set.
///
/// # Example
/// ```
/// use sqlforge::{OrderLimitOptions, order_limit_clause};
///
/// let opts = OrderLimitOptions::new()
///     .order_by_asc("name")
///     .order_by_desc("age")
///     .limit(5)
///     .offset(10);
/// assert_eq!(order_limit_clause(&opts), "ORDER BY name ASC,age DESC LIMIT 5 OFFSET 10");
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrderLimitOptions {
    /// ORDER BY entries, in emission order
    pub(crate) sort: Vec<(String, SortDir)>,
    /// LIMIT
    pub(crate) limit: Option<u64>,
    /// OFFSET, only rendered together with a LIMIT
    pub(crate) offset: Option<u64>,
}

impl OrderLimitOptions {
    /// Create empty modifiers (renders to an empty suffix).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ORDER BY entry.
    pub fn order_by(mut self, column: &str, dir: SortDir) -> Self {
        self.sort.push((column.to_string(), dir));
        self
    }

    /// Add ORDER BY column ASC.
    pub fn order_by_asc(self, column: &str) -> Self {
        self.order_by(column, SortDir::Asc)
    }

    /// Add ORDER BY column DESC.
    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(column, SortDir::Desc)
    }

    /// Set LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET.
    ///
    /// OFFSET is only rendered when a LIMIT is also set; an offset on its own
    /// is dropped silently. This mirrors long-standing behavior that callers
    /// depend on, so it is kept as-is rather than promoted to an error.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sort.is_empty() && self.limit.is_none()
    }
}

/// Render the WHERE fragment for a list of equality criteria columns.
///
/// Each column contributes one `column=?` predicate, conjoined with `AND`, in
/// slice order. The caller binds one value per column in the same order.
/// Empty criteria produce the always-true guard `WHERE 1` so the fragment is
/// syntactically total and can be appended unconditionally.
///
/// Column names are emitted verbatim; callers supply SQL-safe identifiers.
///
/// # Example
/// ```
/// use sqlforge::where_clause;
///
/// assert_eq!(where_clause(&["foo", "bar"]), "WHERE foo=? AND bar=?");
/// assert_eq!(where_clause(&[]), "WHERE 1");
/// ```
pub fn where_clause(criteria: &[&str]) -> String {
    if criteria.is_empty() {
        return "WHERE 1".to_string();
    }

    let mut sql = String::from("WHERE ");
    for (i, column) in criteria.iter().enumerate() {
        if i > 0 {
            sql.push_str(" AND ");
        }
        sql.push_str(column);
        sql.push_str("=?");
    }
    sql
}

/// Render the `ORDER BY`/`LIMIT`/`OFFSET` suffix for the given modifiers.
///
/// Pieces are emitted in that fixed order, each only when present, joined by
/// single spaces with no stray separators. Returns an empty string when
/// nothing is set.
pub fn order_limit_clause(options: &OrderLimitOptions) -> String {
    let mut sql = String::new();

    if !options.sort.is_empty() {
        sql.push_str("ORDER BY ");
        for (i, (column, dir)) in options.sort.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            sql.push_str(column);
            sql.push(' ');
            sql.push_str(dir.as_str());
        }
    }

    if let Some(limit) = options.limit {
        if !sql.is_empty() {
            sql.push(' ');
        }
        sql.push_str(&format!("LIMIT {}", limit));

        // OFFSET rides on LIMIT; see OrderLimitOptions::offset.
        if let Some(offset) = options.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }
    }

    sql
}
