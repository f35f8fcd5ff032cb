//! Statement builders for COUNT, SELECT, INSERT, UPDATE and DELETE.
//!
//! Each builder is a pure function: validate inputs, compose the shared
//! fragments from [`crate::clause`], return the finished string. Values are
//! never interpolated; every criteria or update column contributes exactly
//! one `?` placeholder, and the caller binds values in placeholder order.

use tracing::trace;

use crate::clause::{OrderLimitOptions, SortDir, order_limit_clause, where_clause};
use crate::error::{SqlError, SqlResult};

/// Modifiers for [`build_find_sql`]: projected columns plus the shared
/// ORDER BY/LIMIT/OFFSET pieces.
///
/// The default value stands for "no modifiers": `SELECT *` with no suffix.
///
/// # Example
/// ```
/// use sqlforge::{FindOptions, build_find_sql};
///
/// let sql = build_find_sql(
///     "users",
///     &["status"],
///     &FindOptions::new()
///         .projections(&["id", "name"])
///         .order_by_desc("created_at")
///         .limit(20),
/// );
/// assert_eq!(sql, "SELECT id,name FROM users WHERE status=? ORDER BY created_at DESC LIMIT 20");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FindOptions {
    /// Projected columns (empty => `*`)
    projections: Vec<String>,
    /// ORDER BY/LIMIT/OFFSET modifiers
    order: OrderLimitOptions,
}

impl FindOptions {
    /// Create empty options (`SELECT *`, no suffix).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set projected columns. Empty means `*`.
    pub fn projections(mut self, columns: &[&str]) -> Self {
        self.projections = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append one projected column.
    pub fn add_projection(mut self, column: &str) -> Self {
        self.projections.push(column.to_string());
        self
    }

    /// Add an ORDER BY entry.
    pub fn order_by(mut self, column: &str, dir: SortDir) -> Self {
        self.order = self.order.order_by(column, dir);
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
        self.order = self.order.limit(n);
        self
    }

    /// Set OFFSET (rendered only together with a LIMIT, see
    /// [`OrderLimitOptions::offset`]).
    pub fn offset(mut self, n: u64) -> Self {
        self.order = self.order.offset(n);
        self
    }
}

/// Build a COUNT statement: `SELECT COUNT(*) AS counter FROM <table> <where>`.
///
/// The count is aliased `counter` so row-mapping callers can address it by
/// name. Projections and sort/limit modifiers do not apply to counts.
pub fn build_count_sql(table: &str, criteria: &[&str]) -> String {
    let sql = format!("SELECT COUNT(*) AS counter FROM {} {}", table, where_clause(criteria));
    trace!(statement = %sql, "built count sql");
    sql
}

/// Build a SELECT statement:
/// `SELECT <projection> FROM <table> <where> <order/limit>`.
pub fn build_find_sql(table: &str, criteria: &[&str], options: &FindOptions) -> String {
    let projection = if options.projections.is_empty() {
        "*".to_string()
    } else {
        options.projections.join(",")
    };

    let mut sql = format!("SELECT {} FROM {} {}", projection, table, where_clause(criteria));

    if !options.order.is_empty() {
        sql.push(' ');
        sql.push_str(&order_limit_clause(&options.order));
    }

    trace!(statement = %sql, "built find sql");
    sql
}

/// Build an INSERT statement:
/// `INSERT INTO <table> (<fields>) VALUES (?,..),(?,..),...`.
///
/// Each tuple carries one placeholder per field; `rows` tuples are emitted,
/// comma-joined. Callers bind values row by row, fields in list order.
///
/// Returns [`SqlError::InvalidArgument`] when `fields` is empty or `rows` is
/// zero, both of which would otherwise render unexecutable SQL.
///
/// # Example
/// ```
/// use sqlforge::build_insert_sql;
///
/// let sql = build_insert_sql("users", &["name", "age"], 2).unwrap();
/// assert_eq!(sql, "INSERT INTO users (name,age) VALUES (?,?),(?,?)");
/// ```
pub fn build_insert_sql(table: &str, fields: &[&str], rows: usize) -> SqlResult<String> {
    if fields.is_empty() {
        return Err(SqlError::invalid_argument(
            "insert requires at least one field",
        ));
    }
    if rows == 0 {
        return Err(SqlError::invalid_argument(
            "insert requires at least one row",
        ));
    }

    let tuple = format!("({})", vec!["?"; fields.len()].join(","));
    let values = vec![tuple; rows].join(",");

    let sql = format!("INSERT INTO {} ({}) VALUES {}", table, fields.join(","), values);
    trace!(statement = %sql, "built insert sql");
    Ok(sql)
}

/// Build an UPDATE statement:
/// `UPDATE <table> SET <assignments> <where> <order/limit>`.
///
/// Assignments are `column=?`, comma-joined in `updates` order. The SET
/// placeholders precede the WHERE placeholders, so callers bind update
/// values first (in `updates` order), then criteria values (in `criteria`
/// order).
///
/// Returns [`SqlError::InvalidArgument`] when `updates` is empty, which
/// would otherwise render a bare `SET`.
pub fn build_update_sql(
    table: &str,
    updates: &[&str],
    criteria: &[&str],
    options: &OrderLimitOptions,
) -> SqlResult<String> {
    if updates.is_empty() {
        return Err(SqlError::invalid_argument(
            "update requires at least one SET column",
        ));
    }

    let assignments: Vec<String> = updates.iter().map(|c| format!("{}=?", c)).collect();

    let mut sql = format!(
        "UPDATE {} SET {} {}",
        table,
        assignments.join(","),
        where_clause(criteria)
    );

    if !options.is_empty() {
        sql.push(' ');
        sql.push_str(&order_limit_clause(options));
    }

    trace!(statement = %sql, "built update sql");
    Ok(sql)
}

/// Build a DELETE statement: `DELETE FROM <table> <where> <order/limit>`.
///
/// Empty criteria produce `WHERE 1`, which matches every row; the guard
/// keeps the statement syntactically total but offers no protection against
/// full-table deletes.
pub fn build_delete_sql(table: &str, criteria: &[&str], options: &OrderLimitOptions) -> String {
    let mut sql = format!("DELETE FROM {} {}", table, where_clause(criteria));

    if !options.is_empty() {
        sql.push(' ');
        sql.push_str(&order_limit_clause(options));
    }

    trace!(statement = %sql, "built delete sql");
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic() {
        let sql = build_count_sql("test", &["foo", "test"]);
        assert_eq!(sql, "SELECT COUNT(*) AS counter FROM test WHERE foo=? AND test=?");
    }

    #[test]
    fn test_count_without_criteria() {
        let sql = build_count_sql("test", &[]);
        assert_eq!(sql, "SELECT COUNT(*) AS counter FROM test WHERE 1");
    }

    #[test]
    fn test_find_basic() {
        let sql = build_find_sql("test", &["foo", "test"], &FindOptions::new());
        assert_eq!(sql, "SELECT * FROM test WHERE foo=? AND test=?");
    }

    #[test]
    fn test_find_with_all_modifiers() {
        let sql = build_find_sql(
            "test",
            &["foo"],
            &FindOptions::new()
                .projections(&["name", "age"])
                .order_by_asc("name")
                .limit(5)
                .offset(10),
        );
        assert_eq!(
            sql,
            "SELECT name,age FROM test WHERE foo=? ORDER BY name ASC LIMIT 5 OFFSET 10"
        );
    }

    #[test]
    fn test_find_offset_without_limit_is_dropped() {
        let sql = build_find_sql("test", &["foo"], &FindOptions::new().offset(10));
        assert_eq!(sql, "SELECT * FROM test WHERE foo=?");
    }

    #[test]
    fn test_insert_single_row() {
        let sql = build_insert_sql("test", &["name", "age"], 1).unwrap();
        assert_eq!(sql, "INSERT INTO test (name,age) VALUES (?,?)");
    }

    #[test]
    fn test_insert_multiple_rows() {
        let sql = build_insert_sql("test", &["name", "age"], 2).unwrap();
        assert_eq!(sql, "INSERT INTO test (name,age) VALUES (?,?),(?,?)");
    }

    #[test]
    fn test_insert_placeholder_arity_matches_fields() {
        let sql = build_insert_sql("test", &["a", "b", "c"], 4).unwrap();
        assert_eq!(sql.matches('?').count(), 12);
        assert_eq!(sql.matches("(?,?,?)").count(), 4);
    }

    #[test]
    fn test_insert_zero_rows_is_rejected() {
        let err = build_insert_sql("test", &["name"], 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_insert_without_fields_is_rejected() {
        let err = build_insert_sql("test", &[], 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_update_without_criteria() {
        let sql = build_update_sql("test", &["name"], &[], &OrderLimitOptions::new()).unwrap();
        assert_eq!(sql, "UPDATE test SET name=? WHERE 1");
    }

    #[test]
    fn test_update_with_criteria() {
        let sql = build_update_sql("test", &["name"], &["name", "age"], &OrderLimitOptions::new())
            .unwrap();
        assert_eq!(sql, "UPDATE test SET name=? WHERE name=? AND age=?");
    }

    #[test]
    fn test_update_with_sort_and_limit() {
        let sql = build_update_sql(
            "test",
            &["name", "age"],
            &["name", "address"],
            &OrderLimitOptions::new()
                .order_by_asc("name")
                .order_by_desc("age")
                .limit(2),
        )
        .unwrap();
        assert_eq!(
            sql,
            "UPDATE test SET name=?,age=? WHERE name=? AND address=? ORDER BY name ASC,age DESC LIMIT 2"
        );
    }

    #[test]
    fn test_update_without_set_columns_is_rejected() {
        let err = build_update_sql("test", &[], &["name"], &OrderLimitOptions::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_delete_basic() {
        let sql = build_delete_sql("test", &["name"], &OrderLimitOptions::new());
        assert_eq!(sql, "DELETE FROM test WHERE name=?");
    }

    #[test]
    fn test_delete_without_criteria_matches_all_rows() {
        let sql = build_delete_sql("test", &[], &OrderLimitOptions::new());
        assert_eq!(sql, "DELETE FROM test WHERE 1");
    }

    #[test]
    fn test_delete_with_sort_and_limit() {
        let sql = build_delete_sql(
            "test",
            &["name"],
            &OrderLimitOptions::new().order_by_asc("name").limit(2),
        );
        assert_eq!(sql, "DELETE FROM test WHERE name=? ORDER BY name ASC LIMIT 2");
    }

    #[test]
    fn test_builders_are_idempotent() {
        let opts = FindOptions::new().projections(&["a"]).limit(1);
        assert_eq!(
            build_find_sql("t", &["x"], &opts),
            build_find_sql("t", &["x"], &opts)
        );
        assert_eq!(
            build_insert_sql("t", &["a"], 3).unwrap(),
            build_insert_sql("t", &["a"], 3).unwrap()
        );
    }
}
