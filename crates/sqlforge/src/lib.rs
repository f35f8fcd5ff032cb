//! # sqlforge
//!
//! A parameterized SQL statement assembler.
//!
//! ## Features
//!
//! - **Text only**: builds statement strings with positional `?`
//!   placeholders; there is no driver, no connection, no execution
//! - **Injection-safe by construction**: values are never interpolated —
//!   callers bind them by position in the order the placeholders were
//!   emitted
//! - **Order-preserving**: criteria, projections, SET columns and sort
//!   entries render in exactly the order they were given, keeping the
//!   placeholder/bind alignment structural
//! - **Flat equality predicates**: WHERE clauses are `column=?`
//!   conjunctions; empty criteria degrade to the always-true `WHERE 1`
//!
//! ## Usage
//!
//! ```
//! use sqlforge::{FindOptions, OrderLimitOptions, build_find_sql, build_insert_sql,
//!                build_update_sql};
//!
//! // SELECT
//! let sql = build_find_sql(
//!     "users",
//!     &["status"],
//!     &FindOptions::new()
//!         .projections(&["id", "name"])
//!         .order_by_desc("created_at")
//!         .limit(10),
//! );
//! assert_eq!(sql, "SELECT id,name FROM users WHERE status=? ORDER BY created_at DESC LIMIT 10");
//!
//! // INSERT, two rows
//! let sql = build_insert_sql("users", &["name", "email"], 2)?;
//! assert_eq!(sql, "INSERT INTO users (name,email) VALUES (?,?),(?,?)");
//!
//! // UPDATE: bind SET values first, then criteria values
//! let sql = build_update_sql("users", &["status"], &["id"], &OrderLimitOptions::new())?;
//! assert_eq!(sql, "UPDATE users SET status=? WHERE id=?");
//! # Ok::<(), sqlforge::SqlError>(())
//! ```

pub mod clause;
pub mod error;
pub mod stmt;

pub use clause::{OrderLimitOptions, SortDir, order_limit_clause, where_clause};
pub use error::{SqlError, SqlResult};
pub use stmt::{
    FindOptions, build_count_sql, build_delete_sql, build_find_sql, build_insert_sql,
    build_update_sql,
};
