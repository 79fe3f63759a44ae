//! Rowdb - A minimal in-memory single-table row store
//!
//! This crate provides the core of a tiny database: one fixed-schema table
//! backed by an array of lazily-allocated fixed-size pages, driven by a
//! line-oriented command interpreter. There is no persistence, no index and
//! no concurrency; rows are appended and scanned, never updated or deleted.
//!
//! # Architecture
//!
//! The system is organized into several layers:
//!
//! - **Row Codec** (`row`): Fixed-width binary layout of one record
//!   - `Row`: the (id, username, email) record and its byte codec
//!   - `layout`: field widths and precomputed byte offsets
//!
//! - **Storage** (`storage`): Page organization in memory
//!   - `Pager`: lazily-allocated fixed-size pages and the row slot locator
//!
//! - **Table** (`table`): Row count, capacity enforcement, append and scan
//!   - `Table`: owns the pager; `insert` appends, `scan` iterates
//!
//! - **SQL** (`sql`): The two supported statement shapes
//!   - `Statement`: parses `insert <id> <username> <email>` and `select`
//!   - `execute`: applies a statement to a table
//!
//! # Example
//!
//! ```rust
//! use rowdb::sql::{execute, Statement};
//! use rowdb::table::Table;
//!
//! let mut table = Table::new();
//!
//! let statement = Statement::prepare("insert 1 alice alice@example.com").unwrap();
//! execute(&statement, &mut table, |_| {}).unwrap();
//!
//! let select = Statement::prepare("select").unwrap();
//! execute(&select, &mut table, |row| println!("{row}")).unwrap();
//! ```

pub mod common;
pub mod row;
pub mod sql;
pub mod storage;
pub mod table;

// Re-export commonly used types at the crate root
pub use common::{DbError, PageId, Result};
pub use row::Row;
pub use storage::{ROWS_PER_PAGE, TABLE_MAX_ROWS};
pub use table::Table;
