mod table;

pub use table::{Scan, Table};
