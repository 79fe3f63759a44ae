use crate::common::Result;
use crate::row::Row;
use crate::table::Table;

use super::Statement;

/// Executes a prepared statement against the table.
///
/// An insert appends the carried row; a select drains the table's scan,
/// handing each row to `on_row`. Row formatting stays with the caller.
pub fn execute<F>(statement: &Statement, table: &mut Table, mut on_row: F) -> Result<()>
where
    F: FnMut(&Row),
{
    match statement {
        Statement::Insert(row) => table.insert(row),
        Statement::Select => {
            for row in table.scan() {
                on_row(&row);
            }
            Ok(())
        }
    }
}
