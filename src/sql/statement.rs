use crate::common::{DbError, Result};
use crate::row::Row;

/// A parsed statement, ready to be executed against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Insert the carried row at the end of the table
    Insert(Row),

    /// Scan the whole table
    Select,
}

impl Statement {
    /// Parses one input line into a statement.
    ///
    /// Lines are handled one at a time with no state carried between calls:
    /// a line whose first token is `insert` must carry exactly three
    /// arguments (`insert <id> <username> <email>`), the line `select`
    /// stands alone, and anything else is unrecognized.
    pub fn prepare(line: &str) -> Result<Statement> {
        if line == "select" {
            return Ok(Statement::Select);
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("insert") => Self::prepare_insert(tokens),
            _ => Err(DbError::UnrecognizedStatement(line.to_string())),
        }
    }

    fn prepare_insert<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<Statement> {
        let id = args.next().ok_or(DbError::Syntax)?;
        let username = args.next().ok_or(DbError::Syntax)?;
        let email = args.next().ok_or(DbError::Syntax)?;
        if args.next().is_some() {
            return Err(DbError::Syntax);
        }

        if id.starts_with('-') {
            return Err(DbError::NegativeId);
        }
        let id: u32 = id.parse().map_err(|_| DbError::Syntax)?;

        let row = Row::new(id, username, email)?;
        Ok(Statement::Insert(row))
    }
}
