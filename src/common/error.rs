use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("syntax error in statement")]
    Syntax,

    #[error("unrecognized statement: {0}")]
    UnrecognizedStatement(String),

    #[error("table is full")]
    TableFull,

    #[error("string value for {column} exceeds the column width")]
    StringTooLong { column: &'static str },

    #[error("id must be positive")]
    NegativeId,
}

pub type Result<T> = std::result::Result<T, DbError>;
