mod executor;
mod statement;

pub use executor::execute;
pub use statement::Statement;
