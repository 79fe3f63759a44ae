mod pager;

pub use pager::{Pager, ROWS_PER_PAGE, TABLE_MAX_ROWS};
