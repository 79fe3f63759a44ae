/// Size of a page in bytes (4 KB)
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may allocate
pub const TABLE_MAX_PAGES: usize = 100;
