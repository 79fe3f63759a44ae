use bytes::BytesMut;

use crate::common::{PageId, PAGE_SIZE, TABLE_MAX_PAGES};
use crate::row::ROW_SIZE;

/// Number of whole rows that fit in one page; trailing bytes stay unused
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

/// Maximum number of rows the table can hold
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

/// Pager owns the table's pages and locates the byte slot for any logical
/// row number.
///
/// Pages live in a fixed-length array of optional buffers: a slot is `None`
/// until the first row mapping into that page is written, at which point a
/// zeroed `PAGE_SIZE` buffer is allocated. Pages are never freed
/// individually; dropping the pager releases them all.
///
/// The pager does not check row numbers against the table's capacity —
/// that is the caller's responsibility before asking for a slot.
pub struct Pager {
    pages: Vec<Option<BytesMut>>,
}

impl Pager {
    /// Creates a pager with every page slot empty.
    pub fn new() -> Self {
        Self {
            pages: vec![None; TABLE_MAX_PAGES],
        }
    }

    /// Returns the page holding the given logical row number.
    pub fn page_of(row: usize) -> PageId {
        PageId::new((row / ROWS_PER_PAGE) as u32)
    }

    /// Returns the byte offset of the row's slot within its page.
    fn slot_offset(row: usize) -> usize {
        (row % ROWS_PER_PAGE) * ROW_SIZE
    }

    /// Returns the writable slot for a logical row number, allocating the
    /// page on first access.
    ///
    /// Freshly allocated pages are zero-filled; the caller must still write
    /// a row before reading the slot back.
    pub fn slot_mut(&mut self, row: usize) -> &mut [u8] {
        let page = self.pages[Self::page_of(row).as_usize()]
            .get_or_insert_with(|| BytesMut::zeroed(PAGE_SIZE));
        let offset = Self::slot_offset(row);
        &mut page[offset..offset + ROW_SIZE]
    }

    /// Returns the read-only slot for a logical row number, or `None` if
    /// the row's page was never allocated.
    pub fn slot(&self, row: usize) -> Option<&[u8]> {
        let page = self.pages.get(Self::page_of(row).as_usize())?.as_ref()?;
        let offset = Self::slot_offset(row);
        Some(&page[offset..offset + ROW_SIZE])
    }

    /// Returns the number of pages allocated so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
