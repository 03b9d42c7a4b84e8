//! Previous/next navigation over a paged listing.

use serde::Serialize;

/// Zero-based current page over `total_pages` pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    current: u32,
    total_pages: u32,
}

impl Pager {
    /// A total of 0 pages is treated as a single empty page.
    #[must_use]
    pub const fn new(current: u32, total_pages: u32) -> Self {
        let total_pages = if total_pages == 0 { 1 } else { total_pages };
        let current = if current >= total_pages {
            total_pages - 1
        } else {
            current
        };
        Self {
            current,
            total_pages,
        }
    }

    #[must_use]
    pub const fn current(self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn total_pages(self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn has_previous(self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub const fn has_next(self) -> bool {
        self.current + 1 < self.total_pages
    }

    /// Advance one page. Returns `false` at the last page.
    pub const fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns `false` at the first page.
    pub const fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// One-based label, e.g. `"Page 1 of 3"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Page {} of {}", self.current + 1, self.total_pages)
    }
}
