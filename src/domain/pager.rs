//! Shared pagination logic used by both list panes.
//!
//! The store only ever sees absolute indices; rendered row offsets are
//! translated with [`absolute_index`] before any mutation call.

/// Tasks shown per page
pub const PAGE_SIZE: usize = 6;

/// Maximum number of page buttons in the control bar
pub const PAGE_WINDOW: usize = 3;

/// Total pages for a list of `len` items. An empty list still reports one
/// page, so the UI always has a "page 1 of 1" to show.
pub fn total_pages(len: usize) -> usize {
    std::cmp::max(1, (len + PAGE_SIZE - 1) / PAGE_SIZE)
}

/// The slice of `seq` visible on a 1-based `page`, clamped to the sequence
/// bounds. Out-of-range pages degrade to an empty slice rather than panic.
pub fn visible_slice<T>(seq: &[T], page: usize) -> &[T] {
    let page = std::cmp::max(1, page);
    let start = std::cmp::min(seq.len(), (page - 1) * PAGE_SIZE);
    let end = std::cmp::min(seq.len(), page * PAGE_SIZE);
    &seq[start..end]
}

/// Translate a row offset within the visible slice to an absolute index
pub fn absolute_index(page: usize, row_offset: usize) -> usize {
    (std::cmp::max(1, page) - 1) * PAGE_SIZE + row_offset
}

/// The set of navigation controls to render for one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// Page numbers to show as buttons (at most PAGE_WINDOW, centered on the
    /// current page when possible)
    pub pages: Vec<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Compute the control set for `current` of `total` pages
pub fn page_controls(current: usize, total: usize) -> PageControls {
    let start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let end = std::cmp::min(total, start + PAGE_WINDOW - 1);

    PageControls {
        pages: (start..=end).collect(),
        prev_enabled: current > 1,
        next_enabled: current < total,
    }
}

/// Per-list pagination state. The only persistent piece is the current page;
/// everything else is derived per render.
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to `target`, silently clamped to `[1, total]`. Returns the new
    /// current page.
    pub fn paginate(&mut self, target: usize, total: usize) -> usize {
        self.current_page = target.clamp(1, std::cmp::max(1, total));
        self.current_page
    }

    /// Go one page back (clamped at 1)
    pub fn prev(&mut self, total: usize) -> usize {
        self.paginate(self.current_page.saturating_sub(1), total)
    }

    /// Go one page forward (clamped at the last page)
    pub fn next(&mut self, total: usize) -> usize {
        self.paginate(self.current_page + 1, total)
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_visible_slice_thirteen_items() {
        let seq: Vec<usize> = (0..13).collect();

        assert_eq!(total_pages(seq.len()), 3);
        assert_eq!(visible_slice(&seq, 1), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(visible_slice(&seq, 2), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(visible_slice(&seq, 3), &[12]);
    }

    #[test]
    fn test_visible_slice_out_of_range_page_is_empty() {
        let seq: Vec<usize> = (0..5).collect();
        assert!(visible_slice(&seq, 2).is_empty());
        assert!(visible_slice(&seq, 99).is_empty());
    }

    #[test]
    fn test_visible_slice_empty_sequence() {
        let seq: Vec<usize> = Vec::new();
        assert!(visible_slice(&seq, 1).is_empty());
    }

    #[test]
    fn test_absolute_index() {
        assert_eq!(absolute_index(1, 0), 0);
        assert_eq!(absolute_index(1, 5), 5);
        assert_eq!(absolute_index(2, 0), 6);
        assert_eq!(absolute_index(3, 2), 14);
    }

    #[test]
    fn test_paginate_clamps() {
        let mut pager = Pager::new();

        assert_eq!(pager.paginate(99, 3), 3);
        assert_eq!(pager.current_page(), 3);

        assert_eq!(pager.paginate(0, 3), 1);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_prev_next_clamp_at_bounds() {
        let mut pager = Pager::new();

        assert_eq!(pager.prev(3), 1); // already on page 1
        assert_eq!(pager.next(3), 2);
        assert_eq!(pager.next(3), 3);
        assert_eq!(pager.next(3), 3); // clamped at last page
    }

    #[test]
    fn test_page_controls_window() {
        // Middle of a 5-page list: window centered on current
        assert_eq!(
            page_controls(3, 5),
            PageControls {
                pages: vec![2, 3, 4],
                prev_enabled: true,
                next_enabled: true,
            }
        );

        // First page: window starts at 1, prev disabled
        assert_eq!(
            page_controls(1, 5),
            PageControls {
                pages: vec![1, 2, 3],
                prev_enabled: false,
                next_enabled: true,
            }
        );

        // Last page: window ends at total, next disabled
        assert_eq!(
            page_controls(5, 5),
            PageControls {
                pages: vec![4, 5],
                prev_enabled: true,
                next_enabled: false,
            }
        );
    }

    #[test]
    fn test_page_controls_single_page() {
        assert_eq!(
            page_controls(1, 1),
            PageControls {
                pages: vec![1],
                prev_enabled: false,
                next_enabled: false,
            }
        );
    }
}
