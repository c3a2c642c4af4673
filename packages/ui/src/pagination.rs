//! Page arithmetic for client- and server-paged lists.
//!
//! Pages are 1-based here; the backend's `Pageable` is 0-based, so server calls pass
//! `current() - 1`.

use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    per_page: usize,
    current: usize,
}

impl Paginator {
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page: per_page.max(1),
            current: 1,
        }
    }

    /// Builder form of [`set_current`](Self::set_current).
    pub fn at(mut self, page: usize) -> Self {
        self.set_current(page);
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Never zero: an empty list still shows page 1 of 1.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    pub fn set_current(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages());
    }

    /// Change the item count and keep the current page in bounds.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.set_current(self.current);
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn next(&mut self) {
        self.set_current(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.set_current(self.current.saturating_sub(1));
    }

    /// Slice bounds of the current page within the full list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// Numbered page links shown at once, in groups of `size` (1-5, 6-10, ...).
    pub fn window(&self, size: usize) -> RangeInclusive<usize> {
        let size = size.max(1);
        let start = ((self.current - 1) / size) * size + 1;
        let end = (start + size - 1).min(self.total_pages());
        start..=end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let p = Paginator::new(0, 9);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.range(), 0..0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_next_and_prev_are_clamped() {
        let mut p = Paginator::new(20, 9);
        assert_eq!(p.total_pages(), 3);
        p.next();
        p.next();
        p.next();
        assert_eq!(p.current(), 3);
        assert_eq!(p.range(), 18..20);
        p.prev();
        p.prev();
        p.prev();
        assert_eq!(p.current(), 1);
        assert_eq!(p.range(), 0..9);
    }

    #[test]
    fn test_shrinking_list_pulls_page_back() {
        let mut p = Paginator::new(30, 10).at(3);
        p.set_total_items(11);
        assert_eq!(p.current(), 2);
        assert_eq!(p.range(), 10..11);
    }

    #[test]
    fn test_window_groups() {
        let p = Paginator::new(120, 10).at(7);
        assert_eq!(p.window(5), 6..=10);
        let p = Paginator::new(120, 10).at(12);
        assert_eq!(p.window(5), 11..=12);
        let p = Paginator::new(3, 10);
        assert_eq!(p.window(5), 1..=1);
    }

    #[test]
    fn test_zero_per_page_treated_as_one() {
        let p = Paginator::new(3, 0).at(99);
        assert_eq!(p.per_page(), 1);
        assert_eq!(p.current(), 3);
    }
}
