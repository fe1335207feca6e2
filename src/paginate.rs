//! "Load more" pagination over a fixed list.

/// Reveals a growing prefix of a list, one page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    pages_shown: usize,
}

impl Paginator {
    /// Create a paginator showing the first page.
    ///
    /// # Arguments
    /// * `page_size` - Items revealed per page (0 is treated as 1)
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages_shown: 1,
        }
    }

    /// Number of items requested so far, ignoring list length.
    fn requested(&self) -> usize {
        self.page_size.saturating_mul(self.pages_shown)
    }

    /// Number of items visible for a list of `len` items.
    pub fn visible_len(&self, len: usize) -> usize {
        self.requested().min(len)
    }

    /// Visible prefix of `records`.
    ///
    /// # Returns
    /// * `&[T]` - `records[0 .. min(page_size * pages_shown, len)]`
    pub fn visible_prefix<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        &records[..self.visible_len(records.len())]
    }

    /// Whether more items remain hidden.
    pub fn has_more(&self, len: usize) -> bool {
        self.requested() < len
    }

    /// Reveal one more page.
    ///
    /// # Details
    /// Once the list is exhausted, further calls leave the visible prefix
    /// unchanged.
    pub fn load_more(&mut self) {
        self.pages_shown = self.pages_shown.saturating_add(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_paginator_recent_questions_scenario() {
        let records = fixtures::recent_questions();
        let mut paginator = Paginator::new(5);

        let visible = paginator.visible_prefix(&records);
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[4].id, "5");
        assert!(paginator.has_more(records.len()));

        paginator.load_more();
        let visible = paginator.visible_prefix(&records);
        assert_eq!(visible.len(), 10);
        assert_eq!(visible[9].id, "10");
        assert!(!paginator.has_more(records.len()));

        paginator.load_more();
        assert_eq!(paginator.visible_prefix(&records).len(), 10);
        assert!(!paginator.has_more(records.len()));
    }

    #[test]
    fn test_paginator_length_formula() {
        for len in 0..13usize {
            let items: Vec<usize> = (0..len).collect();
            for page_size in 1..4usize {
                let mut paginator = Paginator::new(page_size);
                for pages in 1..6usize {
                    let expected = (page_size * pages).min(len);
                    assert_eq!(paginator.visible_prefix(&items).len(), expected);
                    assert_eq!(paginator.has_more(len), expected < len);
                    paginator.load_more();
                }
            }
        }
    }

    #[test]
    fn test_paginator_zero_page_size_is_clamped() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.visible_len(3), 1);
    }

    #[test]
    fn test_paginator_empty_list() {
        let paginator = Paginator::new(5);
        let empty: Vec<u8> = Vec::new();
        assert!(paginator.visible_prefix(&empty).is_empty());
        assert!(!paginator.has_more(0));
    }
}
