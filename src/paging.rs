//! Paging envelope shared by every layer of the fetch pipeline.

use serde::{Deserialize, Serialize};

/// A single page of items plus its pagination metadata.
///
/// `current_page` is 1-based. `items` may be shorter than the page size
/// on the last page. Pages are immutable value objects with structural
/// equality; a fresh one is produced per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Item count available across all pages, as reported by the source.
    pub total: u32,
    /// The page index this envelope was fetched for.
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u32, current_page: u32) -> Self {
        Self {
            items,
            total,
            current_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_compare_structurally() {
        let a = Page::new(vec![1, 2, 3], 10, 1);
        let b = Page::new(vec![1, 2, 3], 10, 1);
        assert_eq!(a, b);
        assert_ne!(a, Page::new(vec![1, 2, 3], 10, 2));
    }

    #[test]
    fn short_last_page_is_valid() {
        let page = Page::new(vec![1], 21, 2);
        assert_eq!(page.len(), 1);
        assert!(!page.is_empty());
    }
}
