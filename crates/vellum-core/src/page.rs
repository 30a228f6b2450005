//! Pagination types.

use std::any::Any;

use crate::error::{Error, InvalidInputError};
use crate::single_model::ModelType;
use crate::types::ResourcePath;

/// One page of a collection, as handed to the page writer.
///
/// Immutable once constructed. `page_number` is 1-based; `total_count` is
/// the size of the whole collection, not of this page.
///
/// # Example
///
/// ```
/// use vellum_core::Page;
///
/// let page = Page::new(vec!["a", "b"], 7, 2, 2).unwrap();
/// assert!(page.has_next());
/// assert!(page.has_previous());
/// assert_eq!(page.last_page_number(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Page<T> {
    items: Vec<T>,
    total_count: usize,
    page_number: usize,
    items_per_page: usize,
    path: Option<ResourcePath>,
    model_type: ModelType,
}

impl<T: Any> Page<T> {
    /// Create a page of a root collection.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_number` or `items_per_page` is zero.
    pub fn new(
        items: Vec<T>,
        total_count: usize,
        page_number: usize,
        items_per_page: usize,
    ) -> Result<Self, Error> {
        if page_number == 0 {
            return Err(InvalidInputError::Pagination {
                reason: "page_number is 1-based and must be positive".to_string(),
            }
            .into());
        }

        if items_per_page == 0 {
            return Err(InvalidInputError::Pagination {
                reason: "items_per_page must be positive".to_string(),
            }
            .into());
        }

        Ok(Self {
            items,
            total_count,
            page_number,
            items_per_page,
            path: None,
            model_type: ModelType::of::<T>(),
        })
    }

    /// Tag this page as a nested collection under `path`.
    pub fn with_path(mut self, path: ResourcePath) -> Self {
        self.path = Some(path);
        self
    }

    /// The items on this page, in page order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items in the whole collection.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The 1-based number of this page.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// The nominal page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The parent resource path for nested collections.
    pub fn path(&self) -> Option<&ResourcePath> {
        self.path.as_ref()
    }

    /// The runtime descriptor of the item type.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// The number of the last page; at least 1, even when empty.
    pub fn last_page_number(&self) -> usize {
        self.total_count.div_ceil(self.items_per_page).max(1)
    }

    /// True if a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page_number < self.last_page_number()
    }

    /// True if a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    /// A snapshot of the pagination facts, decoupled from the item type.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total_count: self.total_count,
            item_count: self.items.len(),
            page_number: self.page_number,
            items_per_page: self.items_per_page,
            last_page_number: self.last_page_number(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

/// Pagination facts consumed by mappers and URL builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Total number of items in the whole collection.
    pub total_count: usize,
    /// Nominal number of items on this page, before any skips.
    pub item_count: usize,
    /// The 1-based page number.
    pub page_number: usize,
    /// The nominal page size.
    pub items_per_page: usize,
    /// The number of the last page.
    pub last_page_number: usize,
    /// True if a page follows this one.
    pub has_next: bool,
    /// True if a page precedes this one.
    pub has_previous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 7, 1, 3).unwrap();
        assert_eq!(page.last_page_number(), 3);
    }

    #[test]
    fn empty_collection_has_one_page() {
        let page = Page::<i32>::new(vec![], 0, 1, 10).unwrap();
        assert_eq!(page.last_page_number(), 1);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let page = Page::new(vec![4, 5, 6], 9, 2, 3).unwrap();
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn invalid_zero_page_number() {
        assert!(Page::new(vec![1], 1, 0, 10).is_err());
    }

    #[test]
    fn invalid_zero_page_size() {
        assert!(Page::new(vec![1], 1, 1, 0).is_err());
    }

    #[test]
    fn meta_snapshot() {
        let page = Page::new(vec!["a", "b"], 7, 2, 2).unwrap();
        let meta = page.meta();
        assert_eq!(meta.total_count, 7);
        assert_eq!(meta.item_count, 2);
        assert_eq!(meta.page_number, 2);
        assert_eq!(meta.last_page_number, 4);
        assert!(meta.has_next);
        assert!(meta.has_previous);
    }
}
