//! Skip/take pagination parameters shared by every store backend.
//!
//! This module provides [`PagingInfo`] for specifying which slice of a result
//! set to return. Pages are 0-indexed and paging is a pure skip/take slice.

use serde::{Deserialize, Serialize};
use std::cmp::min;

/// Number of items per page when none is specified.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parameters for paginating through a result set.
///
/// Pages are 0-indexed (page 0 is the first page).
///
/// # Example
///
/// ```ignore
/// use restash_core::paging::PagingInfo;
///
/// let paging = PagingInfo::new(2, 50);
/// // Retrieves page 2 with 50 items per page.
/// assert_eq!(paging.offset(), 100);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingInfo {
    /// The page number (0-indexed).
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
}

impl PagingInfo {
    /// Creates new paging parameters.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Creates a new builder for constructing paging parameters.
    pub fn builder() -> PagingInfoBuilder {
        PagingInfoBuilder::new()
    }

    /// Calculates the number of items to skip for this page.
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Slices a vec of items down to this page.
    ///
    /// An empty input or a page beyond the end of the items yields an empty vec.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        if items.is_empty() || self.offset() >= items.len() {
            return Vec::new();
        }

        let end = min(self.offset() + self.page_size, items.len());
        items
            .into_iter()
            .take(end)
            .skip(self.offset())
            .collect()
    }
}

impl Default for PagingInfo {
    fn default() -> Self {
        Self { page: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

/// Builder for constructing [`PagingInfo`] instances.
///
/// Unset values fall back to the defaults (page 0, page size
/// [`DEFAULT_PAGE_SIZE`]).
pub struct PagingInfoBuilder {
    page: Option<usize>,
    page_size: Option<usize>,
}

impl PagingInfoBuilder {
    /// Creates a new builder with no parameters set.
    pub fn new() -> Self {
        Self { page: None, page_size: None }
    }

    /// Sets the page number (0-indexed).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of items per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Builds and returns the [`PagingInfo`].
    pub fn build(self) -> PagingInfo {
        PagingInfo {
            page: self.page.unwrap_or(0),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for PagingInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<i32> = (0..25).collect();
        let page = PagingInfo::new(1, 10).paginate(items);
        assert_eq!(page, (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_may_be_short() {
        let items: Vec<i32> = (0..25).collect();
        let page = PagingInfo::new(2, 10).paginate(items);
        assert_eq!(page, (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i32> = (0..5).collect();
        assert!(PagingInfo::new(3, 10).paginate(items).is_empty());
        assert!(PagingInfo::default().paginate(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn builder_falls_back_to_defaults() {
        let paging = PagingInfo::builder().with_page(4).build();
        assert_eq!(paging.page, 4);
        assert_eq!(paging.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(paging.offset(), 40);
    }
}
