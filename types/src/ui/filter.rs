//! Portfolio category filter.

/// Filter value that shows every item.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVisibility {
    Show,
    Hide,
}

impl ItemVisibility {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

/// Row of filter buttons; exactly one is active at a time.
#[derive(Debug, Clone)]
pub struct PortfolioFilter {
    filters: Vec<String>,
    active: usize,
}

impl PortfolioFilter {
    /// Buttons in display order, each with its `data-filter` value. The first
    /// button starts active.
    #[must_use]
    pub fn new(filters: Vec<String>) -> Self {
        Self { filters, active: 0 }
    }

    /// Activate button `index`. Out-of-range indices leave the filter unchanged.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.filters.len() {
            return None;
        }
        self.active = index;
        self.active_filter()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filters.get(self.active).map(String::as_str)
    }

    /// Visibility of an item with the given `data-category`.
    #[must_use]
    pub fn visibility(&self, category: &str) -> ItemVisibility {
        match self.active_filter() {
            None | Some(FILTER_ALL) => ItemVisibility::Show,
            Some(filter) if filter == category => ItemVisibility::Show,
            Some(_) => ItemVisibility::Hide,
        }
    }
}
