//! # Global Index Space
//!
//! Flattens the nine ordered category collections into one addressable
//! sequence using the canonical order, so a generic renderer can load any
//! widget by a single integer without per-type code.
//!
//! Every query is a total function: negative or past-the-end indices
//! resolve to the defined sentinels (`Unknown`, `-1`, the fallback icon)
//! instead of failing.

use crate::domain::classifier::CategorizedWidgets;
use crate::domain::visibility::VisibilityMatrix;
use dash_types::WidgetCategory;

/// Borrowing view over the current collections that serves all
/// global-index arithmetic.
pub struct GlobalIndexSpace<'a> {
    widgets: &'a CategorizedWidgets,
}

impl<'a> GlobalIndexSpace<'a> {
    /// View over the given collections.
    #[must_use]
    pub fn new(widgets: &'a CategorizedWidgets) -> Self {
        Self { widgets }
    }

    /// Total number of widgets across all nine categories.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.widgets.total()
    }

    /// Titles of all widgets, concatenated in canonical category order.
    ///
    /// Warning: must walk categories in the same order as the index
    /// queries below, or relative indices stop lining up.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        let mut titles = Vec::with_capacity(self.total_count());
        for category in WidgetCategory::CANONICAL_ORDER {
            titles.extend(
                self.widgets
                    .get(category)
                    .iter()
                    .map(|widget| widget.title.clone()),
            );
        }
        titles
    }

    /// Category of the widget at `global_index`, `Unknown` when the index
    /// is negative or past the end.
    #[must_use]
    pub fn category_of(&self, global_index: i64) -> WidgetCategory {
        match self.resolve(global_index) {
            Some((category, _)) => category,
            None => WidgetCategory::Unknown,
        }
    }

    /// Position of the widget within its own category, `-1` when the
    /// index is negative or past the end.
    #[must_use]
    pub fn relative_index(&self, global_index: i64) -> i64 {
        match self.resolve(global_index) {
            Some((_, relative)) => relative as i64,
            None => -1,
        }
    }

    /// Icon identifier for the widget at `global_index`; the generic
    /// fallback for unaddressable indices.
    #[must_use]
    pub fn icon_for(&self, global_index: i64) -> &'static str {
        self.category_of(global_index).icon()
    }

    /// Whether the widget at `global_index` is currently visible.
    /// Unaddressable indices are never visible.
    #[must_use]
    pub fn visible(&self, global_index: i64, visibility: &VisibilityMatrix) -> bool {
        match self.resolve(global_index) {
            Some((category, relative)) => visibility.get(category, relative),
            None => false,
        }
    }

    /// The canonical subtraction walk: peel each category's count off the
    /// running remainder until it lands inside one.
    fn resolve(&self, global_index: i64) -> Option<(WidgetCategory, usize)> {
        if global_index < 0 {
            return None;
        }

        let mut remainder = global_index as usize;
        for category in WidgetCategory::CANONICAL_ORDER {
            let count = self.widgets.count(category);
            if remainder < count {
                return Some((category, remainder));
            }
            remainder -= count;
        }

        None
    }
}
