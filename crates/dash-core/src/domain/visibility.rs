//! # Visibility Matrix
//!
//! One boolean per classified widget, organized by category. The matrix
//! persists across ticks; it is rebuilt in full only when a category's
//! cardinality changes, and every new entry defaults to visible.

use crate::domain::classifier::CategorizedWidgets;
use dash_types::WidgetCategory;

/// Per-category visibility flags, indexed by canonical slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMatrix {
    slots: [Vec<bool>; 9],
}

impl VisibilityMatrix {
    /// Empty matrix for all nine categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility of one widget. Out-of-range indices and `Unknown` read
    /// as `false` — a defensive default, not an error.
    #[must_use]
    pub fn get(&self, category: WidgetCategory, index: usize) -> bool {
        category
            .slot()
            .and_then(|slot| self.slots[slot].get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Write one visibility flag.
    ///
    /// Returns `true` if the write happened (the caller raises the
    /// visibility-changed notification on that). Out-of-range indices and
    /// `Unknown` are silent no-ops.
    pub fn set(&mut self, category: WidgetCategory, index: usize, visible: bool) -> bool {
        let Some(slot) = category.slot() else {
            return false;
        };
        match self.slots[slot].get_mut(index) {
            Some(entry) => {
                *entry = visible;
                true
            }
            None => false,
        }
    }

    /// Discard the whole matrix and repopulate each category with `true`
    /// for every position implied by the just-computed collections.
    pub fn rebuild(&mut self, widgets: &CategorizedWidgets) {
        for (slot, category) in WidgetCategory::CANONICAL_ORDER.iter().enumerate() {
            self.slots[slot].clear();
            self.slots[slot].resize(widgets.count(*category), true);
        }
    }

    /// Empty all nine sequences.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Number of tracked widgets for one category (zero for `Unknown`).
    #[must_use]
    pub fn count(&self, category: WidgetCategory) -> usize {
        category.slot().map(|slot| self.slots[slot].len()).unwrap_or(0)
    }

    /// Whether every sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}
