//! # Widget Classification
//!
//! Derives the nine ordered widget collections from a decoded frame.
//! Some categories operate at group granularity (one widget needs several
//! coordinated values), others at dataset granularity (one value each).
//! Within a category, output order equals the order the matching entities
//! appear when the frame's groups and datasets are enumerated top to
//! bottom — relative indices and visibility slots are positional.

use dash_types::{Frame, WidgetCategory};
use serde::{Deserialize, Serialize};

/// Group-level widget handles.
const MAP_HANDLE: &str = "map";
const GYRO_HANDLE: &str = "gyro";
const ACCELEROMETER_HANDLE: &str = "accelerometer";

/// Dataset-level widget handles.
const BAR_HANDLE: &str = "bar";
const GAUGE_HANDLE: &str = "gauge";
const COMPASS_HANDLE: &str = "compass";
const THERMOMETER_HANDLE: &str = "thermometer";

/// Where a classified widget came from in the source frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetSource {
    /// A whole group, addressed by its position in the frame.
    Group {
        /// Group position in the frame.
        group: usize,
    },
    /// A single dataset, addressed by group and dataset positions.
    Dataset {
        /// Group position in the frame.
        group: usize,
        /// Dataset position within the group.
        dataset: usize,
    },
}

/// One classified widget: its display title plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRef {
    /// Display title shown by the renderer.
    pub title: String,
    /// Source entity in the frame.
    pub source: WidgetSource,
}

/// The nine ordered widget collections, one per addressable category.
///
/// Stored as a struct-of-arrays record indexed by canonical slot; a
/// category's widget sequence and its visibility sequence always have
/// equal length after a rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedWidgets {
    slots: [Vec<WidgetRef>; 9],
}

impl CategorizedWidgets {
    /// Empty collections for all nine categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget to a category's collection. `Unknown` is ignored.
    pub fn push(&mut self, category: WidgetCategory, widget: WidgetRef) {
        if let Some(slot) = category.slot() {
            self.slots[slot].push(widget);
        }
    }

    /// Widgets of one category, in source enumeration order. `Unknown`
    /// has no collection and yields the empty slice.
    #[must_use]
    pub fn get(&self, category: WidgetCategory) -> &[WidgetRef] {
        category
            .slot()
            .map(|slot| self.slots[slot].as_slice())
            .unwrap_or(&[])
    }

    /// Count for one category (zero for `Unknown`).
    #[must_use]
    pub fn count(&self, category: WidgetCategory) -> usize {
        self.get(category).len()
    }

    /// All nine counts in canonical order; the cardinality fingerprint
    /// the tick compares to decide whether to rebuild visibility.
    #[must_use]
    pub fn counts(&self) -> [usize; 9] {
        let mut counts = [0; 9];
        for (count, slot) in counts.iter_mut().zip(self.slots.iter()) {
            *count = slot.len();
        }
        counts
    }

    /// Sum of all nine counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Clear all nine collections.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Whether every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// Derive the nine collections from a decoded frame.
///
/// A widget whose handle matches no category rule is simply absent from
/// every collection — unaddressable, not an error.
#[must_use]
pub fn classify(frame: &Frame) -> CategorizedWidgets {
    let mut widgets = CategorizedWidgets::new();

    for (group_index, group) in frame.groups().iter().enumerate() {
        let source = WidgetSource::Group { group: group_index };
        let group_ref = || WidgetRef {
            title: group.title().to_string(),
            source,
        };

        // Every group, regardless of its declared widget type
        widgets.push(WidgetCategory::Group, group_ref());

        if let Some(category) = group_category(group.widget()) {
            widgets.push(category, group_ref());
        }

        for (dataset_index, dataset) in group.datasets().iter().enumerate() {
            let dataset_ref = || WidgetRef {
                title: dataset.title().to_string(),
                source: WidgetSource::Dataset {
                    group: group_index,
                    dataset: dataset_index,
                },
            };

            if dataset.graph() {
                widgets.push(WidgetCategory::Plot, dataset_ref());
            }

            if let Some(category) = dataset_category(dataset.widget()) {
                widgets.push(category, dataset_ref());
            }
        }
    }

    widgets
}

/// Category selected by a group-level handle, if any.
fn group_category(handle: &str) -> Option<WidgetCategory> {
    if handle.eq_ignore_ascii_case(MAP_HANDLE) {
        Some(WidgetCategory::Map)
    } else if handle.eq_ignore_ascii_case(GYRO_HANDLE) {
        Some(WidgetCategory::Gyroscope)
    } else if handle.eq_ignore_ascii_case(ACCELEROMETER_HANDLE) {
        Some(WidgetCategory::Accelerometer)
    } else {
        None
    }
}

/// Category selected by a dataset-level handle, if any.
fn dataset_category(handle: &str) -> Option<WidgetCategory> {
    if handle.eq_ignore_ascii_case(BAR_HANDLE) {
        Some(WidgetCategory::Bar)
    } else if handle.eq_ignore_ascii_case(GAUGE_HANDLE) {
        Some(WidgetCategory::Gauge)
    } else if handle.eq_ignore_ascii_case(COMPASS_HANDLE) {
        Some(WidgetCategory::Compass)
    } else if handle.eq_ignore_ascii_case(THERMOMETER_HANDLE) {
        Some(WidgetCategory::Thermometer)
    } else {
        None
    }
}
