//! # Widget Categories
//!
//! The closed enumeration behind the global-index system. `CANONICAL_ORDER`
//! fixes the concatenation order of the nine category collections for the
//! lifetime of the system; every index walk and the titles list must agree
//! with it.

use serde::{Deserialize, Serialize};

/// Visualization category of a classified widget.
///
/// `Unknown` is the sentinel returned for unaddressable global indices; it
/// never owns a collection of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetCategory {
    /// Every group in the frame, regardless of its declared widget type.
    Group,
    /// Datasets flagged for plotting.
    Plot,
    /// Datasets with the `bar` handle.
    Bar,
    /// Datasets with the `gauge` handle.
    Gauge,
    /// Datasets with the `thermometer` handle.
    Thermometer,
    /// Datasets with the `compass` handle.
    Compass,
    /// Groups with the `gyro` handle.
    Gyroscope,
    /// Groups with the `accelerometer` handle.
    Accelerometer,
    /// Groups with the `map` handle.
    Map,
    /// Sentinel for out-of-range or negative global indices.
    Unknown,
}

impl WidgetCategory {
    /// Fixed concatenation order of the nine addressable categories.
    ///
    /// Warning: the index walks, the titles list, and the visibility
    /// matrix all assume this exact order. Never reorder.
    pub const CANONICAL_ORDER: [WidgetCategory; 9] = [
        WidgetCategory::Group,
        WidgetCategory::Plot,
        WidgetCategory::Bar,
        WidgetCategory::Gauge,
        WidgetCategory::Thermometer,
        WidgetCategory::Compass,
        WidgetCategory::Gyroscope,
        WidgetCategory::Accelerometer,
        WidgetCategory::Map,
    ];

    /// Position of this category in the canonical order, `None` for
    /// `Unknown`.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        Self::CANONICAL_ORDER.iter().position(|c| *c == self)
    }

    /// Icon identifier the renderer loads for widgets of this category.
    /// `Unknown` maps to the generic fallback.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            WidgetCategory::Group => "icons/group.svg",
            WidgetCategory::Plot => "icons/plot.svg",
            WidgetCategory::Bar => "icons/bar.svg",
            WidgetCategory::Gauge => "icons/gauge.svg",
            WidgetCategory::Thermometer => "icons/thermometer.svg",
            WidgetCategory::Compass => "icons/compass.svg",
            WidgetCategory::Gyroscope => "icons/gyroscope.svg",
            WidgetCategory::Accelerometer => "icons/accelerometer.svg",
            WidgetCategory::Map => "icons/map.svg",
            WidgetCategory::Unknown => "icons/close.svg",
        }
    }
}
