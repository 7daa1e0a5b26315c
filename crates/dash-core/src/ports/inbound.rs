//! Inbound Ports (Driving Ports / API)

use dash_types::{Group, WidgetCategory};

/// The surface the rendering layer consumes.
///
/// The dashboard represents its widgets in two manners: a global list of
/// all widgets (so a generic loader can instantiate any widget from one
/// integer) and a per-category list (used by the visibility switches).
/// Index queries are total: out-of-range input yields `Unknown`, `-1`,
/// or `false` instead of failing.
pub trait DashboardApi: Send + Sync {
    /// Title of the current decoded frame ("" when empty).
    fn title(&self) -> &str;

    /// Whether there is any widget to render.
    fn available(&self) -> bool;

    /// Whether the current decoded frame is valid and ready to use.
    fn frame_valid(&self) -> bool;

    /// Total number of widgets across all nine categories.
    fn total_count(&self) -> usize;

    /// Widget count for one category (zero for `Unknown`).
    fn count(&self, category: WidgetCategory) -> usize;

    /// Titles of all widgets in canonical category order.
    fn titles(&self) -> Vec<String>;

    /// Category of the widget at the given global index.
    fn category_of(&self, global_index: i64) -> WidgetCategory;

    /// Position of the widget within its own category, `-1` out of range.
    fn relative_index(&self, global_index: i64) -> i64;

    /// Icon identifier for the widget at the given global index.
    fn icon_for(&self, global_index: i64) -> &'static str;

    /// Whether the widget at the given global index is visible.
    fn widget_visible(&self, global_index: i64) -> bool;

    /// Visibility of one widget within its category.
    fn visible(&self, category: WidgetCategory, index: usize) -> bool;

    /// Borrow a group of the current frame by position.
    fn group(&self, index: usize) -> Option<&Group>;
}
