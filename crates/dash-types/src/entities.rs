//! # Decoded Frame Model
//!
//! The structured representation produced by the frame decoder: a `Frame`
//! holds ordered `Group`s, each holding ordered `Dataset`s. Enumeration
//! order is load-bearing — relative indices and visibility slots are
//! positional, so these types never reorder their children.
//!
//! The wire spelling uses single-letter keys (`t`, `g`, `w`, `d`); the
//! long-form names are accepted as aliases for hand-written documents.

use serde::{Deserialize, Serialize};

/// A single named value within a group, optionally flagged for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Display title of the dataset.
    #[serde(rename = "t", alias = "title", default)]
    pub title: String,
    /// Widget-type handle selecting the visualization category.
    #[serde(rename = "w", alias = "widget", default)]
    pub widget: String,
    /// Whether this dataset participates in the plot category.
    #[serde(rename = "g", alias = "graph", default)]
    pub graph: bool,
}

impl Dataset {
    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Widget-type handle (case preserved as received).
    #[must_use]
    pub fn widget(&self) -> &str {
        &self.widget
    }

    /// Whether the dataset is flagged for plotting.
    #[must_use]
    pub fn graph(&self) -> bool {
        self.graph
    }
}

/// A named collection of related datasets sharing a declared widget type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Display title of the group.
    #[serde(rename = "t", alias = "title", default)]
    pub title: String,
    /// Widget-type handle declared on the group itself.
    #[serde(rename = "w", alias = "widget", default)]
    pub widget: String,
    /// Ordered datasets, enumerated top to bottom.
    #[serde(rename = "d", alias = "datasets", default)]
    pub datasets: Vec<Dataset>,
}

impl Group {
    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Widget-type handle (case preserved as received).
    #[must_use]
    pub fn widget(&self) -> &str {
        &self.widget
    }

    /// Ordered datasets.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }
}

/// The decoded representation of one telemetry frame: a title plus
/// ordered groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Project/frame title shown in the dashboard header.
    #[serde(rename = "t", alias = "title", default)]
    pub title: String,
    /// Ordered groups, enumerated top to bottom.
    #[serde(rename = "g", alias = "groups", default)]
    pub groups: Vec<Group>,
}

impl Frame {
    /// Frame title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ordered groups.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups in the frame.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// A frame is valid once it carries a title and at least one group.
    /// The reset state (`Frame::default()`) is never valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.groups.is_empty()
    }
}
