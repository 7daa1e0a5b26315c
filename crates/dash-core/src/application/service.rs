//! Dashboard Service
//!
//! Single-owner orchestrator for the recomputation state machine:
//! holds the current raw frame (via the shared `FrameSlot`), the most
//! recently decoded frame, the nine classified collections, and the
//! visibility matrix. Telemetry candidates may arrive from any thread;
//! everything else happens on the owner driven by scheduler ticks.

use crate::config::DashboardConfig;
use crate::domain::arbiter::FrameSlot;
use crate::domain::classifier::{classify, CategorizedWidgets};
use crate::domain::errors::DecodeError;
use crate::domain::index_space::GlobalIndexSpace;
use crate::domain::visibility::VisibilityMatrix;
use crate::ports::inbound::DashboardApi;
use crate::ports::outbound::FrameDecoder;
use dash_bus::{DashboardEvent, EventPublisher, InMemoryEventBus};
use dash_types::{Frame, Group, TelemetryFrame, WidgetCategory};
use std::sync::Arc;
use tracing::{debug, info};

/// Dashboard Service
///
/// Orchestrates one recomputation pass per scheduler tick:
/// 1. Snapshot the winning raw frame
/// 2. Decode (degrade on failure)
/// 3. Reclassify into the nine collections
/// 4. Rebuild visibility if any cardinality changed
/// 5. Publish notifications
pub struct DashboardService {
    config: DashboardConfig,
    slot: FrameSlot,
    latest_frame: Frame,
    widgets: CategorizedWidgets,
    visibility: VisibilityMatrix,
    decoder: Box<dyn FrameDecoder>,
    bus: Arc<InMemoryEventBus>,
}

impl DashboardService {
    /// Create a service with default config and its own event bus.
    pub fn new(decoder: Box<dyn FrameDecoder>) -> Self {
        Self::with_config(decoder, DashboardConfig::default())
    }

    /// Create a service with custom config and its own event bus.
    pub fn with_config(decoder: Box<dyn FrameDecoder>, config: DashboardConfig) -> Self {
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.bus_capacity));
        Self::with_bus(decoder, config, bus)
    }

    /// Create a service publishing on an existing bus.
    pub fn with_bus(
        decoder: Box<dyn FrameDecoder>,
        config: DashboardConfig,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        Self {
            config,
            slot: FrameSlot::new(),
            latest_frame: Frame::default(),
            widgets: CategorizedWidgets::new(),
            visibility: VisibilityMatrix::new(),
            decoder,
            bus,
        }
    }

    /// The event bus this service publishes notifications on.
    #[must_use]
    pub fn bus(&self) -> Arc<InMemoryEventBus> {
        self.bus.clone()
    }

    /// Clone of the frame hand-off slot for a telemetry producer.
    #[must_use]
    pub fn frame_slot(&self) -> FrameSlot {
        self.slot.clone()
    }

    // -------------------------------------------------------------------------
    // Frame data handling
    // -------------------------------------------------------------------------

    /// Feed a telemetry candidate to arbitration.
    ///
    /// Decoding is deferred to the next scheduler tick, never performed
    /// inline on arrival. Returns whether the candidate became current.
    pub async fn submit_frame(&self, candidate: TelemetryFrame) -> bool {
        let sequence_number = candidate.sequence_number;
        let accepted = self.slot.submit(candidate);
        if accepted {
            self.bus
                .publish(DashboardEvent::FrameReceived { sequence_number })
                .await;
        }
        accepted
    }

    /// Remove all data when the transport disconnects, the replay source
    /// changes, or the frame map is redefined.
    pub async fn reset(&mut self) {
        self.slot.reset();
        self.latest_frame = Frame::default();
        self.widgets.clear();
        self.visibility.clear();

        info!("Dashboard reset to empty state");

        self.bus.publish(DashboardEvent::DataUpdated).await;
        self.bus.publish(DashboardEvent::DataReset).await;
        self.bus
            .publish(DashboardEvent::TitleChanged {
                title: String::new(),
            })
            .await;
        self.bus
            .publish(DashboardEvent::WidgetCountChanged { total: 0 })
            .await;
        self.bus.publish(DashboardEvent::WidgetVisibilityChanged).await;
    }

    /// One recomputation pass: interpret the current raw frame and tell
    /// the rendering layer what changed.
    pub async fn tick(&mut self) {
        // Save the cardinality fingerprint and title from the prior tick
        let previous_counts = self.widgets.counts();
        let previous_title = self.latest_frame.title().to_string();

        // Clear widget data; a failed decode leaves the dashboard degraded
        // but consistent until the next valid tick
        self.widgets.clear();

        if let Err(error) = self.try_decode() {
            debug!(%error, "Telemetry decode failed, widget lists cleared");
            if self.config.clear_frame_on_decode_failure {
                self.latest_frame = Frame::default();
                self.visibility.clear();
            }
            return;
        }

        self.widgets = classify(&self.latest_frame);

        if self.latest_frame.title() != previous_title {
            self.bus
                .publish(DashboardEvent::TitleChanged {
                    title: self.latest_frame.title().to_string(),
                })
                .await;
        }

        if self.widgets.counts() != previous_counts {
            self.visibility.rebuild(&self.widgets);

            debug!(
                total = self.widgets.total(),
                "Widget cardinality changed, visibility matrix rebuilt"
            );

            self.bus
                .publish(DashboardEvent::WidgetCountChanged {
                    total: self.widgets.total(),
                })
                .await;
            self.bus.publish(DashboardEvent::WidgetVisibilityChanged).await;
        }

        self.bus.publish(DashboardEvent::DataUpdated).await;
    }

    /// Decode the current raw document. On success the decoded frame is
    /// replaced; on failure it is left untouched.
    fn try_decode(&mut self) -> Result<(), DecodeError> {
        let raw = self.slot.snapshot();
        if !raw.valid {
            return Err(DecodeError::EmptyDocument);
        }

        self.latest_frame = self.decoder.decode(raw.document())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Widget count access
    // -------------------------------------------------------------------------

    /// Current classified collections (for index-space consumers).
    #[must_use]
    pub fn widgets(&self) -> &CategorizedWidgets {
        &self.widgets
    }

    /// Number of group widgets.
    #[must_use] pub fn group_count(&self) -> usize { self.widgets.count(WidgetCategory::Group) }
    /// Number of plot widgets.
    #[must_use] pub fn plot_count(&self) -> usize { self.widgets.count(WidgetCategory::Plot) }
    /// Number of bar widgets.
    #[must_use] pub fn bar_count(&self) -> usize { self.widgets.count(WidgetCategory::Bar) }
    /// Number of gauge widgets.
    #[must_use] pub fn gauge_count(&self) -> usize { self.widgets.count(WidgetCategory::Gauge) }
    /// Number of thermometer widgets.
    #[must_use] pub fn thermometer_count(&self) -> usize { self.widgets.count(WidgetCategory::Thermometer) }
    /// Number of compass widgets.
    #[must_use] pub fn compass_count(&self) -> usize { self.widgets.count(WidgetCategory::Compass) }
    /// Number of gyroscope widgets.
    #[must_use] pub fn gyroscope_count(&self) -> usize { self.widgets.count(WidgetCategory::Gyroscope) }
    /// Number of accelerometer widgets.
    #[must_use] pub fn accelerometer_count(&self) -> usize { self.widgets.count(WidgetCategory::Accelerometer) }
    /// Number of map widgets.
    #[must_use] pub fn map_count(&self) -> usize { self.widgets.count(WidgetCategory::Map) }

    // -------------------------------------------------------------------------
    // Widget visibility access
    // -------------------------------------------------------------------------

    /// Write one visibility flag and notify the renderer if the index was
    /// in range. Out-of-range writes are silent no-ops.
    pub async fn set_visible(&mut self, category: WidgetCategory, index: usize, visible: bool) {
        if self.visibility.set(category, index, visible) {
            self.bus.publish(DashboardEvent::WidgetVisibilityChanged).await;
        }
    }

    /// Visibility of one group widget.
    #[must_use] pub fn group_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Group, i) }
    /// Visibility of one plot widget.
    #[must_use] pub fn plot_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Plot, i) }
    /// Visibility of one bar widget.
    #[must_use] pub fn bar_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Bar, i) }
    /// Visibility of one gauge widget.
    #[must_use] pub fn gauge_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Gauge, i) }
    /// Visibility of one thermometer widget.
    #[must_use] pub fn thermometer_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Thermometer, i) }
    /// Visibility of one compass widget.
    #[must_use] pub fn compass_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Compass, i) }
    /// Visibility of one gyroscope widget.
    #[must_use] pub fn gyroscope_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Gyroscope, i) }
    /// Visibility of one accelerometer widget.
    #[must_use] pub fn accelerometer_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Accelerometer, i) }
    /// Visibility of one map widget.
    #[must_use] pub fn map_visible(&self, i: usize) -> bool { self.visible(WidgetCategory::Map, i) }

    /// Set visibility of one group widget.
    pub async fn set_group_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Group, i, v).await }
    /// Set visibility of one plot widget.
    pub async fn set_plot_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Plot, i, v).await }
    /// Set visibility of one bar widget.
    pub async fn set_bar_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Bar, i, v).await }
    /// Set visibility of one gauge widget.
    pub async fn set_gauge_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Gauge, i, v).await }
    /// Set visibility of one thermometer widget.
    pub async fn set_thermometer_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Thermometer, i, v).await }
    /// Set visibility of one compass widget.
    pub async fn set_compass_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Compass, i, v).await }
    /// Set visibility of one gyroscope widget.
    pub async fn set_gyroscope_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Gyroscope, i, v).await }
    /// Set visibility of one accelerometer widget.
    pub async fn set_accelerometer_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Accelerometer, i, v).await }
    /// Set visibility of one map widget.
    pub async fn set_map_visible(&mut self, i: usize, v: bool) { self.set_visible(WidgetCategory::Map, i, v).await }
}

impl DashboardApi for DashboardService {
    fn title(&self) -> &str {
        self.latest_frame.title()
    }

    fn available(&self) -> bool {
        self.total_count() > 0
    }

    fn frame_valid(&self) -> bool {
        self.latest_frame.is_valid()
    }

    fn total_count(&self) -> usize {
        self.widgets.total()
    }

    fn count(&self, category: WidgetCategory) -> usize {
        self.widgets.count(category)
    }

    fn titles(&self) -> Vec<String> {
        GlobalIndexSpace::new(&self.widgets).titles()
    }

    fn category_of(&self, global_index: i64) -> WidgetCategory {
        GlobalIndexSpace::new(&self.widgets).category_of(global_index)
    }

    fn relative_index(&self, global_index: i64) -> i64 {
        GlobalIndexSpace::new(&self.widgets).relative_index(global_index)
    }

    fn icon_for(&self, global_index: i64) -> &'static str {
        GlobalIndexSpace::new(&self.widgets).icon_for(global_index)
    }

    fn widget_visible(&self, global_index: i64) -> bool {
        GlobalIndexSpace::new(&self.widgets).visible(global_index, &self.visibility)
    }

    fn visible(&self, category: WidgetCategory, index: usize) -> bool {
        self.visibility.get(category, index)
    }

    fn group(&self, index: usize) -> Option<&Group> {
        self.latest_frame.groups().get(index)
    }
}
