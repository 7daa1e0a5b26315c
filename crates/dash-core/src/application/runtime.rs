//! Event wiring for the dashboard service.
//!
//! The composition root constructs the service once, subscribes it to the
//! producer and scheduler topics, and hands both to `run`. There is no
//! ambient singleton: whoever needs the dashboard receives it explicitly.

use crate::application::service::DashboardService;
use dash_bus::{DashboardEvent, Subscription};
use tracing::info;

/// Dispatch one bus event to the service.
///
/// Scheduler ticks drive a recomputation pass; connection, source, and
/// frame-map changes reset the dashboard. Frame arrivals are announced on
/// the bus but travel through the frame slot, so they need no handling
/// here.
pub async fn handle_event(service: &mut DashboardService, event: &DashboardEvent) {
    match event {
        DashboardEvent::Tick => service.tick().await,
        event if event.is_reset_trigger() => service.reset().await,
        _ => {}
    }
}

/// Drive the service from a subscription until the bus closes.
///
/// The service is owned by this loop for its whole life, which is what
/// keeps all decoding, classification, and visibility mutation on a single
/// logical thread. Returns the service when the bus shuts down.
pub async fn run(mut service: DashboardService, mut events: Subscription) -> DashboardService {
    while let Some(event) = events.recv().await {
        handle_event(&mut service, &event).await;
    }

    info!("Event bus closed, dashboard loop stopping");
    service
}
