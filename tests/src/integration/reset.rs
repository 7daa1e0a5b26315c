//! Reset triggers and degraded-tick recovery.

#[cfg(test)]
mod tests {
    use crate::integration::{fresh_service, sensor_document};
    use dash_bus::{DashboardEvent, EventFilter, EventTopic, EventPublisher, InMemoryEventBus};
    use dash_core::{handle_event, DashboardApi, DashboardConfig, DashboardService, JsonFrameDecoder};
    use dash_types::{TelemetryFrame, WidgetCategory};
    use serde_json::json;
    use std::sync::Arc;

    async fn populated_service() -> DashboardService {
        let mut service = fresh_service();
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;
        service
    }

    #[tokio::test]
    async fn reset_clears_every_collection() {
        let mut service = populated_service().await;
        assert!(service.available());

        service.reset().await;

        assert_eq!(service.total_count(), 0);
        assert_eq!(service.title(), "");
        assert!(!service.frame_valid());
        assert!(!service.available());
        assert!(service.titles().is_empty());
        for category in WidgetCategory::CANONICAL_ORDER {
            assert_eq!(service.count(category), 0);
            assert!(!service.visible(category, 0));
        }
    }

    #[tokio::test]
    async fn reset_raises_all_five_notifications() {
        let mut service = populated_service().await;
        let mut renderer = service
            .bus()
            .subscribe(EventFilter::topics(vec![EventTopic::Dashboard]));

        service.reset().await;

        let mut events = Vec::new();
        while let Ok(Some(event)) = renderer.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], DashboardEvent::DataUpdated));
        assert!(matches!(events[1], DashboardEvent::DataReset));
        assert!(matches!(events[2], DashboardEvent::TitleChanged { .. }));
        assert!(matches!(
            events[3],
            DashboardEvent::WidgetCountChanged { total: 0 }
        ));
        assert!(matches!(events[4], DashboardEvent::WidgetVisibilityChanged));
    }

    #[tokio::test]
    async fn producer_events_reset_through_dispatch() {
        for trigger in [
            DashboardEvent::ConnectionChanged { connected: false },
            DashboardEvent::SourceChanged,
            DashboardEvent::FrameMapChanged,
        ] {
            let mut service = populated_service().await;
            handle_event(&mut service, &trigger).await;
            assert_eq!(service.total_count(), 0, "trigger {trigger:?}");
        }
    }

    #[tokio::test]
    async fn run_loop_wires_scheduler_and_producers() {
        // Input bus owned by the composition root; the service publishes
        // its notifications on its own bus
        let input_bus = Arc::new(InMemoryEventBus::new());
        let service = fresh_service();
        let notifications = service.bus();
        let slot = service.frame_slot();

        // Subscribe the dashboard loop, queue the session, then close the
        // input side so the loop drains and returns
        let events = input_bus.subscribe(EventFilter::topics(vec![
            EventTopic::Producer,
            EventTopic::Scheduler,
        ]));
        slot.submit(TelemetryFrame::new(1, sensor_document()));
        input_bus.publish(DashboardEvent::Tick).await;
        input_bus.publish(DashboardEvent::Tick).await;
        drop(input_bus);

        let mut renderer = notifications.subscribe(EventFilter::topics(vec![EventTopic::Dashboard]));
        let service = dash_core::run(service, events).await;

        // Two ticks over one frame: populated once, second tick idempotent
        assert_eq!(service.total_count(), 8);
        assert!(service.available());

        let mut count_changes = 0;
        while let Ok(Some(event)) = renderer.try_recv() {
            if matches!(event, DashboardEvent::WidgetCountChanged { .. }) {
                count_changes += 1;
            }
        }
        assert_eq!(count_changes, 1);
    }

    #[tokio::test]
    async fn degraded_tick_keeps_stale_title_by_default() {
        let mut service = populated_service().await;

        service
            .submit_frame(TelemetryFrame::new(2, json!([])))
            .await;
        service.tick().await;

        assert_eq!(service.total_count(), 0);
        assert_eq!(service.title(), "CanSat");
        assert!(service.frame_valid());
    }

    #[tokio::test]
    async fn degraded_tick_clears_frame_when_configured() {
        let config = DashboardConfig {
            clear_frame_on_decode_failure: true,
            ..Default::default()
        };
        let mut service =
            DashboardService::with_config(Box::new(JsonFrameDecoder::new()), config);
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;

        service
            .submit_frame(TelemetryFrame::new(2, json!([])))
            .await;
        service.tick().await;

        assert_eq!(service.title(), "");
        assert!(!service.frame_valid());
        for category in WidgetCategory::CANONICAL_ORDER {
            assert!(!service.visible(category, 0));
        }
    }

    #[tokio::test]
    async fn system_recovers_after_degraded_tick() {
        let mut service = populated_service().await;

        service
            .submit_frame(TelemetryFrame::new(2, json!(42)))
            .await;
        service.tick().await;
        assert_eq!(service.total_count(), 0);

        service
            .submit_frame(TelemetryFrame::new(3, sensor_document()))
            .await;
        service.tick().await;
        assert_eq!(service.total_count(), 8);
        assert!(service.available());
    }
}
