//! End-to-end flow: producer submission, scheduler tick, renderer queries.

#[cfg(test)]
mod tests {
    use crate::integration::{fresh_service as service, sensor_document};
    use dash_bus::{DashboardEvent, EventFilter, EventTopic};
    use dash_core::DashboardApi;
    use dash_types::{TelemetryFrame, WidgetCategory};

    #[tokio::test]
    async fn full_flow_classifies_and_indexes() {
        let mut service = service();
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;

        // Counts per category
        assert_eq!(service.group_count(), 3);
        assert_eq!(service.plot_count(), 1);
        assert_eq!(service.bar_count(), 1);
        assert_eq!(service.thermometer_count(), 1);
        assert_eq!(service.accelerometer_count(), 1);
        assert_eq!(service.map_count(), 1);
        assert_eq!(service.total_count(), 8);

        // Index arithmetic holds over the whole addressable range
        for i in 0..service.total_count() as i64 {
            let category = service.category_of(i);
            assert_ne!(category, WidgetCategory::Unknown);
            let relative = service.relative_index(i);
            assert!(relative >= 0);
            assert!((relative as usize) < service.count(category));
            assert_eq!(service.icon_for(i), category.icon());
            // Fresh matrices default everything to visible
            assert!(service.widget_visible(i));
        }

        // Canonical concatenation: groups, plot, bar, thermometer, then
        // the group-level accelerometer and map
        assert_eq!(
            service.titles(),
            vec![
                "Motion",
                "Position",
                "Environment",
                "Temperature",
                "Battery",
                "Temperature",
                "Motion",
                "Position"
            ]
        );
        assert_eq!(service.titles().len(), service.total_count());
    }

    #[tokio::test]
    async fn renderer_sees_count_change_notifications() {
        let mut service = service();
        let bus = service.bus();
        let mut renderer = bus.subscribe(EventFilter::topics(vec![EventTopic::Dashboard]));

        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;

        let mut got_count = false;
        let mut got_visibility = false;
        let mut got_updated = false;
        while let Ok(Some(event)) = renderer.try_recv() {
            match event {
                DashboardEvent::WidgetCountChanged { total } => {
                    assert_eq!(total, 8);
                    got_count = true;
                }
                DashboardEvent::WidgetVisibilityChanged => got_visibility = true,
                DashboardEvent::DataUpdated => got_updated = true,
                _ => {}
            }
        }
        assert!(got_count);
        assert!(got_visibility);
        assert!(got_updated);
    }

    #[tokio::test]
    async fn visibility_toggles_survive_value_only_ticks() {
        let mut service = service();
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;

        service.set_visible(WidgetCategory::Group, 0, false).await;
        assert!(!service.visible(WidgetCategory::Group, 0));

        // Same structure, new arrival: counts unchanged, matrix persists
        service
            .submit_frame(TelemetryFrame::new(2, sensor_document()))
            .await;
        service.tick().await;

        assert!(!service.visible(WidgetCategory::Group, 0));
        assert!(service.visible(WidgetCategory::Group, 1));
    }

    #[tokio::test]
    async fn cardinality_change_rebuilds_visibility() {
        let mut service = service();
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;
        service.set_visible(WidgetCategory::Group, 0, false).await;

        // Drop to a single-group frame: every flag returns to visible
        service
            .submit_frame(TelemetryFrame::new(
                2,
                serde_json::json!({ "t": "CanSat", "g": [ { "t": "Motion", "w": "", "d": [] } ] }),
            ))
            .await;
        service.tick().await;

        assert_eq!(service.group_count(), 1);
        assert!(service.visible(WidgetCategory::Group, 0));
    }

    #[tokio::test]
    async fn out_of_range_visibility_set_has_no_effect() {
        let mut service = service();
        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.tick().await;
        assert_eq!(service.bar_count(), 1);

        let mut renderer = service.bus().subscribe(EventFilter::all());
        service.set_visible(WidgetCategory::Bar, 99, false).await;

        assert!(matches!(renderer.try_recv(), Ok(None)));
        assert!(service.visible(WidgetCategory::Bar, 0));
    }
}
