//! Arbitration between competing telemetry producers.

#[cfg(test)]
mod tests {
    use crate::integration::{fresh_service, sensor_document};
    use dash_core::{DashboardApi, FrameSlot};
    use dash_types::TelemetryFrame;
    use serde_json::json;

    #[tokio::test]
    async fn out_of_order_candidate_is_rejected() {
        let service = fresh_service();

        assert!(service
            .submit_frame(TelemetryFrame::new(5, sensor_document()))
            .await);
        assert!(!service
            .submit_frame(TelemetryFrame::new(3, json!({ "t": "stale", "g": [] })))
            .await);

        assert_eq!(service.frame_slot().snapshot().sequence_number, 5);
    }

    #[tokio::test]
    async fn tie_keeps_current_candidate() {
        let service = fresh_service();

        service
            .submit_frame(TelemetryFrame::new(4, sensor_document()))
            .await;
        assert!(!service
            .submit_frame(TelemetryFrame::new(4, json!({ "t": "imposter", "g": [] })))
            .await);

        let snapshot = service.frame_slot().snapshot();
        assert_eq!(snapshot.document()["t"], "CanSat");
    }

    #[tokio::test]
    async fn live_feed_and_replay_race_resolves_to_newest() {
        // Two producers hammer the same slot from separate threads; the
        // tick must observe only the highest sequence number
        let slot = FrameSlot::new();

        let live = {
            let slot = slot.clone();
            std::thread::spawn(move || {
                for sequence in (1..=100u64).step_by(2) {
                    slot.submit(TelemetryFrame::new(sequence, json!({ "t": "live", "g": [] })));
                }
            })
        };
        let replay = {
            let slot = slot.clone();
            std::thread::spawn(move || {
                for sequence in (2..=100u64).step_by(2) {
                    slot.submit(TelemetryFrame::new(sequence, json!({ "t": "replay", "g": [] })));
                }
            })
        };

        live.join().unwrap();
        replay.join().unwrap();

        assert_eq!(slot.snapshot().sequence_number, 100);
    }

    #[tokio::test]
    async fn winner_is_what_the_next_tick_decodes() {
        let mut service = fresh_service();

        let mut newer = sensor_document();
        newer["t"] = json!("CanSat Mk2");

        service
            .submit_frame(TelemetryFrame::new(1, sensor_document()))
            .await;
        service.submit_frame(TelemetryFrame::new(2, newer)).await;

        service.tick().await;
        assert_eq!(service.title(), "CanSat Mk2");
    }
}
