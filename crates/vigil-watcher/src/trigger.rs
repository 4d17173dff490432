//! Trigger-event overrides for on-demand watch execution.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Description of the event to treat as having fired the watch.
///
/// Absent from a request, the watch's real trigger applies. The container is
/// a tagged union keyed by trigger kind; the schedule trigger is the one kind
/// the execute-watch API understands today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerEventContainer {
    /// A schedule trigger firing, with its triggered/scheduled times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleTriggerEvent>,
}

impl TriggerEventContainer {
    /// Creates a container holding a schedule trigger event.
    pub fn schedule(event: ScheduleTriggerEvent) -> Self {
        Self {
            schedule: Some(event),
        }
    }
}

/// A schedule trigger firing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTriggerEvent {
    /// When the trigger is treated as having actually fired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_time: Option<Timestamp>,
    /// When the trigger was scheduled to fire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<Timestamp>,
}

impl ScheduleTriggerEvent {
    /// Sets the time the trigger is treated as having fired.
    #[must_use]
    pub fn triggered_time(mut self, time: Timestamp) -> Self {
        self.triggered_time = Some(time);
        self
    }

    /// Sets the time the trigger was scheduled to fire.
    #[must_use]
    pub fn scheduled_time(mut self, time: Timestamp) -> Self {
        self.scheduled_time = Some(time);
        self
    }
}

/// Fluent builder handed to trigger-event callbacks on
/// [`ExecuteWatchBuilder`](crate::ExecuteWatchBuilder).
#[derive(Debug, Default)]
#[must_use]
pub struct TriggerEventBuilder {
    container: TriggerEventContainer,
}

impl TriggerEventBuilder {
    /// Creates an empty trigger-event builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a schedule trigger event built by the given closure.
    pub fn schedule<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(ScheduleTriggerEvent) -> ScheduleTriggerEvent,
    {
        self.container.schedule = Some(selector(ScheduleTriggerEvent::default()));
        self
    }

    /// Finishes the builder, producing the container.
    pub fn finish(self) -> TriggerEventContainer {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_container_serializes_to_empty_object() {
        let container = TriggerEventContainer::default();
        assert_eq!(serde_json::to_value(&container).unwrap(), json!({}));
    }

    #[test]
    fn test_schedule_event_wire_shape() {
        let triggered: Timestamp = "2026-08-26T09:00:00Z".parse().unwrap();
        let scheduled: Timestamp = "2026-08-26T09:00:05Z".parse().unwrap();

        let container = TriggerEventBuilder::new()
            .schedule(|s| s.triggered_time(triggered).scheduled_time(scheduled))
            .finish();

        assert_eq!(
            serde_json::to_value(&container).unwrap(),
            json!({
                "schedule": {
                    "triggered_time": "2026-08-26T09:00:00Z",
                    "scheduled_time": "2026-08-26T09:00:05Z",
                }
            })
        );
    }

    #[test]
    fn test_partial_schedule_event_omits_unset_times() {
        let triggered: Timestamp = "2026-08-26T09:00:00Z".parse().unwrap();
        let container =
            TriggerEventContainer::schedule(ScheduleTriggerEvent::default().triggered_time(triggered));

        assert_eq!(
            serde_json::to_value(&container).unwrap(),
            json!({"schedule": {"triggered_time": "2026-08-26T09:00:00Z"}})
        );
    }
}
