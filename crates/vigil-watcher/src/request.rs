//! Execute-watch request parameters and fluent builder.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::mode::{ActionExecutionMode, SimulatedActions};
use crate::path::{HttpMethod, RequestPathInfo};
use crate::trigger::{TriggerEventBuilder, TriggerEventContainer};

/// Parameters for executing a registered watch on demand.
///
/// Identified by the watch id, which travels in the request path and never in
/// the body. Every body field is optional; an absent field is omitted from
/// the serialized body and leaves the cluster default behavior in place.
/// Nothing is validated locally; malformed action ids and the like are
/// rejected by the cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteWatchRequest {
    /// Identifier of the watch to execute.
    #[serde(skip)]
    pub watch_id: String,

    /// Event to treat as having fired the watch instead of its real trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_event: Option<TriggerEventContainer>,

    /// When true, the watch condition is treated as always met.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_condition: Option<bool>,

    /// When true, the execution record is persisted to the history store and
    /// the watch status is updated, possibly throttling later executions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_execution: Option<bool>,

    /// When true, throttle suppression is bypassed for this execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_throttle: Option<bool>,

    /// Replacement input payload used instead of the watch's own input.
    /// Keys serialize verbatim and keep their insertion order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_input: Option<Map<String, Value>>,

    /// Execution-mode override per action id. Keys serialize verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_modes: Option<HashMap<String, ActionExecutionMode>>,

    /// Which actions run in simulated mode: `"_all"` or an explicit list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_actions: Option<SimulatedActions>,
}

impl ExecuteWatchRequest {
    /// Creates a request for the given watch with every override unset.
    pub fn new(watch_id: impl Into<String>) -> Self {
        Self {
            watch_id: watch_id.into(),
            trigger_event: None,
            ignore_condition: None,
            record_execution: None,
            ignore_throttle: None,
            alternative_input: None,
            action_modes: None,
            simulated_actions: None,
        }
    }

    /// Starts a fluent builder for the given watch.
    pub fn builder(watch_id: impl Into<String>) -> ExecuteWatchBuilder {
        ExecuteWatchBuilder::new(watch_id)
    }

    /// Resolves the outbound method and path for this request.
    ///
    /// Always `POST /_watcher/watch/{watch_id}/_execute`, regardless of which
    /// body fields are set.
    pub fn path_info(&self) -> RequestPathInfo {
        RequestPathInfo::new(
            HttpMethod::Post,
            format!("/_watcher/watch/{}/_execute", self.watch_id),
        )
    }
}

/// Insertion-ordered fluent map for alternative-input payloads.
///
/// Handed to [`ExecuteWatchBuilder::alternative_input`] callbacks.
#[derive(Debug, Default)]
#[must_use]
pub struct InputMap {
    entries: Map<String, Value>,
}

impl InputMap {
    /// Creates an empty input map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one input field. Later entries with the same key win.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Finishes the builder, producing the payload map.
    pub fn finish(self) -> Map<String, Value> {
        self.entries
    }
}

/// Fluent map from action id to execution mode.
///
/// Handed to [`ExecuteWatchBuilder::action_modes`] callbacks.
#[derive(Debug, Default)]
#[must_use]
pub struct ActionModes {
    entries: HashMap<String, ActionExecutionMode>,
}

impl ActionModes {
    /// Creates an empty action-mode map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution mode for one action id.
    pub fn mode(mut self, action_id: impl Into<String>, mode: ActionExecutionMode) -> Self {
        self.entries.insert(action_id.into(), mode);
        self
    }

    /// Finishes the builder, producing the mode map.
    pub fn finish(self) -> HashMap<String, ActionExecutionMode> {
        self.entries
    }
}

/// Chainable builder mirroring [`ExecuteWatchRequest`].
///
/// Boolean setters come in two forms: a no-argument form that sets `true`
/// and a `with_*` form taking an explicit value. Sub-structure setters accept
/// either a literal value or a callback receiving a fresh sub-builder; the
/// `clear_*` companions reset a field to absent.
#[derive(Debug)]
#[must_use]
pub struct ExecuteWatchBuilder {
    request: ExecuteWatchRequest,
}

impl ExecuteWatchBuilder {
    /// Creates a builder for the given watch.
    pub fn new(watch_id: impl Into<String>) -> Self {
        Self {
            request: ExecuteWatchRequest::new(watch_id),
        }
    }

    /// Sets the trigger-event override from a callback.
    pub fn trigger_event<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(TriggerEventBuilder) -> TriggerEventContainer,
    {
        self.request.trigger_event = Some(selector(TriggerEventBuilder::new()));
        self
    }

    /// Sets the trigger-event override from a literal container.
    pub fn trigger_event_container(mut self, container: TriggerEventContainer) -> Self {
        self.request.trigger_event = Some(container);
        self
    }

    /// Clears the trigger-event override; the watch's real trigger applies.
    pub fn clear_trigger_event(mut self) -> Self {
        self.request.trigger_event = None;
        self
    }

    /// Bypasses the watch condition for this execution.
    pub fn ignore_condition(self) -> Self {
        self.with_ignore_condition(true)
    }

    /// Sets whether the watch condition is bypassed.
    pub fn with_ignore_condition(mut self, ignore: bool) -> Self {
        self.request.ignore_condition = Some(ignore);
        self
    }

    /// Persists the execution record and updates the watch status.
    pub fn record_execution(self) -> Self {
        self.with_record_execution(true)
    }

    /// Sets whether the execution record is persisted.
    pub fn with_record_execution(mut self, record: bool) -> Self {
        self.request.record_execution = Some(record);
        self
    }

    /// Bypasses throttle suppression for this execution.
    pub fn ignore_throttle(self) -> Self {
        self.with_ignore_throttle(true)
    }

    /// Sets whether throttle suppression is bypassed.
    pub fn with_ignore_throttle(mut self, ignore: bool) -> Self {
        self.request.ignore_throttle = Some(ignore);
        self
    }

    /// Sets the alternative input payload from a callback.
    pub fn alternative_input<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(InputMap) -> Map<String, Value>,
    {
        self.request.alternative_input = Some(selector(InputMap::new()));
        self
    }

    /// Sets the alternative input payload from a literal map.
    pub fn alternative_input_map(mut self, input: Map<String, Value>) -> Self {
        self.request.alternative_input = Some(input);
        self
    }

    /// Clears the alternative input; the watch's own input applies.
    pub fn clear_alternative_input(mut self) -> Self {
        self.request.alternative_input = None;
        self
    }

    /// Sets per-action execution modes from a callback.
    pub fn action_modes<F>(mut self, selector: F) -> Self
    where
        F: FnOnce(ActionModes) -> HashMap<String, ActionExecutionMode>,
    {
        self.request.action_modes = Some(selector(ActionModes::new()));
        self
    }

    /// Sets per-action execution modes from a literal map.
    pub fn action_modes_map(mut self, modes: HashMap<String, ActionExecutionMode>) -> Self {
        self.request.action_modes = Some(modes);
        self
    }

    /// Clears the per-action execution modes.
    pub fn clear_action_modes(mut self) -> Self {
        self.request.action_modes = None;
        self
    }

    /// Sets the simulated-actions selector.
    pub fn simulated_actions(mut self, simulated: SimulatedActions) -> Self {
        self.request.simulated_actions = Some(simulated);
        self
    }

    /// Runs every action in simulated mode.
    pub fn simulate_all(self) -> Self {
        self.simulated_actions(SimulatedActions::All)
    }

    /// Finishes the builder, producing the request.
    pub fn build(self) -> ExecuteWatchRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_serializes_to_empty_body() {
        let request = ExecuteWatchRequest::new("cpu-alert");
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_watch_id_never_appears_in_body() {
        let request = ExecuteWatchRequest::builder("cpu-alert")
            .ignore_condition()
            .build();
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("watch_id").is_none());
        assert_eq!(body, json!({"ignore_condition": true}));
    }

    #[test]
    fn test_only_populated_fields_serialize() {
        let request = ExecuteWatchRequest::builder("cpu-alert")
            .record_execution()
            .simulated_actions(SimulatedActions::actions(["notify-ops"]))
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "record_execution": true,
                "simulated_actions": ["notify-ops"],
            })
        );
    }

    #[test]
    fn test_no_arg_bool_setters_equal_explicit_true() {
        let sugar = ExecuteWatchRequest::builder("w")
            .ignore_condition()
            .record_execution()
            .ignore_throttle()
            .build();
        let explicit = ExecuteWatchRequest::builder("w")
            .with_ignore_condition(true)
            .with_record_execution(true)
            .with_ignore_throttle(true)
            .build();

        assert_eq!(
            serde_json::to_value(&sugar).unwrap(),
            serde_json::to_value(&explicit).unwrap()
        );
    }

    #[test]
    fn test_example_record_and_throttle_body() {
        let request = ExecuteWatchRequest::builder("w")
            .with_record_execution(true)
            .ignore_throttle()
            .build();

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"record_execution":true,"ignore_throttle":true}"#
        );
    }

    #[test]
    fn test_clear_leaves_fields_absent_not_empty() {
        let request = ExecuteWatchRequest::builder("w")
            .trigger_event(|t| t.finish())
            .alternative_input(|m| m.entry("a", 1).finish())
            .clear_trigger_event()
            .clear_alternative_input()
            .build();

        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_map_keys_serialize_verbatim() {
        // Keys that collide with schema property names elsewhere must pass
        // through untouched.
        let request = ExecuteWatchRequest::builder("w")
            .alternative_input(|m| {
                m.entry("ignore_condition", "not a flag")
                    .entry("trigger_event", json!({"nested": true}))
                    .finish()
            })
            .action_modes(|m| {
                m.mode("record_execution", ActionExecutionMode::Skip).finish()
            })
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "alternative_input": {
                    "ignore_condition": "not a flag",
                    "trigger_event": {"nested": true},
                },
                "action_modes": {"record_execution": "skip"},
            })
        );
    }

    #[test]
    fn test_alternative_input_preserves_insertion_order() {
        let request = ExecuteWatchRequest::builder("w")
            .alternative_input(|m| {
                m.entry("zulu", 1).entry("alpha", 2).entry("mike", 3).finish()
            })
            .build();

        let body = serde_json::to_string(&request).unwrap();
        let zulu = body.find("zulu").unwrap();
        let alpha = body.find("alpha").unwrap();
        let mike = body.find("mike").unwrap();
        assert!(zulu < alpha && alpha < mike);
    }

    #[test]
    fn test_action_modes_are_independent_of_simulated_actions() {
        let request = ExecuteWatchRequest::builder("w")
            .action_modes(|m| m.mode("page-oncall", ActionExecutionMode::ForceExecute).finish())
            .simulated_actions(SimulatedActions::actions(["notify-ops"]))
            .build();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["action_modes"]["page-oncall"], json!("force_execute"));
        assert_eq!(body["simulated_actions"], json!(["notify-ops"]));
    }

    #[test]
    fn test_full_request_wire_shape() {
        let triggered: jiff::Timestamp = "2026-08-26T09:00:00Z".parse().unwrap();
        let request = ExecuteWatchRequest::builder("cpu-alert")
            .trigger_event(|t| t.schedule(|s| s.triggered_time(triggered)).finish())
            .with_ignore_condition(true)
            .with_record_execution(false)
            .ignore_throttle()
            .alternative_input(|m| m.entry("payload", json!({"hits": 42})).finish())
            .action_modes(|m| m.mode("notify-ops", ActionExecutionMode::Simulate).finish())
            .simulate_all()
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "trigger_event": {"schedule": {"triggered_time": "2026-08-26T09:00:00Z"}},
                "ignore_condition": true,
                "record_execution": false,
                "ignore_throttle": true,
                "alternative_input": {"payload": {"hits": 42}},
                "action_modes": {"notify-ops": "simulate"},
                "simulated_actions": "_all",
            })
        );
    }

    #[test]
    fn test_path_info_is_always_post() {
        let empty = ExecuteWatchRequest::new("cpu-alert");
        let full = ExecuteWatchRequest::builder("cpu-alert").simulate_all().build();

        for request in [&empty, &full] {
            let info = request.path_info();
            assert_eq!(info.method, HttpMethod::Post);
            assert_eq!(info.path, "/_watcher/watch/cpu-alert/_execute");
        }
    }
}
