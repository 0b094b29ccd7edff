//! Counter actions and their wire form.

use serde::{Deserialize, Serialize};

use crate::flow::Action;

/// Actions understood by the counter reducer.
///
/// On the wire an action is a JSON object tagged by `type`, e.g.
/// `{"type": "INCREASE_COUNT"}`. Every tag other than the known ones
/// decodes to `Unknown`, which reduces as the identity transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    IncreaseCount,
    #[serde(other)]
    Unknown,
}

impl CounterAction {
    /// Decode an action from its wire form.
    ///
    /// Total: a value with a missing, non-string, or unrecognized `type`
    /// field decodes to `Unknown` instead of failing.
    pub fn from_json(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Self::Unknown)
    }
}

impl Action for CounterAction {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_tag_decodes() {
        let action = CounterAction::from_json(&json!({ "type": "INCREASE_COUNT" }));
        assert_eq!(action, CounterAction::IncreaseCount);
    }

    #[test]
    fn unrecognized_tag_decodes_to_unknown() {
        let action = CounterAction::from_json(&json!({ "type": "DECREASE_COUNT" }));
        assert_eq!(action, CounterAction::Unknown);
    }

    #[test]
    fn missing_tag_decodes_to_unknown() {
        let action = CounterAction::from_json(&json!({}));
        assert_eq!(action, CounterAction::Unknown);
    }

    #[test]
    fn non_string_tag_decodes_to_unknown() {
        let action = CounterAction::from_json(&json!({ "type": 5 }));
        assert_eq!(action, CounterAction::Unknown);
    }

    #[test]
    fn non_object_decodes_to_unknown() {
        let action = CounterAction::from_json(&json!(42));
        assert_eq!(action, CounterAction::Unknown);
    }

    #[test]
    fn increase_count_serializes_with_type_tag() {
        let value = serde_json::to_value(CounterAction::IncreaseCount).unwrap();
        assert_eq!(value, json!({ "type": "INCREASE_COUNT" }));
    }
}
