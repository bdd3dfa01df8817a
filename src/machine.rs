//! Top-level states-language document.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::dump::Dump;
use crate::fields::Fields;
use crate::state::State;

/// A workflow definition: a start state plus the states it refers to.
///
/// `states` keeps declaration order as a sequence; the name-keyed `States`
/// object the document format requires is built at serialization time.
/// Names are not checked for uniqueness or reachability here.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateMachine {
    pub start_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,

    #[serde(serialize_with = "states_by_name")]
    pub states: Vec<State>,

    /// Any other caller-supplied top-level field.
    #[serde(flatten)]
    pub fields: Fields,
}

impl StateMachine {
    pub fn new(start_at: impl Into<String>, states: Vec<State>) -> Self {
        Self {
            start_at: start_at.into(),
            states,
            ..Self::default()
        }
    }
}

impl Dump for StateMachine {}

/// Key the state sequence by name. A name declared twice keeps its first
/// position and the last declaration's definition, so the emitted object
/// never contains duplicate keys.
fn states_by_name<S>(states: &[State], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut order: Vec<&State> = Vec::with_capacity(states.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(states.len());
    for state in states {
        match index.get(state.name()) {
            Some(&at) => order[at] = state,
            None => {
                index.insert(state.name(), order.len());
                order.push(state);
            }
        }
    }

    let mut map = serializer.serialize_map(Some(order.len()))?;
    for state in order {
        map.serialize_entry(state.name(), state)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ParallelState, PassState, TaskState, WaitState};
    use serde_json::json;

    #[test]
    fn states_are_keyed_by_name() {
        let mut fetch = TaskState::new("Fetch");
        fetch.resource = Some("arn:aws:lambda:fetch".to_string());
        fetch.base.next = Some("Done".to_string());

        let mut done = PassState::new("Done");
        done.base.end = Some(true);

        let machine = StateMachine::new("Fetch", vec![fetch.into(), done.into()]);
        let value = machine.to_value().unwrap();

        assert_eq!(value["StartAt"], "Fetch");
        assert_eq!(value["States"]["Fetch"]["Type"], "Task");
        assert_eq!(value["States"]["Fetch"]["Next"], "Done");
        assert_eq!(value["States"]["Done"]["Type"], "Pass");
        assert_eq!(value["States"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn name_stays_out_of_the_state_body() {
        let mut wait = WaitState::new("Hold");
        wait.seconds = Some(5);
        wait.base.end = Some(true);

        let machine = StateMachine::new("Hold", vec![wait.into()]);
        let value = machine.to_value().unwrap();

        let body = value["States"]["Hold"].as_object().unwrap();
        assert!(!body.contains_key("Name"));
        assert_eq!(body["Seconds"], 5);
    }

    #[test]
    fn empty_machine_still_emits_states() {
        let machine = StateMachine::new("start", vec![]);
        assert_eq!(
            machine.to_value().unwrap(),
            json!({ "StartAt": "start", "States": {} })
        );
    }

    #[test]
    fn duplicate_names_resolve_last_write_wins() {
        let mut first = TaskState::new("A");
        first.resource = Some("arn:first".to_string());
        let mut other = PassState::new("B");
        other.base.end = Some(true);
        let mut second = TaskState::new("A");
        second.resource = Some("arn:second".to_string());

        let machine = StateMachine::new("A", vec![first.into(), other.into(), second.into()]);
        let value = machine.to_value().unwrap();

        let states = value["States"].as_object().unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(
            states.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B"],
            "first declaration keeps its position"
        );
        assert_eq!(states["A"]["Resource"], "arn:second");
    }

    #[test]
    fn parallel_branches_wrap_into_sub_workflows() {
        let mut left = TaskState::new("Left");
        left.resource = Some("arn:left".to_string());
        left.base.end = Some(true);
        let mut right = TaskState::new("Right");
        right.resource = Some("arn:right".to_string());
        right.base.end = Some(true);

        let mut fanout = ParallelState::new("FanOut");
        fanout.branches = vec![left.into(), right.into()];
        fanout.base.end = Some(true);

        let machine = StateMachine::new("FanOut", vec![fanout.into()]);
        let value = machine.to_value().unwrap();

        let branches = value["States"]["FanOut"]["Branches"].as_array().unwrap();
        assert_eq!(branches.len(), 2);
        for (branch, name) in branches.iter().zip(["Left", "Right"]) {
            assert_eq!(branch["StartAt"], name);
            let states = branch["States"].as_object().unwrap();
            assert_eq!(states.len(), 1);
            assert_eq!(states[name]["Type"], "Task");
        }
    }

    #[test]
    fn extra_top_level_fields_flatten_into_the_document() {
        let mut machine = StateMachine::new("Only", vec![]);
        machine.comment = Some("nightly sync".to_string());
        machine.fields.set("QueryLanguage", "JSONPath");

        let value = machine.to_value().unwrap();
        assert_eq!(value["Comment"], "nightly sync");
        assert_eq!(value["QueryLanguage"], "JSONPath");
    }
}
