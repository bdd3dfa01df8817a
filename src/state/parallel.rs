use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::base::BaseState;
use super::State;
use crate::machine::StateMachine;

/// Runs independent branches concurrently.
///
/// Each branch is held as a single state; serialization wraps it into a
/// synthetic one-state sub-workflow whose `StartAt` is the branch's name.
/// The wrapping happens lazily at dump time and leaves the branch states
/// untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParallelState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(serialize_with = "branches_as_workflows")]
    pub branches: Vec<State>,
}

impl ParallelState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            branches: Vec::new(),
        }
    }
}

fn branches_as_workflows<S>(branches: &[State], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(branches.len()))?;
    for branch in branches {
        seq.serialize_element(&StateMachine::new(branch.name(), vec![branch.clone()]))?;
    }
    seq.end()
}
