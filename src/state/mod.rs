pub mod base;
pub mod choice;
pub mod fail;
pub mod map;
pub mod parallel;
pub mod pass;
pub mod succeed;
pub mod task;
pub mod wait;

use serde::Serialize;

use crate::dump::Dump;

pub use base::BaseState;
pub use choice::ChoiceState;
pub use fail::FailState;
pub use map::MapState;
pub use parallel::ParallelState;
pub use pass::PassState;
pub use succeed::SucceedState;
pub use task::TaskState;
pub use wait::WaitState;

/// A single node of a workflow definition, tagged with its `Type` field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "Type")]
pub enum State {
    Task(TaskState),
    Pass(PassState),
    Wait(WaitState),
    Choice(ChoiceState),
    Succeed(SucceedState),
    Fail(FailState),
    Parallel(ParallelState),
    Map(MapState),
}

impl State {
    /// Name used as this state's key in the enclosing `States` object.
    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Fields shared by every variant.
    pub fn base(&self) -> &BaseState {
        match self {
            State::Task(s) => &s.base,
            State::Pass(s) => &s.base,
            State::Wait(s) => &s.base,
            State::Choice(s) => &s.base,
            State::Succeed(s) => &s.base,
            State::Fail(s) => &s.base,
            State::Parallel(s) => &s.base,
            State::Map(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseState {
        match self {
            State::Task(s) => &mut s.base,
            State::Pass(s) => &mut s.base,
            State::Wait(s) => &mut s.base,
            State::Choice(s) => &mut s.base,
            State::Succeed(s) => &mut s.base,
            State::Fail(s) => &mut s.base,
            State::Parallel(s) => &mut s.base,
            State::Map(s) => &mut s.base,
        }
    }
}

impl Dump for State {}

macro_rules! from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for State {
            fn from(state: $ty) -> Self {
                State::$variant(state)
            }
        })*
    };
}

from_variant! {
    Task => TaskState,
    Pass => PassState,
    Wait => WaitState,
    Choice => ChoiceState,
    Succeed => SucceedState,
    Fail => FailState,
    Parallel => ParallelState,
    Map => MapState,
}
