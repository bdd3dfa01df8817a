pub mod dump;
pub mod error;
pub mod fields;
pub mod logic;
pub mod machine;
pub mod policy;
pub mod state;
pub mod template;

pub use dump::Dump;
pub use error::{DumpError, Result};
pub use fields::Fields;
pub use logic::ChoiceRule;
pub use machine::StateMachine;
pub use policy::{CatchPolicy, RetryPolicy};
pub use state::*;
