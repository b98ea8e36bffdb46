//! The shorten form: state store, intents, reducer, and input checks.

mod check;
mod intent;
mod reducer;
mod state;

pub use check::{check_input, InputIssue};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormPhase, FormState};
