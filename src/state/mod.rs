//! State Machine - behavior switching over a fixed state enumeration
//!
//! States are a small fixed enum implementing `StateSpec`; the
//! transition table is the pure function `next(state, trigger)`. A
//! trigger with no defined transition is the non-fatal `NoTransition`
//! outcome and leaves the current state untouched. Hooks run in the
//! order: exit(current), assignment, enter(next).

mod hooks;
mod machine;

pub use hooks::{NoHooks, StateHooks};
pub use machine::{StateMachine, StateSpec, Transition};
