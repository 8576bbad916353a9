use super::StateSpec;

/// Entry/exit side effects for a state machine.
///
/// Both methods default to doing nothing; implement only what the use
/// case needs. For a transition `from -> to`, the machine calls
/// `on_exit(from)`, assigns the new state, then `on_enter(to)`.
pub trait StateHooks<S: StateSpec> {
    fn on_exit(&mut self, _leaving: S) {}

    fn on_enter(&mut self, _entering: S) {}
}

/// Hook implementation with no side effects.
pub struct NoHooks;

impl<S: StateSpec> StateHooks<S> for NoHooks {}
