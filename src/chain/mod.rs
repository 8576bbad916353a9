//! Request Chain - ordered delegation with first-match-wins
//!
//! A chain is built once from an ordered list of handlers and never
//! mutated afterwards. `handle` walks the handlers in build order; the
//! first one whose predicate accepts the request processes it and the
//! walk stops. No acceptor is the normal `Unhandled` outcome, distinct
//! from a handler that accepted and then failed, which propagates.

mod chain;
mod error;
mod handler;

pub use chain::{Outcome, RequestChain};
pub use error::ChainError;
pub use handler::{Handler, HandlerFault};
