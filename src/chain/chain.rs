use std::collections::HashSet;

use super::{ChainError, Handler};

/// Result of walking a chain with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The named handler accepted and processed the request.
    HandledBy(String),
    /// No handler accepted; a normal outcome, not an error.
    Unhandled,
}

/// An immutable, ordered sequence of handlers.
///
/// Order is preserved exactly as given to `build`. There is no API for
/// appending or removing handlers after construction, and `handle`
/// takes the chain by exclusive borrow, so the structure cannot change
/// while a traversal is in progress.
pub struct RequestChain<R> {
    handlers: Vec<Box<dyn Handler<R>>>,
}

impl<R> RequestChain<R> {
    /// Construct a chain from an ordered handler list.
    ///
    /// Rejects a handler id that appears twice: a chain is a finite,
    /// acyclic sequence and no handler may occur in it more than once.
    pub fn build(handlers: Vec<Box<dyn Handler<R>>>) -> Result<Self, ChainError> {
        let mut seen = HashSet::new();
        for handler in &handlers {
            if !seen.insert(handler.id().to_string()) {
                return Err(ChainError::DuplicateHandler(handler.id().to_string()));
            }
        }
        Ok(RequestChain { handlers })
    }

    /// Walk the handlers in chain order; first-match-wins.
    ///
    /// The first handler whose predicate accepts processes the request
    /// and no further handlers are consulted. A processing failure
    /// propagates as `HandlerFailed`; no acceptor at all is `Unhandled`.
    pub fn handle(&mut self, request: &R) -> Result<Outcome, ChainError> {
        for handler in &mut self.handlers {
            if handler.accepts(request) {
                let id = handler.id().to_string();
                return match handler.process(request) {
                    Ok(()) => Ok(Outcome::HandledBy(id)),
                    Err(fault) => Err(ChainError::HandlerFailed { handler: id, fault }),
                };
            }
        }
        Ok(Outcome::Unhandled)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler ids in chain order.
    pub fn handler_ids(&self) -> Vec<String> {
        self.handlers.iter().map(|h| h.id().to_string()).collect()
    }
}
