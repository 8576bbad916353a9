use std::error::Error;

/// Opaque failure raised while processing an accepted request.
///
/// Passed through to the caller unmodified.
pub type HandlerFault = Box<dyn Error + Send + Sync>;

/// One link in a request chain.
///
/// The id identifies the handler in outcomes and errors; a chain
/// rejects two handlers with the same id at build time.
pub trait Handler<R>: Send {
    /// Identity of this handler within the chain.
    fn id(&self) -> &str;

    /// Can this handler take the request?
    fn accepts(&self, request: &R) -> bool;

    /// Process a request this handler accepted.
    fn process(&mut self, request: &R) -> Result<(), HandlerFault>;
}
