//! Dispatcher - one operation per element kind over a closed set
//!
//! The element kinds are a fixed enum; dispatchers are open. A new
//! operation is a new `Dispatcher` implementation and touches no
//! element type; a new element kind is a new enum variant, which the
//! compiler propagates into every `accept` match and every dispatcher.
//! The closed-element/open-operation trade-off is enforced at build
//! time. A dispatcher that structurally exists for a kind but cannot
//! serve it reports `UnsupportedKind` instead.

mod dispatcher;
mod element;
mod error;
mod renderers;

pub use dispatcher::Dispatcher;
pub use element::{CompanyAccount, Element, ElementKind, ElementSet, PersonAccount};
pub use error::DispatchError;
pub use renderers::{HtmlRenderer, XmlRenderer};
