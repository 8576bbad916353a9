use super::{CompanyAccount, DispatchError, PersonAccount};

/// One operation over the closed element set.
///
/// The trait carries exactly one method per kind and no defaults, so a
/// new implementation that misses a kind does not compile: in this
/// statically checked setting, exhaustiveness is a build-time property.
/// An implementation that exists for a kind but cannot serve it returns
/// `UnsupportedKind` as an explicit, recoverable failure.
///
/// Dispatchers are freely substitutable: any number of operations can
/// run over the same elements without the element types changing.
pub trait Dispatcher {
    type Output;

    /// Name used when reporting `UnsupportedKind`.
    fn name(&self) -> &str;

    fn dispatch_person(&mut self, account: &PersonAccount)
        -> Result<Self::Output, DispatchError>;

    fn dispatch_company(
        &mut self,
        account: &CompanyAccount,
    ) -> Result<Self::Output, DispatchError>;
}
