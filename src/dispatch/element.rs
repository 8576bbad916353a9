use super::{DispatchError, Dispatcher};

/// A personal account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonAccount {
    pub name: String,
    pub number: String,
}

impl PersonAccount {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        PersonAccount {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// A company account, carrying a registration number on top of the
/// fields a personal account has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAccount {
    pub name: String,
    pub reg_number: String,
    pub number: String,
}

impl CompanyAccount {
    pub fn new(
        name: impl Into<String>,
        reg_number: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        CompanyAccount {
            name: name.into(),
            reg_number: reg_number.into(),
            number: number.into(),
        }
    }
}

/// Discriminant of the closed element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Person,
    Company,
}

/// One element of the closed set.
///
/// Adding a variant here is the only way to add a kind, and it forces
/// every dispatcher and every `accept` match to grow with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Person(PersonAccount),
    Company(CompanyAccount),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Person(_) => ElementKind::Person,
            Element::Company(_) => ElementKind::Company,
        }
    }

    /// Double dispatch: call back into the dispatcher's kind-specific
    /// method for this element.
    pub fn accept<D: Dispatcher>(&self, dispatcher: &mut D) -> Result<D::Output, DispatchError> {
        match self {
            Element::Person(account) => dispatcher.dispatch_person(account),
            Element::Company(account) => dispatcher.dispatch_company(account),
        }
    }
}

impl From<PersonAccount> for Element {
    fn from(account: PersonAccount) -> Self {
        Element::Person(account)
    }
}

impl From<CompanyAccount> for Element {
    fn from(account: CompanyAccount) -> Self {
        Element::Company(account)
    }
}

/// An insertion-ordered, flat collection of elements.
///
/// Traversal borrows the set immutably, so no element can be added or
/// removed while a pass is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSet {
    elements: Vec<Element>,
}

impl ElementSet {
    pub fn new() -> Self {
        ElementSet::default()
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Visit every element in insertion order, collecting the outputs.
    ///
    /// The first dispatch failure propagates and ends the pass.
    pub fn accept_all<D: Dispatcher>(
        &self,
        dispatcher: &mut D,
    ) -> Result<Vec<D::Output>, DispatchError> {
        self.elements
            .iter()
            .map(|element| element.accept(dispatcher))
            .collect()
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        ElementSet {
            elements: iter.into_iter().collect(),
        }
    }
}
