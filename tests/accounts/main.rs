use interplay::{
    CompanyAccount, DispatchError, Dispatcher, Element, ElementKind, ElementSet, HtmlRenderer,
    PersonAccount, XmlRenderer,
};

fn bank_accounts() -> ElementSet {
    let mut set = ElementSet::new();
    set.push(PersonAccount::new("Ivan Alekseev", "82184931"));
    set.push(CompanyAccount::new("Microsoft", "ewuir32141324", "3424131445"));
    set
}

#[test]
fn one_element_set_serves_two_renderers_unchanged() {
    let set = bank_accounts();
    let before = set.clone();

    let html = set.accept_all(&mut HtmlRenderer).unwrap();
    let xml = set.accept_all(&mut XmlRenderer).unwrap();

    assert_eq!(html.len(), 2);
    assert_eq!(xml.len(), 2);
    assert!(html[0].starts_with("<table>"));
    assert!(xml[0].starts_with("<Person>"));
    // Dispatch never touched the elements.
    assert_eq!(set, before);
}

#[test]
fn traversal_preserves_insertion_order() {
    let mut set = ElementSet::new();
    set.push(CompanyAccount::new("Acme", "r-1", "100"));
    set.push(PersonAccount::new("Anna", "200"));
    set.push(PersonAccount::new("Boris", "300"));

    let xml = set.accept_all(&mut XmlRenderer).unwrap();
    assert!(xml[0].contains("Acme"));
    assert!(xml[1].contains("Anna"));
    assert!(xml[2].contains("Boris"));
}

#[test]
fn every_kind_produces_a_result() {
    let set = bank_accounts();
    for element in set.iter() {
        let rendered = element.accept(&mut XmlRenderer).unwrap();
        assert!(!rendered.is_empty());
    }
}

// A dispatcher that structurally covers all kinds but only serves
// personal accounts.
struct PersonalLedger;

impl Dispatcher for PersonalLedger {
    type Output = String;

    fn name(&self) -> &str {
        "personal-ledger"
    }

    fn dispatch_person(&mut self, account: &PersonAccount) -> Result<String, DispatchError> {
        Ok(format!("{}: {}", account.number, account.name))
    }

    fn dispatch_company(&mut self, _account: &CompanyAccount) -> Result<String, DispatchError> {
        Err(DispatchError::UnsupportedKind {
            kind: ElementKind::Company,
            dispatcher: self.name().to_string(),
        })
    }
}

#[test]
fn unsupported_kind_is_an_explicit_failure() {
    let set = bank_accounts();

    match set.accept_all(&mut PersonalLedger) {
        Err(DispatchError::UnsupportedKind { kind, dispatcher }) => {
            assert_eq!(kind, ElementKind::Company);
            assert_eq!(dispatcher, "personal-ledger");
        }
        other => panic!("expected UnsupportedKind, got {:?}", other),
    }

    // Elements the dispatcher does serve still work on their own.
    let person = Element::from(PersonAccount::new("Anna", "200"));
    assert_eq!(
        person.accept(&mut PersonalLedger).unwrap(),
        "200: Anna"
    );
}

#[test]
fn kind_reports_the_variant() {
    for element in bank_accounts().iter() {
        match element {
            Element::Person(_) => assert_eq!(element.kind(), ElementKind::Person),
            Element::Company(_) => assert_eq!(element.kind(), ElementKind::Company),
        }
    }
}
