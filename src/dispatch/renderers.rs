use std::fmt::Write;

use super::{CompanyAccount, DispatchError, Dispatcher, PersonAccount};

/// Renders accounts as HTML property tables.
///
/// Included as a reference operation; it performs no I/O, and callers
/// decide what to do with the markup.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl Dispatcher for HtmlRenderer {
    type Output = String;

    fn name(&self) -> &str {
        "html"
    }

    fn dispatch_person(&mut self, account: &PersonAccount) -> Result<String, DispatchError> {
        let mut out = String::from("<table><tr><th>Property</th><th>Value</th></tr>");
        let _ = write!(out, "<tr><td>Name</td><td>{}</td></tr>", account.name);
        let _ = write!(out, "<tr><td>Number</td><td>{}</td></tr>", account.number);
        out.push_str("</table>");
        Ok(out)
    }

    fn dispatch_company(&mut self, account: &CompanyAccount) -> Result<String, DispatchError> {
        let mut out = String::from("<table><tr><th>Property</th><th>Value</th></tr>");
        let _ = write!(out, "<tr><td>Name</td><td>{}</td></tr>", account.name);
        let _ = write!(
            out,
            "<tr><td>RegNumber</td><td>{}</td></tr>",
            account.reg_number
        );
        let _ = write!(out, "<tr><td>Number</td><td>{}</td></tr>", account.number);
        out.push_str("</table>");
        Ok(out)
    }
}

/// Renders accounts as XML fragments.
#[derive(Debug, Default)]
pub struct XmlRenderer;

impl Dispatcher for XmlRenderer {
    type Output = String;

    fn name(&self) -> &str {
        "xml"
    }

    fn dispatch_person(&mut self, account: &PersonAccount) -> Result<String, DispatchError> {
        Ok(format!(
            "<Person><Name>{}</Name><Number>{}</Number></Person>",
            account.name, account.number
        ))
    }

    fn dispatch_company(&mut self, account: &CompanyAccount) -> Result<String, DispatchError> {
        Ok(format!(
            "<Company><Name>{}</Name><RegNumber>{}</RegNumber><Number>{}</Number></Company>",
            account.name, account.reg_number, account.number
        ))
    }
}
