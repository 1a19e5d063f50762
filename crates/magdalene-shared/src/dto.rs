//! Data Transfer Objects - the bodies posted by each storefront form.
//!
//! Every field is optional here: presence and value rules belong to the
//! collection schemas, so a missing field reaches validation instead of
//! failing deserialization.

use magdalene_core::schema::{Document, FieldValue};
use serde::{Deserialize, Serialize};

/// A scalar field as posted: a JSON number, or text from JSON or a form.
///
/// Casting to the declared type is left to the collection schema, so a
/// number sent for a text field is stored as its decimal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Number(f64),
    Text(String),
}

impl From<FieldInput> for FieldValue {
    fn from(input: FieldInput) -> Self {
        match input {
            FieldInput::Number(n) => FieldValue::Number(n),
            FieldInput::Text(s) => FieldValue::Text(s),
        }
    }
}

/// Body of `POST /login` and `POST /register`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsForm {
    pub email: Option<FieldInput>,
    pub password: Option<FieldInput>,
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CredentialsForm {
    /// The form's `password` field is stored under `pass`.
    pub fn into_document(self) -> Document {
        Document::new()
            .with("email", self.email)
            .with("pass", self.password)
    }
}

/// Body of `POST /buynow`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseForm {
    pub name: Option<FieldInput>,
    pub email: Option<FieldInput>,
    pub country: Option<FieldInput>,
    pub selectcar: Option<FieldInput>,
    pub phone: Option<FieldInput>,
    pub state: Option<FieldInput>,
    pub address: Option<FieldInput>,
}

impl PurchaseForm {
    pub fn into_document(self) -> Document {
        Document::new()
            .with("name", self.name)
            .with("email", self.email)
            .with("country", self.country)
            .with("selectcar", self.selectcar)
            .with("phone", self.phone)
            .with("state", self.state)
            .with("address", self.address)
    }
}

/// Body of `POST /booking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: Option<FieldInput>,
    pub email: Option<FieldInput>,
    pub selectaservice: Option<FieldInput>,
    pub date: Option<FieldInput>,
    pub specialrequest: Option<FieldInput>,
}

impl BookingForm {
    pub fn into_document(self) -> Document {
        Document::new()
            .with("name", self.name)
            .with("email", self.email)
            .with("selectaservice", self.selectaservice)
            .with("date", self.date)
            .with("specialrequest", self.specialrequest)
    }
}

/// Body of `POST /getaquote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteForm {
    pub name: Option<FieldInput>,
    pub email: Option<FieldInput>,
    pub phone: Option<FieldInput>,
    pub service: Option<FieldInput>,
    pub quantity: Option<FieldInput>,
    pub budget: Option<FieldInput>,
    pub timeline: Option<FieldInput>,
    pub comments: Option<FieldInput>,
}

impl QuoteForm {
    pub fn into_document(self) -> Document {
        Document::new()
            .with("name", self.name)
            .with("email", self.email)
            .with("phone", self.phone)
            .with("service", self.service)
            .with("quantity", self.quantity)
            .with("budget", self.budget)
            .with("timeline", self.timeline)
            .with("comments", self.comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_accepts_number_or_text() {
        let form: QuoteForm = serde_json::from_str(r#"{"quantity": 2}"#).unwrap();
        assert_eq!(form.quantity, Some(FieldInput::Number(2.0)));

        let form: QuoteForm = serde_json::from_str(r#"{"quantity": "3"}"#).unwrap();
        assert_eq!(form.quantity, Some(FieldInput::Text("3".into())));
    }

    #[test]
    fn test_text_fields_accept_json_numbers() {
        let form: PurchaseForm =
            serde_json::from_str(r#"{"name": "Ada", "phone": 5550100}"#).unwrap();
        assert_eq!(form.phone, Some(FieldInput::Number(5550100.0)));

        let doc = form.into_document();
        assert_eq!(doc.get("phone"), Some(&FieldValue::Number(5550100.0)));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let form: QuoteForm = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        let doc = form.into_document();
        assert_eq!(doc.len(), 1);
        assert!(!doc.contains("comments"));
    }

    #[test]
    fn test_password_maps_to_pass() {
        let form = CredentialsForm {
            email: Some(FieldInput::Text("a@b.com".into())),
            password: Some(FieldInput::Text("pw".into())),
        };
        assert!(!format!("{form:?}").contains("\"pw\""));

        let doc = form.into_document();
        assert_eq!(doc.get("pass"), Some(&FieldValue::Text("pw".into())));
        assert!(!doc.contains("password"));
    }
}
