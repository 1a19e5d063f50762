use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::choices::BudgetBracket;
use crate::schema::{Document, FieldRule, Record, Schema, SchemaError};

pub static QUOTE_SCHEMA: Schema = Schema {
    collection: "quote_requests",
    fields: &[
        FieldRule::text("name"),
        FieldRule::text("email"),
        FieldRule::text("phone"),
        FieldRule::text("service"),
        FieldRule::number("quantity"),
        FieldRule::one_of("budget", BudgetBracket::ALLOWED),
        FieldRule::text("timeline"),
        FieldRule::optional_text("comments"),
    ],
};

/// A request for a price quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub quantity: f64,
    pub budget: BudgetBracket,
    pub timeline: String,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for QuoteRequest {
    fn schema() -> &'static Schema {
        &QUOTE_SCHEMA
    }

    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name", self.name.as_str());
        doc.insert("email", self.email.as_str());
        doc.insert("phone", self.phone.as_str());
        doc.insert("service", self.service.as_str());
        doc.insert("quantity", self.quantity);
        doc.insert("budget", self.budget.as_str());
        doc.insert("timeline", self.timeline.as_str());
        doc.with("comments", self.comments.as_deref())
    }
}

impl TryFrom<Document> for QuoteRequest {
    type Error = SchemaError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let schema = &QUOTE_SCHEMA;
        let mut doc = schema.validate(document)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: schema.required_text(&mut doc, "name")?,
            email: schema.required_text(&mut doc, "email")?,
            phone: schema.required_text(&mut doc, "phone")?,
            service: schema.required_text(&mut doc, "service")?,
            quantity: schema.required_number(&mut doc, "quantity")?,
            budget: schema.required_choice(&mut doc, "budget")?,
            timeline: schema.required_text(&mut doc, "timeline")?,
            comments: doc.take_text("comments"),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldValue, Violation};

    fn form() -> Document {
        Document::new()
            .with("name", Some("A"))
            .with("email", Some("a@b.com"))
            .with("phone", Some("123"))
            .with("service", Some("web"))
            .with("quantity", Some(2.0))
            .with("budget", Some("$1000-$5000"))
            .with("timeline", Some("2w"))
    }

    #[test]
    fn test_comments_are_optional() {
        let quote = QuoteRequest::try_from(form()).unwrap();
        assert_eq!(quote.quantity, 2.0);
        assert_eq!(quote.budget, BudgetBracket::Starter);
        assert_eq!(quote.comments, None);
        assert!(!quote.to_document().contains("comments"));
        assert!(quote.check().is_ok());
    }

    #[test]
    fn test_comments_are_kept() {
        let mut doc = form();
        doc.insert("comments", "Deliver before noon");
        let quote = QuoteRequest::try_from(doc).unwrap();
        assert_eq!(quote.comments.as_deref(), Some("Deliver before noon"));

        let stored = quote.to_document();
        assert_eq!(
            stored.get("comments"),
            Some(&FieldValue::Text("Deliver before noon".into()))
        );
        assert!(quote.check().is_ok());
    }

    #[test]
    fn test_empty_comments_are_dropped() {
        let mut doc = form();
        doc.insert("comments", "");
        let quote = QuoteRequest::try_from(doc).unwrap();
        assert_eq!(quote.comments, None);
    }

    #[test]
    fn test_quantity_from_form_text() {
        let mut doc = form();
        doc.insert("quantity", "7");
        assert_eq!(QuoteRequest::try_from(doc).unwrap().quantity, 7.0);
    }

    #[test]
    fn test_quantity_must_be_numeric() {
        let mut doc = form();
        doc.insert("quantity", "a few");
        let err = QuoteRequest::try_from(doc).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::InvalidType {
                field: "quantity",
                expected: FieldKind::Number
            }]
        );
    }

    #[test]
    fn test_budget_outside_brackets() {
        let mut doc = form();
        doc.insert("budget", "$1");
        assert!(QuoteRequest::try_from(doc).is_err());
    }
}
