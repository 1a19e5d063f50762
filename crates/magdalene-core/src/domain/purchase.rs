use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::choices::{CarModel, Country};
use crate::schema::{Document, FieldRule, Record, Schema, SchemaError};

pub static PURCHASE_SCHEMA: Schema = Schema {
    collection: "purchase_requests",
    fields: &[
        FieldRule::text("name"),
        FieldRule::text("email"),
        FieldRule::one_of("country", Country::ALLOWED),
        FieldRule::one_of("selectcar", CarModel::ALLOWED),
        FieldRule::text("phone"),
        FieldRule::text("state"),
        FieldRule::text("address"),
    ],
};

/// A "buy now" order for one car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: Country,
    pub car: CarModel,
    pub phone: String,
    pub state: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Record for PurchaseRequest {
    fn schema() -> &'static Schema {
        &PURCHASE_SCHEMA
    }

    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name", self.name.as_str());
        doc.insert("email", self.email.as_str());
        doc.insert("country", self.country.as_str());
        doc.insert("selectcar", self.car.as_str());
        doc.insert("phone", self.phone.as_str());
        doc.insert("state", self.state.as_str());
        doc.insert("address", self.address.as_str());
        doc
    }
}

impl TryFrom<Document> for PurchaseRequest {
    type Error = SchemaError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let schema = &PURCHASE_SCHEMA;
        let mut doc = schema.validate(document)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: schema.required_text(&mut doc, "name")?,
            email: schema.required_text(&mut doc, "email")?,
            country: schema.required_choice(&mut doc, "country")?,
            car: schema.required_choice(&mut doc, "selectcar")?,
            phone: schema.required_text(&mut doc, "phone")?,
            state: schema.required_text(&mut doc, "state")?,
            address: schema.required_text(&mut doc, "address")?,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Violation;

    fn form() -> Document {
        Document::new()
            .with("name", Some("Ada"))
            .with("email", Some("ada@example.com"))
            .with("country", Some("Japan"))
            .with("selectcar", Some("supra"))
            .with("phone", Some("555-0100"))
            .with("state", Some("Tokyo"))
            .with("address", Some("1 Chiyoda"))
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = PurchaseRequest::try_from(form()).unwrap();
        assert_eq!(request.country, Country::Japan);
        assert_eq!(request.car, CarModel::Supra);
        assert_eq!(request.address, "1 Chiyoda");
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_unknown_country_is_rejected() {
        let mut doc = form();
        doc.insert("country", "Mars");
        let err = PurchaseRequest::try_from(doc).unwrap_err();
        assert_eq!(err.collection, "purchase_requests");
        assert_eq!(
            err.violations,
            vec![Violation::NotAllowed {
                field: "country",
                value: "Mars".into()
            }]
        );
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let full = form();
        for rule in PURCHASE_SCHEMA.fields {
            let mut doc = Document::new();
            for other in PURCHASE_SCHEMA.fields.iter().filter(|r| r.name != rule.name) {
                if let Some(value) = full.get(other.name) {
                    doc.insert(other.name, value.clone());
                }
            }
            let err = PurchaseRequest::try_from(doc).unwrap_err();
            assert_eq!(err.violations, vec![Violation::Missing(rule.name)]);
        }
    }
}
