use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::choices::ServiceType;
use crate::schema::{Document, FieldRule, Record, Schema, SchemaError};

pub static BOOKING_SCHEMA: Schema = Schema {
    collection: "bookings",
    fields: &[
        FieldRule::text("name"),
        FieldRule::text("email"),
        FieldRule::one_of("selectaservice", ServiceType::ALLOWED),
        FieldRule::text("date"),
        FieldRule::text("specialrequest"),
    ],
};

/// A workshop service booking.
///
/// `date` is kept exactly as the form sent it; the booking page uses a free
/// text date picker and no format is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub service: ServiceType,
    pub date: String,
    pub special_request: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Booking {
    fn schema() -> &'static Schema {
        &BOOKING_SCHEMA
    }

    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("name", self.name.as_str());
        doc.insert("email", self.email.as_str());
        doc.insert("selectaservice", self.service.as_str());
        doc.insert("date", self.date.as_str());
        doc.insert("specialrequest", self.special_request.as_str());
        doc
    }
}

impl TryFrom<Document> for Booking {
    type Error = SchemaError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let schema = &BOOKING_SCHEMA;
        let mut doc = schema.validate(document)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: schema.required_text(&mut doc, "name")?,
            email: schema.required_text(&mut doc, "email")?,
            service: schema.required_choice(&mut doc, "selectaservice")?,
            date: schema.required_text(&mut doc, "date")?,
            special_request: schema.required_text(&mut doc, "specialrequest")?,
            created_at: Utc::now(),
        })
    }
}
