use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{Document, FieldRule, Record, Schema, SchemaError};

pub static CREDENTIAL_SCHEMA: Schema = Schema {
    collection: "credentials",
    fields: &[FieldRule::text("email"), FieldRule::text("pass")],
};

/// Stored login credential. `password_hash` is a PHC string, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl Record for Credential {
    fn schema() -> &'static Schema {
        &CREDENTIAL_SCHEMA
    }

    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("email", self.email.as_str());
        doc.insert("pass", self.password_hash.as_str());
        doc
    }
}

/// Email and plaintext password taken from a login or registration form.
#[derive(Clone)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl TryFrom<Document> for LoginAttempt {
    type Error = SchemaError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let schema = &CREDENTIAL_SCHEMA;
        let mut doc = schema.validate(document)?;

        Ok(Self {
            email: schema.required_text(&mut doc, "email")?,
            password: schema.required_text(&mut doc, "pass")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Violation;

    #[test]
    fn test_attempt_requires_both_fields() {
        let doc = Document::new().with("email", Some("a@b.com"));
        let err = LoginAttempt::try_from(doc).unwrap_err();
        assert_eq!(err.violations, vec![Violation::Missing("pass")]);
    }

    #[test]
    fn test_attempt_debug_hides_password() {
        let doc = Document::new()
            .with("email", Some("a@b.com"))
            .with("pass", Some("hunter22"));
        let attempt = LoginAttempt::try_from(doc).unwrap();
        assert_eq!(attempt.password, "hunter22");
        assert!(!format!("{attempt:?}").contains("hunter22"));
    }

    #[test]
    fn test_credential_document_stores_hash_as_pass() {
        let credential = Credential::new("a@b.com".into(), "$argon2id$v=19$...".into());
        let doc = credential.to_document();
        assert_eq!(doc.get("pass").map(|v| v.to_text()), Some("$argon2id$v=19$...".into()));
        assert!(credential.check().is_ok());
    }
}
