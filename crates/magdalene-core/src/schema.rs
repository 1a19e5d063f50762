//! Declarative per-collection schemas.
//!
//! A [`Schema`] lists the fields a collection accepts, whether each is
//! required, its type, and (for enumerated fields) the closed set of allowed
//! values. [`Schema::validate`] casts a loosely-typed [`Document`] into the
//! declared types and reports every violation at once.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single field value as received from a request or produced by a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text form of the value, used for enum membership checks.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// A flat, unordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. `None` leaves the field absent.
    pub fn with(mut self, field: &str, value: Option<impl Into<FieldValue>>) -> Self {
        if let Some(value) = value {
            self.fields.insert(field.to_string(), value.into());
        }
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Remove a text field. Numbers are rendered as text.
    pub fn take_text(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field).map(|v| match v {
            FieldValue::Text(s) => s,
            other => other.to_text(),
        })
    }

    /// Remove a number field. Returns `None` for absent or non-numeric text.
    pub fn take_number(&mut self, field: &str) -> Option<f64> {
        match self.fields.remove(field)? {
            FieldValue::Number(n) => Some(n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Number => write!(f, "number"),
        }
    }
}

/// Constraint set for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldRule {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: true,
            allowed: None,
        }
    }

    pub const fn optional_text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: false,
            allowed: None,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            required: true,
            allowed: None,
        }
    }

    pub const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: true,
            allowed: Some(allowed),
        }
    }

    /// Cast a present value to the declared kind.
    ///
    /// `Ok(None)` means the value is empty and counts as absent.
    fn cast(&self, value: &FieldValue) -> Result<Option<FieldValue>, Violation> {
        match (self.kind, value) {
            (FieldKind::String, FieldValue::Text(s)) if s.is_empty() => Ok(None),
            (FieldKind::String, v) => Ok(Some(FieldValue::Text(v.to_text()))),
            (FieldKind::Number, FieldValue::Number(n)) if n.is_finite() => {
                Ok(Some(FieldValue::Number(*n)))
            }
            (FieldKind::Number, FieldValue::Text(s)) if s.trim().is_empty() => Ok(None),
            (FieldKind::Number, FieldValue::Text(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Some(FieldValue::Number(n))),
                _ => Err(self.wrong_type()),
            },
            (FieldKind::Number, FieldValue::Number(_)) => Err(self.wrong_type()),
        }
    }

    fn wrong_type(&self) -> Violation {
        Violation::InvalidType {
            field: self.name,
            expected: self.kind,
        }
    }
}

/// A single reason a document was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("`{0}` is required")]
    Missing(&'static str),

    #[error("`{field}` must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: FieldKind,
    },

    #[error("`{value}` is not an allowed value for `{field}`")]
    NotAllowed { field: &'static str, value: String },
}

impl Violation {
    pub fn field(&self) -> &'static str {
        match self {
            Violation::Missing(field)
            | Violation::InvalidType { field, .. }
            | Violation::NotAllowed { field, .. } => *field,
        }
    }
}

/// Rejection of a whole document by a collection's schema.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{collection} validation failed: {}", join(.violations))]
pub struct SchemaError {
    pub collection: &'static str,
    pub violations: Vec<Violation>,
}

impl SchemaError {
    pub fn single(collection: &'static str, violation: Violation) -> Self {
        Self {
            collection,
            violations: vec![violation],
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rule set for one named collection.
#[derive(Debug)]
pub struct Schema {
    pub collection: &'static str,
    pub fields: &'static [FieldRule],
}

impl Schema {
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.name == field)
    }

    /// Validate and cast `document` against this schema.
    ///
    /// Undeclared fields are dropped. On success the returned document holds
    /// only declared fields, each cast to its declared kind.
    pub fn validate(&self, document: Document) -> Result<Document, SchemaError> {
        let mut conformed = Document::new();
        let mut violations = Vec::new();

        for rule in self.fields {
            let cast = match document.get(rule.name) {
                Some(value) => rule.cast(value),
                None => Ok(None),
            };

            match cast {
                Ok(Some(value)) => {
                    if let Some(allowed) = rule.allowed {
                        let text = value.to_text();
                        if !allowed.contains(&text.as_str()) {
                            violations.push(Violation::NotAllowed {
                                field: rule.name,
                                value: text,
                            });
                            continue;
                        }
                    }
                    conformed.insert(rule.name, value);
                }
                Ok(None) if rule.required => violations.push(Violation::Missing(rule.name)),
                Ok(None) => {}
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(conformed)
        } else {
            Err(SchemaError {
                collection: self.collection,
                violations,
            })
        }
    }

    /// Take a required text field out of an already validated document.
    pub fn required_text(
        &self,
        document: &mut Document,
        field: &'static str,
    ) -> Result<String, SchemaError> {
        document
            .take_text(field)
            .ok_or_else(|| SchemaError::single(self.collection, Violation::Missing(field)))
    }

    /// Take a required enumerated field and parse it into its closed set.
    pub fn required_choice<T: FromStr>(
        &self,
        document: &mut Document,
        field: &'static str,
    ) -> Result<T, SchemaError> {
        let value = self.required_text(document, field)?;
        value.parse().map_err(|_| {
            SchemaError::single(self.collection, Violation::NotAllowed { field, value })
        })
    }

    /// Take a required number field out of an already validated document.
    pub fn required_number(
        &self,
        document: &mut Document,
        field: &'static str,
    ) -> Result<f64, SchemaError> {
        document
            .take_number(field)
            .ok_or_else(|| SchemaError::single(self.collection, Violation::Missing(field)))
    }
}

/// A persisted submission kind, bound to the schema of its collection.
pub trait Record: Clone + Send + Sync + 'static {
    fn schema() -> &'static Schema;

    /// The stored shape of the record, as checked by the store on write.
    fn to_document(&self) -> Document;

    /// Run the collection's schema over this record's stored shape.
    fn check(&self) -> Result<(), SchemaError> {
        Self::schema().validate(self.to_document()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SIZES: &[&str] = &["small", "large"];

    static TEST_SCHEMA: Schema = Schema {
        collection: "widgets",
        fields: &[
            FieldRule::text("name"),
            FieldRule::number("count"),
            FieldRule::one_of("size", SIZES),
            FieldRule::optional_text("note"),
        ],
    };

    fn valid() -> Document {
        Document::new()
            .with("name", Some("bolt"))
            .with("count", Some(3.0))
            .with("size", Some("small"))
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = TEST_SCHEMA.validate(valid()).unwrap();
        assert_eq!(doc.get("name"), Some(&FieldValue::Text("bolt".into())));
        assert_eq!(doc.get("count"), Some(&FieldValue::Number(3.0)));
        assert!(!doc.contains("note"));
    }

    #[test]
    fn test_undeclared_fields_are_dropped() {
        let mut input = valid();
        input.insert("colour", "red");
        let doc = TEST_SCHEMA.validate(input).unwrap();
        assert!(!doc.contains("colour"));
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_missing_and_empty_required_fields() {
        let input = Document::new()
            .with("name", Some(""))
            .with("size", Some("small"));
        let err = TEST_SCHEMA.validate(input).unwrap_err();
        assert_eq!(err.collection, "widgets");
        assert_eq!(
            err.violations,
            vec![Violation::Missing("name"), Violation::Missing("count")]
        );
    }

    #[test]
    fn test_enum_value_outside_set() {
        let mut input = valid();
        input.insert("size", "Small");
        let err = TEST_SCHEMA.validate(input).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::NotAllowed {
                field: "size",
                value: "Small".into()
            }]
        );
    }

    #[test]
    fn test_number_cast_from_text() {
        let mut input = valid();
        input.insert("count", " 12.5 ");
        let doc = TEST_SCHEMA.validate(input).unwrap();
        assert_eq!(doc.get("count"), Some(&FieldValue::Number(12.5)));
    }

    #[test]
    fn test_number_rejects_garbage_and_nan() {
        for bad in ["two", "NaN", "inf"] {
            let mut input = valid();
            input.insert("count", bad);
            let err = TEST_SCHEMA.validate(input).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::InvalidType {
                    field: "count",
                    expected: FieldKind::Number
                }],
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_number_in_text_field_becomes_text() {
        let mut input = valid();
        input.insert("name", 42.0);
        let doc = TEST_SCHEMA.validate(input).unwrap();
        assert_eq!(doc.get("name"), Some(&FieldValue::Text("42".into())));
    }

    #[test]
    fn test_error_message_lists_every_violation() {
        let err = TEST_SCHEMA.validate(Document::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("widgets validation failed"));
        assert!(message.contains("`name` is required"));
        assert!(message.contains("`size` is required"));
    }
}
