//! # Magdalene Core
//!
//! The domain layer of the Magdalene form backend: submission records, their
//! collection schemas, the ports storage must implement, and the service that
//! ties them together. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod schema;
pub mod service;

pub use error::{DomainError, RepoError};
pub use schema::{Document, FieldValue, Record, Schema, SchemaError};
pub use service::{LoginOutcome, SubmissionService, SubmissionStores};
