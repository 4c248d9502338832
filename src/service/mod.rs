//! ContactService and mutation validation.

mod contacts;
mod validation;
pub use contacts::ContactService;
pub use validation::{validate_field, validate_mutation, FieldFormat, FieldRule};
