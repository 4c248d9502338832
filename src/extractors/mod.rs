//! Request extractors.

pub mod contact_id;
pub use contact_id::ContactId;
