//! Scientific type model definitions.
//!
//! - **scitype**: the [`ScientificType`] taxonomy and its sub-case relation
//! - **machine**: storage types used to key fast-path lookups
//! - **ids**: convention names and trait tags
//! - **schema**: per-column descriptors of a table
//! - **error**: the shared error type

pub mod error;
pub mod ids;
pub mod machine;
pub mod schema;
pub mod scitype;

pub use error::{Result, ScitypeError};
pub use ids::{ConventionName, TraitTag};
pub use machine::MachineType;
pub use schema::{Schema, SchemaColumn};
pub use scitype::ScientificType;
