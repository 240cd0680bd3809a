//! Scientific type classification.
//!
//! This crate provides the classification engine:
//!
//! - **value**: the [`Value`] model, bulk containers and tables
//! - **container**: structural access used by the classifier and schema builder
//! - **trait_resolver**: ordered predicates tagging values (e.g. `table`)
//! - **convention**: pluggable rulesets and the active-convention selector
//! - **fast_path**: element machine type shortcuts for bulk containers
//! - **classifier**: the [`Classifier`] context and its `scitype` algorithm
//! - **table_type**: the `Table(T1, ..., Tn)` constructor
//! - **schema**: per-column schema computation
//! - **global**: a process-wide classifier installed once at startup

pub mod classifier;
pub mod container;
pub mod convention;
pub mod fast_path;
pub mod global;
pub mod options;
pub mod schema;
pub mod table_type;
pub mod trait_resolver;
pub mod value;

pub use classifier::Classifier;
pub use container::{BulkContainer, TableColumn, Tabular, machine_type_of};
pub use convention::{Convention, ConventionRegistry};
pub use fast_path::FastPathRegistry;
pub use global::{global, install_global, schema, scitype, scitype_union};
pub use options::ClassifierOptions;
pub use table_type::TableType;
pub use trait_resolver::TraitResolver;
pub use value::{Array, Categorical, CategoryPool, ColorModel, ColumnTable, Image, Value};

// Re-export the model so callers need a single dependency.
pub use scitype_model::{
    ConventionName, MachineType, Result, Schema, SchemaColumn, ScientificType, ScitypeError,
    TraitTag,
};
