//! Schema builder: names, machine types and scitypes of a table's columns.

use scitype_model::{Result, Schema, SchemaColumn, ScitypeError, TraitTag};

use crate::classifier::Classifier;
use crate::container::Tabular;
use crate::value::Value;

const NOT_INTROSPECTABLE: &str = "value is not introspectable; table support may be missing";

impl Classifier {
    /// Schema of a table-like value.
    ///
    /// # Errors
    ///
    /// Returns a usage error unless the value's trait tag is `table` and it
    /// exposes columns.
    pub fn schema(&self, value: &Value) -> Result<Schema> {
        if self.classify_trait(value) != TraitTag::TABLE {
            return Err(ScitypeError::usage(NOT_INTROSPECTABLE));
        }
        let table = value
            .as_table()
            .ok_or_else(|| ScitypeError::usage(NOT_INTROSPECTABLE))?;
        Ok(self.table_schema(table))
    }

    /// Schema of anything with columns, skipping the trait check.
    pub fn table_schema(&self, table: &dyn Tabular) -> Schema {
        let columns = table
            .columns()
            .into_iter()
            .map(|column| {
                let scitype = self.container_scitype(column.values).element().clone();
                tracing::trace!(
                    column = column.name,
                    machine = %column.machine_type,
                    scitype = %scitype,
                    "classified column"
                );
                SchemaColumn {
                    name: column.name.to_string(),
                    machine_type: column.machine_type,
                    scitype,
                }
            })
            .collect::<Vec<_>>();
        Schema::from_columns(columns, table.row_count())
    }
}
