use serde::Serialize;

use crate::machine::MachineType;
use crate::scitype::ScientificType;

/// One column of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaColumn {
    pub name: String,
    pub machine_type: MachineType,
    pub scitype: ScientificType,
}

/// Column names, machine types and scitypes of a table, co-indexed by column
/// position, plus the row count when it is known.
///
/// A schema is built in one step from its columns and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    names: Vec<String>,
    types: Vec<MachineType>,
    scitypes: Vec<ScientificType>,
    row_count: Option<usize>,
}

impl Schema {
    pub fn from_columns<I>(columns: I, row_count: Option<usize>) -> Self
    where
        I: IntoIterator<Item = SchemaColumn>,
    {
        let columns = columns.into_iter();
        let (lower, _) = columns.size_hint();
        let mut names = Vec::with_capacity(lower);
        let mut types = Vec::with_capacity(lower);
        let mut scitypes = Vec::with_capacity(lower);
        for column in columns {
            names.push(column.name);
            types.push(column.machine_type);
            scitypes.push(column.scitype);
        }
        Self {
            names,
            types,
            scitypes,
            row_count,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn types(&self) -> &[MachineType] {
        &self.types
    }

    pub fn scitypes(&self) -> &[ScientificType] {
        &self.scitypes
    }

    pub fn row_count(&self) -> Option<usize> {
        self.row_count
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = SchemaColumn> + '_ {
        self.names
            .iter()
            .zip(&self.types)
            .zip(&self.scitypes)
            .map(|((name, machine_type), scitype)| SchemaColumn {
                name: name.clone(),
                machine_type: machine_type.clone(),
                scitype: scitype.clone(),
            })
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<SchemaColumn> {
        let idx = self.names.iter().position(|candidate| candidate == name)?;
        Some(SchemaColumn {
            name: self.names[idx].clone(),
            machine_type: self.types[idx].clone(),
            scitype: self.scitypes[idx].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, machine_type: MachineType, scitype: ScientificType) -> SchemaColumn {
        SchemaColumn {
            name: name.to_string(),
            machine_type,
            scitype,
        }
    }

    #[test]
    fn sequences_are_co_indexed() {
        let schema = Schema::from_columns(
            vec![
                column("a", MachineType::Float64, ScientificType::Continuous),
                column("b", MachineType::Int64, ScientificType::Count),
            ],
            Some(4),
        );
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.names().len(), schema.types().len());
        assert_eq!(schema.types().len(), schema.scitypes().len());
        assert_eq!(schema.column("b").map(|c| c.scitype), Some(ScientificType::Count));
        assert_eq!(schema.column("z"), None);
    }

    #[test]
    fn schema_serializes() {
        let schema = Schema::from_columns(
            vec![column("a", MachineType::Float64, ScientificType::Continuous)],
            None,
        );
        let json = serde_json::to_value(&schema).expect("serialize schema");
        assert_eq!(json["names"][0], "a");
        assert_eq!(json["types"][0], "Float64");
        assert_eq!(json["scitypes"][0]["kind"], "Continuous");
        assert!(json["row_count"].is_null());
    }
}
