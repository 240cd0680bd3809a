//! Table type constructor: `Table(T1, ..., Tn)`.

use std::collections::BTreeSet;

use scitype_model::{Result, ScientificType, ScitypeError};

/// The scitype "table whose every column is one of these types".
///
/// Compatibility is decided per column: a table fits when each of its
/// columns, on its own, is a sub-case of one of the column types. Comparing
/// the union of all columns against the union of the column types is not the
/// same thing and is never done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableType {
    column_types: BTreeSet<ScientificType>,
}

impl TableType {
    /// # Errors
    ///
    /// Returns a configuration error, before any data is seen, when a column
    /// type is not a scientific type (for example an `Array` or `Tuple`).
    pub fn new<I>(column_types: I) -> Result<Self>
    where
        I: IntoIterator<Item = ScientificType>,
    {
        let column_types = column_types
            .into_iter()
            .map(|column_type| {
                if column_type.is_scientific() {
                    Ok(column_type)
                } else {
                    Err(ScitypeError::configuration(format!(
                        "table column type must be a scientific type, got {column_type}"
                    )))
                }
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { column_types })
    }

    /// Build from scitype names such as `"Continuous"` or
    /// `"Count | Missing"`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any name that is not a scitype.
    pub fn parse<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let column_types = names
            .into_iter()
            .map(|name| name.as_ref().parse::<ScientificType>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(column_types)
    }

    pub fn column_types(&self) -> &BTreeSet<ScientificType> {
        &self.column_types
    }

    pub fn scitype(&self) -> ScientificType {
        ScientificType::Table(self.column_types.clone())
    }

    /// Whether a value of scitype `scitype` is a compatible table.
    pub fn accepts(&self, scitype: &ScientificType) -> bool {
        match scitype {
            ScientificType::Table(columns) => columns.iter().all(|column| {
                self.column_types
                    .iter()
                    .any(|column_type| column.is_subtype_of(column_type))
            }),
            ScientificType::Union(members) => members.iter().all(|member| self.accepts(member)),
            _ => false,
        }
    }
}
