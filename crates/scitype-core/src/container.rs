//! Structural access to bulk containers and tables.
//!
//! [`BulkContainer`] is what the classifier needs from a homogeneous
//! container: its dimensionality, its element machine type, whether it may
//! hold missing values, and its elements. [`Tabular`] is what the schema
//! builder needs from a table.

use std::borrow::Cow;

use polars::prelude::{DataFrame, DataType, Series};
use scitype_model::MachineType;

use crate::value::{Array, ColumnTable, Value};

pub trait BulkContainer {
    fn ndims(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Machine type of the non-missing elements.
    fn element_type(&self) -> MachineType;

    /// Whether a missing value can be present.
    ///
    /// A `false` answer must be certain; a `true` answer only costs the
    /// caller a `Missing` in the result, which the elements justify.
    fn may_contain_missing(&self) -> bool;

    fn elements(&self) -> Box<dyn Iterator<Item = Cow<'_, Value>> + '_>;
}

impl BulkContainer for Array {
    fn ndims(&self) -> usize {
        Array::ndims(self)
    }

    fn len(&self) -> usize {
        Array::len(self)
    }

    fn element_type(&self) -> MachineType {
        Array::element_type(self).clone()
    }

    fn may_contain_missing(&self) -> bool {
        self.has_missing()
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Cow<'_, Value>> + '_> {
        Box::new(self.values().iter().map(Cow::Borrowed))
    }
}

impl BulkContainer for Series {
    fn ndims(&self) -> usize {
        1
    }

    // `Series` has no inherent `len`; go through `SeriesTrait` explicitly.
    fn len(&self) -> usize {
        (**self).len()
    }

    fn element_type(&self) -> MachineType {
        machine_type_of(self.dtype())
    }

    // The validity bitmap keeps an exact null count.
    fn may_contain_missing(&self) -> bool {
        self.null_count() > 0
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Cow<'_, Value>> + '_> {
        Box::new((0..(**self).len()).map(move |idx| {
            Cow::Owned(self.get(idx).map_or(Value::Missing, Value::from))
        }))
    }
}

/// Map a polars dtype onto a machine type.
pub fn machine_type_of(dtype: &DataType) -> MachineType {
    match dtype {
        DataType::Null => MachineType::Null,
        DataType::Boolean => MachineType::Boolean,
        DataType::Int8 => MachineType::Int8,
        DataType::Int16 => MachineType::Int16,
        DataType::Int32 => MachineType::Int32,
        DataType::Int64 => MachineType::Int64,
        DataType::UInt8 => MachineType::UInt8,
        DataType::UInt16 => MachineType::UInt16,
        DataType::UInt32 => MachineType::UInt32,
        DataType::UInt64 => MachineType::UInt64,
        DataType::Float32 => MachineType::Float32,
        DataType::Float64 => MachineType::Float64,
        DataType::String => MachineType::String,
        DataType::List(_) => MachineType::Array,
        other => MachineType::Other(other.to_string()),
    }
}

/// One column of a table, borrowed from it.
pub struct TableColumn<'a> {
    pub name: &'a str,
    pub machine_type: MachineType,
    pub values: &'a dyn BulkContainer,
}

/// Named, ordered columns.
pub trait Tabular {
    fn columns(&self) -> Vec<TableColumn<'_>>;

    /// Number of rows, when it can be determined.
    fn row_count(&self) -> Option<usize>;
}

impl Tabular for DataFrame {
    fn columns(&self) -> Vec<TableColumn<'_>> {
        self.get_columns()
            .iter()
            .map(|column| TableColumn {
                name: column.name().as_str(),
                machine_type: machine_type_of(column.dtype()),
                values: column.as_materialized_series(),
            })
            .collect()
    }

    fn row_count(&self) -> Option<usize> {
        Some(self.height())
    }
}

impl Tabular for ColumnTable {
    fn columns(&self) -> Vec<TableColumn<'_>> {
        ColumnTable::columns(self)
            .iter()
            .map(|(name, array)| TableColumn {
                name: name.as_str(),
                machine_type: array.element_type().clone(),
                values: array,
            })
            .collect()
    }

    /// The shared column length; `None` for ragged columns.
    fn row_count(&self) -> Option<usize> {
        let mut lengths = ColumnTable::columns(self).iter().map(|(_, array)| array.len());
        let first = lengths.next().unwrap_or(0);
        lengths.all(|len| len == first).then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use polars::df;
    use polars::prelude::NamedFrom;

    use super::*;

    #[test]
    fn series_reports_nulls_from_validity() {
        let with_null = Series::new("a".into(), &[Some(1.0f64), None]);
        let without = Series::new("b".into(), &[1.0f64, 2.0]);
        assert!(with_null.may_contain_missing());
        assert!(!without.may_contain_missing());
        assert_eq!(BulkContainer::element_type(&with_null), MachineType::Float64);
    }

    #[test]
    fn series_elements_convert_nulls() {
        let series = Series::new("a".into(), &[Some(1i64), None]);
        let values: Vec<_> = series.elements().collect();
        assert!(matches!(values[0].as_ref(), Value::Int(1)));
        assert!(values[1].is_missing());
    }

    #[test]
    fn series_length_comes_from_the_column() {
        let series = Series::new("s".into(), &["a", "b", "c"]);
        assert_eq!(BulkContainer::len(&series), 3);
        assert!(!BulkContainer::is_empty(&series));
        assert_eq!(series.elements().count(), 3);
        assert!(matches!(series.elements().next().as_deref(), Some(Value::Str(s)) if s == "a"));
    }

    #[test]
    fn ragged_column_table_has_no_row_count() {
        let even = ColumnTable::new([
            ("a", Array::vector([1i64, 2])),
            ("b", Array::vector([1.0, 2.0])),
        ])
        .expect("table");
        assert_eq!(even.row_count(), Some(2));

        let ragged = ColumnTable::new([
            ("a", Array::vector([1i64, 2])),
            ("b", Array::vector([1.0])),
        ])
        .expect("table");
        assert_eq!(ragged.row_count(), None);
    }

    #[test]
    fn frame_columns_keep_declared_order() {
        let df = df!("z" => [1i32, 2], "a" => ["x", "y"]).expect("frame");
        let columns = Tabular::columns(&df);
        let names: Vec<_> = columns.iter().map(|c| c.name).collect();
        assert_eq!(names, ["z", "a"]);
        assert_eq!(columns[0].machine_type, MachineType::Int32);
        assert_eq!(columns[1].machine_type, MachineType::String);
        assert_eq!(Tabular::row_count(&df), Some(2));
    }
}
