//! The values the classifier understands.

use std::collections::HashSet;
use std::sync::Arc;

use polars::prelude::{AnyValue, DataFrame, Series};
use scitype_model::{MachineType, Result, ScitypeError};

use crate::container::Tabular;

/// A value to classify.
///
/// Bulk containers come in two flavours: [`Array`] (in-memory, any number of
/// dimensions) and polars [`Series`] (one dimension). Tables come as polars
/// [`DataFrame`]s or as a [`ColumnTable`] of named arrays; whether they are
/// treated as tables is decided by the registered trait predicates.
#[derive(Debug, Clone)]
pub enum Value {
    /// The missing-value sentinel.
    Missing,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Categorical(Categorical),
    Image(Image),
    /// A scalar of some other kind, carried by type name only.
    Opaque(String),
    /// Fixed-arity heterogeneous sequence.
    Tuple(Vec<Value>),
    Array(Array),
    Series(Series),
    Frame(DataFrame),
    Columns(ColumnTable),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn machine_type(&self) -> MachineType {
        match self {
            Self::Missing => MachineType::Null,
            Self::Bool(_) => MachineType::Boolean,
            Self::Int(_) => MachineType::Int64,
            Self::UInt(_) => MachineType::UInt64,
            Self::Float(_) => MachineType::Float64,
            Self::Str(_) => MachineType::String,
            Self::Categorical(_) => MachineType::Categorical,
            Self::Image(_) => MachineType::Image,
            Self::Opaque(name) => MachineType::Other(name.clone()),
            Self::Tuple(_) => MachineType::Tuple,
            Self::Array(_) | Self::Series(_) => MachineType::Array,
            Self::Frame(_) | Self::Columns(_) => MachineType::Table,
        }
    }

    /// Column access for table-shaped values.
    ///
    /// This is structure only; whether the value is classified as a table is
    /// up to the trait resolver.
    pub fn as_table(&self) -> Option<&dyn Tabular> {
        match self {
            Self::Frame(df) => Some(df),
            Self::Columns(table) => Some(table),
            _ => None,
        }
    }
}

impl From<AnyValue<'_>> for Value {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Self::Missing,
            AnyValue::Boolean(b) => Self::Bool(b),
            AnyValue::Int8(v) => Self::Int(i64::from(v)),
            AnyValue::Int16(v) => Self::Int(i64::from(v)),
            AnyValue::Int32(v) => Self::Int(i64::from(v)),
            AnyValue::Int64(v) => Self::Int(v),
            AnyValue::UInt8(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt16(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt32(v) => Self::UInt(u64::from(v)),
            AnyValue::UInt64(v) => Self::UInt(v),
            AnyValue::Float32(v) => Self::Float(f64::from(v)),
            AnyValue::Float64(v) => Self::Float(v),
            AnyValue::String(s) => Self::Str(s.to_string()),
            AnyValue::StringOwned(s) => Self::Str(s.to_string()),
            other => Self::Opaque(other.dtype().to_string()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<Categorical> for Value {
    fn from(value: Categorical) -> Self {
        Self::Categorical(value)
    }
}

impl From<Image> for Value {
    fn from(value: Image) -> Self {
        Self::Image(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Series> for Value {
    fn from(value: Series) -> Self {
        Self::Series(value)
    }
}

impl From<DataFrame> for Value {
    fn from(value: DataFrame) -> Self {
        Self::Frame(value)
    }
}

impl From<ColumnTable> for Value {
    fn from(value: ColumnTable) -> Self {
        Self::Columns(value)
    }
}

/// The fixed level set shared by categorical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    levels: Vec<String>,
    ordered: bool,
}

impl CategoryPool {
    /// Build a pool from `levels`, dropping repeated levels.
    pub fn new<I, S>(levels: I, ordered: bool) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let levels = levels
            .into_iter()
            .map(Into::into)
            .filter(|level: &String| seen.insert(level.clone()))
            .collect();
        Arc::new(Self { levels, ordered })
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn cardinality(&self) -> usize {
        self.levels.len()
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// The categorical value for `level`, if it belongs to the pool.
    pub fn value(self: &Arc<Self>, level: &str) -> Option<Categorical> {
        let index = self.levels.iter().position(|candidate| candidate == level)?;
        Some(Categorical {
            pool: Arc::clone(self),
            index,
        })
    }
}

/// One level of a [`CategoryPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorical {
    pool: Arc<CategoryPool>,
    index: usize,
}

impl Categorical {
    pub fn level(&self) -> &str {
        &self.pool.levels[self.index]
    }

    pub fn pool(&self) -> &CategoryPool {
        &self.pool
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Gray,
    Color,
}

/// Image dimensions and colour model; pixel data plays no part in
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub color: ColorModel,
}

impl Image {
    pub fn gray(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: ColorModel::Gray,
        }
    }

    pub fn color(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: ColorModel::Color,
        }
    }
}

/// Homogeneous N-dimensional container stored in row-major order.
#[derive(Debug, Clone)]
pub struct Array {
    shape: Vec<usize>,
    element_type: MachineType,
    has_missing: bool,
    values: Vec<Value>,
}

impl Array {
    /// Build an array with the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`ScitypeError::Shape`] when the shape does not hold exactly
    /// `values.len()` elements.
    pub fn new(shape: Vec<usize>, values: Vec<Value>) -> Result<Self> {
        let expected = shape.iter().product::<usize>();
        if expected != values.len() {
            return Err(ScitypeError::Shape {
                expected,
                actual: values.len(),
            });
        }
        let (element_type, has_missing) = infer_element_type(&values);
        Ok(Self {
            shape,
            element_type,
            has_missing,
            values,
        })
    }

    /// One-dimensional array.
    pub fn vector<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let (element_type, has_missing) = infer_element_type(&values);
        Self {
            shape: vec![values.len()],
            element_type,
            has_missing,
            values,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndims(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Machine type shared by the non-missing elements.
    pub fn element_type(&self) -> &MachineType {
        &self.element_type
    }

    pub fn has_missing(&self) -> bool {
        self.has_missing
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Common machine type of the non-missing values (`Any` when they differ,
/// `Null` when there are none) and whether any value is missing.
fn infer_element_type(values: &[Value]) -> (MachineType, bool) {
    let mut element_type: Option<MachineType> = None;
    let mut has_missing = false;
    for value in values {
        if value.is_missing() {
            has_missing = true;
            continue;
        }
        let machine = value.machine_type();
        match &element_type {
            None => element_type = Some(machine),
            Some(current) if *current == machine => {}
            Some(_) => element_type = Some(MachineType::Any),
        }
    }
    (element_type.unwrap_or(MachineType::Null), has_missing)
}

/// Ordered, named one-dimensional columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnTable {
    columns: Vec<(String, Array)>,
}

impl ColumnTable {
    /// # Errors
    ///
    /// Returns a usage error when two columns share a name or a column is not
    /// one-dimensional.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Array)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (name, array) in columns {
            let name = name.into();
            if array.ndims() != 1 {
                return Err(ScitypeError::usage(format!(
                    "column `{name}` has {} dimensions, expected 1",
                    array.ndims()
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(ScitypeError::usage(format!("duplicate column name `{name}`")));
            }
            out.push((name, array));
        }
        Ok(Self { columns: out })
    }

    pub fn columns(&self) -> &[(String, Array)] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
