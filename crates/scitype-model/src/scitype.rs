//! The scientific type taxonomy.
//!
//! A scientific type (scitype) describes the role a value plays in an
//! analysis, independent of how it is stored: a `f64` and a `f32` are both
//! [`ScientificType::Continuous`], an `i64` and a `u8` are both
//! [`ScientificType::Count`].
//!
//! # Hierarchy
//!
//! ```text
//! Known
//! ├── Infinite ── Continuous, Count
//! ├── Finite ──── Multiclass(n), OrderedFactor(n)
//! ├── Image ───── GrayImage(w, h), ColorImage(w, h)
//! └── Table(column types)
//! Unknown
//! Missing
//! ```
//!
//! `Tuple` and `Array` are structural results produced when classifying
//! tuples and bulk containers; they are not scientific types themselves and
//! cannot parametrize a table.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScitypeError;

/// A scientific type.
///
/// Unions are kept canonical: build them with [`ScientificType::union`] or
/// [`ScientificType::union_all`], never by constructing the `Union` variant
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum ScientificType {
    /// Abstract: every successfully classified, non-missing scitype.
    Known,
    /// Abstract: `Continuous` or `Count`.
    Infinite,
    Continuous,
    Count,
    /// Abstract: any `Multiclass(n)` or `OrderedFactor(n)`.
    Finite,
    /// Unordered categorical with `n` levels.
    Multiclass(usize),
    /// Ordered categorical with `n` levels.
    OrderedFactor(usize),
    /// Abstract: any `GrayImage` or `ColorImage`.
    Image,
    GrayImage { width: usize, height: usize },
    ColorImage { width: usize, height: usize },
    /// A table, parametrized by the set of its columns' scitypes.
    Table(BTreeSet<ScientificType>),
    /// Per-position scitypes of a heterogeneous tuple.
    Tuple(Vec<ScientificType>),
    /// An `ndims`-dimensional bulk container of `element`.
    Array {
        ndims: usize,
        element: Box<ScientificType>,
    },
    /// No rule matched.
    Unknown,
    Missing,
    /// At least two members, flat, with no member subsumed by another.
    Union(BTreeSet<ScientificType>),
}

impl ScientificType {
    /// `Binary` is `Multiclass(2)`.
    pub fn binary() -> Self {
        Self::Multiclass(2)
    }

    pub fn table<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = ScientificType>,
    {
        Self::Table(columns.into_iter().collect())
    }

    pub fn array(ndims: usize, element: ScientificType) -> Self {
        Self::Array {
            ndims,
            element: Box::new(element),
        }
    }

    /// Union of two scitypes.
    ///
    /// Flattens nested unions and drops members that are sub-cases of
    /// another member, so `Continuous | Infinite` is `Infinite` and
    /// `Continuous | Continuous` is `Continuous`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut members = BTreeSet::new();
        self.collect_members(&mut members);
        other.collect_members(&mut members);
        Self::from_members(members)
    }

    /// Union of every scitype in `items`, or `None` when `items` is empty.
    pub fn union_all<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = ScientificType>,
    {
        let mut members = BTreeSet::new();
        for item in items {
            item.collect_members(&mut members);
        }
        if members.is_empty() {
            None
        } else {
            Some(Self::from_members(members))
        }
    }

    /// This scitype unioned with `Missing`.
    #[must_use]
    pub fn with_missing(self) -> Self {
        self.union(Self::Missing)
    }

    /// True when `Missing` is a sub-case of this scitype.
    pub fn admits_missing(&self) -> bool {
        Self::Missing.is_subtype_of(self)
    }

    /// The element scitype of an `Array`, otherwise `self`.
    pub fn element(&self) -> &Self {
        match self {
            Self::Array { element, .. } => element,
            other => other,
        }
    }

    /// Members of a union, or `self` alone.
    pub fn members(&self) -> Vec<&Self> {
        match self {
            Self::Union(members) => members.iter().collect(),
            other => vec![other],
        }
    }

    /// Concrete and abstract refinements of `Known`.
    pub fn is_known(&self) -> bool {
        match self {
            Self::Known
            | Self::Infinite
            | Self::Continuous
            | Self::Count
            | Self::Finite
            | Self::Multiclass(_)
            | Self::OrderedFactor(_)
            | Self::Image
            | Self::GrayImage { .. }
            | Self::ColorImage { .. }
            | Self::Table(_) => true,
            Self::Union(members) => members.iter().all(Self::is_known),
            Self::Tuple(_) | Self::Array { .. } | Self::Unknown | Self::Missing => false,
        }
    }

    /// Whether this may parametrize a table column: anything built without
    /// `Tuple` or `Array`.
    pub fn is_scientific(&self) -> bool {
        match self {
            Self::Tuple(_) | Self::Array { .. } => false,
            Self::Union(members) | Self::Table(members) => members.iter().all(Self::is_scientific),
            _ => true,
        }
    }

    /// The sub-case relation: `self` refines (or equals) `other`.
    pub fn is_subtype_of(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Self::Union(members), _) => members.iter().all(|m| m.is_subtype_of(other)),
            (_, Self::Union(members)) => members.iter().any(|m| self.is_subtype_of(m)),
            (_, Self::Known) => self.is_known(),
            (Self::Continuous | Self::Count, Self::Infinite) => true,
            (Self::Multiclass(_) | Self::OrderedFactor(_), Self::Finite) => true,
            (Self::GrayImage { .. } | Self::ColorImage { .. }, Self::Image) => true,
            // Column-wise: each column must fit one target on its own.
            (Self::Table(columns), Self::Table(targets)) => columns
                .iter()
                .all(|column| targets.iter().any(|target| column.is_subtype_of(target))),
            (
                Self::Array { ndims, element },
                Self::Array {
                    ndims: other_ndims,
                    element: other_element,
                },
            ) => ndims == other_ndims && element.is_subtype_of(other_element),
            (Self::Tuple(items), Self::Tuple(other_items)) => {
                items.len() == other_items.len()
                    && items
                        .iter()
                        .zip(other_items)
                        .all(|(item, other_item)| item.is_subtype_of(other_item))
            }
            _ => false,
        }
    }

    fn collect_members(self, members: &mut BTreeSet<Self>) {
        match self {
            Self::Union(inner) => members.extend(inner),
            other => {
                members.insert(other);
            }
        }
    }

    fn from_members(members: BTreeSet<Self>) -> Self {
        // Among mutually-subsumed members keep the least in `Ord`.
        let subsumed = |member: &Self| {
            members.iter().any(|other| {
                other != member
                    && member.is_subtype_of(other)
                    && (!other.is_subtype_of(member) || other < member)
            })
        };
        let mut maximal: BTreeSet<Self> = members
            .iter()
            .filter(|member| !subsumed(member))
            .cloned()
            .collect();
        if maximal.len() == 1 {
            maximal.pop_first().unwrap_or(Self::Unknown)
        } else {
            Self::Union(maximal)
        }
    }
}

fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, name: &str, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a ScientificType>,
{
    write!(f, "{name}(")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(")")
}

impl fmt::Display for ScientificType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known => f.write_str("Known"),
            Self::Infinite => f.write_str("Infinite"),
            Self::Continuous => f.write_str("Continuous"),
            Self::Count => f.write_str("Count"),
            Self::Finite => f.write_str("Finite"),
            Self::Multiclass(n) => write!(f, "Multiclass({n})"),
            Self::OrderedFactor(n) => write!(f, "OrderedFactor({n})"),
            Self::Image => f.write_str("Image"),
            Self::GrayImage { width, height } => write!(f, "GrayImage({width}, {height})"),
            Self::ColorImage { width, height } => write!(f, "ColorImage({width}, {height})"),
            Self::Table(columns) => write_list(f, "Table", columns),
            Self::Tuple(items) => write_list(f, "Tuple", items),
            Self::Array { ndims, element } => write!(f, "Array({ndims}, {element})"),
            Self::Unknown => f.write_str("Unknown"),
            Self::Missing => f.write_str("Missing"),
            Self::Union(members) => write_list(f, "Union", members),
        }
    }
}

impl FromStr for ScientificType {
    type Err = ScitypeError;

    /// Parse a scitype name such as `Continuous`, `Multiclass(3)`,
    /// `GrayImage(28, 28)` or a union `Continuous | Missing`.
    ///
    /// `Table`, `Tuple` and `Array` have no textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('|').map(parse_atom);
        let first = parts
            .next()
            .ok_or_else(|| ScitypeError::configuration("empty scitype name"))??;
        parts.try_fold(first, |acc, part| Ok(acc.union(part?)))
    }
}

fn parse_atom(raw: &str) -> Result<ScientificType, ScitypeError> {
    let text = raw.trim();
    let invalid = || ScitypeError::configuration(format!("`{text}` is not a scientific type"));

    let (name, args) = match text.find('(') {
        Some(open) => {
            let inner = text[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
            let args = inner
                .split(',')
                .map(|arg| arg.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            (text[..open].trim(), Some(args))
        }
        None => (text, None),
    };

    match (name, args.as_deref()) {
        ("Known", None) => Ok(ScientificType::Known),
        ("Infinite", None) => Ok(ScientificType::Infinite),
        ("Continuous", None) => Ok(ScientificType::Continuous),
        ("Count", None) => Ok(ScientificType::Count),
        ("Finite", None) => Ok(ScientificType::Finite),
        ("Binary", None) => Ok(ScientificType::binary()),
        ("Multiclass", Some([n])) => Ok(ScientificType::Multiclass(*n)),
        ("OrderedFactor", Some([n])) => Ok(ScientificType::OrderedFactor(*n)),
        ("Image", None) => Ok(ScientificType::Image),
        ("GrayImage", Some([width, height])) => Ok(ScientificType::GrayImage {
            width: *width,
            height: *height,
        }),
        ("ColorImage", Some([width, height])) => Ok(ScientificType::ColorImage {
            width: *width,
            height: *height,
        }),
        ("Unknown", None) => Ok(ScientificType::Unknown),
        ("Missing", None) => Ok(ScientificType::Missing),
        _ => Err(invalid()),
    }
}
