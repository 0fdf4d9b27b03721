use crate::{document::FieldPath, error::SortError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// Direction
///
/// Per-field ordering direction.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Mapping-literal direction: any non-negative number is ascending.
    #[must_use]
    pub fn from_number(direction: f64) -> Self {
        if direction >= 0.0 { Self::Asc } else { Self::Desc }
    }

    /// Pair-literal direction token.
    pub fn from_token(token: &str) -> Result<Self, SortError> {
        match token {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SortError::invalid_spec(format!(
                "sort direction must be \"asc\" or \"desc\", found \"{other}\""
            ))),
        }
    }
}

///
/// SpecElement
///
/// One element of a sequence-shaped sort literal.
///

#[derive(Clone, Debug, PartialEq)]
pub enum SpecElement {
    /// Bare path; always ascending.
    Path(String),
    /// `[path, "asc" | "desc"]`.
    Pair(String, Direction),
}

impl SpecElement {
    fn from_value(position: usize, value: &Value) -> Result<Self, SortError> {
        match value {
            Value::String(path) => Ok(Self::Path(path.clone())),
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(path), Value::String(token)] => {
                    Ok(Self::Pair(path.clone(), Direction::from_token(token)?))
                }
                _ => Err(SortError::invalid_spec(format!(
                    "sort element {position} must be [path, \"asc\" | \"desc\"], found {value}"
                ))),
            },
            other => Err(SortError::invalid_spec(format!(
                "sort element {position} must be a path or a [path, direction] pair, found {other}"
            ))),
        }
    }

    fn into_parts(self) -> (String, Direction) {
        match self {
            Self::Path(path) => (path, Direction::Asc),
            Self::Pair(path, direction) => (path, direction),
        }
    }
}

///
/// SpecLiteral
///
/// Closed set of accepted sort literal shapes, resolved once at parse time.
///

#[derive(Clone, Debug, PartialEq)]
pub enum SpecLiteral {
    /// `{path: direction, …}` in insertion order.
    Mapping(Vec<(String, f64)>),
    /// `[path | [path, direction], …]`.
    Sequence(Vec<SpecElement>),
}

impl TryFrom<&Value> for SpecLiteral {
    type Error = SortError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(path, direction)| {
                    let direction = direction.as_f64().ok_or_else(|| {
                        SortError::invalid_spec(format!(
                            "sort direction for '{path}' must be a number, found {direction}"
                        ))
                    })?;

                    Ok((path.clone(), direction))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Mapping),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(position, item)| SpecElement::from_value(position, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            other => Err(SortError::invalid_spec(format!(
                "expected a mapping or a sequence, found {other}"
            ))),
        }
    }
}

///
/// SortField
///
/// One `(path, direction)` entry of a sort specification.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortField {
    pub path: FieldPath,
    pub direction: Direction,
}

impl SortField {
    pub fn new(path: &str, direction: Direction) -> Result<Self, SortError> {
        Ok(Self {
            path: FieldPath::parse(path)?,
            direction,
        })
    }

    #[must_use]
    pub fn ascending(&self) -> bool {
        self.direction == Direction::Asc
    }
}

///
/// SortSpec
///
/// Ordered, immutable sort specification. Field order is comparator
/// precedence.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(try_from = "Value")]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    /// Empty specification; every document compares equal under it.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Parse a sort literal: a `{path: direction}` mapping, or a sequence of
    /// paths and `[path, "asc" | "desc"]` pairs.
    pub fn parse(literal: &Value) -> Result<Self, SortError> {
        let spec = Self::from_literal(SpecLiteral::try_from(literal)?)?;
        tracing::trace!(fields = spec.len(), paths = ?spec.paths(), "parsed sort specification");

        Ok(spec)
    }

    pub fn from_literal(literal: SpecLiteral) -> Result<Self, SortError> {
        let entries: Vec<(String, Direction)> = match literal {
            SpecLiteral::Mapping(entries) => entries
                .into_iter()
                .map(|(path, direction)| (path, Direction::from_number(direction)))
                .collect(),
            SpecLiteral::Sequence(elements) => {
                elements.into_iter().map(SpecElement::into_parts).collect()
            }
        };

        let fields = entries
            .iter()
            .map(|(path, direction)| SortField::new(path, *direction))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields })
    }

    /// Append an ascending field.
    pub fn order_by(self, path: impl AsRef<str>) -> Result<Self, SortError> {
        self.push(path, Direction::Asc)
    }

    /// Append a descending field.
    pub fn order_by_desc(self, path: impl AsRef<str>) -> Result<Self, SortError> {
        self.push(path, Direction::Desc)
    }

    fn push(mut self, path: impl AsRef<str>, direction: Direction) -> Result<Self, SortError> {
        self.fields.push(SortField::new(path.as_ref(), direction)?);

        Ok(self)
    }

    /// Raw paths in precedence order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.path.as_str()).collect()
    }

    #[must_use]
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.fields.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Value> for SortSpec {
    type Error = SortError;

    fn try_from(literal: Value) -> Result<Self, Self::Error> {
        Self::parse(&literal)
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortField;
    type IntoIter = std::slice::Iter<'a, SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
