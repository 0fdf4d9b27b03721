use crate::error::SortError;
use std::fmt;

///
/// PathSegment
///
/// One dot-separated component of a field path. Segments made only of
/// ASCII digits double as explicit array indexes.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathSegment {
    name: String,
    index: Option<usize>,
}

impl PathSegment {
    fn new(name: &str) -> Self {
        let index = if is_numeric_key(name) {
            name.parse().ok()
        } else {
            None
        };

        Self {
            name: name.to_string(),
            index,
        }
    }

    /// Object key this segment selects.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Array index this segment selects, if it is numeric.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }
}

///
/// FieldPath
///
/// Dot-separated document path, split once at construction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Parse a dotted path; empty paths and empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self, SortError> {
        if raw.is_empty() {
            return Err(SortError::invalid_spec("sort path must not be empty"));
        }

        let segments = raw
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    Err(SortError::invalid_spec(format!(
                        "sort path '{raw}' contains an empty segment"
                    )))
                } else {
                    Ok(PathSegment::new(part))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_numeric_key(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
