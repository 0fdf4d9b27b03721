use serde_json::Value;

///
/// ValueTag
///
/// Stable type tag used for cross-type ordering of document values.
///
/// IMPORTANT:
/// Tag order follows the database-native type ordering and is part of
/// observable sort behavior. Do not reorder variants.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ValueTag {
    Null = 1,
    Number = 2,
    Text = 3,
    Object = 4,
    Array = 5,
    Bool = 6,
}

impl ValueTag {
    /// Stable byte tag for this type.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable type label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Bool => "Bool",
        }
    }
}

/// Type tag of one document value.
#[must_use]
pub const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Null => ValueTag::Null,
        Value::Number(_) => ValueTag::Number,
        Value::String(_) => ValueTag::Text,
        Value::Object(_) => ValueTag::Object,
        Value::Array(_) => ValueTag::Array,
        Value::Bool(_) => ValueTag::Bool,
    }
}
