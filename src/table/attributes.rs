//! Attribute values carried by entity records.
//!
//! Source spreadsheets mix text, integer, and decimal columns, with empty
//! cells scattered through. The engine doesn't interpret most columns; it
//! only needs exact-value grouping and, for a few columns, numeric or text
//! comparisons.
//!
//! ## AttributeValue Types
//!
//! - `Text`: Categorical values ("Rod", "Positive", "No")
//! - `Int`: Whole numbers
//! - `Float`: Decimal numbers (GC content)
//! - `Bool`: Flags
//! - `Missing`: Empty cell; never forms a group

use serde::{Deserialize, Serialize};

/// Value of one attribute cell.
///
/// Deserializes untagged, so JSON `null`, `true`, `12`, `51.3` and `"Rod"`
/// all map onto the natural variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Empty cell.
    Missing,
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Decimal value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl AttributeValue {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as f64 if this is a numeric value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(v) => Some(*v as f64),
            AttributeValue::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// Is this an empty cell? NaN counts as empty.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            AttributeValue::Missing => true,
            AttributeValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Hashable, totally ordered key for exact-value grouping.
    ///
    /// Integers and decimals share one numeric key space, so `7` and `7.0`
    /// land in the same group. Returns `None` for missing values.
    #[must_use]
    pub fn group_key(&self) -> Option<GroupKey> {
        if self.is_missing() {
            return None;
        }
        Some(match self {
            AttributeValue::Bool(v) => GroupKey::Bool(*v),
            AttributeValue::Int(v) => GroupKey::Number(ordered_bits(*v as f64)),
            AttributeValue::Float(v) => GroupKey::Number(ordered_bits(*v)),
            AttributeValue::Text(s) => GroupKey::Text(s.clone()),
            AttributeValue::Missing => return None,
        })
    }
}

// Same transform `f64::total_cmp` uses, so derived `Ord` sorts numerically.
fn ordered_bits(v: f64) -> i64 {
    let v = if v == 0.0 { 0.0 } else { v };
    let bits = v.to_bits() as i64;
    bits ^ ((((bits >> 63) as u64) >> 1) as i64)
}

/// Grouping key derived from a non-missing `AttributeValue`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Bool(bool),
    /// Order-preserving bits of the value as `f64`.
    Number(i64),
    Text(String),
}

/// Renders values the way the source spreadsheets print them: decimals keep
/// a trailing `.0` and flags are capitalized ("37.0", "True").
impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Missing => Ok(()),
            AttributeValue::Bool(true) => f.write_str("True"),
            AttributeValue::Bool(false) => f.write_str("False"),
            AttributeValue::Int(v) => write!(f, "{}", v),
            AttributeValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttributeValue::Missing, Into::into)
    }
}
