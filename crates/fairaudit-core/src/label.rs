//! Dynamically-typed label values.
//!
//! Truth labels, hard predictions, group values and the positive label all
//! arrive as [`Label`]s, since real datasets mix integer, float, boolean and
//! string encodings. Equality is value-based across numeric types, so `1`,
//! `1.0` and `true` are the same label, while `"1"` (text) is not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell value: truth label, predicted label, or group identifier.
///
/// `Missing` covers absent cells and float NaN. A missing value never matches
/// the positive label and never forms a group of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

/// Canonical form used for both equality and hashing.
#[derive(PartialEq, Eq, Hash)]
enum LabelKey<'a> {
    Missing,
    Int(i64),
    Float(u64),
    Text(&'a str),
}

impl Label {
    /// Returns true for absent cells and NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            Label::Missing => true,
            Label::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Returns true if this label equals `positive` and is not missing.
    ///
    /// A type mismatch (text against a number) is just "no match".
    pub fn matches(&self, positive: &Label) -> bool {
        !self.is_missing() && self == positive
    }

    /// Numeric value of the label, if it has one.
    ///
    /// Booleans map to `0.0`/`1.0`. Text and missing values return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Label::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Label::Int(i) => Some(*i as f64),
            Label::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    fn key(&self) -> LabelKey<'_> {
        match self {
            Label::Missing => LabelKey::Missing,
            Label::Bool(b) => LabelKey::Int(i64::from(*b)),
            Label::Int(i) => LabelKey::Int(*i),
            Label::Float(v) if v.is_nan() => LabelKey::Missing,
            Label::Float(v) => {
                // Integral floats share a key with the equal integer
                if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 {
                    LabelKey::Int(*v as i64)
                } else {
                    LabelKey::Float(v.to_bits())
                }
            }
            Label::Text(s) => LabelKey::Text(s),
        }
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Bool(b) => write!(f, "{}", b),
            Label::Int(i) => write!(f, "{}", i),
            Label::Float(v) if v.is_nan() => f.write_str("nan"),
            Label::Float(v) => write!(f, "{:?}", v),
            Label::Text(s) => f.write_str(s),
            Label::Missing => f.write_str("nan"),
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        Label::Bool(value)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(i64::from(value))
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Label::Missing
        } else {
            Label::Float(value)
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl<T: Into<Label>> From<Option<T>> for Label {
    fn from(value: Option<T>) -> Self {
        value.map_or(Label::Missing, Into::into)
    }
}

/// Converts any iterable of label-like values into a `Vec<Label>`.
///
/// ```
/// use fairaudit_core::label::{labels, Label};
///
/// let groups = labels(["A", "B"]);
/// assert_eq!(groups[1], Label::from("B"));
/// ```
pub fn labels<I, T>(values: I) -> Vec<Label>
where
    I: IntoIterator<Item = T>,
    T: Into<Label>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numeric_equality_across_types() {
        assert_eq!(Label::Int(1), Label::Float(1.0));
        assert_eq!(Label::Bool(true), Label::Int(1));
        assert_eq!(Label::Bool(false), Label::Float(0.0));
        assert_ne!(Label::Int(1), Label::Float(1.5));
    }

    #[test]
    fn test_text_never_equals_number() {
        assert_ne!(Label::from("1"), Label::Int(1));
        assert!(!Label::from("1").matches(&Label::Int(1)));
    }

    #[test]
    fn test_missing_never_matches() {
        assert!(!Label::Missing.matches(&Label::Missing));
        assert!(!Label::Float(f64::NAN).matches(&Label::Int(1)));
        assert!(Label::Float(f64::NAN).is_missing());
        assert_eq!(Label::from(f64::NAN), Label::Missing);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set: HashSet<Label> = [Label::Int(1), Label::Float(1.0), Label::Bool(true)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);

        let set: HashSet<Label> = [Label::from("a"), Label::from("b"), Label::from("a")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Label::from(Some("x")), Label::from("x"));
        assert!(Label::from(None::<&str>).is_missing());
    }

    #[test]
    fn test_display() {
        assert_eq!(Label::Int(3).to_string(), "3");
        assert_eq!(Label::Float(0.5).to_string(), "0.5");
        assert_eq!(Label::Float(2.0).to_string(), "2.0");
        assert_eq!(Label::from("group-a").to_string(), "group-a");
        assert_eq!(Label::Missing.to_string(), "nan");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Label::Int(2).as_f64(), Some(2.0));
        assert_eq!(Label::Bool(true).as_f64(), Some(1.0));
        assert_eq!(Label::from("0.3").as_f64(), None);
        assert_eq!(Label::Missing.as_f64(), None);
    }

    #[test]
    fn test_json_shape() {
        let values = vec![
            Label::Int(1),
            Label::Float(0.5),
            Label::from("A"),
            Label::Bool(true),
            Label::Missing,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,0.5,"A",true,null]"#);

        let parsed: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed[0], Label::Int(1)));
        assert!(matches!(parsed[1], Label::Float(_)));
        assert!(matches!(parsed[3], Label::Bool(true)));
        assert!(matches!(parsed[4], Label::Missing));
    }
}
