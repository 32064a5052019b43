//! [`Value`], the in-memory tree produced by the parser and consumed by the serializer.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{ParseError, TypeError};

/// Sequence payload of [`Value::Array`].
pub type Array = Vec<Value>;

/// Mapping payload of [`Value::Object`].
///
/// Keys keep their insertion order; equality ignores it.
pub type Object = IndexMap<String, Value>;

/// A JSON value.
///
/// `Integer` and `Float` are distinct cases: `Integer(1)` is never equal to
/// `Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Numeral written without a fraction or exponent.
    Integer(i64),
    /// Numeral written with a fraction or exponent, or too large for `i64`.
    Float(f64),
    String(String),
    Array(Array),
    Object(Object),
}

/// The case of a [`Value`], used in type-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the case of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`. Floats are not coerced.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float`. Integers are not coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up element `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Assigns `key` in an object, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if this value is not an object.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, TypeError> {
        match self {
            Value::Object(o) => Ok(o.insert(key.into(), value.into())),
            other => Err(mismatch(Kind::Object, other)),
        }
    }

    /// Appends an element to an array.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if this value is not an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), TypeError> {
        match self {
            Value::Array(a) => {
                a.push(value.into());
                Ok(())
            }
            other => Err(mismatch(Kind::Array, other)),
        }
    }
}

fn mismatch(expected: Kind, found: &Value) -> TypeError {
    TypeError {
        expected,
        found: found.kind(),
    }
}

// ---- Construction ----

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---- Checked extraction ----

macro_rules! impl_try_from {
    ($ty:ty, $kind:ident, |$v:ident| $owned:expr, |$r:ident| $borrowed:expr) => {
        impl TryFrom<Value> for $ty {
            type Error = TypeError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$kind($v) => Ok($owned),
                    other => Err(mismatch(Kind::$kind, &other)),
                }
            }
        }

        impl TryFrom<&Value> for $ty {
            type Error = TypeError;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$kind($r) => Ok($borrowed),
                    other => Err(mismatch(Kind::$kind, other)),
                }
            }
        }
    };
}

impl_try_from!(bool, Bool, |b| b, |b| *b);
impl_try_from!(i64, Integer, |i| i, |i| *i);
impl_try_from!(f64, Float, |f| f, |f| *f);
impl_try_from!(String, String, |s| s, |s| s.clone());
impl_try_from!(Array, Array, |a| a, |a| a.clone());
impl_try_from!(Object, Object, |o| o, |o| o.clone());

// ---- Text ----

impl fmt::Display for Value {
    /// Pretty form, without the trailing newline `serialize` adds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoder = crate::encoder::Encoder::default();
        encoder.write_any(self);
        f.write_str(encoder.as_str())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Integer(1).is_integer());
        assert!(Value::Float(1.5).is_float());
        assert!(Value::from("x").is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(Object::new()).is_object());
        assert_eq!(Value::Float(0.5).kind(), Kind::Float);
        assert_eq!(Kind::Bool.to_string(), "boolean");
    }

    #[test]
    fn integer_and_float_are_distinct() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_eq!(Value::Integer(1).as_f64(), None);
        assert_eq!(Value::Float(1.0).as_i64(), None);
    }

    #[test]
    fn object_equality_ignores_order() {
        let a: Value = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Value = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(a, b);
        let c: Value = [("x", 1), ("y", 3)].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn array_equality_is_ordered() {
        let a: Value = vec![Value::from(1), Value::from(2)].into();
        let b: Value = vec![Value::from(2), Value::from(1)].into();
        assert_ne!(a, b);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut v = Value::Object(Object::new());
        assert_eq!(v.insert("a", 1), Ok(None));
        assert_eq!(v.insert("b", true), Ok(None));
        assert_eq!(v.insert("a", 2), Ok(Some(Value::Integer(1))));
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(v.get("a"), Some(&Value::Integer(2)));
    }

    #[test]
    fn mutation_on_wrong_case_is_a_type_error() {
        let mut v = Value::Integer(3);
        assert_eq!(
            v.insert("a", 1),
            Err(TypeError {
                expected: Kind::Object,
                found: Kind::Integer
            })
        );
        assert_eq!(
            v.push(1),
            Err(TypeError {
                expected: Kind::Array,
                found: Kind::Integer
            })
        );
    }

    #[test]
    fn try_from_reports_mismatch() {
        assert_eq!(i64::try_from(&Value::Integer(7)), Ok(7));
        assert_eq!(
            i64::try_from(Value::Float(7.0)),
            Err(TypeError {
                expected: Kind::Integer,
                found: Kind::Float
            })
        );
        assert_eq!(String::try_from(Value::from("s")), Ok("s".to_string()));
        assert!(bool::try_from(&Value::Null).is_err());
    }

    #[test]
    fn option_and_unit_become_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn element_lookup() {
        let v: Value = vec![Value::from(42), Value::from("foo")].into();
        assert_eq!(v.get_index(1).and_then(Value::as_str), Some("foo"));
        assert_eq!(v.get_index(2), None);
        assert_eq!(v.get("a"), None);
    }
}
