//! Type-erased configuration trees
//!
//! Component configurations are strongly typed structs, but the environment
//! transformer has to walk all of them uniformly without knowing their
//! shape. [`ConfigValue`] is the closed tree type they are decoded into:
//! objects, sequences and scalars. Numbers keep their literal decimal text so
//! flattening them into placeholder defaults never reformats them.

use crate::domain::Result;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded configuration tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Mapping from field name to value; keys are kept sorted
    Object(BTreeMap<String, ConfigValue>),
    /// Ordered list of values
    Sequence(Vec<ConfigValue>),
    /// Leaf value
    Scalar(Scalar),
}

/// Leaf values of a [`ConfigValue`] tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    /// Literal decimal text of the number, exactly as encoded
    Number(String),
    /// An absent optional field
    Null,
}

impl Scalar {
    /// Render the scalar as the default value of an environment variable
    ///
    /// Booleans become `true`/`false`, numbers keep their literal text and
    /// null becomes the empty string.
    pub fn to_default_string(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Bool(true) => "true".to_string(),
            Scalar::Bool(false) => "false".to_string(),
            Scalar::Number(n) => n.clone(),
            Scalar::Null => String::new(),
        }
    }
}

impl ConfigValue {
    /// Encode any serializable configuration and decode it into a tree
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ConfgenError::Encoding`] if the value cannot
    /// be represented as JSON (e.g. a map with non-string keys).
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_confgen::domain::value::{ConfigValue, Scalar};
    /// use std::collections::BTreeMap;
    ///
    /// let mut conf = BTreeMap::new();
    /// conf.insert("retries", 3);
    ///
    /// let tree = ConfigValue::from_serializable(&conf).unwrap();
    /// assert_eq!(
    ///     tree.get("retries"),
    ///     Some(&ConfigValue::Scalar(Scalar::Number("3".to_string())))
    /// );
    /// ```
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value)?;
        Ok(Self::from_json(json))
    }

    /// Decode a JSON value into a tree
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => ConfigValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from_json(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from_json).collect())
            }
            Value::String(s) => ConfigValue::Scalar(Scalar::String(s)),
            Value::Bool(b) => ConfigValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => ConfigValue::Scalar(Scalar::Number(n.to_string())),
            Value::Null => ConfigValue::Scalar(Scalar::Null),
        }
    }

    /// Convenience constructor for a string leaf
    pub fn string(s: impl Into<String>) -> Self {
        ConfigValue::Scalar(Scalar::String(s.into()))
    }

    /// Look up a field of an object node
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Borrow the string of a string leaf
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Set a field of an object node; other nodes are left untouched
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        if let ConfigValue::Object(map) = self {
            map.insert(key.into(), value);
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, ConfigValue::Object(_))
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        ConfigValue::from_json(value)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Object(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    ser.serialize_entry(k, v)?;
                }
                ser.end()
            }
            ConfigValue::Sequence(items) => {
                let mut ser = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    ser.serialize_element(item)?;
                }
                ser.end()
            }
            ConfigValue::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => {
                if let Ok(u) = n.parse::<u64>() {
                    serializer.serialize_u64(u)
                } else if let Ok(i) = n.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else {
                    match n.parse::<f64>() {
                        Ok(f) if f.is_finite() => serializer.serialize_f64(f),
                        // Out of range for every native type, keep the text
                        _ => serializer.serialize_str(n),
                    }
                }
            }
            Scalar::Null => serializer.serialize_unit(),
        }
    }
}
