use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::model::error::ModelError;
use crate::model::scalar::Scalar;

/// Timestamp layout used by the API, e.g. `2021-01-02T03:04:05.000000Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// How a field is read out of its parent map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Scalar that decodes to `None` when absent or null
    Optional,
    /// Scalar that must be present and coercible
    Required,
    /// Nested entity built even when its map is absent
    Eager,
    /// Nested entity that is `None` unless a non-empty map is present
    IfPresent,
    /// Collection that decodes to an empty vector when absent
    DefaultEmpty,
    /// Collection that must be present
    MustExist,
}

/// A model entity that can be decoded from a JSON object.
///
/// `FIELDS` is the decode policy table for the entity. `Record` consults it
/// so nested entities and collections are read the same way everywhere.
pub trait Entity: Sized {
    const NAME: &'static str;
    const FIELDS: &'static [(&'static str, Presence)];

    fn decode(record: &Record<'_>) -> Result<Self, ModelError>;

    fn from_map(map: &Map<String, Value>) -> Result<Self, ModelError> {
        Self::decode(&Record::new::<Self>(map))
    }

    fn from_value(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ModelError::ValueConversion {
                entity: Self::NAME,
                field: "<root>",
                reason: format!("expected an object, found {}", kind(other)),
            }),
        }
    }

    fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

/// Borrowed view over one JSON object, read through an entity's policy table
pub struct Record<'a> {
    entity: &'static str,
    fields: &'static [(&'static str, Presence)],
    map: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    pub fn new<E: Entity>(map: &'a Map<String, Value>) -> Self {
        Self {
            entity: E::NAME,
            fields: E::FIELDS,
            map,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Policy for `key`; fields missing from the table read as optional
    pub fn presence(&self, key: &str) -> Presence {
        let found = self.fields.iter().find(|(name, _)| *name == key);
        debug_assert!(
            found.is_some(),
            "{}.{} has no decode policy",
            self.entity,
            key
        );
        found.map(|(_, p)| *p).unwrap_or(Presence::Optional)
    }

    /// Value under `key`, treating an explicit null as absent
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn conversion(&self, field: &'static str, reason: impl Into<String>) -> ModelError {
        ModelError::ValueConversion {
            entity: self.entity,
            field,
            reason: reason.into(),
        }
    }

    fn mismatch(&self, field: &'static str, expected: &str, found: &Value) -> ModelError {
        self.conversion(field, format!("expected {}, found {}", expected, kind(found)))
    }

    /// Optional attribute: whatever non-null value the map holds, kept as sent
    pub fn scalar(&self, key: &'static str) -> Result<Option<Scalar>, ModelError> {
        debug_assert_eq!(self.presence(key), Presence::Optional);
        Ok(self.get(key).and_then(Scalar::from_json))
    }

    fn required(&self, key: &'static str) -> Result<&'a Value, ModelError> {
        debug_assert_eq!(self.presence(key), Presence::Required);
        self.get(key).ok_or(ModelError::MissingRequiredField {
            entity: self.entity,
            field: key,
        })
    }

    /// Integer coercion: ints, integral or truncated floats, bools and numeric text
    pub fn required_int(&self, key: &'static str) -> Result<i64, ModelError> {
        match self.required(key)? {
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(i),
                None => {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    if f.is_finite() && f.trunc().abs() < i64::MAX as f64 {
                        Ok(f.trunc() as i64)
                    } else {
                        Err(self.conversion(key, format!("{} is out of integer range", n)))
                    }
                }
            },
            Value::String(s) => s.trim().parse::<i64>().map_err(|e| {
                self.conversion(key, format!("{:?} is not an integer: {}", s, e))
            }),
            other => Err(self.mismatch(key, "an integer", other)),
        }
    }

    /// Float coercion: numbers, bools and numeric text
    pub fn required_float(&self, key: &'static str) -> Result<f64, ModelError> {
        match self.required(key)? {
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                self.conversion(key, format!("{} is not representable as float", n))
            }),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| self.conversion(key, format!("{:?} is not a float: {}", s, e))),
            other => Err(self.mismatch(key, "a float", other)),
        }
    }

    /// Timestamp in `TIMESTAMP_FORMAT`; falsy values leave the field unset
    pub fn timestamp(&self, key: &'static str) -> Result<Option<DateTime<Utc>>, ModelError> {
        match self.get(key) {
            Some(value) if is_truthy(value) => match value {
                Value::String(s) => parse_timestamp(s)
                    .map(Some)
                    .map_err(|reason| self.conversion(key, reason)),
                other => Err(self.mismatch(key, "timestamp text", other)),
            },
            _ => Ok(None),
        }
    }

    /// Object under `key`. `Ok(None)` when the value is falsy.
    fn object(&self, key: &'static str) -> Result<Option<&'a Map<String, Value>>, ModelError> {
        match self.get(key) {
            Some(value) if is_truthy(value) => match value {
                Value::Object(map) => Ok(Some(map)),
                other => Err(self.mismatch(key, "an object", other)),
            },
            _ => Ok(None),
        }
    }

    /// Nested entity that is `None` for an absent or empty map
    pub fn nested<E: Entity>(&self, key: &'static str) -> Result<Option<E>, ModelError> {
        debug_assert_eq!(self.presence(key), Presence::IfPresent);
        self.object(key)?.map(E::from_map).transpose()
    }

    /// Nested entity that is always built, from an empty map if need be
    pub fn eager<E: Entity>(&self, key: &'static str) -> Result<E, ModelError> {
        debug_assert_eq!(self.presence(key), Presence::Eager);
        match self.object(key)? {
            Some(map) => E::from_map(map),
            None => E::from_map(&Map::new()),
        }
    }

    /// Ordered collection under `key`, read per its policy
    pub fn collection<E: Entity>(&self, key: &'static str) -> Result<Vec<E>, ModelError> {
        let items = match self.get(key) {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(self.mismatch(key, "an array", other)),
            None => {
                return match self.presence(key) {
                    Presence::MustExist => Err(ModelError::KeyNotFound {
                        entity: self.entity,
                        field: key,
                    }),
                    _ => Ok(Vec::new()),
                }
            }
        };

        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => E::from_map(map),
                other => Err(self.mismatch(key, "an object element", other)),
            })
            .collect()
    }
}

/// Parse `TIMESTAMP_FORMAT`, requiring a fraction of one to six digits
fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, String> {
    let fraction = text
        .strip_suffix('Z')
        .and_then(|body| body.rsplit_once('.'))
        .map(|(_, fraction)| fraction);
    let valid = fraction.is_some_and(|digits| {
        (1..=6).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
    });
    if !valid {
        return Err(format!(
            "{:?} is not a timestamp: expected 1 to 6 fractional digits before 'Z'",
            text
        ));
    }

    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("{:?} is not a timestamp: {}", text, e))
}

/// Truthiness of a JSON value: null, false, zero and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(m) => !m.is_empty(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
