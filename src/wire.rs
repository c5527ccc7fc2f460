//! Decoding side of the wire format.
//!
//! Incoming payloads arrive as generic JSON mappings. Every entity binds
//! itself through [`FromWire`], looking fields up on an [`Object`]: unknown
//! keys are never inspected, absent optionals stay unset, and values that do
//! not match the declared shape fail with a typed error. The serializing
//! direction is plain `serde` derives on the entities themselves.

use serde_json::{Map, Value};

use crate::error::WireError;

/// Binding from a decoded JSON value to a typed entity.
///
/// Implementations must be pure: the same value always binds to the same
/// entity, and a failure never leaves partial state behind.
pub trait FromWire: Sized {
    /// Human-readable name of the expected JSON shape, used in errors.
    const EXPECTED: &'static str;

    fn from_wire(value: &Value) -> Result<Self, WireError>;
}

fn mismatch<T: FromWire>() -> WireError {
    WireError::MalformedValue { field: String::new(), expected: T::EXPECTED }
}

impl FromWire for String {
    const EXPECTED: &'static str = "string";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value.as_str().map(ToOwned::to_owned).ok_or_else(mismatch::<Self>)
    }
}

impl FromWire for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value.as_bool().ok_or_else(mismatch::<Self>)
    }
}

impl FromWire for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value.as_i64().ok_or_else(mismatch::<Self>)
    }
}

impl FromWire for u64 {
    const EXPECTED: &'static str = "non-negative integer";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value.as_u64().ok_or_else(mismatch::<Self>)
    }
}

impl FromWire for u32 {
    const EXPECTED: &'static str = "non-negative integer";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_u64()
            .and_then(|integer| Self::try_from(integer).ok())
            .ok_or_else(mismatch::<Self>)
    }
}

impl FromWire for f64 {
    const EXPECTED: &'static str = "number";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value.as_f64().ok_or_else(mismatch::<Self>)
    }
}

/// Order-preserving element-wise binding.
///
/// One malformed element fails the entire list, so that callers never observe
/// a silently truncated batch.
impl<T: FromWire> FromWire for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_array()
            .ok_or_else(mismatch::<Self>)?
            .iter()
            .map(T::from_wire)
            .collect()
    }
}

/// Borrowed view of a JSON object with schema-aware field accessors.
#[derive(Copy, Clone)]
#[must_use]
pub struct Object<'a>(&'a Map<String, Value>);

impl<'a> Object<'a> {
    pub fn new(value: &'a Value) -> Result<Self, WireError> {
        value
            .as_object()
            .map(Self)
            .ok_or(WireError::MalformedValue { field: String::new(), expected: "object" })
    }

    /// An explicit `null` is indistinguishable from an absent key.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Whether the key is present with a non-`null` value.
    ///
    /// Used by the structural variant resolvers.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn required<T: FromWire>(&self, key: &'static str) -> Result<T, WireError> {
        match self.get(key) {
            Some(value) => T::from_wire(value).map_err(|error| error.with_field(key)),
            None => Err(WireError::MissingRequiredField(key)),
        }
    }

    /// Required string fields are non-empty by contract.
    pub fn required_str(&self, key: &'static str) -> Result<String, WireError> {
        let value: String = self.required(key)?;
        if value.is_empty() {
            Err(WireError::MissingRequiredField(key))
        } else {
            Ok(value)
        }
    }

    pub fn optional<T: FromWire>(&self, key: &'static str) -> Result<Option<T>, WireError> {
        self.get(key)
            .map(|value| T::from_wire(value).map_err(|error| error.with_field(key)))
            .transpose()
    }

    /// Like [`Object::optional`], additionally mapping a default value
    /// (empty string, zero) to `None`.
    ///
    /// This mirrors the construction-side rule of [`non_default`], which keeps
    /// decoding the exact inverse of construction with respect to field
    /// presence.
    pub fn optional_non_default<T>(&self, key: &'static str) -> Result<Option<T>, WireError>
    where
        T: FromWire + Default + PartialEq,
    {
        Ok(self.optional(key)?.filter(|value| *value != T::default()))
    }

}

/// Optional fields with a default ("falsy") value are unset, so that they are
/// omitted from the outgoing representation entirely.
pub(crate) fn non_default<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

/// Construction-side validation of a required string field.
pub(crate) fn required_non_empty(
    value: String,
    field: &'static str,
) -> Result<String, WireError> {
    if value.is_empty() {
        Err(WireError::MissingRequiredField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn required_present_ok() -> Result {
        let value = json!({"id": "42"});
        let object = Object::new(&value)?;
        assert_eq!(object.required::<String>("id")?, "42");
        Ok(())
    }

    #[test]
    fn required_absent_fails() -> Result {
        let value = json!({});
        let object = Object::new(&value)?;
        assert_eq!(
            object.required::<String>("id").unwrap_err(),
            WireError::MissingRequiredField("id"),
        );
        Ok(())
    }

    #[test]
    fn required_null_fails() -> Result {
        let value = json!({"id": null});
        let object = Object::new(&value)?;
        assert_eq!(
            object.required::<String>("id").unwrap_err(),
            WireError::MissingRequiredField("id"),
        );
        Ok(())
    }

    #[test]
    fn required_str_empty_fails() -> Result {
        let value = json!({"title": ""});
        let object = Object::new(&value)?;
        assert_eq!(
            object.required_str("title").unwrap_err(),
            WireError::MissingRequiredField("title"),
        );
        Ok(())
    }

    #[test]
    fn malformed_value_names_field_ok() -> Result {
        let value = json!({"duration": "loud"});
        let object = Object::new(&value)?;
        assert_eq!(
            object.required::<u32>("duration").unwrap_err(),
            WireError::MalformedValue {
                field: "duration".to_owned(),
                expected: "non-negative integer",
            },
        );
        Ok(())
    }

    #[test]
    fn negative_integer_is_malformed() -> Result {
        let value = json!({"duration": -1});
        let object = Object::new(&value)?;
        assert!(matches!(
            object.required::<u32>("duration").unwrap_err(),
            WireError::MalformedValue { .. },
        ));
        Ok(())
    }

    #[test]
    fn optional_absent_is_none_ok() -> Result {
        let value = json!({});
        let object = Object::new(&value)?;
        assert_eq!(object.optional::<String>("performer")?, None);
        Ok(())
    }

    #[test]
    fn optional_non_default_drops_empty_ok() -> Result {
        let value = json!({"performer": "", "duration": 0});
        let object = Object::new(&value)?;
        assert_eq!(object.optional_non_default::<String>("performer")?, None);
        assert_eq!(object.optional_non_default::<u32>("duration")?, None);
        Ok(())
    }

    #[test]
    fn integer_accepted_as_float_ok() -> Result {
        let value = json!({"latitude": 52});
        let object = Object::new(&value)?;
        assert_eq!(object.required::<f64>("latitude")?, 52.0);
        Ok(())
    }

    #[test]
    fn list_preserves_order_ok() -> Result {
        let value = json!(["a", "b", "c"]);
        assert_eq!(Vec::<String>::from_wire(&value)?, ["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn list_element_failure_is_fatal() {
        let value = json!(["a", 1, "c"]);
        assert!(Vec::<String>::from_wire(&value).is_err());
    }
}
