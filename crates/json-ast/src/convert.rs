//! Conversions between [`JsonValue`] and `serde_json::Value`.
//!
//! Going *from* `serde_json` is total: every JSON document the parser
//! ecosystem produces has a home in the algebra. Going back is fallible,
//! because the algebra is richer: `Nothing` has no JSON representation
//! and the arbitrary-precision numbers may not fit a `serde_json::Number`.

use crate::value::JsonValue;
use bigdecimal::{BigDecimal, ToPrimitive};
use num_bigint::BigInt;
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Why a [`JsonValue`] could not become a `serde_json::Value`.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `Nothing` marks absence; emitting it as JSON would invent a value.
    #[error("Nothing has no JSON representation")]
    Nothing,

    /// The integer does not fit the `i64`/`u64` range of `serde_json::Number`.
    #[error("integer out of range for a JSON number: {0}")]
    IntOutOfRange(BigInt),

    /// NaN and infinities are not JSON numbers.
    #[error("non-finite double is not a JSON number: {0}")]
    NonFiniteDouble(f64),

    /// The decimal has no finite double approximation.
    #[error("decimal out of range for a JSON number: {0}")]
    DecimalOutOfRange(BigDecimal),
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(BigInt::from(i))
                } else if let Some(u) = n.as_u64() {
                    JsonValue::Int(BigInt::from(u))
                } else {
                    JsonValue::Double(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => JsonValue::Str(s),
            Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(name, value)| (name, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = ConvertError;

    /// Exactness-preserving where the target allows it. `Int` must fit
    /// `i64` or `u64`; `Decimal` converts to the nearest double, which may
    /// round. Duplicate object names collapse last-write-wins, matching
    /// [`JsonValue::values`].
    fn try_from(value: JsonValue) -> Result<Value, ConvertError> {
        match value {
            JsonValue::Nothing => Err(ConvertError::Nothing),
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(b) => Ok(Value::Bool(b)),
            JsonValue::Int(i) => {
                if let Ok(small) = i64::try_from(&i) {
                    Ok(Value::Number(Number::from(small)))
                } else if let Ok(big) = u64::try_from(&i) {
                    Ok(Value::Number(Number::from(big)))
                } else {
                    Err(ConvertError::IntOutOfRange(i))
                }
            }
            JsonValue::Double(d) => match Number::from_f64(d) {
                Some(n) => Ok(Value::Number(n)),
                None => Err(ConvertError::NonFiniteDouble(d)),
            },
            JsonValue::Decimal(d) => match d.to_f64().and_then(Number::from_f64) {
                Some(n) => Ok(Value::Number(n)),
                None => Err(ConvertError::DecimalOutOfRange(d)),
            },
            JsonValue::Str(s) => Ok(Value::String(s)),
            JsonValue::Array(items) => {
                let items = items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(items))
            }
            JsonValue::Object(fields) => {
                let mut map = Map::with_capacity(fields.len());
                for (name, value) in fields {
                    map.insert(name, Value::try_from(value)?);
                }
                Ok(Value::Object(map))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_serde_scalars() {
        assert_eq!(JsonValue::from(json!(null)), JsonValue::Null);
        assert_eq!(JsonValue::from(json!(true)), JsonValue::Bool(true));
        assert_eq!(JsonValue::from(json!(42)), JsonValue::from(42));
        assert_eq!(JsonValue::from(json!(1.5)), JsonValue::from(1.5));
        assert_eq!(JsonValue::from(json!("s")), JsonValue::from("s"));
    }

    #[test]
    fn test_from_serde_preserves_field_order() {
        let value = JsonValue::from(json!({"b": 1, "a": 2}));
        assert_eq!(
            value.as_object().map(|fields| fields[0].0.as_str()),
            Some("b"),
        );
    }

    #[test]
    fn test_from_serde_u64_beyond_i64() {
        let value = JsonValue::from(json!(u64::MAX));
        assert_eq!(value, JsonValue::Int(BigInt::from(u64::MAX)));
    }

    #[test]
    fn test_roundtrip_document() {
        let doc = json!({"name": "joe", "tags": ["a", "b"], "age": 10});
        let value = JsonValue::from(doc.clone());
        assert_eq!(Value::try_from(value).unwrap(), doc);
    }

    #[test]
    fn test_nothing_does_not_convert() {
        assert!(matches!(
            Value::try_from(JsonValue::Nothing),
            Err(ConvertError::Nothing),
        ));
    }

    #[test]
    fn test_nothing_nested_in_array_does_not_convert() {
        let value = JsonValue::Array(vec![JsonValue::Nothing]);
        assert!(Value::try_from(value).is_err());
    }

    #[test]
    fn test_huge_int_does_not_convert() {
        let huge = BigInt::from(u64::MAX) * 2;
        assert!(matches!(
            Value::try_from(JsonValue::Int(huge)),
            Err(ConvertError::IntOutOfRange(_)),
        ));
    }

    #[test]
    fn test_nan_does_not_convert() {
        assert!(matches!(
            Value::try_from(JsonValue::Double(f64::NAN)),
            Err(ConvertError::NonFiniteDouble(_)),
        ));
    }

    #[test]
    fn test_decimal_converts_to_nearest_double() {
        let value = JsonValue::Decimal("2.5".parse().unwrap());
        assert_eq!(Value::try_from(value).unwrap(), json!(2.5));
    }

    #[test]
    fn test_duplicate_names_collapse_last_write_wins() {
        let value = JsonValue::Object(vec![
            ("a".to_string(), JsonValue::from(1)),
            ("a".to_string(), JsonValue::from(2)),
        ]);
        assert_eq!(Value::try_from(value).unwrap(), json!({"a": 2}));
    }
}
