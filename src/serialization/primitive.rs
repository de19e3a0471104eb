//! Scalar wire values.
//!
//! | Rust type | Wire form |
//! |-----------|-----------|
//! | `String` | JSON string |
//! | `bool` | JSON boolean |
//! | `i32`, `i64` | JSON integer (range checked) |
//! | `f64` | JSON number (finite only) |
//! | `DateTime<FixedOffset>` | RFC 3339 string |
//! | `NaiveTime` | `HH:MM:SS[.fffffffff]` string, `HH:MM` accepted on read |
//! | `IsoDuration` | ISO-8601 duration string |
//! | `Uuid` | hyphenated UUID string |
//!
//! Byte arrays are not a `PrimitiveValue`: they travel as base64 strings and
//! have dedicated getter/writer methods.

use chrono::{DateTime, FixedOffset, NaiveTime, SecondsFormat};
use serde_json::{Number, Value};
use uuid::Uuid;

use super::{IsoDuration, JsonParseNode};
use crate::error::{Error, Result};

/// A scalar that can be read from and written to a single JSON value.
pub trait PrimitiveValue: Sized {
    /// Read the value at `node`; `Ok(None)` for JSON null.
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>>;

    /// Encode as a JSON value.
    fn to_value(&self) -> Result<Value>;
}

/// Human-readable JSON type name used in mismatch errors.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: json_kind(found),
    }
}

fn invalid(kind: &'static str, value: impl Into<String>, reason: impl ToString) -> Error {
    Error::InvalidValue {
        kind,
        value: value.into(),
        reason: reason.to_string(),
    }
}

/// Read a string node, mapping the result through `convert`.
fn read_str<T>(
    node: &JsonParseNode<'_>,
    convert: impl FnOnce(&str) -> Result<T>,
) -> Result<Option<T>> {
    match node.value() {
        Value::Null => Ok(None),
        Value::String(s) => convert(s).map(Some),
        other => Err(mismatch("string", other)),
    }
}

pub(crate) fn parse_time(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|e| invalid("timestamp", s, e))
}

pub(crate) fn format_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub(crate) fn parse_time_only(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| invalid("time-only", s, e))
}

pub(crate) fn format_time_only(value: &NaiveTime) -> String {
    value.format("%H:%M:%S%.f").to_string()
}

impl PrimitiveValue for String {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        read_str(node, |s| Ok(s.to_string()))
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl PrimitiveValue for bool {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        match node.value() {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(mismatch("boolean", other)),
        }
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl PrimitiveValue for i64 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        match node.value() {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| invalid("int64", n.to_string(), "not a 64-bit integer")),
            other => Err(mismatch("number", other)),
        }
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Number((*self).into()))
    }
}

impl PrimitiveValue for i32 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        let Some(wide) = i64::read(node)? else {
            return Ok(None);
        };
        i32::try_from(wide)
            .map(Some)
            .map_err(|_| invalid("int32", wide.to_string(), "out of 32-bit range"))
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Number((*self).into()))
    }
}

impl PrimitiveValue for f64 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        match node.value() {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| invalid("double", n.to_string(), "not representable as f64")),
            other => Err(mismatch("number", other)),
        }
    }

    fn to_value(&self) -> Result<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| invalid("double", self.to_string(), "non-finite numbers have no JSON form"))
    }
}

impl PrimitiveValue for DateTime<FixedOffset> {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        read_str(node, parse_time)
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(format_time(self)))
    }
}

impl PrimitiveValue for NaiveTime {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        read_str(node, parse_time_only)
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(format_time_only(self)))
    }
}

impl PrimitiveValue for IsoDuration {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        read_str(node, |s| s.parse())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl PrimitiveValue for Uuid {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>> {
        read_str(node, |s| Uuid::parse_str(s).map_err(|e| invalid("uuid", s, e)))
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.hyphenated().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read<T: PrimitiveValue>(value: Value) -> Result<Option<T>> {
        T::read(&JsonParseNode::new(&value))
    }

    #[test]
    fn null_reads_as_none() {
        assert_eq!(read::<String>(Value::Null).unwrap(), None);
        assert_eq!(read::<bool>(Value::Null).unwrap(), None);
        assert_eq!(read::<i32>(Value::Null).unwrap(), None);
        assert_eq!(read::<Uuid>(Value::Null).unwrap(), None);
    }

    #[test]
    fn int32_range_is_checked() {
        assert_eq!(read::<i32>(json!(1440)).unwrap(), Some(1440));
        assert_eq!(read::<i32>(json!(-270)).unwrap(), Some(-270));
        assert!(matches!(
            read::<i32>(json!(4_294_967_296_i64)),
            Err(Error::InvalidValue { kind: "int32", .. })
        ));
        assert!(matches!(
            read::<i32>(json!(1.5)),
            Err(Error::InvalidValue { kind: "int64", .. })
        ));
    }

    #[test]
    fn wrong_json_type_is_a_mismatch() {
        match read::<bool>(json!("true")) {
            Err(Error::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "boolean");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            read::<String>(json!(42)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn timestamps_round_trip() {
        let parsed = read::<DateTime<FixedOffset>>(json!("2018-07-25T10:20:32Z"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.to_value().unwrap(), json!("2018-07-25T10:20:32Z"));

        let offset = read::<DateTime<FixedOffset>>(json!("2022-03-01T08:00:00.250+03:00"))
            .unwrap()
            .unwrap();
        assert_eq!(
            offset.to_value().unwrap(),
            json!("2022-03-01T08:00:00.250+03:00")
        );
        assert!(read::<DateTime<FixedOffset>>(json!("yesterday")).is_err());
    }

    #[test]
    fn time_only_accepts_short_form() {
        let full = read::<NaiveTime>(json!("23:59:59")).unwrap().unwrap();
        assert_eq!(full.to_value().unwrap(), json!("23:59:59"));

        let short = read::<NaiveTime>(json!("00:30")).unwrap().unwrap();
        assert_eq!(short.to_value().unwrap(), json!("00:30:00"));

        assert!(read::<NaiveTime>(json!("25:00:00")).is_err());
    }

    #[test]
    fn uuid_is_hyphenated_lowercase() {
        let id = read::<Uuid>(json!("3F2504E0-4F89-11D3-9A0C-0305E82C3301"))
            .unwrap()
            .unwrap();
        assert_eq!(
            id.to_value().unwrap(),
            json!("3f2504e0-4f89-11d3-9a0c-0305e82c3301")
        );
        assert!(read::<Uuid>(json!("not-a-uuid")).is_err());
    }

    #[test]
    fn non_finite_double_cannot_be_written() {
        assert!(f64::NAN.to_value().is_err());
        assert_eq!(2.5_f64.to_value().unwrap(), json!(2.5));
    }
}
