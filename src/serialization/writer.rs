//! Write side of the substrate.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, FixedOffset, NaiveTime};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{AdditionalData, IsoDuration, Parsable, PrimitiveValue};
use crate::enum_codec::{GraphEnum, serialize_enum_values};
use crate::error::Result;

/// Accumulates the fields of one JSON object.
///
/// Every `write_*` method takes an `Option` and writes nothing for `None`;
/// models can therefore call the writer for each declared field without
/// checking presence first.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    fn put_primitive<T: PrimitiveValue>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        if let Some(v) = value {
            let encoded = v.to_value()?;
            self.put(key, encoded);
        }
        Ok(())
    }

    pub fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.to_string()));
        }
        Ok(())
    }

    pub fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        self.put_primitive(key, value.as_ref())
    }

    pub fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()> {
        self.put_primitive(key, value.as_ref())
    }

    pub fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()> {
        self.put_primitive(key, value.as_ref())
    }

    pub fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()> {
        self.put_primitive(key, value.as_ref())
    }

    pub fn write_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<()> {
        self.put_primitive(key, value)
    }

    pub fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<()> {
        self.put_primitive(key, value.as_ref())
    }

    pub fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<&IsoDuration>,
    ) -> Result<()> {
        self.put_primitive(key, value)
    }

    pub fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) -> Result<()> {
        self.put_primitive(key, value)
    }

    pub fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<()> {
        if let Some(bytes) = value {
            self.put(key, Value::String(BASE64.encode(bytes)));
        }
        Ok(())
    }

    pub fn write_enum_value<E: GraphEnum>(&mut self, key: &str, value: Option<E>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.as_str().to_string()));
        }
        Ok(())
    }

    pub fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<()> {
        if let Some(values) = values {
            let strings = serialize_enum_values(values)
                .into_iter()
                .map(Value::String)
                .collect();
            self.put(key, Value::Array(strings));
        }
        Ok(())
    }

    pub fn write_collection_of_primitive_values<T: PrimitiveValue>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<()> {
        if let Some(values) = values {
            let encoded = values
                .iter()
                .map(PrimitiveValue::to_value)
                .collect::<Result<Vec<_>>>()?;
            self.put(key, Value::Array(encoded));
        }
        Ok(())
    }

    /// Write a nested model: its declared fields, then its additional data.
    pub fn write_object_value<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        if let Some(model) = value {
            let encoded = object_to_value(model)?;
            self.put(key, encoded);
        }
        Ok(())
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<()> {
        if let Some(models) = values {
            let encoded = models
                .iter()
                .map(object_to_value)
                .collect::<Result<Vec<_>>>()?;
            self.put(key, Value::Array(encoded));
        }
        Ok(())
    }

    /// Write every additional-data entry under its original key.
    ///
    /// Called after the declared fields, so an entry whose key collides with
    /// a declared field replaces it.
    pub fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        for (key, value) in data {
            self.put(key, value.clone());
        }
        Ok(())
    }

    /// Finish and return the accumulated object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

pub(crate) fn object_to_value<T: Parsable>(model: &T) -> Result<Value> {
    let mut writer = JsonSerializationWriter::new();
    model.serialize_fields(&mut writer)?;
    writer.write_additional_data(model.additional_data())?;
    Ok(writer.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_values_are_omitted() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", None).unwrap();
        writer.write_bool_value("autoLaunch", None).unwrap();
        writer.write_i32_value("port", None).unwrap();
        writer
            .write_collection_of_primitive_values::<String>("hosts", None)
            .unwrap();
        assert_eq!(writer.into_value(), json!({}));
    }

    #[test]
    fn set_values_are_written() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", Some("Notepad")).unwrap();
        writer.write_bool_value("autoLaunch", Some(false)).unwrap();
        writer.write_i32_value("port", Some(8080)).unwrap();
        writer
            .write_byte_array_value("blob", Some(b"<StartLayout/>".as_slice()))
            .unwrap();
        writer
            .write_collection_of_primitive_values::<String>("hosts", Some(&[]))
            .unwrap();
        assert_eq!(
            writer.into_value(),
            json!({
                "name": "Notepad",
                "autoLaunch": false,
                "port": 8080,
                "blob": "PFN0YXJ0TGF5b3V0Lz4=",
                "hosts": [],
            })
        );
    }

    #[test]
    fn additional_data_is_written_last() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", Some("declared")).unwrap();

        let mut extra = AdditionalData::new();
        extra.insert("futureField".to_string(), json!(42));
        extra.insert("name".to_string(), json!("from bag"));
        writer.write_additional_data(&extra).unwrap();

        assert_eq!(
            writer.into_value(),
            json!({"name": "from bag", "futureField": 42})
        );
    }

    #[test]
    fn non_finite_double_fails() {
        let mut writer = JsonSerializationWriter::new();
        assert!(writer.write_f64_value("ratio", Some(f64::INFINITY)).is_err());
    }
}
