//! Read side of the substrate.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, FixedOffset, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

use super::primitive::mismatch;
use super::{IsoDuration, Parsable, PrimitiveValue};
use crate::enum_codec::GraphEnum;
use crate::error::{Error, Result};

/// A cursor positioned at one JSON value of a wire payload.
///
/// Every getter returns `Ok(None)` when the value is JSON `null`, and a
/// [`Error::TypeMismatch`] when it has a different JSON type than the getter
/// reads.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw JSON value under the cursor.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// The node at `key`, when this node is an object that contains it.
    pub fn get_child_node(&self, key: &str) -> Option<JsonParseNode<'a>> {
        self.value.as_object()?.get(key).map(JsonParseNode::new)
    }

    pub fn get_string_value(&self) -> Result<Option<String>> {
        String::read(self)
    }

    pub fn get_bool_value(&self) -> Result<Option<bool>> {
        bool::read(self)
    }

    pub fn get_i32_value(&self) -> Result<Option<i32>> {
        i32::read(self)
    }

    pub fn get_i64_value(&self) -> Result<Option<i64>> {
        i64::read(self)
    }

    pub fn get_f64_value(&self) -> Result<Option<f64>> {
        f64::read(self)
    }

    /// RFC 3339 timestamp, offset preserved.
    pub fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        DateTime::<FixedOffset>::read(self)
    }

    pub fn get_time_only_value(&self) -> Result<Option<NaiveTime>> {
        NaiveTime::read(self)
    }

    pub fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>> {
        IsoDuration::read(self)
    }

    pub fn get_uuid_value(&self) -> Result<Option<Uuid>> {
        Uuid::read(self)
    }

    /// Base64 (standard alphabet, padded) string decoded to bytes.
    pub fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => BASE64
                .decode(s)
                .map(Some)
                .map_err(|e| Error::InvalidValue {
                    kind: "base64",
                    value: s.clone(),
                    reason: e.to_string(),
                }),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn get_enum_value<E: GraphEnum>(&self) -> Result<Option<E>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => E::parse(s).map(Some),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn get_collection_of_enum_values<E: GraphEnum>(&self) -> Result<Option<Vec<E>>> {
        self.collect(|node| node.get_enum_value())
    }

    pub fn get_collection_of_primitive_values<T: PrimitiveValue>(&self) -> Result<Option<Vec<T>>> {
        self.collect(T::read)
    }

    /// Decode the object under the cursor.
    ///
    /// `T`'s factory runs first and sees the whole object, so a polymorphic
    /// `T` picks its concrete type before any field is applied. Each wire key
    /// is then offered to [`Parsable::deserialize_field`]; keys the type does
    /// not declare are kept verbatim in its additional data.
    pub fn get_object_value<T: Parsable>(&self) -> Result<Option<T>> {
        let fields = match self.value {
            Value::Null => return Ok(None),
            Value::Object(fields) => fields,
            other => return Err(mismatch("object", other)),
        };

        let mut model = T::create_from_discriminator_value(self)?;
        for (key, value) in fields {
            if !model.deserialize_field(key, &JsonParseNode::new(value))? {
                tracing::trace!(key = key.as_str(), "keeping undeclared field");
                model
                    .additional_data_mut()
                    .insert(key.clone(), value.clone());
            }
        }
        Ok(Some(model))
    }

    pub fn get_collection_of_object_values<T: Parsable>(&self) -> Result<Option<Vec<T>>> {
        self.collect(|node| node.get_object_value())
    }

    /// Read each non-null element of an array with `read`.
    fn collect<T>(
        &self,
        read: impl Fn(&JsonParseNode<'a>) -> Result<Option<T>>,
    ) -> Result<Option<Vec<T>>> {
        let items = match self.value {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            other => return Err(mismatch("array", other)),
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if let Some(v) = read(&JsonParseNode::new(item))? {
                out.push(v);
            }
        }
        Ok(Some(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_codec::graph_enum;
    use serde_json::json;

    graph_enum! {
        enum Color: "color" {
            Red => "red",
            Green => "green",
        }
    }

    #[test]
    fn child_node_lookup() {
        let value = json!({"name": "Notepad", "nested": {"a": 1}});
        let node = JsonParseNode::new(&value);
        assert_eq!(
            node.get_child_node("name").unwrap().get_string_value().unwrap(),
            Some("Notepad".to_string())
        );
        assert!(node.get_child_node("missing").is_none());

        let scalar = json!("x");
        assert!(JsonParseNode::new(&scalar).get_child_node("name").is_none());
    }

    #[test]
    fn enum_values() {
        let value = json!("green");
        assert_eq!(
            JsonParseNode::new(&value).get_enum_value::<Color>().unwrap(),
            Some(Color::Green)
        );

        let unknown = json!("blue");
        assert!(matches!(
            JsonParseNode::new(&unknown).get_enum_value::<Color>(),
            Err(Error::UnrecognizedEnumValue { type_name: "color", .. })
        ));

        let number = json!(1);
        assert!(matches!(
            JsonParseNode::new(&number).get_enum_value::<Color>(),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn enum_collections_keep_order() {
        let value = json!(["green", "red", "green"]);
        assert_eq!(
            JsonParseNode::new(&value)
                .get_collection_of_enum_values::<Color>()
                .unwrap(),
            Some(vec![Color::Green, Color::Red, Color::Green])
        );
    }

    #[test]
    fn primitive_collections_skip_nulls() {
        let value = json!(["a", null, "b"]);
        let strings: Option<Vec<String>> = JsonParseNode::new(&value)
            .get_collection_of_primitive_values()
            .unwrap();
        assert_eq!(strings, Some(vec!["a".to_string(), "b".to_string()]));

        let empty = json!([]);
        let none: Option<Vec<i32>> = JsonParseNode::new(&empty)
            .get_collection_of_primitive_values()
            .unwrap();
        assert_eq!(none, Some(vec![]));

        let not_array = json!({"a": 1});
        assert!(
            JsonParseNode::new(&not_array)
                .get_collection_of_primitive_values::<String>()
                .is_err()
        );
    }

    #[test]
    fn byte_arrays_are_base64() {
        let value = json!("PFN0YXJ0TGF5b3V0Lz4=");
        assert_eq!(
            JsonParseNode::new(&value).get_byte_array_value().unwrap(),
            Some(b"<StartLayout/>".to_vec())
        );

        let bad = json!("***");
        assert!(matches!(
            JsonParseNode::new(&bad).get_byte_array_value(),
            Err(Error::InvalidValue { kind: "base64", .. })
        ));
    }

    #[test]
    fn object_getter_rejects_scalars() {
        let value = json!([1, 2]);
        let result = JsonParseNode::new(&value)
            .get_object_value::<crate::models::KeyValuePair>();
        assert!(matches!(
            result,
            Err(Error::TypeMismatch {
                expected: "object",
                found: "array"
            })
        ));
    }
}
