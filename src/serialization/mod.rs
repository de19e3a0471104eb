//! JSON parse-node / serialization-writer substrate.
//!
//! Models never touch `serde_json` directly. They read through a
//! [`JsonParseNode`] positioned at a wire value and write through a
//! [`JsonSerializationWriter`], one declared field at a time. Everything a
//! model does not declare is kept in its [`AdditionalData`] bag so that a
//! decode → encode round trip loses nothing the server sent.
//!
//! Write policy: a field that is unset (`None`) is omitted from the output
//! rather than written as `null`.
//!
//! A wire `null` decodes as unset, except for `@odata.type`: models only
//! take a non-null discriminator, so a concrete type keeps the identity its
//! constructor stamped.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};

pub mod discriminator;
pub mod iso_duration;
pub mod parse_node;
pub mod primitive;
pub mod writer;

pub use discriminator::Discriminated;
pub use iso_duration::IsoDuration;
pub use parse_node::JsonParseNode;
pub use primitive::PrimitiveValue;
pub use writer::JsonSerializationWriter;

/// Wire key carrying the concrete type of a polymorphic object.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Undeclared wire fields, keyed by their original wire name.
pub type AdditionalData = BTreeMap<String, Value>;

/// A model that keeps the wire fields it does not declare.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// A model that can be read from a [`JsonParseNode`] and written to a
/// [`JsonSerializationWriter`].
pub trait Parsable: AdditionalDataHolder {
    /// Build the empty instance that will receive the fields of `node`.
    ///
    /// Called before any field is applied. Flat records ignore `node`;
    /// polymorphic types inspect its discriminator to pick the concrete type.
    fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> Result<Self>
    where
        Self: Sized;

    /// Apply a single wire field.
    ///
    /// Returns `Ok(false)` when `key` is not declared anywhere in the type's
    /// inheritance chain; the caller then keeps it as additional data.
    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool>;

    /// Write every declared field, base type first. Additional data is
    /// written by the caller afterwards.
    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()>;
}

/// Decode a model from JSON text.
pub fn from_json_str<T: Parsable>(json: &str) -> Result<T> {
    let value: Value = serde_json::from_str(json)?;
    from_json_value(&value)
}

/// Decode a model from an already parsed JSON value.
///
/// The value must be an object; `null` is reported as a type mismatch.
pub fn from_json_value<T: Parsable>(value: &Value) -> Result<T> {
    JsonParseNode::new(value)
        .get_object_value()?
        .ok_or(Error::TypeMismatch {
            expected: "object",
            found: "null",
        })
}

/// Encode a model as a JSON object.
pub fn to_json_value<T: Parsable>(model: &T) -> Result<Value> {
    writer::object_to_value(model)
}

/// Encode a model as compact JSON text.
pub fn to_json_string<T: Parsable>(model: &T) -> Result<String> {
    Ok(serde_json::to_string(&to_json_value(model)?)?)
}

/// Encode a model as indented JSON text.
pub fn to_json_string_pretty<T: Parsable>(model: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(model)?)?)
}
