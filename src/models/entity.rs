//! The root of every addressable Graph resource.

use crate::error::Result;
use crate::serialization::{
    AdditionalData, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY, Parsable,
};

use super::additional_data_holder;

/// Fields shared by all entity types: the resource id and its `@odata.type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    additional_data: AdditionalData,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unique identifier for an entity. Read-only.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

additional_data_holder!(Entity);

impl Parsable for Entity {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "id" => self.id = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        Ok(())
    }
}
