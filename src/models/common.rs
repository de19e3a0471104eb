//! Small types shared across the model families.

use crate::enum_codec::graph_enum;
use crate::error::Result;
use crate::serialization::{
    AdditionalData, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY, Parsable,
};

use super::additional_data_holder;

graph_enum! {
    pub enum DayOfWeek: "dayOfWeek" {
        Sunday => "sunday",
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
    }
}

/// A name/value pair, e.g. one localized message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValuePair {
    additional_data: AdditionalData,
    name: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

impl KeyValuePair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

additional_data_holder!(KeyValuePair);

impl Parsable for KeyValuePair {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "name" => self.name = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "value" => self.value = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("value", self.value.as_deref())?;
        Ok(())
    }
}

/// An app in an allow/block list, identified by store listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppListItem {
    additional_data: AdditionalData,
    app_id: Option<String>,
    app_store_url: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
    publisher: Option<String>,
}

impl AppListItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Application or bundle identifier.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn app_store_url(&self) -> Option<&str> {
        self.app_store_url.as_deref()
    }

    pub fn set_app_store_url(&mut self, value: Option<String>) {
        self.app_store_url = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn set_publisher(&mut self, value: Option<String>) {
        self.publisher = value;
    }
}

additional_data_holder!(AppListItem);

impl Parsable for AppListItem {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "appId" => self.app_id = node.get_string_value()?,
            "appStoreUrl" => self.app_store_url = node.get_string_value()?,
            "name" => self.name = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "publisher" => self.publisher = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("appId", self.app_id.as_deref())?;
        writer.write_string_value("appStoreUrl", self.app_store_url.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("publisher", self.publisher.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_codec::GraphEnum;
    use crate::serialization::{AdditionalDataHolder, from_json_str, to_json_value};
    use serde_json::json;

    #[test]
    fn day_of_week_wire_values() {
        assert_eq!(DayOfWeek::parse("sunday").unwrap(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Saturday.as_str(), "saturday");
        assert_eq!(DayOfWeek::Saturday.ordinal(), 6);
        assert!(DayOfWeek::parse("Sunday").is_err());
    }

    #[test]
    fn key_value_pair_round_trip() {
        let input = json!({"name": "en-US", "value": "Hello", "futureField": 42});
        let pair: KeyValuePair = from_json_str(&input.to_string()).unwrap();
        assert_eq!(pair.name(), Some("en-US"));
        assert_eq!(pair.value(), Some("Hello"));
        assert_eq!(pair.additional_data().get("futureField"), Some(&json!(42)));
        assert_eq!(to_json_value(&pair).unwrap(), input);
    }

    #[test]
    fn null_field_is_unset() {
        let pair: KeyValuePair = from_json_str(r#"{"name": null, "value": "v"}"#).unwrap();
        assert_eq!(pair.name(), None);
        assert!(pair.additional_data().is_empty());
        assert_eq!(to_json_value(&pair).unwrap(), json!({"value": "v"}));
    }

    #[test]
    fn app_list_item_setters() {
        let mut item = AppListItem::new();
        item.set_name(Some("Outlook".to_string()));
        item.set_app_id(Some("com.microsoft.office.outlook".to_string()));
        item.set_publisher(None);
        assert_eq!(
            to_json_value(&item).unwrap(),
            json!({"name": "Outlook", "appId": "com.microsoft.office.outlook"})
        );
    }
}
