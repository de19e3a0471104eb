use chrono::{DateTime, FixedOffset};

use crate::enum_codec::graph_enum;
use crate::error::Result;
use crate::serialization::{IsoDuration, JsonParseNode, JsonSerializationWriter, Parsable};

use super::{Entity, additional_data_holder, base_accessors};

graph_enum! {
    pub enum RunAsAccountType: "runAsAccountType" {
        System => "system",
        User => "user",
    }
}

/// A shell script pushed to managed macOS devices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceShellScript {
    base: Entity,
    block_execution_notifications: Option<bool>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    display_name: Option<String>,
    execution_frequency: Option<IsoDuration>,
    file_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    retry_count: Option<i32>,
    role_scope_tag_ids: Option<Vec<String>>,
    run_as_account: Option<RunAsAccountType>,
    script_content: Option<Vec<u8>>,
}

impl DeviceShellScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_execution_notifications(&self) -> Option<bool> {
        self.block_execution_notifications
    }

    pub fn set_block_execution_notifications(&mut self, value: Option<bool>) {
        self.block_execution_notifications = value;
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    /// Interval between runs; unset means the script runs once.
    pub fn execution_frequency(&self) -> Option<IsoDuration> {
        self.execution_frequency
    }

    pub fn set_execution_frequency(&mut self, value: Option<IsoDuration>) {
        self.execution_frequency = value;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, value: Option<String>) {
        self.file_name = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn retry_count(&self) -> Option<i32> {
        self.retry_count
    }

    pub fn set_retry_count(&mut self, value: Option<i32>) {
        self.retry_count = value;
    }

    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    pub fn run_as_account(&self) -> Option<RunAsAccountType> {
        self.run_as_account
    }

    pub fn set_run_as_account(&mut self, value: Option<RunAsAccountType>) {
        self.run_as_account = value;
    }

    /// Script body; base64 on the wire.
    pub fn script_content(&self) -> Option<&[u8]> {
        self.script_content.as_deref()
    }

    pub fn set_script_content(&mut self, value: Option<Vec<u8>>) {
        self.script_content = value;
    }
}

base_accessors!(DeviceShellScript => Entity);
additional_data_holder!(DeviceShellScript => base);

impl Parsable for DeviceShellScript {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "blockExecutionNotifications" => {
                self.block_execution_notifications = node.get_bool_value()?
            }
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "executionFrequency" => self.execution_frequency = node.get_iso_duration_value()?,
            "fileName" => self.file_name = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "retryCount" => self.retry_count = node.get_i32_value()?,
            "roleScopeTagIds" => {
                self.role_scope_tag_ids = node.get_collection_of_primitive_values()?
            }
            "runAsAccount" => self.run_as_account = node.get_enum_value()?,
            "scriptContent" => self.script_content = node.get_byte_array_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_bool_value(
            "blockExecutionNotifications",
            self.block_execution_notifications,
        )?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_iso_duration_value("executionFrequency", self.execution_frequency.as_ref())?;
        writer.write_string_value("fileName", self.file_name.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_i32_value("retryCount", self.retry_count)?;
        writer.write_collection_of_primitive_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_enum_value("runAsAccount", self.run_as_account)?;
        writer.write_byte_array_value("scriptContent", self.script_content.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn script_with_duration_and_content() {
        let input = json!({
            "id": "script-1",
            "displayName": "Rotate logs",
            "fileName": "rotate.sh",
            "executionFrequency": "PT12H",
            "retryCount": 3,
            "runAsAccount": "system",
            "scriptContent": "IyEvYmluL3NoCg==",
        });
        let script: DeviceShellScript = from_json_value(&input).unwrap();
        assert_eq!(script.base().id(), Some("script-1"));
        assert_eq!(script.execution_frequency().unwrap().hours, 12);
        assert_eq!(script.run_as_account(), Some(RunAsAccountType::System));
        assert_eq!(script.script_content(), Some(b"#!/bin/sh\n".as_slice()));
        assert_eq!(to_json_value(&script).unwrap(), input);
    }

    #[test]
    fn malformed_duration_fails() {
        let input = json!({"executionFrequency": "12 hours"});
        assert!(from_json_value::<DeviceShellScript>(&input).is_err());
    }
}
