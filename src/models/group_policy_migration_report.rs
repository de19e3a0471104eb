use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::enum_codec::graph_enum;
use crate::error::Result;
use crate::serialization::{JsonParseNode, JsonSerializationWriter, Parsable};

use super::{Entity, additional_data_holder, base_accessors};

graph_enum! {
    /// How much of a GPO can be expressed as Intune settings.
    pub enum GroupPolicyMigrationReadiness: "groupPolicyMigrationReadiness" {
        None => "none",
        Partial => "partial",
        Complete => "complete",
        Error => "error",
        NotApplicable => "notApplicable",
    }
}

/// Migration analysis of one group policy object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPolicyMigrationReport {
    base: Entity,
    created_date_time: Option<DateTime<FixedOffset>>,
    display_name: Option<String>,
    group_policy_created_date_time: Option<DateTime<FixedOffset>>,
    group_policy_last_modified_date_time: Option<DateTime<FixedOffset>>,
    group_policy_object_id: Option<Uuid>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    migration_readiness: Option<GroupPolicyMigrationReadiness>,
    ou_distinguished_name: Option<String>,
    role_scope_tag_ids: Option<Vec<String>>,
    supported_settings_count: Option<i32>,
    supported_settings_percent: Option<i32>,
    targeted_in_active_directory: Option<bool>,
    total_settings_count: Option<i32>,
}

impl GroupPolicyMigrationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn group_policy_created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.group_policy_created_date_time
    }

    pub fn set_group_policy_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.group_policy_created_date_time = value;
    }

    pub fn group_policy_last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.group_policy_last_modified_date_time
    }

    pub fn set_group_policy_last_modified_date_time(
        &mut self,
        value: Option<DateTime<FixedOffset>>,
    ) {
        self.group_policy_last_modified_date_time = value;
    }

    /// GUID of the GPO in Active Directory.
    pub fn group_policy_object_id(&self) -> Option<Uuid> {
        self.group_policy_object_id
    }

    pub fn set_group_policy_object_id(&mut self, value: Option<Uuid>) {
        self.group_policy_object_id = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn migration_readiness(&self) -> Option<GroupPolicyMigrationReadiness> {
        self.migration_readiness
    }

    pub fn set_migration_readiness(&mut self, value: Option<GroupPolicyMigrationReadiness>) {
        self.migration_readiness = value;
    }

    pub fn ou_distinguished_name(&self) -> Option<&str> {
        self.ou_distinguished_name.as_deref()
    }

    pub fn set_ou_distinguished_name(&mut self, value: Option<String>) {
        self.ou_distinguished_name = value;
    }

    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    pub fn supported_settings_count(&self) -> Option<i32> {
        self.supported_settings_count
    }

    pub fn set_supported_settings_count(&mut self, value: Option<i32>) {
        self.supported_settings_count = value;
    }

    pub fn supported_settings_percent(&self) -> Option<i32> {
        self.supported_settings_percent
    }

    pub fn set_supported_settings_percent(&mut self, value: Option<i32>) {
        self.supported_settings_percent = value;
    }

    pub fn targeted_in_active_directory(&self) -> Option<bool> {
        self.targeted_in_active_directory
    }

    pub fn set_targeted_in_active_directory(&mut self, value: Option<bool>) {
        self.targeted_in_active_directory = value;
    }

    pub fn total_settings_count(&self) -> Option<i32> {
        self.total_settings_count
    }

    pub fn set_total_settings_count(&mut self, value: Option<i32>) {
        self.total_settings_count = value;
    }
}

base_accessors!(GroupPolicyMigrationReport => Entity);
additional_data_holder!(GroupPolicyMigrationReport => base);

impl Parsable for GroupPolicyMigrationReport {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "groupPolicyCreatedDateTime" => {
                self.group_policy_created_date_time = node.get_time_value()?
            }
            "groupPolicyLastModifiedDateTime" => {
                self.group_policy_last_modified_date_time = node.get_time_value()?
            }
            "groupPolicyObjectId" => self.group_policy_object_id = node.get_uuid_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "migrationReadiness" => self.migration_readiness = node.get_enum_value()?,
            "ouDistinguishedName" => self.ou_distinguished_name = node.get_string_value()?,
            "roleScopeTagIds" => {
                self.role_scope_tag_ids = node.get_collection_of_primitive_values()?
            }
            "supportedSettingsCount" => self.supported_settings_count = node.get_i32_value()?,
            "supportedSettingsPercent" => {
                self.supported_settings_percent = node.get_i32_value()?
            }
            "targetedInActiveDirectory" => {
                self.targeted_in_active_directory = node.get_bool_value()?
            }
            "totalSettingsCount" => self.total_settings_count = node.get_i32_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_time_value(
            "groupPolicyCreatedDateTime",
            self.group_policy_created_date_time.as_ref(),
        )?;
        writer.write_time_value(
            "groupPolicyLastModifiedDateTime",
            self.group_policy_last_modified_date_time.as_ref(),
        )?;
        writer.write_uuid_value("groupPolicyObjectId", self.group_policy_object_id.as_ref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_enum_value("migrationReadiness", self.migration_readiness)?;
        writer.write_string_value("ouDistinguishedName", self.ou_distinguished_name.as_deref())?;
        writer.write_collection_of_primitive_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_i32_value("supportedSettingsCount", self.supported_settings_count)?;
        writer.write_i32_value("supportedSettingsPercent", self.supported_settings_percent)?;
        writer.write_bool_value("targetedInActiveDirectory", self.targeted_in_active_directory)?;
        writer.write_i32_value("totalSettingsCount", self.total_settings_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn report_with_gpo_guid() {
        let input = json!({
            "id": "31b2f340-016d-11d2-945f-00c04fb984f9_OU=Kiosks,DC=contoso,DC=com",
            "displayName": "Default Domain Policy",
            "groupPolicyObjectId": "31b2f340-016d-11d2-945f-00c04fb984f9",
            "migrationReadiness": "partial",
            "supportedSettingsCount": 12,
            "totalSettingsCount": 20,
            "supportedSettingsPercent": 60,
        });
        let report: GroupPolicyMigrationReport = from_json_value(&input).unwrap();
        assert_eq!(
            report.group_policy_object_id().map(|id| id.to_string()),
            Some("31b2f340-016d-11d2-945f-00c04fb984f9".to_string())
        );
        assert_eq!(
            report.migration_readiness(),
            Some(GroupPolicyMigrationReadiness::Partial)
        );
        assert_eq!(to_json_value(&report).unwrap(), input);
    }

    #[test]
    fn invalid_guid_is_rejected() {
        let input = json!({"groupPolicyObjectId": "not-a-guid"});
        assert!(matches!(
            from_json_value::<GroupPolicyMigrationReport>(&input),
            Err(Error::InvalidValue { kind: "uuid", .. })
        ));
    }
}
