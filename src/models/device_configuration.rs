//! Intune device configuration profiles.

use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{Discriminated, JsonParseNode, JsonSerializationWriter, Parsable};

use super::{
    AndroidDeviceOwnerGeneralDeviceConfiguration, Entity, WindowsKioskConfiguration,
    additional_data_holder, base_accessors,
};

/// Settings shared by every device configuration profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceConfiguration {
    base: Entity,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    display_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    role_scope_tag_ids: Option<Vec<String>>,
    supports_scope_tags: Option<bool>,
    version: Option<i32>,
}

impl DeviceConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    /// Admin provided description of the profile.
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

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    /// Scope tags applied to this entity instance.
    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    /// Whether the profile can be assigned scope tags. Read-only.
    pub fn supports_scope_tags(&self) -> Option<bool> {
        self.supports_scope_tags
    }

    pub fn set_supports_scope_tags(&mut self, value: Option<bool>) {
        self.supports_scope_tags = value;
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
}

base_accessors!(DeviceConfiguration => Entity);
additional_data_holder!(DeviceConfiguration => base);

impl Parsable for DeviceConfiguration {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "roleScopeTagIds" => {
                self.role_scope_tag_ids = node.get_collection_of_primitive_values()?
            }
            "supportsScopeTags" => self.supports_scope_tags = node.get_bool_value()?,
            "version" => self.version = node.get_i32_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_collection_of_primitive_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_bool_value("supportsScopeTags", self.supports_scope_tags)?;
        writer.write_i32_value("version", self.version)?;
        Ok(())
    }
}

/// A device configuration of any concrete type.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum DeviceConfigurationKind {
    Base(DeviceConfiguration),
    AndroidDeviceOwnerGeneral(AndroidDeviceOwnerGeneralDeviceConfiguration),
    WindowsKiosk(WindowsKioskConfiguration),
}

delegate_kind!(DeviceConfigurationKind {
    Base,
    AndroidDeviceOwnerGeneral,
    WindowsKiosk,
});

impl Discriminated for DeviceConfigurationKind {
    const TYPE_NAME: &'static str = "deviceConfiguration";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (AndroidDeviceOwnerGeneralDeviceConfiguration::ODATA_TYPE, || {
            Self::AndroidDeviceOwnerGeneral(AndroidDeviceOwnerGeneralDeviceConfiguration::new())
        }),
        (WindowsKioskConfiguration::ODATA_TYPE, || {
            Self::WindowsKiosk(WindowsKioskConfiguration::new())
        }),
    ];

    fn fallback() -> Self {
        Self::Base(DeviceConfiguration::new())
    }
}

impl DeviceConfigurationKind {
    /// The `deviceConfiguration` part common to every variant.
    pub fn as_base(&self) -> &DeviceConfiguration {
        match self {
            Self::Base(inner) => inner,
            Self::AndroidDeviceOwnerGeneral(inner) => inner.base(),
            Self::WindowsKiosk(inner) => inner.base(),
        }
    }

    pub fn as_base_mut(&mut self) -> &mut DeviceConfiguration {
        match self {
            Self::Base(inner) => inner,
            Self::AndroidDeviceOwnerGeneral(inner) => inner.base_mut(),
            Self::WindowsKiosk(inner) => inner.base_mut(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().base().odata_type()
    }
}

impl Default for DeviceConfigurationKind {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{AdditionalDataHolder, from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn base_fields_and_entity_fields_decode() {
        let input = json!({
            "id": "cfg-1",
            "displayName": "Kiosk lobby",
            "version": 3,
            "createdDateTime": "2023-01-15T08:30:00Z",
            "roleScopeTagIds": ["0", "7"],
        });
        let config: DeviceConfiguration = from_json_value(&input).unwrap();
        assert_eq!(config.base().id(), Some("cfg-1"));
        assert_eq!(config.display_name(), Some("Kiosk lobby"));
        assert_eq!(config.version(), Some(3));
        assert_eq!(config.role_scope_tag_ids(), Some(&["0".to_string(), "7".to_string()][..]));
        assert_eq!(
            config.created_date_time().unwrap().to_rfc3339(),
            "2023-01-15T08:30:00+00:00"
        );
        assert_eq!(to_json_value(&config).unwrap(), input);
    }

    #[test]
    fn kind_picks_concrete_type() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskConfiguration",
            "displayName": "Lobby",
            "kioskBrowserDefaultUrl": "https://contoso.com",
        });
        let config: DeviceConfigurationKind = from_json_value(&input).unwrap();
        let DeviceConfigurationKind::WindowsKiosk(kiosk) = &config else {
            panic!("expected kiosk configuration, got {config:?}");
        };
        assert_eq!(kiosk.kiosk_browser_default_url(), Some("https://contoso.com"));
        assert_eq!(config.as_base().display_name(), Some("Lobby"));
        assert!(config.additional_data().is_empty());
    }

    #[test]
    fn unknown_kind_keeps_subtype_fields_in_bag() {
        let input = json!({
            "@odata.type": "#microsoft.graph.macOSGeneralDeviceConfiguration",
            "displayName": "Mac",
            "gatekeeperAllowedAppSource": "macAppStore",
        });
        let config: DeviceConfigurationKind = from_json_value(&input).unwrap();
        assert!(matches!(config, DeviceConfigurationKind::Base(_)));
        assert_eq!(
            config.odata_type(),
            Some("#microsoft.graph.macOSGeneralDeviceConfiguration")
        );
        assert_eq!(
            config.additional_data().get("gatekeeperAllowedAppSource"),
            Some(&json!("macAppStore"))
        );
        assert_eq!(to_json_value(&config).unwrap(), input);
    }
}
