//! Runtime registry of the decodable models, enumerations and polymorphic
//! hierarchies.
//!
//! The model types are resolved statically everywhere else in the crate.
//! This module exists for callers that only know a type by name, such as the
//! command-line tool.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::enum_codec::{GraphEnum, parse_ordinal};
use crate::error::{Error, Result};
use crate::models::{
    AndroidDeviceOwnerAppAutoUpdatePolicyType, AndroidDeviceOwnerBatteryPluggedMode,
    AndroidDeviceOwnerGlobalProxyKind, AndroidDeviceOwnerPlayStoreMode,
    AndroidDeviceOwnerRequiredPasswordType, AndroidDeviceOwnerRequiredPasswordUnlock,
    AndroidDeviceOwnerSystemUpdateInstallType, AndroidKeyguardFeature, BaseItemKind, DayOfWeek,
    DeviceConfigurationKind, DeviceShellScript, GroupPolicyMigrationReadiness,
    GroupPolicyMigrationReport, PageLayoutType, PagePromotionType, RunAsAccountType, Site, SitePage, Windows10AppsUpdateRecurrence,
    WindowsAppStartLayoutTileSize, WindowsEdgeKioskType, WindowsKioskAppConfigurationKind,
    WindowsKioskAppKind, WindowsKioskAppType, WindowsKioskProfile, WindowsKioskUserKind,
    ZebraFotaDeploymentSettings, ZebraFotaDeploymentState, ZebraFotaDeploymentStatus,
    ZebraFotaNetworkType, ZebraFotaScheduleMode, ZebraFotaUpdateType,
};
use crate::serialization::discriminator::discriminators;
use crate::serialization::{
    AdditionalDataHolder, Discriminated, ODATA_TYPE_KEY, Parsable, from_json_value, to_json_value,
};

/// A top-level model that can be decoded by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    DeviceConfiguration,
    DeviceShellScript,
    GroupPolicyMigrationReport,
    WindowsKioskApp,
    WindowsKioskAppConfiguration,
    WindowsKioskUser,
    WindowsKioskProfile,
    AndroidDeviceOwnerGlobalProxy,
    ZebraFotaDeploymentSettings,
    ZebraFotaDeploymentStatus,
    BaseItem,
    Site,
    SitePage,
}

impl ModelKind {
    pub const ALL: &'static [Self] = &[
        Self::DeviceConfiguration,
        Self::DeviceShellScript,
        Self::GroupPolicyMigrationReport,
        Self::WindowsKioskApp,
        Self::WindowsKioskAppConfiguration,
        Self::WindowsKioskUser,
        Self::WindowsKioskProfile,
        Self::AndroidDeviceOwnerGlobalProxy,
        Self::ZebraFotaDeploymentSettings,
        Self::ZebraFotaDeploymentStatus,
        Self::BaseItem,
        Self::Site,
        Self::SitePage,
    ];

    /// Command-line name, e.g. `"windows-kiosk-app"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::DeviceConfiguration => "device-configuration",
            Self::DeviceShellScript => "device-shell-script",
            Self::GroupPolicyMigrationReport => "group-policy-migration-report",
            Self::WindowsKioskApp => "windows-kiosk-app",
            Self::WindowsKioskAppConfiguration => "windows-kiosk-app-configuration",
            Self::WindowsKioskUser => "windows-kiosk-user",
            Self::WindowsKioskProfile => "windows-kiosk-profile",
            Self::AndroidDeviceOwnerGlobalProxy => "android-device-owner-global-proxy",
            Self::ZebraFotaDeploymentSettings => "zebra-fota-deployment-settings",
            Self::ZebraFotaDeploymentStatus => "zebra-fota-deployment-status",
            Self::BaseItem => "base-item",
            Self::Site => "site",
            Self::SitePage => "site-page",
        }
    }

    /// Wire name of the type decoded for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::DeviceConfiguration => DeviceConfigurationKind::TYPE_NAME,
            Self::DeviceShellScript => "deviceShellScript",
            Self::GroupPolicyMigrationReport => "groupPolicyMigrationReport",
            Self::WindowsKioskApp => WindowsKioskAppKind::TYPE_NAME,
            Self::WindowsKioskAppConfiguration => WindowsKioskAppConfigurationKind::TYPE_NAME,
            Self::WindowsKioskUser => WindowsKioskUserKind::TYPE_NAME,
            Self::WindowsKioskProfile => "windowsKioskProfile",
            Self::AndroidDeviceOwnerGlobalProxy => AndroidDeviceOwnerGlobalProxyKind::TYPE_NAME,
            Self::ZebraFotaDeploymentSettings => "zebraFotaDeploymentSettings",
            Self::ZebraFotaDeploymentStatus => "zebraFotaDeploymentStatus",
            Self::BaseItem => BaseItemKind::TYPE_NAME,
            Self::Site => "site",
            Self::SitePage => "sitePage",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownModel {
                name: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|kind| kind.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Result of decoding a document and encoding it again.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedDocument {
    pub model: ModelKind,
    /// `@odata.type` of the re-encoded document, if any.
    pub discriminator: Option<String>,
    /// Top-level keys kept as additional data, sorted.
    pub additional_keys: Vec<String>,
    /// The re-encoded document.
    pub value: Value,
}

/// Decode `value` as `kind` and encode the result again.
///
/// Keys the model does not declare survive the round trip, and concrete
/// subtypes write their own discriminator even if the input omitted it.
pub fn normalize(kind: ModelKind, value: &Value) -> Result<DecodedDocument> {
    match kind {
        ModelKind::DeviceConfiguration => normalize_as::<DeviceConfigurationKind>(kind, value),
        ModelKind::DeviceShellScript => normalize_as::<DeviceShellScript>(kind, value),
        ModelKind::GroupPolicyMigrationReport => {
            normalize_as::<GroupPolicyMigrationReport>(kind, value)
        }
        ModelKind::WindowsKioskApp => normalize_as::<WindowsKioskAppKind>(kind, value),
        ModelKind::WindowsKioskAppConfiguration => {
            normalize_as::<WindowsKioskAppConfigurationKind>(kind, value)
        }
        ModelKind::WindowsKioskUser => normalize_as::<WindowsKioskUserKind>(kind, value),
        ModelKind::WindowsKioskProfile => normalize_as::<WindowsKioskProfile>(kind, value),
        ModelKind::AndroidDeviceOwnerGlobalProxy => {
            normalize_as::<AndroidDeviceOwnerGlobalProxyKind>(kind, value)
        }
        ModelKind::ZebraFotaDeploymentSettings => {
            normalize_as::<ZebraFotaDeploymentSettings>(kind, value)
        }
        ModelKind::ZebraFotaDeploymentStatus => {
            normalize_as::<ZebraFotaDeploymentStatus>(kind, value)
        }
        ModelKind::BaseItem => normalize_as::<BaseItemKind>(kind, value),
        ModelKind::Site => normalize_as::<Site>(kind, value),
        ModelKind::SitePage => normalize_as::<SitePage>(kind, value),
    }
}

fn normalize_as<T: Parsable>(model: ModelKind, value: &Value) -> Result<DecodedDocument> {
    let decoded: T = from_json_value(value)?;
    let additional_keys = decoded.additional_data().keys().cloned().collect();
    let value = to_json_value(&decoded)?;
    let discriminator = value
        .get(ODATA_TYPE_KEY)
        .and_then(Value::as_str)
        .map(str::to_string);

    tracing::debug!(
        model = model.name(),
        discriminator = discriminator.as_deref().unwrap_or("<none>"),
        "normalized document"
    );

    Ok(DecodedDocument {
        model,
        discriminator,
        additional_keys,
        value,
    })
}

/// Read and parse a JSON document from disk.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value: Value = serde_json::from_str(&content)?;
    Ok(value)
}

/// A declared enumeration, usable without naming its Rust type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: &'static [&'static str],
    #[serde(skip)]
    parse: fn(&str) -> Result<usize>,
}

impl EnumDescriptor {
    const fn of<E: GraphEnum>() -> Self {
        Self {
            name: E::TYPE_NAME,
            values: E::WIRE_VALUES,
            parse: parse_ordinal::<E>,
        }
    }

    /// Ordinal of a wire string.
    pub fn parse(&self, value: &str) -> Result<usize> {
        (self.parse)(value)
    }
}

/// Every enumeration in [`crate::models`], sorted by type name.
pub static ENUMS: &[EnumDescriptor] = &[
    EnumDescriptor::of::<AndroidDeviceOwnerAppAutoUpdatePolicyType>(),
    EnumDescriptor::of::<AndroidDeviceOwnerBatteryPluggedMode>(),
    EnumDescriptor::of::<AndroidDeviceOwnerPlayStoreMode>(),
    EnumDescriptor::of::<AndroidDeviceOwnerRequiredPasswordType>(),
    EnumDescriptor::of::<AndroidDeviceOwnerRequiredPasswordUnlock>(),
    EnumDescriptor::of::<AndroidDeviceOwnerSystemUpdateInstallType>(),
    EnumDescriptor::of::<AndroidKeyguardFeature>(),
    EnumDescriptor::of::<DayOfWeek>(),
    EnumDescriptor::of::<GroupPolicyMigrationReadiness>(),
    EnumDescriptor::of::<PageLayoutType>(),
    EnumDescriptor::of::<PagePromotionType>(),
    EnumDescriptor::of::<RunAsAccountType>(),
    EnumDescriptor::of::<Windows10AppsUpdateRecurrence>(),
    EnumDescriptor::of::<WindowsAppStartLayoutTileSize>(),
    EnumDescriptor::of::<WindowsEdgeKioskType>(),
    EnumDescriptor::of::<WindowsKioskAppType>(),
    EnumDescriptor::of::<ZebraFotaDeploymentState>(),
    EnumDescriptor::of::<ZebraFotaNetworkType>(),
    EnumDescriptor::of::<ZebraFotaScheduleMode>(),
    EnumDescriptor::of::<ZebraFotaUpdateType>(),
];

/// Look up an enumeration by its wire type name.
pub fn find_enum(name: &str) -> Result<&'static EnumDescriptor> {
    ENUMS
        .iter()
        .find(|e| e.name == name)
        .ok_or_else(|| Error::UnknownEnumType {
            name: name.to_string(),
            available: ENUMS.iter().map(|e| e.name).collect::<Vec<_>>().join(", "),
        })
}

/// A polymorphic type and the discriminators it dispatches on.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyDescriptor {
    pub name: &'static str,
    discriminators: fn() -> Vec<&'static str>,
}

impl HierarchyDescriptor {
    const fn of<T: Discriminated>() -> Self {
        Self {
            name: T::TYPE_NAME,
            discriminators: discriminators::<T>,
        }
    }

    /// Discriminator strings in declaration order.
    pub fn discriminators(&self) -> Vec<&'static str> {
        (self.discriminators)()
    }
}

pub static HIERARCHIES: &[HierarchyDescriptor] = &[
    HierarchyDescriptor::of::<AndroidDeviceOwnerGlobalProxyKind>(),
    HierarchyDescriptor::of::<BaseItemKind>(),
    HierarchyDescriptor::of::<DeviceConfigurationKind>(),
    HierarchyDescriptor::of::<WindowsKioskAppKind>(),
    HierarchyDescriptor::of::<WindowsKioskAppConfigurationKind>(),
    HierarchyDescriptor::of::<WindowsKioskUserKind>(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_names_parse_back() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.name().parse::<ModelKind>().unwrap(), *kind);
        }
        assert!(matches!(
            "windows-kiosk".parse::<ModelKind>(),
            Err(Error::UnknownModel { .. })
        ));
    }

    #[test]
    fn enum_catalog_is_sorted_and_unique() {
        let names: Vec<&str> = ENUMS.iter().map(|e| e.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn find_enum_parses_ordinals() {
        let keyguard = find_enum("androidKeyguardFeature").unwrap();
        assert_eq!(keyguard.values.len(), 11);
        assert_eq!(keyguard.parse("camera").unwrap(), 1);
        assert!(keyguard.parse("Camera").is_err());

        let err = find_enum("colour").unwrap_err();
        assert!(matches!(err, Error::UnknownEnumType { ref name, .. } if name == "colour"));
    }

    #[test]
    fn hierarchy_tables_have_no_duplicates() {
        for hierarchy in HIERARCHIES {
            let mut seen = hierarchy.discriminators();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), total, "duplicate discriminator in {}", hierarchy.name);
        }
    }

    #[test]
    fn normalize_reports_discriminator_and_extras() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskWin32App",
            "name": "Notepad",
            "futureField": 42,
        });
        let doc = normalize(ModelKind::WindowsKioskApp, &input).unwrap();
        assert_eq!(
            doc.discriminator.as_deref(),
            Some("#microsoft.graph.windowsKioskWin32App")
        );
        assert_eq!(doc.additional_keys, vec!["futureField".to_string()]);
        assert_eq!(doc.value, input);
    }

    #[test]
    fn site_page_is_stamped_when_the_input_omits_it() {
        let doc = normalize(ModelKind::SitePage, &json!({"title": "Home", "promotionKind": "page"}))
            .unwrap();
        assert_eq!(doc.discriminator.as_deref(), Some("#microsoft.graph.sitePage"));
        assert!(doc.additional_keys.is_empty());
        assert_eq!(find_enum("pagePromotionType").unwrap().parse("newsPost").unwrap(), 2);
    }

    #[test]
    fn normalize_rejects_non_objects() {
        assert!(normalize(ModelKind::DeviceShellScript, &json!("script")).is_err());
        assert!(normalize(ModelKind::DeviceShellScript, &Value::Null).is_err());
    }
}
