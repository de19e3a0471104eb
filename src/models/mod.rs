//! Microsoft Graph beta model types.
//!
//! Three shapes recur:
//!
//! - **Enumerations** declared with [`graph_enum!`](crate::enum_codec), exchanged
//!   as wire strings.
//! - **Records**: structs of optional fields plus an additional-data bag.
//!   Derived records hold their base type in a `base` field and forward to it.
//! - **Polymorphic types**: `…Kind` enums with one variant per concrete type,
//!   chosen from `@odata.type` when decoding.

/// Implement `AdditionalDataHolder` for a record that owns its bag, or
/// (`=> base`) for one that forwards to its base record.
macro_rules! additional_data_holder {
    ($ty:ty) => {
        impl $crate::serialization::AdditionalDataHolder for $ty {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self.additional_data
            }
        }
    };
    ($ty:ty => base) => {
        impl $crate::serialization::AdditionalDataHolder for $ty {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
            }
        }
    };
}

/// `base()` / `base_mut()` accessors for a derived record.
macro_rules! base_accessors {
    ($ty:ty => $base:ty) => {
        impl $ty {
            /// The base-type part of this record.
            pub fn base(&self) -> &$base {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }
    };
}

pub(crate) use additional_data_holder;
pub(crate) use base_accessors;

mod android_device_owner;
mod android_device_owner_general_device_configuration;
mod common;
mod device_configuration;
mod device_shell_script;
mod entity;
mod group_policy_migration_report;
mod sites;
mod windows_kiosk;
mod windows_kiosk_configuration;
mod zebra_fota;

pub use android_device_owner::{
    AndroidDeviceOwnerAppAutoUpdatePolicyType, AndroidDeviceOwnerBatteryPluggedMode,
    AndroidDeviceOwnerGlobalProxy, AndroidDeviceOwnerGlobalProxyAutoConfig,
    AndroidDeviceOwnerGlobalProxyDirect, AndroidDeviceOwnerGlobalProxyKind,
    AndroidDeviceOwnerPlayStoreMode, AndroidDeviceOwnerRequiredPasswordType,
    AndroidDeviceOwnerRequiredPasswordUnlock, AndroidDeviceOwnerSystemUpdateFreezePeriod,
    AndroidDeviceOwnerSystemUpdateInstallType, AndroidDeviceOwnerUserFacingMessage,
    AndroidKeyguardFeature,
};
pub use android_device_owner_general_device_configuration::AndroidDeviceOwnerGeneralDeviceConfiguration;
pub use common::{AppListItem, DayOfWeek, KeyValuePair};
pub use device_configuration::{DeviceConfiguration, DeviceConfigurationKind};
pub use device_shell_script::{DeviceShellScript, RunAsAccountType};
pub use entity::Entity;
pub use group_policy_migration_report::{GroupPolicyMigrationReadiness, GroupPolicyMigrationReport};
pub use sites::{
    BaseItem, BaseItemKind, ContentTypeInfo, ItemReference, PageLayoutType, PagePromotionType,
    PublicationFacet, ReactionsFacet, SharepointIds, Site, SiteCollection, SitePage,
};
pub use windows_kiosk::{
    Windows10AppsUpdateRecurrence, WindowsAppStartLayoutTileSize, WindowsEdgeKioskType,
    WindowsKioskActiveDirectoryGroup, WindowsKioskAppBase, WindowsKioskAppConfiguration,
    WindowsKioskAppConfigurationKind, WindowsKioskAppKind, WindowsKioskAppType,
    WindowsKioskAutologon, WindowsKioskAzureAdGroup, WindowsKioskAzureAdUser,
    WindowsKioskDesktopApp, WindowsKioskForceUpdateSchedule, WindowsKioskLocalGroup,
    WindowsKioskLocalUser, WindowsKioskMultipleApps, WindowsKioskProfile,
    WindowsKioskSingleUwpApp, WindowsKioskSingleWin32App, WindowsKioskUser,
    WindowsKioskUserKind, WindowsKioskUwpApp, WindowsKioskVisitor, WindowsKioskWin32App,
};
pub use windows_kiosk_configuration::WindowsKioskConfiguration;
pub use zebra_fota::{
    ZebraFotaDeploymentSettings, ZebraFotaDeploymentState, ZebraFotaDeploymentStatus,
    ZebraFotaNetworkType, ZebraFotaScheduleMode, ZebraFotaUpdateType,
};
