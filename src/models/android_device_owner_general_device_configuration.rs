use crate::error::Result;
use crate::serialization::{JsonParseNode, JsonSerializationWriter, Parsable};

use super::{
    AndroidDeviceOwnerAppAutoUpdatePolicyType, AndroidDeviceOwnerBatteryPluggedMode,
    AndroidDeviceOwnerGlobalProxyKind, AndroidDeviceOwnerPlayStoreMode,
    AndroidDeviceOwnerRequiredPasswordType, AndroidDeviceOwnerRequiredPasswordUnlock,
    AndroidDeviceOwnerSystemUpdateFreezePeriod, AndroidDeviceOwnerSystemUpdateInstallType,
    AndroidDeviceOwnerUserFacingMessage, AndroidKeyguardFeature, AppListItem, DeviceConfiguration,
    additional_data_holder, base_accessors,
};

/// General settings for fully managed and dedicated Android Enterprise devices.
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidDeviceOwnerGeneralDeviceConfiguration {
    base: DeviceConfiguration,
    accounts_block_modification: Option<bool>,
    apps_allow_install_from_unknown_sources: Option<bool>,
    apps_auto_update_policy: Option<AndroidDeviceOwnerAppAutoUpdatePolicyType>,
    camera_blocked: Option<bool>,
    detailed_help_text: Option<AndroidDeviceOwnerUserFacingMessage>,
    device_owner_lock_screen_message: Option<AndroidDeviceOwnerUserFacingMessage>,
    factory_reset_device_administrator_emails: Option<Vec<String>>,
    global_proxy: Option<AndroidDeviceOwnerGlobalProxyKind>,
    kiosk_mode_apps: Option<Vec<AppListItem>>,
    kiosk_mode_exit_code: Option<String>,
    kiosk_mode_grid_height: Option<i32>,
    kiosk_mode_grid_width: Option<i32>,
    kiosk_mode_wifi_allowed_ssids: Option<Vec<String>>,
    password_block_keyguard: Option<bool>,
    password_block_keyguard_features: Option<Vec<AndroidKeyguardFeature>>,
    password_expiration_days: Option<i32>,
    password_minimum_length: Option<i32>,
    password_required_type: Option<AndroidDeviceOwnerRequiredPasswordType>,
    password_require_unlock: Option<AndroidDeviceOwnerRequiredPasswordUnlock>,
    play_store_mode: Option<AndroidDeviceOwnerPlayStoreMode>,
    screen_capture_blocked: Option<bool>,
    short_help_text: Option<AndroidDeviceOwnerUserFacingMessage>,
    stay_on_modes: Option<Vec<AndroidDeviceOwnerBatteryPluggedMode>>,
    system_update_freeze_periods: Option<Vec<AndroidDeviceOwnerSystemUpdateFreezePeriod>>,
    system_update_install_type: Option<AndroidDeviceOwnerSystemUpdateInstallType>,
    system_update_window_end_minutes_after_midnight: Option<i32>,
    system_update_window_start_minutes_after_midnight: Option<i32>,
    vpn_always_on_package_identifier: Option<String>,
    work_profile_password_required_type: Option<AndroidDeviceOwnerRequiredPasswordType>,
}

impl AndroidDeviceOwnerGeneralDeviceConfiguration {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.androidDeviceOwnerGeneralDeviceConfiguration";

    pub fn new() -> Self {
        let mut base = DeviceConfiguration::new();
        base.base_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            accounts_block_modification: None,
            apps_allow_install_from_unknown_sources: None,
            apps_auto_update_policy: None,
            camera_blocked: None,
            detailed_help_text: None,
            device_owner_lock_screen_message: None,
            factory_reset_device_administrator_emails: None,
            global_proxy: None,
            kiosk_mode_apps: None,
            kiosk_mode_exit_code: None,
            kiosk_mode_grid_height: None,
            kiosk_mode_grid_width: None,
            kiosk_mode_wifi_allowed_ssids: None,
            password_block_keyguard: None,
            password_block_keyguard_features: None,
            password_expiration_days: None,
            password_minimum_length: None,
            password_required_type: None,
            password_require_unlock: None,
            play_store_mode: None,
            screen_capture_blocked: None,
            short_help_text: None,
            stay_on_modes: None,
            system_update_freeze_periods: None,
            system_update_install_type: None,
            system_update_window_end_minutes_after_midnight: None,
            system_update_window_start_minutes_after_midnight: None,
            vpn_always_on_package_identifier: None,
            work_profile_password_required_type: None,
        }
    }

    pub fn accounts_block_modification(&self) -> Option<bool> {
        self.accounts_block_modification
    }

    pub fn set_accounts_block_modification(&mut self, value: Option<bool>) {
        self.accounts_block_modification = value;
    }

    pub fn apps_allow_install_from_unknown_sources(&self) -> Option<bool> {
        self.apps_allow_install_from_unknown_sources
    }

    pub fn set_apps_allow_install_from_unknown_sources(&mut self, value: Option<bool>) {
        self.apps_allow_install_from_unknown_sources = value;
    }

    pub fn apps_auto_update_policy(&self) -> Option<AndroidDeviceOwnerAppAutoUpdatePolicyType> {
        self.apps_auto_update_policy
    }

    pub fn set_apps_auto_update_policy(
        &mut self,
        value: Option<AndroidDeviceOwnerAppAutoUpdatePolicyType>,
    ) {
        self.apps_auto_update_policy = value;
    }

    pub fn camera_blocked(&self) -> Option<bool> {
        self.camera_blocked
    }

    pub fn set_camera_blocked(&mut self, value: Option<bool>) {
        self.camera_blocked = value;
    }

    /// Shown on the "contact your admin" settings page.
    pub fn detailed_help_text(&self) -> Option<&AndroidDeviceOwnerUserFacingMessage> {
        self.detailed_help_text.as_ref()
    }

    pub fn set_detailed_help_text(&mut self, value: Option<AndroidDeviceOwnerUserFacingMessage>) {
        self.detailed_help_text = value;
    }

    pub fn device_owner_lock_screen_message(
        &self,
    ) -> Option<&AndroidDeviceOwnerUserFacingMessage> {
        self.device_owner_lock_screen_message.as_ref()
    }

    pub fn set_device_owner_lock_screen_message(
        &mut self,
        value: Option<AndroidDeviceOwnerUserFacingMessage>,
    ) {
        self.device_owner_lock_screen_message = value;
    }

    pub fn factory_reset_device_administrator_emails(&self) -> Option<&[String]> {
        self.factory_reset_device_administrator_emails.as_deref()
    }

    pub fn set_factory_reset_device_administrator_emails(&mut self, value: Option<Vec<String>>) {
        self.factory_reset_device_administrator_emails = value;
    }

    pub fn global_proxy(&self) -> Option<&AndroidDeviceOwnerGlobalProxyKind> {
        self.global_proxy.as_ref()
    }

    pub fn set_global_proxy(&mut self, value: Option<AndroidDeviceOwnerGlobalProxyKind>) {
        self.global_proxy = value;
    }

    /// Apps available in kiosk mode.
    pub fn kiosk_mode_apps(&self) -> Option<&[AppListItem]> {
        self.kiosk_mode_apps.as_deref()
    }

    pub fn set_kiosk_mode_apps(&mut self, value: Option<Vec<AppListItem>>) {
        self.kiosk_mode_apps = value;
    }

    pub fn kiosk_mode_exit_code(&self) -> Option<&str> {
        self.kiosk_mode_exit_code.as_deref()
    }

    pub fn set_kiosk_mode_exit_code(&mut self, value: Option<String>) {
        self.kiosk_mode_exit_code = value;
    }

    pub fn kiosk_mode_grid_height(&self) -> Option<i32> {
        self.kiosk_mode_grid_height
    }

    pub fn set_kiosk_mode_grid_height(&mut self, value: Option<i32>) {
        self.kiosk_mode_grid_height = value;
    }

    pub fn kiosk_mode_grid_width(&self) -> Option<i32> {
        self.kiosk_mode_grid_width
    }

    pub fn set_kiosk_mode_grid_width(&mut self, value: Option<i32>) {
        self.kiosk_mode_grid_width = value;
    }

    pub fn kiosk_mode_wifi_allowed_ssids(&self) -> Option<&[String]> {
        self.kiosk_mode_wifi_allowed_ssids.as_deref()
    }

    pub fn set_kiosk_mode_wifi_allowed_ssids(&mut self, value: Option<Vec<String>>) {
        self.kiosk_mode_wifi_allowed_ssids = value;
    }

    pub fn password_block_keyguard(&self) -> Option<bool> {
        self.password_block_keyguard
    }

    pub fn set_password_block_keyguard(&mut self, value: Option<bool>) {
        self.password_block_keyguard = value;
    }

    /// Keyguard features disabled on the lock screen.
    pub fn password_block_keyguard_features(&self) -> Option<&[AndroidKeyguardFeature]> {
        self.password_block_keyguard_features.as_deref()
    }

    pub fn set_password_block_keyguard_features(
        &mut self,
        value: Option<Vec<AndroidKeyguardFeature>>,
    ) {
        self.password_block_keyguard_features = value;
    }

    pub fn password_expiration_days(&self) -> Option<i32> {
        self.password_expiration_days
    }

    pub fn set_password_expiration_days(&mut self, value: Option<i32>) {
        self.password_expiration_days = value;
    }

    pub fn password_minimum_length(&self) -> Option<i32> {
        self.password_minimum_length
    }

    pub fn set_password_minimum_length(&mut self, value: Option<i32>) {
        self.password_minimum_length = value;
    }

    pub fn password_required_type(&self) -> Option<AndroidDeviceOwnerRequiredPasswordType> {
        self.password_required_type
    }

    pub fn set_password_required_type(
        &mut self,
        value: Option<AndroidDeviceOwnerRequiredPasswordType>,
    ) {
        self.password_required_type = value;
    }

    pub fn password_require_unlock(&self) -> Option<AndroidDeviceOwnerRequiredPasswordUnlock> {
        self.password_require_unlock
    }

    pub fn set_password_require_unlock(
        &mut self,
        value: Option<AndroidDeviceOwnerRequiredPasswordUnlock>,
    ) {
        self.password_require_unlock = value;
    }

    pub fn play_store_mode(&self) -> Option<AndroidDeviceOwnerPlayStoreMode> {
        self.play_store_mode
    }

    pub fn set_play_store_mode(&mut self, value: Option<AndroidDeviceOwnerPlayStoreMode>) {
        self.play_store_mode = value;
    }

    pub fn screen_capture_blocked(&self) -> Option<bool> {
        self.screen_capture_blocked
    }

    pub fn set_screen_capture_blocked(&mut self, value: Option<bool>) {
        self.screen_capture_blocked = value;
    }

    pub fn short_help_text(&self) -> Option<&AndroidDeviceOwnerUserFacingMessage> {
        self.short_help_text.as_ref()
    }

    pub fn set_short_help_text(&mut self, value: Option<AndroidDeviceOwnerUserFacingMessage>) {
        self.short_help_text = value;
    }

    /// Power sources that keep the screen on.
    pub fn stay_on_modes(&self) -> Option<&[AndroidDeviceOwnerBatteryPluggedMode]> {
        self.stay_on_modes.as_deref()
    }

    pub fn set_stay_on_modes(&mut self, value: Option<Vec<AndroidDeviceOwnerBatteryPluggedMode>>) {
        self.stay_on_modes = value;
    }

    pub fn system_update_freeze_periods(
        &self,
    ) -> Option<&[AndroidDeviceOwnerSystemUpdateFreezePeriod]> {
        self.system_update_freeze_periods.as_deref()
    }

    pub fn set_system_update_freeze_periods(
        &mut self,
        value: Option<Vec<AndroidDeviceOwnerSystemUpdateFreezePeriod>>,
    ) {
        self.system_update_freeze_periods = value;
    }

    pub fn system_update_install_type(&self) -> Option<AndroidDeviceOwnerSystemUpdateInstallType> {
        self.system_update_install_type
    }

    pub fn set_system_update_install_type(
        &mut self,
        value: Option<AndroidDeviceOwnerSystemUpdateInstallType>,
    ) {
        self.system_update_install_type = value;
    }

    pub fn system_update_window_end_minutes_after_midnight(&self) -> Option<i32> {
        self.system_update_window_end_minutes_after_midnight
    }

    pub fn set_system_update_window_end_minutes_after_midnight(&mut self, value: Option<i32>) {
        self.system_update_window_end_minutes_after_midnight = value;
    }

    pub fn system_update_window_start_minutes_after_midnight(&self) -> Option<i32> {
        self.system_update_window_start_minutes_after_midnight
    }

    pub fn set_system_update_window_start_minutes_after_midnight(&mut self, value: Option<i32>) {
        self.system_update_window_start_minutes_after_midnight = value;
    }

    pub fn vpn_always_on_package_identifier(&self) -> Option<&str> {
        self.vpn_always_on_package_identifier.as_deref()
    }

    pub fn set_vpn_always_on_package_identifier(&mut self, value: Option<String>) {
        self.vpn_always_on_package_identifier = value;
    }

    pub fn work_profile_password_required_type(
        &self,
    ) -> Option<AndroidDeviceOwnerRequiredPasswordType> {
        self.work_profile_password_required_type
    }

    pub fn set_work_profile_password_required_type(
        &mut self,
        value: Option<AndroidDeviceOwnerRequiredPasswordType>,
    ) {
        self.work_profile_password_required_type = value;
    }
}

impl Default for AndroidDeviceOwnerGeneralDeviceConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(AndroidDeviceOwnerGeneralDeviceConfiguration => DeviceConfiguration);
additional_data_holder!(AndroidDeviceOwnerGeneralDeviceConfiguration => base);

impl Parsable for AndroidDeviceOwnerGeneralDeviceConfiguration {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "accountsBlockModification" => {
                self.accounts_block_modification = node.get_bool_value()?
            }
            "appsAllowInstallFromUnknownSources" => {
                self.apps_allow_install_from_unknown_sources = node.get_bool_value()?
            }
            "appsAutoUpdatePolicy" => self.apps_auto_update_policy = node.get_enum_value()?,
            "cameraBlocked" => self.camera_blocked = node.get_bool_value()?,
            "detailedHelpText" => self.detailed_help_text = node.get_object_value()?,
            "deviceOwnerLockScreenMessage" => {
                self.device_owner_lock_screen_message = node.get_object_value()?
            }
            "factoryResetDeviceAdministratorEmails" => {
                self.factory_reset_device_administrator_emails =
                    node.get_collection_of_primitive_values()?
            }
            "globalProxy" => self.global_proxy = node.get_object_value()?,
            "kioskModeApps" => self.kiosk_mode_apps = node.get_collection_of_object_values()?,
            "kioskModeExitCode" => self.kiosk_mode_exit_code = node.get_string_value()?,
            "kioskModeGridHeight" => self.kiosk_mode_grid_height = node.get_i32_value()?,
            "kioskModeGridWidth" => self.kiosk_mode_grid_width = node.get_i32_value()?,
            "kioskModeWifiAllowedSsids" => {
                self.kiosk_mode_wifi_allowed_ssids = node.get_collection_of_primitive_values()?
            }
            "passwordBlockKeyguard" => self.password_block_keyguard = node.get_bool_value()?,
            "passwordBlockKeyguardFeatures" => {
                self.password_block_keyguard_features = node.get_collection_of_enum_values()?
            }
            "passwordExpirationDays" => self.password_expiration_days = node.get_i32_value()?,
            "passwordMinimumLength" => self.password_minimum_length = node.get_i32_value()?,
            "passwordRequiredType" => self.password_required_type = node.get_enum_value()?,
            "passwordRequireUnlock" => self.password_require_unlock = node.get_enum_value()?,
            "playStoreMode" => self.play_store_mode = node.get_enum_value()?,
            "screenCaptureBlocked" => self.screen_capture_blocked = node.get_bool_value()?,
            "shortHelpText" => self.short_help_text = node.get_object_value()?,
            "stayOnModes" => self.stay_on_modes = node.get_collection_of_enum_values()?,
            "systemUpdateFreezePeriods" => {
                self.system_update_freeze_periods = node.get_collection_of_object_values()?
            }
            "systemUpdateInstallType" => {
                self.system_update_install_type = node.get_enum_value()?
            }
            "systemUpdateWindowEndMinutesAfterMidnight" => {
                self.system_update_window_end_minutes_after_midnight = node.get_i32_value()?
            }
            "systemUpdateWindowStartMinutesAfterMidnight" => {
                self.system_update_window_start_minutes_after_midnight = node.get_i32_value()?
            }
            "vpnAlwaysOnPackageIdentifier" => {
                self.vpn_always_on_package_identifier = node.get_string_value()?
            }
            "workProfilePasswordRequiredType" => {
                self.work_profile_password_required_type = node.get_enum_value()?
            }
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_bool_value("accountsBlockModification", self.accounts_block_modification)?;
        writer.write_bool_value(
            "appsAllowInstallFromUnknownSources",
            self.apps_allow_install_from_unknown_sources,
        )?;
        writer.write_enum_value("appsAutoUpdatePolicy", self.apps_auto_update_policy)?;
        writer.write_bool_value("cameraBlocked", self.camera_blocked)?;
        writer.write_object_value("detailedHelpText", self.detailed_help_text.as_ref())?;
        writer.write_object_value(
            "deviceOwnerLockScreenMessage",
            self.device_owner_lock_screen_message.as_ref(),
        )?;
        writer.write_collection_of_primitive_values(
            "factoryResetDeviceAdministratorEmails",
            self.factory_reset_device_administrator_emails.as_deref(),
        )?;
        writer.write_object_value("globalProxy", self.global_proxy.as_ref())?;
        writer.write_collection_of_object_values("kioskModeApps", self.kiosk_mode_apps.as_deref())?;
        writer.write_string_value("kioskModeExitCode", self.kiosk_mode_exit_code.as_deref())?;
        writer.write_i32_value("kioskModeGridHeight", self.kiosk_mode_grid_height)?;
        writer.write_i32_value("kioskModeGridWidth", self.kiosk_mode_grid_width)?;
        writer.write_collection_of_primitive_values(
            "kioskModeWifiAllowedSsids",
            self.kiosk_mode_wifi_allowed_ssids.as_deref(),
        )?;
        writer.write_bool_value("passwordBlockKeyguard", self.password_block_keyguard)?;
        writer.write_collection_of_enum_values(
            "passwordBlockKeyguardFeatures",
            self.password_block_keyguard_features.as_deref(),
        )?;
        writer.write_i32_value("passwordExpirationDays", self.password_expiration_days)?;
        writer.write_i32_value("passwordMinimumLength", self.password_minimum_length)?;
        writer.write_enum_value("passwordRequiredType", self.password_required_type)?;
        writer.write_enum_value("passwordRequireUnlock", self.password_require_unlock)?;
        writer.write_enum_value("playStoreMode", self.play_store_mode)?;
        writer.write_bool_value("screenCaptureBlocked", self.screen_capture_blocked)?;
        writer.write_object_value("shortHelpText", self.short_help_text.as_ref())?;
        writer.write_collection_of_enum_values("stayOnModes", self.stay_on_modes.as_deref())?;
        writer.write_collection_of_object_values(
            "systemUpdateFreezePeriods",
            self.system_update_freeze_periods.as_deref(),
        )?;
        writer.write_enum_value("systemUpdateInstallType", self.system_update_install_type)?;
        writer.write_i32_value(
            "systemUpdateWindowEndMinutesAfterMidnight",
            self.system_update_window_end_minutes_after_midnight,
        )?;
        writer.write_i32_value(
            "systemUpdateWindowStartMinutesAfterMidnight",
            self.system_update_window_start_minutes_after_midnight,
        )?;
        writer.write_string_value(
            "vpnAlwaysOnPackageIdentifier",
            self.vpn_always_on_package_identifier.as_deref(),
        )?;
        writer.write_enum_value(
            "workProfilePasswordRequiredType",
            self.work_profile_password_required_type,
        )?;
        Ok(())
    }
}
