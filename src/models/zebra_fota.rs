//! Zebra firmware-over-the-air deployments.

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::enum_codec::graph_enum;
use crate::error::Result;
use crate::serialization::{
    AdditionalData, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY, Parsable,
};

use super::additional_data_holder;

graph_enum! {
    /// Network a device may use to download firmware.
    pub enum ZebraFotaNetworkType: "zebraFotaNetworkType" {
        Any => "any",
        Wifi => "wifi",
        Cellular => "cellular",
        WifiAndCellular => "wifiAndCellular",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ZebraFotaScheduleMode: "zebraFotaScheduleMode" {
        InstallNow => "installNow",
        Scheduled => "scheduled",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ZebraFotaUpdateType: "zebraFotaUpdateType" {
        Custom => "custom",
        Latest => "latest",
        AutoUpdate => "autoUpdate",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Lifecycle of a deployment as reported by Zebra.
    pub enum ZebraFotaDeploymentState: "zebraFotaDeploymentState" {
        PendingCreation => "pendingCreation",
        CreateFailed => "createFailed",
        Created => "created",
        InProgress => "inProgress",
        Completed => "completed",
        PendingCancel => "pendingCancel",
        Canceled => "canceled",
        UnknownFutureValue => "unknownFutureValue",
    }
}

/// Target firmware and rollout rules for a deployment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZebraFotaDeploymentSettings {
    additional_data: AdditionalData,
    battery_rule_minimum_battery_level_percentage: Option<i32>,
    battery_rule_require_charger: Option<bool>,
    device_model: Option<String>,
    download_rule_network_type: Option<ZebraFotaNetworkType>,
    download_rule_start_date_time: Option<DateTime<FixedOffset>>,
    firmware_target_artifact_description: Option<String>,
    firmware_target_board_support_package_version: Option<String>,
    firmware_target_os_version: Option<String>,
    firmware_target_patch: Option<String>,
    install_rule_start_date_time: Option<DateTime<FixedOffset>>,
    install_rule_window_end_time: Option<NaiveTime>,
    install_rule_window_start_time: Option<NaiveTime>,
    odata_type: Option<String>,
    schedule_duration_in_days: Option<i32>,
    schedule_mode: Option<ZebraFotaScheduleMode>,
    time_zone_offset_in_minutes: Option<i32>,
    update_type: Option<ZebraFotaUpdateType>,
}

impl ZebraFotaDeploymentSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn battery_rule_minimum_battery_level_percentage(&self) -> Option<i32> {
        self.battery_rule_minimum_battery_level_percentage
    }

    pub fn set_battery_rule_minimum_battery_level_percentage(&mut self, value: Option<i32>) {
        self.battery_rule_minimum_battery_level_percentage = value;
    }

    pub fn battery_rule_require_charger(&self) -> Option<bool> {
        self.battery_rule_require_charger
    }

    pub fn set_battery_rule_require_charger(&mut self, value: Option<bool>) {
        self.battery_rule_require_charger = value;
    }

    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    pub fn set_device_model(&mut self, value: Option<String>) {
        self.device_model = value;
    }

    pub fn download_rule_network_type(&self) -> Option<ZebraFotaNetworkType> {
        self.download_rule_network_type
    }

    pub fn set_download_rule_network_type(&mut self, value: Option<ZebraFotaNetworkType>) {
        self.download_rule_network_type = value;
    }

    pub fn download_rule_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.download_rule_start_date_time
    }

    pub fn set_download_rule_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.download_rule_start_date_time = value;
    }

    pub fn firmware_target_artifact_description(&self) -> Option<&str> {
        self.firmware_target_artifact_description.as_deref()
    }

    pub fn set_firmware_target_artifact_description(&mut self, value: Option<String>) {
        self.firmware_target_artifact_description = value;
    }

    pub fn firmware_target_board_support_package_version(&self) -> Option<&str> {
        self.firmware_target_board_support_package_version.as_deref()
    }

    pub fn set_firmware_target_board_support_package_version(&mut self, value: Option<String>) {
        self.firmware_target_board_support_package_version = value;
    }

    pub fn firmware_target_os_version(&self) -> Option<&str> {
        self.firmware_target_os_version.as_deref()
    }

    pub fn set_firmware_target_os_version(&mut self, value: Option<String>) {
        self.firmware_target_os_version = value;
    }

    pub fn firmware_target_patch(&self) -> Option<&str> {
        self.firmware_target_patch.as_deref()
    }

    pub fn set_firmware_target_patch(&mut self, value: Option<String>) {
        self.firmware_target_patch = value;
    }

    pub fn install_rule_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.install_rule_start_date_time
    }

    pub fn set_install_rule_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.install_rule_start_date_time = value;
    }

    /// Local end of the daily install window.
    pub fn install_rule_window_end_time(&self) -> Option<NaiveTime> {
        self.install_rule_window_end_time
    }

    pub fn set_install_rule_window_end_time(&mut self, value: Option<NaiveTime>) {
        self.install_rule_window_end_time = value;
    }

    /// Local start of the daily install window.
    pub fn install_rule_window_start_time(&self) -> Option<NaiveTime> {
        self.install_rule_window_start_time
    }

    pub fn set_install_rule_window_start_time(&mut self, value: Option<NaiveTime>) {
        self.install_rule_window_start_time = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn schedule_duration_in_days(&self) -> Option<i32> {
        self.schedule_duration_in_days
    }

    pub fn set_schedule_duration_in_days(&mut self, value: Option<i32>) {
        self.schedule_duration_in_days = value;
    }

    pub fn schedule_mode(&self) -> Option<ZebraFotaScheduleMode> {
        self.schedule_mode
    }

    pub fn set_schedule_mode(&mut self, value: Option<ZebraFotaScheduleMode>) {
        self.schedule_mode = value;
    }

    pub fn time_zone_offset_in_minutes(&self) -> Option<i32> {
        self.time_zone_offset_in_minutes
    }

    pub fn set_time_zone_offset_in_minutes(&mut self, value: Option<i32>) {
        self.time_zone_offset_in_minutes = value;
    }

    pub fn update_type(&self) -> Option<ZebraFotaUpdateType> {
        self.update_type
    }

    pub fn set_update_type(&mut self, value: Option<ZebraFotaUpdateType>) {
        self.update_type = value;
    }
}

additional_data_holder!(ZebraFotaDeploymentSettings);

impl Parsable for ZebraFotaDeploymentSettings {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "batteryRuleMinimumBatteryLevelPercentage" => {
                self.battery_rule_minimum_battery_level_percentage = node.get_i32_value()?
            }
            "batteryRuleRequireCharger" => {
                self.battery_rule_require_charger = node.get_bool_value()?
            }
            "deviceModel" => self.device_model = node.get_string_value()?,
            "downloadRuleNetworkType" => {
                self.download_rule_network_type = node.get_enum_value()?
            }
            "downloadRuleStartDateTime" => {
                self.download_rule_start_date_time = node.get_time_value()?
            }
            "firmwareTargetArtifactDescription" => {
                self.firmware_target_artifact_description = node.get_string_value()?
            }
            "firmwareTargetBoardSupportPackageVersion" => {
                self.firmware_target_board_support_package_version = node.get_string_value()?
            }
            "firmwareTargetOsVersion" => {
                self.firmware_target_os_version = node.get_string_value()?
            }
            "firmwareTargetPatch" => self.firmware_target_patch = node.get_string_value()?,
            "installRuleStartDateTime" => {
                self.install_rule_start_date_time = node.get_time_value()?
            }
            "installRuleWindowEndTime" => {
                self.install_rule_window_end_time = node.get_time_only_value()?
            }
            "installRuleWindowStartTime" => {
                self.install_rule_window_start_time = node.get_time_only_value()?
            }
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "scheduleDurationInDays" => self.schedule_duration_in_days = node.get_i32_value()?,
            "scheduleMode" => self.schedule_mode = node.get_enum_value()?,
            "timeZoneOffsetInMinutes" => {
                self.time_zone_offset_in_minutes = node.get_i32_value()?
            }
            "updateType" => self.update_type = node.get_enum_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i32_value(
            "batteryRuleMinimumBatteryLevelPercentage",
            self.battery_rule_minimum_battery_level_percentage,
        )?;
        writer.write_bool_value("batteryRuleRequireCharger", self.battery_rule_require_charger)?;
        writer.write_string_value("deviceModel", self.device_model.as_deref())?;
        writer.write_enum_value("downloadRuleNetworkType", self.download_rule_network_type)?;
        writer.write_time_value(
            "downloadRuleStartDateTime",
            self.download_rule_start_date_time.as_ref(),
        )?;
        writer.write_string_value(
            "firmwareTargetArtifactDescription",
            self.firmware_target_artifact_description.as_deref(),
        )?;
        writer.write_string_value(
            "firmwareTargetBoardSupportPackageVersion",
            self.firmware_target_board_support_package_version.as_deref(),
        )?;
        writer.write_string_value(
            "firmwareTargetOsVersion",
            self.firmware_target_os_version.as_deref(),
        )?;
        writer.write_string_value("firmwareTargetPatch", self.firmware_target_patch.as_deref())?;
        writer.write_time_value(
            "installRuleStartDateTime",
            self.install_rule_start_date_time.as_ref(),
        )?;
        writer.write_time_only_value("installRuleWindowEndTime", self.install_rule_window_end_time)?;
        writer.write_time_only_value(
            "installRuleWindowStartTime",
            self.install_rule_window_start_time,
        )?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("scheduleDurationInDays", self.schedule_duration_in_days)?;
        writer.write_enum_value("scheduleMode", self.schedule_mode)?;
        writer.write_i32_value("timeZoneOffsetInMinutes", self.time_zone_offset_in_minutes)?;
        writer.write_enum_value("updateType", self.update_type)?;
        Ok(())
    }
}

/// Progress counters for a deployment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZebraFotaDeploymentStatus {
    additional_data: AdditionalData,
    cancel_requested: Option<bool>,
    complete_or_canceled_date_time: Option<DateTime<FixedOffset>>,
    last_updated_date_time: Option<DateTime<FixedOffset>>,
    odata_type: Option<String>,
    state: Option<ZebraFotaDeploymentState>,
    total_awaiting_install: Option<i32>,
    total_canceled: Option<i32>,
    total_created: Option<i32>,
    total_devices: Option<i32>,
    total_downloading: Option<i32>,
    total_failed_download: Option<i32>,
    total_failed_install: Option<i32>,
    total_scheduled: Option<i32>,
    total_succeeded_install: Option<i32>,
    total_unknown: Option<i32>,
}

impl ZebraFotaDeploymentStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_requested(&self) -> Option<bool> {
        self.cancel_requested
    }

    pub fn set_cancel_requested(&mut self, value: Option<bool>) {
        self.cancel_requested = value;
    }

    pub fn complete_or_canceled_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.complete_or_canceled_date_time
    }

    pub fn set_complete_or_canceled_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.complete_or_canceled_date_time = value;
    }

    pub fn last_updated_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_updated_date_time
    }

    pub fn set_last_updated_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_updated_date_time = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn state(&self) -> Option<ZebraFotaDeploymentState> {
        self.state
    }

    pub fn set_state(&mut self, value: Option<ZebraFotaDeploymentState>) {
        self.state = value;
    }

    pub fn total_awaiting_install(&self) -> Option<i32> {
        self.total_awaiting_install
    }

    pub fn set_total_awaiting_install(&mut self, value: Option<i32>) {
        self.total_awaiting_install = value;
    }

    pub fn total_canceled(&self) -> Option<i32> {
        self.total_canceled
    }

    pub fn set_total_canceled(&mut self, value: Option<i32>) {
        self.total_canceled = value;
    }

    pub fn total_created(&self) -> Option<i32> {
        self.total_created
    }

    pub fn set_total_created(&mut self, value: Option<i32>) {
        self.total_created = value;
    }

    pub fn total_devices(&self) -> Option<i32> {
        self.total_devices
    }

    pub fn set_total_devices(&mut self, value: Option<i32>) {
        self.total_devices = value;
    }

    pub fn total_downloading(&self) -> Option<i32> {
        self.total_downloading
    }

    pub fn set_total_downloading(&mut self, value: Option<i32>) {
        self.total_downloading = value;
    }

    pub fn total_failed_download(&self) -> Option<i32> {
        self.total_failed_download
    }

    pub fn set_total_failed_download(&mut self, value: Option<i32>) {
        self.total_failed_download = value;
    }

    pub fn total_failed_install(&self) -> Option<i32> {
        self.total_failed_install
    }

    pub fn set_total_failed_install(&mut self, value: Option<i32>) {
        self.total_failed_install = value;
    }

    pub fn total_scheduled(&self) -> Option<i32> {
        self.total_scheduled
    }

    pub fn set_total_scheduled(&mut self, value: Option<i32>) {
        self.total_scheduled = value;
    }

    pub fn total_succeeded_install(&self) -> Option<i32> {
        self.total_succeeded_install
    }

    pub fn set_total_succeeded_install(&mut self, value: Option<i32>) {
        self.total_succeeded_install = value;
    }

    pub fn total_unknown(&self) -> Option<i32> {
        self.total_unknown
    }

    pub fn set_total_unknown(&mut self, value: Option<i32>) {
        self.total_unknown = value;
    }
}

additional_data_holder!(ZebraFotaDeploymentStatus);

impl Parsable for ZebraFotaDeploymentStatus {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "cancelRequested" => self.cancel_requested = node.get_bool_value()?,
            "completeOrCanceledDateTime" => {
                self.complete_or_canceled_date_time = node.get_time_value()?
            }
            "lastUpdatedDateTime" => self.last_updated_date_time = node.get_time_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "state" => self.state = node.get_enum_value()?,
            "totalAwaitingInstall" => self.total_awaiting_install = node.get_i32_value()?,
            "totalCanceled" => self.total_canceled = node.get_i32_value()?,
            "totalCreated" => self.total_created = node.get_i32_value()?,
            "totalDevices" => self.total_devices = node.get_i32_value()?,
            "totalDownloading" => self.total_downloading = node.get_i32_value()?,
            "totalFailedDownload" => self.total_failed_download = node.get_i32_value()?,
            "totalFailedInstall" => self.total_failed_install = node.get_i32_value()?,
            "totalScheduled" => self.total_scheduled = node.get_i32_value()?,
            "totalSucceededInstall" => self.total_succeeded_install = node.get_i32_value()?,
            "totalUnknown" => self.total_unknown = node.get_i32_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_bool_value("cancelRequested", self.cancel_requested)?;
        writer.write_time_value(
            "completeOrCanceledDateTime",
            self.complete_or_canceled_date_time.as_ref(),
        )?;
        writer.write_time_value("lastUpdatedDateTime", self.last_updated_date_time.as_ref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_enum_value("state", self.state)?;
        writer.write_i32_value("totalAwaitingInstall", self.total_awaiting_install)?;
        writer.write_i32_value("totalCanceled", self.total_canceled)?;
        writer.write_i32_value("totalCreated", self.total_created)?;
        writer.write_i32_value("totalDevices", self.total_devices)?;
        writer.write_i32_value("totalDownloading", self.total_downloading)?;
        writer.write_i32_value("totalFailedDownload", self.total_failed_download)?;
        writer.write_i32_value("totalFailedInstall", self.total_failed_install)?;
        writer.write_i32_value("totalScheduled", self.total_scheduled)?;
        writer.write_i32_value("totalSucceededInstall", self.total_succeeded_install)?;
        writer.write_i32_value("totalUnknown", self.total_unknown)?;
        Ok(())
    }
}
