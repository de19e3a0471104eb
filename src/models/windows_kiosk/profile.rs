use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{DayOfWeek, additional_data_holder};
use crate::serialization::{
    AdditionalData, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY, Parsable,
};

use super::{Windows10AppsUpdateRecurrence, WindowsKioskAppConfigurationKind, WindowsKioskUserKind};

/// One kiosk profile: what runs, and for whom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowsKioskProfile {
    additional_data: AdditionalData,
    app_configuration: Option<WindowsKioskAppConfigurationKind>,
    odata_type: Option<String>,
    profile_id: Option<String>,
    profile_name: Option<String>,
    user_accounts_configuration: Option<Vec<WindowsKioskUserKind>>,
}

impl WindowsKioskProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_configuration(&self) -> Option<&WindowsKioskAppConfigurationKind> {
        self.app_configuration.as_ref()
    }

    pub fn set_app_configuration(&mut self, value: Option<WindowsKioskAppConfigurationKind>) {
        self.app_configuration = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref()
    }

    pub fn set_profile_id(&mut self, value: Option<String>) {
        self.profile_id = value;
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    pub fn set_profile_name(&mut self, value: Option<String>) {
        self.profile_name = value;
    }

    /// Accounts the profile is assigned to.
    pub fn user_accounts_configuration(&self) -> Option<&[WindowsKioskUserKind]> {
        self.user_accounts_configuration.as_deref()
    }

    pub fn set_user_accounts_configuration(&mut self, value: Option<Vec<WindowsKioskUserKind>>) {
        self.user_accounts_configuration = value;
    }
}

additional_data_holder!(WindowsKioskProfile);

impl Parsable for WindowsKioskProfile {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "appConfiguration" => self.app_configuration = node.get_object_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "profileId" => self.profile_id = node.get_string_value()?,
            "profileName" => self.profile_name = node.get_string_value()?,
            "userAccountsConfiguration" => {
                self.user_accounts_configuration = node.get_collection_of_object_values()?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_object_value("appConfiguration", self.app_configuration.as_ref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("profileId", self.profile_id.as_deref())?;
        writer.write_string_value("profileName", self.profile_name.as_deref())?;
        writer.write_collection_of_object_values(
            "userAccountsConfiguration",
            self.user_accounts_configuration.as_deref(),
        )?;
        Ok(())
    }
}

/// When kiosk devices are forced to restart for app updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowsKioskForceUpdateSchedule {
    additional_data: AdditionalData,
    dayof_month: Option<i32>,
    dayof_week: Option<DayOfWeek>,
    odata_type: Option<String>,
    recurrence: Option<Windows10AppsUpdateRecurrence>,
    run_immediately_if_after_start_date_time: Option<bool>,
    start_date_time: Option<DateTime<FixedOffset>>,
}

impl WindowsKioskForceUpdateSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day of the month for monthly recurrence.
    pub fn dayof_month(&self) -> Option<i32> {
        self.dayof_month
    }

    pub fn set_dayof_month(&mut self, value: Option<i32>) {
        self.dayof_month = value;
    }

    pub fn dayof_week(&self) -> Option<DayOfWeek> {
        self.dayof_week
    }

    pub fn set_dayof_week(&mut self, value: Option<DayOfWeek>) {
        self.dayof_week = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn recurrence(&self) -> Option<Windows10AppsUpdateRecurrence> {
        self.recurrence
    }

    pub fn set_recurrence(&mut self, value: Option<Windows10AppsUpdateRecurrence>) {
        self.recurrence = value;
    }

    pub fn run_immediately_if_after_start_date_time(&self) -> Option<bool> {
        self.run_immediately_if_after_start_date_time
    }

    pub fn set_run_immediately_if_after_start_date_time(&mut self, value: Option<bool>) {
        self.run_immediately_if_after_start_date_time = value;
    }

    pub fn start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start_date_time
    }

    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.start_date_time = value;
    }
}

additional_data_holder!(WindowsKioskForceUpdateSchedule);

impl Parsable for WindowsKioskForceUpdateSchedule {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "dayofMonth" => self.dayof_month = node.get_i32_value()?,
            "dayofWeek" => self.dayof_week = node.get_enum_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "recurrence" => self.recurrence = node.get_enum_value()?,
            "runImmediatelyIfAfterStartDateTime" => {
                self.run_immediately_if_after_start_date_time = node.get_bool_value()?
            }
            "startDateTime" => self.start_date_time = node.get_time_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i32_value("dayofMonth", self.dayof_month)?;
        writer.write_enum_value("dayofWeek", self.dayof_week)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_enum_value("recurrence", self.recurrence)?;
        writer.write_bool_value(
            "runImmediatelyIfAfterStartDateTime",
            self.run_immediately_if_after_start_date_time,
        )?;
        writer.write_time_value("startDateTime", self.start_date_time.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn schedule_with_offset_timestamp() {
        let input = json!({
            "dayofWeek": "tuesday",
            "recurrence": "weekly",
            "runImmediatelyIfAfterStartDateTime": false,
            "startDateTime": "2024-03-05T02:00:00+01:00",
        });
        let schedule: WindowsKioskForceUpdateSchedule = from_json_value(&input).unwrap();
        assert_eq!(schedule.dayof_week(), Some(DayOfWeek::Tuesday));
        assert_eq!(schedule.recurrence(), Some(Windows10AppsUpdateRecurrence::Weekly));
        assert_eq!(
            schedule.start_date_time().map(|t| t.offset().local_minus_utc()),
            Some(3600)
        );
        assert_eq!(to_json_value(&schedule).unwrap(), input);
    }

    #[test]
    fn profile_with_users_and_configuration() {
        let input = json!({
            "profileId": "p-1",
            "profileName": "Lobby",
            "appConfiguration": {
                "@odata.type": "#microsoft.graph.windowsKioskSingleWin32App",
                "win32App": {
                    "@odata.type": "#microsoft.graph.windowsKioskWin32App",
                    "classicAppPath": "C:\\Program Files\\Signage\\signage.exe",
                },
            },
            "userAccountsConfiguration": [
                {"@odata.type": "#microsoft.graph.windowsKioskLocalUser", "userName": "lobby"},
                {"@odata.type": "#microsoft.graph.windowsKioskVisitor"},
            ],
        });
        let profile: WindowsKioskProfile = from_json_value(&input).unwrap();
        assert!(matches!(
            profile.app_configuration(),
            Some(WindowsKioskAppConfigurationKind::SingleWin32App(_))
        ));
        let users = profile.user_accounts_configuration().unwrap();
        assert!(matches!(users[0], WindowsKioskUserKind::LocalUser(_)));
        assert!(matches!(users[1], WindowsKioskUserKind::Visitor(_)));
        assert_eq!(to_json_value(&profile).unwrap(), input);
    }
}
