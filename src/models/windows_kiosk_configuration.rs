use crate::error::Result;
use crate::serialization::{JsonParseNode, JsonSerializationWriter, Parsable};

use super::{
    DeviceConfiguration, WindowsKioskForceUpdateSchedule, WindowsKioskProfile,
    additional_data_holder, base_accessors,
};

/// Windows 10 kiosk device configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskConfiguration {
    base: DeviceConfiguration,
    edge_kiosk_enable_public_browsing: Option<bool>,
    kiosk_browser_blocked_url_exceptions: Option<Vec<String>>,
    kiosk_browser_blocked_urls: Option<Vec<String>>,
    kiosk_browser_default_url: Option<String>,
    kiosk_browser_enable_end_session_button: Option<bool>,
    kiosk_browser_enable_home_button: Option<bool>,
    kiosk_browser_enable_navigation_buttons: Option<bool>,
    kiosk_browser_restart_on_idle_time_in_minutes: Option<i32>,
    kiosk_profiles: Option<Vec<WindowsKioskProfile>>,
    windows_kiosk_force_update_schedule: Option<WindowsKioskForceUpdateSchedule>,
}

impl WindowsKioskConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskConfiguration";

    pub fn new() -> Self {
        let mut base = DeviceConfiguration::new();
        base.base_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            edge_kiosk_enable_public_browsing: None,
            kiosk_browser_blocked_url_exceptions: None,
            kiosk_browser_blocked_urls: None,
            kiosk_browser_default_url: None,
            kiosk_browser_enable_end_session_button: None,
            kiosk_browser_enable_home_button: None,
            kiosk_browser_enable_navigation_buttons: None,
            kiosk_browser_restart_on_idle_time_in_minutes: None,
            kiosk_profiles: None,
            windows_kiosk_force_update_schedule: None,
        }
    }

    /// Run Edge in public browsing (InPrivate) mode.
    pub fn edge_kiosk_enable_public_browsing(&self) -> Option<bool> {
        self.edge_kiosk_enable_public_browsing
    }

    pub fn set_edge_kiosk_enable_public_browsing(&mut self, value: Option<bool>) {
        self.edge_kiosk_enable_public_browsing = value;
    }

    pub fn kiosk_browser_blocked_url_exceptions(&self) -> Option<&[String]> {
        self.kiosk_browser_blocked_url_exceptions.as_deref()
    }

    pub fn set_kiosk_browser_blocked_url_exceptions(&mut self, value: Option<Vec<String>>) {
        self.kiosk_browser_blocked_url_exceptions = value;
    }

    pub fn kiosk_browser_blocked_urls(&self) -> Option<&[String]> {
        self.kiosk_browser_blocked_urls.as_deref()
    }

    pub fn set_kiosk_browser_blocked_urls(&mut self, value: Option<Vec<String>>) {
        self.kiosk_browser_blocked_urls = value;
    }

    pub fn kiosk_browser_default_url(&self) -> Option<&str> {
        self.kiosk_browser_default_url.as_deref()
    }

    pub fn set_kiosk_browser_default_url(&mut self, value: Option<String>) {
        self.kiosk_browser_default_url = value;
    }

    pub fn kiosk_browser_enable_end_session_button(&self) -> Option<bool> {
        self.kiosk_browser_enable_end_session_button
    }

    pub fn set_kiosk_browser_enable_end_session_button(&mut self, value: Option<bool>) {
        self.kiosk_browser_enable_end_session_button = value;
    }

    pub fn kiosk_browser_enable_home_button(&self) -> Option<bool> {
        self.kiosk_browser_enable_home_button
    }

    pub fn set_kiosk_browser_enable_home_button(&mut self, value: Option<bool>) {
        self.kiosk_browser_enable_home_button = value;
    }

    pub fn kiosk_browser_enable_navigation_buttons(&self) -> Option<bool> {
        self.kiosk_browser_enable_navigation_buttons
    }

    pub fn set_kiosk_browser_enable_navigation_buttons(&mut self, value: Option<bool>) {
        self.kiosk_browser_enable_navigation_buttons = value;
    }

    /// Minutes of inactivity before the kiosk browser restarts, 1 to 1440.
    pub fn kiosk_browser_restart_on_idle_time_in_minutes(&self) -> Option<i32> {
        self.kiosk_browser_restart_on_idle_time_in_minutes
    }

    pub fn set_kiosk_browser_restart_on_idle_time_in_minutes(&mut self, value: Option<i32>) {
        self.kiosk_browser_restart_on_idle_time_in_minutes = value;
    }

    pub fn kiosk_profiles(&self) -> Option<&[WindowsKioskProfile]> {
        self.kiosk_profiles.as_deref()
    }

    pub fn set_kiosk_profiles(&mut self, value: Option<Vec<WindowsKioskProfile>>) {
        self.kiosk_profiles = value;
    }

    pub fn windows_kiosk_force_update_schedule(&self) -> Option<&WindowsKioskForceUpdateSchedule> {
        self.windows_kiosk_force_update_schedule.as_ref()
    }

    pub fn set_windows_kiosk_force_update_schedule(
        &mut self,
        value: Option<WindowsKioskForceUpdateSchedule>,
    ) {
        self.windows_kiosk_force_update_schedule = value;
    }
}

impl Default for WindowsKioskConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskConfiguration => DeviceConfiguration);
additional_data_holder!(WindowsKioskConfiguration => base);

impl Parsable for WindowsKioskConfiguration {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "edgeKioskEnablePublicBrowsing" => {
                self.edge_kiosk_enable_public_browsing = node.get_bool_value()?
            }
            "kioskBrowserBlockedUrlExceptions" => {
                self.kiosk_browser_blocked_url_exceptions =
                    node.get_collection_of_primitive_values()?
            }
            "kioskBrowserBlockedURLs" => {
                self.kiosk_browser_blocked_urls = node.get_collection_of_primitive_values()?
            }
            "kioskBrowserDefaultUrl" => {
                self.kiosk_browser_default_url = node.get_string_value()?
            }
            "kioskBrowserEnableEndSessionButton" => {
                self.kiosk_browser_enable_end_session_button = node.get_bool_value()?
            }
            "kioskBrowserEnableHomeButton" => {
                self.kiosk_browser_enable_home_button = node.get_bool_value()?
            }
            "kioskBrowserEnableNavigationButtons" => {
                self.kiosk_browser_enable_navigation_buttons = node.get_bool_value()?
            }
            "kioskBrowserRestartOnIdleTimeInMinutes" => {
                self.kiosk_browser_restart_on_idle_time_in_minutes = node.get_i32_value()?
            }
            "kioskProfiles" => self.kiosk_profiles = node.get_collection_of_object_values()?,
            "windowsKioskForceUpdateSchedule" => {
                self.windows_kiosk_force_update_schedule = node.get_object_value()?
            }
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_bool_value(
            "edgeKioskEnablePublicBrowsing",
            self.edge_kiosk_enable_public_browsing,
        )?;
        writer.write_collection_of_primitive_values(
            "kioskBrowserBlockedUrlExceptions",
            self.kiosk_browser_blocked_url_exceptions.as_deref(),
        )?;
        writer.write_collection_of_primitive_values(
            "kioskBrowserBlockedURLs",
            self.kiosk_browser_blocked_urls.as_deref(),
        )?;
        writer.write_string_value(
            "kioskBrowserDefaultUrl",
            self.kiosk_browser_default_url.as_deref(),
        )?;
        writer.write_bool_value(
            "kioskBrowserEnableEndSessionButton",
            self.kiosk_browser_enable_end_session_button,
        )?;
        writer.write_bool_value(
            "kioskBrowserEnableHomeButton",
            self.kiosk_browser_enable_home_button,
        )?;
        writer.write_bool_value(
            "kioskBrowserEnableNavigationButtons",
            self.kiosk_browser_enable_navigation_buttons,
        )?;
        writer.write_i32_value(
            "kioskBrowserRestartOnIdleTimeInMinutes",
            self.kiosk_browser_restart_on_idle_time_in_minutes,
        )?;
        writer.write_collection_of_object_values("kioskProfiles", self.kiosk_profiles.as_deref())?;
        writer.write_object_value(
            "windowsKioskForceUpdateSchedule",
            self.windows_kiosk_force_update_schedule.as_ref(),
        )?;
        Ok(())
    }
}
