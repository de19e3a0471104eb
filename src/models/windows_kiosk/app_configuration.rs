use crate::error::Result;
use crate::models::{additional_data_holder, base_accessors};
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{
    AdditionalData, Discriminated, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY,
    Parsable,
};

use super::{WindowsKioskAppKind, WindowsKioskUwpApp, WindowsKioskWin32App};

/// Base of the app configurations a kiosk profile can run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowsKioskAppConfiguration {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl WindowsKioskAppConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

additional_data_holder!(WindowsKioskAppConfiguration);

impl Parsable for WindowsKioskAppConfiguration {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())
    }
}

/// Several apps behind a restricted start menu.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskMultipleApps {
    base: WindowsKioskAppConfiguration,
    allow_access_to_downloads_folder: Option<bool>,
    apps: Option<Vec<WindowsKioskAppKind>>,
    disallow_desktop_apps: Option<bool>,
    show_task_bar: Option<bool>,
    start_menu_layout_xml: Option<Vec<u8>>,
}

impl WindowsKioskMultipleApps {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskMultipleApps";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppConfiguration::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            allow_access_to_downloads_folder: None,
            apps: None,
            disallow_desktop_apps: None,
            show_task_bar: None,
            start_menu_layout_xml: None,
        }
    }

    pub fn allow_access_to_downloads_folder(&self) -> Option<bool> {
        self.allow_access_to_downloads_folder
    }

    pub fn set_allow_access_to_downloads_folder(&mut self, value: Option<bool>) {
        self.allow_access_to_downloads_folder = value;
    }

    /// Apps pinned to the start menu, up to 128.
    pub fn apps(&self) -> Option<&[WindowsKioskAppKind]> {
        self.apps.as_deref()
    }

    pub fn set_apps(&mut self, value: Option<Vec<WindowsKioskAppKind>>) {
        self.apps = value;
    }

    pub fn disallow_desktop_apps(&self) -> Option<bool> {
        self.disallow_desktop_apps
    }

    pub fn set_disallow_desktop_apps(&mut self, value: Option<bool>) {
        self.disallow_desktop_apps = value;
    }

    pub fn show_task_bar(&self) -> Option<bool> {
        self.show_task_bar
    }

    pub fn set_show_task_bar(&mut self, value: Option<bool>) {
        self.show_task_bar = value;
    }

    /// Raw start layout XML; base64 on the wire.
    pub fn start_menu_layout_xml(&self) -> Option<&[u8]> {
        self.start_menu_layout_xml.as_deref()
    }

    pub fn set_start_menu_layout_xml(&mut self, value: Option<Vec<u8>>) {
        self.start_menu_layout_xml = value;
    }
}

impl Default for WindowsKioskMultipleApps {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskMultipleApps => WindowsKioskAppConfiguration);
additional_data_holder!(WindowsKioskMultipleApps => base);

impl Parsable for WindowsKioskMultipleApps {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "allowAccessToDownloadsFolder" => {
                self.allow_access_to_downloads_folder = node.get_bool_value()?
            }
            "apps" => self.apps = node.get_collection_of_object_values()?,
            "disallowDesktopApps" => self.disallow_desktop_apps = node.get_bool_value()?,
            "showTaskBar" => self.show_task_bar = node.get_bool_value()?,
            "startMenuLayoutXml" => self.start_menu_layout_xml = node.get_byte_array_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_bool_value(
            "allowAccessToDownloadsFolder",
            self.allow_access_to_downloads_folder,
        )?;
        writer.write_collection_of_object_values("apps", self.apps.as_deref())?;
        writer.write_bool_value("disallowDesktopApps", self.disallow_desktop_apps)?;
        writer.write_bool_value("showTaskBar", self.show_task_bar)?;
        writer.write_byte_array_value("startMenuLayoutXml", self.start_menu_layout_xml.as_deref())?;
        Ok(())
    }
}

/// A single UWP app running full screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskSingleUwpApp {
    base: WindowsKioskAppConfiguration,
    uwp_app: Option<WindowsKioskUwpApp>,
}

impl WindowsKioskSingleUwpApp {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskSingleUWPApp";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppConfiguration::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            uwp_app: None,
        }
    }

    pub fn uwp_app(&self) -> Option<&WindowsKioskUwpApp> {
        self.uwp_app.as_ref()
    }

    pub fn set_uwp_app(&mut self, value: Option<WindowsKioskUwpApp>) {
        self.uwp_app = value;
    }
}

impl Default for WindowsKioskSingleUwpApp {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskSingleUwpApp => WindowsKioskAppConfiguration);
additional_data_holder!(WindowsKioskSingleUwpApp => base);

impl Parsable for WindowsKioskSingleUwpApp {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "uwpApp" => self.uwp_app = node.get_object_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("uwpApp", self.uwp_app.as_ref())
    }
}

/// A single Win32 app running full screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskSingleWin32App {
    base: WindowsKioskAppConfiguration,
    win32_app: Option<WindowsKioskWin32App>,
}

impl WindowsKioskSingleWin32App {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskSingleWin32App";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppConfiguration::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            win32_app: None,
        }
    }

    pub fn win32_app(&self) -> Option<&WindowsKioskWin32App> {
        self.win32_app.as_ref()
    }

    pub fn set_win32_app(&mut self, value: Option<WindowsKioskWin32App>) {
        self.win32_app = value;
    }
}

impl Default for WindowsKioskSingleWin32App {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskSingleWin32App => WindowsKioskAppConfiguration);
additional_data_holder!(WindowsKioskSingleWin32App => base);

impl Parsable for WindowsKioskSingleWin32App {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "win32App" => self.win32_app = node.get_object_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("win32App", self.win32_app.as_ref())
    }
}

/// A kiosk app configuration of any concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowsKioskAppConfigurationKind {
    Base(WindowsKioskAppConfiguration),
    MultipleApps(WindowsKioskMultipleApps),
    SingleUwpApp(WindowsKioskSingleUwpApp),
    SingleWin32App(WindowsKioskSingleWin32App),
}

delegate_kind!(WindowsKioskAppConfigurationKind {
    Base,
    MultipleApps,
    SingleUwpApp,
    SingleWin32App,
});

impl Discriminated for WindowsKioskAppConfigurationKind {
    const TYPE_NAME: &'static str = "windowsKioskAppConfiguration";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (WindowsKioskMultipleApps::ODATA_TYPE, || {
            Self::MultipleApps(WindowsKioskMultipleApps::new())
        }),
        (WindowsKioskSingleUwpApp::ODATA_TYPE, || {
            Self::SingleUwpApp(WindowsKioskSingleUwpApp::new())
        }),
        (WindowsKioskSingleWin32App::ODATA_TYPE, || {
            Self::SingleWin32App(WindowsKioskSingleWin32App::new())
        }),
    ];

    fn fallback() -> Self {
        Self::Base(WindowsKioskAppConfiguration::new())
    }
}

impl WindowsKioskAppConfigurationKind {
    pub fn as_base(&self) -> &WindowsKioskAppConfiguration {
        match self {
            Self::Base(inner) => inner,
            Self::MultipleApps(inner) => inner.base(),
            Self::SingleUwpApp(inner) => inner.base(),
            Self::SingleWin32App(inner) => inner.base(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().odata_type()
    }
}

impl Default for WindowsKioskAppConfigurationKind {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn multiple_apps_dispatch_each_element() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskMultipleApps",
            "showTaskBar": true,
            "startMenuLayoutXml": "PFN0YXJ0TGF5b3V0Lz4=",
            "apps": [
                {"@odata.type": "#microsoft.graph.windowsKioskUWPApp", "appUserModelId": "Microsoft.WindowsCalculator_8wekyb3d8bbwe!App"},
                {"@odata.type": "#microsoft.graph.windowsKioskDesktopApp", "path": "%windir%\\system32\\mspaint.exe"},
                {"name": "unknown"},
            ],
        });
        let config: WindowsKioskAppConfigurationKind = from_json_value(&input).unwrap();
        let WindowsKioskAppConfigurationKind::MultipleApps(multi) = &config else {
            panic!("expected multiple apps, got {config:?}");
        };
        let apps = multi.apps().unwrap();
        assert!(matches!(apps[0], WindowsKioskAppKind::Uwp(_)));
        assert!(matches!(apps[1], WindowsKioskAppKind::Desktop(_)));
        assert!(matches!(apps[2], WindowsKioskAppKind::Base(_)));
        assert_eq!(multi.start_menu_layout_xml(), Some(b"<StartLayout/>".as_slice()));
        assert_eq!(to_json_value(&config).unwrap(), input);
    }

    #[test]
    fn single_uwp_app_keeps_nested_discriminator() {
        let mut app = WindowsKioskUwpApp::new();
        app.set_app_user_model_id(Some("Contoso.Signage!App".to_string()));
        let mut config = WindowsKioskSingleUwpApp::new();
        config.set_uwp_app(Some(app));

        let out = to_json_value(&config).unwrap();
        assert_eq!(
            out,
            json!({
                "@odata.type": "#microsoft.graph.windowsKioskSingleUWPApp",
                "uwpApp": {
                    "@odata.type": "#microsoft.graph.windowsKioskUWPApp",
                    "appUserModelId": "Contoso.Signage!App",
                },
            })
        );

        let back: WindowsKioskAppConfigurationKind = from_json_value(&out).unwrap();
        assert_eq!(back, WindowsKioskAppConfigurationKind::SingleUwpApp(config));
    }

    #[test]
    fn nested_win32_app_with_null_discriminator_is_still_stamped() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskSingleWin32App",
            "win32App": {"@odata.type": null, "name": "Notepad"},
        });
        let config: WindowsKioskAppConfigurationKind = from_json_value(&input).unwrap();
        let WindowsKioskAppConfigurationKind::SingleWin32App(single) = &config else {
            panic!("expected single win32 app, got {config:?}");
        };
        assert_eq!(single.win32_app().unwrap().base().name(), Some("Notepad"));

        let out = to_json_value(&config).unwrap();
        assert_eq!(
            out["win32App"],
            json!({"@odata.type": "#microsoft.graph.windowsKioskWin32App", "name": "Notepad"})
        );
    }
}
