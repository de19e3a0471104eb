use crate::error::Result;
use crate::models::{additional_data_holder, base_accessors};
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{
    AdditionalData, Discriminated, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY,
    Parsable,
};

use super::{WindowsAppStartLayoutTileSize, WindowsEdgeKioskType, WindowsKioskAppType};

/// Fields common to every app that can run in kiosk mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowsKioskAppBase {
    additional_data: AdditionalData,
    app_type: Option<WindowsKioskAppType>,
    auto_launch: Option<bool>,
    name: Option<String>,
    odata_type: Option<String>,
    start_layout_tile_size: Option<WindowsAppStartLayoutTileSize>,
}

impl WindowsKioskAppBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_type(&self) -> Option<WindowsKioskAppType> {
        self.app_type
    }

    pub fn set_app_type(&mut self, value: Option<WindowsKioskAppType>) {
        self.app_type = value;
    }

    /// Launch the app when the kiosk session starts. Multi-app kiosks only.
    pub fn auto_launch(&self) -> Option<bool> {
        self.auto_launch
    }

    pub fn set_auto_launch(&mut self, value: Option<bool>) {
        self.auto_launch = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn start_layout_tile_size(&self) -> Option<WindowsAppStartLayoutTileSize> {
        self.start_layout_tile_size
    }

    pub fn set_start_layout_tile_size(&mut self, value: Option<WindowsAppStartLayoutTileSize>) {
        self.start_layout_tile_size = value;
    }
}

additional_data_holder!(WindowsKioskAppBase);

impl Parsable for WindowsKioskAppBase {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "appType" => self.app_type = node.get_enum_value()?,
            "autoLaunch" => self.auto_launch = node.get_bool_value()?,
            "name" => self.name = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "startLayoutTileSize" => self.start_layout_tile_size = node.get_enum_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_enum_value("appType", self.app_type)?;
        writer.write_bool_value("autoLaunch", self.auto_launch)?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_enum_value("startLayoutTileSize", self.start_layout_tile_size)?;
        Ok(())
    }
}

/// A desktop (non-UWP) app launched by path or link.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskDesktopApp {
    base: WindowsKioskAppBase,
    desktop_application_id: Option<String>,
    desktop_application_link_path: Option<String>,
    path: Option<String>,
}

impl WindowsKioskDesktopApp {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskDesktopApp";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppBase::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            desktop_application_id: None,
            desktop_application_link_path: None,
            path: None,
        }
    }

    pub fn desktop_application_id(&self) -> Option<&str> {
        self.desktop_application_id.as_deref()
    }

    pub fn set_desktop_application_id(&mut self, value: Option<String>) {
        self.desktop_application_id = value;
    }

    /// Path to the `.lnk` that starts the app.
    pub fn desktop_application_link_path(&self) -> Option<&str> {
        self.desktop_application_link_path.as_deref()
    }

    pub fn set_desktop_application_link_path(&mut self, value: Option<String>) {
        self.desktop_application_link_path = value;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, value: Option<String>) {
        self.path = value;
    }
}

impl Default for WindowsKioskDesktopApp {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskDesktopApp => WindowsKioskAppBase);
additional_data_holder!(WindowsKioskDesktopApp => base);

impl Parsable for WindowsKioskDesktopApp {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "desktopApplicationId" => self.desktop_application_id = node.get_string_value()?,
            "desktopApplicationLinkPath" => {
                self.desktop_application_link_path = node.get_string_value()?
            }
            "path" => self.path = node.get_string_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("desktopApplicationId", self.desktop_application_id.as_deref())?;
        writer.write_string_value(
            "desktopApplicationLinkPath",
            self.desktop_application_link_path.as_deref(),
        )?;
        writer.write_string_value("path", self.path.as_deref())?;
        Ok(())
    }
}

/// A Universal Windows Platform app, identified by AUMID.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskUwpApp {
    base: WindowsKioskAppBase,
    app_id: Option<String>,
    app_user_model_id: Option<String>,
    contained_app_id: Option<String>,
}

impl WindowsKioskUwpApp {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskUWPApp";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppBase::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            app_id: None,
            app_user_model_id: None,
            contained_app_id: None,
        }
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn app_user_model_id(&self) -> Option<&str> {
        self.app_user_model_id.as_deref()
    }

    pub fn set_app_user_model_id(&mut self, value: Option<String>) {
        self.app_user_model_id = value;
    }

    /// Id of the managed app that contains this one.
    pub fn contained_app_id(&self) -> Option<&str> {
        self.contained_app_id.as_deref()
    }

    pub fn set_contained_app_id(&mut self, value: Option<String>) {
        self.contained_app_id = value;
    }
}

impl Default for WindowsKioskUwpApp {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskUwpApp => WindowsKioskAppBase);
additional_data_holder!(WindowsKioskUwpApp => base);

impl Parsable for WindowsKioskUwpApp {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "appId" => self.app_id = node.get_string_value()?,
            "appUserModelId" => self.app_user_model_id = node.get_string_value()?,
            "containedAppId" => self.contained_app_id = node.get_string_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("appId", self.app_id.as_deref())?;
        writer.write_string_value("appUserModelId", self.app_user_model_id.as_deref())?;
        writer.write_string_value("containedAppId", self.contained_app_id.as_deref())?;
        Ok(())
    }
}

/// A classic Win32 app, optionally Microsoft Edge in kiosk mode.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsKioskWin32App {
    base: WindowsKioskAppBase,
    classic_app_path: Option<String>,
    edge_kiosk: Option<String>,
    edge_kiosk_idle_timeout_minutes: Option<i32>,
    edge_kiosk_type: Option<WindowsEdgeKioskType>,
    edge_no_first_run: Option<bool>,
}

impl WindowsKioskWin32App {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windowsKioskWin32App";

    pub fn new() -> Self {
        let mut base = WindowsKioskAppBase::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            classic_app_path: None,
            edge_kiosk: None,
            edge_kiosk_idle_timeout_minutes: None,
            edge_kiosk_type: None,
            edge_no_first_run: None,
        }
    }

    pub fn classic_app_path(&self) -> Option<&str> {
        self.classic_app_path.as_deref()
    }

    pub fn set_classic_app_path(&mut self, value: Option<String>) {
        self.classic_app_path = value;
    }

    /// URL Edge opens when started in kiosk mode.
    pub fn edge_kiosk(&self) -> Option<&str> {
        self.edge_kiosk.as_deref()
    }

    pub fn set_edge_kiosk(&mut self, value: Option<String>) {
        self.edge_kiosk = value;
    }

    pub fn edge_kiosk_idle_timeout_minutes(&self) -> Option<i32> {
        self.edge_kiosk_idle_timeout_minutes
    }

    pub fn set_edge_kiosk_idle_timeout_minutes(&mut self, value: Option<i32>) {
        self.edge_kiosk_idle_timeout_minutes = value;
    }

    pub fn edge_kiosk_type(&self) -> Option<WindowsEdgeKioskType> {
        self.edge_kiosk_type
    }

    pub fn set_edge_kiosk_type(&mut self, value: Option<WindowsEdgeKioskType>) {
        self.edge_kiosk_type = value;
    }

    pub fn edge_no_first_run(&self) -> Option<bool> {
        self.edge_no_first_run
    }

    pub fn set_edge_no_first_run(&mut self, value: Option<bool>) {
        self.edge_no_first_run = value;
    }
}

impl Default for WindowsKioskWin32App {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(WindowsKioskWin32App => WindowsKioskAppBase);
additional_data_holder!(WindowsKioskWin32App => base);

impl Parsable for WindowsKioskWin32App {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "classicAppPath" => self.classic_app_path = node.get_string_value()?,
            "edgeKiosk" => self.edge_kiosk = node.get_string_value()?,
            "edgeKioskIdleTimeoutMinutes" => {
                self.edge_kiosk_idle_timeout_minutes = node.get_i32_value()?
            }
            "edgeKioskType" => self.edge_kiosk_type = node.get_enum_value()?,
            "edgeNoFirstRun" => self.edge_no_first_run = node.get_bool_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("classicAppPath", self.classic_app_path.as_deref())?;
        writer.write_string_value("edgeKiosk", self.edge_kiosk.as_deref())?;
        writer.write_i32_value(
            "edgeKioskIdleTimeoutMinutes",
            self.edge_kiosk_idle_timeout_minutes,
        )?;
        writer.write_enum_value("edgeKioskType", self.edge_kiosk_type)?;
        writer.write_bool_value("edgeNoFirstRun", self.edge_no_first_run)?;
        Ok(())
    }
}

/// A kiosk app of any concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowsKioskAppKind {
    Base(WindowsKioskAppBase),
    Desktop(WindowsKioskDesktopApp),
    Uwp(WindowsKioskUwpApp),
    Win32(WindowsKioskWin32App),
}

delegate_kind!(WindowsKioskAppKind { Base, Desktop, Uwp, Win32 });

impl Discriminated for WindowsKioskAppKind {
    const TYPE_NAME: &'static str = "windowsKioskAppBase";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (WindowsKioskDesktopApp::ODATA_TYPE, || {
            Self::Desktop(WindowsKioskDesktopApp::new())
        }),
        (WindowsKioskUwpApp::ODATA_TYPE, || Self::Uwp(WindowsKioskUwpApp::new())),
        (WindowsKioskWin32App::ODATA_TYPE, || Self::Win32(WindowsKioskWin32App::new())),
    ];

    fn fallback() -> Self {
        Self::Base(WindowsKioskAppBase::new())
    }
}

impl WindowsKioskAppKind {
    pub fn as_base(&self) -> &WindowsKioskAppBase {
        match self {
            Self::Base(inner) => inner,
            Self::Desktop(inner) => inner.base(),
            Self::Uwp(inner) => inner.base(),
            Self::Win32(inner) => inner.base(),
        }
    }

    pub fn as_base_mut(&mut self) -> &mut WindowsKioskAppBase {
        match self {
            Self::Base(inner) => inner,
            Self::Desktop(inner) => inner.base_mut(),
            Self::Uwp(inner) => inner.base_mut(),
            Self::Win32(inner) => inner.base_mut(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().odata_type()
    }
}

impl Default for WindowsKioskAppKind {
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
    fn win32_app_is_dispatched_and_stamped() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskWin32App",
            "name": "Notepad",
            "autoLaunch": true,
        });
        let mut app: WindowsKioskAppKind = from_json_value(&input).unwrap();
        let WindowsKioskAppKind::Win32(win32) = &mut app else {
            panic!("expected win32 app");
        };
        assert_eq!(win32.base().name(), Some("Notepad"));
        assert_eq!(win32.base().auto_launch(), Some(true));

        win32.base_mut().set_name(Some("Calculator".to_string()));
        win32.set_classic_app_path(Some("C:\\Windows\\System32\\calc.exe".to_string()));
        let out = to_json_value(&app).unwrap();
        assert_eq!(out["@odata.type"], "#microsoft.graph.windowsKioskWin32App");
        assert_eq!(out["name"], "Calculator");
    }

    #[test]
    fn uwp_discriminator_is_case_exact() {
        let input = json!({"@odata.type": "#microsoft.graph.windowsKioskUwpApp", "appId": "x"});
        let app: WindowsKioskAppKind = from_json_value(&input).unwrap();
        assert!(matches!(app, WindowsKioskAppKind::Base(_)));
        assert_eq!(app.additional_data().get("appId"), Some(&json!("x")));
    }

    #[test]
    fn missing_discriminator_yields_base() {
        let input = json!({"name": "Edge", "startLayoutTileSize": "medium"});
        let app: WindowsKioskAppKind = from_json_value(&input).unwrap();
        let WindowsKioskAppKind::Base(base) = &app else {
            panic!("expected base app, got {app:?}");
        };
        assert_eq!(base.start_layout_tile_size(), Some(WindowsAppStartLayoutTileSize::Medium));
        assert_eq!(app.odata_type(), None);
        assert_eq!(to_json_value(&app).unwrap(), input);
    }

    #[test]
    fn edge_kiosk_fields() {
        let input = json!({
            "@odata.type": "#microsoft.graph.windowsKioskWin32App",
            "appType": "desktop",
            "edgeKiosk": "https://contoso.com",
            "edgeKioskType": "publicBrowsing",
            "edgeKioskIdleTimeoutMinutes": 15,
            "edgeNoFirstRun": true,
        });
        let app: WindowsKioskAppKind = from_json_value(&input).unwrap();
        let WindowsKioskAppKind::Win32(win32) = &app else {
            panic!("expected win32 app, got {app:?}");
        };
        assert_eq!(win32.edge_kiosk_type(), Some(WindowsEdgeKioskType::PublicBrowsing));
        assert_eq!(win32.edge_kiosk_idle_timeout_minutes(), Some(15));
        assert_eq!(win32.base().app_type(), Some(WindowsKioskAppType::Desktop));
        assert_eq!(to_json_value(&app).unwrap(), input);
    }

    #[test]
    fn null_discriminator_keeps_the_constructor_stamp() {
        let app: WindowsKioskWin32App =
            from_json_value(&json!({"@odata.type": null, "name": "x"})).unwrap();
        assert_eq!(app.base().odata_type(), Some(WindowsKioskWin32App::ODATA_TYPE));
        assert_eq!(
            to_json_value(&app).unwrap(),
            json!({"@odata.type": "#microsoft.graph.windowsKioskWin32App", "name": "x"})
        );
    }
}
