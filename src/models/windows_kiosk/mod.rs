//! Windows 10 kiosk mode: apps, users, app configurations and profiles.

use crate::enum_codec::graph_enum;

mod app_configuration;
mod apps;
mod profile;
mod users;

pub use app_configuration::{
    WindowsKioskAppConfiguration, WindowsKioskAppConfigurationKind, WindowsKioskMultipleApps,
    WindowsKioskSingleUwpApp, WindowsKioskSingleWin32App,
};
pub use apps::{
    WindowsKioskAppBase, WindowsKioskAppKind, WindowsKioskDesktopApp, WindowsKioskUwpApp,
    WindowsKioskWin32App,
};
pub use profile::{WindowsKioskForceUpdateSchedule, WindowsKioskProfile};
pub use users::{
    WindowsKioskActiveDirectoryGroup, WindowsKioskAutologon, WindowsKioskAzureAdGroup,
    WindowsKioskAzureAdUser, WindowsKioskLocalGroup, WindowsKioskLocalUser, WindowsKioskUser,
    WindowsKioskUserKind, WindowsKioskVisitor,
};

graph_enum! {
    pub enum WindowsKioskAppType: "windowsKioskAppType" {
        Unknown => "unknown",
        Store => "store",
        Desktop => "desktop",
        AumId => "aumId",
    }
}

graph_enum! {
    /// Start menu tile size for a kiosk app.
    pub enum WindowsAppStartLayoutTileSize: "windowsAppStartLayoutTileSize" {
        Hidden => "hidden",
        Small => "small",
        Medium => "medium",
        Wide => "wide",
        Large => "large",
    }
}

graph_enum! {
    pub enum WindowsEdgeKioskType: "windowsEdgeKioskType" {
        PublicBrowsing => "publicBrowsing",
        FullScreen => "fullScreen",
    }
}

graph_enum! {
    pub enum Windows10AppsUpdateRecurrence: "windows10AppsUpdateRecurrence" {
        None => "none",
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}
