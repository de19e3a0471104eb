//! Enumerations and nested records used by Android device owner profiles.

use crate::enum_codec::graph_enum;
use crate::error::Result;
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{
    AdditionalData, Discriminated, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY,
    Parsable,
};

use super::{KeyValuePair, additional_data_holder, base_accessors};

graph_enum! {
    /// Keyguard features that can be disabled on the lock screen.
    pub enum AndroidKeyguardFeature: "androidKeyguardFeature" {
        NotConfigured => "notConfigured",
        Camera => "camera",
        Notifications => "notifications",
        UnredactedNotifications => "unredactedNotifications",
        TrustAgents => "trustAgents",
        Fingerprint => "fingerprint",
        RemoteInput => "remoteInput",
        AllFeatures => "allFeatures",
        Face => "face",
        Iris => "iris",
        Biometrics => "biometrics",
    }
}

graph_enum! {
    pub enum AndroidDeviceOwnerRequiredPasswordType: "androidDeviceOwnerRequiredPasswordType" {
        DeviceDefault => "deviceDefault",
        Required => "required",
        Numeric => "numeric",
        NumericComplex => "numericComplex",
        Alphabetic => "alphabetic",
        Alphanumeric => "alphanumeric",
        AlphanumericWithSymbols => "alphanumericWithSymbols",
        LowSecurityBiometric => "lowSecurityBiometric",
        CustomPassword => "customPassword",
    }
}

graph_enum! {
    /// How often a strong unlock is required.
    pub enum AndroidDeviceOwnerRequiredPasswordUnlock: "androidDeviceOwnerRequiredPasswordUnlock" {
        DeviceDefault => "deviceDefault",
        Daily => "daily",
        /// Sic; the service spells it this way.
        UnknownFutureValue => "unkownFutureValue",
    }
}

graph_enum! {
    pub enum AndroidDeviceOwnerSystemUpdateInstallType: "androidDeviceOwnerSystemUpdateInstallType" {
        DeviceDefault => "deviceDefault",
        Postpone => "postpone",
        Windowed => "windowed",
        Automatic => "automatic",
    }
}

graph_enum! {
    pub enum AndroidDeviceOwnerPlayStoreMode: "androidDeviceOwnerPlayStoreMode" {
        NotConfigured => "notConfigured",
        AllowList => "allowList",
        BlockList => "blockList",
    }
}

graph_enum! {
    /// Power sources that keep the screen on while plugged in.
    pub enum AndroidDeviceOwnerBatteryPluggedMode: "androidDeviceOwnerBatteryPluggedMode" {
        NotConfigured => "notConfigured",
        Ac => "ac",
        Usb => "usb",
        Wireless => "wireless",
    }
}

graph_enum! {
    pub enum AndroidDeviceOwnerAppAutoUpdatePolicyType: "androidDeviceOwnerAppAutoUpdatePolicyType" {
        NotConfigured => "notConfigured",
        UserChoice => "userChoice",
        Never => "never",
        WiFiOnly => "wiFiOnly",
        Always => "always",
    }
}

/// A message shown to the user, with optional per-locale overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidDeviceOwnerUserFacingMessage {
    additional_data: AdditionalData,
    default_message: Option<String>,
    localized_messages: Option<Vec<KeyValuePair>>,
    odata_type: Option<String>,
}

impl AndroidDeviceOwnerUserFacingMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shown when no localized message matches the device locale.
    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }

    pub fn set_default_message(&mut self, value: Option<String>) {
        self.default_message = value;
    }

    /// Locale name to message text.
    pub fn localized_messages(&self) -> Option<&[KeyValuePair]> {
        self.localized_messages.as_deref()
    }

    pub fn set_localized_messages(&mut self, value: Option<Vec<KeyValuePair>>) {
        self.localized_messages = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

additional_data_holder!(AndroidDeviceOwnerUserFacingMessage);

impl Parsable for AndroidDeviceOwnerUserFacingMessage {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "defaultMessage" => self.default_message = node.get_string_value()?,
            "localizedMessages" => {
                self.localized_messages = node.get_collection_of_object_values()?
            }
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
        writer.write_string_value("defaultMessage", self.default_message.as_deref())?;
        writer.write_collection_of_object_values(
            "localizedMessages",
            self.localized_messages.as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        Ok(())
    }
}

/// A yearly window during which system updates are held back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidDeviceOwnerSystemUpdateFreezePeriod {
    additional_data: AdditionalData,
    end_day: Option<i32>,
    end_month: Option<i32>,
    odata_type: Option<String>,
    start_day: Option<i32>,
    start_month: Option<i32>,
}

impl AndroidDeviceOwnerSystemUpdateFreezePeriod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end_day(&self) -> Option<i32> {
        self.end_day
    }

    pub fn set_end_day(&mut self, value: Option<i32>) {
        self.end_day = value;
    }

    pub fn end_month(&self) -> Option<i32> {
        self.end_month
    }

    pub fn set_end_month(&mut self, value: Option<i32>) {
        self.end_month = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn start_day(&self) -> Option<i32> {
        self.start_day
    }

    pub fn set_start_day(&mut self, value: Option<i32>) {
        self.start_day = value;
    }

    pub fn start_month(&self) -> Option<i32> {
        self.start_month
    }

    pub fn set_start_month(&mut self, value: Option<i32>) {
        self.start_month = value;
    }
}

additional_data_holder!(AndroidDeviceOwnerSystemUpdateFreezePeriod);

impl Parsable for AndroidDeviceOwnerSystemUpdateFreezePeriod {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "endDay" => self.end_day = node.get_i32_value()?,
            "endMonth" => self.end_month = node.get_i32_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "startDay" => self.start_day = node.get_i32_value()?,
            "startMonth" => self.start_month = node.get_i32_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i32_value("endDay", self.end_day)?;
        writer.write_i32_value("endMonth", self.end_month)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("startDay", self.start_day)?;
        writer.write_i32_value("startMonth", self.start_month)?;
        Ok(())
    }
}

/// Base of the global proxy settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidDeviceOwnerGlobalProxy {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl AndroidDeviceOwnerGlobalProxy {
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

additional_data_holder!(AndroidDeviceOwnerGlobalProxy);

impl Parsable for AndroidDeviceOwnerGlobalProxy {
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

/// Proxy configured through a PAC file.
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidDeviceOwnerGlobalProxyAutoConfig {
    base: AndroidDeviceOwnerGlobalProxy,
    proxy_auto_config_url: Option<String>,
}

impl AndroidDeviceOwnerGlobalProxyAutoConfig {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.androidDeviceOwnerGlobalProxyAutoConfig";

    pub fn new() -> Self {
        let mut base = AndroidDeviceOwnerGlobalProxy::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            proxy_auto_config_url: None,
        }
    }

    pub fn proxy_auto_config_url(&self) -> Option<&str> {
        self.proxy_auto_config_url.as_deref()
    }

    pub fn set_proxy_auto_config_url(&mut self, value: Option<String>) {
        self.proxy_auto_config_url = value;
    }
}

impl Default for AndroidDeviceOwnerGlobalProxyAutoConfig {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(AndroidDeviceOwnerGlobalProxyAutoConfig => AndroidDeviceOwnerGlobalProxy);
additional_data_holder!(AndroidDeviceOwnerGlobalProxyAutoConfig => base);

impl Parsable for AndroidDeviceOwnerGlobalProxyAutoConfig {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "proxyAutoConfigURL" => self.proxy_auto_config_url = node.get_string_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("proxyAutoConfigURL", self.proxy_auto_config_url.as_deref())
    }
}

/// Proxy configured by host and port.
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidDeviceOwnerGlobalProxyDirect {
    base: AndroidDeviceOwnerGlobalProxy,
    excluded_hosts: Option<Vec<String>>,
    host: Option<String>,
    port: Option<i32>,
}

impl AndroidDeviceOwnerGlobalProxyDirect {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.androidDeviceOwnerGlobalProxyDirect";

    pub fn new() -> Self {
        let mut base = AndroidDeviceOwnerGlobalProxy::new();
        base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            excluded_hosts: None,
            host: None,
            port: None,
        }
    }

    /// Hosts that bypass the proxy. `*` wildcards are allowed.
    pub fn excluded_hosts(&self) -> Option<&[String]> {
        self.excluded_hosts.as_deref()
    }

    pub fn set_excluded_hosts(&mut self, value: Option<Vec<String>>) {
        self.excluded_hosts = value;
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, value: Option<String>) {
        self.host = value;
    }

    pub fn port(&self) -> Option<i32> {
        self.port
    }

    pub fn set_port(&mut self, value: Option<i32>) {
        self.port = value;
    }
}

impl Default for AndroidDeviceOwnerGlobalProxyDirect {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(AndroidDeviceOwnerGlobalProxyDirect => AndroidDeviceOwnerGlobalProxy);
additional_data_holder!(AndroidDeviceOwnerGlobalProxyDirect => base);

impl Parsable for AndroidDeviceOwnerGlobalProxyDirect {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "excludedHosts" => self.excluded_hosts = node.get_collection_of_primitive_values()?,
            "host" => self.host = node.get_string_value()?,
            "port" => self.port = node.get_i32_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_collection_of_primitive_values("excludedHosts", self.excluded_hosts.as_deref())?;
        writer.write_string_value("host", self.host.as_deref())?;
        writer.write_i32_value("port", self.port)?;
        Ok(())
    }
}

/// A global proxy of either concrete form.
#[derive(Debug, Clone, PartialEq)]
pub enum AndroidDeviceOwnerGlobalProxyKind {
    Base(AndroidDeviceOwnerGlobalProxy),
    AutoConfig(AndroidDeviceOwnerGlobalProxyAutoConfig),
    Direct(AndroidDeviceOwnerGlobalProxyDirect),
}

delegate_kind!(AndroidDeviceOwnerGlobalProxyKind { Base, AutoConfig, Direct });

impl Discriminated for AndroidDeviceOwnerGlobalProxyKind {
    const TYPE_NAME: &'static str = "androidDeviceOwnerGlobalProxy";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (AndroidDeviceOwnerGlobalProxyAutoConfig::ODATA_TYPE, || {
            Self::AutoConfig(AndroidDeviceOwnerGlobalProxyAutoConfig::new())
        }),
        (AndroidDeviceOwnerGlobalProxyDirect::ODATA_TYPE, || {
            Self::Direct(AndroidDeviceOwnerGlobalProxyDirect::new())
        }),
    ];

    fn fallback() -> Self {
        Self::Base(AndroidDeviceOwnerGlobalProxy::new())
    }
}

impl AndroidDeviceOwnerGlobalProxyKind {
    pub fn as_base(&self) -> &AndroidDeviceOwnerGlobalProxy {
        match self {
            Self::Base(inner) => inner,
            Self::AutoConfig(inner) => inner.base(),
            Self::Direct(inner) => inner.base(),
        }
    }

    pub fn as_base_mut(&mut self) -> &mut AndroidDeviceOwnerGlobalProxy {
        match self {
            Self::Base(inner) => inner,
            Self::AutoConfig(inner) => inner.base_mut(),
            Self::Direct(inner) => inner.base_mut(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().odata_type()
    }
}

impl Default for AndroidDeviceOwnerGlobalProxyKind {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_codec::{GraphEnum, parse_enum_values};
    use crate::error::Error;
    use crate::serialization::{AdditionalDataHolder, from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn keyguard_feature_codec() {
        assert_eq!(
            AndroidKeyguardFeature::parse("camera").unwrap(),
            AndroidKeyguardFeature::Camera
        );
        assert_eq!(AndroidKeyguardFeature::Camera.ordinal(), 1);
        assert_eq!(AndroidKeyguardFeature::Biometrics.as_str(), "biometrics");
        assert_eq!(AndroidKeyguardFeature::VALUES.len(), 11);
        assert!(matches!(
            AndroidKeyguardFeature::parse("Camera"),
            Err(Error::UnrecognizedEnumValue { value, .. }) if value == "Camera"
        ));
    }

    #[test]
    fn misspelled_future_value_is_the_wire_string() {
        assert_eq!(
            AndroidDeviceOwnerRequiredPasswordUnlock::parse("unkownFutureValue").unwrap(),
            AndroidDeviceOwnerRequiredPasswordUnlock::UnknownFutureValue
        );
        assert!(AndroidDeviceOwnerRequiredPasswordUnlock::parse("unknownFutureValue").is_err());
    }

    #[test]
    fn stay_on_modes_parse_in_order() {
        let modes: Vec<AndroidDeviceOwnerBatteryPluggedMode> =
            parse_enum_values(&["usb", "ac"]).unwrap();
        assert_eq!(
            modes,
            vec![
                AndroidDeviceOwnerBatteryPluggedMode::Usb,
                AndroidDeviceOwnerBatteryPluggedMode::Ac
            ]
        );
    }

    #[test]
    fn user_facing_message_with_localizations() {
        let input = json!({
            "defaultMessage": "Contact IT",
            "localizedMessages": [
                {"name": "fr-FR", "value": "Contactez l'informatique"},
                {"name": "de-DE", "value": "IT kontaktieren"},
            ],
        });
        let message: AndroidDeviceOwnerUserFacingMessage = from_json_value(&input).unwrap();
        let localized = message.localized_messages().unwrap();
        assert_eq!(localized.len(), 2);
        assert_eq!(localized[1].name(), Some("de-DE"));
        assert_eq!(to_json_value(&message).unwrap(), input);
    }

    #[test]
    fn global_proxy_direct() {
        let input = json!({
            "@odata.type": "#microsoft.graph.androidDeviceOwnerGlobalProxyDirect",
            "host": "proxy.contoso.com",
            "port": 8080,
            "excludedHosts": ["*.contoso.com"],
        });
        let proxy: AndroidDeviceOwnerGlobalProxyKind = from_json_value(&input).unwrap();
        let AndroidDeviceOwnerGlobalProxyKind::Direct(direct) = &proxy else {
            panic!("expected direct proxy, got {proxy:?}");
        };
        assert_eq!(direct.host(), Some("proxy.contoso.com"));
        assert_eq!(direct.port(), Some(8080));
        assert_eq!(to_json_value(&proxy).unwrap(), input);
    }

    #[test]
    fn port_out_of_int32_range_fails() {
        let input = json!({
            "@odata.type": "#microsoft.graph.androidDeviceOwnerGlobalProxyDirect",
            "port": 4_294_967_296_i64,
        });
        assert!(from_json_value::<AndroidDeviceOwnerGlobalProxyKind>(&input).is_err());
    }

    #[test]
    fn new_subtype_is_stamped() {
        let proxy = AndroidDeviceOwnerGlobalProxyAutoConfig::new();
        assert_eq!(
            proxy.base().odata_type(),
            Some(AndroidDeviceOwnerGlobalProxyAutoConfig::ODATA_TYPE)
        );
        assert!(proxy.additional_data().is_empty());
    }
}
