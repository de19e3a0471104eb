use crate::error::Result;
use crate::models::{additional_data_holder, base_accessors};
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{
    AdditionalData, Discriminated, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY,
    Parsable,
};

/// Base of the account types a kiosk profile can be assigned to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowsKioskUser {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl WindowsKioskUser {
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

additional_data_holder!(WindowsKioskUser);

impl Parsable for WindowsKioskUser {
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

/// Declare a `windowsKioskUser` subtype whose own fields are all strings.
macro_rules! kiosk_user {
    (
        $(#[$meta:meta])*
        $name:ident = $odata_type:literal {
            $( $field:ident, $setter:ident => $wire:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            base: WindowsKioskUser,
            $( $field: Option<String>, )*
        }

        impl $name {
            pub const ODATA_TYPE: &'static str = $odata_type;

            pub fn new() -> Self {
                let mut base = WindowsKioskUser::new();
                base.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
                Self {
                    base,
                    $( $field: None, )*
                }
            }

            $(
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }

                pub fn $setter(&mut self, value: Option<String>) {
                    self.$field = value;
                }
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        base_accessors!($name => WindowsKioskUser);
        additional_data_holder!($name => base);

        impl Parsable for $name {
            fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
                Ok(Self::new())
            }

            fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
                $(
                    if key == $wire {
                        self.$field = node.get_string_value()?;
                        return Ok(true);
                    }
                )*
                self.base.deserialize_field(key, node)
            }

            fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
                self.base.serialize_fields(writer)?;
                $( writer.write_string_value($wire, self.$field.as_deref())?; )*
                Ok(())
            }
        }
    };
}

kiosk_user! {
    /// An on-premises Active Directory group.
    WindowsKioskActiveDirectoryGroup = "#microsoft.graph.windowsKioskActiveDirectoryGroup" {
        group_name, set_group_name => "groupName";
    }
}

kiosk_user! {
    /// The device's autologon account.
    WindowsKioskAutologon = "#microsoft.graph.windowsKioskAutologon" {}
}

kiosk_user! {
    WindowsKioskAzureAdGroup = "#microsoft.graph.windowsKioskAzureADGroup" {
        display_name, set_display_name => "displayName";
        group_id, set_group_id => "groupId";
    }
}

kiosk_user! {
    WindowsKioskAzureAdUser = "#microsoft.graph.windowsKioskAzureADUser" {
        user_id, set_user_id => "userId";
        user_principal_name, set_user_principal_name => "userPrincipalName";
    }
}

kiosk_user! {
    WindowsKioskLocalGroup = "#microsoft.graph.windowsKioskLocalGroup" {
        group_name, set_group_name => "groupName";
    }
}

kiosk_user! {
    WindowsKioskLocalUser = "#microsoft.graph.windowsKioskLocalUser" {
        user_name, set_user_name => "userName";
    }
}

kiosk_user! {
    /// Anonymous visitor sessions.
    WindowsKioskVisitor = "#microsoft.graph.windowsKioskVisitor" {}
}

/// A kiosk account of any concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowsKioskUserKind {
    Base(WindowsKioskUser),
    ActiveDirectoryGroup(WindowsKioskActiveDirectoryGroup),
    Autologon(WindowsKioskAutologon),
    AzureAdGroup(WindowsKioskAzureAdGroup),
    AzureAdUser(WindowsKioskAzureAdUser),
    LocalGroup(WindowsKioskLocalGroup),
    LocalUser(WindowsKioskLocalUser),
    Visitor(WindowsKioskVisitor),
}

delegate_kind!(WindowsKioskUserKind {
    Base,
    ActiveDirectoryGroup,
    Autologon,
    AzureAdGroup,
    AzureAdUser,
    LocalGroup,
    LocalUser,
    Visitor,
});

impl Discriminated for WindowsKioskUserKind {
    const TYPE_NAME: &'static str = "windowsKioskUser";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (WindowsKioskActiveDirectoryGroup::ODATA_TYPE, || {
            Self::ActiveDirectoryGroup(WindowsKioskActiveDirectoryGroup::new())
        }),
        (WindowsKioskAutologon::ODATA_TYPE, || {
            Self::Autologon(WindowsKioskAutologon::new())
        }),
        (WindowsKioskAzureAdGroup::ODATA_TYPE, || {
            Self::AzureAdGroup(WindowsKioskAzureAdGroup::new())
        }),
        (WindowsKioskAzureAdUser::ODATA_TYPE, || {
            Self::AzureAdUser(WindowsKioskAzureAdUser::new())
        }),
        (WindowsKioskLocalGroup::ODATA_TYPE, || {
            Self::LocalGroup(WindowsKioskLocalGroup::new())
        }),
        (WindowsKioskLocalUser::ODATA_TYPE, || {
            Self::LocalUser(WindowsKioskLocalUser::new())
        }),
        (WindowsKioskVisitor::ODATA_TYPE, || Self::Visitor(WindowsKioskVisitor::new())),
    ];

    fn fallback() -> Self {
        Self::Base(WindowsKioskUser::new())
    }
}

impl WindowsKioskUserKind {
    pub fn as_base(&self) -> &WindowsKioskUser {
        match self {
            Self::Base(inner) => inner,
            Self::ActiveDirectoryGroup(inner) => inner.base(),
            Self::Autologon(inner) => inner.base(),
            Self::AzureAdGroup(inner) => inner.base(),
            Self::AzureAdUser(inner) => inner.base(),
            Self::LocalGroup(inner) => inner.base(),
            Self::LocalUser(inner) => inner.base(),
            Self::Visitor(inner) => inner.base(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().odata_type()
    }
}

impl Default for WindowsKioskUserKind {
    fn default() -> Self {
        Self::fallback()
    }
}
