use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{Entity, additional_data_holder, base_accessors};
use crate::serialization::discriminator::delegate_kind;
use crate::serialization::{
    AdditionalData, Discriminated, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY,
    Parsable,
};

use super::{SharepointIds, Site, SitePage};

/// Fields shared by sites, lists, drive items and pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseItem {
    base: Entity,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    e_tag: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    name: Option<String>,
    parent_reference: Option<ItemReference>,
    web_url: Option<String>,
}

impl BaseItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Opaque version tag of the item.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    pub fn set_e_tag(&mut self, value: Option<String>) {
        self.e_tag = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn parent_reference(&self) -> Option<&ItemReference> {
        self.parent_reference.as_ref()
    }

    pub fn set_parent_reference(&mut self, value: Option<ItemReference>) {
        self.parent_reference = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }
}

base_accessors!(BaseItem => Entity);
additional_data_holder!(BaseItem => base);

impl Parsable for BaseItem {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "eTag" => self.e_tag = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "name" => self.name = node.get_string_value()?,
            "parentReference" => self.parent_reference = node.get_object_value()?,
            "webUrl" => self.web_url = node.get_string_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("eTag", self.e_tag.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_object_value("parentReference", self.parent_reference.as_ref())?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        Ok(())
    }
}

/// Location of an item's parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReference {
    additional_data: AdditionalData,
    drive_id: Option<String>,
    drive_type: Option<String>,
    id: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
    path: Option<String>,
    share_id: Option<String>,
    sharepoint_ids: Option<SharepointIds>,
    site_id: Option<String>,
}

impl ItemReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drive_id(&self) -> Option<&str> {
        self.drive_id.as_deref()
    }

    pub fn set_drive_id(&mut self, value: Option<String>) {
        self.drive_id = value;
    }

    /// `personal`, `business` or `documentLibrary`.
    pub fn drive_type(&self) -> Option<&str> {
        self.drive_type.as_deref()
    }

    pub fn set_drive_type(&mut self, value: Option<String>) {
        self.drive_type = value;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
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

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, value: Option<String>) {
        self.path = value;
    }

    pub fn share_id(&self) -> Option<&str> {
        self.share_id.as_deref()
    }

    pub fn set_share_id(&mut self, value: Option<String>) {
        self.share_id = value;
    }

    pub fn sharepoint_ids(&self) -> Option<&SharepointIds> {
        self.sharepoint_ids.as_ref()
    }

    pub fn set_sharepoint_ids(&mut self, value: Option<SharepointIds>) {
        self.sharepoint_ids = value;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn set_site_id(&mut self, value: Option<String>) {
        self.site_id = value;
    }
}

additional_data_holder!(ItemReference);

impl Parsable for ItemReference {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "driveId" => self.drive_id = node.get_string_value()?,
            "driveType" => self.drive_type = node.get_string_value()?,
            "id" => self.id = node.get_string_value()?,
            "name" => self.name = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "path" => self.path = node.get_string_value()?,
            "shareId" => self.share_id = node.get_string_value()?,
            "sharepointIds" => self.sharepoint_ids = node.get_object_value()?,
            "siteId" => self.site_id = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("driveId", self.drive_id.as_deref())?;
        writer.write_string_value("driveType", self.drive_type.as_deref())?;
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("path", self.path.as_deref())?;
        writer.write_string_value("shareId", self.share_id.as_deref())?;
        writer.write_object_value("sharepointIds", self.sharepoint_ids.as_ref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        Ok(())
    }
}

/// A base item of any concrete type.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum BaseItemKind {
    Base(BaseItem),
    Site(Site),
    SitePage(SitePage),
}

delegate_kind!(BaseItemKind { Base, Site, SitePage });

impl Discriminated for BaseItemKind {
    const TYPE_NAME: &'static str = "baseItem";
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
        (Site::ODATA_TYPE, || Self::Site(Site::new())),
        (SitePage::ODATA_TYPE, || Self::SitePage(SitePage::new())),
    ];

    fn fallback() -> Self {
        Self::Base(BaseItem::new())
    }
}

impl BaseItemKind {
    pub fn as_base(&self) -> &BaseItem {
        match self {
            Self::Base(inner) => inner,
            Self::Site(inner) => inner.base(),
            Self::SitePage(inner) => inner.base(),
        }
    }

    pub fn as_base_mut(&mut self) -> &mut BaseItem {
        match self {
            Self::Base(inner) => inner,
            Self::Site(inner) => inner.base_mut(),
            Self::SitePage(inner) => inner.base_mut(),
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.as_base().base().odata_type()
    }
}

impl Default for BaseItemKind {
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
    fn kind_dispatches_site_and_page() {
        let site: BaseItemKind =
            from_json_value(&json!({"@odata.type": "#microsoft.graph.site", "name": "hr"}))
                .unwrap();
        assert!(matches!(site, BaseItemKind::Site(_)));
        assert_eq!(site.as_base().name(), Some("hr"));

        let page: BaseItemKind =
            from_json_value(&json!({"@odata.type": "#microsoft.graph.sitePage", "title": "Home"}))
                .unwrap();
        assert!(matches!(page, BaseItemKind::SitePage(_)));
    }

    #[test]
    fn drive_item_falls_back_with_its_fields_in_the_bag() {
        let input = json!({
            "@odata.type": "#microsoft.graph.driveItem",
            "id": "01ABC",
            "name": "budget.xlsx",
            "size": 18231,
            "parentReference": {
                "driveId": "b!xyz",
                "driveType": "documentLibrary",
                "path": "/drive/root:/Finance",
                "sharepointIds": {"listItemId": "4"},
            },
        });
        let item: BaseItemKind = from_json_value(&input).unwrap();
        let BaseItemKind::Base(base) = &item else {
            panic!("expected base item, got {item:?}");
        };
        let parent = base.parent_reference().unwrap();
        assert_eq!(parent.drive_type(), Some("documentLibrary"));
        assert_eq!(parent.sharepoint_ids().unwrap().list_item_id(), Some("4"));
        assert_eq!(item.odata_type(), Some("#microsoft.graph.driveItem"));
        assert_eq!(item.additional_data().get("size"), Some(&json!(18231)));
        assert_eq!(to_json_value(&item).unwrap(), input);
    }

    #[test]
    fn e_tag_keeps_its_wire_casing() {
        let input = json!({"eTag": "\"{4D0B1E2F},3\"", "webUrl": "https://contoso.sharepoint.com"});
        let item: BaseItem = from_json_value(&input).unwrap();
        assert_eq!(item.e_tag(), Some("\"{4D0B1E2F},3\""));
        assert_eq!(to_json_value(&item).unwrap(), input);
    }
}
