use crate::error::Result;
use crate::models::{additional_data_holder, base_accessors};
use crate::serialization::{JsonParseNode, JsonSerializationWriter, Parsable};

use super::{BaseItem, SharepointIds, SiteCollection, SitePage};

/// A SharePoint site. Relationships such as `drive`, `lists` or `columns`
/// are not declared and travel as additional data.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    base: BaseItem,
    display_name: Option<String>,
    pages: Option<Vec<SitePage>>,
    sharepoint_ids: Option<SharepointIds>,
    site_collection: Option<SiteCollection>,
    sites: Option<Vec<Site>>,
}

impl Site {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.site";

    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.base_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            display_name: None,
            pages: None,
            sharepoint_ids: None,
            site_collection: None,
            sites: None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn pages(&self) -> Option<&[SitePage]> {
        self.pages.as_deref()
    }

    pub fn set_pages(&mut self, value: Option<Vec<SitePage>>) {
        self.pages = value;
    }

    pub fn sharepoint_ids(&self) -> Option<&SharepointIds> {
        self.sharepoint_ids.as_ref()
    }

    pub fn set_sharepoint_ids(&mut self, value: Option<SharepointIds>) {
        self.sharepoint_ids = value;
    }

    /// Present only on the root site of a site collection.
    pub fn site_collection(&self) -> Option<&SiteCollection> {
        self.site_collection.as_ref()
    }

    pub fn set_site_collection(&mut self, value: Option<SiteCollection>) {
        self.site_collection = value;
    }

    /// Subsites.
    pub fn sites(&self) -> Option<&[Site]> {
        self.sites.as_deref()
    }

    pub fn set_sites(&mut self, value: Option<Vec<Site>>) {
        self.sites = value;
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(Site => BaseItem);
additional_data_holder!(Site => base);

impl Parsable for Site {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "displayName" => self.display_name = node.get_string_value()?,
            "pages" => self.pages = node.get_collection_of_object_values()?,
            "sharepointIds" => self.sharepoint_ids = node.get_object_value()?,
            "siteCollection" => self.site_collection = node.get_object_value()?,
            "sites" => self.sites = node.get_collection_of_object_values()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_collection_of_object_values("pages", self.pages.as_deref())?;
        writer.write_object_value("sharepointIds", self.sharepoint_ids.as_ref())?;
        writer.write_object_value("siteCollection", self.site_collection.as_ref())?;
        writer.write_collection_of_object_values("sites", self.sites.as_deref())?;
        Ok(())
    }
}
