use crate::error::Result;
use crate::models::additional_data_holder;
use crate::serialization::{
    AdditionalData, JsonParseNode, JsonSerializationWriter, ODATA_TYPE_KEY, Parsable,
};

/// Content type of a list item or page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeInfo {
    additional_data: AdditionalData,
    id: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
}

impl ContentTypeInfo {
    pub fn new() -> Self {
        Self::default()
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
}

additional_data_holder!(ContentTypeInfo);

impl Parsable for ContentTypeInfo {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "id" => self.id = node.get_string_value()?,
            "name" => self.name = node.get_string_value()?,
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
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        Ok(())
    }
}

/// Publishing state of a page, e.g. `published` at version `2.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFacet {
    additional_data: AdditionalData,
    level: Option<String>,
    odata_type: Option<String>,
    version_id: Option<String>,
}

impl PublicationFacet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `published` or `checkout`.
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn set_level(&mut self, value: Option<String>) {
        self.level = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn set_version_id(&mut self, value: Option<String>) {
        self.version_id = value;
    }
}

additional_data_holder!(PublicationFacet);

impl Parsable for PublicationFacet {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "level" => self.level = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "versionId" => self.version_id = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("level", self.level.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("versionId", self.version_id.as_deref())?;
        Ok(())
    }
}

/// Comment, like and share counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionsFacet {
    additional_data: AdditionalData,
    comment_count: Option<i32>,
    like_count: Option<i32>,
    odata_type: Option<String>,
    share_count: Option<i32>,
}

impl ReactionsFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment_count(&self) -> Option<i32> {
        self.comment_count
    }

    pub fn set_comment_count(&mut self, value: Option<i32>) {
        self.comment_count = value;
    }

    pub fn like_count(&self) -> Option<i32> {
        self.like_count
    }

    pub fn set_like_count(&mut self, value: Option<i32>) {
        self.like_count = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn share_count(&self) -> Option<i32> {
        self.share_count
    }

    pub fn set_share_count(&mut self, value: Option<i32>) {
        self.share_count = value;
    }
}

additional_data_holder!(ReactionsFacet);

impl Parsable for ReactionsFacet {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "commentCount" => self.comment_count = node.get_i32_value()?,
            "likeCount" => self.like_count = node.get_i32_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "shareCount" => self.share_count = node.get_i32_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_i32_value("commentCount", self.comment_count)?;
        writer.write_i32_value("likeCount", self.like_count)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("shareCount", self.share_count)?;
        Ok(())
    }
}

/// Identifiers for SharePoint REST compatibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharepointIds {
    additional_data: AdditionalData,
    list_id: Option<String>,
    list_item_id: Option<String>,
    list_item_unique_id: Option<String>,
    odata_type: Option<String>,
    site_id: Option<String>,
    site_url: Option<String>,
    tenant_id: Option<String>,
    web_id: Option<String>,
}

impl SharepointIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }

    pub fn set_list_id(&mut self, value: Option<String>) {
        self.list_id = value;
    }

    /// Integer identifier of the item within its list, as a string.
    pub fn list_item_id(&self) -> Option<&str> {
        self.list_item_id.as_deref()
    }

    pub fn set_list_item_id(&mut self, value: Option<String>) {
        self.list_item_id = value;
    }

    pub fn list_item_unique_id(&self) -> Option<&str> {
        self.list_item_unique_id.as_deref()
    }

    pub fn set_list_item_unique_id(&mut self, value: Option<String>) {
        self.list_item_unique_id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn set_site_id(&mut self, value: Option<String>) {
        self.site_id = value;
    }

    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    pub fn set_site_url(&mut self, value: Option<String>) {
        self.site_url = value;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn set_tenant_id(&mut self, value: Option<String>) {
        self.tenant_id = value;
    }

    pub fn web_id(&self) -> Option<&str> {
        self.web_id.as_deref()
    }

    pub fn set_web_id(&mut self, value: Option<String>) {
        self.web_id = value;
    }
}

additional_data_holder!(SharepointIds);

impl Parsable for SharepointIds {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "listId" => self.list_id = node.get_string_value()?,
            "listItemId" => self.list_item_id = node.get_string_value()?,
            "listItemUniqueId" => self.list_item_unique_id = node.get_string_value()?,
            ODATA_TYPE_KEY => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "siteId" => self.site_id = node.get_string_value()?,
            "siteUrl" => self.site_url = node.get_string_value()?,
            "tenantId" => self.tenant_id = node.get_string_value()?,
            "webId" => self.web_id = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        writer.write_string_value("listId", self.list_id.as_deref())?;
        writer.write_string_value("listItemId", self.list_item_id.as_deref())?;
        writer.write_string_value("listItemUniqueId", self.list_item_unique_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        writer.write_string_value("siteUrl", self.site_url.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_string_value("webId", self.web_id.as_deref())?;
        Ok(())
    }
}

/// Site collection details, present on root sites only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollection {
    additional_data: AdditionalData,
    data_location_code: Option<String>,
    hostname: Option<String>,
    odata_type: Option<String>,
}

impl SiteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geographic region code of a multi-geo tenant.
    pub fn data_location_code(&self) -> Option<&str> {
        self.data_location_code.as_deref()
    }

    pub fn set_data_location_code(&mut self, value: Option<String>) {
        self.data_location_code = value;
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_hostname(&mut self, value: Option<String>) {
        self.hostname = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

additional_data_holder!(SiteCollection);

impl Parsable for SiteCollection {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "dataLocationCode" => self.data_location_code = node.get_string_value()?,
            "hostname" => self.hostname = node.get_string_value()?,
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
        writer.write_string_value("dataLocationCode", self.data_location_code.as_deref())?;
        writer.write_string_value("hostname", self.hostname.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn reactions_are_int32() {
        let input = json!({"commentCount": 3, "likeCount": 12, "shareCount": 0});
        let reactions: ReactionsFacet = from_json_value(&input).unwrap();
        assert_eq!(reactions.like_count(), Some(12));
        assert_eq!(reactions.share_count(), Some(0));
        assert_eq!(to_json_value(&reactions).unwrap(), input);

        assert!(from_json_value::<ReactionsFacet>(&json!({"likeCount": "12"})).is_err());
    }

    #[test]
    fn sharepoint_ids_round_trip() {
        let input = json!({
            "listId": "2d2244f2-5da4-4f5b-9b3d-6b1f8f7d0b1e",
            "listItemId": "7",
            "siteUrl": "https://contoso.sharepoint.com/sites/hr",
            "tenantId": "8a7b6c5d",
        });
        let ids: SharepointIds = from_json_value(&input).unwrap();
        assert_eq!(ids.list_item_id(), Some("7"));
        assert_eq!(to_json_value(&ids).unwrap(), input);
    }
}
