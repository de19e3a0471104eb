use crate::error::Result;
use crate::models::{additional_data_holder, base_accessors};
use crate::serialization::{JsonParseNode, JsonSerializationWriter, Parsable};

use super::{
    BaseItem, ContentTypeInfo, PageLayoutType, PagePromotionType, PublicationFacet,
    ReactionsFacet,
};

/// A modern page in a SharePoint site.
///
/// `canvasLayout`, `titleArea` and `webParts` are not declared; they round
/// trip through additional data.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePage {
    base: BaseItem,
    content_type: Option<ContentTypeInfo>,
    page_layout: Option<PageLayoutType>,
    promotion_kind: Option<PagePromotionType>,
    publishing_state: Option<PublicationFacet>,
    reactions: Option<ReactionsFacet>,
    show_comments: Option<bool>,
    show_recommended_pages: Option<bool>,
    thumbnail_web_url: Option<String>,
    title: Option<String>,
}

impl SitePage {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sitePage";

    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.base_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        Self {
            base,
            content_type: None,
            page_layout: None,
            promotion_kind: None,
            publishing_state: None,
            reactions: None,
            show_comments: None,
            show_recommended_pages: None,
            thumbnail_web_url: None,
            title: None,
        }
    }

    pub fn content_type(&self) -> Option<&ContentTypeInfo> {
        self.content_type.as_ref()
    }

    pub fn set_content_type(&mut self, value: Option<ContentTypeInfo>) {
        self.content_type = value;
    }

    pub fn page_layout(&self) -> Option<PageLayoutType> {
        self.page_layout
    }

    pub fn set_page_layout(&mut self, value: Option<PageLayoutType>) {
        self.page_layout = value;
    }

    pub fn promotion_kind(&self) -> Option<PagePromotionType> {
        self.promotion_kind
    }

    pub fn set_promotion_kind(&mut self, value: Option<PagePromotionType>) {
        self.promotion_kind = value;
    }

    pub fn publishing_state(&self) -> Option<&PublicationFacet> {
        self.publishing_state.as_ref()
    }

    pub fn set_publishing_state(&mut self, value: Option<PublicationFacet>) {
        self.publishing_state = value;
    }

    pub fn reactions(&self) -> Option<&ReactionsFacet> {
        self.reactions.as_ref()
    }

    pub fn set_reactions(&mut self, value: Option<ReactionsFacet>) {
        self.reactions = value;
    }

    pub fn show_comments(&self) -> Option<bool> {
        self.show_comments
    }

    pub fn set_show_comments(&mut self, value: Option<bool>) {
        self.show_comments = value;
    }

    pub fn show_recommended_pages(&self) -> Option<bool> {
        self.show_recommended_pages
    }

    pub fn set_show_recommended_pages(&mut self, value: Option<bool>) {
        self.show_recommended_pages = value;
    }

    pub fn thumbnail_web_url(&self) -> Option<&str> {
        self.thumbnail_web_url.as_deref()
    }

    pub fn set_thumbnail_web_url(&mut self, value: Option<String>) {
        self.thumbnail_web_url = value;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, value: Option<String>) {
        self.title = value;
    }
}

impl Default for SitePage {
    fn default() -> Self {
        Self::new()
    }
}

base_accessors!(SitePage => BaseItem);
additional_data_holder!(SitePage => base);

impl Parsable for SitePage {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field(&mut self, key: &str, node: &JsonParseNode<'_>) -> Result<bool> {
        match key {
            "contentType" => self.content_type = node.get_object_value()?,
            "pageLayout" => self.page_layout = node.get_enum_value()?,
            "promotionKind" => self.promotion_kind = node.get_enum_value()?,
            "publishingState" => self.publishing_state = node.get_object_value()?,
            "reactions" => self.reactions = node.get_object_value()?,
            "showComments" => self.show_comments = node.get_bool_value()?,
            "showRecommendedPages" => self.show_recommended_pages = node.get_bool_value()?,
            "thumbnailWebUrl" => self.thumbnail_web_url = node.get_string_value()?,
            "title" => self.title = node.get_string_value()?,
            _ => return self.base.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<()> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("contentType", self.content_type.as_ref())?;
        writer.write_enum_value("pageLayout", self.page_layout)?;
        writer.write_enum_value("promotionKind", self.promotion_kind)?;
        writer.write_object_value("publishingState", self.publishing_state.as_ref())?;
        writer.write_object_value("reactions", self.reactions.as_ref())?;
        writer.write_bool_value("showComments", self.show_comments)?;
        writer.write_bool_value("showRecommendedPages", self.show_recommended_pages)?;
        writer.write_string_value("thumbnailWebUrl", self.thumbnail_web_url.as_deref())?;
        writer.write_string_value("title", self.title.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::serialization::{AdditionalDataHolder, from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn news_post_round_trips() {
        let input = json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "id": "fa7a4b8c-3b1e-4a0f-9a0e-5b1f9c1f2d3e",
            "name": "Quarterly-update.aspx",
            "eTag": "\"{FA7A4B8C},5\"",
            "lastModifiedDateTime": "2023-04-11T09:30:00Z",
            "title": "Quarterly update",
            "pageLayout": "article",
            "promotionKind": "newsPost",
            "showComments": true,
            "showRecommendedPages": false,
            "contentType": {"id": "0x0101009D1CB255DA76424F860D91F20E6C4118", "name": "Site Page"},
            "publishingState": {"level": "published", "versionId": "2.0"},
            "reactions": {"commentCount": 3, "likeCount": 12},
        });
        let page: SitePage = from_json_value(&input).unwrap();
        assert_eq!(page.page_layout(), Some(PageLayoutType::Article));
        assert_eq!(page.promotion_kind(), Some(PagePromotionType::NewsPost));
        assert_eq!(page.publishing_state().unwrap().level(), Some("published"));
        assert_eq!(page.reactions().unwrap().like_count(), Some(12));
        assert_eq!(page.base().e_tag(), Some("\"{FA7A4B8C},5\""));
        assert_eq!(to_json_value(&page).unwrap(), input);
    }

    #[test]
    fn null_discriminator_keeps_the_page_stamp() {
        let page: SitePage =
            from_json_value(&json!({"@odata.type": null, "title": "Home"})).unwrap();
        assert_eq!(page.base().base().odata_type(), Some(SitePage::ODATA_TYPE));
    }

    #[test]
    fn canvas_layout_is_kept_verbatim() {
        let canvas = json!({
            "horizontalSections": [{"layout": "oneColumn", "columns": [{"width": 12}]}],
        });
        let input = json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "canvasLayout": canvas,
            "webParts": [],
        });
        let page: SitePage = from_json_value(&input).unwrap();
        assert_eq!(page.additional_data().get("canvasLayout"), Some(&canvas));
        assert_eq!(to_json_value(&page).unwrap(), input);
    }

    #[test]
    fn unknown_page_layout_is_rejected() {
        let err = from_json_value::<SitePage>(&json!({"pageLayout": "gallery"})).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedEnumValue { .. }), "got {err:?}");
    }
}
