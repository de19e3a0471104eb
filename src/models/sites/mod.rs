//! SharePoint sites and their pages.

use crate::enum_codec::graph_enum;

mod base_item;
mod facets;
mod site;
mod site_page;

pub use base_item::{BaseItem, BaseItemKind, ItemReference};
pub use facets::{ContentTypeInfo, PublicationFacet, ReactionsFacet, SharepointIds, SiteCollection};
pub use site::Site;
pub use site_page::SitePage;

graph_enum! {
    /// Layout of a SharePoint page.
    pub enum PageLayoutType: "pageLayoutType" {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Whether a page is a plain page or promoted as news.
    pub enum PagePromotionType: "pagePromotionType" {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}
