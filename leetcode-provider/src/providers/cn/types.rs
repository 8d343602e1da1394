use serde::Deserialize;

use crate::providers::common::RawTag;
use crate::utils::serde_helpers;

// ============ 题解列表 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnArticleConnection {
    pub total_num: Option<u64>,
    pub page_info: Option<CnPageInfo>,
    pub edges: Option<Vec<Option<CnArticleEdge>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnPageInfo {
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CnArticleEdge {
    pub node: Option<CnArticleNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnArticleNode {
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub can_see: Option<bool>,
    pub upvote_count: Option<u64>,
    pub hit_count: Option<u64>,
    pub created_at: Option<String>,
    pub tags: Option<Vec<RawTag>>,
    pub author: Option<CnAuthor>,
    pub topic: Option<CnTopic>,
}

#[derive(Debug, Deserialize)]
pub struct CnAuthor {
    pub username: Option<String>,
    pub profile: Option<CnAuthorProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnAuthorProfile {
    pub user_avatar: Option<String>,
    pub user_slug: Option<String>,
    pub real_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CnTopic {
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub id: Option<String>,
}

// ============ 题解详情 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnArticleDetail {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub created_at: Option<String>,
    pub hit_count: Option<u64>,
    pub tags: Option<Vec<RawTag>>,
    pub author: Option<CnAuthor>,
    pub topic: Option<CnTopic>,
    pub question: Option<CnArticleQuestion>,
    pub prev: Option<CnArticleLink>,
    pub next: Option<CnArticleLink>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnArticleQuestion {
    pub title_slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CnArticleLink {
    pub slug: Option<String>,
    pub title: Option<String>,
}
