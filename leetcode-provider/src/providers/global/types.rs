use serde::Deserialize;

use crate::providers::common::RawTag;
use crate::utils::serde_helpers;

// ============ 题解列表 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalArticleConnection {
    pub total_num: Option<u64>,
    pub page_info: Option<GlobalPageInfo>,
    pub edges: Option<Vec<Option<GlobalArticleEdge>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPageInfo {
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct GlobalArticleEdge {
    pub node: Option<GlobalArticleNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalArticleNode {
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub author: Option<GlobalAuthor>,
    pub created_at: Option<String>,
    pub can_see: Option<bool>,
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub topic_id: Option<String>,
    pub hit_count: Option<u64>,
    pub reactions: Option<Vec<GlobalReaction>>,
    pub tags: Option<Vec<RawTag>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAuthor {
    pub real_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_slug: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalReaction {
    pub count: Option<u64>,
    pub reaction_type: Option<String>,
}

// ============ 题解详情 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalArticleDetail {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub author: Option<GlobalAuthor>,
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub topic_id: Option<String>,
    pub hit_count: Option<u64>,
    pub tags: Option<Vec<RawTag>>,
    pub prev: Option<GlobalArticleLink>,
    pub next: Option<GlobalArticleLink>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalArticleLink {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub topic_id: Option<String>,
}
