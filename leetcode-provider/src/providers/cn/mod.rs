//! LeetCode CN (leetcode.cn) adapter

mod provider;
mod queries;
mod types;

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpGraphQlClient;
use crate::traits::GraphQlClient;
use crate::types::{Credential, SiteVariant};

pub(crate) use types::{CnArticleConnection, CnArticleDetail, CnArticleNode};

/// Default solution ordering on leetcode.cn.
pub(crate) const DEFAULT_ORDER_BY: &str = "DEFAULT";
/// 笔记默认排序
pub(crate) const DEFAULT_NOTE_ORDER: &str = "DESCENDING";
/// 笔记默认单页条数
pub(crate) const DEFAULT_NOTE_LIMIT: u32 = 20;
/// 按题目查询笔记时使用的笔记类型
pub(crate) const QUESTION_NOTE_TYPE: &str = "COMMON_QUESTION";

/// LeetCode CN service
pub struct ChinaService {
    pub(crate) client: Arc<dyn GraphQlClient>,
    pub(crate) credential: Credential,
}

impl ChinaService {
    /// Service talking to leetcode.cn over HTTP.
    pub fn new(credential: Credential) -> Result<Self> {
        let client = HttpGraphQlClient::new(SiteVariant::China, credential.clone())?;
        Ok(Self::with_client(Arc::new(client), credential))
    }

    /// Service on top of an existing GraphQL client.
    pub fn with_client(client: Arc<dyn GraphQlClient>, credential: Credential) -> Self {
        Self { client, credential }
    }
}
