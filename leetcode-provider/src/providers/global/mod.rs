//! LeetCode Global (leetcode.com) adapter

mod provider;
mod queries;
mod types;

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpGraphQlClient;
use crate::traits::GraphQlClient;
use crate::types::{Credential, SiteVariant};

pub(crate) use types::{GlobalArticleConnection, GlobalArticleDetail, GlobalArticleNode};

/// Default solution ordering on leetcode.com.
pub(crate) const DEFAULT_ORDER_BY: &str = "HOT";

/// LeetCode Global service
pub struct GlobalService {
    pub(crate) client: Arc<dyn GraphQlClient>,
    pub(crate) credential: Credential,
}

impl GlobalService {
    /// Service talking to leetcode.com over HTTP.
    pub fn new(credential: Credential) -> Result<Self> {
        let client = HttpGraphQlClient::new(SiteVariant::Global, credential.clone())?;
        Ok(Self::with_client(Arc::new(client), credential))
    }

    /// Service on top of an existing GraphQL client.
    pub fn with_client(client: Arc<dyn GraphQlClient>, credential: Credential) -> Self {
        Self { client, credential }
    }
}
