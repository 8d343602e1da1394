use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{
    ContestRanking, NewNote, NoteList, NoteMutation, NoteSearchQuery, NoteUpdate, ProblemList,
    ProblemSearchQuery, ProgressQuery, SiteVariant, SolutionArticleDetail, SolutionArticleList,
    SolutionArticleQuery, SubmissionListQuery,
};

/// A single GraphQL operation sent upstream.
///
/// Serializes to the standard `{operationName, query, variables}` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(operation_name: &'static str, query: &'static str, variables: Value) -> Self {
        Self {
            operation_name,
            query,
            variables,
        }
    }
}

/// Upstream GraphQL capability.
///
/// Implementations return the response's `data` object (or `Value::Null`
/// when absent). Transport failures, HTTP error statuses and a non-empty
/// GraphQL `errors` array are reported as [`ProviderError::UpstreamFailure`].
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value>;
}

/// 服务错误构造 Trait（内部使用）
/// 各站点适配器实现此 trait，统一错误中的 `provider` 字段
pub(crate) trait ServiceErrorContext {
    /// 返回站点标识符
    fn provider_name(&self) -> &'static str;

    /// 快捷方法：需要登录
    fn auth_required(&self, operation: &str) -> ProviderError {
        ProviderError::AuthenticationRequired {
            provider: self.provider_name().to_string(),
            operation: operation.to_string(),
        }
    }

    /// 快捷方法：站点不支持该功能
    fn unsupported(&self, feature: &str) -> ProviderError {
        ProviderError::UnsupportedOperation {
            provider: self.provider_name().to_string(),
            feature: feature.to_string(),
        }
    }

    /// 快捷方法：实体不存在
    fn not_found(&self, entity: &str, identifier: impl ToString) -> ProviderError {
        ProviderError::NotFound {
            provider: self.provider_name().to_string(),
            entity: entity.to_string(),
            identifier: identifier.to_string(),
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Unified LeetCode service contract.
///
/// Implemented by [`GlobalService`](crate::GlobalService) and
/// [`ChinaService`](crate::ChinaService). Every operation is implemented by
/// both sites; those a site does not offer fail with
/// [`ProviderError::UnsupportedOperation`] without contacting upstream.
///
/// Operations marked *authenticated* fail with
/// [`ProviderError::AuthenticationRequired`] before any request is sent when
/// [`is_authenticated`](Self::is_authenticated) is `false`.
#[async_trait]
pub trait LeetCodeService: Send + Sync {
    /// Public profile of `username`.
    async fn fetch_user_profile(&self, username: &str) -> Result<Value>;

    /// Signed-in user's status. *Authenticated.*
    async fn fetch_user_status(&self) -> Result<Value>;

    /// Signed-in user's submissions. *Authenticated.*
    async fn fetch_user_all_submissions(&self, query: &SubmissionListQuery) -> Result<Value>;

    /// Recent submissions of any status. Global only.
    async fn fetch_user_recent_submissions(
        &self,
        username: &str,
        limit: Option<u32>,
    ) -> Result<Value>;

    /// Recent accepted submissions. CN ignores `limit`.
    async fn fetch_user_recent_ac_submissions(
        &self,
        username: &str,
        limit: Option<u32>,
    ) -> Result<Value>;

    /// One submission with code and runtime stats. *Authenticated.*
    async fn fetch_user_submission_detail(&self, id: u64) -> Result<Value>;

    /// Contest rating and history; with `attended`, history entries the user
    /// did not take part in are dropped.
    async fn fetch_user_contest_ranking(
        &self,
        username: &str,
        attended: bool,
    ) -> Result<ContestRanking>;

    async fn fetch_daily_challenge(&self) -> Result<Value>;

    async fn fetch_problem(&self, title_slug: &str) -> Result<Value>;

    async fn search_problems(&self, query: &ProblemSearchQuery) -> Result<ProblemList>;

    /// Signed-in user's per-question progress. *Authenticated.*
    async fn fetch_user_progress_question_list(&self, query: &ProgressQuery) -> Result<Value>;

    async fn fetch_question_solution_articles(
        &self,
        question_slug: &str,
        query: &SolutionArticleQuery,
    ) -> Result<SolutionArticleList>;

    /// Global looks up by topic id, CN by article slug.
    async fn fetch_solution_article_detail(
        &self,
        identifier: &str,
    ) -> Result<SolutionArticleDetail>;

    /// *Authenticated.* CN only.
    async fn fetch_user_notes(&self, query: &NoteSearchQuery) -> Result<NoteList>;

    /// *Authenticated.* CN only.
    async fn fetch_notes_by_question_id(
        &self,
        question_id: &str,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<NoteList>;

    /// *Authenticated.* CN only.
    async fn create_user_note(&self, note: &NewNote) -> Result<NoteMutation>;

    /// *Authenticated.* CN only.
    async fn update_user_note(&self, update: &NoteUpdate) -> Result<NoteMutation>;

    /// Session and CSRF token are both present.
    fn is_authenticated(&self) -> bool;

    fn variant(&self) -> SiteVariant;

    fn is_china(&self) -> bool {
        self.variant() == SiteVariant::China
    }
}
