//! LeetCode CN `LeetCodeService` trait 实现

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    article_url, convert_tags, decode, normalize_contest_ranking, normalize_problem_list,
    problem_search_variables, progress_variables, run_query, solution_list_variables, take_field,
    DEFAULT_SUBMISSION_LIMIT,
};
use crate::traits::{GraphQlRequest, LeetCodeService, ServiceErrorContext};
use crate::types::{
    ArticleAuthor, ArticleLink, ContestRanking, NewNote, NoteList, NoteMutation, NoteSearchQuery,
    NoteUpdate, ProblemList, ProblemSearchQuery, ProgressQuery, SiteVariant, SolutionArticle,
    SolutionArticleDetail, SolutionArticleList, SolutionArticleQuery, SubmissionListQuery,
};

use super::types::{CnArticleLink, CnAuthor};
use super::{
    queries, ChinaService, CnArticleConnection, CnArticleDetail, CnArticleNode, DEFAULT_NOTE_LIMIT,
    DEFAULT_NOTE_ORDER, DEFAULT_ORDER_BY, QUESTION_NOTE_TYPE,
};

impl ServiceErrorContext for ChinaService {
    fn provider_name(&self) -> &'static str {
        SiteVariant::China.id()
    }
}

impl ChinaService {
    async fn query(
        &self,
        operation_name: &'static str,
        query: &'static str,
        variables: Value,
        subject: &str,
    ) -> Result<Value> {
        run_query(
            self.client.as_ref(),
            self.provider_name(),
            GraphQlRequest::new(operation_name, query, variables),
            subject,
        )
        .await
    }

    fn require_auth(&self, operation: &str) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            log::warn!("[cn] {operation} rejected: not authenticated");
            Err(self.auth_required(operation))
        }
    }

    /// 笔记查询结果为 `null` 时视为空列表
    fn decode_notes(&self, raw: Value) -> Result<NoteList> {
        if raw.is_null() {
            return Ok(NoteList::empty());
        }
        decode(self, raw)
    }

    fn decode_mutation(&self, raw: Value, operation: &str, subject: &str) -> Result<NoteMutation> {
        if raw.is_null() {
            log::error!("[cn] {operation} ({subject}) returned no payload");
            return Err(ProviderError::UpstreamFailure {
                provider: self.provider_name().to_string(),
                operation: operation.to_string(),
                detail: "empty mutation payload".to_string(),
            });
        }
        decode(self, raw)
    }

    fn convert_author(author: CnAuthor) -> ArticleAuthor {
        let profile = author.profile;
        let (real_name, user_slug, user_avatar) = match profile {
            Some(p) => (p.real_name, p.user_slug, p.user_avatar),
            None => (None, None, None),
        };
        ArticleAuthor {
            username: author.username,
            real_name,
            user_slug,
            user_avatar,
        }
    }

    fn convert_link(link: CnArticleLink) -> ArticleLink {
        ArticleLink {
            title: link.title,
            slug: link.slug,
            topic_id: None,
        }
    }

    /// 将 CN 题解节点转换为 `SolutionArticle`，链接使用 `topic.id`
    pub(crate) fn node_to_article(node: CnArticleNode, question_slug: &str) -> SolutionArticle {
        let slug = node.slug.unwrap_or_default();
        let topic_id = node.topic.and_then(|t| t.id);
        SolutionArticle {
            article_url: article_url(
                SiteVariant::China.base_url(),
                question_slug,
                topic_id.as_deref(),
                &slug,
            ),
            uuid: node.uuid,
            title: node.title.unwrap_or_default(),
            slug,
            summary: node.summary,
            topic_id,
            can_see: node.can_see.unwrap_or(false),
            author: node.author.map(Self::convert_author),
            tags: convert_tags(node.tags),
            created_at: node.created_at,
            hit_count: node.hit_count,
            upvote_count: node.upvote_count,
        }
    }

    pub(crate) fn detail_to_article(detail: CnArticleDetail) -> SolutionArticleDetail {
        SolutionArticleDetail {
            title: detail.title.unwrap_or_default(),
            slug: detail.slug.unwrap_or_default(),
            content: detail.content.unwrap_or_default(),
            summary: detail.summary,
            topic_id: detail.topic.and_then(|t| t.id),
            author: detail.author.map(Self::convert_author),
            tags: convert_tags(detail.tags),
            created_at: detail.created_at,
            hit_count: detail.hit_count,
            question_slug: detail.question.and_then(|q| q.title_slug),
            prev: detail.prev.map(Self::convert_link),
            next: detail.next.map(Self::convert_link),
        }
    }
}

#[async_trait]
impl LeetCodeService for ChinaService {
    async fn fetch_user_profile(&self, username: &str) -> Result<Value> {
        self.query(
            "userProfilePublicProfile",
            queries::USER_PROFILE,
            json!({ "userSlug": username }),
            username,
        )
        .await
    }

    async fn fetch_user_status(&self) -> Result<Value> {
        self.require_auth("fetch user status")?;
        let mut data = self
            .query("userStatus", queries::USER_STATUS, json!({}), "current user")
            .await?;
        Ok(take_field(&mut data, "userStatus"))
    }

    async fn fetch_user_all_submissions(&self, query: &SubmissionListQuery) -> Result<Value> {
        self.require_auth("fetch user submissions")?;
        let variables = json!({
            "offset": query.offset.unwrap_or(0),
            "limit": query.limit.unwrap_or(DEFAULT_SUBMISSION_LIMIT),
            "lastKey": query.last_key,
            "questionSlug": query.question_slug,
            "lang": query.lang,
            "status": query.status,
        });
        let subject = query.question_slug.as_deref().unwrap_or("all problems");
        let mut data = self
            .query("submissionList", queries::SUBMISSION_LIST, variables, subject)
            .await?;
        Ok(take_field(&mut data, "submissionList"))
    }

    async fn fetch_user_recent_submissions(
        &self,
        _username: &str,
        _limit: Option<u32>,
    ) -> Result<Value> {
        Err(self.unsupported("Recent submissions"))
    }

    /// CN 仅支持最近 AC 记录，且不接受数量限制
    async fn fetch_user_recent_ac_submissions(
        &self,
        username: &str,
        _limit: Option<u32>,
    ) -> Result<Value> {
        let mut data = self
            .query(
                "recentAcSubmissions",
                queries::RECENT_AC_SUBMISSIONS,
                json!({ "userSlug": username }),
                username,
            )
            .await?;
        Ok(take_field(&mut data, "recentACSubmissions"))
    }

    async fn fetch_user_submission_detail(&self, id: u64) -> Result<Value> {
        self.require_auth("fetch submission details")?;
        let subject = id.to_string();
        let mut data = self
            .query(
                "submissionDetails",
                queries::SUBMISSION_DETAIL,
                json!({ "submissionId": subject }),
                &subject,
            )
            .await?;
        match take_field(&mut data, "submissionDetail") {
            Value::Null => Err(self.not_found("submission", subject)),
            detail => Ok(detail),
        }
    }

    async fn fetch_user_contest_ranking(
        &self,
        username: &str,
        attended: bool,
    ) -> Result<ContestRanking> {
        let data = self
            .query(
                "userContestRankingInfo",
                queries::CONTEST_RANKING,
                json!({ "userSlug": username }),
                username,
            )
            .await?;
        normalize_contest_ranking(self, data, attended)
    }

    async fn fetch_daily_challenge(&self) -> Result<Value> {
        let mut data = self
            .query("questionOfToday", queries::DAILY_CHALLENGE, json!({}), "today")
            .await?;
        Ok(take_field(&mut data, "todayRecord"))
    }

    async fn fetch_problem(&self, title_slug: &str) -> Result<Value> {
        let mut data = self
            .query(
                "questionData",
                queries::PROBLEM,
                json!({ "titleSlug": title_slug }),
                title_slug,
            )
            .await?;
        match take_field(&mut data, "question") {
            Value::Null => Err(self.not_found("problem", title_slug)),
            question => Ok(question),
        }
    }

    async fn search_problems(&self, query: &ProblemSearchQuery) -> Result<ProblemList> {
        let mut data = self
            .query(
                "problemsetQuestionList",
                queries::PROBLEM_SEARCH,
                problem_search_variables(query),
                query.category.as_deref().unwrap_or("all"),
            )
            .await?;
        normalize_problem_list(
            self,
            take_field(&mut data, "problemsetQuestionList"),
            query.offset,
        )
    }

    async fn fetch_user_progress_question_list(&self, query: &ProgressQuery) -> Result<Value> {
        self.require_auth("fetch user progress question list")?;
        let mut data = self
            .query(
                "userProgressQuestionList",
                queries::PROGRESS_QUESTION_LIST,
                progress_variables(query),
                "current user",
            )
            .await?;
        Ok(take_field(&mut data, "userProgressQuestionList"))
    }

    async fn fetch_question_solution_articles(
        &self,
        question_slug: &str,
        query: &SolutionArticleQuery,
    ) -> Result<SolutionArticleList> {
        let mut data = self
            .query(
                "questionTopicsList",
                queries::SOLUTION_ARTICLES,
                solution_list_variables(question_slug, query, DEFAULT_ORDER_BY),
                question_slug,
            )
            .await?;

        let raw = take_field(&mut data, "questionSolutionArticles");
        if raw.is_null() {
            return Ok(SolutionArticleList::empty());
        }
        let connection: CnArticleConnection = decode(self, raw)?;

        let articles = connection
            .edges
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|edge| edge.node)
            .filter(|node| node.can_see.unwrap_or(false))
            .map(|node| Self::node_to_article(node, question_slug))
            .collect();

        Ok(SolutionArticleList {
            total_num: connection.total_num.unwrap_or(0),
            has_next_page: connection
                .page_info
                .and_then(|p| p.has_next_page)
                .unwrap_or(false),
            articles,
        })
    }

    async fn fetch_solution_article_detail(
        &self,
        identifier: &str,
    ) -> Result<SolutionArticleDetail> {
        let mut data = self
            .query(
                "discussTopic",
                queries::SOLUTION_ARTICLE_DETAIL,
                json!({ "slug": identifier }),
                identifier,
            )
            .await?;
        match take_field(&mut data, "solutionArticle") {
            Value::Null => Err(self.not_found("solution article", identifier)),
            raw => {
                let detail: CnArticleDetail = decode(self, raw)?;
                Ok(Self::detail_to_article(detail))
            }
        }
    }

    async fn fetch_user_notes(&self, query: &NoteSearchQuery) -> Result<NoteList> {
        self.require_auth("fetch user notes")?;
        let variables = json!({
            "aggregateType": query.aggregate_type,
            "keyword": query.keyword,
            "orderBy": query.order_by.as_deref().unwrap_or(DEFAULT_NOTE_ORDER),
            "limit": query.limit.unwrap_or(DEFAULT_NOTE_LIMIT),
            "skip": query.skip.unwrap_or(0),
        });
        let subject = query.keyword.as_deref().unwrap_or("all notes");
        let mut data = self
            .query("noteAggregateNote", queries::NOTE_AGGREGATE, variables, subject)
            .await?;
        self.decode_notes(take_field(&mut data, "noteAggregateNote"))
    }

    async fn fetch_notes_by_question_id(
        &self,
        question_id: &str,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<NoteList> {
        self.require_auth("fetch notes for a question")?;
        let variables = json!({
            "noteType": QUESTION_NOTE_TYPE,
            "questionId": question_id,
            "limit": limit.unwrap_or(DEFAULT_NOTE_LIMIT),
            "skip": skip.unwrap_or(0),
        });
        let mut data = self
            .query(
                "noteOneTargetCommonNote",
                queries::NOTE_BY_QUESTION_ID,
                variables,
                question_id,
            )
            .await?;
        self.decode_notes(take_field(&mut data, "noteOneTargetCommonNote"))
    }

    async fn create_user_note(&self, note: &NewNote) -> Result<NoteMutation> {
        self.require_auth("create a note")?;
        let variables = json!({
            "content": note.content,
            "noteType": note.note_type,
            "targetId": note.target_id,
            "summary": note.summary,
        });
        let mut data = self
            .query(
                "noteCreateCommonNote",
                queries::NOTE_CREATE,
                variables,
                &note.target_id,
            )
            .await?;
        self.decode_mutation(
            take_field(&mut data, "noteCreateCommonNote"),
            "noteCreateCommonNote",
            &note.target_id,
        )
    }

    async fn update_user_note(&self, update: &NoteUpdate) -> Result<NoteMutation> {
        self.require_auth("update a note")?;
        let variables = json!({
            "noteId": update.note_id,
            "content": update.content,
            "summary": update.summary,
        });
        let mut data = self
            .query(
                "noteUpdateUserNote",
                queries::NOTE_UPDATE,
                variables,
                &update.note_id,
            )
            .await?;
        self.decode_mutation(
            take_field(&mut data, "noteUpdateUserNote"),
            "noteUpdateUserNote",
            &update.note_id,
        )
    }

    fn is_authenticated(&self) -> bool {
        self.credential.is_complete()
    }

    fn variant(&self) -> SiteVariant {
        SiteVariant::China
    }
}
