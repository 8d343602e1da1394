//! LeetCode Global `LeetCodeService` trait 实现

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Result;
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

use super::types::{GlobalArticleLink, GlobalAuthor};
use super::{
    queries, GlobalArticleConnection, GlobalArticleDetail, GlobalArticleNode, GlobalService,
    DEFAULT_ORDER_BY,
};

const NOTES_FEATURE: &str = "Notes";

impl ServiceErrorContext for GlobalService {
    fn provider_name(&self) -> &'static str {
        SiteVariant::Global.id()
    }
}

impl GlobalService {
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
            log::warn!("[global] {operation} rejected: not authenticated");
            Err(self.auth_required(operation))
        }
    }

    fn convert_author(author: GlobalAuthor) -> ArticleAuthor {
        ArticleAuthor {
            username: author.user_name,
            real_name: author.real_name,
            user_slug: author.user_slug,
            user_avatar: author.user_avatar,
        }
    }

    fn convert_link(link: GlobalArticleLink) -> ArticleLink {
        ArticleLink {
            title: link.title,
            slug: link.slug,
            topic_id: link.topic_id,
        }
    }

    /// 将 Global 题解节点转换为 `SolutionArticle`
    /// 点赞数取 `reactions` 中 `UPVOTE` 类型的计数
    pub(crate) fn node_to_article(node: GlobalArticleNode, question_slug: &str) -> SolutionArticle {
        let slug = node.slug.unwrap_or_default();
        let upvote_count = node.reactions.and_then(|reactions| {
            reactions
                .into_iter()
                .find(|r| r.reaction_type.as_deref() == Some("UPVOTE"))
                .and_then(|r| r.count)
        });
        SolutionArticle {
            article_url: article_url(
                SiteVariant::Global.base_url(),
                question_slug,
                node.topic_id.as_deref(),
                &slug,
            ),
            uuid: node.uuid,
            title: node.title.unwrap_or_default(),
            slug,
            summary: node.summary,
            topic_id: node.topic_id,
            can_see: node.can_see.unwrap_or(false),
            author: node.author.map(Self::convert_author),
            tags: convert_tags(node.tags),
            created_at: node.created_at,
            hit_count: node.hit_count,
            upvote_count,
        }
    }

    pub(crate) fn detail_to_article(detail: GlobalArticleDetail) -> SolutionArticleDetail {
        SolutionArticleDetail {
            title: detail.title.unwrap_or_default(),
            slug: detail.slug.unwrap_or_default(),
            content: detail.content.unwrap_or_default(),
            summary: detail.summary,
            topic_id: detail.topic_id,
            author: detail.author.map(Self::convert_author),
            tags: convert_tags(detail.tags),
            created_at: detail.created_at,
            hit_count: detail.hit_count,
            question_slug: None,
            prev: detail.prev.map(Self::convert_link),
            next: detail.next.map(Self::convert_link),
        }
    }
}

#[async_trait]
impl LeetCodeService for GlobalService {
    async fn fetch_user_profile(&self, username: &str) -> Result<Value> {
        self.query(
            "getUserProfile",
            queries::USER_PROFILE,
            json!({ "username": username }),
            username,
        )
        .await
    }

    async fn fetch_user_status(&self) -> Result<Value> {
        self.require_auth("fetch user status")?;
        let mut data = self
            .query("globalData", queries::USER_STATUS, json!({}), "current user")
            .await?;
        Ok(take_field(&mut data, "userStatus"))
    }

    async fn fetch_user_all_submissions(&self, query: &SubmissionListQuery) -> Result<Value> {
        self.require_auth("fetch user submissions")?;
        // leetcode.com's submissionList has no language or status filter
        if query.lang.is_some() || query.status.is_some() {
            log::debug!(
                "[global] submissionList ignores lang={:?} status={:?}",
                query.lang,
                query.status
            );
        }
        let variables = json!({
            "offset": query.offset.unwrap_or(0),
            "limit": query.limit.unwrap_or(DEFAULT_SUBMISSION_LIMIT),
            "lastKey": query.last_key,
            "questionSlug": query.question_slug,
        });
        let subject = query.question_slug.as_deref().unwrap_or("all problems");
        let mut data = self
            .query("submissionList", queries::SUBMISSION_LIST, variables, subject)
            .await?;
        let mut list = take_field(&mut data, "submissionList");
        let submissions = match take_field(&mut list, "submissions") {
            Value::Null => Value::Array(Vec::new()),
            other => other,
        };
        Ok(json!({ "submissions": submissions }))
    }

    async fn fetch_user_recent_submissions(
        &self,
        username: &str,
        limit: Option<u32>,
    ) -> Result<Value> {
        let mut data = self
            .query(
                "recentSubmissions",
                queries::RECENT_SUBMISSIONS,
                json!({ "username": username, "limit": limit }),
                username,
            )
            .await?;
        Ok(take_field(&mut data, "recentSubmissionList"))
    }

    async fn fetch_user_recent_ac_submissions(
        &self,
        username: &str,
        limit: Option<u32>,
    ) -> Result<Value> {
        let mut data = self
            .query(
                "recentAcSubmissions",
                queries::RECENT_AC_SUBMISSIONS,
                json!({ "username": username, "limit": limit }),
                username,
            )
            .await?;
        Ok(take_field(&mut data, "recentAcSubmissionList"))
    }

    async fn fetch_user_submission_detail(&self, id: u64) -> Result<Value> {
        self.require_auth("fetch submission details")?;
        let subject = id.to_string();
        let mut data = self
            .query(
                "submissionDetails",
                queries::SUBMISSION_DETAIL,
                json!({ "id": id }),
                &subject,
            )
            .await?;
        match take_field(&mut data, "submissionDetails") {
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
                json!({ "username": username }),
                username,
            )
            .await?;
        normalize_contest_ranking(self, data, attended)
    }

    async fn fetch_daily_challenge(&self) -> Result<Value> {
        let mut data = self
            .query("questionOfToday", queries::DAILY_CHALLENGE, json!({}), "today")
            .await?;
        Ok(take_field(&mut data, "activeDailyCodingChallengeQuestion"))
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
                "ugcArticleSolutionArticles",
                queries::SOLUTION_ARTICLES,
                solution_list_variables(question_slug, query, DEFAULT_ORDER_BY),
                question_slug,
            )
            .await?;

        let raw = take_field(&mut data, "ugcArticleSolutionArticles");
        if raw.is_null() {
            return Ok(SolutionArticleList::empty());
        }
        let connection: GlobalArticleConnection = decode(self, raw)?;

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
                "ugcArticleSolutionArticle",
                queries::SOLUTION_ARTICLE_DETAIL,
                json!({ "topicId": identifier }),
                identifier,
            )
            .await?;
        match take_field(&mut data, "ugcArticleSolutionArticle") {
            Value::Null => Err(self.not_found("solution article", identifier)),
            raw => {
                let detail: GlobalArticleDetail = decode(self, raw)?;
                Ok(Self::detail_to_article(detail))
            }
        }
    }

    async fn fetch_user_notes(&self, _query: &NoteSearchQuery) -> Result<NoteList> {
        Err(self.unsupported(NOTES_FEATURE))
    }

    async fn fetch_notes_by_question_id(
        &self,
        _question_id: &str,
        _limit: Option<u32>,
        _skip: Option<u32>,
    ) -> Result<NoteList> {
        Err(self.unsupported(NOTES_FEATURE))
    }

    async fn create_user_note(&self, _note: &NewNote) -> Result<NoteMutation> {
        Err(self.unsupported(NOTES_FEATURE))
    }

    async fn update_user_note(&self, _update: &NoteUpdate) -> Result<NoteMutation> {
        Err(self.unsupported(NOTES_FEATURE))
    }

    fn is_authenticated(&self) -> bool {
        self.credential.is_complete()
    }

    fn variant(&self) -> SiteVariant {
        SiteVariant::Global
    }
}
