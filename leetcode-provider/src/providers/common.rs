//! 站点适配器公共工具函数

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::traits::{GraphQlClient, GraphQlRequest, ServiceErrorContext};
use crate::types::{
    ArticleTag, ContestHistoryEntry, ContestRanking, ProblemList, ProblemSearchQuery,
    ProgressQuery, SolutionArticleQuery,
};

/// 单页默认条数
pub(crate) const DEFAULT_SUBMISSION_LIMIT: u32 = 20;
pub(crate) const DEFAULT_PROGRESS_LIMIT: u32 = 20;
pub(crate) const DEFAULT_SOLUTION_LIMIT: u32 = 5;

// ============ 请求执行 ============

/// 执行 GraphQL 请求，失败时记录操作名与关键标识后原样返回错误
pub(crate) async fn run_query(
    client: &dyn GraphQlClient,
    provider: &str,
    request: GraphQlRequest,
    subject: &str,
) -> Result<Value> {
    let operation = request.operation_name;
    client.execute(request).await.map_err(|e| {
        if e.is_expected() {
            log::warn!("[{provider}] {operation} ({subject}): {e}");
        } else {
            log::error!("[{provider}] {operation} ({subject}): {e}");
        }
        e
    })
}

// ============ 响应解析 ============

/// 取出 `data` 中的某个字段，缺失时返回 `Null`
pub(crate) fn take_field(data: &mut Value, key: &str) -> Value {
    data.get_mut(key).map(Value::take).unwrap_or(Value::Null)
}

/// 将 JSON 值反序列化为目标类型，失败时映射为 `ParseError`
pub(crate) fn decode<T, C>(ctx: &C, value: Value) -> Result<T>
where
    T: DeserializeOwned,
    C: ServiceErrorContext + ?Sized,
{
    serde_json::from_value(value).map_err(|e| {
        log::error!("[{}] Failed to decode response: {e}", ctx.provider_name());
        ctx.parse_error(e)
    })
}

// ============ 题目搜索 ============

/// `problemsetQuestionList` 的 `filters` 参数
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProblemFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
}

impl ProblemFilters {
    pub fn from_query(query: &ProblemSearchQuery) -> Self {
        Self {
            difficulty: query
                .difficulty
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_uppercase),
            tags: query.tags.clone(),
            search_keywords: query
                .search_keywords
                .clone()
                .filter(|k| !k.trim().is_empty()),
        }
    }
}

/// 构造题目搜索的完整 variables
pub(crate) fn problem_search_variables(query: &ProblemSearchQuery) -> Value {
    serde_json::json!({
        "categorySlug": query.category.as_deref().unwrap_or(""),
        "limit": query.limit,
        "skip": query.offset,
        "filters": ProblemFilters::from_query(query),
    })
}

/// 两个站点的题目列表结构一致（Global 通过别名对齐）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblemList {
    total: Option<u64>,
    has_more: Option<bool>,
    questions: Option<Vec<Value>>,
}

pub(crate) fn normalize_problem_list<C>(ctx: &C, raw: Value, offset: u32) -> Result<ProblemList>
where
    C: ServiceErrorContext + ?Sized,
{
    if raw.is_null() {
        return Ok(ProblemList::default());
    }
    let raw: RawProblemList = decode(ctx, raw)?;
    let questions = raw.questions.unwrap_or_default();
    let total = raw.total.unwrap_or(0);
    // 上游未返回 hasMore 时根据偏移量推算
    let has_more = raw
        .has_more
        .unwrap_or_else(|| u64::from(offset) + (questions.len() as u64) < total);
    Ok(ProblemList {
        total,
        has_more,
        questions,
    })
}

// ============ 做题进度 ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressFilters {
    skip: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    difficulty: Vec<String>,
}

pub(crate) fn progress_variables(query: &ProgressQuery) -> Value {
    let filters = ProgressFilters {
        skip: query.offset.unwrap_or(0),
        limit: query.limit.unwrap_or(DEFAULT_PROGRESS_LIMIT),
        question_status: query.question_status.clone(),
        difficulty: query.difficulty.clone(),
    };
    serde_json::json!({ "filters": filters })
}

// ============ 竞赛排名 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContestRanking {
    user_contest_ranking: Option<Value>,
    user_contest_ranking_history: Option<Vec<Option<ContestHistoryEntry>>>,
}

/// 过滤空记录；`attended` 为真时仅保留实际参赛的记录
pub(crate) fn normalize_contest_ranking<C>(
    ctx: &C,
    data: Value,
    attended: bool,
) -> Result<ContestRanking>
where
    C: ServiceErrorContext + ?Sized,
{
    if data.is_null() {
        return Ok(ContestRanking::default());
    }
    let raw: RawContestRanking = decode(ctx, data)?;
    let history = raw
        .user_contest_ranking_history
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|entry| !attended || entry.attended.unwrap_or(false))
        .collect();
    Ok(ContestRanking {
        user_contest_ranking: raw.user_contest_ranking.filter(|v| !v.is_null()),
        user_contest_ranking_history: history,
    })
}

// ============ 题解 ============

/// 两个站点共用的标签结构
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTag {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub name_translated: Option<String>,
}

pub(crate) fn convert_tags(tags: Option<Vec<RawTag>>) -> Vec<ArticleTag> {
    tags.unwrap_or_default()
        .into_iter()
        .map(|t| ArticleTag {
            name: t.name.unwrap_or_default(),
            slug: t.slug.unwrap_or_default(),
            name_translated: t.name_translated,
        })
        .collect()
}

/// 拼接题解链接，缺少 ID 或 slug 时不生成
pub(crate) fn article_url(
    base_url: &str,
    question_slug: &str,
    topic_id: Option<&str>,
    slug: &str,
) -> Option<String> {
    match topic_id {
        Some(id) if !id.is_empty() && !slug.is_empty() => Some(format!(
            "{base_url}/problems/{question_slug}/solutions/{id}/{slug}"
        )),
        _ => None,
    }
}

/// 题解列表 variables，`orderBy` 默认值由站点决定
pub(crate) fn solution_list_variables(
    question_slug: &str,
    query: &SolutionArticleQuery,
    default_order: &str,
) -> Value {
    serde_json::json!({
        "questionSlug": question_slug,
        "first": query.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_SOLUTION_LIMIT),
        "skip": query.skip.unwrap_or(0),
        "orderBy": query
            .order_by
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or(default_order),
        "userInput": query.user_input,
        "tagSlugs": query.tag_slugs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    struct Ctx;

    impl ServiceErrorContext for Ctx {
        fn provider_name(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn filters_uppercase_difficulty_and_omit_empty() {
        let query = ProblemSearchQuery {
            difficulty: Some("easy".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(ProblemFilters::from_query(&query)).unwrap_or_default();
        assert_eq!(value, serde_json::json!({"difficulty": "EASY"}));
    }

    #[test]
    fn filters_keep_tags_and_keywords() {
        let query = ProblemSearchQuery {
            tags: vec!["array".to_string()],
            search_keywords: Some("sum".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(ProblemFilters::from_query(&query)).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({"tags": ["array"], "searchKeywords": "sum"})
        );
    }

    #[test]
    fn problem_search_defaults() {
        let vars = problem_search_variables(&ProblemSearchQuery::default());
        assert_eq!(vars["limit"], 10);
        assert_eq!(vars["skip"], 0);
        assert_eq!(vars["filters"], serde_json::json!({}));
    }

    #[test]
    fn progress_defaults() {
        let vars = progress_variables(&ProgressQuery::default());
        assert_eq!(vars, serde_json::json!({"filters": {"skip": 0, "limit": 20}}));
    }

    #[test]
    fn contest_history_filters_unattended_and_null_entries() {
        let data = serde_json::json!({
            "userContestRanking": {"rating": 1800.0},
            "userContestRankingHistory": [
                {"attended": true, "ranking": 10},
                {"attended": false, "ranking": 0},
                null,
                {"ranking": 3}
            ]
        });
        let ranking = normalize_contest_ranking(&Ctx, data.clone(), true).unwrap_or_default();
        assert_eq!(ranking.user_contest_ranking_history.len(), 1);
        assert_eq!(ranking.user_contest_ranking_history[0].details["ranking"], 10);

        let all = normalize_contest_ranking(&Ctx, data, false).unwrap_or_default();
        assert_eq!(all.user_contest_ranking_history.len(), 3);
    }

    #[test]
    fn problem_list_has_more_fallback() {
        let raw = serde_json::json!({"total": 3, "questions": [{}, {}]});
        let list = normalize_problem_list(&Ctx, raw, 0).unwrap_or_default();
        assert!(list.has_more);
        assert_eq!(list.total, 3);
    }

    #[test]
    fn malformed_problem_list_is_parse_error() {
        let raw = serde_json::json!({"total": "many"});
        assert!(matches!(
            normalize_problem_list(&Ctx, raw, 0),
            Err(ProviderError::ParseError { .. })
        ));
    }

    #[test]
    fn article_url_requires_id_and_slug() {
        assert_eq!(
            article_url("https://leetcode.com", "two-sum", Some("42"), "fast"),
            Some("https://leetcode.com/problems/two-sum/solutions/42/fast".to_string())
        );
        assert_eq!(article_url("https://leetcode.com", "two-sum", None, "fast"), None);
        assert_eq!(article_url("https://leetcode.com", "two-sum", Some("42"), ""), None);
    }
}
