//! LeetCode Global 适配器测试
//!
//! 使用 `MockGraphQlClient` 校验请求参数与响应归一化。
//! 标记为 `#[ignore]` 的用例会访问真实站点:
//! ```bash
//! cargo test -p leetcode-provider --test global_test -- --ignored --nocapture
//! ```

mod common;

use leetcode_provider::{
    create_service, Credential, LeetCodeService, NewNote, NoteSearchQuery, NoteUpdate,
    ProblemSearchQuery, ProviderError, SiteVariant, SolutionArticleQuery, SubmissionListQuery,
};
use serde_json::json;

fn article_connection() -> serde_json::Value {
    json!({
        "ugcArticleSolutionArticles": {
            "totalNum": 2,
            "pageInfo": {"hasNextPage": true},
            "edges": [
                {"node": {
                    "uuid": "u-1",
                    "title": "Hash map, one pass",
                    "slug": "hash-map-one-pass",
                    "summary": "O(n)",
                    "canSee": true,
                    "topicId": 5217,
                    "hitCount": 1000,
                    "author": {"userName": "alice", "realName": "Alice", "userSlug": "alice"},
                    "reactions": [
                        {"count": 3, "reactionType": "THUMBS_UP"},
                        {"count": 42, "reactionType": "UPVOTE"}
                    ],
                    "tags": [{"name": "Array", "slug": "array"}]
                }},
                {"node": {
                    "title": "Premium only",
                    "slug": "hidden",
                    "canSee": false,
                    "topicId": 1
                }},
                null
            ]
        }
    })
}

fn article_detail() -> serde_json::Value {
    json!({
        "ugcArticleSolutionArticle": {
            "title": "Hash map, one pass",
            "slug": "hash-map-one-pass",
            "content": "Use a map from value to index.",
            "topicId": 5217,
            "tags": [],
            "next": {"title": "Brute force", "slug": "brute-force", "topicId": 5218}
        }
    })
}

// ============ 题解 ============

#[tokio::test]
async fn solution_list_defaults_to_hot_order() {
    let (mock, service) = common::global(false);
    mock.respond("ugcArticleSolutionArticles", article_connection());

    require_ok!(
        service
            .fetch_question_solution_articles("two-sum", &SolutionArticleQuery::default())
            .await
    );

    let vars = require_some!(mock.variables_of("ugcArticleSolutionArticles"));
    assert_eq!(vars["orderBy"], "HOT");
    assert_eq!(vars["questionSlug"], "two-sum");
    assert_eq!(vars["first"], 5);
    assert_eq!(vars["skip"], 0);
    assert_eq!(vars["tagSlugs"], json!([]));
}

#[tokio::test]
async fn solution_list_is_normalized() {
    let (mock, service) = common::global(false);
    mock.respond("ugcArticleSolutionArticles", article_connection());

    let query = SolutionArticleQuery {
        order_by: Some("MOST_VOTES".to_string()),
        limit: Some(20),
        ..Default::default()
    };
    let list = require_ok!(
        service
            .fetch_question_solution_articles("two-sum", &query)
            .await
    );

    assert_eq!(list.total_num, 2);
    assert!(list.has_next_page);
    assert_eq!(list.articles.len(), 1, "canSee=false 与空节点应被过滤");

    let article = &list.articles[0];
    assert_eq!(article.topic_id.as_deref(), Some("5217"));
    assert_eq!(
        article.article_url.as_deref(),
        Some("https://leetcode.com/problems/two-sum/solutions/5217/hash-map-one-pass")
    );
    assert_eq!(article.upvote_count, Some(42));
    assert_eq!(
        article.author.as_ref().and_then(|a| a.username.as_deref()),
        Some("alice")
    );

    let vars = require_some!(mock.variables_of("ugcArticleSolutionArticles"));
    assert_eq!(vars["orderBy"], "MOST_VOTES");
    assert_eq!(vars["first"], 20);
}

#[tokio::test]
async fn null_solution_list_is_empty() {
    let (mock, service) = common::global(false);
    mock.respond(
        "ugcArticleSolutionArticles",
        json!({"ugcArticleSolutionArticles": null}),
    );

    let list = require_ok!(
        service
            .fetch_question_solution_articles("two-sum", &SolutionArticleQuery::default())
            .await
    );
    assert_eq!(
        serde_json::to_value(&list).ok(),
        Some(json!({"totalNum": 0, "hasNextPage": false, "articles": []}))
    );
}

#[tokio::test]
async fn solution_detail_queries_by_topic_id() {
    let (mock, service) = common::global(false);
    mock.respond("ugcArticleSolutionArticle", article_detail());

    let detail = require_ok!(service.fetch_solution_article_detail("5217").await);
    assert_eq!(detail.title, "Hash map, one pass");
    assert_eq!(detail.topic_id.as_deref(), Some("5217"));
    assert_eq!(
        detail.next.and_then(|n| n.topic_id).as_deref(),
        Some("5218")
    );

    let vars = require_some!(mock.variables_of("ugcArticleSolutionArticle"));
    assert_eq!(vars, json!({"topicId": "5217"}));
}

#[tokio::test]
async fn missing_solution_detail_is_not_found() {
    let (mock, service) = common::global(false);
    mock.respond(
        "ugcArticleSolutionArticle",
        json!({"ugcArticleSolutionArticle": null}),
    );

    let result = service.fetch_solution_article_detail("404").await;
    assert!(matches!(result, Err(ProviderError::NotFound { .. })));
}

#[tokio::test]
async fn list_then_detail_round_trip() {
    let (mock, service) = common::global(false);
    mock.respond("ugcArticleSolutionArticles", article_connection());
    mock.respond("ugcArticleSolutionArticle", article_detail());

    let list = require_ok!(
        service
            .fetch_question_solution_articles("two-sum", &SolutionArticleQuery::default())
            .await
    );
    let first = require_some!(list.articles.first());
    let topic_id = require_some!(first.topic_id.as_deref());

    let detail = require_ok!(service.fetch_solution_article_detail(topic_id).await);
    assert!(!detail.title.is_empty());
    assert!(!detail.content.is_empty());
}

// ============ 笔记（不支持） ============

#[tokio::test]
async fn notes_are_unsupported_without_upstream_calls() {
    let (mock, service) = common::global(true);

    let search = service.fetch_user_notes(&NoteSearchQuery::default()).await;
    let by_question = service.fetch_notes_by_question_id("1", None, None).await;
    let create = service
        .create_user_note(&NewNote {
            content: "c".to_string(),
            note_type: "COMMON_QUESTION".to_string(),
            target_id: "1".to_string(),
            summary: String::new(),
        })
        .await;
    let update = service
        .update_user_note(&NoteUpdate {
            note_id: "n".to_string(),
            content: "c".to_string(),
            summary: String::new(),
        })
        .await;

    for err in [
        search.err(),
        by_question.err(),
        create.err(),
        update.err(),
    ] {
        let err = require_some!(err);
        assert!(matches!(err, ProviderError::UnsupportedOperation { .. }));
        let message = err.to_string();
        assert!(message.contains("Notes"));
        assert!(message.contains("global"));
    }
    assert_eq!(mock.call_count(), 0);
}

// ============ 题目 ============

#[tokio::test]
async fn search_problems_uppercases_difficulty() {
    let (mock, service) = common::global(false);
    mock.respond(
        "problemsetQuestionList",
        json!({"problemsetQuestionList": {"total": 1, "questions": [{"titleSlug": "two-sum"}]}}),
    );

    let query = ProblemSearchQuery {
        difficulty: Some("easy".to_string()),
        ..Default::default()
    };
    let list = require_ok!(service.search_problems(&query).await);
    assert_eq!(list.total, 1);
    assert!(!list.has_more);
    assert_eq!(list.questions.len(), 1);

    let vars = require_some!(mock.variables_of("problemsetQuestionList"));
    assert_eq!(vars["filters"], json!({"difficulty": "EASY"}));
    assert_eq!(vars["limit"], 10);
    assert_eq!(vars["skip"], 0);
}

#[tokio::test]
async fn daily_challenge_is_stable_within_a_day() {
    let (mock, service) = common::global(false);
    mock.respond(
        "questionOfToday",
        json!({"activeDailyCodingChallengeQuestion": {
            "date": "2026-10-19",
            "question": {"questionId": "1", "titleSlug": "two-sum"}
        }}),
    );

    let first = require_ok!(service.fetch_daily_challenge().await);
    let second = require_ok!(service.fetch_daily_challenge().await);
    assert_eq!(first["question"]["questionId"], "1");
    assert_eq!(first["question"]["questionId"], second["question"]["questionId"]);
}

#[tokio::test]
async fn missing_problem_is_not_found() {
    let (mock, service) = common::global(false);
    mock.respond("questionData", json!({"question": null}));

    let result = service.fetch_problem("no-such-problem").await;
    assert!(matches!(result, Err(ProviderError::NotFound { .. })));
}

// ============ 用户 ============

#[tokio::test]
async fn authenticated_operations_fail_fast_when_anonymous() {
    let (mock, service) = common::global(false);

    assert!(matches!(
        service.fetch_user_status().await,
        Err(ProviderError::AuthenticationRequired { .. })
    ));
    assert!(matches!(
        service.fetch_user_submission_detail(1).await,
        Err(ProviderError::AuthenticationRequired { .. })
    ));
    assert!(matches!(
        service
            .fetch_user_all_submissions(&SubmissionListQuery::default())
            .await,
        Err(ProviderError::AuthenticationRequired { .. })
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn all_submissions_wraps_list_with_defaults() {
    let (mock, service) = common::global(true);
    mock.respond(
        "submissionList",
        json!({"submissionList": {"lastKey": null, "hasNext": false, "submissions": [{"id": "1"}]}}),
    );

    let result = require_ok!(
        service
            .fetch_user_all_submissions(&SubmissionListQuery::default())
            .await
    );
    assert_eq!(result, json!({"submissions": [{"id": "1"}]}));

    let vars = require_some!(mock.variables_of("submissionList"));
    assert_eq!(vars["offset"], 0);
    assert_eq!(vars["limit"], 20);
}

#[tokio::test]
async fn all_submissions_forward_last_key_but_not_cn_filters() {
    let (mock, service) = common::global(true);
    mock.respond(
        "submissionList",
        json!({"submissionList": {"lastKey": "k2", "hasNext": true, "submissions": []}}),
    );

    let query = SubmissionListQuery {
        offset: Some(20),
        limit: Some(10),
        question_slug: Some("two-sum".to_string()),
        last_key: Some("k1".to_string()),
        lang: Some("rust".to_string()),
        status: Some("AC".to_string()),
    };
    require_ok!(service.fetch_user_all_submissions(&query).await);

    let vars = require_some!(mock.variables_of("submissionList"));
    assert_eq!(
        vars,
        json!({"offset": 20, "limit": 10, "lastKey": "k1", "questionSlug": "two-sum"})
    );
}

#[tokio::test]
async fn recent_submissions_forward_limit() {
    let (mock, service) = common::global(false);
    mock.respond("recentSubmissions", json!({"recentSubmissionList": []}));
    mock.respond("recentAcSubmissions", json!({"recentAcSubmissionList": []}));

    require_ok!(service.fetch_user_recent_submissions("alice", Some(5)).await);
    require_ok!(service.fetch_user_recent_ac_submissions("alice", None).await);

    let all = require_some!(mock.variables_of("recentSubmissions"));
    assert_eq!(all, json!({"username": "alice", "limit": 5}));
    let ac = require_some!(mock.variables_of("recentAcSubmissions"));
    assert_eq!(ac["limit"], serde_json::Value::Null);
}

#[tokio::test]
async fn contest_ranking_keeps_attended_contests_only() {
    let (mock, service) = common::global(false);
    mock.respond(
        "userContestRankingInfo",
        json!({
            "userContestRanking": {"rating": 1700.0},
            "userContestRankingHistory": [
                {"attended": false, "contest": {"title": "Weekly Contest 1"}},
                {"attended": true, "contest": {"title": "Weekly Contest 2"}}
            ]
        }),
    );

    let ranking = require_ok!(service.fetch_user_contest_ranking("alice", true).await);
    assert_eq!(ranking.user_contest_ranking_history.len(), 1);
    assert_eq!(
        ranking.user_contest_ranking_history[0].details["contest"]["title"],
        "Weekly Contest 2"
    );
}

#[tokio::test]
async fn upstream_failure_is_passed_through() {
    let (mock, service) = common::global(false);
    mock.fail(
        "getUserProfile",
        ProviderError::UpstreamFailure {
            provider: "global".to_string(),
            operation: "getUserProfile".to_string(),
            detail: "That user does not exist.".to_string(),
        },
    );

    let err = require_some!(service.fetch_user_profile("ghost").await.err());
    assert!(err.to_string().contains("That user does not exist."));
    assert_eq!(mock.call_count(), 1, "failures are not retried");
}

// ============ 真实站点 ============

#[tokio::test]
#[ignore = "integration test: requires network access to leetcode.com"]
async fn test_global_live_daily_challenge() {
    let service = require_some!(create_service(SiteVariant::Global, Credential::anonymous()).ok());
    let daily = require_ok!(service.fetch_daily_challenge().await, "每日一题获取失败");
    assert!(daily["question"]["titleSlug"].is_string());

    println!("✓ daily challenge: {}", daily["question"]["titleSlug"]);
}

#[tokio::test]
#[ignore = "integration test: requires LEETCODE_SESSION and LEETCODE_CSRF_TOKEN"]
async fn test_global_live_user_status() {
    skip_if_no_credentials!("LEETCODE_SESSION", "LEETCODE_CSRF_TOKEN");

    let credential = Credential::new(
        std::env::var("LEETCODE_SESSION").ok(),
        std::env::var("LEETCODE_CSRF_TOKEN").ok(),
    );
    let service = require_some!(create_service(SiteVariant::Global, credential).ok());
    let status = require_ok!(service.fetch_user_status().await, "用户状态获取失败");
    assert_eq!(status["isSignedIn"], true);
}
