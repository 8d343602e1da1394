use super::test_mocks::*;
use super::*;

use leetcode_provider::{NoteSearchQuery, ProviderError};

const GLOBAL_ANONYMOUS_TOOLS: &[&str] = &[
    "get_daily_challenge",
    "get_problem",
    "get_problem_solution",
    "get_recent_ac_submissions",
    "get_recent_submissions",
    "get_user_contest_ranking",
    "get_user_profile",
    "list_problem_solutions",
    "search_problems",
];

const AUTHENTICATED_COMMON_TOOLS: &[&str] = &[
    "get_all_submissions",
    "get_problem_progress",
    "get_problem_submission_report",
    "get_user_status",
];

const NOTE_TOOLS: &[&str] = &["create_note", "get_note", "search_notes", "update_note"];

#[test]
fn sanitize_internal_error_hides_error_details() {
    let error = sanitize_internal_error("sensitive: token=123", "Build resource contents");
    let message = error.to_string();
    assert!(message.contains("Build resource contents failed"));
    assert!(!message.contains("token=123"));
}

// ============ Registration ============

#[test]
fn anonymous_global_registers_public_tools_only() {
    let (_, server) = build_server(SiteVariant::Global, false);
    assert_eq!(sorted_tool_names(&server), GLOBAL_ANONYMOUS_TOOLS);
}

#[test]
fn authenticated_global_adds_account_tools_but_no_notes() {
    let (_, server) = build_server(SiteVariant::Global, true);
    let names = sorted_tool_names(&server);

    for tool in GLOBAL_ANONYMOUS_TOOLS.iter().chain(AUTHENTICATED_COMMON_TOOLS) {
        assert!(names.iter().any(|n| n == tool), "missing {tool}");
    }
    for tool in NOTE_TOOLS {
        assert!(!names.iter().any(|n| n == tool), "unexpected {tool}");
    }
    assert_eq!(
        names.len(),
        GLOBAL_ANONYMOUS_TOOLS.len() + AUTHENTICATED_COMMON_TOOLS.len()
    );
}

#[test]
fn anonymous_china_has_no_recent_submissions_tool() {
    let (_, server) = build_server(SiteVariant::China, false);
    let names = sorted_tool_names(&server);

    assert!(!names.iter().any(|n| n == "get_recent_submissions"));
    assert!(names.iter().any(|n| n == "get_recent_ac_submissions"));
    assert!(names.iter().any(|n| n == "list_problem_solutions"));
    assert_eq!(names.len(), GLOBAL_ANONYMOUS_TOOLS.len() - 1);
}

#[test]
fn authenticated_china_is_strict_superset_without_global_only_tools() {
    let (_, anonymous) = build_server(SiteVariant::China, false);
    let (_, authenticated) = build_server(SiteVariant::China, true);
    let anonymous = sorted_tool_names(&anonymous);
    let authenticated = sorted_tool_names(&authenticated);

    assert!(anonymous.iter().all(|n| authenticated.contains(n)));
    assert!(authenticated.len() > anonymous.len());
    for tool in NOTE_TOOLS.iter().chain(AUTHENTICATED_COMMON_TOOLS) {
        assert!(authenticated.iter().any(|n| n == tool), "missing {tool}");
    }
    assert!(!authenticated.iter().any(|n| n == "get_recent_submissions"));
}

#[test]
fn solution_resource_template_follows_site_identifier() {
    let (_, global) = build_server(SiteVariant::Global, false);
    let (_, china) = build_server(SiteVariant::China, false);

    assert!(global
        .capabilities()
        .resolve_resource("leetcode://solutions/5217")
        .is_some_and(|(r, vars)| r.name() == "solution" && vars["topicId"] == "5217"));
    assert!(china
        .capabilities()
        .resolve_resource("leetcode://solutions/ha-xi-biao")
        .is_some_and(|(r, vars)| r.name() == "solution" && vars["slug"] == "ha-xi-biao"));
}

#[test]
fn every_site_exposes_reference_resources() {
    for variant in [SiteVariant::Global, SiteVariant::China] {
        let (_, server) = build_server(variant, false);
        let names = server.capabilities().resource_names();
        for expected in [
            "problem-categories",
            "problem-tags",
            "problem-langs",
            "daily-challenge",
            "problem-detail",
            "solution",
        ] {
            assert!(names.contains(&expected), "{variant}: missing {expected}");
        }
    }
}

#[test]
fn instructions_mention_site_and_auth_state() {
    let (_, server) = build_server(SiteVariant::China, true);
    let instructions = server.get_info().instructions.unwrap();
    assert!(instructions.contains("LeetCode CN"));
    assert!(instructions.contains("Notes"));

    let (_, server) = build_server(SiteVariant::Global, false);
    let instructions = server.get_info().instructions.unwrap();
    assert!(instructions.contains("LeetCode Global"));
    assert!(instructions.contains("LEETCODE_SESSION"));
}

// ============ Tool invocation ============

#[tokio::test]
async fn search_problems_sends_uppercase_difficulty_on_both_sites() {
    for variant in [SiteVariant::Global, SiteVariant::China] {
        let (mock, server) = build_server(variant, false);
        mock.respond(
            "problemsetQuestionList",
            json!({"problemsetQuestionList": {"total": 0, "questions": []}}),
        );

        let envelope = invoke(&server, "search_problems", json!({"difficulty": "easy"})).await;
        assert!(!envelope.is_failure(), "{variant}: {envelope:?}");

        let vars = mock.variables_of("problemsetQuestionList").unwrap();
        assert_eq!(vars["filters"]["difficulty"], "EASY");
        assert_eq!(vars["limit"], 10);
        assert_eq!(vars["skip"], 0);

        let body = envelope.to_value();
        assert_eq!(body["filters"]["difficulty"], "EASY");
        assert_eq!(body["pagination"], json!({"limit": 10, "offset": 0}));
        assert_eq!(body["problems"]["total"], 0);
    }
}

#[tokio::test]
async fn invalid_arguments_fail_before_upstream_call() {
    let (mock, server) = build_server(SiteVariant::Global, false);

    let envelope = invoke(&server, "get_problem", json!({})).await;
    let body = envelope.to_value();

    assert!(envelope.is_failure());
    assert_eq!(body["error"], "Invalid arguments");
    assert!(body["message"].as_str().unwrap().contains("titleSlug"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn daily_challenge_is_stable_within_a_day() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("questionOfToday", global_daily());

    let first = invoke(&server, "get_daily_challenge", json!({})).await.to_value();
    let second = invoke(&server, "get_daily_challenge", json!({})).await.to_value();

    assert_eq!(
        first["problem"]["question"]["questionId"],
        second["problem"]["question"]["questionId"]
    );
    assert!(first["date"].is_string());
}

#[tokio::test]
async fn get_problem_echoes_slug() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("questionData", global_problem());

    let body = invoke(&server, "get_problem", json!({"titleSlug": "two-sum"}))
        .await
        .to_value();
    assert_eq!(body["titleSlug"], "two-sum");
    assert_eq!(body["problem"]["title"], "Two Sum");
}

#[tokio::test]
async fn missing_problem_is_failure_envelope() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("questionData", json!({"question": null}));

    let envelope = invoke(&server, "get_problem", json!({"titleSlug": "nope"})).await;
    let body = envelope.to_value();
    assert!(envelope.is_failure());
    assert_eq!(body["error"], "NotFound");
    assert!(body["message"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn upstream_failure_is_reported_not_raised() {
    let (mock, server) = build_server(SiteVariant::China, false);
    mock.fail(
        "userProfilePublicProfile",
        ProviderError::UpstreamFailure {
            provider: "cn".to_string(),
            operation: "userProfilePublicProfile".to_string(),
            detail: "HTTP 502".to_string(),
        },
    );

    let body = invoke(&server, "get_user_profile", json!({"username": "alice"}))
        .await
        .to_value();
    assert_eq!(body["error"], "UpstreamFailure");
    assert!(body["message"].as_str().unwrap().contains("HTTP 502"));
}

#[tokio::test]
async fn global_solution_list_defaults() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("ugcArticleSolutionArticles", global_articles());

    let body = invoke(
        &server,
        "list_problem_solutions",
        json!({"questionSlug": "two-sum"}),
    )
    .await
    .to_value();

    let vars = mock.variables_of("ugcArticleSolutionArticles").unwrap();
    assert_eq!(vars["orderBy"], "HOT");
    assert_eq!(vars["first"], 20);
    assert_eq!(vars["skip"], 0);

    assert_eq!(body["questionSlug"], "two-sum");
    assert_eq!(body["solutionArticles"]["articles"][0]["topicId"], "5217");
    assert_eq!(body["solutionArticles"]["articles"][0]["upvoteCount"], 42);
}

#[tokio::test]
async fn solution_list_then_detail_round_trip() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("ugcArticleSolutionArticles", global_articles());
    mock.respond("ugcArticleSolutionArticle", global_article_detail());

    let list = invoke(
        &server,
        "list_problem_solutions",
        json!({"questionSlug": "two-sum", "orderBy": "MOST_VOTES"}),
    )
    .await
    .to_value();
    let topic_id = list["solutionArticles"]["articles"][0]["topicId"].clone();

    let detail = invoke(&server, "get_problem_solution", json!({"topicId": topic_id}))
        .await
        .to_value();
    assert!(!detail["solution"]["title"].as_str().unwrap().is_empty());
    assert!(!detail["solution"]["content"].as_str().unwrap().is_empty());
    assert_eq!(
        mock.variables_of("ugcArticleSolutionArticles").unwrap()["orderBy"],
        "MOST_VOTES"
    );
}

#[tokio::test]
async fn china_solution_detail_uses_slug() {
    let (mock, server) = build_server(SiteVariant::China, false);
    mock.respond("discussTopic", china_article_detail());

    let body = invoke(&server, "get_problem_solution", json!({"slug": "ha-xi-biao"}))
        .await
        .to_value();
    assert_eq!(body["slug"], "ha-xi-biao");
    assert_eq!(body["solution"]["content"], "用哈希表记录下标");

    let rejected = invoke(&server, "get_problem_solution", json!({"topicId": "123"})).await;
    assert!(rejected.is_failure());
}

#[tokio::test]
async fn null_note_aggregate_is_empty_list() {
    let (mock, server) = build_server(SiteVariant::China, true);
    mock.respond("noteAggregateNote", json!({"noteAggregateNote": null}));

    let body = invoke(&server, "search_notes", json!({"keyword": "dp"}))
        .await
        .to_value();
    assert_eq!(body["notes"], json!({"count": 0, "userNotes": []}));
    assert_eq!(body["pagination"], json!({"limit": 10, "skip": 0}));

    let vars = mock.variables_of("noteAggregateNote").unwrap();
    assert_eq!(vars["limit"], 10);
    assert_eq!(vars["orderBy"], "DESCENDING");
}

#[tokio::test]
async fn null_note_fields_are_empty_list() {
    let (mock, server) = build_server(SiteVariant::China, true);
    mock.respond(
        "noteAggregateNote",
        json!({"noteAggregateNote": {"count": null, "userNotes": null}}),
    );

    let envelope = invoke(&server, "search_notes", json!({})).await;
    assert!(!envelope.is_failure());
    assert_eq!(
        envelope.to_value()["notes"],
        json!({"count": 0, "userNotes": []})
    );
}

#[tokio::test]
async fn create_note_targets_question() {
    let (mock, server) = build_server(SiteVariant::China, true);
    mock.respond(
        "noteCreateCommonNote",
        json!({"noteCreateCommonNote": {
            "ok": true,
            "note": {"id": "n1", "content": "memo", "targetId": "1"}
        }}),
    );

    let body = invoke(
        &server,
        "create_note",
        json!({"questionId": "1", "content": "memo"}),
    )
    .await
    .to_value();
    assert_eq!(body["questionId"], "1");
    assert_eq!(body["note"]["ok"], true);

    let vars = mock.variables_of("noteCreateCommonNote").unwrap();
    assert_eq!(vars["noteType"], "COMMON_QUESTION");
    assert_eq!(vars["targetId"], "1");
    assert_eq!(vars["summary"], "");
}

#[tokio::test]
async fn global_service_rejects_notes_even_when_called_directly() {
    let (mock, service) = mock_service(SiteVariant::Global, true);
    let result = service.fetch_user_notes(&NoteSearchQuery::default()).await;
    assert!(matches!(
        result,
        Err(ProviderError::UnsupportedOperation { .. })
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn anonymous_china_user_status_never_reaches_upstream() {
    let (mock, service) = mock_service(SiteVariant::China, false);
    let result = service.fetch_user_status().await;
    assert!(matches!(
        result,
        Err(ProviderError::AuthenticationRequired { .. })
    ));
    assert_eq!(mock.call_count(), 0);
}

// ============ Resources ============

#[tokio::test]
async fn problem_detail_resource_fetches_problem() {
    let (mock, server) = build_server(SiteVariant::Global, false);
    mock.respond("questionData", global_problem());

    let (resource, variables) = server
        .capabilities()
        .resolve_resource("leetcode://problems/two-sum")
        .unwrap();
    let envelope = resource
        .read(ResourceRequest {
            uri: "leetcode://problems/two-sum".to_string(),
            variables,
        })
        .await;

    assert_eq!(envelope.to_value()["problem"]["titleSlug"], "two-sum");
    assert_eq!(
        mock.variables_of("questionData").unwrap(),
        json!({"titleSlug": "two-sum"})
    );
}

#[tokio::test]
async fn reference_resource_needs_no_upstream() {
    let (mock, server) = build_server(SiteVariant::China, false);

    let (resource, variables) = server
        .capabilities()
        .resolve_resource("leetcode://problems/langs/all")
        .unwrap();
    let body = resource
        .read(ResourceRequest {
            uri: "leetcode://problems/langs/all".to_string(),
            variables,
        })
        .await
        .to_value();

    let langs = body["langs"].as_array().unwrap();
    assert!(langs.iter().any(|l| l == "rust"));
    assert_eq!(mock.call_count(), 0);
}
