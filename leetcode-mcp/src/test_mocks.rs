use super::*;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use leetcode_provider::{
    ChinaService, Credential, GlobalService, GraphQlClient, GraphQlRequest, ProviderError,
};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::envelope::Envelope;

/// GraphQL client returning canned `data` per operation name.
#[derive(Default)]
pub struct MockGraphQlClient {
    responses: Mutex<HashMap<&'static str, Result<Value, ProviderError>>>,
    calls: Mutex<Vec<GraphQlRequest>>,
}

impl MockGraphQlClient {
    pub fn respond(&self, operation: &'static str, data: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation, Ok(data));
    }

    pub fn fail(&self, operation: &'static str, error: ProviderError) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation, Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Variables of the latest request for `operation`.
    pub fn variables_of(&self, operation: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|c| c.operation_name == operation)
            .map(|c| c.variables.clone())
    }
}

#[async_trait]
impl GraphQlClient for MockGraphQlClient {
    async fn execute(&self, request: GraphQlRequest) -> leetcode_provider::Result<Value> {
        let operation = request.operation_name;
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(operation)
            .cloned()
            .unwrap_or_else(|| {
                Err(ProviderError::UpstreamFailure {
                    provider: "mock".to_string(),
                    operation: operation.to_string(),
                    detail: "no canned response".to_string(),
                })
            })
    }
}

pub fn credential(authenticated: bool) -> Credential {
    if authenticated {
        Credential::new(Some("session".to_string()), Some("csrf".to_string()))
    } else {
        Credential::anonymous()
    }
}

/// Real site adapter on top of a mock upstream.
pub fn mock_service(
    variant: SiteVariant,
    authenticated: bool,
) -> (Arc<MockGraphQlClient>, Arc<dyn LeetCodeService>) {
    let mock = Arc::new(MockGraphQlClient::default());
    let client: Arc<dyn GraphQlClient> = mock.clone();
    let service: Arc<dyn LeetCodeService> = match variant {
        SiteVariant::Global => Arc::new(GlobalService::with_client(
            client,
            credential(authenticated),
        )),
        SiteVariant::China => Arc::new(ChinaService::with_client(
            client,
            credential(authenticated),
        )),
    };
    (mock, service)
}

pub fn build_server(
    variant: SiteVariant,
    authenticated: bool,
) -> (Arc<MockGraphQlClient>, LeetCodeMcp) {
    let (mock, service) = mock_service(variant, authenticated);
    let server = LeetCodeMcp::new(&service).unwrap();
    (mock, server)
}

/// Invoke a registered tool directly, bypassing the transport.
pub async fn invoke(server: &LeetCodeMcp, tool: &str, args: Value) -> Envelope {
    let Some(definition) = server.capabilities().tool(tool) else {
        panic!("tool {tool} is not registered");
    };
    let arguments: Option<JsonObject> = args.as_object().cloned();
    definition.invoke(arguments).await
}

pub fn sorted_tool_names(server: &LeetCodeMcp) -> Vec<String> {
    let mut names: Vec<String> = server
        .capabilities()
        .tool_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

// ============ Canned upstream data ============

pub fn global_daily() -> Value {
    serde_json::json!({"activeDailyCodingChallengeQuestion": {
        "date": "2026-10-19",
        "link": "/problems/two-sum/",
        "question": {"questionId": "1", "title": "Two Sum", "titleSlug": "two-sum"}
    }})
}

pub fn global_problem() -> Value {
    serde_json::json!({"question": {
        "questionId": "1",
        "title": "Two Sum",
        "titleSlug": "two-sum",
        "difficulty": "Easy",
        "content": "<p>Given an array of integers...</p>"
    }})
}

pub fn global_articles() -> Value {
    serde_json::json!({"ugcArticleSolutionArticles": {
        "totalNum": 1,
        "pageInfo": {"hasNextPage": false},
        "edges": [{"node": {
            "uuid": "u-1",
            "title": "Hash map, one pass",
            "slug": "hash-map-one-pass",
            "canSee": true,
            "topicId": 5217,
            "author": {"userName": "alice"},
            "reactions": [{"count": 42, "reactionType": "UPVOTE"}],
            "tags": [{"name": "Array", "slug": "array"}]
        }}]
    }})
}

pub fn global_article_detail() -> Value {
    serde_json::json!({"ugcArticleSolutionArticle": {
        "title": "Hash map, one pass",
        "slug": "hash-map-one-pass",
        "content": "Use a map from value to index.",
        "topicId": 5217
    }})
}

pub fn china_article_detail() -> Value {
    serde_json::json!({"solutionArticle": {
        "title": "哈希表",
        "slug": "ha-xi-biao",
        "content": "用哈希表记录下标",
        "topic": {"id": 123},
        "question": {"titleSlug": "two-sum"}
    }})
}
