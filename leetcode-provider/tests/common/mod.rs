//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use leetcode_provider::{
    ChinaService, Credential, GlobalService, GraphQlClient, GraphQlRequest, ProviderError, Result,
};
use serde_json::Value;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 按操作名返回预设响应的 GraphQL 客户端，并记录所有请求
#[derive(Default)]
pub struct MockGraphQlClient {
    responses: Mutex<HashMap<&'static str, Result<Value>>>,
    calls: Mutex<Vec<GraphQlRequest>>,
}

impl MockGraphQlClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 为操作设置 `data` 响应
    pub fn respond(&self, operation: &'static str, data: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation, Ok(data));
    }

    /// 为操作设置错误响应
    pub fn fail(&self, operation: &'static str, error: ProviderError) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation, Err(error));
    }

    pub fn calls(&self) -> Vec<GraphQlRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    /// 最近一次该操作请求的 variables
    pub fn variables_of(&self, operation: &str) -> Option<Value> {
        self.calls()
            .into_iter()
            .rev()
            .find(|c| c.operation_name == operation)
            .map(|c| c.variables)
    }
}

#[async_trait]
impl GraphQlClient for MockGraphQlClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value> {
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
        Credential::new(
            Some("test-session".to_string()),
            Some("test-csrf".to_string()),
        )
    } else {
        Credential::anonymous()
    }
}

pub fn global(authenticated: bool) -> (Arc<MockGraphQlClient>, GlobalService) {
    let mock = MockGraphQlClient::new();
    let service = GlobalService::with_client(mock.clone(), credential(authenticated));
    (mock, service)
}

pub fn china(authenticated: bool) -> (Arc<MockGraphQlClient>, ChinaService) {
    let mock = MockGraphQlClient::new();
    let service = ChinaService::with_client(mock.clone(), credential(authenticated));
    (mock, service)
}
