use serde::{Deserialize, Serialize};

/// Unified error type for all LeetCode service operations.
///
/// Each variant includes a `provider` field identifying which backend variant
/// produced the error (`"global"` or `"cn"`), plus variant-specific context.
/// All variants are serializable for structured error reporting.
///
/// No variant is retried by this crate: upstream failures are surfaced once,
/// with the original message preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The operation needs a session and CSRF token, but the service has none.
    ///
    /// Raised before any upstream request is attempted.
    AuthenticationRequired {
        /// Backend variant that rejected the call.
        provider: String,
        /// Human-readable name of the rejected operation.
        operation: String,
    },

    /// The operation is not offered by this backend variant.
    ///
    /// Raised before any upstream request is attempted.
    UnsupportedOperation {
        /// Backend variant that does not offer the feature.
        provider: String,
        /// Human-readable name of the unsupported feature.
        feature: String,
    },

    /// The upstream request failed (network error, HTTP error status, or a
    /// GraphQL `errors` payload).
    UpstreamFailure {
        /// Backend variant that produced the error.
        provider: String,
        /// Service operation that was running.
        operation: String,
        /// Original error message.
        detail: String,
    },

    /// Upstream returned `null` where a single entity was expected.
    NotFound {
        /// Backend variant that produced the error.
        provider: String,
        /// Kind of entity (e.g. `"solution article"`).
        entity: String,
        /// Identifier that was looked up.
        identifier: String,
    },

    /// The upstream response could not be decoded into the expected shape.
    ParseError {
        /// Backend variant that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（未登录、功能不支持、资源不存在），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationRequired { .. }
                | Self::UnsupportedOperation { .. }
                | Self::NotFound { .. }
        )
    }

    /// Short, stable label for the error kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired { .. } => "AuthenticationRequired",
            Self::UnsupportedOperation { .. } => "UnsupportedOperation",
            Self::UpstreamFailure { .. } => "UpstreamFailure",
            Self::NotFound { .. } => "NotFound",
            Self::ParseError { .. } => "ParseError",
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationRequired {
                provider,
                operation,
            } => {
                write!(f, "[{provider}] Authentication required to {operation}")
            }
            Self::UnsupportedOperation { provider, feature } => {
                write!(f, "[{provider}] {feature} is not supported on this site")
            }
            Self::UpstreamFailure {
                provider,
                operation,
                detail,
            } => {
                write!(f, "[{provider}] {operation} failed: {detail}")
            }
            Self::NotFound {
                provider,
                entity,
                identifier,
            } => {
                write!(f, "[{provider}] {entity} '{identifier}' not found")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
