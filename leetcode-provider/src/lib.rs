//! # leetcode-provider
//!
//! A unified service contract over the two LeetCode sites, whose GraphQL
//! APIs diverge in field names, supported features and URL layout.
//!
//! ## Supported Sites
//!
//! | Site | Variant | Notes |
//! |------|---------|-------|
//! | [leetcode.com](https://leetcode.com/) | [`SiteVariant::Global`] | all-status recent submissions, no notes |
//! | [leetcode.cn](https://leetcode.cn/) | [`SiteVariant::China`] | notes, AC-only recent submissions |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leetcode_provider::{
//!     create_service, Credential, LeetCodeService, SiteVariant, SolutionArticleQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = create_service(SiteVariant::Global, Credential::anonymous())?;
//!
//!     let daily = service.fetch_daily_challenge().await?;
//!     println!("{}", daily["question"]["title"]);
//!
//!     let page = service
//!         .fetch_question_solution_articles("two-sum", &SolutionArticleQuery::default())
//!         .await?;
//!     for article in &page.articles {
//!         println!("{} -> {:?}", article.title, article.article_url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All service operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::AuthenticationRequired`]: the operation needs a session and CSRF token
//! - [`ProviderError::UnsupportedOperation`]: the site does not offer the feature
//! - [`ProviderError::UpstreamFailure`]: network, HTTP or GraphQL error
//! - [`ProviderError::NotFound`]: single-entity lookup returned nothing
//! - [`ProviderError::ParseError`]: upstream data did not match the expected shape
//!
//! The first two are raised before any request is sent. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_service;

// Re-export core traits only (internal traits are not exported)
pub use traits::{GraphQlClient, GraphQlRequest, LeetCodeService};

// Re-export the HTTP-backed upstream client
pub use http_client::HttpGraphQlClient;

// Re-export types
pub use types::{
    ArticleAuthor, ArticleLink, ArticleTag, ContestHistoryEntry, ContestRanking, Credential,
    NewNote, NoteList, NoteMutation, NoteQuestion, NoteRef, NoteSearchQuery, NoteUpdate,
    ParseSiteVariantError, ProblemList, ProblemSearchQuery, ProgressQuery, SiteVariant,
    SolutionArticle, SolutionArticleDetail, SolutionArticleList, SolutionArticleQuery,
    SubmissionListQuery, UserNote,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete services
pub use providers::{ChinaService, GlobalService};
