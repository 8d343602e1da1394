use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::serde_helpers;

// ============ Site Variant ============

/// LeetCode backend variant.
///
/// The two sites share most concepts but diverge in GraphQL field names,
/// supported features and URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteVariant {
    /// leetcode.com
    #[serde(rename = "global")]
    Global,
    /// leetcode.cn
    #[serde(rename = "cn")]
    China,
}

impl SiteVariant {
    /// Stable identifier, also used as the `provider` field of errors.
    pub fn id(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::China => "cn",
        }
    }

    /// Human-readable site name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Global => "LeetCode Global",
            Self::China => "LeetCode CN",
        }
    }

    /// Browsable site root, without trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Global => "https://leetcode.com",
            Self::China => "https://leetcode.cn",
        }
    }

    /// GraphQL endpoint URL.
    pub fn graphql_endpoint(self) -> &'static str {
        match self {
            Self::Global => "https://leetcode.com/graphql",
            Self::China => "https://leetcode.cn/graphql/",
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a site name is neither `global` nor `cn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSiteVariantError(pub String);

impl fmt::Display for ParseSiteVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown site '{}', expected 'global' or 'cn'", self.0)
    }
}

impl std::error::Error for ParseSiteVariantError {}

impl FromStr for SiteVariant {
    type Err = ParseSiteVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "com" => Ok(Self::Global),
            "cn" | "china" => Ok(Self::China),
            _ => Err(ParseSiteVariantError(s.to_string())),
        }
    }
}

// ============ Credential ============

/// LeetCode session credential: the `LEETCODE_SESSION` cookie plus the
/// `csrftoken` anti-forgery token.
///
/// Blank values are stored as absent. The credential is authenticated only
/// when both values are present.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    session: Option<String>,
    csrf_token: Option<String>,
}

impl Credential {
    pub fn new(session: Option<String>, csrf_token: Option<String>) -> Self {
        Self {
            session: non_blank(session),
            csrf_token: non_blank(csrf_token),
        }
    }

    /// Credential with neither token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// Both tokens present and non-empty.
    pub fn is_complete(&self) -> bool {
        self.session.is_some() && self.csrf_token.is_some()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credential")
            .field("session", &redact(&self.session))
            .field("csrf_token", &redact(&self.csrf_token))
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============ Queries ============

/// Query for a user's full submission list.
///
/// Global reads `offset`, `limit` and `question_slug`; CN additionally
/// forwards `last_key`, `lang` and `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionListQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub question_slug: Option<String>,
    pub last_key: Option<String>,
    pub lang: Option<String>,
    pub status: Option<String>,
}

/// Problem-set search.
///
/// # Default
///
/// `limit = 10`, `offset = 0`, no filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSearchQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Case-insensitive; sent upper-cased.
    pub difficulty: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub search_keywords: Option<String>,
}

impl Default for ProblemSearchQuery {
    fn default() -> Self {
        Self {
            category: None,
            tags: Vec::new(),
            difficulty: None,
            limit: 10,
            offset: 0,
            search_keywords: None,
        }
    }
}

/// Filters for the authenticated user's progress question list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// `ATTEMPTED` or `SOLVED`.
    pub question_status: Option<String>,
    #[serde(default)]
    pub difficulty: Vec<String>,
}

/// Options for listing community solution articles of one problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionArticleQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    /// Site-specific ordering; Global defaults to `HOT`, CN to `DEFAULT`.
    pub order_by: Option<String>,
    pub user_input: Option<String>,
    #[serde(default)]
    pub tag_slugs: Vec<String>,
}

/// Search over the user's notes (CN only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSearchQuery {
    /// e.g. `QUESTION_NOTE`
    pub aggregate_type: String,
    pub keyword: Option<String>,
    /// `ASCENDING` or `DESCENDING`
    pub order_by: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl Default for NoteSearchQuery {
    fn default() -> Self {
        Self {
            aggregate_type: "QUESTION_NOTE".to_string(),
            keyword: None,
            order_by: None,
            limit: None,
            skip: None,
        }
    }
}

/// A note to attach to a target (CN only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub content: String,
    /// e.g. `COMMON_QUESTION`
    pub note_type: String,
    pub target_id: String,
    #[serde(default)]
    pub summary: String,
}

/// Replacement content for an existing note (CN only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub note_id: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
}

// ============ Solution Articles ============

/// One page of solution articles, identical on both sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionArticleList {
    pub total_num: u64,
    pub has_next_page: bool,
    pub articles: Vec<SolutionArticle>,
}

impl SolutionArticleList {
    /// `{totalNum: 0, hasNextPage: false, articles: []}`
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionArticle {
    pub uuid: Option<String>,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    /// Global: the article's numeric topic id. CN: the topic id.
    pub topic_id: Option<String>,
    /// Only set when both the topic id and slug are known.
    pub article_url: Option<String>,
    pub can_see: bool,
    pub author: Option<ArticleAuthor>,
    #[serde(default)]
    pub tags: Vec<ArticleTag>,
    pub created_at: Option<String>,
    pub hit_count: Option<u64>,
    pub upvote_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthor {
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub user_slug: Option<String>,
    pub user_avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleTag {
    pub name: String,
    pub slug: String,
    pub name_translated: Option<String>,
}

/// Full solution article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionArticleDetail {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: Option<String>,
    pub topic_id: Option<String>,
    pub author: Option<ArticleAuthor>,
    #[serde(default)]
    pub tags: Vec<ArticleTag>,
    pub created_at: Option<String>,
    pub hit_count: Option<u64>,
    /// CN only.
    pub question_slug: Option<String>,
    pub prev: Option<ArticleLink>,
    pub next: Option<ArticleLink>,
}

/// Neighbouring article reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleLink {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub topic_id: Option<String>,
}

// ============ Notes ============

/// Notes page. Also the decoded shape of the CN note queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteList {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub user_notes: Vec<UserNote>,
}

impl NoteList {
    /// `{count: 0, userNotes: []}`
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNote {
    #[serde(deserialize_with = "serde_helpers::required_id")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_default")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_question: Option<NoteQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteQuestion {
    pub link_template: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub question_id: Option<String>,
    pub title: Option<String>,
    pub translated_title: Option<String>,
}

/// Outcome of a create or update note mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMutation {
    #[serde(default)]
    pub ok: bool,
    pub note: Option<NoteRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRef {
    #[serde(deserialize_with = "serde_helpers::required_id")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_default")]
    pub content: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_default")]
    pub target_id: String,
}

// ============ Problems & Contests ============

/// Page of problem-set questions. Question entries are passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemList {
    pub total: u64,
    pub has_more: bool,
    pub questions: Vec<Value>,
}

/// Contest rating summary plus per-contest history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    pub user_contest_ranking: Option<Value>,
    pub user_contest_ranking_history: Vec<ContestHistoryEntry>,
}

/// One contest in the ranking history. Fields other than `attended` are
/// kept as returned by the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestHistoryEntry {
    #[serde(default)]
    pub attended: Option<bool>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
