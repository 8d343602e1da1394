//! MCP tool parameter schemas
//!
//! Input structures for every tool. Field names follow LeetCode's camelCase
//! vocabulary; defaults are applied during deserialization so handlers see
//! fully populated values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_search_limit() -> u32 {
    10
}

const fn default_submission_limit() -> u32 {
    20
}

const fn default_progress_limit() -> u32 {
    100
}

const fn default_solution_limit() -> u32 {
    20
}

const fn default_note_limit() -> u32 {
    10
}

const fn default_true() -> bool {
    true
}

// ============ Enumerations ============

/// Problem difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "Easy")]
    Easy,
    #[serde(alias = "medium", alias = "Medium")]
    Medium,
    #[serde(alias = "hard", alias = "Hard")]
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

/// Progress status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionStatus {
    Attempted,
    Solved,
}

impl QuestionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attempted => "ATTEMPTED",
            Self::Solved => "SOLVED",
        }
    }
}

/// Solution ordering on leetcode.com.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalSolutionOrder {
    Hot,
    MostRecent,
    MostVotes,
}

impl GlobalSolutionOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "HOT",
            Self::MostRecent => "MOST_RECENT",
            Self::MostVotes => "MOST_VOTES",
        }
    }
}

/// Solution ordering on leetcode.cn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChinaSolutionOrder {
    Default,
    MostUpvote,
    Hot,
    NewestToOldest,
    OldestToNewest,
}

impl ChinaSolutionOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::MostUpvote => "MOST_UPVOTE",
            Self::Hot => "HOT",
            Self::NewestToOldest => "NEWEST_TO_OLDEST",
            Self::OldestToNewest => "OLDEST_TO_NEWEST",
        }
    }
}

/// Note ordering by update time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoteOrder {
    Ascending,
    #[default]
    Descending,
}

impl NoteOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

// ============ Problem tools ============

/// Parameters for `get_daily_challenge` tool.
///
/// Takes no parameters, the empty struct still yields an object schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DailyChallengeParams {}

/// Parameters for `get_problem` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProblemParams {
    /// URL slug of the problem.
    #[schemars(
        description = "The URL slug of the problem as it appears in the LeetCode URL (e.g., 'two-sum')"
    )]
    pub title_slug: String,
}

/// Parameters for `search_problems` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchProblemsParams {
    #[schemars(
        description = "Problem category filter (e.g., 'algorithms', 'database', 'shell'); see leetcode://problems/categories/all"
    )]
    pub category: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Topic tags to filter by (e.g., ['array', 'dynamic-programming']); see leetcode://problems/tags/all"
    )]
    pub tags: Vec<String>,

    #[schemars(description = "Only return problems of this difficulty")]
    pub difficulty: Option<Difficulty>,

    #[schemars(description = "Keywords matched against problem titles")]
    pub search_keywords: Option<String>,

    #[serde(default = "default_search_limit")]
    #[schemars(description = "Maximum number of problems to return (default: 10)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of problems to skip (default: 0)")]
    pub offset: u32,
}

// ============ User tools ============

/// Parameters for `get_user_profile` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserProfileParams {
    #[schemars(description = "LeetCode username")]
    pub username: String,
}

/// Parameters for `get_user_contest_ranking` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContestRankingParams {
    #[schemars(description = "LeetCode username")]
    pub username: String,

    #[serde(default = "default_true")]
    #[schemars(
        description = "Only include contests the user actually took part in (default: true)"
    )]
    pub attended: bool,
}

/// Parameters for `get_recent_submissions` and `get_recent_ac_submissions` tools.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecentSubmissionsParams {
    #[schemars(description = "LeetCode username")]
    pub username: String,

    #[schemars(description = "Maximum number of submissions to return (ignored on leetcode.cn)")]
    pub limit: Option<u32>,
}

/// Parameters for `get_user_status` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserStatusParams {}

/// Parameters for `get_problem_submission_report` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SubmissionReportParams {
    #[schemars(description = "Numeric submission ID, as returned by the submission list tools")]
    pub id: u64,
}

/// Parameters for `get_problem_progress` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemProgressParams {
    #[serde(default)]
    #[schemars(description = "Number of questions to skip (default: 0)")]
    pub offset: u32,

    #[serde(default = "default_progress_limit")]
    #[schemars(description = "Maximum number of questions to return (default: 100)")]
    pub limit: u32,

    #[schemars(description = "Only return questions in this status")]
    pub question_status: Option<QuestionStatus>,

    #[serde(default)]
    #[schemars(description = "Only return questions of these difficulties")]
    pub difficulty: Vec<Difficulty>,
}

/// Parameters for `get_all_submissions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllSubmissionsParams {
    #[serde(default = "default_submission_limit")]
    #[schemars(description = "Maximum number of submissions to return (default: 20)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of submissions to skip (default: 0)")]
    pub offset: u32,

    #[schemars(description = "Only return submissions for this problem slug")]
    pub question_slug: Option<String>,

    #[schemars(description = "Pagination cursor from a previous page")]
    pub last_key: Option<String>,

    #[schemars(description = "Programming language filter (leetcode.cn only)")]
    pub lang: Option<String>,

    #[schemars(description = "Submission status filter such as AC or WA (leetcode.cn only)")]
    pub status: Option<String>,
}

// ============ Solution tools ============

/// Parameters for `list_problem_solutions` on leetcode.com.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSolutionListParams {
    #[schemars(description = "URL slug of the problem (e.g., 'two-sum')")]
    pub question_slug: String,

    #[serde(default = "default_solution_limit")]
    #[schemars(description = "Maximum number of articles to return (default: 20)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of articles to skip (default: 0)")]
    pub skip: u32,

    #[schemars(description = "Sort order (default: HOT)")]
    pub order_by: Option<GlobalSolutionOrder>,

    #[schemars(description = "Free-text filter over titles and content")]
    pub user_input: Option<String>,

    #[serde(default)]
    #[schemars(description = "Language or topic tag slugs (e.g., ['python', 'hash-table'])")]
    pub tag_slugs: Vec<String>,
}

/// Parameters for `list_problem_solutions` on leetcode.cn.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChinaSolutionListParams {
    #[schemars(description = "URL slug of the problem (e.g., 'two-sum')")]
    pub question_slug: String,

    #[serde(default = "default_solution_limit")]
    #[schemars(description = "Maximum number of articles to return (default: 20)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of articles to skip (default: 0)")]
    pub skip: u32,

    #[schemars(description = "Sort order (default: DEFAULT)")]
    pub order_by: Option<ChinaSolutionOrder>,

    #[schemars(description = "Free-text filter over titles and content")]
    pub user_input: Option<String>,

    #[serde(default)]
    #[schemars(description = "Language or topic tag slugs (e.g., ['python3', 'hash-table'])")]
    pub tag_slugs: Vec<String>,
}

/// Parameters for `get_problem_solution` on leetcode.com.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSolutionParams {
    #[schemars(description = "Topic ID of the article, from the topicId field of list_problem_solutions")]
    pub topic_id: String,
}

/// Parameters for `get_problem_solution` on leetcode.cn.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChinaSolutionParams {
    #[schemars(description = "Slug of the article, from the slug field of list_problem_solutions")]
    pub slug: String,
}

// ============ Note tools ============

/// Parameters for `search_notes` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchNotesParams {
    #[schemars(description = "Keyword matched against note content and problem titles")]
    pub keyword: Option<String>,

    #[serde(default = "default_note_limit")]
    #[schemars(description = "Maximum number of notes to return (default: 10)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of notes to skip (default: 0)")]
    pub skip: u32,

    #[serde(default)]
    #[schemars(description = "Sort by update time (default: DESCENDING)")]
    pub order_by: NoteOrder,
}

/// Parameters for `get_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNoteParams {
    #[schemars(description = "Question ID (the numeric frontend ID, as a string)")]
    pub question_id: String,

    #[serde(default = "default_note_limit")]
    #[schemars(description = "Maximum number of notes to return (default: 10)")]
    pub limit: u32,

    #[serde(default)]
    #[schemars(description = "Number of notes to skip (default: 0)")]
    pub skip: u32,
}

/// Parameters for `create_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteParams {
    #[schemars(description = "Question ID the note is attached to")]
    pub question_id: String,

    #[schemars(description = "Note body (Markdown)")]
    pub content: String,

    #[schemars(description = "Optional short summary")]
    pub summary: Option<String>,
}

/// Parameters for `update_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteParams {
    #[schemars(description = "ID of the note to update")]
    pub note_id: String,

    #[schemars(description = "Replacement note body (Markdown)")]
    pub content: String,

    #[schemars(description = "Optional replacement summary")]
    pub summary: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use schemars::schema_for;

    fn required_of(schema: &schemars::Schema) -> Vec<String> {
        serde_json::to_value(schema)
            .unwrap()
            .get("required")
            .and_then(serde_json::Value::as_array)
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn search_defaults() {
        let params: SearchProblemsParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 0);
        assert!(params.tags.is_empty());
        assert!(params.difficulty.is_none());
    }

    #[test]
    fn difficulty_accepts_lowercase() {
        let params: SearchProblemsParams =
            serde_json::from_value(serde_json::json!({"difficulty": "easy"})).unwrap();
        assert_eq!(params.difficulty.map(Difficulty::as_str), Some("EASY"));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let result: serde_json::Result<SearchProblemsParams> =
            serde_json::from_value(serde_json::json!({"difficulty": "TRIVIAL"}));
        assert!(result.is_err());
    }

    #[test]
    fn pagination_defaults_per_tool() {
        let submissions: AllSubmissionsParams =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!((submissions.limit, submissions.offset), (20, 0));

        let progress: ProblemProgressParams =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!((progress.limit, progress.offset), (100, 0));

        let solutions: GlobalSolutionListParams =
            serde_json::from_value(serde_json::json!({"questionSlug": "two-sum"})).unwrap();
        assert_eq!((solutions.limit, solutions.skip), (20, 0));

        let notes: SearchNotesParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!((notes.limit, notes.skip), (10, 0));
        assert_eq!(notes.order_by, NoteOrder::Descending);
    }

    #[test]
    fn contest_ranking_defaults_to_attended_only() {
        let params: ContestRankingParams =
            serde_json::from_value(serde_json::json!({"username": "alice"})).unwrap();
        assert!(params.attended);
    }

    #[test]
    fn solution_orders_differ_per_site() {
        let global: serde_json::Result<GlobalSolutionListParams> = serde_json::from_value(
            serde_json::json!({"questionSlug": "two-sum", "orderBy": "MOST_UPVOTE"}),
        );
        assert!(global.is_err());

        let china: ChinaSolutionListParams = serde_json::from_value(
            serde_json::json!({"questionSlug": "two-sum", "orderBy": "MOST_UPVOTE"}),
        )
        .unwrap();
        assert_eq!(china.order_by, Some(ChinaSolutionOrder::MostUpvote));
    }

    #[test]
    fn schema_marks_required_fields() {
        let required = required_of(&schema_for!(GlobalSolutionListParams));
        assert_eq!(required, vec!["questionSlug".to_string()]);

        let required = required_of(&schema_for!(CreateNoteParams));
        assert!(required.contains(&"questionId".to_string()));
        assert!(required.contains(&"content".to_string()));
        assert!(!required.contains(&"summary".to_string()));
    }

    #[test]
    fn empty_params_accept_empty_object() {
        let _: DailyChallengeParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _: UserStatusParams = serde_json::from_value(serde_json::json!({})).unwrap();
    }
}
