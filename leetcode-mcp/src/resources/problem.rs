use std::sync::Arc;

use leetcode_provider::LeetCodeService;
use serde_json::json;

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ResourceDefinition, ResourceRegistry,
};

/// Problem-set categories accepted by `search_problems`.
pub const PROBLEM_CATEGORIES: &[&str] = &[
    "all-code-essentials",
    "algorithms",
    "database",
    "pandas",
    "javascript",
    "shell",
    "concurrency",
];

/// Topic tag slugs accepted by `search_problems`.
pub const PROBLEM_TAGS: &[&str] = &[
    "array",
    "string",
    "hash-table",
    "dynamic-programming",
    "math",
    "sorting",
    "greedy",
    "depth-first-search",
    "binary-search",
    "database",
    "matrix",
    "tree",
    "breadth-first-search",
    "bit-manipulation",
    "two-pointers",
    "prefix-sum",
    "heap-priority-queue",
    "simulation",
    "binary-tree",
    "graph",
    "stack",
    "counting",
    "sliding-window",
    "design",
    "enumeration",
    "backtracking",
    "union-find",
    "linked-list",
    "number-theory",
    "ordered-set",
    "monotonic-stack",
    "segment-tree",
    "trie",
    "combinatorics",
    "bitmask",
    "divide-and-conquer",
    "queue",
    "recursion",
    "geometry",
    "binary-indexed-tree",
    "memoization",
    "hash-function",
    "binary-search-tree",
    "shortest-path",
    "string-matching",
    "topological-sort",
    "rolling-hash",
    "game-theory",
    "interactive",
    "data-stream",
    "monotonic-queue",
    "brainteaser",
    "doubly-linked-list",
    "randomized",
    "merge-sort",
    "counting-sort",
    "iterator",
    "concurrency",
    "probability-and-statistics",
    "quickselect",
    "suffix-array",
    "line-sweep",
    "minimum-spanning-tree",
    "bucket-sort",
    "shell",
    "reservoir-sampling",
    "strongly-connected-component",
    "eulerian-circuit",
    "radix-sort",
    "rejection-sampling",
    "biconnected-component",
];

/// Language slugs LeetCode accepts for submissions.
pub const PROBLEM_LANGS: &[&str] = &[
    "cpp",
    "java",
    "python",
    "python3",
    "c",
    "csharp",
    "javascript",
    "typescript",
    "php",
    "swift",
    "kotlin",
    "dart",
    "golang",
    "ruby",
    "scala",
    "rust",
    "racket",
    "erlang",
    "elixir",
    "mysql",
    "mssql",
    "oraclesql",
    "postgresql",
    "pythondata",
    "bash",
];

/// Reference lists plus daily challenge and problem detail.
pub struct ProblemResources {
    service: Arc<dyn LeetCodeService>,
}

impl ProblemResources {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }
}

fn static_list(
    name: &str,
    uri: &str,
    description: &str,
    field: &'static str,
    values: &'static [&'static str],
) -> ResourceDefinition {
    ResourceDefinition::new(name, uri, description, move |_| async move {
        Envelope::success(json!({}), field, values)
    })
}

impl RegistrationHooks for ProblemResources {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        registrar.register_resource(static_list(
            "problem-categories",
            "leetcode://problems/categories/all",
            "All problem-set categories (algorithms, database, shell, ...) usable as the category filter of search_problems",
            "categories",
            PROBLEM_CATEGORIES,
        ))?;
        registrar.register_resource(static_list(
            "problem-tags",
            "leetcode://problems/tags/all",
            "All algorithm and data-structure tag slugs usable as the tags filter of search_problems",
            "tags",
            PROBLEM_TAGS,
        ))?;
        registrar.register_resource(static_list(
            "problem-langs",
            "leetcode://problems/langs/all",
            "All programming languages LeetCode accepts for submissions",
            "langs",
            PROBLEM_LANGS,
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_resource(ResourceDefinition::new(
            "daily-challenge",
            "leetcode://daily-challenge",
            "Today's LeetCode Daily Challenge problem",
            move |_| {
                let service = Arc::clone(&service);
                async move {
                    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
                    Envelope::from_result(
                        service.fetch_daily_challenge().await,
                        json!({ "date": date }),
                        "problem",
                        "Failed to fetch daily challenge",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_resource(ResourceDefinition::new(
            "problem-detail",
            "leetcode://problems/{titleSlug}",
            "Full details of a problem identified by its URL slug",
            move |request| {
                let service = Arc::clone(&service);
                async move {
                    let title_slug = request.variable("titleSlug");
                    Envelope::from_result(
                        service.fetch_problem(title_slug).await,
                        json!({ "titleSlug": title_slug }),
                        "problem",
                        "Failed to fetch problem",
                    )
                }
            },
        ))
    }

    fn register_global(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_china(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_authenticated_common(
        &self,
        _registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_authenticated_global(
        &self,
        _registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_authenticated_china(
        &self,
        _registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError> {
        Ok(())
    }
}

impl ResourceRegistry for ProblemResources {}
