use std::sync::Arc;

use leetcode_provider::{LeetCodeService, ProblemSearchQuery};
use serde_json::json;

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ToolDefinition, ToolRegistry,
};
use crate::schemas::{DailyChallengeParams, GetProblemParams, SearchProblemsParams};

/// Problem lookup and search. Identical on both sites.
pub struct ProblemTools {
    service: Arc<dyn LeetCodeService>,
}

impl ProblemTools {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }
}

impl RegistrationHooks for ProblemTools {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_daily_challenge",
            "Retrieves today's LeetCode Daily Challenge problem with its description, constraints and examples",
            move |_: DailyChallengeParams| {
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
        registrar.register_tool(ToolDefinition::new(
            "get_problem",
            "Retrieves the full details of a LeetCode problem: description, examples, constraints, tags and code snippets",
            move |params: GetProblemParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_problem(&params.title_slug).await,
                        json!({ "titleSlug": params.title_slug }),
                        "problem",
                        "Failed to fetch problem",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "search_problems",
            "Searches LeetCode problems by category, tags, difficulty and keywords, with pagination",
            move |params: SearchProblemsParams| {
                let service = Arc::clone(&service);
                async move {
                    let query = ProblemSearchQuery {
                        category: params.category,
                        tags: params.tags,
                        difficulty: params.difficulty.map(|d| d.as_str().to_string()),
                        limit: params.limit,
                        offset: params.offset,
                        search_keywords: params.search_keywords,
                    };
                    let echo = json!({
                        "filters": {
                            "category": query.category,
                            "tags": query.tags,
                            "difficulty": query.difficulty,
                            "searchKeywords": query.search_keywords,
                        },
                        "pagination": { "limit": query.limit, "offset": query.offset },
                    });
                    Envelope::from_result(
                        service.search_problems(&query).await,
                        echo,
                        "problems",
                        "Failed to search problems",
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

impl ToolRegistry for ProblemTools {}
