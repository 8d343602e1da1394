use std::sync::Arc;

use leetcode_provider::{LeetCodeService, SolutionArticleQuery};
use serde_json::json;

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ToolDefinition, ToolRegistry,
};
use crate::schemas::{
    ChinaSolutionListParams, ChinaSolutionParams, GlobalSolutionListParams, GlobalSolutionParams,
};

const LIST_DESCRIPTION: &str = "Lists community solution articles for a problem with author, tags and vote counts. \
Only metadata is returned; use get_problem_solution for the article body";

/// Community solution articles.
///
/// Both sites register the same tool names, but ordering values and the
/// article identifier differ (`topicId` on leetcode.com, `slug` on leetcode.cn).
pub struct SolutionTools {
    service: Arc<dyn LeetCodeService>,
}

impl SolutionTools {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }
}

async fn list_solutions(
    service: Arc<dyn LeetCodeService>,
    question_slug: String,
    query: SolutionArticleQuery,
) -> Envelope {
    Envelope::from_result(
        service
            .fetch_question_solution_articles(&question_slug, &query)
            .await,
        json!({ "questionSlug": question_slug }),
        "solutionArticles",
        "Failed to fetch solution articles",
    )
}

impl RegistrationHooks for SolutionTools {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_global(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "list_problem_solutions",
            LIST_DESCRIPTION,
            move |params: GlobalSolutionListParams| {
                let query = SolutionArticleQuery {
                    limit: Some(params.limit),
                    skip: Some(params.skip),
                    order_by: params.order_by.map(|o| o.as_str().to_string()),
                    user_input: params.user_input,
                    tag_slugs: params.tag_slugs,
                };
                list_solutions(Arc::clone(&service), params.question_slug, query)
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_problem_solution",
            "Retrieves the full content of a solution article by its topicId, with author, tags and neighbouring articles",
            move |params: GlobalSolutionParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_solution_article_detail(&params.topic_id).await,
                        json!({ "topicId": params.topic_id }),
                        "solution",
                        "Failed to fetch solution article detail",
                    )
                }
            },
        ))
    }

    fn register_china(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "list_problem_solutions",
            LIST_DESCRIPTION,
            move |params: ChinaSolutionListParams| {
                let query = SolutionArticleQuery {
                    limit: Some(params.limit),
                    skip: Some(params.skip),
                    order_by: params.order_by.map(|o| o.as_str().to_string()),
                    user_input: params.user_input,
                    tag_slugs: params.tag_slugs,
                };
                list_solutions(Arc::clone(&service), params.question_slug, query)
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_problem_solution",
            "Retrieves the full content of a solution article by its slug, with author, tags and neighbouring articles",
            move |params: ChinaSolutionParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_solution_article_detail(&params.slug).await,
                        json!({ "slug": params.slug }),
                        "solution",
                        "Failed to fetch solution article detail",
                    )
                }
            },
        ))
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

impl ToolRegistry for SolutionTools {}
