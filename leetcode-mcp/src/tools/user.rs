use std::sync::Arc;

use leetcode_provider::{LeetCodeService, ProgressQuery, SubmissionListQuery};
use serde_json::json;

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ToolDefinition, ToolRegistry,
};
use crate::schemas::{
    AllSubmissionsParams, ContestRankingParams, ProblemProgressParams, RecentSubmissionsParams,
    SubmissionReportParams, UserProfileParams, UserStatusParams,
};

/// Profiles, contest history and submissions.
pub struct UserTools {
    service: Arc<dyn LeetCodeService>,
}

impl UserTools {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }
}

impl RegistrationHooks for UserTools {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_user_profile",
            "Retrieves a user's public profile: ranking, solved counts by difficulty and badges",
            move |params: UserProfileParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_user_profile(&params.username).await,
                        json!({ "username": params.username }),
                        "profile",
                        "Failed to fetch user profile",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_user_contest_ranking",
            "Retrieves a user's contest rating, global ranking and per-contest history",
            move |params: ContestRankingParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service
                            .fetch_user_contest_ranking(&params.username, params.attended)
                            .await,
                        json!({ "username": params.username }),
                        "contestRanking",
                        "Failed to fetch user contest ranking",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_recent_ac_submissions",
            "Retrieves a user's most recent accepted submissions",
            move |params: RecentSubmissionsParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service
                            .fetch_user_recent_ac_submissions(&params.username, params.limit)
                            .await,
                        json!({ "username": params.username }),
                        "submissions",
                        "Failed to fetch recent accepted submissions",
                    )
                }
            },
        ))
    }

    fn register_global(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_recent_submissions",
            "Retrieves a user's most recent submissions of any status",
            move |params: RecentSubmissionsParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service
                            .fetch_user_recent_submissions(&params.username, params.limit)
                            .await,
                        json!({ "username": params.username }),
                        "submissions",
                        "Failed to fetch recent submissions",
                    )
                }
            },
        ))
    }

    fn register_china(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_authenticated_common(
        &self,
        registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_user_status",
            "Retrieves the signed-in user's status: username, premium flag and check-in state",
            move |_: UserStatusParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_user_status().await,
                        json!({}),
                        "status",
                        "Failed to fetch user status",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_problem_submission_report",
            "Retrieves the full report of one submission: code, runtime, memory and test results",
            move |params: SubmissionReportParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service.fetch_user_submission_detail(params.id).await,
                        json!({ "submissionId": params.id }),
                        "submission",
                        "Failed to fetch submission detail",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_problem_progress",
            "Retrieves the signed-in user's attempted and solved questions with pagination",
            move |params: ProblemProgressParams| {
                let service = Arc::clone(&service);
                async move {
                    let query = ProgressQuery {
                        offset: Some(params.offset),
                        limit: Some(params.limit),
                        question_status: params.question_status.map(|s| s.as_str().to_string()),
                        difficulty: params
                            .difficulty
                            .iter()
                            .map(|d| d.as_str().to_string())
                            .collect(),
                    };
                    let echo = json!({
                        "filters": {
                            "questionStatus": query.question_status,
                            "difficulty": query.difficulty,
                        },
                        "pagination": { "offset": params.offset, "limit": params.limit },
                    });
                    Envelope::from_result(
                        service.fetch_user_progress_question_list(&query).await,
                        echo,
                        "questions",
                        "Failed to fetch problem progress",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_all_submissions",
            "Retrieves the signed-in user's submission history, optionally for one problem",
            move |params: AllSubmissionsParams| {
                let service = Arc::clone(&service);
                async move {
                    let query = SubmissionListQuery {
                        offset: Some(params.offset),
                        limit: Some(params.limit),
                        question_slug: params.question_slug,
                        last_key: params.last_key,
                        lang: params.lang,
                        status: params.status,
                    };
                    let echo = json!({
                        "filters": {
                            "questionSlug": query.question_slug,
                            "lang": query.lang,
                            "status": query.status,
                        },
                        "pagination": {
                            "offset": params.offset,
                            "limit": params.limit,
                            "lastKey": query.last_key,
                        },
                    });
                    Envelope::from_result(
                        service.fetch_user_all_submissions(&query).await,
                        echo,
                        "submissions",
                        "Failed to fetch submissions",
                    )
                }
            },
        ))
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

impl ToolRegistry for UserTools {}
