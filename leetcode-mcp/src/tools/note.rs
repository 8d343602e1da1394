use std::sync::Arc;

use leetcode_provider::{LeetCodeService, NewNote, NoteSearchQuery, NoteUpdate};
use serde_json::json;

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ToolDefinition, ToolRegistry,
};
use crate::schemas::{CreateNoteParams, GetNoteParams, SearchNotesParams, UpdateNoteParams};

const QUESTION_NOTE_AGGREGATE: &str = "QUESTION_NOTE";
const QUESTION_NOTE_TYPE: &str = "COMMON_QUESTION";

/// Personal notes. leetcode.cn only, and only with a signed-in session.
pub struct NoteTools {
    service: Arc<dyn LeetCodeService>,
}

impl NoteTools {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }
}

impl RegistrationHooks for NoteTools {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
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
        registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError> {
        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "search_notes",
            "Searches the signed-in user's notes by keyword, newest first by default",
            move |params: SearchNotesParams| {
                let service = Arc::clone(&service);
                async move {
                    let query = NoteSearchQuery {
                        aggregate_type: QUESTION_NOTE_AGGREGATE.to_string(),
                        keyword: params.keyword,
                        order_by: Some(params.order_by.as_str().to_string()),
                        limit: Some(params.limit),
                        skip: Some(params.skip),
                    };
                    let echo = json!({
                        "filters": { "keyword": query.keyword, "orderBy": query.order_by },
                        "pagination": { "limit": params.limit, "skip": params.skip },
                    });
                    Envelope::from_result(
                        service.fetch_user_notes(&query).await,
                        echo,
                        "notes",
                        "Failed to search notes",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "get_note",
            "Retrieves the signed-in user's notes attached to one question",
            move |params: GetNoteParams| {
                let service = Arc::clone(&service);
                async move {
                    Envelope::from_result(
                        service
                            .fetch_notes_by_question_id(
                                &params.question_id,
                                Some(params.limit),
                                Some(params.skip),
                            )
                            .await,
                        json!({
                            "questionId": params.question_id,
                            "pagination": { "limit": params.limit, "skip": params.skip },
                        }),
                        "notes",
                        "Failed to fetch notes",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "create_note",
            "Creates a note on a question for the signed-in user",
            move |params: CreateNoteParams| {
                let service = Arc::clone(&service);
                async move {
                    let note = NewNote {
                        content: params.content,
                        note_type: QUESTION_NOTE_TYPE.to_string(),
                        target_id: params.question_id,
                        summary: params.summary.unwrap_or_default(),
                    };
                    Envelope::from_result(
                        service.create_user_note(&note).await,
                        json!({ "questionId": note.target_id }),
                        "note",
                        "Failed to create note",
                    )
                }
            },
        ))?;

        let service = Arc::clone(&self.service);
        registrar.register_tool(ToolDefinition::new(
            "update_note",
            "Replaces the content of one of the signed-in user's notes",
            move |params: UpdateNoteParams| {
                let service = Arc::clone(&service);
                async move {
                    let update = NoteUpdate {
                        note_id: params.note_id,
                        content: params.content,
                        summary: params.summary.unwrap_or_default(),
                    };
                    Envelope::from_result(
                        service.update_user_note(&update).await,
                        json!({ "noteId": update.note_id }),
                        "note",
                        "Failed to update note",
                    )
                }
            },
        ))
    }
}

impl ToolRegistry for NoteTools {}
