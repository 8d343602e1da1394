//! MCP Server implementation for LeetCode.
//!
//! Tools and resources are not fixed at compile time: the capability groups
//! register into a [`CapabilitySet`] once, according to the configured site
//! and whether a session is available, and the handler serves that set.

use std::sync::Arc;

use leetcode_provider::{LeetCodeService, SiteVariant};
use rmcp::{
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListResourceTemplatesResult,
        ListResourcesResult, ListToolsResult, PaginatedRequestParams, ProtocolVersion,
        ReadResourceRequestParams, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use serde_json::json;

use crate::registry::{
    CapabilitySet, RegistrationError, ResourceDefinition, ResourceRegistry, ResourceRequest,
    ToolDefinition, ToolRegistry,
};
use crate::resources::{ProblemResources, SolutionResources};
use crate::tools::{NoteTools, ProblemTools, SolutionTools, UserTools};

const JSON_MIME_TYPE: &str = "application/json";

/// Map an internal error to a generic MCP error.
///
/// Logs the full error to stderr but returns a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(
        format!("{context} failed - check server logs for details"),
        None,
    )
}

fn json_contents(uri: &str, text: String) -> Result<ResourceContents, McpError> {
    serde_json::from_value(json!({
        "uri": uri,
        "mimeType": JSON_MIME_TYPE,
        "text": text,
    }))
    .map_err(|e| sanitize_internal_error(e, "Build resource contents"))
}

/// MCP Server for LeetCode.
#[derive(Clone)]
pub struct LeetCodeMcp {
    /// Site the service talks to.
    variant: SiteVariant,
    /// Authentication snapshot taken at registration time.
    authenticated: bool,
    /// Registered tools and resources.
    capabilities: Arc<CapabilitySet>,
}

impl LeetCodeMcp {
    /// Register every capability group against `service`.
    pub fn new(service: &Arc<dyn LeetCodeService>) -> Result<Self, RegistrationError> {
        let mut capabilities = CapabilitySet::new();

        let tool_groups: [Box<dyn ToolRegistry>; 4] = [
            Box::new(ProblemTools::new(Arc::clone(service))),
            Box::new(UserTools::new(Arc::clone(service))),
            Box::new(SolutionTools::new(Arc::clone(service))),
            Box::new(NoteTools::new(Arc::clone(service))),
        ];
        for group in &tool_groups {
            group.register_tools(&mut capabilities)?;
        }

        let resource_groups: [Box<dyn ResourceRegistry>; 2] = [
            Box::new(ProblemResources::new(Arc::clone(service))),
            Box::new(SolutionResources::new(Arc::clone(service))),
        ];
        for group in &resource_groups {
            group.register_resources(&mut capabilities)?;
        }

        Ok(Self {
            variant: service.variant(),
            authenticated: service.is_authenticated(),
            capabilities: Arc::new(capabilities),
        })
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    fn instructions(&self) -> String {
        let access = if self.authenticated {
            "Signed in: account tools (status, submissions, progress) are available"
        } else {
            "Anonymous: only public data is available; set LEETCODE_SESSION and LEETCODE_CSRF_TOKEN to unlock account tools"
        };
        let notes = match (self.variant, self.authenticated) {
            (SiteVariant::China, true) => " Notes can be searched, read, created and updated.",
            _ => "",
        };
        format!(
            "LeetCode MCP Server connected to {}. {access}.{notes} \
             Start with get_daily_challenge or search_problems, then get_problem for details \
             and list_problem_solutions / get_problem_solution for community solutions. \
             Reference lists of categories, tags and languages are exposed as resources.",
            self.variant.display_name()
        )
    }
}

impl ServerHandler for LeetCodeMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(self.instructions()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(
            self.capabilities
                .tools()
                .iter()
                .map(ToolDefinition::to_tool)
                .collect(),
        ))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let Some(tool) = self.capabilities.tool(&request.name) else {
            return Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ));
        };
        tracing::debug!("Calling tool {}", tool.name());
        let envelope = tool.invoke(request.arguments).await;
        Ok(envelope.into_call_tool_result())
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            self.capabilities
                .resources()
                .iter()
                .filter_map(ResourceDefinition::to_resource)
                .collect(),
        ))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.capabilities
                .resources()
                .iter()
                .filter_map(ResourceDefinition::to_resource_template)
                .collect(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let uri = request.uri;
        let Some((resource, variables)) = self.capabilities.resolve_resource(&uri) else {
            return Err(McpError::resource_not_found(
                format!("Unknown resource: {uri}"),
                None,
            ));
        };
        tracing::debug!("Reading resource {} ({uri})", resource.name());
        let envelope = resource
            .read(ResourceRequest {
                uri: uri.clone(),
                variables,
            })
            .await;
        Ok(ReadResourceResult {
            contents: vec![json_contents(&uri, envelope.to_text())?],
        })
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
