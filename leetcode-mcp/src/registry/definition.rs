//! Registered tool and resource definitions.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use rmcp::model::{AnnotateAble, JsonObject, RawResource, Resource, ResourceTemplate, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::envelope::{Envelope, INVALID_ARGUMENTS};

const JSON_MIME_TYPE: &str = "application/json";

type ToolHandler = Arc<dyn Fn(Option<JsonObject>) -> BoxFuture<'static, Envelope> + Send + Sync>;
type ResourceHandler = Arc<dyn Fn(ResourceRequest) -> BoxFuture<'static, Envelope> + Send + Sync>;

/// JSON schema of `P` as a plain object.
pub fn input_schema<P: JsonSchema>() -> JsonObject {
    match serde_json::to_value(schemars::schema_for!(P)) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    }
}

// ============ Tools ============

/// A named tool: description, input schema and handler.
///
/// Arguments are deserialized into the params type before the handler runs;
/// a mismatch short-circuits to the `Invalid arguments` envelope.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: Arc<JsonObject>,
    handler: ToolHandler,
}

impl ToolDefinition {
    pub fn new<P, F, Fut>(name: &str, description: &str, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Envelope> + Send + 'static,
    {
        let handler: ToolHandler = Arc::new(move |arguments: Option<JsonObject>| {
            let arguments = Value::Object(arguments.unwrap_or_default());
            match serde_json::from_value::<P>(arguments) {
                Ok(params) => handler(params).boxed(),
                Err(e) => {
                    let message = e.to_string();
                    async move { Envelope::failure(INVALID_ARGUMENTS, message) }.boxed()
                }
            }
        });
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: Arc::new(input_schema::<P>()),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &JsonObject {
        &self.input_schema
    }

    pub fn invoke(&self, arguments: Option<JsonObject>) -> BoxFuture<'static, Envelope> {
        (self.handler)(arguments)
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            Arc::clone(&self.input_schema),
        )
    }
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============ URI templates ============

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// Level-1 URI template (`leetcode://solutions/{slug}`).
///
/// Variables match one non-empty path segment and are percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl UriTemplate {
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = raw;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            segments.push(Segment::Variable(rest[open + 1..close].to_string()));
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_fixed(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Variable bindings when `uri` matches, `None` otherwise.
    pub fn matches(&self, uri: &str) -> Option<HashMap<String, String>> {
        let mut bindings = HashMap::new();
        let mut rest = uri;
        let mut segments = self.segments.iter().peekable();
        while let Some(segment) = segments.next() {
            match segment {
                Segment::Literal(literal) => rest = rest.strip_prefix(literal.as_str())?,
                Segment::Variable(name) => {
                    let end = match segments.peek() {
                        Some(Segment::Literal(next)) => rest.find(next.as_str())?,
                        _ => rest.len(),
                    };
                    let value = &rest[..end];
                    if value.is_empty() || value.contains('/') {
                        return None;
                    }
                    let decoded = urlencoding::decode(value).ok()?.into_owned();
                    bindings.insert(name.clone(), decoded);
                    rest = &rest[end..];
                }
            }
        }
        rest.is_empty().then_some(bindings)
    }
}

// ============ Resources ============

/// Resolved resource read.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub uri: String,
    pub variables: HashMap<String, String>,
}

impl ResourceRequest {
    pub fn variable(&self, name: &str) -> &str {
        self.variables.get(name).map_or("", String::as_str)
    }
}

/// A resource at a fixed URI or a URI template.
#[derive(Clone)]
pub struct ResourceDefinition {
    name: String,
    template: UriTemplate,
    description: String,
    handler: ResourceHandler,
}

impl ResourceDefinition {
    pub fn new<F, Fut>(name: &str, uri_template: &str, description: &str, handler: F) -> Self
    where
        F: Fn(ResourceRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Envelope> + Send + 'static,
    {
        Self {
            name: name.to_string(),
            template: UriTemplate::parse(uri_template),
            description: description.to_string(),
            handler: Arc::new(move |request: ResourceRequest| handler(request).boxed()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri_template(&self) -> &str {
        self.template.as_str()
    }

    pub fn is_template(&self) -> bool {
        !self.template.is_fixed()
    }

    pub fn matches(&self, uri: &str) -> Option<HashMap<String, String>> {
        self.template.matches(uri)
    }

    pub fn read(&self, request: ResourceRequest) -> BoxFuture<'static, Envelope> {
        tracing::debug!("Resolving {} as {}", request.uri, self.name);
        (self.handler)(request)
    }

    /// Listing entry for fixed URIs.
    pub fn to_resource(&self) -> Option<Resource> {
        if self.is_template() {
            return None;
        }
        let mut raw = RawResource::new(self.template.as_str(), self.name.clone());
        raw.description = Some(self.description.clone());
        raw.mime_type = Some(JSON_MIME_TYPE.to_string());
        Some(raw.no_annotation())
    }

    /// Listing entry for templated URIs.
    pub fn to_resource_template(&self) -> Option<ResourceTemplate> {
        if !self.is_template() {
            return None;
        }
        let raw = json!({
            "uriTemplate": self.template.as_str(),
            "name": self.name,
            "description": self.description,
            "mimeType": JSON_MIME_TYPE,
        });
        match serde_json::from_value(raw) {
            Ok(template) => Some(template),
            Err(e) => {
                tracing::error!("Invalid resource template {}: {e}", self.template.as_str());
                None
            }
        }
    }
}

impl std::fmt::Debug for ResourceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceDefinition")
            .field("name", &self.name)
            .field("uri_template", &self.template.as_str())
            .finish_non_exhaustive()
    }
}
