//! Capability-gated registration.
//!
//! Every capability group implements six hooks (common, global, china and
//! their authenticated counterparts). [`registration_plan`] decides which of
//! them run for the configured site and credential, and each hook pushes its
//! definitions into a [`Registrar`].

mod definition;
mod plan;

use std::collections::HashMap;
use std::sync::Arc;

use leetcode_provider::LeetCodeService;

pub use definition::{ResourceDefinition, ResourceRequest, ToolDefinition};
pub use plan::{registration_plan, RegistrationPhase};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),
    #[error("resource '{0}' is already registered")]
    DuplicateResource(String),
}

/// Host surface the hooks register into.
pub trait Registrar {
    fn register_tool(&mut self, tool: ToolDefinition) -> Result<(), RegistrationError>;
    fn register_resource(&mut self, resource: ResourceDefinition)
        -> Result<(), RegistrationError>;
}

/// Everything registered at startup. Immutable once serving begins.
#[derive(Debug, Default)]
pub struct CapabilitySet {
    tools: Vec<ToolDefinition>,
    resources: Vec<ResourceDefinition>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    pub fn tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    pub fn resource_names(&self) -> Vec<&str> {
        self.resources.iter().map(ResourceDefinition::name).collect()
    }

    /// First resource whose URI template matches, with its bindings.
    pub fn resolve_resource(
        &self,
        uri: &str,
    ) -> Option<(&ResourceDefinition, HashMap<String, String>)> {
        self.resources
            .iter()
            .find_map(|r| r.matches(uri).map(|bindings| (r, bindings)))
    }
}

impl Registrar for CapabilitySet {
    fn register_tool(&mut self, tool: ToolDefinition) -> Result<(), RegistrationError> {
        if self.tool(tool.name()).is_some() {
            return Err(RegistrationError::DuplicateTool(tool.name().to_string()));
        }
        tracing::debug!("Registered tool {}", tool.name());
        self.tools.push(tool);
        Ok(())
    }

    fn register_resource(
        &mut self,
        resource: ResourceDefinition,
    ) -> Result<(), RegistrationError> {
        let duplicate = self.resources.iter().any(|r| {
            r.name() == resource.name() || r.uri_template() == resource.uri_template()
        });
        if duplicate {
            return Err(RegistrationError::DuplicateResource(
                resource.name().to_string(),
            ));
        }
        tracing::debug!(
            "Registered resource {} ({})",
            resource.name(),
            resource.uri_template()
        );
        self.resources.push(resource);
        Ok(())
    }
}

/// The six registration hooks every capability group implements.
pub trait RegistrationHooks {
    fn service(&self) -> &Arc<dyn LeetCodeService>;

    fn register_common(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError>;
    fn register_global(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError>;
    fn register_china(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError>;
    fn register_authenticated_common(
        &self,
        registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError>;
    fn register_authenticated_global(
        &self,
        registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError>;
    fn register_authenticated_china(
        &self,
        registrar: &mut dyn Registrar,
    ) -> Result<(), RegistrationError>;
}

/// Runs the hooks selected by [`registration_plan`], in plan order.
fn run_plan<H: RegistrationHooks + ?Sized>(
    hooks: &H,
    kind: &str,
    registrar: &mut dyn Registrar,
) -> Result<(), RegistrationError> {
    let service = hooks.service();
    for phase in registration_plan(service.variant(), service.is_authenticated()) {
        tracing::debug!(?phase, requires_auth = phase.requires_auth(), "Registering {kind}");
        match phase {
            RegistrationPhase::Common => hooks.register_common(registrar)?,
            RegistrationPhase::Global => hooks.register_global(registrar)?,
            RegistrationPhase::China => hooks.register_china(registrar)?,
            RegistrationPhase::AuthenticatedCommon => {
                hooks.register_authenticated_common(registrar)?;
            }
            RegistrationPhase::AuthenticatedGlobal => {
                hooks.register_authenticated_global(registrar)?;
            }
            RegistrationPhase::AuthenticatedChina => {
                hooks.register_authenticated_china(registrar)?;
            }
        }
    }
    Ok(())
}

/// Tool capability group.
pub trait ToolRegistry: RegistrationHooks {
    fn register_tools(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        run_plan(self, "tools", registrar)
    }
}

/// Resource capability group.
pub trait ResourceRegistry: RegistrationHooks {
    fn register_resources(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        run_plan(self, "resources", registrar)
    }
}
