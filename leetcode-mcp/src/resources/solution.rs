use std::sync::Arc;

use leetcode_provider::LeetCodeService;
use serde_json::{json, Map, Value};

use crate::envelope::Envelope;
use crate::registry::{
    Registrar, RegistrationError, RegistrationHooks, ResourceDefinition, ResourceRegistry,
};

/// Solution article detail by URI.
pub struct SolutionResources {
    service: Arc<dyn LeetCodeService>,
}

impl SolutionResources {
    pub fn new(service: Arc<dyn LeetCodeService>) -> Self {
        Self { service }
    }

    fn article(&self, uri_template: &str, variable: &'static str) -> ResourceDefinition {
        let service = Arc::clone(&self.service);
        ResourceDefinition::new(
            "solution",
            uri_template,
            "Full content of a community solution article",
            move |request| {
                let service = Arc::clone(&service);
                async move {
                    let identifier = request.variable(variable);
                    let mut echo = Map::new();
                    echo.insert(variable.to_string(), json!(identifier));
                    Envelope::from_result(
                        service.fetch_solution_article_detail(identifier).await,
                        Value::Object(echo),
                        "solution",
                        "Failed to fetch solution article detail",
                    )
                }
            },
        )
    }
}

impl RegistrationHooks for SolutionResources {
    fn service(&self) -> &Arc<dyn LeetCodeService> {
        &self.service
    }

    fn register_common(&self, _registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        Ok(())
    }

    fn register_global(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        registrar.register_resource(self.article("leetcode://solutions/{topicId}", "topicId"))
    }

    fn register_china(&self, registrar: &mut dyn Registrar) -> Result<(), RegistrationError> {
        registrar.register_resource(self.article("leetcode://solutions/{slug}", "slug"))
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

impl ResourceRegistry for SolutionResources {}
