use std::collections::HashSet;

use anyhow::anyhow;

use crate::{StdResult, TickAuthorizer};

/// An authorizer backed by a static set of granted job templates.
pub struct StaticAuthorizer {
    granted_templates: Option<HashSet<String>>,
}

impl StaticAuthorizer {
    /// Creates an authorizer granting the given job templates only.
    pub fn new(granted_templates: &[&str]) -> Self {
        Self {
            granted_templates: Some(
                granted_templates
                    .iter()
                    .map(|template_id| template_id.to_string())
                    .collect(),
            ),
        }
    }

    /// Creates an authorizer granting every job template.
    pub fn allow_all() -> Self {
        Self {
            granted_templates: None,
        }
    }
}

#[async_trait::async_trait]
impl TickAuthorizer for StaticAuthorizer {
    async fn authorize(&self, template_id: &str) -> StdResult<()> {
        match &self.granted_templates {
            Some(granted) if !granted.contains(template_id) => Err(anyhow!(
                "Privileged execution denied for job template: {template_id}"
            )),
            _ => Ok(()),
        }
    }
}
